//! Adapters from host events to objectives.

use crate::bosses::BossId;
use crate::events::{EventBus, HostEvent};
use crate::ids::{Character, LevelStage, StageType};
use crate::objective::{CharacterObjectiveKind, Objective};

const LAZARUS_2: u8 = 11;
const DARK_JUDAS: u8 = 12;
const SOUL: u8 = 17;
const ESAU: u8 = 20;
const LAZARUS_2_B: u8 = 38;
const SOUL_B: u8 = 40;

/// Maps transformed and secondary player types onto the main character
/// that owns their objectives.
pub fn adjusted_character(player_type: u8) -> Option<Character> {
    let main = match player_type {
        LAZARUS_2 => Character::Lazarus,
        LAZARUS_2_B => Character::LazarusB,
        SOUL => Character::Forgotten,
        SOUL_B => Character::ForgottenB,
        ESAU => Character::Jacob,
        DARK_JUDAS => Character::Judas,
        other => return Character::from_player_type(other),
    };
    Some(main)
}

fn boss_objective_kind(boss: BossId) -> Option<CharacterObjectiveKind> {
    use CharacterObjectiveKind as K;

    let kind = match boss {
        BossId::Mom => K::Mom,
        BossId::ItLives => K::ItLives,
        BossId::Isaac => K::Isaac,
        BossId::BlueBaby => K::BlueBaby,
        BossId::Satan => K::Satan,
        BossId::Lamb => K::Lamb,
        BossId::MegaSatan => K::MegaSatan,
        BossId::Hush => K::Hush,
        BossId::Delirium => K::Delirium,
        BossId::Mother => K::Mother,
        BossId::UltraGreedier => K::UltraGreed,
        _ => return None,
    };
    Some(kind)
}

pub fn no_hit_floor_kind(stage: LevelStage, stage_type: StageType) -> Option<CharacterObjectiveKind> {
    use CharacterObjectiveKind as K;

    let kind = if stage_type.is_repentance() {
        match stage {
            LevelStage::Basement1 => K::NoHitDownpour1,
            LevelStage::Basement2 => K::NoHitDownpour2,
            LevelStage::Caves1 => K::NoHitMines1,
            LevelStage::Caves2 => K::NoHitMines2,
            LevelStage::Depths1 => K::NoHitMausoleum1,
            LevelStage::Depths2 => K::NoHitMausoleum2,
            LevelStage::Womb1 => K::NoHitCorpse1,
            LevelStage::Womb2 => K::NoHitCorpse2,
            _ => return None,
        }
    } else {
        match stage {
            LevelStage::Basement1 => K::NoHitBasement1,
            LevelStage::Basement2 => K::NoHitBasement2,
            LevelStage::Caves1 => K::NoHitCaves1,
            LevelStage::Caves2 => K::NoHitCaves2,
            LevelStage::Depths1 => K::NoHitDepths1,
            LevelStage::Depths2 => K::NoHitDepths2,
            LevelStage::Womb1 => K::NoHitWomb1,
            LevelStage::Womb2 => K::NoHitWomb2,
            LevelStage::SheolCathedral => K::NoHitSheolCathedral,
            LevelStage::DarkRoomChest => K::NoHitDarkRoomChest,
            _ => return None,
        }
    };
    Some(kind)
}

fn character_objective(player_type: u8, kind: CharacterObjectiveKind) -> Option<Objective> {
    adjusted_character(player_type).map(|character| Objective::character(character, kind))
}

pub fn detect_boss_kill(event: &HostEvent) -> Option<Objective> {
    let HostEvent::BossRoomCleared {
        player_type,
        boss,
        stage_type,
        is_last_boss_room,
    } = *event
    else {
        return None;
    };

    let boss = if stage_type.is_repentance() && boss == BossId::MausoleumMom {
        BossId::Mom
    } else {
        boss
    };

    // XL floors have two boss rooms. Mother and Delirium report a room
    // other than the last one.
    if !is_last_boss_room && boss != BossId::Mother && boss != BossId::Delirium {
        return None;
    }

    character_objective(player_type, boss_objective_kind(boss)?)
}

pub fn detect_special_room(event: &HostEvent) -> Option<Objective> {
    match *event {
        HostEvent::MegaSatanCleared { player_type } => {
            character_objective(player_type, CharacterObjectiveKind::MegaSatan)
        }
        HostEvent::BeastDefeated { player_type } => {
            character_objective(player_type, CharacterObjectiveKind::Beast)
        }
        HostEvent::BossRushCleared { player_type } => {
            character_objective(player_type, CharacterObjectiveKind::BossRush)
        }
        _ => None,
    }
}

pub fn detect_no_hit_floor(event: &HostEvent) -> Option<Objective> {
    let HostEvent::FloorCleared {
        player_type,
        stage,
        stage_type,
        took_hit,
        challenge,
    } = *event
    else {
        return None;
    };

    // Floor objectives do not count inside challenges.
    if took_hit || challenge.is_some() {
        return None;
    }

    character_objective(player_type, no_hit_floor_kind(stage, stage_type)?)
}

pub fn detect_boss_no_hit(event: &HostEvent) -> Option<Objective> {
    match *event {
        HostEvent::BossNoHitTimer {
            boss,
            seconds_without_hit,
        } if seconds_without_hit >= boss.no_hit_seconds() => Some(Objective::Boss { boss }),
        _ => None,
    }
}

pub fn detect_challenge(event: &HostEvent) -> Option<Objective> {
    match *event {
        HostEvent::ChallengeCompleted { challenge } => Some(Objective::Challenge { challenge }),
        _ => None,
    }
}

/// A bus with every detection adapter subscribed.
pub fn default_event_bus() -> EventBus {
    let mut bus = EventBus::new();
    bus.subscribe("boss kill", detect_boss_kill);
    bus.subscribe("special room", detect_special_room);
    bus.subscribe("no hit floor", detect_no_hit_floor);
    bus.subscribe("boss no hit", detect_boss_no_hit);
    bus.subscribe("challenge", detect_challenge);
    bus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::Challenge;

    #[test]
    fn secondary_forms_count_for_the_main_character() {
        assert_eq!(adjusted_character(ESAU), Some(Character::Jacob));
        assert_eq!(adjusted_character(SOUL_B), Some(Character::ForgottenB));
        assert_eq!(adjusted_character(DARK_JUDAS), Some(Character::Judas));
        assert_eq!(adjusted_character(3), Some(Character::Judas));
        assert_eq!(adjusted_character(39), None);
    }

    #[test]
    fn mausoleum_mom_counts_as_mom() {
        let event = HostEvent::BossRoomCleared {
            player_type: 0,
            boss: BossId::MausoleumMom,
            stage_type: StageType::RepentanceA,
            is_last_boss_room: true,
        };
        assert_eq!(
            detect_boss_kill(&event),
            Some(Objective::character(Character::Isaac, CharacterObjectiveKind::Mom))
        );
    }

    #[test]
    fn xl_first_boss_room_is_ignored() {
        let event = HostEvent::BossRoomCleared {
            player_type: 0,
            boss: BossId::Mom,
            stage_type: StageType::Original,
            is_last_boss_room: false,
        };
        assert_eq!(detect_boss_kill(&event), None);

        let event = HostEvent::BossRoomCleared {
            player_type: 0,
            boss: BossId::Mother,
            stage_type: StageType::RepentanceA,
            is_last_boss_room: false,
        };
        assert!(detect_boss_kill(&event).is_some());
    }

    #[test]
    fn floor_objectives() {
        let clean = HostEvent::FloorCleared {
            player_type: 2,
            stage: LevelStage::Caves2,
            stage_type: StageType::RepentanceB,
            took_hit: false,
            challenge: None,
        };
        assert_eq!(
            detect_no_hit_floor(&clean),
            Some(Objective::character(Character::Cain, CharacterObjectiveKind::NoHitMines2))
        );

        let in_challenge = HostEvent::FloorCleared {
            player_type: 2,
            stage: LevelStage::Caves2,
            stage_type: StageType::Original,
            took_hit: false,
            challenge: Some(Challenge::Purist),
        };
        assert_eq!(detect_no_hit_floor(&in_challenge), None);
    }

    #[test]
    fn boss_timer_needs_the_full_budget() {
        let short = HostEvent::BossNoHitTimer {
            boss: BossId::Monstro,
            seconds_without_hit: BossId::Monstro.no_hit_seconds() - 1,
        };
        assert_eq!(detect_boss_no_hit(&short), None);
        let full = HostEvent::BossNoHitTimer {
            boss: BossId::Monstro,
            seconds_without_hit: BossId::Monstro.no_hit_seconds(),
        };
        assert_eq!(
            detect_boss_no_hit(&full),
            Some(Objective::Boss {
                boss: BossId::Monstro
            })
        );
    }

    #[test]
    fn default_bus_has_every_adapter() {
        assert_eq!(default_event_bus().len(), 5);
    }
}
