use std::collections::HashSet;

use crate::bosses::{
    boss_roster, BossId, ALWAYS_REACHABLE_CUSTOM_BOSSES, BOSS_STAGES, ULTRA_HORSEMEN,
};
use crate::ids::{CardType, Challenge, Character, CollectibleType, StageType, STAGE_TYPES};
use crate::objective::{CharacterObjectiveKind, Objective};
use crate::tracker::UnlockState;
use crate::unlock::{path_for_objective_kind, path_for_story_boss, UnlockablePath};

/// Non-story bosses that can show up on the currently unlocked floors.
pub fn reachable_non_story_bosses<S>(state: &S, for_run: bool) -> HashSet<BossId>
where
    S: UnlockState + ?Sized,
{
    let mut bosses = HashSet::new();
    let repentance_floors = state.is_path_unlocked(UnlockablePath::RepentanceFloors, for_run);

    for stage in BOSS_STAGES {
        for &stage_type in STAGE_TYPES {
            if stage_type == StageType::GreedMode {
                continue;
            }
            if !state.is_stage_type_unlocked(stage, stage_type, for_run) {
                continue;
            }
            if stage_type.is_repentance() && !repentance_floors {
                continue;
            }
            if let Some(roster) = boss_roster(stage, stage_type) {
                bosses.extend(roster.iter().copied());
            }
        }
    }

    bosses
}

pub fn can_reach_character_objective<S>(
    state: &S,
    character: Character,
    kind: CharacterObjectiveKind,
    for_run: bool,
) -> bool
where
    S: UnlockState + ?Sized,
{
    if !state.is_character_unlocked(character, for_run) {
        return false;
    }

    match kind {
        CharacterObjectiveKind::Delirium => {
            state.is_path_unlocked(UnlockablePath::BlueWomb, for_run)
                && state.is_path_unlocked(UnlockablePath::Void, for_run)
        }
        CharacterObjectiveKind::NoHitDarkRoomChest => {
            state.is_path_unlocked(UnlockablePath::Chest, for_run)
                || state.is_path_unlocked(UnlockablePath::DarkRoom, for_run)
        }
        _ => match path_for_objective_kind(kind) {
            Some(path) => state.is_path_unlocked(path, for_run),
            None => true,
        },
    }
}

pub fn can_reach_boss<S>(
    state: &S,
    boss: BossId,
    reachable_bosses: &HashSet<BossId>,
    for_run: bool,
) -> bool
where
    S: UnlockState + ?Sized,
{
    if ALWAYS_REACHABLE_CUSTOM_BOSSES.contains(&boss) {
        return true;
    }
    if ULTRA_HORSEMEN.contains(&boss) {
        return state.is_path_unlocked(UnlockablePath::Ascent, for_run);
    }
    // Super Greed only spawns in Greed Mode.
    if boss == BossId::SuperGreed {
        return state.is_path_unlocked(UnlockablePath::GreedMode, for_run);
    }
    if !boss.is_story() {
        return reachable_bosses.contains(&boss);
    }

    // Void portals are removed, so Delirium is only reached through Blue Womb.
    if boss == BossId::Delirium {
        return state.is_path_unlocked(UnlockablePath::BlueWomb, for_run)
            && state.is_path_unlocked(UnlockablePath::Void, for_run);
    }

    match path_for_story_boss(boss) {
        Some(path) => state.is_path_unlocked(path, for_run),
        None => true,
    }
}

pub fn can_reach_challenge<S>(state: &S, challenge: Challenge, for_run: bool) -> bool
where
    S: UnlockState + ?Sized,
{
    state.is_challenge_unlocked(challenge, for_run)
}

/// Helper content a character needs before its objectives are fair.
fn has_character_helpers<S>(state: &S, character: Character, for_run: bool) -> bool
where
    S: UnlockState + ?Sized,
{
    match character {
        Character::LostB => state.is_card_type_unlocked(CardType::HOLY, for_run),
        Character::JacobB => {
            state.is_collectible_type_unlocked(CollectibleType::ANIMA_SOLA, for_run)
        }
        _ => true,
    }
}

/// Whether a playthrough in the given state could complete `objective` now.
pub fn can_complete_objective<S>(
    state: &S,
    objective: &Objective,
    reachable_bosses: &HashSet<BossId>,
    for_run: bool,
) -> bool
where
    S: UnlockState + ?Sized,
{
    match *objective {
        Objective::Character { character, kind } => {
            has_character_helpers(state, character, for_run)
                && can_reach_character_objective(state, character, kind, for_run)
        }
        Objective::Boss { boss } => can_reach_boss(state, boss, reachable_bosses, for_run),
        Objective::Challenge { challenge } => can_reach_challenge(state, challenge, for_run),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unlock::{AltFloor, Unlock};

    /// Unlock state backed by a plain set.
    #[derive(Default)]
    struct Granted(HashSet<Unlock>);

    impl Granted {
        fn with(mut self, unlock: Unlock) -> Self {
            self.0.insert(unlock);
            self
        }

        fn path(self, path: UnlockablePath) -> Self {
            self.with(Unlock::Path { path })
        }
    }

    impl UnlockState for Granted {
        fn is_unlock_granted(&self, unlock: &Unlock, _for_run: bool) -> bool {
            self.0.contains(unlock)
        }
    }

    #[test]
    fn locked_character_blocks_everything() {
        let state = Granted::default();
        assert!(!can_reach_character_objective(
            &state,
            Character::Cain,
            CharacterObjectiveKind::Mom,
            false
        ));
        assert!(can_reach_character_objective(
            &state,
            Character::Isaac,
            CharacterObjectiveKind::Mom,
            false
        ));
    }

    #[test]
    fn delirium_needs_both_paths() {
        let state = Granted::default().path(UnlockablePath::BlueWomb);
        let kind = CharacterObjectiveKind::Delirium;
        assert!(!can_reach_character_objective(&state, Character::Isaac, kind, false));
        assert!(!can_reach_boss(&state, BossId::Delirium, &HashSet::new(), false));

        let state = state.path(UnlockablePath::Void);
        assert!(can_reach_character_objective(&state, Character::Isaac, kind, false));
        assert!(can_reach_boss(&state, BossId::Delirium, &HashSet::new(), false));
    }

    #[test]
    fn dark_room_chest_needs_either_path() {
        let kind = CharacterObjectiveKind::NoHitDarkRoomChest;
        let none = Granted::default();
        assert!(!can_reach_character_objective(&none, Character::Isaac, kind, false));
        let chest = Granted::default().path(UnlockablePath::Chest);
        assert!(can_reach_character_objective(&chest, Character::Isaac, kind, false));
        let dark_room = Granted::default().path(UnlockablePath::DarkRoom);
        assert!(can_reach_character_objective(&dark_room, Character::Isaac, kind, false));
    }

    #[test]
    fn custom_bosses() {
        let state = Granted::default();
        let none = HashSet::new();
        assert!(can_reach_boss(&state, BossId::Krampus, &none, false));
        assert!(!can_reach_boss(&state, BossId::UltraWar, &none, false));
        let state = state.path(UnlockablePath::Ascent);
        assert!(can_reach_boss(&state, BossId::UltraWar, &none, false));
        assert!(can_reach_boss(&state, BossId::Beast, &none, false));
    }

    #[test]
    fn super_greed_needs_greed_mode() {
        let none = HashSet::new();
        let state = Granted::default();
        assert!(can_reach_boss(&state, BossId::FallenUriel, &none, false));
        assert!(!can_reach_boss(&state, BossId::SuperGreed, &none, false));
        let state = state.path(UnlockablePath::GreedMode);
        assert!(can_reach_boss(&state, BossId::SuperGreed, &none, false));
    }

    #[test]
    fn original_floors_are_always_reachable() {
        let bosses = reachable_non_story_bosses(&Granted::default(), false);
        assert!(bosses.contains(&BossId::Monstro));
        assert!(!bosses.contains(&BossId::Gish));
        assert!(!bosses.contains(&BossId::Chimera));
    }

    #[test]
    fn repentance_b_needs_alt_floor_and_path() {
        let dross = Unlock::AltFloor {
            alt_floor: AltFloor::Dross,
        };
        let only_floor = Granted::default().with(dross);
        assert!(!reachable_non_story_bosses(&only_floor, false).contains(&BossId::Colostomia));

        let both = only_floor.path(UnlockablePath::RepentanceFloors);
        let bosses = reachable_non_story_bosses(&both, false);
        assert!(bosses.contains(&BossId::Colostomia));
        assert!(bosses.contains(&BossId::Chimera));
    }

    #[test]
    fn tainted_helpers() {
        let state = Granted::default().with(Unlock::Character {
            character: Character::LostB,
        });
        let objective = Objective::character(Character::LostB, CharacterObjectiveKind::Mom);
        assert!(!can_complete_objective(&state, &objective, &HashSet::new(), false));

        let state = state.with(Unlock::Card {
            card_type: CardType::HOLY,
        });
        assert!(can_complete_objective(&state, &objective, &HashSet::new(), false));
    }

    #[test]
    fn predicates_are_pure() {
        let state = Granted::default().path(UnlockablePath::Chest);
        let first = reachable_non_story_bosses(&state, false);
        for _ in 0..3 {
            assert_eq!(reachable_non_story_bosses(&state, false), first);
            assert!(can_reach_boss(&state, BossId::BlueBaby, &first, false));
        }
    }
}
