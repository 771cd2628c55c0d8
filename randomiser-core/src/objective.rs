use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bosses::BossId;
use crate::ids::{Challenge, Character};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum CharacterObjectiveKind {
    Mom = 0,
    ItLives = 1,
    Isaac = 2,
    BlueBaby = 3,
    Satan = 4,
    Lamb = 5,
    MegaSatan = 6,
    BossRush = 7,
    Hush = 8,
    Delirium = 9,
    Mother = 10,
    Beast = 11,
    UltraGreed = 12,
    NoHitBasement1 = 13,
    NoHitBasement2 = 14,
    NoHitCaves1 = 15,
    NoHitCaves2 = 16,
    NoHitDepths1 = 17,
    NoHitDepths2 = 18,
    NoHitWomb1 = 19,
    NoHitWomb2 = 20,
    NoHitSheolCathedral = 21,
    NoHitDarkRoomChest = 22,
    NoHitDownpour1 = 23,
    NoHitDownpour2 = 24,
    NoHitMines1 = 25,
    NoHitMines2 = 26,
    NoHitMausoleum1 = 27,
    NoHitMausoleum2 = 28,
    NoHitCorpse1 = 29,
    NoHitCorpse2 = 30,
}

pub const CHARACTER_OBJECTIVE_KINDS: [CharacterObjectiveKind; 31] = [
    CharacterObjectiveKind::Mom,
    CharacterObjectiveKind::ItLives,
    CharacterObjectiveKind::Isaac,
    CharacterObjectiveKind::BlueBaby,
    CharacterObjectiveKind::Satan,
    CharacterObjectiveKind::Lamb,
    CharacterObjectiveKind::MegaSatan,
    CharacterObjectiveKind::BossRush,
    CharacterObjectiveKind::Hush,
    CharacterObjectiveKind::Delirium,
    CharacterObjectiveKind::Mother,
    CharacterObjectiveKind::Beast,
    CharacterObjectiveKind::UltraGreed,
    CharacterObjectiveKind::NoHitBasement1,
    CharacterObjectiveKind::NoHitBasement2,
    CharacterObjectiveKind::NoHitCaves1,
    CharacterObjectiveKind::NoHitCaves2,
    CharacterObjectiveKind::NoHitDepths1,
    CharacterObjectiveKind::NoHitDepths2,
    CharacterObjectiveKind::NoHitWomb1,
    CharacterObjectiveKind::NoHitWomb2,
    CharacterObjectiveKind::NoHitSheolCathedral,
    CharacterObjectiveKind::NoHitDarkRoomChest,
    CharacterObjectiveKind::NoHitDownpour1,
    CharacterObjectiveKind::NoHitDownpour2,
    CharacterObjectiveKind::NoHitMines1,
    CharacterObjectiveKind::NoHitMines2,
    CharacterObjectiveKind::NoHitMausoleum1,
    CharacterObjectiveKind::NoHitMausoleum2,
    CharacterObjectiveKind::NoHitCorpse1,
    CharacterObjectiveKind::NoHitCorpse2,
];

impl CharacterObjectiveKind {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<CharacterObjectiveKind> {
        CHARACTER_OBJECTIVE_KINDS.get(usize::from(id)).copied()
    }

    pub fn is_no_hit(self) -> bool {
        self.id() >= CharacterObjectiveKind::NoHitBasement1.id()
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterObjectiveKind::Mom => "Mom",
            CharacterObjectiveKind::ItLives => "It Lives",
            CharacterObjectiveKind::Isaac => "Isaac",
            CharacterObjectiveKind::BlueBaby => "Blue Baby",
            CharacterObjectiveKind::Satan => "Satan",
            CharacterObjectiveKind::Lamb => "The Lamb",
            CharacterObjectiveKind::MegaSatan => "Mega Satan",
            CharacterObjectiveKind::BossRush => "Boss Rush",
            CharacterObjectiveKind::Hush => "Hush",
            CharacterObjectiveKind::Delirium => "Delirium",
            CharacterObjectiveKind::Mother => "Mother",
            CharacterObjectiveKind::Beast => "The Beast",
            CharacterObjectiveKind::UltraGreed => "Ultra Greed",
            CharacterObjectiveKind::NoHitBasement1 => "no hit Basement 1",
            CharacterObjectiveKind::NoHitBasement2 => "no hit Basement 2",
            CharacterObjectiveKind::NoHitCaves1 => "no hit Caves 1",
            CharacterObjectiveKind::NoHitCaves2 => "no hit Caves 2",
            CharacterObjectiveKind::NoHitDepths1 => "no hit Depths 1",
            CharacterObjectiveKind::NoHitDepths2 => "no hit Depths 2",
            CharacterObjectiveKind::NoHitWomb1 => "no hit Womb 1",
            CharacterObjectiveKind::NoHitWomb2 => "no hit Womb 2",
            CharacterObjectiveKind::NoHitSheolCathedral => "no hit Sheol / Cathedral",
            CharacterObjectiveKind::NoHitDarkRoomChest => "no hit Dark Room / Chest",
            CharacterObjectiveKind::NoHitDownpour1 => "no hit Downpour 1",
            CharacterObjectiveKind::NoHitDownpour2 => "no hit Downpour 2",
            CharacterObjectiveKind::NoHitMines1 => "no hit Mines 1",
            CharacterObjectiveKind::NoHitMines2 => "no hit Mines 2",
            CharacterObjectiveKind::NoHitMausoleum1 => "no hit Mausoleum 1",
            CharacterObjectiveKind::NoHitMausoleum2 => "no hit Mausoleum 2",
            CharacterObjectiveKind::NoHitCorpse1 => "no hit Corpse 1",
            CharacterObjectiveKind::NoHitCorpse2 => "no hit Corpse 2",
        }
    }
}

/// Something the player accomplishes during a run.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Objective {
    Character {
        character: Character,
        kind: CharacterObjectiveKind,
    },
    /// Defeat the boss without taking a hit inside its time budget.
    Boss { boss: BossId },
    Challenge { challenge: Challenge },
}

impl Objective {
    pub fn character(character: Character, kind: CharacterObjectiveKind) -> Objective {
        Objective::Character { character, kind }
    }

    pub fn type_id(&self) -> u8 {
        match self {
            Objective::Character { .. } => 0,
            Objective::Boss { .. } => 1,
            Objective::Challenge { .. } => 2,
        }
    }

    pub fn id(&self) -> ObjectiveId {
        let key = match self {
            Objective::Character { character, kind } => {
                format!("{}.{}.{}", self.type_id(), character.player_type(), kind.id())
            }
            Objective::Boss { boss } => format!("{}.{}", self.type_id(), boss.id()),
            Objective::Challenge { challenge } => {
                format!("{}.{}", self.type_id(), challenge.id())
            }
        };
        ObjectiveId(key)
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Objective::Character { character, kind } if kind.is_no_hit() => {
                write!(f, "{}: {}", character.name(), kind.name())
            }
            Objective::Character { character, kind } => {
                write!(f, "{}: defeat {}", character.name(), kind.name())
            }
            Objective::Boss { boss } => write!(
                f,
                "defeat {} without getting hit ({} seconds)",
                boss.name(),
                boss.no_hit_seconds()
            ),
            Objective::Challenge { challenge } => write!(f, "complete {}", challenge.name()),
        }
    }
}

/// Compact persisted key for an objective: `type.sub[.sub]`.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectiveId(String);

impl ObjectiveId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_objective(&self) -> Result<Objective, ObjectiveIdError> {
        self.0.parse()
    }
}

impl fmt::Display for ObjectiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors that can occur while parsing an objective id.
#[derive(Debug, Error)]
pub enum ObjectiveIdError {
    #[error("wrong number of parts in objective id '{id}': expected {expected}, got {got}")]
    WrongPartCount {
        id: String,
        expected: usize,
        got: usize,
    },

    #[error("failed to parse '{token}' in objective id '{id}'")]
    ParseInt {
        id: String,
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("unknown {kind} {value} in objective id '{id}'")]
    Unknown {
        id: String,
        kind: &'static str,
        value: u16,
    },
}

fn parse_part(id: &str, token: &str) -> Result<u16, ObjectiveIdError> {
    token.parse::<u16>().map_err(|source| ObjectiveIdError::ParseInt {
        id: id.to_string(),
        token: token.to_string(),
        source,
    })
}

fn unknown(id: &str, kind: &'static str, value: u16) -> ObjectiveIdError {
    ObjectiveIdError::Unknown {
        id: id.to_string(),
        kind,
        value,
    }
}

impl FromStr for Objective {
    type Err = ObjectiveIdError;

    fn from_str(s: &str) -> Result<Objective, ObjectiveIdError> {
        let parts = s
            .split('.')
            .map(|token| parse_part(s, token))
            .collect::<Result<Vec<u16>, _>>()?;

        let expected = match parts.first().copied() {
            Some(0) => 3,
            Some(1) | Some(2) => 2,
            Some(other) => return Err(unknown(s, "objective type", other)),
            None => 1,
        };
        if parts.len() != expected {
            return Err(ObjectiveIdError::WrongPartCount {
                id: s.to_string(),
                expected,
                got: parts.len(),
            });
        }

        match parts[..] {
            [0, player_type, kind] => {
                let character = u8::try_from(player_type)
                    .ok()
                    .and_then(Character::from_player_type)
                    .ok_or_else(|| unknown(s, "character", player_type))?;
                let kind = u8::try_from(kind)
                    .ok()
                    .and_then(CharacterObjectiveKind::from_id)
                    .ok_or_else(|| unknown(s, "character objective kind", kind))?;
                Ok(Objective::Character { character, kind })
            }
            [1, boss] => BossId::from_id(boss)
                .map(|boss| Objective::Boss { boss })
                .ok_or_else(|| unknown(s, "boss", boss)),
            [2, challenge] => u8::try_from(challenge)
                .ok()
                .and_then(Challenge::from_id)
                .map(|challenge| Objective::Challenge { challenge })
                .ok_or_else(|| unknown(s, "challenge", challenge)),
            _ => Err(ObjectiveIdError::WrongPartCount {
                id: s.to_string(),
                expected,
                got: parts.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_objective_id() {
        let objective = Objective::character(Character::CainB, CharacterObjectiveKind::Lamb);
        assert_eq!(objective.id().as_str(), "0.23.5");
        assert_eq!(objective.id().to_objective().unwrap(), objective);
    }

    #[test]
    fn boss_and_challenge_ids() {
        let boss = Objective::Boss { boss: BossId::Monstro };
        assert_eq!(boss.id().as_str(), "1.1");
        assert_eq!("1.1".parse::<Objective>().unwrap(), boss);

        let challenge = Objective::Challenge {
            challenge: Challenge::PitchBlack,
        };
        assert_eq!(challenge.id().as_str(), "2.1");
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(matches!(
            "0.1".parse::<Objective>(),
            Err(ObjectiveIdError::WrongPartCount { expected: 3, got: 2, .. })
        ));
        assert!(matches!(
            "1.x".parse::<Objective>(),
            Err(ObjectiveIdError::ParseInt { .. })
        ));
        assert!(matches!(
            "1.500".parse::<Objective>(),
            Err(ObjectiveIdError::Unknown { kind: "boss", .. })
        ));
        assert!(matches!(
            "7.1".parse::<Objective>(),
            Err(ObjectiveIdError::Unknown { .. })
        ));
    }

    #[test]
    fn display_text() {
        let objective =
            Objective::character(Character::Isaac, CharacterObjectiveKind::NoHitCaves1);
        assert_eq!(objective.to_string(), "Isaac: no hit Caves 1");
        let objective = Objective::character(Character::Lost, CharacterObjectiveKind::Mom);
        assert_eq!(objective.to_string(), "The Lost: defeat Mom");
    }
}
