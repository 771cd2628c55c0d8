use std::collections::BTreeMap;

use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::bosses::BossId;
use crate::catalog::{all_objectives, all_unlocks, EASY_OBJECTIVES, GATEWAY_PATHS};
use crate::ids::{Challenge, Character, STARTING_CHARACTER};
use crate::objective::{CharacterObjectiveKind, Objective};
use crate::unlock::{Unlock, UnlockablePath};
use crate::{RandomiserError, RandomiserMode, Result};

const ASSIGNMENT_SALT: u64 = 0xA55E_6A1E_u64;

/// The objective to unlock mapping for one seed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Achievements {
    pub character_achievements: BTreeMap<Character, BTreeMap<CharacterObjectiveKind, Unlock>>,
    pub boss_achievements: BTreeMap<BossId, Unlock>,
    pub challenge_achievements: BTreeMap<Challenge, Unlock>,
}

impl Achievements {
    /// Builds a bijection between the objective and unlock catalogs of `mode`.
    ///
    /// The gateway paths are placed first, each behind a distinct easy
    /// objective of the starting character. Every other unlock is paired
    /// with a remaining objective uniformly at random.
    pub fn generate(seed: u64, mode: RandomiserMode) -> Result<Achievements> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed ^ ASSIGNMENT_SALT);
        let mut unlocks = all_unlocks(mode);
        let mut achievements = Achievements::default();

        let mut easy_objectives: Vec<CharacterObjectiveKind> = EASY_OBJECTIVES.to_vec();
        for path in GATEWAY_PATHS {
            let unlock = take_path_unlock(&mut unlocks, path)?;
            let idx = rng.gen_range(0..easy_objectives.len());
            let kind = easy_objectives.swap_remove(idx);
            debug!("Placing {} behind {} for the starting character", unlock, kind.name());
            achievements.insert(Objective::character(STARTING_CHARACTER, kind), unlock);
        }

        let remaining: Vec<Objective> = all_objectives(mode)
            .into_iter()
            .filter(|objective| achievements.unlock_for(objective).is_none())
            .collect();

        unlocks.shuffle(&mut rng);
        for (objective, unlock) in remaining.into_iter().zip(unlocks) {
            achievements.insert(objective, unlock);
        }

        Ok(achievements)
    }

    pub fn insert(&mut self, objective: Objective, unlock: Unlock) -> Option<Unlock> {
        match objective {
            Objective::Character { character, kind } => self
                .character_achievements
                .entry(character)
                .or_default()
                .insert(kind, unlock),
            Objective::Boss { boss } => self.boss_achievements.insert(boss, unlock),
            Objective::Challenge { challenge } => {
                self.challenge_achievements.insert(challenge, unlock)
            }
        }
    }

    pub fn unlock_for(&self, objective: &Objective) -> Option<Unlock> {
        match objective {
            Objective::Character { character, kind } => self
                .character_achievements
                .get(character)
                .and_then(|kinds| kinds.get(kind))
                .copied(),
            Objective::Boss { boss } => self.boss_achievements.get(boss).copied(),
            Objective::Challenge { challenge } => {
                self.challenge_achievements.get(challenge).copied()
            }
        }
    }

    /// Every pairing: characters, then bosses, then challenges.
    pub fn iter(&self) -> impl Iterator<Item = (Objective, Unlock)> + '_ {
        let characters = self.character_achievements.iter().flat_map(|(character, kinds)| {
            kinds
                .iter()
                .map(move |(kind, unlock)| (Objective::character(*character, *kind), *unlock))
        });
        let bosses = self
            .boss_achievements
            .iter()
            .map(|(boss, unlock)| (Objective::Boss { boss: *boss }, *unlock));
        let challenges = self.challenge_achievements.iter().map(|(challenge, unlock)| {
            (
                Objective::Challenge {
                    challenge: *challenge,
                },
                *unlock,
            )
        });
        characters.chain(bosses).chain(challenges)
    }

    pub fn len(&self) -> usize {
        let characters: usize = self.character_achievements.values().map(BTreeMap::len).sum();
        characters + self.boss_achievements.len() + self.challenge_achievements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn objective_for(&self, unlock: &Unlock) -> Option<Objective> {
        self.iter()
            .find(|(_, candidate)| candidate == unlock)
            .map(|(objective, _)| objective)
    }
}

fn take_path_unlock(unlocks: &mut Vec<Unlock>, path: UnlockablePath) -> Result<Unlock> {
    let idx = unlocks
        .iter()
        .position(|unlock| *unlock == Unlock::Path { path })
        .ok_or_else(|| {
            RandomiserError::MissingAchievement(format!(
                "no Path achievement found for {}",
                path.name()
            ))
        })?;
    Ok(unlocks.remove(idx))
}
