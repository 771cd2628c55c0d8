//! Achievement randomiser core.
//!
//! Pairs every objective a player can complete with exactly one unlock,
//! checks by simulation that the pairing can be finished from a fresh save,
//! and then answers "is this unlocked?" queries while real play records
//! completions.

use std::fmt;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod assignment;
pub mod bosses;
pub mod catalog;
pub mod detection;
pub mod events;
pub mod generation;
pub mod ids;
pub mod ledger;
pub mod objective;
pub mod pools;
pub mod reachability;
pub mod save;
pub mod tracker;
pub mod unlock;

pub use assignment::Achievements;
pub use events::{EventBus, HostEvent};
pub use generation::{Generator, Phase, Playthrough};
pub use ledger::CompletionLedger;
pub use objective::{Objective, ObjectiveId, ObjectiveIdError};
pub use save::SaveData;
pub use tracker::{Tracker, UnlockState};
pub use unlock::Unlock;

/// Stamped into every save so a changed catalog can be detected on load.
pub const ACHIEVEMENTS_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomiserMode {
    #[default]
    Standard,
    Nightmare,
}

impl fmt::Display for RandomiserMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomiserMode::Standard => write!(f, "standard"),
            RandomiserMode::Nightmare => write!(f, "nightmare"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomiserSettings {
    /// Drawn at random when absent.
    pub seed: Option<u64>,
    pub mode: RandomiserMode,
    /// Generation retries forever when absent.
    pub max_attempts: Option<u32>,
}

#[derive(Debug, Error)]
pub enum RandomiserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{mode} mode has {objectives} objectives but {unlocks} unlocks")]
    CatalogMismatch {
        mode: RandomiserMode,
        objectives: usize,
        unlocks: usize,
    },
    #[error("{0}")]
    MissingAchievement(String),
    #[error(transparent)]
    InvalidObjectiveId(#[from] ObjectiveIdError),
    #[error("no accepted achievements after {attempts} attempt(s)")]
    GenerationExhausted { attempts: u32 },
    #[error("the randomiser is not active")]
    NotActive,
    #[error("achievements are already being generated")]
    AlreadyGenerating,
}

pub type Result<T> = std::result::Result<T, RandomiserError>;

/// Persisted state plus the generation in flight, if any.
#[derive(Default)]
pub struct Randomiser {
    tracker: Tracker,
    generator: Option<Generator>,
}

impl Randomiser {
    pub fn new(data: SaveData) -> Randomiser {
        Randomiser {
            tracker: Tracker::new(data),
            generator: None,
        }
    }

    pub fn load(path: &Path) -> Result<Randomiser> {
        Ok(Randomiser::new(SaveData::load_from_path(path)?))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.tracker.data().save_to_path(path)
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.tracker
    }

    pub fn generator(&self) -> Option<&Generator> {
        self.generator.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.generator.as_ref().map_or(Phase::Idle, Generator::phase)
    }

    /// Begins generation for a new seed. Nothing changes when the catalogs
    /// for the chosen mode are inconsistent. Returns the seed in use.
    pub fn start(&mut self, settings: &RandomiserSettings) -> Result<u64> {
        if self.generator.is_some() {
            return Err(RandomiserError::AlreadyGenerating);
        }

        let seed = settings.seed.unwrap_or_else(rand::random);
        let generator = Generator::new(seed, settings.mode, settings.max_attempts)?;

        info!("New randomiser seed: {}", seed);
        info!("New randomiser mode: {}", settings.mode);
        info!("Achievements version: {}", ACHIEVEMENTS_VERSION);

        self.generator = Some(generator);
        Ok(seed)
    }

    /// Runs one generation attempt. On acceptance the tracker is replaced
    /// by the accepted mapping with an empty ledger.
    pub fn tick(&mut self) -> Result<Phase> {
        let Some(generator) = self.generator.as_mut() else {
            return Ok(Phase::Idle);
        };

        let phase = match generator.tick() {
            Ok(phase) => phase,
            Err(err) => {
                self.generator = None;
                return Err(err);
            }
        };

        if phase == Phase::Accepted {
            if let Some(tracker) = generator.take_accepted() {
                self.tracker = tracker;
            }
            self.generator = None;
        }
        Ok(phase)
    }

    /// Cancels any generation in flight and clears the seed.
    pub fn end(&mut self) {
        if self.generator.take().is_some() {
            info!("Generation cancelled");
        }
        self.tracker.end();
    }

    /// Records an objective completed outside of the event bus.
    pub fn complete(&mut self, objective: Objective) -> Result<Option<Unlock>> {
        if !self.tracker.is_active() {
            return Err(RandomiserError::NotActive);
        }
        if self.tracker.achievements().unlock_for(&objective).is_none() {
            return Err(RandomiserError::MissingAchievement(format!(
                "no achievement found for objective {} ({}) in {} mode",
                objective,
                objective.id(),
                self.tracker.mode()
            )));
        }
        Ok(self.tracker.add_objective(objective, false))
    }

    pub fn dispatch(&mut self, bus: &EventBus, event: &HostEvent) -> Vec<Unlock> {
        bus.dispatch(event, &mut self.tracker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_rejects_a_second_generation() {
        let mut randomiser = Randomiser::default();
        let settings = RandomiserSettings {
            seed: Some(7),
            ..Default::default()
        };
        assert_eq!(randomiser.start(&settings).unwrap(), 7);
        assert_eq!(randomiser.phase(), Phase::Generating);
        assert!(matches!(
            randomiser.start(&settings),
            Err(RandomiserError::AlreadyGenerating)
        ));
    }

    #[test]
    fn end_cancels_generation() {
        let mut randomiser = Randomiser::default();
        randomiser
            .start(&RandomiserSettings {
                seed: Some(8),
                ..Default::default()
            })
            .unwrap();
        randomiser.end();
        assert_eq!(randomiser.phase(), Phase::Idle);
        assert_eq!(randomiser.tick().unwrap(), Phase::Idle);
        assert!(!randomiser.tracker().is_active());
    }

    #[test]
    fn complete_needs_an_active_seed() {
        let mut randomiser = Randomiser::default();
        let objective = Objective::Challenge {
            challenge: ids::Challenge::PitchBlack,
        };
        assert!(matches!(
            randomiser.complete(objective),
            Err(RandomiserError::NotActive)
        ));
    }

    #[test]
    fn complete_rejects_objectives_outside_the_catalog() {
        let achievements = Achievements::generate(12, RandomiserMode::Standard).unwrap();
        let mut randomiser = Randomiser::new(SaveData {
            seed: Some(12),
            achievements,
            ..Default::default()
        });

        // Raglich never spawns, so it has no objective in standard mode.
        let raglich: Objective = "1.98".parse().unwrap();
        assert!(matches!(
            randomiser.complete(raglich),
            Err(RandomiserError::MissingAchievement(_))
        ));
        assert!(randomiser.tracker().ledger().is_empty());

        let purist: Objective = "2.20".parse().unwrap();
        assert!(randomiser.complete(purist).unwrap().is_some());
        assert_eq!(randomiser.complete(purist).unwrap(), None);
    }

    #[test]
    fn mode_display_matches_serde() {
        let json = serde_json::to_string(&RandomiserMode::Nightmare).unwrap();
        assert_eq!(json, format!("\"{}\"", RandomiserMode::Nightmare));
    }
}
