//! Generate-and-validate loop.
//!
//! A [`Generator`] keeps the state of one seed's search between host
//! frames. Each attempt draws a fresh assignment seed from the generating
//! stream, builds a candidate mapping and plays it through in a scratch
//! [`Tracker`] until no more objectives can be completed. The first mapping
//! whose playthrough completes every objective is accepted.

use std::time::Instant;

use log::{debug, info, log_enabled, Level};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::assignment::Achievements;
use crate::catalog::{all_objectives, validate_objectives_unlocks_match};
use crate::ids::MAIN_CHARACTERS;
use crate::objective::Objective;
use crate::reachability::{can_complete_objective, reachable_non_story_bosses};
use crate::tracker::{Tracker, UnlockState};
use crate::unlock::Unlock;
use crate::{RandomiserError, RandomiserMode, Result};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Generating,
    Testing,
    Accepted,
}

/// Outcome of one fixpoint playthrough.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Playthrough {
    pub completed: usize,
    pub total: usize,
    pub passes: usize,
}

impl Playthrough {
    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }
}

/// One pass over the catalog: completes every objective that is reachable
/// right now. Returns the number of new completions.
pub fn complete_reachable_objectives(tracker: &mut Tracker, objectives: &[Objective]) -> usize {
    let reachable_bosses = reachable_non_story_bosses(&*tracker, false);
    let mut completed = 0;

    for objective in objectives {
        if tracker.is_objective_completed(objective) {
            continue;
        }
        if can_complete_objective(&*tracker, objective, &reachable_bosses, false)
            && tracker.add_objective(*objective, true).is_some()
        {
            completed += 1;
        }
    }

    completed
}

/// Repeats passes until one of them completes nothing.
pub fn play_through(tracker: &mut Tracker, objectives: &[Objective]) -> Playthrough {
    let mut passes = 0;
    loop {
        passes += 1;
        let completed = complete_reachable_objectives(tracker, objectives);
        if completed == 0 || tracker.ledger().len() == objectives.len() {
            break;
        }
    }

    Playthrough {
        completed: tracker.ledger().len(),
        total: objectives.len(),
        passes,
    }
}

pub struct Generator {
    seed: u64,
    mode: RandomiserMode,
    max_attempts: Option<u32>,
    rng: ChaCha8Rng,
    objectives: Vec<Objective>,
    phase: Phase,
    attempts: u32,
    candidate: Option<Tracker>,
    last_playthrough: Option<Playthrough>,
    started_at: Instant,
}

impl Generator {
    /// Fails before any state is created when the catalogs do not match
    /// or the attempt cap allows no attempt at all.
    pub fn new(seed: u64, mode: RandomiserMode, max_attempts: Option<u32>) -> Result<Generator> {
        validate_objectives_unlocks_match(mode)?;
        if max_attempts == Some(0) {
            return Err(RandomiserError::GenerationExhausted { attempts: 0 });
        }

        Ok(Generator {
            seed,
            mode,
            max_attempts,
            rng: ChaCha8Rng::seed_from_u64(seed),
            objectives: all_objectives(mode),
            phase: Phase::Generating,
            attempts: 1,
            candidate: None,
            last_playthrough: None,
            started_at: Instant::now(),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn mode(&self) -> RandomiserMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of the attempt in progress, starting at 1.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn last_playthrough(&self) -> Option<Playthrough> {
        self.last_playthrough
    }

    /// Advances the state machine by one phase.
    pub fn step(&mut self) -> Result<Phase> {
        match self.phase {
            Phase::Idle | Phase::Accepted => {}
            Phase::Generating => {
                let attempt_seed: u64 = self.rng.gen();
                let achievements = Achievements::generate(attempt_seed, self.mode)?;
                info!(
                    "Generated achievements for randomiser seed: {} (attempt #{})",
                    self.seed, self.attempts
                );
                self.candidate = Some(Tracker::for_seed(self.seed, self.mode, achievements));
                self.phase = Phase::Testing;
            }
            Phase::Testing => {
                let Some(candidate) = self.candidate.as_mut() else {
                    self.phase = Phase::Generating;
                    return Ok(self.phase);
                };

                let start = Instant::now();
                let playthrough = play_through(candidate, &self.objectives);
                let elapsed = start.elapsed().as_millis();
                self.last_playthrough = Some(playthrough);

                if playthrough.is_complete() {
                    info!(
                        "Generation complete after {} attempt(s). Milliseconds taken: {}",
                        self.attempts,
                        self.started_at.elapsed().as_millis()
                    );
                    self.phase = Phase::Accepted;
                } else {
                    info!(
                        "Failed to emulate beating seed {}: {} / {}. Milliseconds taken: {}",
                        self.seed, playthrough.completed, playthrough.total, elapsed
                    );
                    log_missing_objectives(candidate, &self.objectives);

                    if let Some(max) = self.max_attempts {
                        if self.attempts >= max {
                            return Err(RandomiserError::GenerationExhausted {
                                attempts: self.attempts,
                            });
                        }
                    }
                    self.attempts += 1;
                    self.candidate = None;
                    self.phase = Phase::Generating;
                }
            }
        }

        Ok(self.phase)
    }

    /// One full attempt: generate a candidate and play it through.
    pub fn tick(&mut self) -> Result<Phase> {
        if self.phase == Phase::Generating {
            self.step()?;
        }
        if self.phase == Phase::Testing {
            self.step()?;
        }
        Ok(self.phase)
    }

    /// The accepted state with its simulation ledger discarded.
    pub fn take_accepted(&mut self) -> Option<Tracker> {
        if self.phase != Phase::Accepted {
            return None;
        }
        let candidate = self.candidate.take()?;
        self.phase = Phase::Idle;
        let achievements = candidate.into_data().achievements;
        Some(Tracker::for_seed(self.seed, self.mode, achievements))
    }

    /// Ticks until a mapping is accepted or the attempt cap is hit.
    pub fn run_to_completion(mut self) -> Result<Tracker> {
        loop {
            if self.tick()? == Phase::Accepted {
                break;
            }
        }
        self.take_accepted().ok_or(RandomiserError::NotActive)
    }
}

/// Debug report of a failed playthrough.
fn log_missing_objectives(tracker: &Tracker, objectives: &[Objective]) {
    if !log_enabled!(Level::Debug) {
        return;
    }

    debug!("Character report:");
    let mut all_characters_unlocked = true;
    for character in MAIN_CHARACTERS {
        if tracker.is_character_unlocked(character, false) {
            continue;
        }
        all_characters_unlocked = false;

        let unlock = Unlock::Character { character };
        match tracker.achievements().objective_for(&unlock) {
            Some(objective) => debug!(
                "- Character \"{}\" locked behind objective: {}",
                character.name(),
                objective
            ),
            None => debug!("- Character \"{}\" has no objective", character.name()),
        }
    }
    if all_characters_unlocked {
        debug!("- All characters unlocked!");
    }

    debug!("Missing objectives:");
    let reachable_bosses = reachable_non_story_bosses(tracker, false);
    for (i, objective) in objectives.iter().enumerate() {
        if tracker.is_objective_completed(objective) {
            continue;
        }
        let reachable = can_complete_objective(tracker, objective, &reachable_bosses, false);
        debug!(
            "- Missing objective #{} - {} (reachable: {})",
            i, objective, reachable
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_generating_on_the_first_attempt() {
        let generator = Generator::new(1, RandomiserMode::Standard, None).unwrap();
        assert_eq!(generator.phase(), Phase::Generating);
        assert_eq!(generator.attempts(), 1);
        assert!(generator.last_playthrough().is_none());
    }

    #[test]
    fn step_moves_through_testing() {
        let mut generator = Generator::new(1, RandomiserMode::Standard, None).unwrap();
        assert_eq!(generator.step().unwrap(), Phase::Testing);
        let phase = generator.step().unwrap();
        assert!(phase == Phase::Generating || phase == Phase::Accepted);
        assert!(generator.last_playthrough().is_some());
    }

    #[test]
    fn fixpoint_is_bounded_by_catalog_size() {
        let mut generator = Generator::new(3, RandomiserMode::Standard, None).unwrap();
        generator.tick().unwrap();
        let playthrough = generator.last_playthrough().unwrap();
        assert!(playthrough.passes <= playthrough.total + 1);
        assert!(playthrough.completed <= playthrough.total);
    }

    #[test]
    fn attempt_cap_is_reported() {
        // A cap of one attempt either accepts immediately or fails on it.
        let mut generator = Generator::new(5, RandomiserMode::Standard, Some(1)).unwrap();
        match generator.tick() {
            Ok(phase) => assert_eq!(phase, Phase::Accepted),
            Err(err) => assert!(matches!(
                err,
                RandomiserError::GenerationExhausted { attempts: 1 }
            )),
        }
    }

    #[test]
    fn zero_attempt_cap_is_rejected() {
        assert!(matches!(
            Generator::new(5, RandomiserMode::Standard, Some(0)),
            Err(RandomiserError::GenerationExhausted { attempts: 0 })
        ));
    }

    #[test]
    fn accepted_tracker_has_an_empty_ledger() {
        let generator = Generator::new(12345, RandomiserMode::Standard, Some(2_000)).unwrap();
        let tracker = generator.run_to_completion().unwrap();
        assert!(tracker.ledger().is_empty());
        assert_eq!(tracker.seed(), Some(12345));
        assert_eq!(tracker.achievements().len(), 1205);
    }
}
