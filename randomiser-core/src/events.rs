use log::debug;
use serde::{Deserialize, Serialize};

use crate::bosses::BossId;
use crate::ids::{Challenge, LevelStage, StageType};
use crate::objective::Objective;
use crate::tracker::Tracker;
use crate::unlock::Unlock;

/// Game-state observations forwarded by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum HostEvent {
    /// A boss room reward is about to spawn.
    BossRoomCleared {
        player_type: u8,
        boss: BossId,
        stage_type: StageType,
        is_last_boss_room: bool,
    },
    MegaSatanCleared {
        player_type: u8,
    },
    BeastDefeated {
        player_type: u8,
    },
    BossRushCleared {
        player_type: u8,
    },
    /// Every room of the floor is clear.
    FloorCleared {
        player_type: u8,
        stage: LevelStage,
        stage_type: StageType,
        took_hit: bool,
        challenge: Option<Challenge>,
    },
    /// Seconds the player has gone without a hit in the current boss fight.
    BossNoHitTimer {
        boss: BossId,
        seconds_without_hit: u32,
    },
    ChallengeCompleted {
        challenge: Challenge,
    },
}

/// Turns one host event into the objective it completes, if any.
pub type Adapter = fn(&HostEvent) -> Option<Objective>;

#[derive(Default)]
pub struct EventBus {
    adapters: Vec<(&'static str, Adapter)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, name: &'static str, adapter: Adapter) {
        self.adapters.push((name, adapter));
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Runs every adapter against the event and records what they detect.
    /// Returns the unlocks granted by this event.
    pub fn dispatch(&self, event: &HostEvent, tracker: &mut Tracker) -> Vec<Unlock> {
        if !tracker.is_active() {
            return Vec::new();
        }

        let mut granted = Vec::new();
        for (name, adapter) in &self.adapters {
            let Some(objective) = adapter(event) else {
                continue;
            };
            debug!("{} detected objective {}", name, objective.id());
            if let Some(unlock) = tracker.add_objective(objective, false) {
                granted.push(unlock);
            }
        }
        granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::Achievements;
    use crate::RandomiserMode;

    fn challenge_adapter(event: &HostEvent) -> Option<Objective> {
        match *event {
            HostEvent::ChallengeCompleted { challenge } => Some(Objective::Challenge { challenge }),
            _ => None,
        }
    }

    #[test]
    fn inactive_tracker_ignores_events() {
        let mut bus = EventBus::new();
        bus.subscribe("challenge", challenge_adapter);
        let mut tracker = Tracker::default();
        let event = HostEvent::ChallengeCompleted {
            challenge: Challenge::PitchBlack,
        };
        assert!(bus.dispatch(&event, &mut tracker).is_empty());
        assert!(tracker.ledger().is_empty());
    }

    #[test]
    fn dispatch_records_once() {
        let mut bus = EventBus::new();
        bus.subscribe("challenge", challenge_adapter);
        let achievements = Achievements::generate(4, RandomiserMode::Standard).unwrap();
        let mut tracker = Tracker::for_seed(4, RandomiserMode::Standard, achievements);
        let event = HostEvent::ChallengeCompleted {
            challenge: Challenge::PitchBlack,
        };

        assert_eq!(bus.dispatch(&event, &mut tracker).len(), 1);
        assert!(bus.dispatch(&event, &mut tracker).is_empty());
        assert_eq!(tracker.ledger().len(), 1);
    }
}
