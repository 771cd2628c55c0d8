use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::objective::Objective;
use crate::unlock::Unlock;

/// Persisted shape of the ledger: two lists, same index = same event.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
struct LedgerLists {
    completed_objectives: Vec<Objective>,
    completed_unlocks: Vec<Unlock>,
}

/// Ordered record of completed objectives and the unlocks they granted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "LedgerLists", into = "LedgerLists")]
pub struct CompletionLedger {
    lists: LedgerLists,
    objectives: HashSet<Objective>,
    unlocks: HashSet<Unlock>,
}

impl From<LedgerLists> for CompletionLedger {
    fn from(lists: LedgerLists) -> Self {
        let objectives = lists.completed_objectives.iter().copied().collect();
        let unlocks = lists.completed_unlocks.iter().copied().collect();
        CompletionLedger {
            lists,
            objectives,
            unlocks,
        }
    }
}

impl From<CompletionLedger> for LedgerLists {
    fn from(ledger: CompletionLedger) -> Self {
        ledger.lists
    }
}

impl PartialEq for CompletionLedger {
    fn eq(&self, other: &Self) -> bool {
        self.lists == other.lists
    }
}

impl Eq for CompletionLedger {}

impl CompletionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completion. Returns `false` when the objective was
    /// already recorded, in which case nothing changes.
    pub fn record(&mut self, objective: Objective, unlock: Unlock) -> bool {
        if !self.objectives.insert(objective) {
            return false;
        }
        self.unlocks.insert(unlock);
        self.lists.completed_objectives.push(objective);
        self.lists.completed_unlocks.push(unlock);
        true
    }

    pub fn is_objective_completed(&self, objective: &Objective) -> bool {
        self.objectives.contains(objective)
    }

    pub fn is_unlock_granted(&self, unlock: &Unlock) -> bool {
        self.unlocks.contains(unlock)
    }

    pub fn completed_objectives(&self) -> &[Objective] {
        &self.lists.completed_objectives
    }

    pub fn completed_unlocks(&self) -> &[Unlock] {
        &self.lists.completed_unlocks
    }

    pub fn len(&self) -> usize {
        self.lists.completed_objectives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.completed_objectives.is_empty()
    }

    pub fn clear(&mut self) {
        self.lists = LedgerLists::default();
        self.objectives.clear();
        self.unlocks.clear();
    }

    /// The last `count` completions, newest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = (Objective, Unlock)> + '_ {
        self.lists
            .completed_objectives
            .iter()
            .zip(&self.lists.completed_unlocks)
            .rev()
            .take(count)
            .map(|(objective, unlock)| (*objective, *unlock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::Character;
    use crate::objective::CharacterObjectiveKind;
    use crate::unlock::UnlockablePath;

    fn mom() -> Objective {
        Objective::character(Character::Isaac, CharacterObjectiveKind::Mom)
    }

    fn chest() -> Unlock {
        Unlock::Path {
            path: UnlockablePath::Chest,
        }
    }

    #[test]
    fn recording_is_idempotent() {
        let mut ledger = CompletionLedger::new();
        assert!(ledger.record(mom(), chest()));
        assert!(!ledger.record(mom(), chest()));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.completed_unlocks().len(), 1);
        assert!(ledger.is_objective_completed(&mom()));
        assert!(ledger.is_unlock_granted(&chest()));
    }

    #[test]
    fn recent_is_newest_first() {
        let mut ledger = CompletionLedger::new();
        let satan = Objective::character(Character::Isaac, CharacterObjectiveKind::Satan);
        let dark_room = Unlock::Path {
            path: UnlockablePath::DarkRoom,
        };
        ledger.record(mom(), chest());
        ledger.record(satan, dark_room);

        let recent: Vec<_> = ledger.recent(5).collect();
        assert_eq!(recent, vec![(satan, dark_room), (mom(), chest())]);
        assert_eq!(ledger.recent(1).count(), 1);
    }

    #[test]
    fn indices_survive_serialisation() {
        let mut ledger = CompletionLedger::new();
        ledger.record(mom(), chest());

        let json = serde_json::to_string(&ledger).unwrap();
        let loaded: CompletionLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, ledger);
        assert!(loaded.is_objective_completed(&mom()));
        assert!(loaded.is_unlock_granted(&chest()));
    }

    #[test]
    fn clear_resets_everything() {
        let mut ledger = CompletionLedger::new();
        ledger.record(mom(), chest());
        ledger.clear();
        assert!(ledger.is_empty());
        assert!(!ledger.is_objective_completed(&mom()));
        assert!(!ledger.is_unlock_granted(&chest()));
    }
}
