//! Read side of the randomiser: which content is currently unlocked.
//!
//! [`UnlockState`] is the query surface the pool consumers and the
//! reachability predicates use. [`Tracker`] is the persisted playthrough
//! state behind it and the single entry point for recording completions.

use std::collections::HashSet;

use log::{info, warn};

use crate::assignment::Achievements;
use crate::catalog::{BANNED_TRINKETS, EXCLUDED_CARDS};
use crate::ids::{
    vanilla_card_types, vanilla_collectible_types, vanilla_pill_effects, vanilla_trinket_types,
    BatterySubType, BombSubType, CardType, Challenge, Character, ChestVariant, CoinSubType,
    CollectibleType, GridEntityType, HeartSubType, KeySubType, LevelStage, PillEffect, RoomType,
    SackSubType, SlotVariant, StageType, TrinketType, STARTING_CHARACTER,
};
use crate::ledger::CompletionLedger;
use crate::objective::{Objective, CHARACTER_OBJECTIVE_KINDS};
use crate::save::SaveData;
use crate::unlock::{alt_floor_for_stage, AltFloor, OtherUnlockKind, Unlock, UnlockablePath};
use crate::RandomiserMode;

pub trait UnlockState {
    /// Whether `unlock` is available. With `for_run` set, the answer is for
    /// the run being played, which sees everything when no seed is active.
    fn is_unlock_granted(&self, unlock: &Unlock, for_run: bool) -> bool;

    fn is_character_unlocked(&self, character: Character, for_run: bool) -> bool {
        character == STARTING_CHARACTER
            || self.is_unlock_granted(&Unlock::Character { character }, for_run)
    }

    fn is_path_unlocked(&self, path: UnlockablePath, for_run: bool) -> bool {
        self.is_unlock_granted(&Unlock::Path { path }, for_run)
    }

    fn is_alt_floor_unlocked(&self, alt_floor: AltFloor, for_run: bool) -> bool {
        self.is_unlock_granted(&Unlock::AltFloor { alt_floor }, for_run)
    }

    fn is_stage_type_unlocked(
        &self,
        stage: LevelStage,
        stage_type: StageType,
        for_run: bool,
    ) -> bool {
        match stage_type {
            StageType::Original => true,
            StageType::RepentanceA => {
                self.is_path_unlocked(UnlockablePath::RepentanceFloors, for_run)
            }
            StageType::GreedMode => self.is_path_unlocked(UnlockablePath::GreedMode, for_run),
            _ => match alt_floor_for_stage(stage, stage_type) {
                Some(alt_floor) => self.is_alt_floor_unlocked(alt_floor, for_run),
                None => true,
            },
        }
    }

    fn is_room_type_unlocked(&self, room_type: RoomType, for_run: bool) -> bool {
        self.is_unlock_granted(&Unlock::Room { room_type }, for_run)
    }

    fn is_challenge_unlocked(&self, challenge: Challenge, for_run: bool) -> bool {
        self.is_unlock_granted(&Unlock::Challenge { challenge }, for_run)
    }

    fn is_collectible_type_unlocked(
        &self,
        collectible_type: CollectibleType,
        for_run: bool,
    ) -> bool {
        self.is_unlock_granted(&Unlock::Collectible { collectible_type }, for_run)
    }

    fn is_trinket_type_unlocked(&self, trinket_type: TrinketType, for_run: bool) -> bool {
        self.is_unlock_granted(&Unlock::Trinket { trinket_type }, for_run)
    }

    fn is_card_type_unlocked(&self, card_type: CardType, for_run: bool) -> bool {
        self.is_unlock_granted(&Unlock::Card { card_type }, for_run)
    }

    fn is_pill_effect_unlocked(&self, pill_effect: PillEffect, for_run: bool) -> bool {
        self.is_unlock_granted(&Unlock::PillEffect { pill_effect }, for_run)
    }

    fn is_heart_sub_type_unlocked(&self, heart_sub_type: HeartSubType, for_run: bool) -> bool {
        self.is_unlock_granted(&Unlock::Heart { heart_sub_type }, for_run)
    }

    fn is_coin_sub_type_unlocked(&self, coin_sub_type: CoinSubType, for_run: bool) -> bool {
        self.is_unlock_granted(&Unlock::Coin { coin_sub_type }, for_run)
    }

    fn is_bomb_sub_type_unlocked(&self, bomb_sub_type: BombSubType, for_run: bool) -> bool {
        self.is_unlock_granted(&Unlock::Bomb { bomb_sub_type }, for_run)
    }

    fn is_key_sub_type_unlocked(&self, key_sub_type: KeySubType, for_run: bool) -> bool {
        self.is_unlock_granted(&Unlock::Key { key_sub_type }, for_run)
    }

    fn is_battery_sub_type_unlocked(
        &self,
        battery_sub_type: BatterySubType,
        for_run: bool,
    ) -> bool {
        self.is_unlock_granted(&Unlock::Battery { battery_sub_type }, for_run)
    }

    fn is_sack_sub_type_unlocked(&self, sack_sub_type: SackSubType, for_run: bool) -> bool {
        self.is_unlock_granted(&Unlock::Sack { sack_sub_type }, for_run)
    }

    fn is_chest_variant_unlocked(&self, chest_variant: ChestVariant, for_run: bool) -> bool {
        self.is_unlock_granted(&Unlock::Chest { chest_variant }, for_run)
    }

    fn is_slot_variant_unlocked(&self, slot_variant: SlotVariant, for_run: bool) -> bool {
        self.is_unlock_granted(&Unlock::Slot { slot_variant }, for_run)
    }

    fn is_grid_entity_type_unlocked(
        &self,
        grid_entity_type: GridEntityType,
        for_run: bool,
    ) -> bool {
        self.is_unlock_granted(&Unlock::GridEntity { grid_entity_type }, for_run)
    }

    fn is_other_unlocked(&self, kind: OtherUnlockKind, for_run: bool) -> bool {
        self.is_unlock_granted(&Unlock::Other { kind }, for_run)
    }

    fn unlocked_trinket_types(&self, for_run: bool) -> Vec<TrinketType> {
        vanilla_trinket_types()
            .filter(|trinket| !BANNED_TRINKETS.contains(trinket))
            .filter(|trinket| self.is_trinket_type_unlocked(*trinket, for_run))
            .collect()
    }

    fn locked_trinket_types(&self, for_run: bool) -> Vec<TrinketType> {
        vanilla_trinket_types()
            .filter(|trinket| !self.is_trinket_type_unlocked(*trinket, for_run))
            .collect()
    }

    fn locked_collectible_types(&self, for_run: bool) -> Vec<CollectibleType> {
        vanilla_collectible_types()
            .filter(|collectible| !self.is_collectible_type_unlocked(*collectible, for_run))
            .collect()
    }

    fn any_card_unlocked(&self, for_run: bool) -> bool {
        vanilla_card_types()
            .filter(|card| !EXCLUDED_CARDS.contains(card))
            .any(|card| self.is_card_type_unlocked(card, for_run))
    }

    fn any_pill_effect_unlocked(&self, for_run: bool) -> bool {
        vanilla_pill_effects().any(|effect| self.is_pill_effect_unlocked(effect, for_run))
    }
}

/// Persisted playthrough state plus an index of the catalogued unlocks.
#[derive(Clone, Debug, Default)]
pub struct Tracker {
    data: SaveData,
    catalogued: HashSet<Unlock>,
}

impl Tracker {
    pub fn new(data: SaveData) -> Tracker {
        let catalogued = data.achievements.iter().map(|(_, unlock)| unlock).collect();
        Tracker { data, catalogued }
    }

    /// State for a freshly accepted seed: empty ledger.
    pub fn for_seed(seed: u64, mode: RandomiserMode, achievements: Achievements) -> Tracker {
        Tracker::new(SaveData {
            seed: Some(seed),
            mode,
            achievements_version: crate::ACHIEVEMENTS_VERSION.to_string(),
            achievements,
            ledger: CompletionLedger::new(),
        })
    }

    pub fn data(&self) -> &SaveData {
        &self.data
    }

    pub fn into_data(self) -> SaveData {
        self.data
    }

    pub fn seed(&self) -> Option<u64> {
        self.data.seed
    }

    pub fn mode(&self) -> RandomiserMode {
        self.data.mode
    }

    pub fn is_active(&self) -> bool {
        self.data.seed.is_some()
    }

    pub fn achievements(&self) -> &Achievements {
        &self.data.achievements
    }

    pub fn ledger(&self) -> &CompletionLedger {
        &self.data.ledger
    }

    /// Clears the seed. The ledger stays in the save until the next start.
    pub fn end(&mut self) {
        if let Some(seed) = self.data.seed.take() {
            info!("Ended randomiser seed: {}", seed);
        }
    }

    pub fn is_objective_completed(&self, objective: &Objective) -> bool {
        self.data.ledger.is_objective_completed(objective)
    }

    /// Records a completed objective and returns the unlock it granted.
    ///
    /// Returns `None` when the objective was already completed or has no
    /// achievement in this seed. Retroactive completions are not announced.
    pub fn add_objective(&mut self, objective: Objective, is_retroactive: bool) -> Option<Unlock> {
        if self.data.ledger.is_objective_completed(&objective) {
            return None;
        }

        let Some(unlock) = self.data.achievements.unlock_for(&objective) else {
            warn!("No achievement found for objective {} ({})", objective, objective.id());
            return None;
        };

        self.data.ledger.record(objective, unlock);
        if !is_retroactive {
            info!("Objective completed: {} -> unlocked {}", objective, unlock);
        }
        Some(unlock)
    }

    pub fn is_all_character_objectives_completed(&self, character: Character) -> bool {
        CHARACTER_OBJECTIVE_KINDS
            .iter()
            .all(|kind| self.is_objective_completed(&Objective::character(character, *kind)))
    }

    /// The last `count` completions, newest first.
    pub fn recent_achievements(&self, count: usize) -> Vec<(Objective, Unlock)> {
        self.data.ledger.recent(count).collect()
    }

    /// Completed and total objective counts.
    pub fn progress(&self) -> (usize, usize) {
        (self.data.ledger.len(), self.data.achievements.len())
    }
}

impl UnlockState for Tracker {
    fn is_unlock_granted(&self, unlock: &Unlock, for_run: bool) -> bool {
        if for_run && !self.is_active() {
            return true;
        }

        // Content outside the catalogs for this seed is never locked.
        if !self.catalogued.contains(unlock) {
            return true;
        }

        self.data.ledger.is_unlock_granted(unlock)
    }
}
