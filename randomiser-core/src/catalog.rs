//! Fixed-order catalogs of every objective and every unlock for a mode.
//!
//! Exclusions live in the constant sets below. Nothing else in the crate
//! decides what is unlockable.

use crate::bosses::{BossId, BOSS_IDS, NIGHTMARE_ONLY_BOSSES};
use crate::ids::{
    vanilla_card_types, vanilla_collectible_types, vanilla_pill_effects, vanilla_trinket_types,
    BatterySubType, BombSubType, CardType, Challenge, ChestVariant, CoinSubType, CollectibleType,
    HeartSubType, KeySubType, RoomType, SlotVariant, TrinketType, BATTERY_SUB_TYPES,
    BOMB_SUB_TYPES, CHALLENGES, CHEST_VARIANTS, COIN_SUB_TYPES, GRID_ENTITY_TYPES,
    HEART_SUB_TYPES, KEY_SUB_TYPES, MAIN_CHARACTERS, SACK_SUB_TYPES, SLOT_VARIANTS,
    STARTING_CHARACTER,
};
use crate::objective::{CharacterObjectiveKind, Objective, CHARACTER_OBJECTIVE_KINDS};
use crate::unlock::{Unlock, UnlockablePath, ALT_FLOORS, OTHER_UNLOCK_KINDS, UNLOCKABLE_PATHS};
use crate::{RandomiserError, RandomiserMode, Result};

/// Bosses whose no-hit objective is waived in standard mode.
pub const NO_HIT_EXCEPTION_BOSSES: [BossId; 3] =
    [BossId::MomsHeart, BossId::Delirium, BossId::Raglich];

/// Exceptions that stay waived in nightmare mode. Raglich never spawns.
pub const NIGHTMARE_NO_HIT_EXCEPTION_BOSSES: [BossId; 1] = [BossId::Raglich];

/// Challenges that break with reduced pools.
pub const BANNED_CHALLENGES: [Challenge; 1] = [Challenge::DeleteThis];

/// Items that only drop from boss rooms; always available outside nightmare.
pub const BOSS_ROOM_COLLECTIBLE_EXCEPTIONS: [CollectibleType; 5] = [
    CollectibleType::BREAKFAST,
    CollectibleType::WOODEN_SPOON,
    CollectibleType::MOMS_UNDERWEAR,
    CollectibleType::WIRE_COAT_HANGER,
    CollectibleType::CAT_O_NINE_TAILS,
];

pub const QUEST_COLLECTIBLES: [CollectibleType; 11] = [
    CollectibleType::KEY_PIECE_1,
    CollectibleType::KEY_PIECE_2,
    CollectibleType::POLAROID,
    CollectibleType::NEGATIVE,
    CollectibleType::BROKEN_SHOVEL_1,
    CollectibleType::BROKEN_SHOVEL_2,
    CollectibleType::MOMS_SHOVEL,
    CollectibleType::KNIFE_PIECE_1,
    CollectibleType::KNIFE_PIECE_2,
    CollectibleType::DOGMA,
    CollectibleType::DADS_NOTE,
];

pub const NON_OBTAINABLE_COLLECTIBLES: [CollectibleType; 4] = [
    CollectibleType::BOOK_OF_BELIAL_BIRTHRIGHT,
    CollectibleType::BROKEN_GLASS_CANNON,
    CollectibleType::DAMOCLES_PASSIVE,
    CollectibleType::RECALL,
];

pub const BANNED_COLLECTIBLES: [CollectibleType; 7] = [
    CollectibleType::GNAWED_LEAF,
    CollectibleType::EDENS_BLESSING,
    CollectibleType::PLAN_C,
    CollectibleType::CLICKER,
    CollectibleType::METRONOME,
    CollectibleType::R_KEY,
    CollectibleType::TMTRAINER,
];

pub const BANNED_TRINKETS: [TrinketType; 1] = [TrinketType::ERROR];

pub const EXCLUDED_CARDS: [CardType; 1] = [CardType::RUNE_SHARD];

/// Basic pickups that are always available.
pub const EXCLUDED_HEART_SUB_TYPES: [HeartSubType; 2] = [HeartSubType::Full, HeartSubType::Half];
pub const EXCLUDED_COIN_SUB_TYPES: [CoinSubType; 1] = [CoinSubType::Penny];
pub const EXCLUDED_BOMB_SUB_TYPES: [BombSubType; 5] = [
    BombSubType::Normal,
    BombSubType::Troll,
    BombSubType::MegaTroll,
    BombSubType::GoldenTroll,
    BombSubType::Giga,
];
pub const EXCLUDED_KEY_SUB_TYPES: [KeySubType; 1] = [KeySubType::Normal];
pub const EXCLUDED_BATTERY_SUB_TYPES: [BatterySubType; 0] = [];
pub const EXCLUDED_CHEST_VARIANTS: [ChestVariant; 3] = [
    ChestVariant::Chest,
    ChestVariant::OldChest,
    ChestVariant::MomsChest,
];
pub const EXCLUDED_SLOT_VARIANTS: [SlotVariant; 4] = [
    SlotVariant::DonationMachine,
    SlotVariant::GreedDonationMachine,
    SlotVariant::MomsDressingTable,
    SlotVariant::IsaacSecret,
];

pub const UNLOCKABLE_ROOM_TYPES: [RoomType; 11] = [
    RoomType::Arcade,
    RoomType::Curse,
    RoomType::Challenge,
    RoomType::Library,
    RoomType::Sacrifice,
    RoomType::CleanBedroom,
    RoomType::DirtyBedroom,
    RoomType::Vault,
    RoomType::Dice,
    RoomType::Planetarium,
    RoomType::UltraSecret,
];

pub const NIGHTMARE_ONLY_ROOM_TYPES: [RoomType; 1] = [RoomType::SuperSecret];

/// Low-skill milestones that the gateway paths are placed behind.
pub const EASY_OBJECTIVES: [CharacterObjectiveKind; 12] = [
    CharacterObjectiveKind::Mom,
    CharacterObjectiveKind::ItLives,
    CharacterObjectiveKind::Isaac,
    CharacterObjectiveKind::Satan,
    CharacterObjectiveKind::NoHitBasement1,
    CharacterObjectiveKind::NoHitBasement2,
    CharacterObjectiveKind::NoHitCaves1,
    CharacterObjectiveKind::NoHitCaves2,
    CharacterObjectiveKind::NoHitDepths1,
    CharacterObjectiveKind::NoHitDepths2,
    CharacterObjectiveKind::NoHitWomb1,
    CharacterObjectiveKind::NoHitWomb2,
];

/// Paths guaranteed to sit behind an easy objective of the starting character.
pub const GATEWAY_PATHS: [UnlockablePath; 2] = [UnlockablePath::Chest, UnlockablePath::DarkRoom];

pub fn no_hit_exception_bosses(mode: RandomiserMode) -> &'static [BossId] {
    match mode {
        RandomiserMode::Standard => &NO_HIT_EXCEPTION_BOSSES,
        RandomiserMode::Nightmare => &NIGHTMARE_NO_HIT_EXCEPTION_BOSSES,
    }
}

pub fn no_hit_bosses(mode: RandomiserMode) -> Vec<BossId> {
    let exceptions = no_hit_exception_bosses(mode);
    BOSS_IDS
        .iter()
        .copied()
        .filter(|boss| !exceptions.contains(boss))
        .filter(|boss| mode == RandomiserMode::Nightmare || !NIGHTMARE_ONLY_BOSSES.contains(boss))
        .collect()
}

pub fn unlockable_challenges() -> impl Iterator<Item = Challenge> {
    CHALLENGES
        .into_iter()
        .filter(|challenge| !BANNED_CHALLENGES.contains(challenge))
}

pub fn unlockable_collectible_types(mode: RandomiserMode) -> Vec<CollectibleType> {
    vanilla_collectible_types()
        .filter(|collectible| {
            let boss_room_exception = BOSS_ROOM_COLLECTIBLE_EXCEPTIONS.contains(collectible);
            let nightmare_boss_room_item = mode == RandomiserMode::Nightmare
                && *collectible != CollectibleType::BREAKFAST;
            (!boss_room_exception || nightmare_boss_room_item)
                && !QUEST_COLLECTIBLES.contains(collectible)
                && !NON_OBTAINABLE_COLLECTIBLES.contains(collectible)
                && !BANNED_COLLECTIBLES.contains(collectible)
        })
        .collect()
}

pub fn unlockable_room_types(mode: RandomiserMode) -> Vec<RoomType> {
    let mut rooms = UNLOCKABLE_ROOM_TYPES.to_vec();
    if mode == RandomiserMode::Nightmare {
        rooms.extend(NIGHTMARE_ONLY_ROOM_TYPES);
    }
    rooms
}

/// Every objective for a mode: characters, then bosses, then challenges.
pub fn all_objectives(mode: RandomiserMode) -> Vec<Objective> {
    let mut objectives = Vec::new();

    for character in MAIN_CHARACTERS {
        for kind in CHARACTER_OBJECTIVE_KINDS {
            objectives.push(Objective::Character { character, kind });
        }
    }

    for boss in no_hit_bosses(mode) {
        objectives.push(Objective::Boss { boss });
    }

    for challenge in unlockable_challenges() {
        objectives.push(Objective::Challenge { challenge });
    }

    objectives
}

/// Every unlock for a mode, grouped by unlock type in declaration order.
pub fn all_unlocks(mode: RandomiserMode) -> Vec<Unlock> {
    let mut unlocks = Vec::new();

    for character in MAIN_CHARACTERS {
        if character != STARTING_CHARACTER {
            unlocks.push(Unlock::Character { character });
        }
    }
    for path in UNLOCKABLE_PATHS {
        unlocks.push(Unlock::Path { path });
    }
    for alt_floor in ALT_FLOORS {
        unlocks.push(Unlock::AltFloor { alt_floor });
    }
    for room_type in unlockable_room_types(mode) {
        unlocks.push(Unlock::Room { room_type });
    }
    for challenge in unlockable_challenges() {
        unlocks.push(Unlock::Challenge { challenge });
    }
    for collectible_type in unlockable_collectible_types(mode) {
        unlocks.push(Unlock::Collectible { collectible_type });
    }
    for trinket_type in vanilla_trinket_types().filter(|t| !BANNED_TRINKETS.contains(t)) {
        unlocks.push(Unlock::Trinket { trinket_type });
    }
    for card_type in vanilla_card_types().filter(|c| !EXCLUDED_CARDS.contains(c)) {
        unlocks.push(Unlock::Card { card_type });
    }
    for pill_effect in vanilla_pill_effects() {
        unlocks.push(Unlock::PillEffect { pill_effect });
    }

    for &heart_sub_type in HEART_SUB_TYPES {
        if !EXCLUDED_HEART_SUB_TYPES.contains(&heart_sub_type) {
            unlocks.push(Unlock::Heart { heart_sub_type });
        }
    }
    for &coin_sub_type in COIN_SUB_TYPES {
        if !EXCLUDED_COIN_SUB_TYPES.contains(&coin_sub_type) {
            unlocks.push(Unlock::Coin { coin_sub_type });
        }
    }
    for &bomb_sub_type in BOMB_SUB_TYPES {
        if !EXCLUDED_BOMB_SUB_TYPES.contains(&bomb_sub_type) {
            unlocks.push(Unlock::Bomb { bomb_sub_type });
        }
    }
    for &key_sub_type in KEY_SUB_TYPES {
        if !EXCLUDED_KEY_SUB_TYPES.contains(&key_sub_type) {
            unlocks.push(Unlock::Key { key_sub_type });
        }
    }
    for &battery_sub_type in BATTERY_SUB_TYPES {
        if !EXCLUDED_BATTERY_SUB_TYPES.contains(&battery_sub_type) {
            unlocks.push(Unlock::Battery { battery_sub_type });
        }
    }
    for &sack_sub_type in SACK_SUB_TYPES {
        unlocks.push(Unlock::Sack { sack_sub_type });
    }
    for &chest_variant in CHEST_VARIANTS {
        if !EXCLUDED_CHEST_VARIANTS.contains(&chest_variant) {
            unlocks.push(Unlock::Chest { chest_variant });
        }
    }
    for &slot_variant in SLOT_VARIANTS {
        if !EXCLUDED_SLOT_VARIANTS.contains(&slot_variant) {
            unlocks.push(Unlock::Slot { slot_variant });
        }
    }
    for &grid_entity_type in GRID_ENTITY_TYPES {
        unlocks.push(Unlock::GridEntity { grid_entity_type });
    }
    for kind in OTHER_UNLOCK_KINDS {
        unlocks.push(Unlock::Other { kind });
    }

    unlocks
}

/// Fails when a mode's catalogs cannot be paired one to one.
pub fn validate_objectives_unlocks_match(mode: RandomiserMode) -> Result<()> {
    let objectives = all_objectives(mode).len();
    let unlocks = all_unlocks(mode).len();
    if objectives != unlocks {
        return Err(RandomiserError::CatalogMismatch {
            mode,
            objectives,
            unlocks,
        });
    }
    Ok(())
}
