//! Keeps locked content out of a run.
//!
//! The host asks for the item and trinket ids to strip from its pools once
//! per run, strips the starting inventory through [`starting_items_to_remove`]
//! and routes every spawned pickup through [`substitute_pickup`]. All
//! queries are made with `for_run = true`, so an ended seed filters nothing.

use rand::Rng;

use crate::catalog::{BANNED_COLLECTIBLES, BANNED_TRINKETS, EXCLUDED_CARDS};
use crate::ids::{
    vanilla_card_types, BatterySubType, BombSubType, CardType, Character, ChestVariant,
    CoinSubType, CollectibleType, HeartSubType, KeySubType, PillColor, PillEffect, SackSubType,
    TrinketType,
};
use crate::tracker::{Tracker, UnlockState};
use crate::unlock::OtherUnlockKind;

/// Items that revive the player, held back until the character they belong
/// to has every objective completed.
pub const REVIVAL_COLLECTIBLES: [(CollectibleType, Character); 3] = [
    (CollectibleType::ANKH, Character::BlueBaby),
    (CollectibleType::JUDAS_SHADOW, Character::Judas),
    (CollectibleType::LAZARUS_RAGS, Character::Lazarus),
];

pub const REVIVAL_TRINKETS: [(TrinketType, Character); 2] = [
    (TrinketType::MYSTERIOUS_PAPER, Character::Lost),
    (TrinketType::MISSING_POSTER, Character::Lost),
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Pickup {
    Heart(HeartSubType),
    Coin(CoinSubType),
    Bomb(BombSubType),
    Key(KeySubType),
    Battery(BatterySubType),
    Sack(SackSubType),
    Chest(ChestVariant),
    Card(CardType),
    Trinket(TrinketType),
    Pill(PillColor),
}

const PENNY: Pickup = Pickup::Coin(CoinSubType::Penny);

fn revival_held_back(tracker: &Tracker, character: Character) -> bool {
    tracker.is_active() && !tracker.is_all_character_objectives_completed(character)
}

/// Collectible ids to remove from every item pool for this run.
pub fn collectibles_to_remove(tracker: &Tracker) -> Vec<CollectibleType> {
    if !tracker.is_active() {
        return Vec::new();
    }

    let mut removed = tracker.locked_collectible_types(true);
    removed.extend(BANNED_COLLECTIBLES);
    for (collectible, character) in REVIVAL_COLLECTIBLES {
        if revival_held_back(tracker, character) && !removed.contains(&collectible) {
            removed.push(collectible);
        }
    }
    removed
}

/// Trinket ids to remove from the trinket pool for this run.
pub fn trinkets_to_remove(tracker: &Tracker) -> Vec<TrinketType> {
    if !tracker.is_active() {
        return Vec::new();
    }

    let mut removed = tracker.locked_trinket_types(true);
    removed.extend(BANNED_TRINKETS);
    for (trinket, character) in REVIVAL_TRINKETS {
        if revival_held_back(tracker, character) && !removed.contains(&trinket) {
            removed.push(trinket);
        }
    }
    removed
}

/// Restrictions the host puts on a random card draw.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CardRequest {
    pub include_playing_cards: bool,
    pub include_runes: bool,
    pub only_runes: bool,
}

impl Default for CardRequest {
    fn default() -> Self {
        Self {
            include_playing_cards: true,
            include_runes: true,
            only_runes: false,
        }
    }
}

/// Replacement for a locked card the host is about to hand out. `None`
/// keeps the requested card. A Rune Shard asks for the card to become a
/// penny once it spawns.
pub fn substitute_card_request<S, R>(
    state: &S,
    card: CardType,
    request: CardRequest,
    rng: &mut R,
) -> Option<CardType>
where
    S: UnlockState + ?Sized,
    R: Rng + ?Sized,
{
    if state.is_card_type_unlocked(card, true) {
        return None;
    }

    let unlocked: Vec<CardType> = vanilla_card_types()
        .filter(|card| !EXCLUDED_CARDS.contains(card))
        .filter(|card| state.is_card_type_unlocked(*card, true))
        .collect();
    if unlocked.is_empty() {
        return None;
    }

    let candidates: Vec<CardType> = unlocked
        .into_iter()
        .filter(|card| {
            if request.only_runes {
                return card.is_rune();
            }
            (request.include_playing_cards || !card.is_suit_card())
                && (request.include_runes || !card.is_rune())
        })
        .collect();
    if candidates.is_empty() {
        return Some(CardType::RUNE_SHARD);
    }
    Some(candidates[rng.gen_range(0..candidates.len())])
}

fn substitute_card<S, R>(state: &S, card: CardType, rng: &mut R) -> Pickup
where
    S: UnlockState + ?Sized,
    R: Rng + ?Sized,
{
    if card == CardType::RUNE_SHARD || !state.any_card_unlocked(true) {
        return PENNY;
    }
    match substitute_card_request(state, card, CardRequest::default(), rng) {
        None => Pickup::Card(card),
        Some(CardType::RUNE_SHARD) => PENNY,
        Some(replacement) => Pickup::Card(replacement),
    }
}

fn substitute_trinket<S, R>(state: &S, trinket: TrinketType, rng: &mut R) -> Pickup
where
    S: UnlockState + ?Sized,
    R: Rng + ?Sized,
{
    let unlocked = state.unlocked_trinket_types(true);
    let base = trinket.normal();
    if unlocked.contains(&base) {
        if trinket.is_golden() && !state.is_other_unlocked(OtherUnlockKind::GoldenTrinkets, true) {
            return Pickup::Trinket(base);
        }
        return Pickup::Trinket(trinket);
    }
    if unlocked.is_empty() {
        return PENNY;
    }
    Pickup::Trinket(unlocked[rng.gen_range(0..unlocked.len())])
}

fn substitute_pill<S>(state: &S, color: PillColor) -> Pickup
where
    S: UnlockState + ?Sized,
{
    if !state.any_pill_effect_unlocked(true) {
        return PENNY;
    }

    let mut color = color;
    if color.is_gold() && !state.is_other_unlocked(OtherUnlockKind::GoldenPills, true) {
        color = if color.is_horse() {
            PillColor(PillColor::FIRST.0 | (color.0 & !color.normal().0))
        } else {
            PillColor::FIRST
        };
    }
    if color.is_horse() && !state.is_other_unlocked(OtherUnlockKind::HorsePills, true) {
        color = color.normal();
    }
    Pickup::Pill(color)
}

/// What the host should spawn in place of `pickup`.
pub fn substitute_pickup<S, R>(state: &S, pickup: Pickup, rng: &mut R) -> Pickup
where
    S: UnlockState + ?Sized,
    R: Rng + ?Sized,
{
    match pickup {
        Pickup::Heart(sub_type) if !state.is_heart_sub_type_unlocked(sub_type, true) => {
            Pickup::Heart(HeartSubType::Half)
        }
        Pickup::Coin(sub_type) if !state.is_coin_sub_type_unlocked(sub_type, true) => PENNY,
        Pickup::Bomb(sub_type) if !state.is_bomb_sub_type_unlocked(sub_type, true) => {
            Pickup::Bomb(BombSubType::Normal)
        }
        Pickup::Key(sub_type) if !state.is_key_sub_type_unlocked(sub_type, true) => {
            Pickup::Key(KeySubType::Normal)
        }
        Pickup::Battery(sub_type) if !state.is_battery_sub_type_unlocked(sub_type, true) => PENNY,
        Pickup::Sack(sub_type) if !state.is_sack_sub_type_unlocked(sub_type, true) => PENNY,
        Pickup::Chest(variant) if !state.is_chest_variant_unlocked(variant, true) => {
            Pickup::Chest(ChestVariant::Chest)
        }
        Pickup::Card(card) => substitute_card(state, card, rng),
        Pickup::Trinket(trinket) => substitute_trinket(state, trinket, rng),
        Pickup::Pill(color) => substitute_pill(state, color),
        unlocked => unlocked,
    }
}

/// A character's inventory when a run begins.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StartingItems {
    pub collectibles: Vec<CollectibleType>,
    pub trinkets: Vec<TrinketType>,
    pub cards: Vec<CardType>,
    pub pills: Vec<PillColor>,
}

fn is_eden(character: Character) -> bool {
    matches!(character, Character::Eden | Character::EdenB)
}

/// The part of `held` the host must take away from `character` at the start
/// of a run. Eden loses everything and is handed a fresh loadout by
/// [`eden_starting_loadout`].
pub fn starting_items_to_remove(
    tracker: &Tracker,
    character: Character,
    held: &StartingItems,
) -> StartingItems {
    if !tracker.is_active() {
        return StartingItems::default();
    }
    let eden = is_eden(character);

    let collectibles = held
        .collectibles
        .iter()
        .copied()
        .filter(|collectible| {
            // Tainted Cain cannot play without the bag.
            if character == Character::CainB && *collectible == CollectibleType::BAG_OF_CRAFTING {
                return false;
            }
            eden
                || BANNED_COLLECTIBLES.contains(collectible)
                || !tracker.is_collectible_type_unlocked(*collectible, true)
        })
        .collect();

    let golden_locked = !tracker.is_other_unlocked(OtherUnlockKind::GoldenTrinkets, true);
    let trinkets = held
        .trinkets
        .iter()
        .copied()
        .filter(|trinket| {
            let base = trinket.normal();
            eden
                || BANNED_TRINKETS.contains(&base)
                || !tracker.is_trinket_type_unlocked(base, true)
                || (trinket.is_golden() && golden_locked)
        })
        .collect();

    let cards = held
        .cards
        .iter()
        .copied()
        .filter(|card| eden || !tracker.is_card_type_unlocked(*card, true))
        .collect();

    let pills_locked = eden
        || !tracker.any_pill_effect_unlocked(true)
        || (character == Character::Magdalene
            && !tracker.is_pill_effect_unlocked(PillEffect::SPEED_UP, true));
    let pills = if pills_locked {
        held.pills.clone()
    } else {
        Vec::new()
    };

    StartingItems {
        collectibles,
        trinkets,
        cards,
        pills,
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EdenLoadout {
    pub red_hearts: u8,
    pub soul_hearts: u8,
    pub active: Option<CollectibleType>,
    pub passive: Option<CollectibleType>,
}

/// Random health and items for Eden built from unlocked collectibles only.
/// The host supplies which collectibles may roll as Eden's active and
/// passive item. Without an unlocked active a second passive is given.
pub fn eden_starting_loadout<R>(
    tracker: &Tracker,
    character: Character,
    active_pool: &[CollectibleType],
    passive_pool: &[CollectibleType],
    rng: &mut R,
) -> Option<EdenLoadout>
where
    R: Rng + ?Sized,
{
    if !is_eden(character) || !tracker.is_character_unlocked(character, true) {
        return None;
    }

    let usable = |pool: &[CollectibleType]| -> Vec<CollectibleType> {
        pool.iter()
            .copied()
            .filter(|c| !BANNED_COLLECTIBLES.contains(c))
            .filter(|c| tracker.is_collectible_type_unlocked(*c, true))
            .collect()
    };
    let actives = usable(active_pool);
    let mut passives = usable(passive_pool);

    let red_hearts: u8 = rng.gen_range(0..=3);
    let mut soul_hearts: u8 = rng.gen_range(0..=3 - red_hearts);
    if red_hearts == 0 && soul_hearts < 2 {
        soul_hearts = 2;
    }

    let passive = if passives.is_empty() {
        None
    } else {
        let idx = rng.gen_range(0..passives.len());
        Some(passives.swap_remove(idx))
    };
    let active = if !actives.is_empty() {
        Some(actives[rng.gen_range(0..actives.len())])
    } else if !passives.is_empty() {
        Some(passives[rng.gen_range(0..passives.len())])
    } else {
        None
    };

    Some(EdenLoadout {
        red_hearts,
        soul_hearts,
        active,
        passive,
    })
}
