use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bosses::BossId;
use crate::ids::{
    BatterySubType, BombSubType, CardType, Challenge, Character, ChestVariant, CoinSubType,
    CollectibleType, GridEntityType, HeartSubType, KeySubType, LevelStage, PillEffect, RoomType,
    SackSubType, SlotVariant, StageType, TrinketType,
};
use crate::objective::CharacterObjectiveKind;

/// Late-game progression gates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum UnlockablePath {
    Chest,
    DarkRoom,
    MegaSatan,
    BossRush,
    BlueWomb,
    Void,
    RepentanceFloors,
    Ascent,
    GreedMode,
}

pub const UNLOCKABLE_PATHS: [UnlockablePath; 9] = [
    UnlockablePath::Chest,
    UnlockablePath::DarkRoom,
    UnlockablePath::MegaSatan,
    UnlockablePath::BossRush,
    UnlockablePath::BlueWomb,
    UnlockablePath::Void,
    UnlockablePath::RepentanceFloors,
    UnlockablePath::Ascent,
    UnlockablePath::GreedMode,
];

impl UnlockablePath {
    pub fn name(self) -> &'static str {
        match self {
            UnlockablePath::Chest => "The Chest",
            UnlockablePath::DarkRoom => "Dark Room",
            UnlockablePath::MegaSatan => "Mega Satan",
            UnlockablePath::BossRush => "Boss Rush",
            UnlockablePath::BlueWomb => "Blue Womb",
            UnlockablePath::Void => "The Void",
            UnlockablePath::RepentanceFloors => "Repentance floors",
            UnlockablePath::Ascent => "The Ascent",
            UnlockablePath::GreedMode => "Greed Mode",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum AltFloor {
    Cellar,
    BurningBasement,
    Catacombs,
    FloodedCaves,
    Necropolis,
    DankDepths,
    Utero,
    ScarredWomb,
    Dross,
    Ashpit,
    Gehenna,
}

pub const ALT_FLOORS: [AltFloor; 11] = [
    AltFloor::Cellar,
    AltFloor::BurningBasement,
    AltFloor::Catacombs,
    AltFloor::FloodedCaves,
    AltFloor::Necropolis,
    AltFloor::DankDepths,
    AltFloor::Utero,
    AltFloor::ScarredWomb,
    AltFloor::Dross,
    AltFloor::Ashpit,
    AltFloor::Gehenna,
];

impl AltFloor {
    pub fn name(self) -> &'static str {
        match self {
            AltFloor::Cellar => "Cellar",
            AltFloor::BurningBasement => "Burning Basement",
            AltFloor::Catacombs => "Catacombs",
            AltFloor::FloodedCaves => "Flooded Caves",
            AltFloor::Necropolis => "Necropolis",
            AltFloor::DankDepths => "Dank Depths",
            AltFloor::Utero => "Utero",
            AltFloor::ScarredWomb => "Scarred Womb",
            AltFloor::Dross => "Dross",
            AltFloor::Ashpit => "Ashpit",
            AltFloor::Gehenna => "Gehenna",
        }
    }
}

/// Miscellaneous content that does not fit a host catalog.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum OtherUnlockKind {
    Beds,
    Shopkeepers,
    BlueFireplaces,
    GoldenTrinkets,
    GoldenPills,
    HorsePills,
    Urns,
    Mushrooms,
    Skulls,
    Polyps,
    GoldenPoop,
    RainbowPoop,
    BlackPoop,
    HolyPoop,
    CharmingPoop,
}

pub const OTHER_UNLOCK_KINDS: [OtherUnlockKind; 15] = [
    OtherUnlockKind::Beds,
    OtherUnlockKind::Shopkeepers,
    OtherUnlockKind::BlueFireplaces,
    OtherUnlockKind::GoldenTrinkets,
    OtherUnlockKind::GoldenPills,
    OtherUnlockKind::HorsePills,
    OtherUnlockKind::Urns,
    OtherUnlockKind::Mushrooms,
    OtherUnlockKind::Skulls,
    OtherUnlockKind::Polyps,
    OtherUnlockKind::GoldenPoop,
    OtherUnlockKind::RainbowPoop,
    OtherUnlockKind::BlackPoop,
    OtherUnlockKind::HolyPoop,
    OtherUnlockKind::CharmingPoop,
];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum UnlockType {
    Character,
    Path,
    AltFloor,
    Room,
    Challenge,
    Collectible,
    Trinket,
    Card,
    PillEffect,
    Heart,
    Coin,
    Bomb,
    Key,
    Battery,
    Sack,
    Chest,
    Slot,
    GridEntity,
    Other,
}

/// Something granted to the player when its paired objective is completed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Unlock {
    Character { character: Character },
    Path { path: UnlockablePath },
    AltFloor { alt_floor: AltFloor },
    Room { room_type: RoomType },
    Challenge { challenge: Challenge },
    Collectible { collectible_type: CollectibleType },
    Trinket { trinket_type: TrinketType },
    Card { card_type: CardType },
    PillEffect { pill_effect: PillEffect },
    Heart { heart_sub_type: HeartSubType },
    Coin { coin_sub_type: CoinSubType },
    Bomb { bomb_sub_type: BombSubType },
    Key { key_sub_type: KeySubType },
    Battery { battery_sub_type: BatterySubType },
    Sack { sack_sub_type: SackSubType },
    Chest { chest_variant: ChestVariant },
    Slot { slot_variant: SlotVariant },
    GridEntity { grid_entity_type: GridEntityType },
    Other { kind: OtherUnlockKind },
}

impl Unlock {
    pub fn unlock_type(&self) -> UnlockType {
        match self {
            Unlock::Character { .. } => UnlockType::Character,
            Unlock::Path { .. } => UnlockType::Path,
            Unlock::AltFloor { .. } => UnlockType::AltFloor,
            Unlock::Room { .. } => UnlockType::Room,
            Unlock::Challenge { .. } => UnlockType::Challenge,
            Unlock::Collectible { .. } => UnlockType::Collectible,
            Unlock::Trinket { .. } => UnlockType::Trinket,
            Unlock::Card { .. } => UnlockType::Card,
            Unlock::PillEffect { .. } => UnlockType::PillEffect,
            Unlock::Heart { .. } => UnlockType::Heart,
            Unlock::Coin { .. } => UnlockType::Coin,
            Unlock::Bomb { .. } => UnlockType::Bomb,
            Unlock::Key { .. } => UnlockType::Key,
            Unlock::Battery { .. } => UnlockType::Battery,
            Unlock::Sack { .. } => UnlockType::Sack,
            Unlock::Chest { .. } => UnlockType::Chest,
            Unlock::Slot { .. } => UnlockType::Slot,
            Unlock::GridEntity { .. } => UnlockType::GridEntity,
            Unlock::Other { .. } => UnlockType::Other,
        }
    }
}

impl fmt::Display for Unlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unlock::Character { character } => write!(f, "character: {}", character.name()),
            Unlock::Path { path } => write!(f, "area: {}", path.name()),
            Unlock::AltFloor { alt_floor } => write!(f, "floor: {}", alt_floor.name()),
            Unlock::Room { room_type } => write!(f, "room: {:?}", room_type),
            Unlock::Challenge { challenge } => write!(f, "challenge: {}", challenge.name()),
            Unlock::Collectible { collectible_type } => {
                write!(f, "collectible #{}", collectible_type.0)
            }
            Unlock::Trinket { trinket_type } => write!(f, "trinket #{}", trinket_type.0),
            Unlock::Card { card_type } => write!(f, "card #{}", card_type.0),
            Unlock::PillEffect { pill_effect } => write!(f, "pill effect #{}", pill_effect.0),
            Unlock::Heart { heart_sub_type } => write!(f, "heart: {:?}", heart_sub_type),
            Unlock::Coin { coin_sub_type } => write!(f, "coin: {:?}", coin_sub_type),
            Unlock::Bomb { bomb_sub_type } => write!(f, "bomb: {:?}", bomb_sub_type),
            Unlock::Key { key_sub_type } => write!(f, "key: {:?}", key_sub_type),
            Unlock::Battery { battery_sub_type } => write!(f, "battery: {:?}", battery_sub_type),
            Unlock::Sack { sack_sub_type } => write!(f, "sack: {:?}", sack_sub_type),
            Unlock::Chest { chest_variant } => write!(f, "chest: {:?}", chest_variant),
            Unlock::Slot { slot_variant } => write!(f, "slot: {:?}", slot_variant),
            Unlock::GridEntity { grid_entity_type } => {
                write!(f, "grid entity: {:?}", grid_entity_type)
            }
            Unlock::Other { kind } => write!(f, "{:?}", kind),
        }
    }
}

/// The single path a character objective kind sits behind, if any.
///
/// Delirium and the Dark Room / Chest no-hit kind need more than one path
/// and are handled by the reachability predicates directly.
pub fn path_for_objective_kind(kind: CharacterObjectiveKind) -> Option<UnlockablePath> {
    use CharacterObjectiveKind as K;

    match kind {
        K::BlueBaby => Some(UnlockablePath::Chest),
        K::Lamb => Some(UnlockablePath::DarkRoom),
        K::MegaSatan => Some(UnlockablePath::MegaSatan),
        K::BossRush => Some(UnlockablePath::BossRush),
        K::Hush => Some(UnlockablePath::BlueWomb),
        K::Mother
        | K::NoHitDownpour1
        | K::NoHitDownpour2
        | K::NoHitMines1
        | K::NoHitMines2
        | K::NoHitMausoleum1
        | K::NoHitMausoleum2
        | K::NoHitCorpse1
        | K::NoHitCorpse2 => Some(UnlockablePath::RepentanceFloors),
        K::Beast => Some(UnlockablePath::Ascent),
        K::UltraGreed => Some(UnlockablePath::GreedMode),
        _ => None,
    }
}

/// The path a story boss sits behind, if any. Delirium is special-cased by
/// the reachability predicates.
pub fn path_for_story_boss(boss: BossId) -> Option<UnlockablePath> {
    match boss {
        BossId::BlueBaby => Some(UnlockablePath::Chest),
        BossId::Lamb => Some(UnlockablePath::DarkRoom),
        BossId::MegaSatan => Some(UnlockablePath::MegaSatan),
        BossId::UltraGreed | BossId::UltraGreedier => Some(UnlockablePath::GreedMode),
        BossId::Hush => Some(UnlockablePath::BlueWomb),
        BossId::Mother | BossId::MausoleumMom | BossId::MausoleumMomsHeart => {
            Some(UnlockablePath::RepentanceFloors)
        }
        BossId::Dogma | BossId::Beast => Some(UnlockablePath::Ascent),
        _ => None,
    }
}

/// First floor of the chapter a stage belongs to.
pub fn chapter_stage(stage: LevelStage) -> LevelStage {
    match stage {
        LevelStage::Basement2 => LevelStage::Basement1,
        LevelStage::Caves2 => LevelStage::Caves1,
        LevelStage::Depths2 => LevelStage::Depths1,
        LevelStage::Womb2 => LevelStage::Womb1,
        other => other,
    }
}

/// The alt floor governing a stage type on a chapter, if one exists.
pub fn alt_floor_for_stage(stage: LevelStage, stage_type: StageType) -> Option<AltFloor> {
    let floor = match (chapter_stage(stage), stage_type) {
        (LevelStage::Basement1, StageType::WrathOfTheLamb) => AltFloor::Cellar,
        (LevelStage::Basement1, StageType::Afterbirth) => AltFloor::BurningBasement,
        (LevelStage::Basement1, StageType::RepentanceB) => AltFloor::Dross,
        (LevelStage::Caves1, StageType::WrathOfTheLamb) => AltFloor::Catacombs,
        (LevelStage::Caves1, StageType::Afterbirth) => AltFloor::FloodedCaves,
        (LevelStage::Caves1, StageType::RepentanceB) => AltFloor::Ashpit,
        (LevelStage::Depths1, StageType::WrathOfTheLamb) => AltFloor::Necropolis,
        (LevelStage::Depths1, StageType::Afterbirth) => AltFloor::DankDepths,
        (LevelStage::Depths1, StageType::RepentanceB) => AltFloor::Gehenna,
        (LevelStage::Womb1, StageType::WrathOfTheLamb) => AltFloor::Utero,
        (LevelStage::Womb1, StageType::Afterbirth) => AltFloor::ScarredWomb,
        _ => return None,
    };
    Some(floor)
}
