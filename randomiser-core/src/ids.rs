//! Game identifiers used by the objective and unlock catalogs.
//!
//! Small closed sets are plain enums whose discriminants match the host's
//! numbering. Catalogs with hundreds of members (collectibles, trinkets,
//! cards, pill effects) are newtypes over the host id with a vanilla range
//! and the list of ids the host never uses.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Character {
    Isaac = 0,
    Magdalene = 1,
    Cain = 2,
    Judas = 3,
    BlueBaby = 4,
    Eve = 5,
    Samson = 6,
    Azazel = 7,
    Lazarus = 8,
    Eden = 9,
    Lost = 10,
    Lilith = 13,
    Keeper = 14,
    Apollyon = 15,
    Forgotten = 16,
    Bethany = 18,
    Jacob = 19,
    IsaacB = 21,
    MagdaleneB = 22,
    CainB = 23,
    JudasB = 24,
    BlueBabyB = 25,
    EveB = 26,
    SamsonB = 27,
    AzazelB = 28,
    LazarusB = 29,
    EdenB = 30,
    LostB = 31,
    LilithB = 32,
    KeeperB = 33,
    ApollyonB = 34,
    ForgottenB = 35,
    BethanyB = 36,
    JacobB = 37,
}

/// The character every randomiser playthrough starts with. Never locked.
pub const STARTING_CHARACTER: Character = Character::Isaac;

pub const MAIN_CHARACTERS: [Character; 34] = [
    Character::Isaac,
    Character::Magdalene,
    Character::Cain,
    Character::Judas,
    Character::BlueBaby,
    Character::Eve,
    Character::Samson,
    Character::Azazel,
    Character::Lazarus,
    Character::Eden,
    Character::Lost,
    Character::Lilith,
    Character::Keeper,
    Character::Apollyon,
    Character::Forgotten,
    Character::Bethany,
    Character::Jacob,
    Character::IsaacB,
    Character::MagdaleneB,
    Character::CainB,
    Character::JudasB,
    Character::BlueBabyB,
    Character::EveB,
    Character::SamsonB,
    Character::AzazelB,
    Character::LazarusB,
    Character::EdenB,
    Character::LostB,
    Character::LilithB,
    Character::KeeperB,
    Character::ApollyonB,
    Character::ForgottenB,
    Character::BethanyB,
    Character::JacobB,
];

impl Character {
    pub fn player_type(self) -> u8 {
        self as u8
    }

    pub fn from_player_type(player_type: u8) -> Option<Character> {
        MAIN_CHARACTERS
            .iter()
            .copied()
            .find(|c| c.player_type() == player_type)
    }

    pub fn name(self) -> &'static str {
        match self {
            Character::Isaac => "Isaac",
            Character::Magdalene => "Magdalene",
            Character::Cain => "Cain",
            Character::Judas => "Judas",
            Character::BlueBaby => "Blue Baby",
            Character::Eve => "Eve",
            Character::Samson => "Samson",
            Character::Azazel => "Azazel",
            Character::Lazarus => "Lazarus",
            Character::Eden => "Eden",
            Character::Lost => "The Lost",
            Character::Lilith => "Lilith",
            Character::Keeper => "Keeper",
            Character::Apollyon => "Apollyon",
            Character::Forgotten => "The Forgotten",
            Character::Bethany => "Bethany",
            Character::Jacob => "Jacob & Esau",
            Character::IsaacB => "Tainted Isaac",
            Character::MagdaleneB => "Tainted Magdalene",
            Character::CainB => "Tainted Cain",
            Character::JudasB => "Tainted Judas",
            Character::BlueBabyB => "Tainted Blue Baby",
            Character::EveB => "Tainted Eve",
            Character::SamsonB => "Tainted Samson",
            Character::AzazelB => "Tainted Azazel",
            Character::LazarusB => "Tainted Lazarus",
            Character::EdenB => "Tainted Eden",
            Character::LostB => "Tainted Lost",
            Character::LilithB => "Tainted Lilith",
            Character::KeeperB => "Tainted Keeper",
            Character::ApollyonB => "Tainted Apollyon",
            Character::ForgottenB => "Tainted Forgotten",
            Character::BethanyB => "Tainted Bethany",
            Character::JacobB => "Tainted Jacob",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Challenge {
    PitchBlack = 1,
    HighBrow = 2,
    HeadTrauma = 3,
    DarknessFalls = 4,
    Tank = 5,
    SolarSystem = 6,
    SuicideKing = 7,
    CatGotYourTongue = 8,
    DemoMan = 9,
    Cursed = 10,
    GlassCannon = 11,
    WhenLifeGivesYouLemons = 12,
    Beans = 13,
    ItsInTheCards = 14,
    SlowRoll = 15,
    ComputerSavvy = 16,
    WakaWaka = 17,
    Host = 18,
    FamilyMan = 19,
    Purist = 20,
    Xxxxxxxxl = 21,
    Speed = 22,
    BlueBomber = 23,
    PayToPlay = 24,
    HaveAHeart = 25,
    IRule = 26,
    Brains = 27,
    PrideDay = 28,
    OnansStreak = 29,
    Guardian = 30,
    Backasswards = 31,
    AprilsFool = 32,
    PokeyMans = 33,
    UltraHard = 34,
    Pong = 35,
    ScatMan = 36,
    BloodyMary = 37,
    BaptismByFire = 38,
    IsaacsAwakening = 39,
    SeeingDouble = 40,
    PicaRun = 41,
    HotPotato = 42,
    Cantripped = 43,
    RedRedemption = 44,
    DeleteThis = 45,
}

pub const CHALLENGES: [Challenge; 45] = [
    Challenge::PitchBlack,
    Challenge::HighBrow,
    Challenge::HeadTrauma,
    Challenge::DarknessFalls,
    Challenge::Tank,
    Challenge::SolarSystem,
    Challenge::SuicideKing,
    Challenge::CatGotYourTongue,
    Challenge::DemoMan,
    Challenge::Cursed,
    Challenge::GlassCannon,
    Challenge::WhenLifeGivesYouLemons,
    Challenge::Beans,
    Challenge::ItsInTheCards,
    Challenge::SlowRoll,
    Challenge::ComputerSavvy,
    Challenge::WakaWaka,
    Challenge::Host,
    Challenge::FamilyMan,
    Challenge::Purist,
    Challenge::Xxxxxxxxl,
    Challenge::Speed,
    Challenge::BlueBomber,
    Challenge::PayToPlay,
    Challenge::HaveAHeart,
    Challenge::IRule,
    Challenge::Brains,
    Challenge::PrideDay,
    Challenge::OnansStreak,
    Challenge::Guardian,
    Challenge::Backasswards,
    Challenge::AprilsFool,
    Challenge::PokeyMans,
    Challenge::UltraHard,
    Challenge::Pong,
    Challenge::ScatMan,
    Challenge::BloodyMary,
    Challenge::BaptismByFire,
    Challenge::IsaacsAwakening,
    Challenge::SeeingDouble,
    Challenge::PicaRun,
    Challenge::HotPotato,
    Challenge::Cantripped,
    Challenge::RedRedemption,
    Challenge::DeleteThis,
];

impl Challenge {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Challenge> {
        CHALLENGES.iter().copied().find(|c| c.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            Challenge::PitchBlack => "Pitch Black",
            Challenge::HighBrow => "High Brow",
            Challenge::HeadTrauma => "Head Trauma",
            Challenge::DarknessFalls => "Darkness Falls",
            Challenge::Tank => "The Tank",
            Challenge::SolarSystem => "Solar System",
            Challenge::SuicideKing => "Suicide King",
            Challenge::CatGotYourTongue => "Cat Got Your Tongue",
            Challenge::DemoMan => "Demo Man",
            Challenge::Cursed => "Cursed!",
            Challenge::GlassCannon => "Glass Cannon",
            Challenge::WhenLifeGivesYouLemons => "When Life Gives You Lemons",
            Challenge::Beans => "Beans!",
            Challenge::ItsInTheCards => "It's In The Cards",
            Challenge::SlowRoll => "Slow Roll",
            Challenge::ComputerSavvy => "Computer Savvy",
            Challenge::WakaWaka => "Waka Waka",
            Challenge::Host => "The Host",
            Challenge::FamilyMan => "The Family Man",
            Challenge::Purist => "Purist",
            Challenge::Xxxxxxxxl => "XXXXXXXXL",
            Challenge::Speed => "SPEED!",
            Challenge::BlueBomber => "Blue Bomber",
            Challenge::PayToPlay => "PAY TO PLAY",
            Challenge::HaveAHeart => "Have a Heart",
            Challenge::IRule => "I RULE!",
            Challenge::Brains => "BRAINS!",
            Challenge::PrideDay => "PRIDE DAY!",
            Challenge::OnansStreak => "Onan's Streak",
            Challenge::Guardian => "The Guardian",
            Challenge::Backasswards => "Backasswards",
            Challenge::AprilsFool => "Aprils Fool",
            Challenge::PokeyMans => "Pokey Mans",
            Challenge::UltraHard => "Ultra Hard",
            Challenge::Pong => "Pong",
            Challenge::ScatMan => "Scat Man",
            Challenge::BloodyMary => "Bloody Mary",
            Challenge::BaptismByFire => "Baptism by Fire",
            Challenge::IsaacsAwakening => "Isaac's Awakening",
            Challenge::SeeingDouble => "Seeing Double",
            Challenge::PicaRun => "Pica Run",
            Challenge::HotPotato => "Hot Potato",
            Challenge::Cantripped => "Cantripped!",
            Challenge::RedRedemption => "Red Redemption",
            Challenge::DeleteThis => "DELETE THIS",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectibleType(pub u16);

impl CollectibleType {
    pub const BREAKFAST: Self = Self(25);
    pub const WOODEN_SPOON: Self = Self(27);
    pub const MOMS_UNDERWEAR: Self = Self(29);
    pub const WIRE_COAT_HANGER: Self = Self(32);
    pub const BOOK_OF_BELIAL_BIRTHRIGHT: Self = Self(59);
    pub const ANKH: Self = Self(161);
    pub const CAT_O_NINE_TAILS: Self = Self(165);
    pub const GNAWED_LEAF: Self = Self(210);
    pub const KEY_PIECE_1: Self = Self(238);
    pub const KEY_PIECE_2: Self = Self(239);
    pub const JUDAS_SHADOW: Self = Self(311);
    pub const POLAROID: Self = Self(327);
    pub const NEGATIVE: Self = Self(328);
    pub const LAZARUS_RAGS: Self = Self(332);
    pub const EDENS_BLESSING: Self = Self(381);
    pub const BROKEN_GLASS_CANNON: Self = Self(474);
    pub const PLAN_C: Self = Self(475);
    pub const CLICKER: Self = Self(482);
    pub const METRONOME: Self = Self(488);
    pub const BROKEN_SHOVEL_1: Self = Self(550);
    pub const BROKEN_SHOVEL_2: Self = Self(551);
    pub const MOMS_SHOVEL: Self = Self(552);
    pub const KNIFE_PIECE_1: Self = Self(626);
    pub const KNIFE_PIECE_2: Self = Self(627);
    pub const DOGMA: Self = Self(633);
    pub const R_KEY: Self = Self(636);
    pub const DAMOCLES_PASSIVE: Self = Self(656);
    pub const DADS_NOTE: Self = Self(668);
    pub const BAG_OF_CRAFTING: Self = Self(710);
    pub const RECALL: Self = Self(714);
    pub const TMTRAINER: Self = Self(721);
    pub const ANIMA_SOLA: Self = Self(722);
}

const LAST_VANILLA_COLLECTIBLE: u16 = 732;

/// Collectible ids inside the vanilla range that the host never assigns.
const UNUSED_COLLECTIBLE_IDS: [u16; 11] = [43, 61, 235, 587, 613, 620, 630, 648, 662, 666, 718];

pub fn vanilla_collectible_types() -> impl Iterator<Item = CollectibleType> {
    (1..=LAST_VANILLA_COLLECTIBLE)
        .filter(|id| !UNUSED_COLLECTIBLE_IDS.contains(id))
        .map(CollectibleType)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrinketType(pub u16);

impl TrinketType {
    pub const MYSTERIOUS_PAPER: Self = Self(21);
    pub const MISSING_POSTER: Self = Self(23);
    pub const ERROR: Self = Self(75);
    const GOLDEN_BIT: u16 = 0x8000;

    pub fn is_golden(self) -> bool {
        self.0 & Self::GOLDEN_BIT != 0
    }

    /// The plain trinket a golden one is built on.
    pub fn normal(self) -> TrinketType {
        TrinketType(self.0 & !Self::GOLDEN_BIT)
    }

    pub fn golden(self) -> TrinketType {
        TrinketType(self.0 | Self::GOLDEN_BIT)
    }
}

const LAST_VANILLA_TRINKET: u16 = 189;
const UNUSED_TRINKET_IDS: [u16; 1] = [47];

pub fn vanilla_trinket_types() -> impl Iterator<Item = TrinketType> {
    (1..=LAST_VANILLA_TRINKET)
        .filter(|id| !UNUSED_TRINKET_IDS.contains(id))
        .map(TrinketType)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardType(pub u16);

impl CardType {
    pub const FOOL: Self = Self(1);
    pub const SUICIDE_KING: Self = Self(46);
    pub const HOLY: Self = Self(51);
    pub const RUNE_SHARD: Self = Self(55);
    pub const QUEEN_OF_HEARTS: Self = Self(79);

    pub fn is_rune(self) -> bool {
        matches!(self.0, 32..=41 | 55 | 81..=97)
    }

    pub fn is_suit_card(self) -> bool {
        matches!(self.0, 23..=30) || self == Self::SUICIDE_KING || self == Self::QUEEN_OF_HEARTS
    }
}

const LAST_VANILLA_CARD: u16 = 97;

pub fn vanilla_card_types() -> impl Iterator<Item = CardType> {
    (1..=LAST_VANILLA_CARD).map(CardType)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PillEffect(pub u16);

impl PillEffect {
    pub const FULL_HEALTH: Self = Self(5);
    pub const SPEED_UP: Self = Self(14);
}

const LAST_VANILLA_PILL_EFFECT: u16 = 49;

pub fn vanilla_pill_effects() -> impl Iterator<Item = PillEffect> {
    (0..=LAST_VANILLA_PILL_EFFECT).map(PillEffect)
}

/// Host pill colour. Horse pills carry the horse bit on top of a normal colour.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PillColor(pub u16);

impl PillColor {
    pub const FIRST: Self = Self(1);
    pub const GOLD: Self = Self(14);
    const HORSE_BIT: u16 = 0x800;

    pub fn is_horse(self) -> bool {
        self.0 & Self::HORSE_BIT != 0
    }

    pub fn is_gold(self) -> bool {
        self.normal() == Self::GOLD
    }

    pub fn normal(self) -> PillColor {
        PillColor(self.0 & !Self::HORSE_BIT)
    }
}

macro_rules! sub_type_enum {
    ($name:ident, $all:ident, [$($variant:ident = $value:expr),+ $(,)?]) => {
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant = $value),+
        }

        pub const $all: &[$name] = &[$($name::$variant),+];

        impl $name {
            pub fn id(self) -> u16 {
                self as u16
            }

            pub fn from_id(id: u16) -> Option<$name> {
                $all.iter().copied().find(|v| v.id() == id)
            }
        }
    };
}

sub_type_enum!(HeartSubType, HEART_SUB_TYPES, [
    Full = 1,
    Half = 2,
    Soul = 3,
    Eternal = 4,
    DoublePack = 5,
    Black = 6,
    Golden = 7,
    HalfSoul = 8,
    Scared = 9,
    Blended = 10,
    Bone = 11,
    Rotten = 12,
]);

sub_type_enum!(CoinSubType, COIN_SUB_TYPES, [
    Penny = 1,
    Nickel = 2,
    Dime = 3,
    DoublePack = 4,
    LuckyPenny = 5,
    StickyNickel = 6,
    Golden = 7,
]);

sub_type_enum!(BombSubType, BOMB_SUB_TYPES, [
    Normal = 1,
    DoublePack = 2,
    Troll = 3,
    Golden = 4,
    MegaTroll = 5,
    GoldenTroll = 6,
    Giga = 7,
]);

sub_type_enum!(KeySubType, KEY_SUB_TYPES, [
    Normal = 1,
    Golden = 2,
    DoublePack = 3,
    Charged = 4,
]);

sub_type_enum!(BatterySubType, BATTERY_SUB_TYPES, [
    Normal = 1,
    Micro = 2,
    Mega = 3,
    Golden = 4,
]);

sub_type_enum!(SackSubType, SACK_SUB_TYPES, [
    Normal = 1,
    Black = 2,
]);

sub_type_enum!(ChestVariant, CHEST_VARIANTS, [
    Chest = 50,
    BombChest = 51,
    SpikedChest = 52,
    EternalChest = 53,
    MimicChest = 54,
    OldChest = 55,
    WoodenChest = 56,
    MegaChest = 57,
    HauntedChest = 58,
    LockedChest = 60,
    RedChest = 360,
    MomsChest = 390,
]);

sub_type_enum!(SlotVariant, SLOT_VARIANTS, [
    SlotMachine = 1,
    BloodDonationMachine = 2,
    FortuneTellingMachine = 3,
    Beggar = 4,
    DevilBeggar = 5,
    ShellGame = 6,
    KeyMaster = 7,
    DonationMachine = 8,
    BombBum = 9,
    ShopRestockMachine = 10,
    GreedDonationMachine = 11,
    MomsDressingTable = 12,
    BatteryBum = 13,
    IsaacSecret = 14,
    HellGame = 15,
    CraneGame = 16,
    Confessional = 17,
    RottenBeggar = 18,
]);

sub_type_enum!(GridEntityType, GRID_ENTITY_TYPES, [
    TintedRock = 4,
    CrawlSpace = 18,
    SuperTintedRock = 22,
    SpikedRock = 25,
    FoolsGoldRock = 27,
]);

sub_type_enum!(RoomType, ROOM_TYPES, [
    Default = 1,
    Shop = 2,
    Error = 3,
    Treasure = 4,
    Boss = 5,
    MiniBoss = 6,
    Secret = 7,
    SuperSecret = 8,
    Arcade = 9,
    Curse = 10,
    Challenge = 11,
    Library = 12,
    Sacrifice = 13,
    Devil = 14,
    Angel = 15,
    Dungeon = 16,
    BossRush = 17,
    CleanBedroom = 18,
    DirtyBedroom = 19,
    Vault = 20,
    Dice = 21,
    BlackMarket = 22,
    GreedExit = 23,
    Planetarium = 24,
    Teleporter = 25,
    TeleporterExit = 26,
    SecretExit = 27,
    Blue = 28,
    UltraSecret = 29,
]);

sub_type_enum!(LevelStage, LEVEL_STAGES, [
    Basement1 = 1,
    Basement2 = 2,
    Caves1 = 3,
    Caves2 = 4,
    Depths1 = 5,
    Depths2 = 6,
    Womb1 = 7,
    Womb2 = 8,
    BlueWomb = 9,
    SheolCathedral = 10,
    DarkRoomChest = 11,
    Void = 12,
    Home = 13,
]);

sub_type_enum!(StageType, STAGE_TYPES, [
    Original = 0,
    WrathOfTheLamb = 1,
    Afterbirth = 2,
    GreedMode = 3,
    RepentanceA = 4,
    RepentanceB = 5,
]);

impl StageType {
    pub fn is_repentance(self) -> bool {
        matches!(self, StageType::RepentanceA | StageType::RepentanceB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanilla_catalog_sizes() {
        assert_eq!(vanilla_collectible_types().count(), 721);
        assert_eq!(vanilla_trinket_types().count(), 188);
        assert_eq!(vanilla_card_types().count(), 97);
        assert_eq!(vanilla_pill_effects().count(), 50);
    }

    #[test]
    fn player_type_roundtrips_for_main_characters() {
        for character in MAIN_CHARACTERS {
            assert_eq!(Character::from_player_type(character.player_type()), Some(character));
        }
        // Lazarus II is not a main character.
        assert_eq!(Character::from_player_type(11), None);
    }

    #[test]
    fn golden_trinkets_keep_their_base() {
        let golden = TrinketType::MISSING_POSTER.golden();
        assert!(golden.is_golden());
        assert!(!TrinketType::MISSING_POSTER.is_golden());
        assert_eq!(golden.normal(), TrinketType::MISSING_POSTER);
    }

    #[test]
    fn horse_pill_colours() {
        let horse_gold = PillColor(PillColor::GOLD.0 | 0x800);
        assert!(horse_gold.is_horse());
        assert!(horse_gold.is_gold());
        assert_eq!(PillColor(0x803).normal(), PillColor(3));
        assert!(!PillColor(3).is_horse());
    }

    #[test]
    fn rune_and_suit_cards() {
        assert!(CardType::RUNE_SHARD.is_rune());
        assert!(CardType(32).is_rune());
        assert!(!CardType::HOLY.is_rune());
        assert!(CardType(23).is_suit_card());
        assert!(CardType::SUICIDE_KING.is_suit_card());
        assert!(!CardType::FOOL.is_suit_card());
    }
}
