use serde::{Deserialize, Serialize};

use crate::ids::{LevelStage, StageType};

macro_rules! boss_ids {
    ($($variant:ident = $value:expr => $name:expr),+ $(,)?) => {
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
        pub enum BossId {
            $($variant = $value),+
        }

        /// Every boss id, vanilla first, then the custom ones, in id order.
        pub const BOSS_IDS: &[BossId] = &[$(BossId::$variant),+];

        impl BossId {
            pub fn name(self) -> &'static str {
                match self {
                    $(BossId::$variant => $name),+
                }
            }
        }
    };
}

boss_ids! {
    Monstro = 1 => "Monstro",
    LarryJr = 2 => "Larry Jr.",
    Chub = 3 => "Chub",
    Gurdy = 4 => "Gurdy",
    MonstroII = 5 => "Monstro II",
    Mom = 6 => "Mom",
    Scolex = 7 => "Scolex",
    MomsHeart = 8 => "Mom's Heart",
    Famine = 9 => "Famine",
    Pestilence = 10 => "Pestilence",
    War = 11 => "War",
    Death = 12 => "Death",
    DukeOfFlies = 13 => "The Duke of Flies",
    Peep = 14 => "Peep",
    Loki = 15 => "Loki",
    Blastocyst = 16 => "Blastocyst",
    Gemini = 17 => "Gemini",
    Fistula = 18 => "Fistula",
    Gish = 19 => "Gish",
    Steven = 20 => "Steven",
    Chad = 21 => "C.H.A.D.",
    HeadlessHorseman = 22 => "The Headless Horseman",
    Fallen = 23 => "The Fallen",
    Satan = 24 => "Satan",
    ItLives = 25 => "It Lives",
    Hollow = 26 => "The Hollow",
    CarrionQueen = 27 => "The Carrion Queen",
    GurdyJr = 28 => "Gurdy Jr.",
    Husk = 29 => "The Husk",
    Bloat = 30 => "The Bloat",
    Lokii = 31 => "Lokii",
    BlightedOvum = 32 => "The Blighted Ovum",
    Teratoma = 33 => "Teratoma",
    Widow = 34 => "The Widow",
    MaskOfInfamy = 35 => "Mask of Infamy",
    Wretched = 36 => "The Wretched",
    Pin = 37 => "Pin",
    Conquest = 38 => "Conquest",
    Isaac = 39 => "Isaac",
    BlueBaby = 40 => "???",
    DaddyLongLegs = 41 => "Daddy Long Legs",
    Triachnid = 42 => "Triachnid",
    Haunt = 43 => "The Haunt",
    Dingle = 44 => "Dingle",
    MegaMaw = 45 => "Mega Maw",
    Gate = 46 => "The Gate",
    MegaFatty = 47 => "Mega Fatty",
    Cage = 48 => "The Cage",
    MamaGurdy = 49 => "Mama Gurdy",
    DarkOne = 50 => "Dark One",
    Adversary = 51 => "The Adversary",
    Polycephalus = 52 => "Polycephalus",
    MrFred = 53 => "Mr. Fred",
    Lamb = 54 => "The Lamb",
    MegaSatan = 55 => "Mega Satan",
    Gurgling = 56 => "Gurglings",
    Stain = 57 => "The Stain",
    Brownie = 58 => "Brownie",
    Forsaken = 59 => "The Forsaken",
    LittleHorn = 60 => "Little Horn",
    RagMan = 61 => "Rag Man",
    UltraGreed = 62 => "Ultra Greed",
    Hush = 63 => "Hush",
    Dangle = 64 => "Dangle",
    Turdling = 65 => "Turdlings",
    Frail = 66 => "The Frail",
    RagMega = 67 => "Rag Mega",
    SistersVis = 68 => "Sisters Vis",
    BigHorn = 69 => "Big Horn",
    Delirium = 70 => "Delirium",
    UltraGreedier = 71 => "Ultra Greedier",
    Matriarch = 72 => "The Matriarch",
    Pile = 73 => "The Pile",
    ReapCreep = 74 => "Reap Creep",
    LilBlub = 75 => "Lil Blub",
    Wormwood = 76 => "Wormwood",
    Rainmaker = 77 => "The Rainmaker",
    Visage = 78 => "The Visage",
    Siren = 79 => "The Siren",
    TuffTwins = 80 => "Tuff Twins",
    Heretic = 81 => "The Heretic",
    Hornfel = 82 => "Hornfel",
    GreatGideon = 83 => "Great Gideon",
    BabyPlum = 84 => "Baby Plum",
    Scourge = 85 => "The Scourge",
    Chimera = 86 => "Chimera",
    Rotgut = 87 => "Rotgut",
    Mother = 88 => "Mother",
    MausoleumMom = 89 => "Mom (Mausoleum)",
    MausoleumMomsHeart = 90 => "Mom's Heart (Mausoleum)",
    MinMin = 91 => "Min-Min",
    Clog = 92 => "Clog",
    Singe = 93 => "Singe",
    Bumbino = 94 => "Bumbino",
    Colostomia = 95 => "Colostomia",
    Shell = 96 => "The Shell",
    Turnover = 97 => "Turnover",
    Raglich = 98 => "Raglich",
    Dogma = 99 => "Dogma",
    Beast = 100 => "The Beast",
    HornyBoys = 101 => "Horny Boys",
    Clutch = 102 => "Clutch",
    UltraPride = 103 => "Ultra Pride",
    Krampus = 104 => "Krampus",
    Uriel = 105 => "Uriel",
    Gabriel = 106 => "Gabriel",
    UltraFamine = 107 => "Ultra Famine",
    UltraPestilence = 108 => "Ultra Pestilence",
    UltraWar = 109 => "Ultra War",
    UltraDeath = 110 => "Ultra Death",
    FallenUriel = 111 => "Fallen Uriel",
    FallenGabriel = 112 => "Fallen Gabriel",
    SuperGreed = 113 => "Super Greed",
}

/// Custom bosses that can show up on any floor regardless of unlocks.
/// The fallen angels replace Uriel and Gabriel in the same rooms.
pub const ALWAYS_REACHABLE_CUSTOM_BOSSES: [BossId; 6] = [
    BossId::UltraPride,
    BossId::Krampus,
    BossId::Uriel,
    BossId::Gabriel,
    BossId::FallenUriel,
    BossId::FallenGabriel,
];

/// The four horsemen encountered in the Ascent.
pub const ULTRA_HORSEMEN: [BossId; 4] = [
    BossId::UltraFamine,
    BossId::UltraPestilence,
    BossId::UltraWar,
    BossId::UltraDeath,
];

/// Custom bosses that only exist as objectives in nightmare mode.
pub const NIGHTMARE_ONLY_BOSSES: [BossId; 3] = [
    BossId::FallenUriel,
    BossId::FallenGabriel,
    BossId::SuperGreed,
];

const STORY_BOSSES: [BossId; 17] = [
    BossId::Mom,
    BossId::MomsHeart,
    BossId::Satan,
    BossId::ItLives,
    BossId::Isaac,
    BossId::BlueBaby,
    BossId::Lamb,
    BossId::MegaSatan,
    BossId::UltraGreed,
    BossId::Hush,
    BossId::Delirium,
    BossId::UltraGreedier,
    BossId::Mother,
    BossId::MausoleumMom,
    BossId::MausoleumMomsHeart,
    BossId::Dogma,
    BossId::Beast,
];

const DEFAULT_NO_HIT_SECONDS: u32 = 60;

impl BossId {
    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn from_id(id: u16) -> Option<BossId> {
        BOSS_IDS.iter().copied().find(|b| b.id() == id)
    }

    pub fn is_story(self) -> bool {
        STORY_BOSSES.contains(&self)
    }

    pub fn is_custom(self) -> bool {
        self.id() > BossId::Clutch.id()
    }

    /// Seconds the player must survive in the fight without taking a hit.
    pub fn no_hit_seconds(self) -> u32 {
        match self {
            BossId::Gurgling | BossId::Turdling | BossId::Dingle | BossId::BabyPlum => 30,
            BossId::UltraFamine
            | BossId::UltraPestilence
            | BossId::UltraWar
            | BossId::UltraDeath
            | BossId::Krampus
            | BossId::SuperGreed => 40,
            BossId::Hush
            | BossId::MegaSatan
            | BossId::UltraGreedier
            | BossId::Mother
            | BossId::Delirium
            | BossId::Beast
            | BossId::Dogma => 90,
            _ => DEFAULT_NO_HIT_SECONDS,
        }
    }
}

/// Floors whose boss pools decide which non-story bosses can be met.
/// The second floor of each chapter shares the pool of the first.
pub const BOSS_STAGES: [LevelStage; 4] = [
    LevelStage::Basement1,
    LevelStage::Caves1,
    LevelStage::Depths1,
    LevelStage::Womb1,
];

/// Boss pool for a floor, or `None` when the stage has no such variant.
pub fn boss_roster(stage: LevelStage, stage_type: StageType) -> Option<&'static [BossId]> {
    use BossId::*;

    let roster: &'static [BossId] = match (stage, stage_type) {
        (LevelStage::Basement1, StageType::Original) => &[
            Monstro, LarryJr, Famine, DukeOfFlies, Gemini, Steven, Gurdy, GurdyJr, Dingle,
            Gurgling, LittleHorn, BabyPlum,
        ],
        (LevelStage::Basement1, StageType::WrathOfTheLamb) => &[
            Pin, Widow, Haunt, BlightedOvum, GurdyJr, Famine, DukeOfFlies, Gemini, Steven,
            Gurgling, LittleHorn, BabyPlum,
        ],
        (LevelStage::Basement1, StageType::Afterbirth) => &[
            Monstro, LarryJr, Famine, DukeOfFlies, Gemini, Steven, Dingle, Gurgling, LittleHorn,
            RagMan, BabyPlum,
        ],
        (LevelStage::Basement1, StageType::RepentanceA) => &[LilBlub, Wormwood, Rainmaker, MinMin],
        (LevelStage::Basement1, StageType::RepentanceB) => {
            &[LilBlub, Wormwood, Turdling, Clog, Colostomia]
        }
        (LevelStage::Caves1, StageType::Original) => &[
            Chub, Pestilence, CarrionQueen, Peep, Bloat, Fistula, MegaMaw, MegaFatty, DarkOne,
            Polycephalus, Stain, Brownie, Chad, Gurdy,
        ],
        (LevelStage::Caves1, StageType::WrathOfTheLamb) => &[
            Hollow, Husk, Peep, CarrionQueen, Pestilence, Chub, DarkOne, Polycephalus, Frail,
            Wretched, Stain,
        ],
        (LevelStage::Caves1, StageType::Afterbirth) => &[
            Gish, Wretched, MegaFatty, Chad, Bloat, Fistula, Pestilence, MegaMaw, Brownie,
            Turdling,
        ],
        (LevelStage::Caves1, StageType::RepentanceA) => {
            &[TuffTwins, Hornfel, ReapCreep, GreatGideon, Shell]
        }
        (LevelStage::Caves1, StageType::RepentanceB) => {
            &[Pile, Clutch, Singe, Bumbino, GreatGideon, Shell]
        }
        (LevelStage::Depths1, StageType::Original) => &[
            MonstroII, Gate, Loki, Adversary, Cage, MamaGurdy, War, Death, Dangle, Brownie,
            Polycephalus,
        ],
        (LevelStage::Depths1, StageType::WrathOfTheLamb) => &[
            RagMan, RagMega, Forsaken, SistersVis, BigHorn, Gate, MonstroII, War, Loki,
        ],
        (LevelStage::Depths1, StageType::Afterbirth) => &[
            Triachnid, DaddyLongLegs, BigHorn, Forsaken, SistersVis, Cage, Adversary, Death,
        ],
        (LevelStage::Depths1, StageType::RepentanceA) => &[Siren, Heretic, Visage, HornyBoys],
        (LevelStage::Depths1, StageType::RepentanceB) => &[Visage, HornyBoys, Clog, Siren],
        (LevelStage::Womb1, StageType::Original) => &[
            Blastocyst, Scolex, Lokii, Teratoma, MaskOfInfamy, MrFred, Conquest, Death,
            HeadlessHorseman, Fallen,
        ],
        (LevelStage::Womb1, StageType::WrathOfTheLamb) => &[
            Lokii, Scolex, Blastocyst, Teratoma, MaskOfInfamy, DaddyLongLegs, Triachnid,
            HeadlessHorseman,
        ],
        (LevelStage::Womb1, StageType::Afterbirth) => {
            &[Matriarch, MrFred, Frail, Conquest, Fallen, Blastocyst]
        }
        (LevelStage::Womb1, StageType::RepentanceA) => &[Chimera, Rotgut, Scourge, Turnover],
        _ => return None,
    };

    Some(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::STAGE_TYPES;
    use std::collections::BTreeSet;

    #[test]
    fn ids_are_contiguous() {
        for (i, boss) in BOSS_IDS.iter().enumerate() {
            assert_eq!(boss.id() as usize, i + 1);
        }
        assert_eq!(BossId::from_id(70), Some(BossId::Delirium));
        assert_eq!(BossId::from_id(0), None);
    }

    #[test]
    fn every_vanilla_non_story_boss_has_a_floor() {
        let mut rostered = BTreeSet::new();
        for stage in BOSS_STAGES {
            for stage_type in STAGE_TYPES {
                if let Some(roster) = boss_roster(stage, *stage_type) {
                    rostered.extend(roster.iter().copied());
                }
            }
        }

        for boss in BOSS_IDS {
            if boss.is_story() || boss.is_custom() || *boss == BossId::Raglich {
                continue;
            }
            assert!(rostered.contains(boss), "{} has no floor", boss.name());
        }
    }

    #[test]
    fn rosters_never_contain_story_bosses() {
        for stage in BOSS_STAGES {
            for stage_type in STAGE_TYPES {
                for boss in boss_roster(stage, *stage_type).unwrap_or(&[]) {
                    assert!(!boss.is_story(), "{} is a story boss", boss.name());
                    assert!(!boss.is_custom());
                }
            }
        }
    }

    #[test]
    fn greed_mode_and_corpse_b_have_no_roster() {
        assert!(boss_roster(LevelStage::Basement1, StageType::GreedMode).is_none());
        assert!(boss_roster(LevelStage::Womb1, StageType::RepentanceB).is_none());
    }
}
