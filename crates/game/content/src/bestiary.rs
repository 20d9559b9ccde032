//! Per-level monster tables.
//!
//! Each table lists monsters with a cumulative threshold: a `[0, 100]` roll
//! selects the first entry whose threshold is at or above it. Levels without a
//! table fall back to the nearest lower one.

use game_core::{DamageBand, RngSource};

/// A monster as listed in the bestiary.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub name: String,
    pub hp: u32,
    /// Peak damage of a single strike.
    pub damage: u32,
    pub gold: u32,
    /// Cumulative selection threshold.
    pub chance: u32,
    pub xp: u32,
}

impl MonsterTemplate {
    /// Strike band `[round(damage × floor), damage]`.
    pub fn strike_band(&self, floor: f64) -> DamageBand {
        DamageBand::from_peak(self.damage, floor)
    }
}

/// Monsters available from `level` upward.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelTable {
    pub level: u32,
    pub monsters: Vec<MonsterTemplate>,
}

/// All monster tables, ordered by level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bestiary {
    tables: Vec<LevelTable>,
}

impl Bestiary {
    pub fn new(mut tables: Vec<LevelTable>) -> Self {
        tables.sort_by_key(|table| table.level);
        Self { tables }
    }

    pub fn tables(&self) -> &[LevelTable] {
        &self.tables
    }

    /// Table for `level`, or the nearest lower one. Levels below the first
    /// table use the first table.
    pub fn table_for_level(&self, level: u32) -> Option<&LevelTable> {
        self.tables
            .iter()
            .rev()
            .find(|table| table.level <= level)
            .or_else(|| self.tables.first())
    }

    /// Picks a monster for `roll` in `[0, 100]`.
    ///
    /// A roll above every threshold picks the last entry.
    pub fn select(&self, level: u32, roll: u32) -> Option<&MonsterTemplate> {
        let table = self.table_for_level(level)?;
        table
            .monsters
            .iter()
            .find(|monster| roll <= monster.chance)
            .or_else(|| table.monsters.last())
    }

    /// Rolls and selects in one step.
    pub fn roll(&self, level: u32, rng: &mut (impl RngSource + ?Sized)) -> Option<&MonsterTemplate> {
        let roll = rng.roll_percent();
        self.select(level, roll)
    }
}

impl Default for Bestiary {
    fn default() -> Self {
        let tables = DEFAULT_TABLES
            .iter()
            .map(|(level, monsters)| LevelTable {
                level: *level,
                monsters: monsters
                    .iter()
                    .map(|&(name, hp, damage, gold, chance, xp)| MonsterTemplate {
                        name: name.to_string(),
                        hp,
                        damage,
                        gold,
                        chance,
                        xp,
                    })
                    .collect(),
            })
            .collect();
        Self::new(tables)
    }
}

type Row = (&'static str, u32, u32, u32, u32, u32);

// (name, hp, damage, gold, cumulative chance, xp)
const DEFAULT_TABLES: &[(u32, &[Row])] = &[
    (
        1,
        &[
            ("Slime", 90, 28, 50, 10, 55),
            ("Rat", 95, 32, 54, 20, 58),
            ("Goblin", 100, 36, 60, 30, 60),
            ("Bat", 88, 27, 48, 40, 52),
            ("Wild Mouse", 92, 29, 50, 50, 53),
            ("Tiny Spider", 85, 26, 47, 60, 50),
            ("Lost Chick", 83, 25, 45, 70, 48),
            ("Baby Snake", 87, 28, 49, 80, 51),
            ("Mischievous Pixie", 90, 29, 51, 90, 54),
            ("Angry Squirrel", 86, 27, 47, 100, 50),
            ("Bandit Initiate", 98, 31, 68, 110, 62),
            ("Forest Beetle", 89, 28, 49, 120, 52),
        ],
    ),
    (
        2,
        &[
            ("Wolf", 125, 34, 70, 10, 75),
            ("Bandit", 130, 36, 74, 20, 78),
            ("Goblin Brute", 135, 38, 78, 30, 82),
            ("Snake", 120, 32, 66, 40, 70),
            ("Wild Dog", 128, 33, 68, 50, 72),
            ("Forest Spider", 126, 31, 64, 60, 69),
            ("Bandit Scout", 132, 35, 72, 70, 77),
            ("Angry Crow", 118, 30, 62, 80, 66),
            ("Wild Cat", 125, 33, 68, 90, 74),
            ("Mischievous Goblin", 123, 32, 65, 100, 71),
            ("Bandit Slinger", 137, 37, 80, 110, 84),
            ("Forest Snake", 127, 34, 69, 120, 73),
        ],
    ),
    (
        3,
        &[
            ("Skeleton", 105, 30, 70, 10, 80),
            ("Wild Boar", 120, 32, 75, 20, 85),
            ("Orc", 140, 35, 80, 30, 90),
            ("Zombie Dog", 110, 28, 65, 40, 75),
            ("Bandit Archer", 125, 31, 68, 50, 78),
            ("Ghoul", 115, 29, 66, 60, 77),
            ("Forest Wolf", 118, 30, 69, 70, 82),
            ("Wild Ram", 122, 31, 71, 80, 84),
            ("Cave Bat", 108, 27, 63, 90, 73),
            ("Angry Boar", 112, 28, 67, 100, 76),
        ],
    ),
    (
        4,
        &[
            ("Zombie", 170, 38, 95, 10, 105),
            ("Bandit Leader", 190, 42, 100, 20, 110),
            ("Orc Warrior", 210, 46, 110, 30, 120),
            ("Ghoul", 180, 40, 90, 40, 100),
            ("Wild Bear", 200, 44, 105, 50, 115),
            ("Forest Troll", 185, 41, 98, 60, 108),
            ("Bandit Swordsman", 195, 43, 102, 70, 112),
            ("Cave Spider", 175, 39, 93, 80, 103),
            ("Angry Bear", 188, 42, 99, 90, 109),
            ("Wild Lynx", 178, 38, 94, 100, 104),
        ],
    ),
    (
        5,
        &[
            ("Giant Spider", 240, 60, 120, 10, 130),
            ("Ghoul", 260, 64, 130, 20, 140),
            ("Troll", 280, 68, 140, 30, 150),
            ("Swamp Lizard", 250, 62, 125, 40, 135),
            ("Bandit Mage", 270, 66, 135, 50, 145),
            ("Forest Ogre", 255, 63, 128, 60, 138),
            ("Wild Crocodile", 265, 65, 132, 70, 142),
            ("Cave Troll", 245, 61, 123, 80, 133),
            ("Angry Troll", 258, 64, 129, 90, 139),
            ("Swamp Rat", 248, 60, 121, 100, 131),
        ],
    ),
    (
        6,
        &[
            ("Dire Wolf", 310, 72, 160, 10, 170),
            ("Dark Mage", 330, 76, 170, 20, 180),
            ("Ogre", 350, 80, 180, 30, 190),
            ("Vampire", 320, 74, 165, 40, 175),
            ("Forest Troll", 340, 78, 175, 50, 185),
            ("Bandit Captain", 325, 75, 168, 60, 178),
            ("Cave Ogre", 335, 77, 172, 70, 182),
            ("Wild Panther", 315, 73, 163, 80, 173),
            ("Angry Ogre", 328, 76, 169, 90, 179),
            ("Dark Sorcerer", 318, 72, 161, 100, 171),
        ],
    ),
    (
        7,
        &[
            ("Vampire Bat", 390, 84, 190, 10, 200),
            ("Wraith", 410, 88, 200, 20, 210),
            ("Minotaur", 430, 92, 210, 30, 220),
            ("Specter", 400, 86, 195, 40, 205),
            ("Cave Ogre", 420, 90, 205, 50, 215),
            ("Bandit Berserker", 405, 87, 198, 60, 208),
            ("Wild Tiger", 415, 89, 202, 70, 212),
            ("Angry Minotaur", 395, 85, 193, 80, 203),
            ("Dark Wraith", 408, 88, 199, 90, 209),
            ("Spectral Bat", 398, 84, 191, 100, 201),
        ],
    ),
    (
        8,
        &[
            ("Fire Elemental", 480, 96, 220, 10, 230),
            ("Ice Golem", 500, 100, 230, 20, 240),
            ("Werewolf", 520, 104, 240, 30, 250),
            ("Frost Bat", 490, 98, 225, 40, 235),
            ("Bandit Captain", 510, 102, 235, 50, 245),
            ("Forest Werewolf", 495, 99, 228, 60, 238),
            ("Wild Rhino", 505, 101, 232, 70, 242),
            ("Cave Golem", 485, 97, 223, 80, 233),
            ("Angry Golem", 498, 100, 229, 90, 239),
            ("Ice Elemental", 488, 96, 221, 100, 231),
        ],
    ),
    (
        9,
        &[
            ("Stone Guardian", 570, 108, 250, 10, 260),
            ("Necromancer", 590, 112, 260, 20, 270),
            ("Cyclops", 610, 116, 270, 30, 280),
            ("Shadow Beast", 580, 110, 255, 40, 265),
            ("Forest Spirit", 600, 114, 265, 50, 275),
            ("Bandit Sorcerer", 585, 111, 258, 60, 268),
            ("Wild Elephant", 595, 113, 262, 70, 272),
            ("Cave Cyclops", 575, 109, 253, 80, 263),
            ("Angry Cyclops", 588, 112, 259, 90, 269),
            ("Shadow Elemental", 578, 108, 251, 100, 261),
        ],
    ),
    (
        10,
        &[
            ("Thunder Lizard", 660, 120, 280, 10, 290),
            ("Shadow Assassin", 680, 124, 290, 20, 300),
            ("Giant", 700, 128, 300, 30, 310),
            ("Storm Hawk", 670, 122, 285, 40, 295),
            ("Bandit King", 690, 126, 295, 50, 305),
            ("Forest Giant", 675, 123, 288, 60, 298),
            ("Wild Buffalo", 685, 125, 292, 70, 302),
            ("Cave Giant", 665, 121, 283, 80, 293),
            ("Angry Giant", 678, 124, 289, 90, 299),
            ("Thunder Elemental", 668, 120, 281, 100, 291),
        ],
    ),
    (
        11,
        &[
            ("Hellhound", 750, 132, 310, 10, 320),
            ("Specter", 770, 136, 320, 20, 330),
            ("Demon", 790, 140, 330, 30, 340),
            ("Dark Knight", 760, 134, 315, 40, 325),
            ("Ancient Zombie", 780, 138, 325, 50, 335),
            ("Forest Demon", 765, 135, 318, 60, 328),
            ("Wild Mammoth", 775, 137, 322, 70, 332),
            ("Cave Demon", 755, 133, 313, 80, 323),
            ("Angry Demon", 768, 136, 319, 90, 329),
            ("Spectral Knight", 758, 132, 311, 100, 321),
        ],
    ),
    (
        12,
        &[
            ("Forest Spirit", 840, 144, 340, 10, 350),
            ("Lich", 860, 148, 350, 20, 360),
            ("Golem King", 880, 152, 360, 30, 370),
            ("Sand Worm", 850, 146, 345, 40, 355),
            ("Thunder Hawk", 870, 150, 355, 50, 365),
            ("Forest Lich", 855, 147, 348, 60, 358),
            ("Wild Gorilla", 865, 149, 352, 70, 362),
            ("Cave Lich", 845, 145, 343, 80, 353),
            ("Angry Lich", 858, 148, 349, 90, 359),
            ("Sand Elemental", 848, 144, 341, 100, 351),
        ],
    ),
    (
        13,
        &[
            ("Hydra", 920, 156, 370, 10, 380),
        ],
    ),
    (
        21,
        &[
            ("Shadow Dragon", 1700, 332, 820, 15, 830),
            ("Archdemon", 1720, 336, 830, 35, 840),
            ("Elder Titan", 1740, 340, 840, 55, 850),
            ("Frost Phoenix", 1710, 334, 825, 75, 835),
            ("Chaos Lord", 1730, 338, 835, 100, 845),
        ],
    ),
    (
        22,
        &[
            ("Frost Phoenix", 1760, 344, 860, 15, 870),
            ("Chaos Lord", 1780, 348, 870, 35, 880),
            ("Ancient Colossus", 1800, 352, 880, 55, 890),
            ("Solar Serpent", 1770, 346, 865, 75, 875),
            ("Void Titan", 1790, 350, 875, 100, 885),
        ],
    ),
    (
        23,
        &[
            ("Solar Serpent", 1820, 356, 900, 15, 910),
            ("Void Titan", 1840, 360, 910, 35, 920),
            ("Elder Dragon", 1860, 364, 920, 55, 930),
            ("Star Guardian", 1830, 358, 905, 75, 915),
            ("Time Wraith", 1850, 362, 915, 100, 925),
        ],
    ),
    (
        24,
        &[
            ("Star Guardian", 1880, 368, 940, 15, 950),
            ("Time Wraith", 1900, 372, 950, 35, 960),
            ("Cosmic Leviathan", 1920, 376, 960, 55, 970),
            ("Celestial Hydra", 1890, 370, 945, 75, 955),
            ("Ancient Phoenix", 1910, 374, 955, 100, 965),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::ScriptedRng;

    #[test]
    fn level_one_roll_selects_by_cumulative_threshold() {
        let bestiary = Bestiary::default();
        assert_eq!(bestiary.select(1, 0).unwrap().name, "Slime");
        assert_eq!(bestiary.select(1, 10).unwrap().name, "Slime");
        assert_eq!(bestiary.select(1, 11).unwrap().name, "Rat");
        assert_eq!(bestiary.select(1, 100).unwrap().name, "Angry Squirrel");
    }

    #[test]
    fn missing_levels_use_nearest_lower_table() {
        let bestiary = Bestiary::default();
        assert_eq!(bestiary.table_for_level(17).unwrap().level, 13);
        assert_eq!(bestiary.table_for_level(21).unwrap().level, 21);
        assert_eq!(bestiary.table_for_level(40).unwrap().level, 24);
    }

    #[test]
    fn roll_past_every_threshold_picks_last_entry() {
        let bestiary = Bestiary::default();
        assert_eq!(bestiary.select(13, 55).unwrap().name, "Hydra");
    }

    #[test]
    fn roll_uses_injected_source() {
        let bestiary = Bestiary::default();
        let mut rng = ScriptedRng::new().with_ints([35]);
        assert_eq!(bestiary.roll(21, &mut rng).unwrap().name, "Archdemon");
    }

    #[test]
    fn strike_band_floors_at_seventy_percent() {
        let bestiary = Bestiary::default();
        let slime = bestiary.select(1, 0).unwrap();
        let band = slime.strike_band(0.7);
        assert_eq!((band.min(), band.max()), (20, 28));
    }

    #[test]
    fn empty_bestiary_selects_nothing() {
        assert!(Bestiary::new(Vec::new()).select(1, 0).is_none());
    }
}
