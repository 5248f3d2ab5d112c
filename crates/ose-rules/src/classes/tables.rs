//! Attack (THAC0) and saving throw progressions.
//!
//! Both tables are stored as level bands, one slice per class indexed by
//! [`CharacterClass`]. A band covers every level up to and including its
//! `up_to` level. Levels past the last band use the last band.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CharacterClass;
use crate::error::{RulesError, RulesResult};

/// The five saving throw categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveType {
    /// Death ray or poison.
    DeathOrPoison,
    /// Magic wands.
    Wands,
    /// Paralysis or petrification.
    ParalysisOrPetrification,
    /// Breath attacks.
    BreathAttacks,
    /// Rods, staves or spells.
    SpellsOrStaves,
}

impl SaveType {
    /// All save types, in table column order.
    pub const ALL: [SaveType; 5] = [
        Self::DeathOrPoison,
        Self::Wands,
        Self::ParalysisOrPetrification,
        Self::BreathAttacks,
        Self::SpellsOrStaves,
    ];

    fn column(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for SaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::DeathOrPoison => "Death/Poison",
            Self::Wands => "Wands",
            Self::ParalysisOrPetrification => "Paralysis/Petrification",
            Self::BreathAttacks => "Breath Attacks",
            Self::SpellsOrStaves => "Spells/Rods/Staves",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SaveType {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' ' | '/'))
            .collect();
        match key.as_str() {
            "deathorpoison" | "death" | "poison" | "d" => Ok(Self::DeathOrPoison),
            "wands" | "wand" | "w" => Ok(Self::Wands),
            "paralysisorpetrification" | "paralysis" | "petrification" | "p" => {
                Ok(Self::ParalysisOrPetrification)
            }
            "breathattacks" | "breath" | "b" => Ok(Self::BreathAttacks),
            "spellsorstaves" | "spells" | "staves" | "rods" | "s" => Ok(Self::SpellsOrStaves),
            _ => Err(RulesError::UnknownSaveType(s.trim().to_string())),
        }
    }
}

/// One row of a progression table covering levels up to `up_to`.
#[derive(Debug, Clone, Copy)]
struct Band<T> {
    up_to: u32,
    value: T,
}

const fn band<T>(up_to: u32, value: T) -> Band<T> {
    Band { up_to, value }
}

/// Save targets in [`SaveType::ALL`] order.
type SaveRow = [i32; 5];

static THAC0: [&[Band<i32>]; CharacterClass::COUNT] = [
    // Fighter
    &[band(3, 19), band(6, 17), band(9, 14), band(12, 12), band(14, 10)],
    // Cleric
    &[band(4, 19), band(8, 17), band(12, 14), band(14, 12)],
    // Magic-user
    &[band(5, 19), band(10, 17), band(14, 14)],
    // Thief
    &[band(4, 19), band(8, 17), band(12, 14), band(14, 12)],
    // Dwarf
    &[band(3, 19), band(6, 17), band(9, 14), band(12, 12)],
    // Elf
    &[band(3, 19), band(6, 17), band(9, 14), band(10, 12)],
    // Halfling
    &[band(3, 19), band(6, 17), band(8, 14)],
];

static SAVES: [&[Band<SaveRow>]; CharacterClass::COUNT] = [
    // Fighter
    &[
        band(3, [12, 13, 14, 15, 16]),
        band(6, [10, 11, 12, 13, 14]),
        band(9, [8, 9, 10, 10, 12]),
        band(12, [6, 7, 8, 8, 10]),
        band(14, [4, 5, 6, 5, 8]),
    ],
    // Cleric
    &[
        band(4, [11, 12, 14, 16, 15]),
        band(8, [9, 10, 12, 14, 12]),
        band(12, [6, 7, 9, 11, 9]),
        band(14, [3, 5, 7, 8, 7]),
    ],
    // Magic-user
    &[
        band(5, [13, 14, 13, 16, 15]),
        band(10, [11, 12, 11, 14, 12]),
        band(14, [8, 9, 8, 11, 8]),
    ],
    // Thief
    &[
        band(4, [13, 14, 13, 16, 15]),
        band(8, [12, 13, 11, 14, 13]),
        band(12, [10, 11, 9, 12, 10]),
        band(14, [8, 9, 7, 10, 8]),
    ],
    // Dwarf
    &[
        band(3, [8, 9, 10, 13, 12]),
        band(6, [6, 7, 8, 10, 10]),
        band(9, [4, 5, 6, 7, 8]),
        band(12, [2, 3, 4, 4, 6]),
    ],
    // Elf
    &[
        band(3, [12, 13, 13, 15, 15]),
        band(6, [10, 11, 11, 13, 12]),
        band(9, [8, 9, 9, 10, 10]),
        band(10, [6, 7, 8, 8, 8]),
    ],
    // Halfling
    &[
        band(3, [8, 9, 10, 13, 12]),
        band(6, [6, 7, 8, 10, 10]),
        band(8, [4, 5, 6, 7, 8]),
    ],
];

/// Find the band covering `level`, clamping past the end of the table.
fn lookup<T: Copy>(bands: &[Band<T>], level: u32) -> RulesResult<T> {
    if level < 1 {
        return Err(RulesError::InvalidLevel(level));
    }
    bands
        .iter()
        .find(|b| level <= b.up_to)
        .or_else(|| bands.last())
        .map(|b| b.value)
        .ok_or(RulesError::InvalidLevel(level))
}

/// Highest level the tables define for `class`.
pub fn table_max_level(class: CharacterClass) -> u32 {
    THAC0[class.index()].last().map_or(1, |b| b.up_to)
}

/// THAC0 for a class at a level. Levels above the table clamp to its last row.
pub fn thac0(class: CharacterClass, level: u32) -> RulesResult<i32> {
    lookup(THAC0[class.index()], level)
}

/// Saving throw target for a class, level and save type. Levels above the
/// table clamp to its last row.
pub fn saving_throw(class: CharacterClass, level: u32, save: SaveType) -> RulesResult<i32> {
    lookup(SAVES[class.index()], level).map(|row| row[save.column()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fighter_thac0_progression() {
        let expected = [19, 19, 19, 17, 17, 17, 14, 14, 14, 12, 12, 12, 10, 10];
        for (i, want) in expected.into_iter().enumerate() {
            let level = i as u32 + 1;
            assert_eq!(
                thac0(CharacterClass::Fighter, level),
                Ok(want),
                "level {level}"
            );
        }
    }

    #[test]
    fn levels_beyond_table_clamp() {
        assert_eq!(thac0(CharacterClass::Halfling, 8), Ok(14));
        assert_eq!(thac0(CharacterClass::Halfling, 30), Ok(14));
        assert_eq!(
            saving_throw(CharacterClass::Elf, 99, SaveType::BreathAttacks),
            Ok(8)
        );
    }

    #[test]
    fn level_zero_is_rejected() {
        assert_eq!(
            thac0(CharacterClass::Thief, 0),
            Err(RulesError::InvalidLevel(0))
        );
        assert_eq!(
            saving_throw(CharacterClass::Thief, 0, SaveType::Wands),
            Err(RulesError::InvalidLevel(0))
        );
    }

    #[test]
    fn first_level_saves() {
        let dwarf: Vec<i32> = SaveType::ALL
            .iter()
            .map(|&s| saving_throw(CharacterClass::Dwarf, 1, s).unwrap())
            .collect();
        assert_eq!(dwarf, vec![8, 9, 10, 13, 12]);

        assert_eq!(
            saving_throw(CharacterClass::Cleric, 1, SaveType::DeathOrPoison),
            Ok(11)
        );
        assert_eq!(
            saving_throw(CharacterClass::MagicUser, 6, SaveType::SpellsOrStaves),
            Ok(12)
        );
    }

    #[test]
    fn tables_cover_class_max_level() {
        for class in CharacterClass::ALL {
            let max = class.definition().max_level;
            assert_eq!(table_max_level(class), max, "{class}");
            let last_save = SAVES[class.index()].last().unwrap().up_to;
            assert_eq!(last_save, max, "{class} saves");
        }
    }

    #[test]
    fn bands_are_ascending() {
        for class in CharacterClass::ALL {
            for pair in THAC0[class.index()].windows(2) {
                assert!(pair[0].up_to < pair[1].up_to);
                assert!(pair[0].value >= pair[1].value);
            }
        }
    }

    #[test]
    fn parse_save_types() {
        assert_eq!("death".parse::<SaveType>(), Ok(SaveType::DeathOrPoison));
        assert_eq!("Breath".parse::<SaveType>(), Ok(SaveType::BreathAttacks));
        assert_eq!(
            "paralysis_or_petrification".parse::<SaveType>(),
            Ok(SaveType::ParalysisOrPetrification)
        );
        assert_eq!(
            "Spells_Or_Staves".parse::<SaveType>(),
            Ok(SaveType::SpellsOrStaves)
        );
        assert_eq!(
            "fire".parse::<SaveType>(),
            Err(RulesError::UnknownSaveType("fire".into()))
        );
    }
}
