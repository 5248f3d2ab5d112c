//! The six characteristics, their scores, and the modifier table.
//!
//! Scores live in `3..=18`. Modifiers are never stored; they are always
//! derived from a score through [`modifier_for`].

pub mod generate;

pub use generate::{GenerationMethod, generate, reallocate};

use serde::{Deserialize, Serialize};

/// Lowest score a characteristic can hold.
pub const MIN_SCORE: i32 = 3;
/// Highest score a characteristic can hold.
pub const MAX_SCORE: i32 = 18;

/// One of the six characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    /// Strength (STR).
    Strength,
    /// Intelligence (INT).
    Intelligence,
    /// Wisdom (WIS).
    Wisdom,
    /// Dexterity (DEX).
    Dexterity,
    /// Constitution (CON).
    Constitution,
    /// Charisma (CHA).
    Charisma,
}

impl Ability {
    /// All characteristics, in rolling order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Charisma,
    ];

    /// Three-letter abbreviation.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Charisma => "CHA",
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Strength => "Strength",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Charisma => "Charisma",
        };
        write!(f, "{name}")
    }
}

/// A full set of characteristic scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Strength score.
    pub strength: i32,
    /// Intelligence score.
    pub intelligence: i32,
    /// Wisdom score.
    pub wisdom: i32,
    /// Dexterity score.
    pub dexterity: i32,
    /// Constitution score.
    pub constitution: i32,
    /// Charisma score.
    pub charisma: i32,
}

impl AbilityScores {
    /// Build a set from six scores in [`Ability::ALL`] order.
    pub fn from_array(scores: [i32; 6]) -> Self {
        let [strength, intelligence, wisdom, dexterity, constitution, charisma] = scores;
        Self {
            strength,
            intelligence,
            wisdom,
            dexterity,
            constitution,
            charisma,
        }
    }

    /// The scores in [`Ability::ALL`] order.
    pub fn to_array(&self) -> [i32; 6] {
        Ability::ALL.map(|a| self.get(a))
    }

    /// Read one score.
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Charisma => self.charisma,
        }
    }

    /// Mutable access to one score.
    pub fn get_mut(&mut self, ability: Ability) -> &mut i32 {
        match ability {
            Ability::Strength => &mut self.strength,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Charisma => &mut self.charisma,
        }
    }

    /// The modifier derived from one score.
    pub fn modifier(&self, ability: Ability) -> i32 {
        modifier_for(self.get(ability))
    }
}

/// Map a characteristic score to its bonus or penalty.
///
/// | Score  | Modifier |
/// |--------|----------|
/// | 3      | -3       |
/// | 4-5    | -2       |
/// | 6-8    | -1       |
/// | 9-12   | 0        |
/// | 13-15  | +1       |
/// | 16-17  | +2       |
/// | 18     | +3       |
///
/// Scores outside `3..=18` fall into the nearest band.
pub fn modifier_for(score: i32) -> i32 {
    match score {
        i32::MIN..=3 => -3,
        4..=5 => -2,
        6..=8 => -1,
        9..=12 => 0,
        13..=15 => 1,
        16..=17 => 2,
        _ => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_bands() {
        let expected = [
            (3, -3),
            (4, -2),
            (5, -2),
            (6, -1),
            (8, -1),
            (9, 0),
            (10, 0),
            (12, 0),
            (13, 1),
            (15, 1),
            (16, 2),
            (17, 2),
            (18, 3),
        ];
        for (score, modifier) in expected {
            assert_eq!(modifier_for(score), modifier, "score {score}");
        }
    }

    #[test]
    fn out_of_range_scores_clamp_to_edge_bands() {
        assert_eq!(modifier_for(0), -3);
        assert_eq!(modifier_for(-5), -3);
        assert_eq!(modifier_for(19), 3);
        assert_eq!(modifier_for(40), 3);
    }

    #[test]
    fn array_round_trip_keeps_order() {
        let scores = AbilityScores::from_array([13, 9, 11, 7, 16, 10]);
        assert_eq!(scores.strength, 13);
        assert_eq!(scores.constitution, 16);
        assert_eq!(scores.to_array(), [13, 9, 11, 7, 16, 10]);
    }

    #[test]
    fn get_mut_writes_through() {
        let mut scores = AbilityScores::from_array([10; 6]);
        *scores.get_mut(Ability::Wisdom) += 3;
        assert_eq!(scores.wisdom, 13);
        assert_eq!(scores.modifier(Ability::Wisdom), 1);
    }

    #[test]
    fn abbreviations() {
        assert_eq!(Ability::Strength.abbreviation(), "STR");
        assert_eq!(Ability::Charisma.to_string(), "Charisma");
    }
}
