//! Dice types, notation, and rolling.
//!
//! Supports the standard polyhedral dice (d4 through d100) and custom die
//! sizes. Every roll draws from an injected [`RandomSource`] so that callers
//! control seeding and tests can replay exact draws.

pub mod roll;
pub mod source;

pub use roll::{DiceRollResult, roll};
pub use source::{RandomSource, ScriptedSource};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RulesError, RulesResult};

/// Most dice a single roll may use.
pub const MAX_DICE: u32 = 1_000;

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Map a face count onto a die, using the named variants where one exists.
    pub fn from_sides(sides: u32) -> Self {
        match sides {
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            100 => Self::D100,
            n => Self::Custom(n),
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A dice expression of the form `NdF+M`: `count` dice of `faces` sides plus
/// a flat modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceSpec {
    /// Number of dice to roll.
    pub count: u32,
    /// Faces per die.
    pub faces: u32,
    /// Flat amount added to the sum of the dice.
    #[serde(default)]
    pub modifier: i32,
}

impl DiceSpec {
    /// A spec with no modifier.
    pub const fn new(count: u32, faces: u32) -> Self {
        Self {
            count,
            faces,
            modifier: 0,
        }
    }

    /// Returns a copy of this spec with the given modifier.
    pub const fn with_modifier(self, modifier: i32) -> Self {
        Self { modifier, ..self }
    }

    /// The die rolled by this spec.
    pub fn die(&self) -> Die {
        Die::from_sides(self.faces)
    }

    /// Check the spec against the roller's constraints.
    ///
    /// Fewer than one die or fewer than two faces is
    /// [`RulesError::InvalidDiceSpec`]. More than [`MAX_DICE`] dice, or
    /// extreme totals outside the `i32` range, is
    /// [`RulesError::DiceOutOfRange`].
    pub fn validate(&self) -> RulesResult<()> {
        if self.count < 1 || self.faces < 2 {
            return Err(RulesError::InvalidDiceSpec {
                count: self.count,
                faces: self.faces,
            });
        }
        let fits = |total: i64| i32::try_from(total).is_ok();
        if self.count > MAX_DICE || !fits(self.min()) || !fits(self.max()) {
            return Err(RulesError::DiceOutOfRange {
                count: self.count,
                faces: self.faces,
                modifier: self.modifier,
            });
        }
        Ok(())
    }

    /// Smallest possible total.
    pub fn min(&self) -> i64 {
        i64::from(self.count) + i64::from(self.modifier)
    }

    /// Largest possible total. Saturates rather than overflowing.
    pub fn max(&self) -> i64 {
        i64::from(self.count)
            .saturating_mul(i64::from(self.faces))
            .saturating_add(i64::from(self.modifier))
    }

    /// Roll this spec against the given source.
    pub fn roll(&self, rng: &mut dyn RandomSource) -> RulesResult<DiceRollResult> {
        roll(self.count, self.faces, self.modifier, rng)
    }
}

impl std::fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die())?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

impl FromStr for DiceSpec {
    type Err = RulesError;

    /// Parse notation such as `3d6`, `d20+2` or `2d6-1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        let invalid = || RulesError::InvalidDiceNotation(s.trim().to_string());

        let (count_str, rest) = notation.split_once('d').ok_or_else(invalid)?;
        let count = if count_str.is_empty() {
            1
        } else {
            count_str.parse::<u32>().map_err(|_| invalid())?
        };

        let (faces_str, modifier) = match rest.find(|c| c == '+' || c == '-') {
            Some(pos) => {
                let modifier = rest[pos..].parse::<i32>().map_err(|_| invalid())?;
                (&rest[..pos], modifier)
            }
            None => (rest, 0),
        };
        let faces = faces_str.parse::<u32>().map_err(|_| invalid())?;

        let spec = Self {
            count,
            faces,
            modifier,
        };
        spec.validate()?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_sides() {
        assert_eq!(Die::D4.sides(), 4);
        assert_eq!(Die::D6.sides(), 6);
        assert_eq!(Die::D20.sides(), 20);
        assert_eq!(Die::D100.sides(), 100);
        assert_eq!(Die::Custom(30).sides(), 30);
    }

    #[test]
    fn parse_notation() {
        assert_eq!("3d6".parse::<DiceSpec>().unwrap(), DiceSpec::new(3, 6));
        assert_eq!(
            "d20+2".parse::<DiceSpec>().unwrap(),
            DiceSpec::new(1, 20).with_modifier(2)
        );
        assert_eq!(
            " 2D6 - 1 ".parse::<DiceSpec>().unwrap(),
            DiceSpec::new(2, 6).with_modifier(-1)
        );
    }

    #[test]
    fn parse_rejects_bad_specs() {
        assert_eq!(
            "0d6".parse::<DiceSpec>(),
            Err(RulesError::InvalidDiceSpec { count: 0, faces: 6 })
        );
        assert_eq!(
            "1d1".parse::<DiceSpec>(),
            Err(RulesError::InvalidDiceSpec { count: 1, faces: 1 })
        );
        assert!(matches!(
            "banana".parse::<DiceSpec>(),
            Err(RulesError::InvalidDiceNotation(_))
        ));
        assert!(matches!(
            "2d6+x".parse::<DiceSpec>(),
            Err(RulesError::InvalidDiceNotation(_))
        ));
    }

    #[test]
    fn display_round_trips_notation() {
        assert_eq!(DiceSpec::new(3, 6).to_string(), "3d6");
        assert_eq!(DiceSpec::new(1, 20).with_modifier(2).to_string(), "1d20+2");
        assert_eq!(DiceSpec::new(2, 6).with_modifier(-1).to_string(), "2d6-1");
    }

    #[test]
    fn bounds() {
        let spec = DiceSpec::new(3, 6).with_modifier(-2);
        assert_eq!(spec.min(), 1);
        assert_eq!(spec.max(), 16);
    }

    #[test]
    fn bounds_do_not_overflow() {
        let spec = DiceSpec::new(u32::MAX, u32::MAX).with_modifier(i32::MAX);
        assert_eq!(spec.min(), i64::from(u32::MAX) + i64::from(i32::MAX));
        assert_eq!(spec.max(), i64::MAX);
    }

    #[test]
    fn rejects_specs_out_of_range() {
        assert_eq!(
            "100000d100000".parse::<DiceSpec>(),
            Err(RulesError::DiceOutOfRange {
                count: 100_000,
                faces: 100_000,
                modifier: 0,
            })
        );
        assert!(matches!(
            "2d4294967295".parse::<DiceSpec>(),
            Err(RulesError::DiceOutOfRange { .. })
        ));
        assert!(matches!(
            DiceSpec::new(1, 6).with_modifier(i32::MAX).validate(),
            Err(RulesError::DiceOutOfRange { .. })
        ));
        assert!(matches!(
            DiceSpec::new(MAX_DICE + 1, 6).validate(),
            Err(RulesError::DiceOutOfRange { .. })
        ));
        assert_eq!(DiceSpec::new(MAX_DICE, 6).validate(), Ok(()));
        let floor = DiceSpec::new(1, 6).with_modifier(i32::MIN);
        assert_eq!(floor.validate(), Ok(()));
    }
}
