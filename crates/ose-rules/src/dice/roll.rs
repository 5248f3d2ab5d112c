//! Rolling dice and the results of a roll.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{DiceSpec, RandomSource};
use crate::error::{RulesError, RulesResult};

/// The outcome of rolling `N` dice plus a modifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiceRollResult {
    /// Individual die values, in the order they were rolled.
    pub draws: Vec<u32>,
    /// Flat modifier added to the dice.
    pub modifier: i32,
    /// Sum of the draws plus the modifier.
    pub total: i32,
}

impl DiceRollResult {
    /// Sum of the dice alone, without the modifier. Saturates at `u32::MAX`.
    pub fn dice_total(&self) -> u32 {
        self.draws.iter().copied().fold(0, u32::saturating_add)
    }

    /// The first die rolled, or 0 if nothing was rolled.
    pub fn first(&self) -> u32 {
        self.draws.first().copied().unwrap_or(0)
    }

    /// The highest single die value, or 0 if empty.
    pub fn highest(&self) -> u32 {
        self.draws.iter().copied().max().unwrap_or(0)
    }

    /// The lowest single die value, or 0 if empty.
    pub fn lowest(&self) -> u32 {
        self.draws.iter().copied().min().unwrap_or(0)
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.draws.len()
    }
}

impl std::fmt::Display for DiceRollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.draws.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}]", values.join(", "))?;
        if self.modifier > 0 {
            write!(f, " + {}", self.modifier)?;
        } else if self.modifier < 0 {
            write!(f, " - {}", self.modifier.unsigned_abs())?;
        }
        write!(f, " = {}", self.total)
    }
}

/// Roll `count` dice of `faces` sides and add `modifier`.
///
/// Fails with [`RulesError::InvalidDiceSpec`] when `count < 1` or `faces < 2`,
/// and with [`RulesError::DiceOutOfRange`] when the roll uses more than
/// [`MAX_DICE`](super::MAX_DICE) dice or a possible total does not fit in an `i32`.
pub fn roll(
    count: u32,
    faces: u32,
    modifier: i32,
    rng: &mut dyn RandomSource,
) -> RulesResult<DiceRollResult> {
    DiceSpec::new(count, faces)
        .with_modifier(modifier)
        .validate()?;

    let draws: Vec<u32> = (0..count).map(|_| rng.draw(1, faces)).collect();
    let sum: i64 = draws.iter().map(|&d| i64::from(d)).sum();
    let out_of_range = || RulesError::DiceOutOfRange {
        count,
        faces,
        modifier,
    };
    let total = sum + i64::from(modifier);
    let total = i32::try_from(total).map_err(|_| out_of_range())?;
    trace!(count, faces, modifier, ?draws, total, "rolled dice");

    Ok(DiceRollResult {
        draws,
        modifier,
        total,
    })
}
