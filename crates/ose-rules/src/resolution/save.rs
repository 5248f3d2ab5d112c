//! Saving throws.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::check::compare;
use super::{CheckOutcome, Comparison};
use crate::classes::{CharacterClass, SaveType, saving_throw};
use crate::dice::{RandomSource, roll};
use crate::error::RulesResult;

/// The outcome of a saving throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    /// Which save was rolled.
    pub save: SaveType,
    /// The natural d20 result.
    pub roll: u32,
    /// Modifier added to the d20.
    pub modifier: i32,
    /// d20 plus modifier.
    pub total: i32,
    /// Target from the class table.
    pub threshold: i32,
    /// Whether the save succeeded.
    pub success: bool,
}

/// Roll a saving throw for `class` at `level`.
///
/// Succeeds when d20 plus `modifier` meets or beats the table target. Levels
/// beyond the class table use its highest row. Level 0 is rejected.
pub fn resolve_save(
    class: CharacterClass,
    level: u32,
    save: SaveType,
    modifier: i32,
    rng: &mut dyn RandomSource,
) -> RulesResult<SaveOutcome> {
    let threshold = saving_throw(class, level, save)?;
    let result = roll(1, 20, modifier, rng)?;
    let success = Comparison::AtLeast.succeeds(result.total, threshold);

    debug!(%class, level, %save, threshold, total = result.total, success, "resolved save");

    Ok(SaveOutcome {
        save,
        roll: result.first(),
        modifier,
        total: result.total,
        threshold,
        success,
    })
}

/// Roll a saving throw against an explicit `threshold` instead of a class
/// table entry.
///
/// Succeeds when d20 plus `modifier` meets or beats `threshold`.
pub fn resolve_save_against(
    threshold: i32,
    modifier: i32,
    rng: &mut dyn RandomSource,
) -> RulesResult<CheckOutcome> {
    let result = roll(1, 20, modifier, rng)?;
    let outcome = compare(&result, threshold, Comparison::AtLeast);
    debug!(
        threshold,
        total = outcome.total,
        success = outcome.success,
        "resolved save against target"
    );
    Ok(outcome)
}
