//! THAC0 attack rolls.
//!
//! The attacker needs `THAC0 - target AC` or better on d20 plus modifiers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Comparison;
use crate::classes::{CharacterClass, thac0};
use crate::dice::{RandomSource, roll};
use crate::error::RulesResult;

/// The outcome of an attack roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// The natural d20 result.
    pub roll: u32,
    /// Modifier added to the d20.
    pub modifier: i32,
    /// d20 plus modifier.
    pub total: i32,
    /// Attacker's THAC0 at the (clamped) level.
    pub thac0: i32,
    /// Armour class of the target.
    pub target_armor_class: i32,
    /// Total needed to hit: `thac0 - target_armor_class`.
    pub target: i32,
    /// Whether the attack hits.
    pub success: bool,
}

/// Roll an attack for `class` at `level` against `target_armor_class`.
///
/// Levels beyond the class table use its highest row. Level 0 is rejected.
pub fn resolve_attack(
    class: CharacterClass,
    level: u32,
    target_armor_class: i32,
    modifier: i32,
    rng: &mut dyn RandomSource,
) -> RulesResult<AttackOutcome> {
    let thac0 = thac0(class, level)?;
    let target = thac0 - target_armor_class;
    let result = roll(1, 20, modifier, rng)?;
    let success = Comparison::AtLeast.succeeds(result.total, target);

    debug!(%class, level, thac0, target, total = result.total, success, "resolved attack");

    Ok(AttackOutcome {
        roll: result.first(),
        modifier,
        total: result.total,
        thac0,
        target_armor_class,
        target,
        success,
    })
}
