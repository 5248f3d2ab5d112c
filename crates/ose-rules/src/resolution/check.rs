//! Ability checks, luck, morale and initiative.

use tracing::debug;

use super::{CheckOutcome, Comparison};
use crate::dice::{DiceRollResult, RandomSource, roll};
use crate::error::RulesResult;

/// Roll d20 plus `modifier` under an ability score.
///
/// Unlike attacks and saves, lower is better: the check succeeds when the
/// total is at or below `threshold`.
pub fn resolve_ability_check(
    threshold: i32,
    modifier: i32,
    rng: &mut dyn RandomSource,
) -> RulesResult<CheckOutcome> {
    let result = roll(1, 20, modifier, rng)?;
    let outcome = compare(&result, threshold, Comparison::AtMost);
    debug!(
        threshold,
        total = outcome.total,
        success = outcome.success,
        "resolved ability check"
    );
    Ok(outcome)
}

/// Roll a d6 for luck. Succeeds when the die is at or below `threshold`.
pub fn resolve_luck_check(
    threshold: i32,
    rng: &mut dyn RandomSource,
) -> RulesResult<CheckOutcome> {
    let result = roll(1, 6, 0, rng)?;
    let outcome = compare(&result, threshold, Comparison::AtMost);
    debug!(
        threshold,
        roll = outcome.roll,
        success = outcome.success,
        "resolved luck check"
    );
    Ok(outcome)
}

/// Roll 2d6 plus `modifier` for morale.
pub fn resolve_morale(modifier: i32, rng: &mut dyn RandomSource) -> RulesResult<DiceRollResult> {
    let result = roll(2, 6, modifier, rng)?;
    debug!(total = result.total, "rolled morale");
    Ok(result)
}

/// Roll 1d6 plus `modifier` for initiative.
pub fn resolve_initiative(
    modifier: i32,
    rng: &mut dyn RandomSource,
) -> RulesResult<DiceRollResult> {
    let result = roll(1, 6, modifier, rng)?;
    debug!(total = result.total, "rolled initiative");
    Ok(result)
}

pub(super) fn compare(
    result: &DiceRollResult,
    threshold: i32,
    comparison: Comparison,
) -> CheckOutcome {
    CheckOutcome {
        roll: result.first(),
        modifier: result.modifier,
        total: result.total,
        threshold,
        comparison,
        success: comparison.succeeds(result.total, threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedSource;

    #[test]
    fn ability_check_succeeds_at_threshold() {
        let mut src = ScriptedSource::new([12]);
        let out = resolve_ability_check(12, 0, &mut src).unwrap();
        assert_eq!(out.total, 12);
        assert!(out.success);
    }

    #[test]
    fn ability_check_fails_above_threshold() {
        let mut src = ScriptedSource::new([13]);
        let out = resolve_ability_check(12, 0, &mut src).unwrap();
        assert!(!out.success);
    }

    #[test]
    fn ability_check_modifier_pushes_total_up() {
        let mut src = ScriptedSource::new([11]);
        let out = resolve_ability_check(12, 2, &mut src).unwrap();
        assert_eq!(out.roll, 11);
        assert_eq!(out.total, 13);
        assert!(!out.success);
    }

    #[test]
    fn luck_rolls_under() {
        let mut src = ScriptedSource::new([2, 3]);
        assert!(resolve_luck_check(2, &mut src).unwrap().success);
        let miss = resolve_luck_check(2, &mut src).unwrap();
        assert_eq!(miss.roll, 3);
        assert!(!miss.success);
    }

    #[test]
    fn morale_is_two_dice() {
        let mut src = ScriptedSource::new([4, 5]);
        let out = resolve_morale(-1, &mut src).unwrap();
        assert_eq!(out.draws, vec![4, 5]);
        assert_eq!(out.total, 8);
    }

    #[test]
    fn initiative_is_one_die() {
        let mut src = ScriptedSource::new([6]);
        let out = resolve_initiative(1, &mut src).unwrap();
        assert_eq!(out.count(), 1);
        assert_eq!(out.total, 7);
    }
}
