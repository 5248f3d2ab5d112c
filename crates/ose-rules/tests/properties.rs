//! Property-based tests for the rules engine.
//!
//! Invariants covered:
//! - Ability modifiers are monotone and stay within -3..=3
//! - Dice totals stay within their bounds, and out-of-range specs are rejected
//! - Reallocation never pushes the primary past 18 and is idempotent
//! - Characters always start with at least 1 hit point
//! - Level advancement always grants at least 1 hit point
//! - The same seed replays the same results

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use ose_rules::abilities::{self, MAX_SCORE, MIN_SCORE};
use ose_rules::{
    AbilityScores, CharacterClass, DiceSpec, Engine, GenerationMethod, advance_level,
    build_character, modifier_for, roll,
};

// ============================================================================
// Strategies
// ============================================================================

fn arb_class() -> impl Strategy<Value = CharacterClass> {
    prop::sample::select(CharacterClass::ALL.to_vec())
}

fn arb_method() -> impl Strategy<Value = GenerationMethod> {
    prop::sample::select(GenerationMethod::ALL.to_vec())
}

fn arb_scores() -> impl Strategy<Value = AbilityScores> {
    prop::array::uniform6(MIN_SCORE..=MAX_SCORE).prop_map(AbilityScores::from_array)
}

// ============================================================================
// Modifiers
// ============================================================================

proptest! {
    #[test]
    fn modifier_is_monotone(a in -10i32..30, b in -10i32..30) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(modifier_for(lo) <= modifier_for(hi));
    }

    #[test]
    fn modifier_in_range(score in any::<i32>()) {
        let m = modifier_for(score);
        prop_assert!((-3..=3).contains(&m));
    }
}

// ============================================================================
// Dice
// ============================================================================

proptest! {
    #[test]
    fn roll_within_bounds(
        count in 1u32..10,
        faces in 2u32..30,
        modifier in -10i32..10,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = roll(count, faces, modifier, &mut rng).unwrap();
        let spec = DiceSpec::new(count, faces).with_modifier(modifier);
        prop_assert_eq!(result.count(), count as usize);
        prop_assert!(result.draws.iter().all(|&d| (1..=faces).contains(&d)));
        prop_assert!(i64::from(result.total) >= spec.min());
        prop_assert!(i64::from(result.total) <= spec.max());
    }

    #[test]
    fn roll_rejects_or_stays_in_range(
        count in 0u32..1_200,
        faces in any::<u32>(),
        modifier in any::<i32>(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let spec = DiceSpec::new(count, faces).with_modifier(modifier);
        match roll(count, faces, modifier, &mut rng) {
            Ok(result) => {
                prop_assert!(spec.validate().is_ok());
                prop_assert!(i64::from(result.total) >= spec.min());
                prop_assert!(i64::from(result.total) <= spec.max());
            }
            Err(_) => prop_assert!(spec.validate().is_err()),
        }
    }

    #[test]
    fn notation_display_parses_back(
        count in 1u32..20,
        faces in 2u32..101,
        modifier in -20i32..20,
    ) {
        let spec = DiceSpec::new(count, faces).with_modifier(modifier);
        prop_assert_eq!(spec.to_string().parse::<DiceSpec>().unwrap(), spec);
    }

    #[test]
    fn generated_scores_in_range(method in arb_method(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let scores = abilities::generate(method, &mut rng).unwrap();
        for score in scores.to_array() {
            prop_assert!((MIN_SCORE..=MAX_SCORE).contains(&score));
        }
    }
}

// ============================================================================
// Reallocation
// ============================================================================

proptest! {
    #[test]
    fn reallocation_caps_primary(class in arb_class(), scores in arb_scores()) {
        let definition = class.definition();
        let after = abilities::reallocate(scores, definition);
        prop_assert!(after.get(definition.primary) <= MAX_SCORE);
        let primary = definition.primary;
        prop_assert!(after.get(primary) >= scores.get(primary));
    }

    #[test]
    fn reallocation_is_idempotent(class in arb_class(), scores in arb_scores()) {
        let definition = class.definition();
        let once = abilities::reallocate(scores, definition);
        let twice = abilities::reallocate(once, definition);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn reallocation_leaves_physical_scores(class in arb_class(), scores in arb_scores()) {
        let definition = class.definition();
        let after = abilities::reallocate(scores, definition);
        // Dexterity, Constitution and Charisma are never donors.
        let pairs = scores.to_array().into_iter().zip(after.to_array());
        for (ability, (before, now)) in abilities::Ability::ALL.into_iter().zip(pairs).skip(3) {
            if ability != definition.primary {
                prop_assert_eq!(before, now);
            }
        }
    }
}

// ============================================================================
// Characters and advancement
// ============================================================================

proptest! {
    #[test]
    fn characters_start_alive(
        class in arb_class(),
        method in arb_method(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let bundle = build_character(class, method, &mut rng).unwrap();
        prop_assert!(bundle.max_hp >= 1);
        prop_assert_eq!(bundle.current_hp, bundle.max_hp);
        prop_assert_eq!(bundle.gold % 10, 0);
        for score in bundle.scores.to_array() {
            prop_assert!((MIN_SCORE..=MAX_SCORE).contains(&score));
        }
    }

    #[test]
    fn advancement_always_gains_hp(
        class in arb_class(),
        level in 1u32..20,
        constitution in MIN_SCORE..=MAX_SCORE,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let adv = advance_level(class, level, constitution, &mut rng).unwrap();
        let max = class.definition().max_level;
        prop_assert!(adv.hp_gain >= 1);
        prop_assert_eq!(adv.leveled_up, level < max);
        prop_assert_eq!(adv.new_level, if level < max { level + 1 } else { level });
    }

    #[test]
    fn seeded_engines_agree(
        class in arb_class(),
        method in arb_method(),
        seed in any::<u64>(),
    ) {
        let mut a = Engine::seeded(seed);
        let mut b = Engine::seeded(seed);
        prop_assert_eq!(
            a.generate_character_stats(class, method).unwrap(),
            b.generate_character_stats(class, method).unwrap()
        );
        prop_assert_eq!(
            a.advance_level(class, 1, 12).unwrap(),
            b.advance_level(class, 1, 12).unwrap()
        );
    }
}
