//! Level advancement and experience thresholds.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::abilities::modifier_for;
use crate::classes::CharacterClass;
use crate::dice::RandomSource;
use crate::error::{RulesError, RulesResult};

/// Experience needed to reach levels 1 through 14.
const EXPERIENCE: [u32; 14] = [
    0, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000, 120_000, 240_000, 360_000, 480_000, 600_000,
    720_000, 840_000,
];

/// The result of an advancement.
///
/// The engine never touches caller state: add `hp_gain` to maximum hit
/// points and reset current hit points to the new maximum yourself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelAdvance {
    /// Level after the advancement (unchanged at the class cap).
    pub new_level: u32,
    /// Hit points gained. Always at least 1.
    pub hp_gain: i32,
    /// Whether the level actually went up.
    pub leveled_up: bool,
}

/// Advance a character one level and roll the hit points gained.
///
/// A character already at the class's maximum level stays there but still
/// gains hit points. Up to the class's hit dice cap the gain is a hit dice
/// roll plus the Constitution modifier; past it, only the modifier. Either
/// way the gain is at least 1.
pub fn advance_level(
    class: CharacterClass,
    current_level: u32,
    constitution: i32,
    rng: &mut dyn RandomSource,
) -> RulesResult<LevelAdvance> {
    if current_level < 1 {
        return Err(RulesError::InvalidLevel(current_level));
    }

    let definition = class.definition();
    let leveled_up = current_level < definition.max_level;
    let new_level = if leveled_up {
        current_level + 1
    } else {
        current_level
    };

    let con_mod = modifier_for(constitution);
    let hp_gain = if new_level <= definition.hit_dice.max_level {
        let roll = definition.hit_dice.dice.roll(rng)?;
        (roll.total + con_mod).max(1)
    } else {
        con_mod.max(1)
    };

    debug!(%class, current_level, new_level, hp_gain, "advanced level");

    Ok(LevelAdvance {
        new_level,
        hp_gain,
        leveled_up,
    })
}

/// Experience points needed to reach `level`. Levels above 14 use the
/// level 14 threshold.
pub fn experience_for_level(level: u32) -> RulesResult<u32> {
    if level < 1 {
        return Err(RulesError::InvalidLevel(level));
    }
    let index = (level as usize).min(EXPERIENCE.len()) - 1;
    Ok(EXPERIENCE[index])
}

/// The highest level `experience` qualifies for, capped at the class maximum.
pub fn level_for_experience(class: CharacterClass, experience: u32) -> u32 {
    let reached = EXPERIENCE.iter().filter(|&&xp| xp <= experience).count() as u32;
    reached.clamp(1, class.definition().max_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn levels_up_and_rolls_hit_die() {
        let mut src = ScriptedSource::new([6]);
        let adv = advance_level(CharacterClass::Fighter, 1, 16, &mut src).unwrap();
        assert_eq!(adv.new_level, 2);
        assert!(adv.leveled_up);
        assert_eq!(adv.hp_gain, 8);
    }

    #[test]
    fn capped_character_still_gains_hp() {
        let mut rng = StdRng::seed_from_u64(5);
        let max = CharacterClass::Fighter.definition().max_level;
        let adv = advance_level(CharacterClass::Fighter, max, 3, &mut rng).unwrap();
        assert_eq!(adv.new_level, max);
        assert!(!adv.leveled_up);
        assert_eq!(adv.hp_gain, 1);
    }

    #[test]
    fn past_hit_dice_cap_only_constitution_counts() {
        // Fighter 9 -> 10 is past the level 9 hit dice cap.
        let mut src = ScriptedSource::new([8]);
        let adv = advance_level(CharacterClass::Fighter, 9, 18, &mut src).unwrap();
        assert_eq!(adv.new_level, 10);
        assert_eq!(adv.hp_gain, 3);
        assert_eq!(src.draws_taken(), 0);
    }

    #[test]
    fn hit_die_cap_uses_the_new_level() {
        // Dwarf 7 -> 8 is still within the level 8 cap.
        let mut src = ScriptedSource::new([2]);
        let adv = advance_level(CharacterClass::Dwarf, 7, 10, &mut src).unwrap();
        assert_eq!(adv.new_level, 8);
        assert_eq!(adv.hp_gain, 2);
        assert_eq!(src.draws_taken(), 1);
    }

    #[test]
    fn gain_is_at_least_one() {
        let mut src = ScriptedSource::new([1]);
        let adv = advance_level(CharacterClass::Thief, 3, 3, &mut src).unwrap();
        assert_eq!(adv.hp_gain, 1);
    }

    #[test]
    fn level_zero_is_rejected() {
        let mut src = ScriptedSource::default();
        assert_eq!(
            advance_level(CharacterClass::Cleric, 0, 10, &mut src),
            Err(RulesError::InvalidLevel(0))
        );
    }

    #[test]
    fn experience_thresholds() {
        assert_eq!(experience_for_level(1), Ok(0));
        assert_eq!(experience_for_level(2), Ok(2_000));
        assert_eq!(experience_for_level(9), Ok(240_000));
        assert_eq!(experience_for_level(14), Ok(840_000));
        assert_eq!(experience_for_level(20), Ok(840_000));
        assert_eq!(experience_for_level(0), Err(RulesError::InvalidLevel(0)));
    }

    #[test]
    fn level_from_experience() {
        assert_eq!(level_for_experience(CharacterClass::Fighter, 0), 1);
        assert_eq!(level_for_experience(CharacterClass::Fighter, 1_999), 1);
        assert_eq!(level_for_experience(CharacterClass::Fighter, 2_000), 2);
        assert_eq!(level_for_experience(CharacterClass::Fighter, 250_000), 9);
        assert_eq!(level_for_experience(CharacterClass::Halfling, 1_000_000), 8);
    }
}
