//! Rules engine for Old-School Essentials.
//!
//! Provides dice rolling, ability score generation, class tables (THAC0,
//! saving throws, hit dice, starting kit), character creation, level
//! advancement and roll resolution. All randomness comes through an
//! injected [`RandomSource`], so every operation can be replayed from a seed
//! or a script.

pub mod abilities;
pub mod character;
pub mod classes;
pub mod dice;
pub mod engine;
pub mod error;
pub mod resolution;

pub use abilities::{Ability, AbilityScores, GenerationMethod, modifier_for};
pub use character::{CharacterStatBundle, LevelAdvance, advance_level, build_character};
pub use classes::{CharacterClass, ClassDefinition, Item, SaveType, Skill, Spell};
pub use dice::{DiceRollResult, DiceSpec, Die, RandomSource, ScriptedSource, roll};
pub use engine::Engine;
pub use error::{RulesError, RulesResult};
pub use resolution::{AttackOutcome, CheckOutcome, Comparison, SaveOutcome};
