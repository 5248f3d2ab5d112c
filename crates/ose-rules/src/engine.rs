//! An engine that owns its random source.
//!
//! Every rule is also available as a free function taking
//! `&mut dyn RandomSource`; the engine just saves threading the source
//! through each call.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::abilities::GenerationMethod;
use crate::character::{self, CharacterStatBundle, LevelAdvance};
use crate::classes::{CharacterClass, SaveType};
use crate::dice::{self, DiceRollResult, DiceSpec, RandomSource};
use crate::error::RulesResult;
use crate::resolution::{self, AttackOutcome, CheckOutcome, SaveOutcome};

/// Rules engine bound to a random source.
#[derive(Debug, Clone)]
pub struct Engine<R: RandomSource> {
    rng: R,
}

impl Engine<StdRng> {
    /// Engine backed by a seeded [`StdRng`]. The same seed replays the same
    /// results for the same sequence of calls.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Engine seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: RandomSource> Engine<R> {
    /// Wrap an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Consume the engine and return its source.
    pub fn into_source(self) -> R {
        self.rng
    }

    /// Roll `count` dice of `faces` sides plus `modifier`.
    pub fn roll_dice(
        &mut self,
        count: u32,
        faces: u32,
        modifier: i32,
    ) -> RulesResult<DiceRollResult> {
        dice::roll(count, faces, modifier, &mut self.rng)
    }

    /// Roll a parsed dice expression.
    pub fn roll_spec(&mut self, spec: DiceSpec) -> RulesResult<DiceRollResult> {
        spec.roll(&mut self.rng)
    }

    /// Build a new level 1 character.
    pub fn generate_character_stats(
        &mut self,
        class: CharacterClass,
        method: GenerationMethod,
    ) -> RulesResult<CharacterStatBundle> {
        character::build_character(class, method, &mut self.rng)
    }

    /// Advance a character one level. See [`character::advance_level`].
    pub fn advance_level(
        &mut self,
        class: CharacterClass,
        current_level: u32,
        constitution: i32,
    ) -> RulesResult<LevelAdvance> {
        character::advance_level(class, current_level, constitution, &mut self.rng)
    }

    /// Roll an attack against `target_armor_class`.
    pub fn resolve_attack(
        &mut self,
        class: CharacterClass,
        level: u32,
        target_armor_class: i32,
        modifier: i32,
    ) -> RulesResult<AttackOutcome> {
        resolution::resolve_attack(class, level, target_armor_class, modifier, &mut self.rng)
    }

    /// Roll a saving throw.
    pub fn resolve_save(
        &mut self,
        class: CharacterClass,
        level: u32,
        save: SaveType,
        modifier: i32,
    ) -> RulesResult<SaveOutcome> {
        resolution::resolve_save(class, level, save, modifier, &mut self.rng)
    }

    /// Roll a saving throw against a caller-supplied target.
    pub fn resolve_save_against(
        &mut self,
        threshold: i32,
        modifier: i32,
    ) -> RulesResult<CheckOutcome> {
        resolution::resolve_save_against(threshold, modifier, &mut self.rng)
    }

    /// Roll d20 plus `modifier` under `threshold`.
    pub fn resolve_ability_check(
        &mut self,
        threshold: i32,
        modifier: i32,
    ) -> RulesResult<CheckOutcome> {
        resolution::resolve_ability_check(threshold, modifier, &mut self.rng)
    }

    /// Roll 2d6 plus `modifier`.
    pub fn resolve_morale(&mut self, modifier: i32) -> RulesResult<DiceRollResult> {
        resolution::resolve_morale(modifier, &mut self.rng)
    }

    /// Roll a d6 under `threshold`.
    pub fn resolve_luck_check(&mut self, threshold: i32) -> RulesResult<CheckOutcome> {
        resolution::resolve_luck_check(threshold, &mut self.rng)
    }

    /// Roll 1d6 plus `modifier`.
    pub fn resolve_initiative(&mut self, modifier: i32) -> RulesResult<DiceRollResult> {
        resolution::resolve_initiative(modifier, &mut self.rng)
    }
}
