//! Character creation and level advancement.

pub mod advance;

pub use advance::{LevelAdvance, advance_level, experience_for_level, level_for_experience};

use serde::Serialize;
use tracing::debug;

use crate::abilities::{self, Ability, AbilityScores, GenerationMethod, modifier_for};
use crate::classes::{CharacterClass, Item, Skill, Spell, equipment};
use crate::dice::RandomSource;
use crate::error::RulesResult;

/// Base armour class before equipment and Dexterity.
pub const BASE_ARMOR_CLASS: i32 = 10;

/// Gold pieces per point rolled on the starting gold dice.
const GOLD_MULTIPLIER: i32 = 10;

/// A freshly created character's numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterStatBundle {
    /// The class the character was built for.
    pub class: CharacterClass,
    /// Characteristic scores after reallocation.
    pub scores: AbilityScores,
    /// Maximum hit points.
    pub max_hp: i32,
    /// Current hit points (equal to `max_hp` at creation).
    pub current_hp: i32,
    /// Armour class.
    pub armor_class: i32,
    /// Starting gold pieces.
    pub gold: i32,
    /// Starting equipment: common pack followed by the class kit.
    pub equipment: Vec<Item>,
    /// Starting spells.
    pub spells: Vec<Spell>,
    /// Class skills.
    pub skills: Vec<Skill>,
}

/// Roll up a complete first-level character.
///
/// Scores are generated with `method` then reallocated into the class's
/// primary characteristic. Hit points are one roll of the class hit dice
/// plus the Constitution modifier, never below 1. Gold is the class gold
/// dice times 10. Armour class starts at 10, adds every armour and shield
/// bonus in the kit, then adds the Dexterity modifier.
pub fn build_character(
    class: CharacterClass,
    method: GenerationMethod,
    rng: &mut dyn RandomSource,
) -> RulesResult<CharacterStatBundle> {
    let definition = class.definition();

    let scores = abilities::reallocate(abilities::generate(method, rng)?, definition);

    let hit_roll = definition.hit_dice.dice.roll(rng)?;
    let max_hp = (hit_roll.total + modifier_for(scores.constitution)).max(1);

    let gold = definition.starting_gold.roll(rng)?.total * GOLD_MULTIPLIER;

    let equipment = definition.equipment();
    let armor_class = BASE_ARMOR_CLASS
        + equipment::armor_bonus(&equipment)
        + scores.modifier(Ability::Dexterity);

    let spells = definition.spells(rng);
    let skills = definition.skills();

    debug!(%class, %method, max_hp, armor_class, gold, "built character");

    Ok(CharacterStatBundle {
        class,
        scores,
        max_hp,
        current_hp: max_hp,
        armor_class,
        gold,
        equipment,
        spells,
        skills,
    })
}
