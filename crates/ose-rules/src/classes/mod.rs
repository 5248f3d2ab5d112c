//! Playable classes and races with their static rule data.
//!
//! Each [`CharacterClass`] maps to one immutable [`ClassDefinition`] that
//! lives for the whole process. Attack and saving throw progressions live in
//! [`tables`]; starting kit in [`equipment`]; spell and skill pools in
//! [`pools`].

pub mod equipment;
pub mod pools;
pub mod tables;

pub use equipment::{Item, ItemKind};
pub use pools::{Skill, Spell};
pub use tables::{SaveType, saving_throw, thac0};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::abilities::Ability;
use crate::dice::{DiceSpec, RandomSource};
use crate::error::RulesError;

/// A playable class or race-as-class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    /// Fighter.
    Fighter,
    /// Cleric.
    Cleric,
    /// Magic-user.
    MagicUser,
    /// Thief.
    Thief,
    /// Dwarf.
    Dwarf,
    /// Elf.
    Elf,
    /// Halfling.
    Halfling,
}

impl CharacterClass {
    /// Number of playable classes.
    pub const COUNT: usize = 7;

    /// All classes, in table order.
    pub const ALL: [CharacterClass; Self::COUNT] = [
        Self::Fighter,
        Self::Cleric,
        Self::MagicUser,
        Self::Thief,
        Self::Dwarf,
        Self::Elf,
        Self::Halfling,
    ];

    /// Position of this class in per-class tables.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The rule data for this class.
    pub fn definition(self) -> &'static ClassDefinition {
        &CLASSES[self.index()]
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        self.definition().name
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();
        match key.as_str() {
            "fighter" => Ok(Self::Fighter),
            "cleric" => Ok(Self::Cleric),
            "magicuser" | "mu" => Ok(Self::MagicUser),
            "thief" => Ok(Self::Thief),
            "dwarf" => Ok(Self::Dwarf),
            "elf" => Ok(Self::Elf),
            "halfling" => Ok(Self::Halfling),
            _ => Err(RulesError::UnknownClass(s.trim().to_string())),
        }
    }
}

/// Hit dice rolled per level, and the last level at which they are rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HitDice {
    /// Dice rolled for hit points.
    pub dice: DiceSpec,
    /// Highest level at which the hit dice are still rolled. Beyond it only
    /// the Constitution modifier applies.
    pub max_level: u32,
}

/// Immutable rule data for one class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassDefinition {
    /// The class this definition describes.
    pub class: CharacterClass,
    /// Display name.
    pub name: &'static str,
    /// Characteristic that receives reallocated points.
    pub primary: Ability,
    /// Hit dice progression.
    pub hit_dice: HitDice,
    /// Maximum attainable level.
    pub max_level: u32,
    /// Dice rolled for starting gold, multiplied by 10.
    pub starting_gold: DiceSpec,
    /// Class-specific starting kit, added to the common pack.
    pub class_equipment: &'static [Item],
    /// Spells a new character may start with.
    pub spell_pool: &'static [Spell],
    /// How many spells are drawn from the pool at creation.
    pub starting_spells: usize,
    /// Fixed class skills.
    pub skills: &'static [Skill],
}

impl ClassDefinition {
    /// The full starting kit: the common pack followed by the class kit.
    pub fn equipment(&self) -> Vec<Item> {
        equipment::COMMON_PACK
            .iter()
            .chain(self.class_equipment)
            .copied()
            .collect()
    }

    /// Draw the starting spells from the class pool.
    pub fn spells(&self, rng: &mut dyn RandomSource) -> Vec<Spell> {
        pools::draw_spells(self.spell_pool, self.starting_spells, rng)
    }

    /// The class skill list.
    pub fn skills(&self) -> Vec<Skill> {
        self.skills.to_vec()
    }
}

static CLASSES: [ClassDefinition; CharacterClass::COUNT] = [
    ClassDefinition {
        class: CharacterClass::Fighter,
        name: "Fighter",
        primary: Ability::Strength,
        hit_dice: HitDice {
            dice: DiceSpec::new(1, 8),
            max_level: 9,
        },
        max_level: 14,
        starting_gold: DiceSpec::new(3, 6),
        class_equipment: equipment::FIGHTER_KIT,
        spell_pool: &[],
        starting_spells: 0,
        skills: &[],
    },
    ClassDefinition {
        class: CharacterClass::Cleric,
        name: "Cleric",
        primary: Ability::Wisdom,
        hit_dice: HitDice {
            dice: DiceSpec::new(1, 6),
            max_level: 9,
        },
        max_level: 14,
        starting_gold: DiceSpec::new(3, 6),
        class_equipment: equipment::CLERIC_KIT,
        spell_pool: pools::CLERIC_SPELLS,
        starting_spells: 1,
        skills: &[],
    },
    ClassDefinition {
        class: CharacterClass::MagicUser,
        name: "Magic-User",
        primary: Ability::Intelligence,
        hit_dice: HitDice {
            dice: DiceSpec::new(1, 4),
            max_level: 9,
        },
        max_level: 14,
        starting_gold: DiceSpec::new(2, 6),
        class_equipment: equipment::MAGIC_USER_KIT,
        spell_pool: pools::MAGIC_USER_SPELLS,
        starting_spells: 2,
        skills: &[],
    },
    ClassDefinition {
        class: CharacterClass::Thief,
        name: "Thief",
        primary: Ability::Dexterity,
        hit_dice: HitDice {
            dice: DiceSpec::new(1, 4),
            max_level: 9,
        },
        max_level: 14,
        starting_gold: DiceSpec::new(2, 6),
        class_equipment: equipment::THIEF_KIT,
        spell_pool: &[],
        starting_spells: 0,
        skills: pools::THIEF_SKILLS,
    },
    ClassDefinition {
        class: CharacterClass::Dwarf,
        name: "Dwarf",
        primary: Ability::Strength,
        hit_dice: HitDice {
            dice: DiceSpec::new(1, 8),
            max_level: 8,
        },
        max_level: 12,
        starting_gold: DiceSpec::new(3, 6),
        class_equipment: equipment::DWARF_KIT,
        spell_pool: &[],
        starting_spells: 0,
        skills: pools::DWARF_SKILLS,
    },
    ClassDefinition {
        class: CharacterClass::Elf,
        name: "Elf",
        primary: Ability::Intelligence,
        hit_dice: HitDice {
            dice: DiceSpec::new(1, 6),
            max_level: 10,
        },
        max_level: 10,
        starting_gold: DiceSpec::new(2, 6),
        class_equipment: equipment::ELF_KIT,
        spell_pool: pools::ELF_SPELLS,
        starting_spells: 1,
        skills: pools::ELF_SKILLS,
    },
    ClassDefinition {
        class: CharacterClass::Halfling,
        name: "Halfling",
        primary: Ability::Dexterity,
        hit_dice: HitDice {
            dice: DiceSpec::new(1, 6),
            max_level: 8,
        },
        max_level: 8,
        starting_gold: DiceSpec::new(2, 6),
        class_equipment: equipment::HALFLING_KIT,
        spell_pool: &[],
        starting_spells: 0,
        skills: pools::HALFLING_SKILLS,
    },
];
