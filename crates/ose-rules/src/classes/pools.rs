//! Starting spell pools and class skills.

use serde::Serialize;

use crate::dice::RandomSource;

/// A first-level spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Spell {
    /// Spell name.
    pub name: &'static str,
    /// Spell level.
    pub level: u32,
    /// Short rules summary.
    pub description: &'static str,
}

/// A class skill with its percentage chance (or score) of success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Skill {
    /// Skill name.
    pub name: &'static str,
    /// Base chance in percent.
    pub value: u32,
    /// Short rules summary.
    pub description: &'static str,
}

const fn spell(name: &'static str, description: &'static str) -> Spell {
    Spell {
        name,
        level: 1,
        description,
    }
}

const fn skill(name: &'static str, value: u32, description: &'static str) -> Skill {
    Skill {
        name,
        value,
        description,
    }
}

const READ_MAGIC: Spell = spell(
    "Read Magic",
    "Decipher magical inscriptions on scrolls and in spell books.",
);
const DETECT_MAGIC: Spell = spell(
    "Detect Magic",
    "Enchanted objects and places within 60' glow.",
);

/// Magic-user starting pool.
pub const MAGIC_USER_SPELLS: &[Spell] = &[
    READ_MAGIC,
    DETECT_MAGIC,
    spell("Light", "Conjures light as bright as a torch."),
    spell(
        "Magic Missile",
        "A glowing dart strikes unerringly for 1d6+1 damage.",
    ),
    spell(
        "Shield",
        "An invisible barrier improves the caster's armour class by 2.",
    ),
    spell(
        "Sleep",
        "Puts 2d8 Hit Dice of creatures into a magical slumber.",
    ),
];

/// Cleric starting pool.
pub const CLERIC_SPELLS: &[Spell] = &[
    spell("Cure Light Wounds", "Restores 1d6+1 hit points."),
    spell(
        "Detect Evil",
        "Evil creatures and enchanted objects within 120' glow.",
    ),
    spell(
        "Protection from Evil",
        "Wards the subject against attacks from evil creatures.",
    ),
    spell(
        "Purify Food and Water",
        "Makes spoiled or poisoned food and water safe.",
    ),
];

/// Elf starting pool.
pub const ELF_SPELLS: &[Spell] = &[READ_MAGIC, DETECT_MAGIC];

/// Thief skills.
pub const THIEF_SKILLS: &[Skill] = &[
    skill("Open Locks", 15, "Pick a lock, once per lock."),
    skill("Remove Traps", 10, "Disarm a trap found on a treasure."),
    skill("Pick Pockets", 20, "Lift an item from a person unnoticed."),
    skill("Move Silently", 25, "Move without making a sound."),
    skill("Climb Sheer Surfaces", 30, "Scale walls and cliffs."),
    skill(
        "Hide in Shadows",
        10,
        "Stay unseen while motionless in shadow.",
    ),
    skill(
        "Find Traps",
        35,
        "Search an area for traps and secret doors.",
    ),
    skill("Hear Noise", 30, "Listen at doors for sounds beyond."),
];

/// Dwarf skills.
pub const DWARF_SKILLS: &[Skill] = &[
    skill("Detect Room Traps", 25, "Spot traps built into stonework."),
    skill(
        "Detect Sliding Walls",
        15,
        "Notice walls that move in stone passages.",
    ),
    skill("Detect Secret Rooms", 15, "Find hidden chambers in stone."),
    skill(
        "Appraise Treasure",
        20,
        "Estimate the value of gems and metalwork.",
    ),
];

/// Elf skills.
pub const ELF_SKILLS: &[Skill] = &[
    skill(
        "Detect Secret Doors",
        20,
        "Find concealed doors when searching.",
    ),
    skill(
        "Ghoul Paralysis Immunity",
        100,
        "Unaffected by the paralysing touch of ghouls.",
    ),
];

/// Halfling skills.
pub const HALFLING_SKILLS: &[Skill] = &[
    skill("Move Silently", 20, "Move without making a sound."),
    skill("Hide", 30, "Vanish into woods or undergrowth."),
];

/// Draw `count` distinct spells from `pool`, in draw order.
///
/// Uses a partial Fisher-Yates shuffle so every draw comes from `rng`.
pub(crate) fn draw_spells(pool: &[Spell], count: usize, rng: &mut dyn RandomSource) -> Vec<Spell> {
    let mut remaining = pool.to_vec();
    let count = count.min(remaining.len());
    for i in 0..count {
        let j = rng.draw(i as u32, (remaining.len() - 1) as u32) as usize;
        remaining.swap(i, j);
    }
    remaining.truncate(count);
    remaining
}
