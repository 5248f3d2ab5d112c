//! Starting equipment: the common adventuring pack and each class kit.

use serde::Serialize;

use crate::dice::DiceSpec;

/// What an item is, for the purposes of the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Bags, sacks and flasks.
    Container,
    /// Rations.
    Food,
    /// Torches and lanterns.
    Light,
    /// Melee or missile weapon.
    Weapon,
    /// Body armour.
    Armor,
    /// Shield.
    Shield,
    /// Holy symbol.
    HolySymbol,
    /// Spell book.
    Spellbook,
    /// Spell components.
    SpellComponents,
    /// Thieves' tools.
    ThievesTools,
    /// Arrows, sling stones and the like.
    Ammunition,
}

/// A piece of starting equipment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Item {
    /// Display name.
    pub name: &'static str,
    /// Item category.
    pub kind: ItemKind,
    /// Damage dice, for weapons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<DiceSpec>,
    /// Armour class contribution, for armour and shields.
    pub ac_bonus: i32,
    /// Weight in pounds.
    pub weight: f32,
}

impl Item {
    const fn gear(name: &'static str, kind: ItemKind, weight: f32) -> Self {
        Self {
            name,
            kind,
            damage: None,
            ac_bonus: 0,
            weight,
        }
    }

    const fn weapon(name: &'static str, damage: DiceSpec, weight: f32) -> Self {
        Self {
            name,
            kind: ItemKind::Weapon,
            damage: Some(damage),
            ac_bonus: 0,
            weight,
        }
    }

    const fn protection(name: &'static str, kind: ItemKind, ac_bonus: i32, weight: f32) -> Self {
        Self {
            name,
            kind,
            damage: None,
            ac_bonus,
            weight,
        }
    }

    /// Whether the item counts towards armour class.
    pub fn is_protective(&self) -> bool {
        matches!(self.kind, ItemKind::Armor | ItemKind::Shield)
    }
}

const LEATHER: Item = Item::protection("Leather armour", ItemKind::Armor, 2, 5.0);
const CHAIN: Item = Item::protection("Chain mail", ItemKind::Armor, 4, 10.0);
const SHIELD: Item = Item::protection("Shield", ItemKind::Shield, 1, 2.0);
const LONG_SWORD: Item = Item::weapon("Long sword", DiceSpec::new(1, 8), 3.0);
const SHORT_SWORD: Item = Item::weapon("Short sword", DiceSpec::new(1, 6), 1.0);

/// Carried by every new character.
pub const COMMON_PACK: &[Item] = &[
    Item::gear("Backpack", ItemKind::Container, 1.0),
    Item::gear("Rations (1 week)", ItemKind::Food, 1.0),
    Item::gear("Waterskin", ItemKind::Container, 0.5),
    Item::gear("Torches (6)", ItemKind::Light, 1.0),
];

/// Fighter kit.
pub const FIGHTER_KIT: &[Item] = &[LONG_SWORD, CHAIN, SHIELD];

/// Cleric kit.
pub const CLERIC_KIT: &[Item] = &[
    Item::weapon("Mace", DiceSpec::new(1, 6), 3.0),
    LEATHER,
    Item::gear("Holy symbol", ItemKind::HolySymbol, 0.1),
];

/// Magic-user kit.
pub const MAGIC_USER_KIT: &[Item] = &[
    Item::weapon("Dagger", DiceSpec::new(1, 4), 0.5),
    Item::gear("Spell book", ItemKind::Spellbook, 1.0),
    Item::gear("Spell components", ItemKind::SpellComponents, 0.5),
];

/// Thief kit.
pub const THIEF_KIT: &[Item] = &[
    SHORT_SWORD,
    LEATHER,
    Item::gear("Thieves' tools", ItemKind::ThievesTools, 0.5),
];

/// Dwarf kit.
pub const DWARF_KIT: &[Item] = &[
    Item::weapon("Battle axe", DiceSpec::new(1, 8), 3.0),
    CHAIN,
    SHIELD,
];

/// Elf kit.
pub const ELF_KIT: &[Item] = &[
    LONG_SWORD,
    Item::weapon("Long bow", DiceSpec::new(1, 6), 1.0),
    Item::gear("Arrows (20)", ItemKind::Ammunition, 0.5),
    LEATHER,
];

/// Halfling kit.
pub const HALFLING_KIT: &[Item] = &[
    SHORT_SWORD,
    Item::weapon("Sling", DiceSpec::new(1, 4), 0.1),
    Item::gear("Sling stones (20)", ItemKind::Ammunition, 0.5),
    LEATHER,
];

/// Sum of the armour class contributions of the protective items.
pub fn armor_bonus(items: &[Item]) -> i32 {
    items
        .iter()
        .filter(|i| i.is_protective())
        .map(|i| i.ac_bonus)
        .sum()
}
