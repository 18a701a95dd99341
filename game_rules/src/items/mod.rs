//! Items: weapons, potions and combat consumables.
//!
//! Items are immutable values. A hero either equips a weapon or carries
//! consumables, which are single-use and leave the inventory when used.

use serde::{Deserialize, Serialize};

use crate::entities::HeroArchetype;

/// Data every item carries regardless of kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMeta {
    pub name: String,
    #[serde(default)]
    pub price: u32,
    /// Archetypes allowed to use the item. Empty means anyone.
    #[serde(default)]
    pub allowed_heroes: Vec<HeroArchetype>,
}

impl ItemMeta {
    /// Unrestricted item with the given name and price.
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
            allowed_heroes: Vec::new(),
        }
    }

    /// Restrict the item to a single archetype (can be chained).
    pub fn allow(mut self, archetype: HeroArchetype) -> Self {
        if !self.allowed_heroes.contains(&archetype) {
            self.allowed_heroes.push(archetype);
        }
        self
    }

    pub fn is_allowed_for(&self, archetype: HeroArchetype) -> bool {
        self.allowed_heroes.is_empty() || self.allowed_heroes.contains(&archetype)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    #[serde(flatten)]
    pub meta: ItemMeta,
    pub attack: u32,
    pub special_attack: u32,
}

impl Weapon {
    pub fn new(meta: ItemMeta, attack: u32, special_attack: u32) -> Self {
        Self {
            meta,
            attack,
            special_attack,
        }
    }
}

/// Heals and/or permanently raises strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    #[serde(flatten)]
    pub meta: ItemMeta,
    #[serde(default)]
    pub heal_amount: u32,
    #[serde(default)]
    pub strength_boost: u32,
}

impl Potion {
    pub fn healing(meta: ItemMeta, heal_amount: u32) -> Self {
        Self {
            meta,
            heal_amount,
            strength_boost: 0,
        }
    }

    pub fn strength(meta: ItemMeta, strength_boost: u32) -> Self {
        Self {
            meta,
            heal_amount: 0,
            strength_boost,
        }
    }
}

/// Deals fixed damage to the enemy when thrown in combat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatConsumable {
    #[serde(flatten)]
    pub meta: ItemMeta,
    pub instant_attack: u32,
}

impl CombatConsumable {
    pub fn new(meta: ItemMeta, instant_attack: u32) -> Self {
        Self {
            meta,
            instant_attack,
        }
    }
}

/// Single-use items kept in the hero's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Consumable {
    Potion(Potion),
    Combat(CombatConsumable),
}

impl Consumable {
    pub fn meta(&self) -> &ItemMeta {
        match self {
            Consumable::Potion(p) => &p.meta,
            Consumable::Combat(c) => &c.meta,
        }
    }

    pub fn as_potion(&self) -> Option<&Potion> {
        match self {
            Consumable::Potion(p) => Some(p),
            Consumable::Combat(_) => None,
        }
    }

    pub fn as_combat(&self) -> Option<&CombatConsumable> {
        match self {
            Consumable::Combat(c) => Some(c),
            Consumable::Potion(_) => None,
        }
    }
}

impl From<Potion> for Consumable {
    fn from(potion: Potion) -> Self {
        Consumable::Potion(potion)
    }
}

impl From<CombatConsumable> for Consumable {
    fn from(item: CombatConsumable) -> Self {
        Consumable::Combat(item)
    }
}

/// Anything a vendor can sell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    Weapon(Weapon),
    Potion(Potion),
    Combat(CombatConsumable),
}

impl Item {
    pub fn meta(&self) -> &ItemMeta {
        match self {
            Item::Weapon(w) => &w.meta,
            Item::Potion(p) => &p.meta,
            Item::Combat(c) => &c.meta,
        }
    }

    pub fn name(&self) -> &str {
        &self.meta().name
    }

    pub fn price(&self) -> u32 {
        self.meta().price
    }

    pub fn is_allowed_for(&self, archetype: HeroArchetype) -> bool {
        self.meta().is_allowed_for(archetype)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Weapon(w) => write!(
                f,
                "{} | ATK: {} | SPC: {} | Price: {} gold",
                w.meta.name, w.attack, w.special_attack, w.meta.price
            ),
            Item::Potion(p) => write!(
                f,
                "{} | Heal: {} | +Strength: {} | Price: {} gold",
                p.meta.name, p.heal_amount, p.strength_boost, p.meta.price
            ),
            Item::Combat(c) => write!(
                f,
                "{} | Instant damage: {} | Price: {} gold",
                c.meta.name, c.instant_attack, c.meta.price
            ),
        }
    }
}
