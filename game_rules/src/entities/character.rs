//! The player's hero: archetype, progression and inventory.

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{EntityId, HeroBlueprint, Stats};
use crate::error::{CreationError, InventoryError, Result};
use crate::items::{CombatConsumable, Consumable, Potion, Weapon};
use crate::mechanics::{WeakPoint, LEVEL_UP_HEALTH, LEVEL_UP_STRENGTH};

/// The three playable heroes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display,
)]
pub enum HeroArchetype {
    Nurse,
    Courier,
    Teacher,
}

/// Static data attached to an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeProfile {
    pub intro_text: &'static str,
    /// Extra damage added to the special attack.
    pub special_bonus: u32,
    /// Line shouted when the special attack lands.
    pub special_line: &'static str,
}

const NURSE: ArchetypeProfile = ArchetypeProfile {
    intro_text: "You are a nurse. Your whole life has been about helping others.\n\
                 Now the person you love needs you more than ever.\n\
                 You step into the labyrinth to find the cure.",
    special_bonus: 6,
    special_line: "Green wristband. You can wait.",
};

const COURIER: ArchetypeProfile = ArchetypeProfile {
    intro_text: "You are a courier. You know the streets, the rush and the danger.\n\
                 But nothing prepared you for this.\n\
                 You step into the labyrinth because the only delivery that matters now is the cure.",
    special_bonus: 5,
    special_line: "Urgent delivery! Sign for it... or take it in the face!",
};

const TEACHER: ArchetypeProfile = ArchetypeProfile {
    intro_text: "You are a teacher. You live on logic, patience and explanations.\n\
                 But this labyrinth follows no normal rules.\n\
                 You go in anyway: love is not debated, it is done.",
    special_bonus: 7,
    special_line: "Linear algebra. Determinants. Matrices.",
};

impl HeroArchetype {
    pub fn profile(&self) -> &'static ArchetypeProfile {
        match self {
            HeroArchetype::Nurse => &NURSE,
            HeroArchetype::Courier => &COURIER,
            HeroArchetype::Teacher => &TEACHER,
        }
    }

    pub fn special_bonus(&self) -> u32 {
        self.profile().special_bonus
    }
}

/// Result of a level-up, for narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub level: u32,
    pub max_health: u32,
    pub strength: u32,
}

/// What drinking a potion actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionEffect {
    pub healed: u32,
    pub strength_gained: u32,
}

/// The player character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub id: EntityId,
    pub name: String,
    archetype: HeroArchetype,
    stats: Stats,
    level: u32,
    gold: u32,
    weapon: Option<Weapon>,
    inventory: Vec<Consumable>,
    weak_point: WeakPoint,
    special_used_this_fight: bool,
}

impl Hero {
    /// Create a level 1 hero with no items.
    pub fn new(
        name: impl Into<String>,
        archetype: HeroArchetype,
        max_health: u32,
        strength: u32,
        gold: u32,
        weak_point: WeakPoint,
    ) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            archetype,
            stats: Stats::new(max_health, strength),
            level: 1,
            gold,
            weapon: None,
            inventory: Vec::new(),
            weak_point,
            special_used_this_fight: false,
        }
    }

    /// Build a hero from the character-creation choices. The weak point is
    /// rolled from `rng`.
    pub fn create(
        blueprint: &HeroBlueprint,
        rng: &mut impl Rng,
    ) -> std::result::Result<Self, CreationError> {
        let base = blueprint.allocation.resolve(blueprint.difficulty.points())?;
        let hero = Self::new(
            blueprint.display_name(),
            blueprint.archetype,
            base.health,
            base.strength,
            blueprint.difficulty.starting_gold(),
            WeakPoint::roll(rng),
        );
        tracing::info!(
            hero = %hero.id,
            archetype = %hero.archetype,
            max_health = hero.stats.max_health(),
            strength = hero.stats.strength(),
            weak_point = %hero.weak_point,
            "hero created"
        );
        Ok(hero)
    }

    pub fn archetype(&self) -> HeroArchetype {
        self.archetype
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn current_health(&self) -> u32 {
        self.stats.current_health()
    }

    pub fn max_health(&self) -> u32 {
        self.stats.max_health()
    }

    pub fn strength(&self) -> u32 {
        self.stats.strength()
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn inventory(&self) -> &[Consumable] {
        &self.inventory
    }

    pub fn weak_point(&self) -> WeakPoint {
        self.weak_point
    }

    pub fn special_used_this_fight(&self) -> bool {
        self.special_used_this_fight
    }

    /// Equip a weapon, returning the one it replaces.
    pub fn equip_weapon(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.weapon.replace(weapon)
    }

    pub fn add_consumable(&mut self, item: impl Into<Consumable>) {
        self.inventory.push(item.into());
    }

    /// Deduct gold if there is enough. Leaves gold untouched otherwise.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }

    pub fn earn_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub fn heal(&mut self, amount: u32) -> u32 {
        self.stats.heal(amount)
    }

    pub fn take_damage(&mut self, damage: u32) -> u32 {
        self.stats.take_damage(damage)
    }

    pub fn increase_strength(&mut self, amount: u32) {
        self.stats.increase_strength(amount);
    }

    pub fn set_current_health(&mut self, value: u32) {
        self.stats.set_current_health(value);
    }

    pub fn restore_full_health(&mut self) {
        self.stats.restore_full();
    }

    /// +1 level, +10 max health, +1 strength. Current health is not refilled.
    pub fn level_up(&mut self) -> LevelUp {
        self.level += 1;
        self.stats.grow(LEVEL_UP_HEALTH, LEVEL_UP_STRENGTH);
        LevelUp {
            level: self.level,
            max_health: self.stats.max_health(),
            strength: self.stats.strength(),
        }
    }

    /// Damage of a normal attack with the current weapon.
    pub fn normal_attack_damage(&self) -> u32 {
        let weapon = self.weapon.as_ref().map_or(0, |w| w.attack);
        self.stats.strength() + weapon
    }

    /// Damage of the archetype's special attack with the current weapon.
    pub fn special_attack_damage(&self) -> u32 {
        let weapon = self.weapon.as_ref().map_or(0, |w| w.special_attack);
        self.stats.strength() + weapon + self.archetype.special_bonus()
    }

    pub(crate) fn begin_fight(&mut self) {
        self.special_used_this_fight = false;
    }

    pub(crate) fn mark_special_used(&mut self) {
        self.special_used_this_fight = true;
    }

    /// Healing from `potion` that would be wasted right now.
    pub fn would_overheal(&self, potion: &Potion) -> u32 {
        self.stats.overheal(potion.heal_amount)
    }

    /// Apply a potion's effects without touching the inventory.
    pub fn apply_potion(&mut self, potion: &Potion) -> PotionEffect {
        let healed = self.stats.heal(potion.heal_amount);
        self.stats.increase_strength(potion.strength_boost);
        PotionEffect {
            healed,
            strength_gained: potion.strength_boost,
        }
    }

    /// Potions in the inventory, in order.
    pub fn potions(&self) -> Vec<&Potion> {
        self.inventory.iter().filter_map(Consumable::as_potion).collect()
    }

    /// Combat consumables in the inventory, in order.
    pub fn combat_consumables(&self) -> Vec<&CombatConsumable> {
        self.inventory.iter().filter_map(Consumable::as_combat).collect()
    }

    /// Remove the `nth` potion from the inventory and drink it.
    pub fn drink_potion(&mut self, nth: usize) -> Result<(Potion, PotionEffect)> {
        let slot = self
            .inventory
            .iter()
            .enumerate()
            .filter(|(_, item)| item.as_potion().is_some())
            .nth(nth)
            .map(|(slot, _)| slot)
            .ok_or(InventoryError::NoSuchPotion(nth))?;

        match self.inventory.remove(slot) {
            Consumable::Potion(potion) => {
                let effect = self.apply_potion(&potion);
                Ok((potion, effect))
            }
            Consumable::Combat(_) => Err(InventoryError::NoSuchPotion(nth)),
        }
    }

    /// Remove the `nth` combat consumable from the inventory.
    pub fn take_combat_consumable(&mut self, nth: usize) -> Result<CombatConsumable> {
        let mut slots = self
            .inventory
            .iter()
            .enumerate()
            .filter(|(_, item)| item.as_combat().is_some())
            .map(|(slot, _)| slot)
            .peekable();

        if slots.peek().is_none() {
            return Err(InventoryError::NoCombatConsumables);
        }
        let slot = slots
            .nth(nth)
            .ok_or(InventoryError::NoSuchCombatConsumable(nth))?;

        match self.inventory.remove(slot) {
            Consumable::Combat(item) => Ok(item),
            Consumable::Potion(_) => Err(InventoryError::NoSuchCombatConsumable(nth)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemMeta;

    fn hero() -> Hero {
        Hero::new("Ana", HeroArchetype::Nurse, 100, 10, 20, WeakPoint::Head)
    }

    #[test]
    fn test_new_hero() {
        let hero = hero();
        assert_eq!(hero.level(), 1);
        assert_eq!(hero.current_health(), 100);
        assert!(hero.weapon().is_none());
        assert!(hero.inventory().is_empty());
        assert!(!hero.special_used_this_fight());
    }

    #[test]
    fn test_create_from_blueprint() {
        use crate::entities::{AutoStyle, Difficulty, PointAllocation};
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(4);
        let mut blueprint = HeroBlueprint {
            name: "  ".into(),
            archetype: HeroArchetype::Courier,
            difficulty: Difficulty::Easy,
            allocation: PointAllocation::Auto(AutoStyle::Balanced),
        };

        let hero = Hero::create(&blueprint, &mut rng).unwrap();
        assert_eq!(hero.name, "Hero");
        assert_eq!((hero.max_health(), hero.strength()), (105, 39));
        assert_eq!(hero.gold(), 20);
        assert_eq!(hero.level(), 1);

        blueprint.allocation = PointAllocation::Manual {
            health: 10,
            strength: 0,
        };
        assert_eq!(
            Hero::create(&blueprint, &mut rng).unwrap_err(),
            CreationError::Unspent { remaining: 290 }
        );
    }

    #[test]
    fn test_spend_gold() {
        let mut hero = hero();
        assert!(!hero.spend_gold(21));
        assert_eq!(hero.gold(), 20);
        assert!(hero.spend_gold(15));
        assert_eq!(hero.gold(), 5);
        assert!(hero.spend_gold(5));
        assert_eq!(hero.gold(), 0);
    }

    #[test]
    fn test_level_up_does_not_refill_health() {
        let mut hero = hero();
        hero.take_damage(40);
        let up = hero.level_up();
        assert_eq!(up.level, 2);
        assert_eq!(up.max_health, 110);
        assert_eq!(up.strength, 11);
        assert_eq!(hero.current_health(), 60);
    }

    #[test]
    fn test_attack_damage() {
        let mut hero = hero();
        assert_eq!(hero.normal_attack_damage(), 10);
        assert_eq!(hero.special_attack_damage(), 16);
        hero.equip_weapon(Weapon::new(ItemMeta::new("Knife", 20), 4, 7));
        assert_eq!(hero.normal_attack_damage(), 14);
        assert_eq!(hero.special_attack_damage(), 23);
    }

    #[test]
    fn test_special_bonus_per_archetype() {
        assert_eq!(HeroArchetype::Nurse.special_bonus(), 6);
        assert_eq!(HeroArchetype::Courier.special_bonus(), 5);
        assert_eq!(HeroArchetype::Teacher.special_bonus(), 7);
    }

    #[test]
    fn test_equip_replaces_weapon() {
        let mut hero = hero();
        assert!(hero.equip_weapon(Weapon::new(ItemMeta::new("Fists", 0), 0, 0)).is_none());
        let old = hero.equip_weapon(Weapon::new(ItemMeta::new("Stick", 18), 3, 6));
        assert_eq!(old.map(|w| w.meta.name), Some("Fists".to_string()));
        assert_eq!(hero.weapon().map(|w| w.attack), Some(3));
    }

    #[test]
    fn test_drink_potion_skips_combat_items() {
        let mut hero = hero();
        hero.add_consumable(CombatConsumable::new(ItemMeta::new("Bomb", 18), 25));
        hero.add_consumable(Potion::healing(ItemMeta::new("Small Potion", 0), 15));
        hero.add_consumable(Potion::strength(ItemMeta::new("Strength Potion", 20), 2));
        hero.take_damage(50);

        let (potion, effect) = hero.drink_potion(1).unwrap();
        assert_eq!(potion.meta.name, "Strength Potion");
        assert_eq!(effect.strength_gained, 2);
        assert_eq!(hero.strength(), 12);

        let (_, effect) = hero.drink_potion(0).unwrap();
        assert_eq!(effect.healed, 15);
        assert_eq!(hero.current_health(), 65);
        assert_eq!(hero.drink_potion(0), Err(InventoryError::NoSuchPotion(0)));
        assert_eq!(hero.inventory().len(), 1);
    }

    #[test]
    fn test_would_overheal() {
        let mut hero = hero();
        let potion = Potion::healing(ItemMeta::new("Large Potion", 40), 70);
        assert_eq!(hero.would_overheal(&potion), 70);
        hero.take_damage(50);
        assert_eq!(hero.would_overheal(&potion), 20);
        hero.take_damage(50);
        assert_eq!(hero.would_overheal(&potion), 0);
    }

    #[test]
    fn test_take_combat_consumable_once() {
        let mut hero = hero();
        hero.add_consumable(Potion::healing(ItemMeta::new("Small Potion", 0), 15));
        hero.add_consumable(CombatConsumable::new(ItemMeta::new("Bomb", 18), 25));

        assert_eq!(
            hero.take_combat_consumable(3),
            Err(InventoryError::NoSuchCombatConsumable(3))
        );
        let bomb = hero.take_combat_consumable(0).unwrap();
        assert_eq!(bomb.instant_attack, 25);
        assert_eq!(
            hero.take_combat_consumable(0),
            Err(InventoryError::NoCombatConsumables)
        );
        assert_eq!(hero.potions().len(), 1);
    }
}
