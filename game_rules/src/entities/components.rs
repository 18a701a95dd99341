//! Shared stat block for heroes and NPCs.

use serde::{Deserialize, Serialize};

/// Health and strength of a combatant.
///
/// `current_health` always stays within `[0, max_health]`; both `max_health`
/// and `strength` are at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    max_health: u32,
    current_health: u32,
    strength: u32,
}

impl Stats {
    /// Create a stat block at full health. Zero values are raised to 1.
    pub fn new(max_health: u32, strength: u32) -> Self {
        let max_health = max_health.max(1);
        Self {
            max_health,
            current_health: max_health,
            strength: strength.max(1),
        }
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Apply damage, flooring health at zero. Returns the health actually lost.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        let lost = damage.min(self.current_health);
        self.current_health -= lost;
        lost
    }

    /// Heal up to the ceiling. Returns the health actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_health - self.current_health);
        self.current_health += restored;
        restored
    }

    /// Healing that would be wasted if `amount` were applied now.
    pub fn overheal(&self, amount: u32) -> u32 {
        (self.current_health.saturating_add(amount)).saturating_sub(self.max_health)
    }

    pub fn set_current_health(&mut self, value: u32) {
        self.current_health = value.min(self.max_health);
    }

    pub fn restore_full(&mut self) {
        self.current_health = self.max_health;
    }

    pub fn increase_strength(&mut self, amount: u32) {
        self.strength = self.strength.saturating_add(amount);
    }

    /// Raise the health ceiling and strength. Current health is kept, then
    /// clamped to the new ceiling.
    pub fn grow(&mut self, max_health: u32, strength: u32) {
        self.max_health = self.max_health.saturating_add(max_health);
        self.strength = self.strength.saturating_add(strength);
        self.current_health = self.current_health.min(self.max_health);
    }
}
