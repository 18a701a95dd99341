//! The choice-provider seam between the engine and whoever is playing.
//!
//! Implementations own input parsing and validation. The engine still copes
//! with out-of-range answers: they are narrated and treated as "no action".

use game_rules::{CombatInput, Hero, HeroBlueprint, Item, Potion, RiskChoice, RiskEvent};
use serde::{Deserialize, Serialize};

use crate::events::GameEvent;

/// What to do with a potion dropped by a defeated enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardChoice {
    UseNow,
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopChoice {
    /// Buy the offered item at this position.
    Buy(usize),
    Leave,
}

/// Options after the hero dies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathChoice {
    /// Same hero at full health, back at the start room. Cleared rooms stay
    /// cleared.
    RetrySameHero,
    /// New hero, freshly built maze.
    NewHero,
    Quit,
}

/// Every decision the engine needs from the player.
pub trait PlayerInput: CombatInput {
    fn create_hero(&mut self) -> HeroBlueprint;

    fn risk_choice(&mut self, event: &RiskEvent) -> RiskChoice;

    fn reward_choice(&mut self, reward: &Potion) -> RewardChoice;

    fn shop_choice(&mut self, offer: &[Item], gold: u32) -> ShopChoice;

    /// Potion to drink before travelling, by position in `potions`.
    fn heal_choice(&mut self, hero: &Hero, potions: &[&Potion]) -> Option<usize>;

    /// Asked when drinking `potion` would waste `wasted` points of healing.
    fn confirm_overheal(&mut self, potion: &Potion, wasted: u32) -> bool;

    /// Exit to take, by position in `exits`. Out-of-range keeps the hero put.
    fn exit_choice(&mut self, exits: &[String]) -> usize;

    fn death_choice(&mut self) -> DeathChoice;

    /// Checked by [`crate::Game::run`] before every step. Returning `true`
    /// abandons the run, e.g. once the player's input stream is gone.
    fn wants_to_quit(&self) -> bool {
        false
    }

    fn narrate(&mut self, _event: &GameEvent) {}
}
