//! Error types for rule violations that the caller can recover from.
//!
//! None of these end a run. Death is reported as an outcome by the combat and
//! risk resolvers, never as an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A combat action that was rejected without consuming the hero's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CombatError {
    #[error("special attack already used in this fight")]
    SpecialAlreadyUsed,

    #[error("no combat consumables available")]
    NoCombatConsumables,

    #[error("consumable selection cancelled")]
    Cancelled,

    #[error("no combat consumable at position {0}")]
    InvalidSelection(usize),
}

/// Inventory operations that could not be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("no potion at position {0}")]
    NoSuchPotion(usize),

    #[error("no combat consumables available")]
    NoCombatConsumables,

    #[error("no combat consumable at position {0}")]
    NoSuchCombatConsumable(usize),
}

/// Invalid point allocation during character creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreationError {
    #[error("allocation costs {cost} points but only {available} are available")]
    Overspent { cost: u32, available: u32 },

    #[error("{remaining} points left unspent")]
    Unspent { remaining: u32 },

    #[error("not enough points for strength ({remaining} left, {cost} needed)")]
    CannotAffordStrength { remaining: u32, cost: u32 },
}

pub type Result<T, E = InventoryError> = std::result::Result<T, E>;
