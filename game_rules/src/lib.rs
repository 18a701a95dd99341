//! # Game Rules
//!
//! The rules of All Worlds For Her: heroes and their progression, the items they
//! carry, and the two encounter resolvers (combat and risk events).
//! This crate performs no I/O. Player decisions come in through [`CombatInput`]
//! and randomness through an explicitly passed [`rand::Rng`].

pub mod entities;
pub mod error;
pub mod items;
pub mod mechanics;

pub use entities::*;
pub use error::{CombatError, CreationError, InventoryError};
pub use items::*;
pub use mechanics::*;
