//! Entity definitions: the hero, the NPCs they fight, and the stats both share.

mod character;
mod components;
mod creation;
mod npc;

pub use character::*;
pub use components::*;
pub use creation::*;
pub use npc::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for every combatant in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil/empty entity ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
