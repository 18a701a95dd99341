//! Enemies met in combat rooms.

use serde::{Deserialize, Serialize};

use super::{EntityId, Stats};

/// A hostile NPC. Health carries over between fights; it is never restored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    pub id: EntityId,
    pub name: String,
    pub stats: Stats,
    gold_reward: u32,
}

impl Npc {
    pub fn new(name: impl Into<String>, max_health: u32, strength: u32, gold_reward: u32) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            stats: Stats::new(max_health, strength),
            gold_reward,
        }
    }

    pub fn gold_reward(&self) -> u32 {
        self.gold_reward
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_npc() {
        let npc = Npc::new("Nogitsune", 95, 12, 25);
        assert_eq!(npc.stats.current_health(), 95);
        assert_eq!(npc.gold_reward(), 25);
        assert!(npc.is_alive());
    }

    #[test]
    fn test_npc_death() {
        let mut npc = Npc::new("Loki", 180, 22, 0);
        npc.stats.take_damage(500);
        assert!(!npc.is_alive());
    }
}
