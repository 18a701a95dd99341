//! Maze content loaded from TOML.
//!
//! The config is plain data; [`crate::Maze::build`] validates it and turns it
//! into a playable graph. A new run rebuilds the maze from the same config.

use std::path::Path;

use game_rules::{Item, Npc, Potion, RiskEvent, Weapon};
use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};

const DEFAULT_MAZE: &str = include_str!("../content/maze.toml");

/// Full description of a maze and the economy around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    pub start_room: String,
    /// Winning the encounter in this room ends the run in victory.
    pub boss_room: String,
    #[serde(default)]
    pub starter_kit: StarterKit,
    #[serde(default)]
    pub shop_stock: Vec<Item>,
    pub rooms: Vec<RoomConfig>,
}

/// Items every new hero begins with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarterKit {
    pub weapon: Option<Weapon>,
    #[serde(default)]
    pub potions: Vec<Potion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    pub name: String,
    #[serde(default)]
    pub exits: Vec<String>,
    #[serde(default)]
    pub payload: PayloadConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayloadConfig {
    #[default]
    Empty,
    Shop,
    Risk(RiskEvent),
    Combat(CombatConfig),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatConfig {
    pub ally_name: Option<String>,
    #[serde(default)]
    pub ally_line: String,
    #[serde(default)]
    pub enemy_line: String,
    pub enemy: Option<EnemyConfig>,
    pub reward: Option<Potion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub name: String,
    pub max_health: u32,
    pub strength: u32,
    #[serde(default)]
    pub gold_reward: u32,
}

impl EnemyConfig {
    /// Spawn a fresh NPC at full health.
    pub fn spawn(&self) -> Npc {
        Npc::new(&self.name, self.max_health, self.strength, self.gold_reward)
    }
}

impl MazeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), rooms = config.rooms.len(), "maze config loaded");
        Ok(config)
    }

    /// The maze shipped with the game.
    pub fn default_maze() -> Result<Self> {
        Self::from_toml_str(DEFAULT_MAZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_maze_parses() {
        let config = MazeConfig::default_maze().unwrap();
        assert_eq!(config.start_room, "Labyrinth Entrance");
        assert_eq!(config.boss_room, "Labyrinth Core (Boss)");
        assert_eq!(config.rooms.len(), 10);
        assert_eq!(config.shop_stock.len(), 9);
        assert_eq!(
            config.starter_kit.weapon.as_ref().map(|w| w.meta.name.as_str()),
            Some("Fists")
        );
        assert_eq!(config.starter_kit.potions[0].heal_amount, 15);
    }

    #[test]
    fn test_payload_kinds() {
        let config = MazeConfig::default_maze().unwrap();
        let payload = |name: &str| {
            config
                .rooms
                .iter()
                .find(|r| r.name == name)
                .map(|r| r.payload.clone())
                .unwrap()
        };

        assert_eq!(payload("Labyrinth Entrance"), PayloadConfig::Empty);
        assert_eq!(payload("Merchant's Shop"), PayloadConfig::Shop);
        match payload("Horse Crossing") {
            PayloadConfig::Risk(event) => {
                assert_eq!(event.transport_name, "Horse");
                assert_eq!(event.slow_death_chance, 0.10);
                assert_eq!(event.fast_death_chance, 0.75);
            }
            other => panic!("expected risk payload, got {:?}", other),
        }
        match payload("Labyrinth Core (Boss)") {
            PayloadConfig::Combat(combat) => {
                let enemy = combat.enemy.unwrap();
                assert_eq!(enemy.name, "Loki");
                assert_eq!((enemy.max_health, enemy.strength, enemy.gold_reward), (180, 22, 0));
                assert!(combat.reward.is_none());
            }
            other => panic!("expected combat payload, got {:?}", other),
        }
    }

    #[test]
    fn test_minimal_config() {
        let config = MazeConfig::from_toml_str(
            r#"
            start_room = "A"
            boss_room = "B"

            [[rooms]]
            name = "A"
            exits = ["B"]

            [[rooms]]
            name = "B"
            "#,
        )
        .unwrap();
        assert!(config.shop_stock.is_empty());
        assert!(config.starter_kit.weapon.is_none());
        assert_eq!(config.rooms[1].payload, PayloadConfig::Empty);
    }

    #[test]
    fn test_malformed_toml() {
        let err = MazeConfig::from_toml_str("start_room = ").unwrap_err();
        assert!(matches!(err, MazeError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = MazeConfig::load(Path::new("/nonexistent/maze.toml")).unwrap_err();
        assert!(matches!(err, MazeError::Io { .. }));
    }
}
