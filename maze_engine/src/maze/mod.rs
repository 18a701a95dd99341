//! The room graph.
//!
//! Rooms are keyed by name and connected by directed, ordered exits. The
//! graph is validated once in [`Maze::build`]; after that every exit is
//! known to resolve and lookups never fail for names taken from it.

mod room;

pub use room::*;

use std::collections::HashMap;

use game_rules::RiskEvent;

use crate::config::{MazeConfig, PayloadConfig};
use crate::error::{MazeError, Result};

#[derive(Debug, Clone)]
pub struct Maze {
    rooms: Vec<Room>,
    /// Index: room name -> position in `rooms`.
    index: HashMap<String, usize>,
    start_room: String,
    boss_room: String,
}

impl Maze {
    /// Validate `config` and build a fresh graph with every room uncleared.
    pub fn build(config: &MazeConfig) -> Result<Self> {
        let mut index = HashMap::with_capacity(config.rooms.len());
        for (position, room) in config.rooms.iter().enumerate() {
            if index.insert(room.name.clone(), position).is_some() {
                return Err(MazeError::DuplicateRoom(room.name.clone()));
            }
        }

        for (role, name) in [("start", &config.start_room), ("boss", &config.boss_room)] {
            if !index.contains_key(name) {
                return Err(MazeError::UnknownRoom {
                    role,
                    name: name.clone(),
                });
            }
        }

        for room in &config.rooms {
            if let Some(exit) = room.exits.iter().find(|exit| !index.contains_key(*exit)) {
                return Err(MazeError::DanglingExit {
                    room: room.name.clone(),
                    exit: exit.clone(),
                });
            }
            if room.exits.is_empty() && room.name != config.boss_room {
                return Err(MazeError::DeadEnd(room.name.clone()));
            }
            if let PayloadConfig::Risk(event) = &room.payload {
                check_probabilities(&room.name, event)?;
            }
        }

        let maze = Self {
            rooms: config.rooms.iter().map(Room::from).collect(),
            index,
            start_room: config.start_room.clone(),
            boss_room: config.boss_room.clone(),
        };
        tracing::debug!(
            rooms = maze.rooms.len(),
            start = %maze.start_room,
            boss = %maze.boss_room,
            "maze built"
        );
        Ok(maze)
    }

    pub fn start_room(&self) -> &str {
        &self.start_room
    }

    pub fn boss_room(&self) -> &str {
        &self.boss_room
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Outgoing exits of `name`, in order.
    pub fn neighbors_of(&self, name: &str) -> Option<&[String]> {
        self.find_by_name(name).map(Room::exits)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Room> {
        self.index.get(name).map(|&position| &self.rooms[position])
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Room> {
        let position = *self.index.get(name)?;
        self.rooms.get_mut(position)
    }
}

fn check_probabilities(room: &str, event: &RiskEvent) -> Result<()> {
    for value in [event.slow_death_chance, event.fast_death_chance] {
        if !(0.0..=1.0).contains(&value) {
            return Err(MazeError::InvalidProbability {
                room: room.to_string(),
                value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(toml: &str) -> MazeConfig {
        MazeConfig::from_toml_str(toml).unwrap()
    }

    #[test]
    fn test_default_maze_builds() {
        let maze = Maze::build(&MazeConfig::default_maze().unwrap()).unwrap();
        assert_eq!(maze.rooms().len(), 10);
        assert_eq!(
            maze.neighbors_of("Labyrinth Entrance").unwrap(),
            ["Merchant's Shop", "Horse Crossing"]
        );
        assert_eq!(maze.neighbors_of("Labyrinth Core (Boss)").unwrap().len(), 0);
        assert!(maze.rooms().iter().all(|room| !room.is_cleared()));
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let maze = Maze::build(&MazeConfig::default_maze().unwrap()).unwrap();
        assert!(maze.find_by_name("Horse Crossing").is_some());
        assert!(maze.find_by_name("horse crossing").is_none());
        assert!(maze.neighbors_of("Nowhere").is_none());
    }

    #[test]
    fn test_dangling_exit_is_fatal() {
        let err = Maze::build(&config(
            r#"
            start_room = "A"
            boss_room = "B"
            [[rooms]]
            name = "A"
            exits = ["B", "C"]
            [[rooms]]
            name = "B"
            "#,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            MazeError::DanglingExit { ref room, ref exit } if room == "A" && exit == "C"
        ));
    }

    #[test]
    fn test_duplicate_room() {
        let err = Maze::build(&config(
            r#"
            start_room = "A"
            boss_room = "A"
            [[rooms]]
            name = "A"
            [[rooms]]
            name = "A"
            "#,
        ))
        .unwrap_err();
        assert!(matches!(err, MazeError::DuplicateRoom(name) if name == "A"));
    }

    #[test]
    fn test_unknown_boss_room() {
        let err = Maze::build(&config(
            r#"
            start_room = "A"
            boss_room = "Z"
            [[rooms]]
            name = "A"
            exits = ["A"]
            "#,
        ))
        .unwrap_err();
        assert!(matches!(err, MazeError::UnknownRoom { role: "boss", .. }));
    }

    #[test]
    fn test_dead_end() {
        let err = Maze::build(&config(
            r#"
            start_room = "A"
            boss_room = "B"
            [[rooms]]
            name = "A"
            [[rooms]]
            name = "B"
            "#,
        ))
        .unwrap_err();
        assert!(matches!(err, MazeError::DeadEnd(name) if name == "A"));
    }

    #[test]
    fn test_probability_out_of_range() {
        let err = Maze::build(&config(
            r#"
            start_room = "A"
            boss_room = "B"
            [[rooms]]
            name = "A"
            exits = ["B"]
            [rooms.payload]
            kind = "risk"
            transport_name = "Raft"
            description = "Rapids."
            slow_death_chance = 0.1
            fast_death_chance = 1.5
            [[rooms]]
            name = "B"
            "#,
        ))
        .unwrap_err();
        assert!(matches!(err, MazeError::InvalidProbability { value, .. } if value == 1.5));
    }
}
