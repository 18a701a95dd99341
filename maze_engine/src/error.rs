//! Errors raised while building a maze, shopping, or driving a run.

use std::path::PathBuf;

use game_rules::HeroArchetype;
use thiserror::Error;

/// Malformed maze data. Always fatal: a maze that fails to build is never
/// handed to a [`crate::Game`].
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("room `{0}` is defined more than once")]
    DuplicateRoom(String),

    #[error("room `{room}` has an exit to unknown room `{exit}`")]
    DanglingExit { room: String, exit: String },

    #[error("{role} room `{name}` does not exist")]
    UnknownRoom { role: &'static str, name: String },

    #[error("room `{0}` has no exits and is not the boss room")]
    DeadEnd(String),

    #[error("room `{room}` has a death chance of {value}, expected a value in [0, 1]")]
    InvalidProbability { room: String, value: f64 },

    #[error("failed to parse maze TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read maze file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A purchase that did not go through. Gold and inventory are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("{item} costs {price} gold but only {gold} is available")]
    InsufficientGold { item: String, price: u32, gold: u32 },

    #[error("{item} cannot be used by a {archetype}")]
    NotAllowed {
        item: String,
        archetype: HeroArchetype,
    },

    #[error("nothing on offer at position {0}")]
    InvalidSelection(usize),
}

/// Failures of the run controller itself.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error("the run is already over")]
    RunOver,
}

pub type Result<T, E = MazeError> = std::result::Result<T, E>;
