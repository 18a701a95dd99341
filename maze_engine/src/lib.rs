//! # Maze Engine
//!
//! The labyrinth a hero crosses to reach the final boss. This crate builds on
//! `game_rules` and turns a TOML maze description into a playable run.
//!
//! ## Core Components
//!
//! - **config**: Maze content as data, with the default maze embedded
//! - **maze**: The validated room graph and per-room encounters
//! - **shop**: The merchant and its purchase rules
//! - **game**: The progression controller, including death and retry
//! - **input / events**: The seam to whatever presents the game and reads choices
//!
//! The engine never prints or reads a terminal itself. Every decision comes
//! from a [`PlayerInput`], every line of narration goes out as a [`GameEvent`].

pub mod config;
pub mod error;
pub mod events;
pub mod game;
pub mod input;
pub mod maze;
pub mod shop;

pub use config::*;
pub use error::{GameError, MazeError, ShopError};
pub use events::*;
pub use game::*;
pub use input::*;
pub use maze::*;
pub use shop::*;
