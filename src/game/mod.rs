//! Game assembly: configuration and the turn controller.

pub mod config;
pub mod engine;

pub use config::GameConfig;
pub use engine::{Game, GamePhase};
