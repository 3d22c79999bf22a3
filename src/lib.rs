//! # frustration
//!
//! A Ludo-style race game engine: tokens race around a shared circular
//! track and up a private tail, under configurable win and collision
//! rules, with single-step undo all the way back to the first move.
//!
//! ## Design Principles
//!
//! 1. **Positions are relative**: a raw slot number is only classified
//!    against a specific color. The same number is a shared main-track
//!    slot to one color and a private tail slot to another; no
//!    free-standing global position type exists.
//!
//! 2. **The track is policy-free**: movement arithmetic returns raw,
//!    uncapped destinations. What an overshoot or a collision *means* is
//!    decided one layer up, by independently toggleable rules.
//!
//! 3. **The core is silent**: no printing, no logging. Everything the
//!    outside world learns arrives through synchronous observer events;
//!    the console renderer is just one observer.
//!
//! ## Modules
//!
//! - `core`: colors, tokens, the roster and turn rotation
//! - `board`: track geometry, per-color lanes, movement arithmetic
//! - `rules`: win and collision policy over raw track results
//! - `dice`: the bounded-RNG collaborator behind the `DiceRoller` seam
//! - `history`: snapshots and the LIFO undo stack
//! - `observer`: event types, the observer trait, console rendering
//! - `game`: configuration and the turn controller

pub mod board;
pub mod core;
pub mod dice;
pub mod game;
pub mod history;
pub mod observer;
pub mod rules;

// Re-export commonly used types
pub use crate::board::{BoardConfig, BoardSize, ConfigError, Lane, Position, PositionKind};
pub use crate::core::{PlayerColor, Roster, Token};
pub use crate::dice::{Dice, DiceArity, DiceRoll, DiceRoller};
pub use crate::game::{Game, GameConfig, GamePhase};
pub use crate::history::{History, Snapshot};
pub use crate::observer::{
    ConsoleObserver, GameObserver, HitEvent, MoveEvent, NullObserver, UndoEvent, WinEvent,
};
pub use crate::rules::RuleSet;
