//! Core roster types: colors, tokens, turn rotation.
//!
//! These are the game-agnostic building blocks the rest of the crate is
//! built on. Board topology lives in [`crate::board`]; nothing here knows
//! how positions are computed.

pub mod color;
pub mod roster;
pub mod token;

pub use color::PlayerColor;
pub use roster::Roster;
pub use token::Token;
