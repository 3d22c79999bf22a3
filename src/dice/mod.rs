//! Dice: the external randomness collaborator.
//!
//! The core consumes roll totals only, behind the [`DiceRoller`] trait, so
//! tests script exact sequences and games replay from a seed.

pub mod roller;

pub use roller::{Dice, DiceArity, DiceRoll, DiceRoller};
