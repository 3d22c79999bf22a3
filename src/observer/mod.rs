//! Observers: the notification collaborator.
//!
//! The core calls observers synchronously and ignores their results; all
//! diagnostic and console output lives behind this seam.

pub mod console;
pub mod events;

pub use console::ConsoleObserver;
pub use events::{GameObserver, HitEvent, MoveEvent, NullObserver, UndoEvent, WinEvent};
