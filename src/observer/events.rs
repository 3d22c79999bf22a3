//! Game events and the observer contract.
//!
//! The turn controller narrates the game through these four events; it
//! never prints, logs, or otherwise produces output itself. Events are
//! plain owned data so observers outlive any borrow of the roster.

use crate::board::Position;
use crate::core::PlayerColor;

/// A token moved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveEvent {
    pub color: PlayerColor,
    /// The roll total that produced the move.
    pub roll: u16,
    /// The mover's move counter after this move.
    pub move_number: u32,
    /// Where the token stood, relative to the mover.
    pub from: Position,
    /// Where it landed, relative to the mover.
    pub to: Position,
}

/// A token landed on an occupied shared slot and the occupant was sent
/// home.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HitEvent {
    pub attacker: PlayerColor,
    pub victim: PlayerColor,
    /// The victim's position before being sent home.
    pub victim_from: Position,
    /// The victim's home, where it now stands.
    pub victim_home: Position,
}

/// The game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinEvent {
    pub winner: PlayerColor,
    /// Moves the winner took.
    pub winner_moves: u32,
    /// Moves taken across the whole table.
    pub total_moves: u32,
}

/// One step was undone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoEvent {
    /// Whose turn it is after the restore.
    pub current: PlayerColor,
    /// Whether the undone action included a hit.
    pub undone_hit: bool,
    /// The victim of that hit, if any.
    pub hit_victim: Option<PlayerColor>,
}

/// Synchronous event sink. All methods default to doing nothing, so an
/// observer implements only what it cares about; return values are never
/// consulted.
pub trait GameObserver {
    fn on_move(&mut self, event: &MoveEvent) {
        let _ = event;
    }

    fn on_hit(&mut self, event: &HitEvent) {
        let _ = event;
    }

    fn on_win(&mut self, event: &WinEvent) {
        let _ = event;
    }

    fn on_undo(&mut self, event: &UndoEvent) {
        let _ = event;
    }
}

/// An observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}
