//! Snapshots and the undo stack.
//!
//! A [`Snapshot`] is a full, independent copy of everything a turn can
//! change: every token's slot and move count, the rotation index, and the
//! hit/win bookkeeping. [`History`] stacks snapshots LIFO; the controller
//! pushes one before every move and another before a collision is resolved,
//! so undoing after a hit first restores the pre-hit state and only the
//! next undo rewinds the move itself.
//!
//! Undo on an empty stack is a normal outcome, reported as `None`, never
//! an error, and must leave the game untouched.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerColor, Roster};

/// One saved instant of game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    positions: FxHashMap<PlayerColor, u16>,
    move_counts: FxHashMap<PlayerColor, u32>,
    current_index: usize,
    hit_occurred: bool,
    hit_victim: Option<PlayerColor>,
    game_over: bool,
    winner: Option<PlayerColor>,
}

impl Snapshot {
    /// Deep-copy the roster plus the controller's bookkeeping.
    #[must_use]
    pub fn capture(
        roster: &Roster,
        hit_occurred: bool,
        hit_victim: Option<PlayerColor>,
        game_over: bool,
        winner: Option<PlayerColor>,
    ) -> Self {
        let mut positions = FxHashMap::default();
        let mut move_counts = FxHashMap::default();
        for token in roster.iter() {
            positions.insert(token.color(), token.slot());
            move_counts.insert(token.color(), token.total_moves());
        }
        Self {
            positions,
            move_counts,
            current_index: roster.current_index(),
            hit_occurred,
            hit_victim,
            game_over,
            winner,
        }
    }

    #[must_use]
    pub fn slot_of(&self, color: PlayerColor) -> Option<u16> {
        self.positions.get(&color).copied()
    }

    #[must_use]
    pub fn moves_of(&self, color: PlayerColor) -> Option<u32> {
        self.move_counts.get(&color).copied()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn hit_occurred(&self) -> bool {
        self.hit_occurred
    }

    #[must_use]
    pub fn hit_victim(&self) -> Option<PlayerColor> {
        self.hit_victim
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerColor> {
        self.winner
    }

    /// Write the saved positions and counters back through the non-counting
    /// paths, then restore the rotation.
    fn restore(&self, roster: &mut Roster) {
        for token in roster.iter_mut() {
            if let Some(&slot) = self.positions.get(&token.color()) {
                token.place(slot);
            }
            if let Some(&moves) = self.move_counts.get(&token.color()) {
                token.set_total_moves(moves);
            }
        }
        roster.set_current_index(self.current_index);
    }
}

/// LIFO stack of snapshots. One entry is consumed per undo; repeated undo
/// walks further back, one saved instant at a time.
#[derive(Clone, Debug, Default)]
pub struct History {
    stack: Vector<Snapshot>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot. Call before any state-changing action.
    pub fn save(&mut self, snapshot: Snapshot) {
        self.stack.push_back(snapshot);
    }

    /// Pop the newest snapshot and restore the roster from it.
    ///
    /// Returns the snapshot so the caller can restore its own bookkeeping,
    /// or `None` when there is nothing to undo (the roster is untouched).
    pub fn undo(&mut self, roster: &mut Roster) -> Option<Snapshot> {
        let snapshot = self.stack.pop_back()?;
        snapshot.restore(roster);
        Some(snapshot)
    }

    /// Drop all snapshots (new-game start).
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
