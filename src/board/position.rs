//! Positions as seen by a specific color.
//!
//! A raw slot number means nothing on its own: slot 10 is Blue's home on
//! the basic two-player board and an ordinary shared slot for Red, and
//! every number above the main length belongs to whichever color is asking
//! about its own tail. A [`Position`] is therefore always produced by
//! [`BoardConfig::position_of`] relative to a color, never free-standing.

use serde::{Deserialize, Serialize};

use super::config::BoardConfig;
use crate::core::PlayerColor;

/// What a slot is, relative to the asking color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionKind {
    /// The color's own starting slot.
    Home,
    /// A shared slot on the circular track.
    Main,
    /// Inside the color's private tail, short of the goal.
    Tail,
    /// The color's goal slot.
    End,
}

/// A classified slot: the raw 1-based number plus what it means to the
/// color it was classified for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    kind: PositionKind,
    slot: u16,
}

impl Position {
    #[must_use]
    pub fn kind(&self) -> PositionKind {
        self.kind
    }

    /// The raw slot number. For tail positions this is
    /// `main_length + offset`.
    #[must_use]
    pub fn slot(&self) -> u16 {
        self.slot
    }

    #[must_use]
    pub fn is_home(&self) -> bool {
        self.kind == PositionKind::Home
    }

    #[must_use]
    pub fn is_main(&self) -> bool {
        self.kind == PositionKind::Main
    }

    #[must_use]
    pub fn is_tail(&self) -> bool {
        self.kind == PositionKind::Tail
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == PositionKind::End
    }

    /// 1-based offset into the tail, for tail and goal positions.
    #[must_use]
    pub fn tail_offset(&self, main_length: u16) -> Option<u16> {
        match self.kind {
            PositionKind::Tail | PositionKind::End => Some(self.slot - main_length),
            PositionKind::Home | PositionKind::Main => None,
        }
    }
}

impl BoardConfig {
    /// Classify a slot relative to a seated color.
    ///
    /// Home and goal take precedence over their numeric region; any other
    /// slot above the main length is inside the color's own tail (no other
    /// color can ever be handed such a number).
    #[must_use]
    pub fn position_of(&self, color: PlayerColor, slot: u16) -> Position {
        let lane = self.lane(color);
        let kind = if slot == lane.home {
            PositionKind::Home
        } else if slot == self.end_slot() {
            PositionKind::End
        } else if slot > self.main_length() {
            PositionKind::Tail
        } else {
            PositionKind::Main
        };
        Position { kind, slot }
    }
}
