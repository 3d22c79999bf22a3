//! Board sizes and the per-color lane table.
//!
//! A `BoardConfig` is built once at game start and never mutated. It fixes
//! the circular main track length, the private tail length, and for each
//! seated color a [`Lane`]: the home slot the color starts on and the
//! tail-entry slot one step behind it (circularly) where the color peels
//! off into its private tail.
//!
//! ## Slot numbering
//!
//! Main-track slots are 1-based, `1..=main_length`. A color's tail occupies
//! `main_length + 1 ..= main_length + tail_length`; those numbers are
//! private to the color that owns them. The last tail slot is the goal.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::core::PlayerColor;

/// The two supported track geometries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    /// 18 main slots, 3 tail slots.
    Basic,
    /// 36 main slots, 6 tail slots.
    Large,
}

impl BoardSize {
    /// Number of slots on the shared circular track.
    #[must_use]
    pub const fn main_length(self) -> u16 {
        match self {
            BoardSize::Basic => 18,
            BoardSize::Large => 36,
        }
    }

    /// Number of private tail slots, the goal included.
    #[must_use]
    pub const fn tail_length(self) -> u16 {
        match self {
            BoardSize::Basic => 3,
            BoardSize::Large => 6,
        }
    }
}

/// One color's fixed slots on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    /// The slot the color starts on.
    pub home: u16,
    /// The last shared slot before the color's tail, one step behind home.
    pub tail_entry: u16,
}

/// Errors raised while assembling a game. Construction fails outright;
/// nothing falls back to a default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// The game seats exactly 2 or exactly 4 players.
    #[display(fmt = "unsupported player count: {} (this game seats 2 or 4)", _0)]
    UnsupportedPlayerCount(#[error(not(source))] u8),
}

/// Immutable board topology: track geometry plus the lane table for every
/// seated color.
#[derive(Clone, Debug)]
pub struct BoardConfig {
    size: BoardSize,
    main_length: u16,
    tail_length: u16,
    colors: &'static [PlayerColor],
    lanes: [Option<Lane>; 4],
}

/// Home slots in seating order for each supported geometry. The spacing
/// differs between 2- and 4-player games (opposite sides vs quarters).
fn home_slots(size: BoardSize, player_count: u8) -> Option<&'static [u16]> {
    match (size, player_count) {
        (BoardSize::Basic, 2) => Some(&[1, 10]),
        (BoardSize::Basic, 4) => Some(&[1, 5, 10, 14]),
        (BoardSize::Large, 2) => Some(&[1, 19]),
        (BoardSize::Large, 4) => Some(&[1, 10, 19, 27]),
        _ => None,
    }
}

/// Normalize a raw 1-based slot onto the circular track.
const fn wrap_slot(main_length: u16, slot: u16) -> u16 {
    (slot - 1) % main_length + 1
}

impl BoardConfig {
    /// Build the topology for a board size and player count.
    ///
    /// Tail entries are derived, not stored: each color's entry sits
    /// exactly one slot behind its home in circular order.
    pub fn new(size: BoardSize, player_count: u8) -> Result<Self, ConfigError> {
        let colors = PlayerColor::seated(player_count)
            .ok_or(ConfigError::UnsupportedPlayerCount(player_count))?;
        let homes = home_slots(size, player_count)
            .ok_or(ConfigError::UnsupportedPlayerCount(player_count))?;

        let main_length = size.main_length();
        let mut lanes = [None; 4];
        for (&color, &home) in colors.iter().zip(homes) {
            let tail_entry = wrap_slot(main_length, home + main_length - 1);
            lanes[color.index()] = Some(Lane { home, tail_entry });
        }

        Ok(Self {
            size,
            main_length,
            tail_length: size.tail_length(),
            colors,
            lanes,
        })
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Number of slots on the shared circular track.
    #[must_use]
    pub fn main_length(&self) -> u16 {
        self.main_length
    }

    /// Number of private tail slots, the goal included.
    #[must_use]
    pub fn tail_length(&self) -> u16 {
        self.tail_length
    }

    /// The goal slot. Numerically the same for every color; each color only
    /// ever reaches it through its own tail.
    #[must_use]
    pub fn end_slot(&self) -> u16 {
        self.main_length + self.tail_length
    }

    #[must_use]
    pub fn player_count(&self) -> u8 {
        self.colors.len() as u8
    }

    /// Seated colors in rotation order.
    #[must_use]
    pub fn colors(&self) -> &'static [PlayerColor] {
        self.colors
    }

    /// The lane for a seated color.
    ///
    /// Panics if `color` is not seated on this board; lanes only exist for
    /// the colors the board was built with.
    #[must_use]
    pub fn lane(&self, color: PlayerColor) -> Lane {
        match self.lanes[color.index()] {
            Some(lane) => lane,
            None => panic!("{color} is not seated on this board"),
        }
    }

    #[must_use]
    pub fn home_slot(&self, color: PlayerColor) -> u16 {
        self.lane(color).home
    }

    #[must_use]
    pub fn tail_entry_slot(&self, color: PlayerColor) -> u16 {
        self.lane(color).tail_entry
    }

    /// Normalize a raw 1-based slot onto the circular track.
    #[must_use]
    pub fn wrap(&self, slot: u16) -> u16 {
        wrap_slot(self.main_length, slot)
    }
}
