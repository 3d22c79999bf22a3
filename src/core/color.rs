//! Player colors and seating order.
//!
//! The four colors are a closed set: every board table in this crate is
//! indexed by `PlayerColor`, never by a free-form string. Seating order is
//! fixed (Red first, then clockwise), so a game's roster is fully determined
//! by its player count.

use serde::{Deserialize, Serialize};

/// A player's color, doubling as the token identity (one token per color).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl PlayerColor {
    /// All colors, in seating order.
    pub const ALL: [PlayerColor; 4] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
    ];

    /// Seating for a game with `player_count` players.
    ///
    /// Two-player games seat Red and Blue on opposite sides; four-player
    /// games seat all four colors. Any other count is unsupported and
    /// returns `None` (board construction turns that into a
    /// [`ConfigError`](crate::board::ConfigError)).
    #[must_use]
    pub fn seated(player_count: u8) -> Option<&'static [PlayerColor]> {
        const TWO: [PlayerColor; 2] = [PlayerColor::Red, PlayerColor::Blue];
        match player_count {
            2 => Some(&TWO),
            4 => Some(&PlayerColor::ALL),
            _ => None,
        }
    }

    /// Stable index into per-color tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The color's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "Red",
            PlayerColor::Blue => "Blue",
            PlayerColor::Green => "Green",
            PlayerColor::Yellow => "Yellow",
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
