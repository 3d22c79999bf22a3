//! A single player token and its move counter.
//!
//! Exactly one token exists per color. The two mutation paths matter for
//! undo correctness:
//!
//! - [`Token::move_to`] is the gameplay path and bumps the move counter.
//! - [`Token::place`] is the restore path and leaves the counter alone;
//!   the undo store sets the counter back explicitly.

use serde::{Deserialize, Serialize};

use super::color::PlayerColor;

/// One color's token: current slot plus the fixed home/end slots for the
/// board it was seated on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    color: PlayerColor,
    slot: u16,
    home: u16,
    end: u16,
    total_moves: u32,
}

impl Token {
    /// Create a token sitting at its home slot.
    #[must_use]
    pub fn new(color: PlayerColor, home: u16, end: u16) -> Self {
        Self {
            color,
            slot: home,
            home,
            end,
            total_moves: 0,
        }
    }

    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    /// The slot the token currently occupies.
    #[must_use]
    pub fn slot(&self) -> u16 {
        self.slot
    }

    /// The color's home slot on the main track.
    #[must_use]
    pub fn home(&self) -> u16 {
        self.home
    }

    /// The color's goal slot (last tail slot).
    #[must_use]
    pub fn end(&self) -> u16 {
        self.end
    }

    /// Moves taken since the game started.
    #[must_use]
    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }

    #[must_use]
    pub fn is_at_home(&self) -> bool {
        self.slot == self.home
    }

    /// Move the token as part of a turn. Increments the move counter.
    pub fn move_to(&mut self, slot: u16) {
        self.slot = slot;
        self.total_moves += 1;
    }

    /// Put the token on a slot without counting a move (undo path).
    pub fn place(&mut self, slot: u16) {
        self.slot = slot;
    }

    /// Overwrite the move counter (undo path).
    pub fn set_total_moves(&mut self, total_moves: u32) {
        self.total_moves = total_moves;
    }

    /// Send the token back to its home slot, as a hit does. Does not count
    /// as a move for the victim.
    pub fn reset_to_home(&mut self) {
        self.slot = self.home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_sits_at_home() {
        let token = Token::new(PlayerColor::Red, 1, 21);
        assert_eq!(token.slot(), 1);
        assert!(token.is_at_home());
        assert_eq!(token.total_moves(), 0);
    }

    #[test]
    fn test_move_to_counts_moves() {
        let mut token = Token::new(PlayerColor::Red, 1, 21);
        token.move_to(7);
        token.move_to(12);
        assert_eq!(token.slot(), 12);
        assert_eq!(token.total_moves(), 2);
    }

    #[test]
    fn test_place_does_not_count() {
        let mut token = Token::new(PlayerColor::Blue, 10, 21);
        token.move_to(14);
        token.place(10);
        assert_eq!(token.slot(), 10);
        assert_eq!(token.total_moves(), 1);
    }

    #[test]
    fn test_reset_to_home_keeps_counter() {
        let mut token = Token::new(PlayerColor::Blue, 10, 21);
        token.move_to(14);
        token.reset_to_home();
        assert!(token.is_at_home());
        assert_eq!(token.total_moves(), 1);
    }
}
