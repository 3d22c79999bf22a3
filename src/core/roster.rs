//! The seated tokens and the turn rotation.
//!
//! A `Roster` owns one token per seated color plus the index of the color
//! whose turn it is. Rotation is fixed seating order, wrapping modulo the
//! seat count. The roster is the only shared mutable state in a game and is
//! owned exclusively by the turn controller.

use smallvec::SmallVec;

use super::color::PlayerColor;
use super::token::Token;
use crate::board::BoardConfig;

/// Seat-ordered tokens plus the current-turn index.
#[derive(Clone, Debug)]
pub struct Roster {
    tokens: SmallVec<[Token; 4]>,
    current: usize,
}

impl Roster {
    /// Seat one token per color at its home slot for the given board.
    #[must_use]
    pub fn seated(board: &BoardConfig) -> Self {
        let end = board.end_slot();
        let tokens = board
            .colors()
            .iter()
            .map(|&color| Token::new(color, board.home_slot(color), end))
            .collect();
        Self { tokens, current: 0 }
    }

    /// Number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of the color whose turn it is.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The token whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Token {
        &self.tokens[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Token {
        &mut self.tokens[self.current]
    }

    /// Hand the turn to the next seat, wrapping around the table.
    pub fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.tokens.len();
    }

    /// Restore the rotation to a saved index (undo path).
    pub fn set_current_index(&mut self, index: usize) {
        self.current = index % self.tokens.len();
    }

    #[must_use]
    pub fn get(&self, color: PlayerColor) -> Option<&Token> {
        self.tokens.iter().find(|t| t.color() == color)
    }

    pub fn get_mut(&mut self, color: PlayerColor) -> Option<&mut Token> {
        self.tokens.iter_mut().find(|t| t.color() == color)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Token> {
        self.tokens.iter_mut()
    }

    /// Another color's token occupying `slot`, if any.
    ///
    /// Numeric comparison suffices for the shared main track: every slot
    /// above the main length is private to its color, so the caller gates
    /// this on the destination being a main-track slot.
    #[must_use]
    pub fn occupant_at(&self, slot: u16, except: PlayerColor) -> Option<PlayerColor> {
        self.tokens
            .iter()
            .find(|t| t.color() != except && t.slot() == slot)
            .map(|t| t.color())
    }

    /// Moves taken across all seats.
    #[must_use]
    pub fn total_moves(&self) -> u32 {
        self.tokens.iter().map(|t| t.total_moves()).sum()
    }
}
