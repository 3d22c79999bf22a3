//! Game configuration.
//!
//! Everything a game is parameterized on, chosen once before `start`.
//! Validation happens when the board is built from it: an unsupported
//! player count aborts construction rather than defaulting.

use serde::{Deserialize, Serialize};

use crate::board::BoardSize;
use crate::core::PlayerColor;
use crate::dice::DiceArity;
use crate::rules::RuleSet;

/// Configuration for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board: BoardSize,
    /// 2 or 4; anything else fails board construction.
    pub players: u8,
    pub dice: DiceArity,
    pub rules: RuleSet,
    /// When off, no snapshots are kept and undo always reports
    /// unavailable.
    pub undo_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardSize::Basic,
            players: 2,
            dice: DiceArity::Single,
            rules: RuleSet::new(),
            undo_enabled: true,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_board(mut self, board: BoardSize) -> Self {
        self.board = board;
        self
    }

    #[must_use]
    pub fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    #[must_use]
    pub fn with_dice(mut self, dice: DiceArity) -> Self {
        self.dice = dice;
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_undo(mut self, enabled: bool) -> Self {
        self.undo_enabled = enabled;
        self
    }

    /// The configuration banner shown at game start.
    #[must_use]
    pub fn describe(&self) -> String {
        let seats = PlayerColor::seated(self.players)
            .unwrap_or(&[])
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Board positions={} Tail positions={} Players={{{}}}\n{}\nDice: {}",
            self.board.main_length(),
            self.board.tail_length(),
            seats,
            self.rules.describe(),
            self.dice.describe()
        )
    }
}
