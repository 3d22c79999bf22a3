//! The turn controller.
//!
//! `Game` owns the board, roster, rules, dice, undo stack, and observers
//! for one playable game, and is the only thing that mutates any of them.
//!
//! ## Phases
//!
//! `Idle` until `start`, then `InProgress` turn by turn until a win flips
//! it to `GameOver`. `start` re-enters `InProgress` from any phase with
//! fresh state; `undo` re-enters it from `GameOver` when the restored
//! snapshot predates the win.
//!
//! ## Turn protocol
//!
//! Snapshot, roll, resolve through the track and the rule set, move,
//! notify; then collision handling (with its own snapshot), then the win
//! check, then the rotation. The order is load-bearing for undo: the
//! pre-hit snapshot sits above the pre-move snapshot, so undoing a hit
//! turn first restores the board as it stood the instant before the
//! victim was sent home.

use crate::board::{BoardConfig, ConfigError};
use crate::core::{PlayerColor, Roster};
use crate::dice::{Dice, DiceRoller};
use crate::history::{History, Snapshot};
use crate::observer::{GameObserver, HitEvent, MoveEvent, UndoEvent, WinEvent};
use crate::rules::RuleSet;

use super::config::GameConfig;

/// Where the controller's state machine stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Configured but not started.
    Idle,
    /// Turns are being played.
    InProgress,
    /// A win fired; turns are ignored until `start` or a rewinding `undo`.
    GameOver,
}

/// One playable game.
pub struct Game {
    config: GameConfig,
    board: BoardConfig,
    rules: RuleSet,
    dice: Box<dyn DiceRoller>,
    roster: Roster,
    history: History,
    observers: Vec<Box<dyn GameObserver>>,
    phase: GamePhase,
    winner: Option<PlayerColor>,
    hit_occurred: bool,
    hit_victim: Option<PlayerColor>,
}

impl Game {
    /// Build a game with entropy-seeded dice of the configured arity.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let dice = Box::new(Dice::from_entropy(config.dice));
        Self::with_dice(config, dice)
    }

    /// Build a game with an explicit roll source (seeded or scripted).
    pub fn with_dice(
        config: GameConfig,
        dice: Box<dyn DiceRoller>,
    ) -> Result<Self, ConfigError> {
        let board = BoardConfig::new(config.board, config.players)?;
        let roster = Roster::seated(&board);
        Ok(Self {
            rules: config.rules,
            config,
            board,
            dice,
            roster,
            history: History::new(),
            observers: Vec::new(),
            phase: GamePhase::Idle,
            winner: None,
            hit_occurred: false,
            hit_victim: None,
        })
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Start (or restart) the game: tokens to their homes, history and
    /// bookkeeping cleared, rotation back to the first seat.
    pub fn start(&mut self) {
        self.roster = Roster::seated(&self.board);
        self.history.clear();
        self.winner = None;
        self.hit_occurred = false;
        self.hit_victim = None;
        self.phase = GamePhase::InProgress;
    }

    /// Play one turn for the current color. Does nothing unless the game
    /// is in progress.
    pub fn play_turn(&mut self) {
        if self.phase != GamePhase::InProgress {
            return;
        }

        // Capture the standing state, the previous action's hit bookkeeping
        // included, before this turn clears it.
        if self.config.undo_enabled {
            self.history.save(self.snapshot());
        }
        self.hit_occurred = false;
        self.hit_victim = None;

        let roll = self.dice.roll().total();
        let color = self.roster.current().color();
        let end = self.board.end_slot();
        let from_slot = self.roster.current().slot();

        let raw = self.board.advance(color, from_slot, roll);
        let to_slot = self.rules.resolve_slot(raw, end);
        self.roster.current_mut().move_to(to_slot);

        let move_event = MoveEvent {
            color,
            roll,
            move_number: self.roster.current().total_moves(),
            from: self.board.position_of(color, from_slot),
            to: self.board.position_of(color, to_slot),
        };
        for observer in &mut self.observers {
            observer.on_move(&move_event);
        }

        // Hits only exist on the shared track; home, tail, and goal
        // destinations are private to the mover.
        if self.board.position_of(color, to_slot).is_main() {
            if let Some(victim_color) = self.roster.occupant_at(to_slot, color) {
                if self.rules.hit_home() {
                    if self.config.undo_enabled {
                        self.history.save(self.snapshot());
                    }
                    self.resolve_hit(color, victim_color);
                }
            }
        }

        if self.rules.is_win(to_slot, end) {
            self.phase = GamePhase::GameOver;
            self.winner = Some(color);
            let win_event = WinEvent {
                winner: color,
                winner_moves: self.roster.current().total_moves(),
                total_moves: self.roster.total_moves(),
            };
            for observer in &mut self.observers {
                observer.on_win(&win_event);
            }
        } else {
            self.roster.advance_turn();
        }
    }

    fn resolve_hit(&mut self, attacker: PlayerColor, victim_color: PlayerColor) {
        let Some(victim) = self.roster.get_mut(victim_color) else {
            return;
        };
        let victim_from_slot = victim.slot();
        if !self.rules.resolve_hit(victim) {
            return;
        }

        self.hit_occurred = true;
        self.hit_victim = Some(victim_color);
        let hit_event = HitEvent {
            attacker,
            victim: victim_color,
            victim_from: self.board.position_of(victim_color, victim_from_slot),
            victim_home: self
                .board
                .position_of(victim_color, self.board.home_slot(victim_color)),
        };
        for observer in &mut self.observers {
            observer.on_hit(&hit_event);
        }
    }

    /// Undo one step. Returns `false` when nothing can be undone (empty
    /// history, or undo disabled by configuration), leaving the game
    /// untouched.
    pub fn undo(&mut self) -> bool {
        if !self.config.undo_enabled {
            return false;
        }

        // What the undone step did, reported to observers before the
        // bookkeeping is rolled back.
        let undone_hit = self.hit_occurred;
        let undone_victim = self.hit_victim;

        let Some(snapshot) = self.history.undo(&mut self.roster) else {
            return false;
        };
        self.hit_occurred = snapshot.hit_occurred();
        self.hit_victim = snapshot.hit_victim();
        self.winner = snapshot.winner();
        self.phase = if snapshot.game_over() {
            GamePhase::GameOver
        } else {
            GamePhase::InProgress
        };

        let undo_event = UndoEvent {
            current: self.roster.current().color(),
            undone_hit,
            hit_victim: undone_victim,
        };
        for observer in &mut self.observers {
            observer.on_undo(&undo_event);
        }
        true
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.roster,
            self.hit_occurred,
            self.hit_victim,
            self.phase == GamePhase::GameOver,
            self.winner,
        )
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerColor> {
        self.winner
    }

    #[must_use]
    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Snapshots currently available to undo.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }
}
