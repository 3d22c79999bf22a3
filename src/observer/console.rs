//! Console rendering of game events.
//!
//! The only code in the crate that prints. Everything it needs arrives in
//! the events plus the board's main length captured at construction (tail
//! positions are displayed as offsets into the tail).

use super::events::{GameObserver, HitEvent, MoveEvent, UndoEvent, WinEvent};
use crate::board::{BoardConfig, Position, PositionKind};
use crate::core::PlayerColor;

const ANSI_RESET: &str = "\x1b[0m";

fn colorize(color: PlayerColor) -> String {
    let code = match color {
        PlayerColor::Red => "\x1b[31m",
        PlayerColor::Blue => "\x1b[34m",
        PlayerColor::Green => "\x1b[32m",
        PlayerColor::Yellow => "\x1b[33m",
    };
    format!("{code}{color}{ANSI_RESET}")
}

/// Prints each event as the original console game did.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleObserver {
    main_length: u16,
}

impl ConsoleObserver {
    #[must_use]
    pub fn new(board: &BoardConfig) -> Self {
        Self {
            main_length: board.main_length(),
        }
    }

    fn display(&self, position: Position) -> String {
        match position.kind() {
            PositionKind::Home => format!("HOME (Position {})", position.slot()),
            PositionKind::End => "END".to_string(),
            PositionKind::Tail => {
                format!("TAIL (Tail Position {})", position.slot() - self.main_length)
            }
            PositionKind::Main => format!("Position {}", position.slot()),
        }
    }
}

impl GameObserver for ConsoleObserver {
    fn on_move(&mut self, event: &MoveEvent) {
        println!(
            "{} play {} rolls {}",
            colorize(event.color),
            event.move_number,
            event.roll
        );
        println!(
            "{} moves from {} to {}",
            colorize(event.color),
            self.display(event.from),
            self.display(event.to)
        );
    }

    fn on_hit(&mut self, event: &HitEvent) {
        println!(
            "{} {} hit!",
            colorize(event.victim),
            self.display(event.victim_from)
        );
        println!(
            "{} moves from {} to HOME (Position {})",
            colorize(event.victim),
            self.display(event.victim_from),
            event.victim_home.slot()
        );
    }

    fn on_win(&mut self, event: &WinEvent) {
        println!("{} wins in {} moves!", colorize(event.winner), event.winner_moves);
        println!("Total plays {}", event.total_moves);
    }

    fn on_undo(&mut self, event: &UndoEvent) {
        match event.hit_victim.filter(|_| event.undone_hit) {
            Some(victim) => println!("Undo ({} restored)", colorize(victim)),
            None => println!("Undo"),
        }
    }
}
