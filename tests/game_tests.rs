//! Full-game scenarios through the turn controller.
//!
//! Dice are scripted so every scenario is exact; events are captured with
//! a recording observer and asserted against the expected narration.

use std::cell::RefCell;
use std::rc::Rc;

use frustration::{
    BoardSize, DiceRoll, DiceRoller, Game, GameConfig, GameObserver, GamePhase, HitEvent,
    MoveEvent, PlayerColor, RuleSet, UndoEvent, WinEvent,
};

/// Replays a fixed list of roll totals.
struct ScriptedDice {
    totals: Vec<u16>,
    next: usize,
}

impl ScriptedDice {
    fn new(totals: &[u16]) -> Box<Self> {
        Box::new(Self {
            totals: totals.to_vec(),
            next: 0,
        })
    }
}

impl DiceRoller for ScriptedDice {
    fn roll(&mut self) -> DiceRoll {
        let total = self.totals[self.next];
        self.next += 1;
        DiceRoll::from_faces(&[total])
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Event {
    Move(MoveEvent),
    Hit(HitEvent),
    Win(WinEvent),
    Undo(UndoEvent),
}

/// Pushes every event onto a shared log.
#[derive(Clone, Default)]
struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    fn log(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }
}

impl GameObserver for Recorder {
    fn on_move(&mut self, event: &MoveEvent) {
        self.events.borrow_mut().push(Event::Move(event.clone()));
    }

    fn on_hit(&mut self, event: &HitEvent) {
        self.events.borrow_mut().push(Event::Hit(event.clone()));
    }

    fn on_win(&mut self, event: &WinEvent) {
        self.events.borrow_mut().push(Event::Win(event.clone()));
    }

    fn on_undo(&mut self, event: &UndoEvent) {
        self.events.borrow_mut().push(Event::Undo(event.clone()));
    }
}

fn started(config: GameConfig, script: &[u16]) -> (Game, Recorder) {
    let recorder = Recorder::default();
    let mut game = Game::with_dice(config, ScriptedDice::new(script)).unwrap();
    game.add_observer(Box::new(recorder.clone()));
    game.start();
    (game, recorder)
}

fn slot_of(game: &Game, color: PlayerColor) -> u16 {
    game.roster().get(color).unwrap().slot()
}

// =============================================================================
// Winning
// =============================================================================

/// Basic board, 2 players, exact-end: Red opens 6 from home onto slot 7,
/// works up to 16, and a 5 crosses the entry (distance 2) into tail
/// offset 3: the goal, exactly.
#[test]
fn test_exact_end_game_red_wins_on_the_goal() {
    let config = GameConfig::new().with_rules(RuleSet::new().with_exact_end());
    let (mut game, recorder) = started(config, &[6, 2, 4, 2, 5, 2, 5]);

    for _ in 0..7 {
        game.play_turn();
    }

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.winner(), Some(PlayerColor::Red));
    assert_eq!(slot_of(&game, PlayerColor::Red), 21);

    let log = recorder.log();
    let first = &log[0];
    match first {
        Event::Move(m) => {
            assert_eq!(m.color, PlayerColor::Red);
            assert_eq!(m.roll, 6);
            assert!(m.from.is_home());
            assert!(m.to.is_main());
            assert_eq!(m.to.slot(), 7);
        }
        other => panic!("expected an opening move, got {other:?}"),
    }
    match log.last().unwrap() {
        Event::Win(w) => {
            assert_eq!(w.winner, PlayerColor::Red);
            assert_eq!(w.winner_moves, 4);
            assert_eq!(w.total_moves, 7);
        }
        other => panic!("expected a win, got {other:?}"),
    }

    // A finished game ignores further turns.
    game.play_turn();
    assert_eq!(game.roster().total_moves(), 7);
}

/// Under the base rules, landing beyond the goal from inside the tail wins.
#[test]
fn test_base_rules_win_past_the_goal() {
    let config = GameConfig::new();
    let (mut game, _) = started(config, &[6, 2, 4, 2, 5, 2, 4, 2, 6]);

    for _ in 0..9 {
        game.play_turn();
    }

    assert_eq!(game.winner(), Some(PlayerColor::Red));
    // Tail offset 2 plus a 6: raw 26, accepted as-is.
    assert_eq!(slot_of(&game, PlayerColor::Red), 26);
}

/// A single crossing jump from the main track straight past the goal also
/// wins under the base rules; no tail traversal required.
#[test]
fn test_base_rules_win_jumping_from_main() {
    let config = GameConfig::new();
    let (mut game, _) = started(config, &[6, 2, 4, 2, 5, 2, 12]);

    for _ in 0..7 {
        game.play_turn();
    }

    assert_eq!(game.winner(), Some(PlayerColor::Red));
    // From 16: distance 2 to the entry, ten steps into a 3-slot tail.
    assert_eq!(slot_of(&game, PlayerColor::Red), 28);
}

// =============================================================================
// Exact-end overshoot
// =============================================================================

/// Red at tail offset 2 rolls 3: raw 23 overshoots the goal by 2 and
/// rebounds to 19 (offset 1). The game goes on.
#[test]
fn test_exact_end_overshoot_bounces_back() {
    let config = GameConfig::new().with_rules(RuleSet::new().with_exact_end());
    let (mut game, recorder) = started(config, &[6, 2, 4, 2, 5, 2, 4, 2, 3]);

    for _ in 0..9 {
        game.play_turn();
    }

    assert_eq!(game.phase(), GamePhase::InProgress);
    assert_eq!(slot_of(&game, PlayerColor::Red), 19);

    let log = recorder.log();
    match &log[log.len() - 1] {
        Event::Move(m) => {
            assert_eq!(m.color, PlayerColor::Red);
            assert!(m.from.is_tail());
            assert_eq!(m.from.slot(), 20);
            assert!(m.to.is_tail());
            assert_eq!(m.to.slot(), 19);
        }
        other => panic!("expected the bounced move, got {other:?}"),
    }
}

// =============================================================================
// Hits
// =============================================================================

/// Blue waits on shared slot 12; Red arrives from 8 with a 4. Blue goes
/// home, Red stays put, and the hit event carries Blue's pre-hit slot.
#[test]
fn test_hit_home_sends_occupant_home() {
    let config = GameConfig::new().with_rules(RuleSet::new().with_hit_home());
    let (mut game, recorder) = started(config, &[7, 2, 4]);

    for _ in 0..3 {
        game.play_turn();
    }

    assert_eq!(slot_of(&game, PlayerColor::Red), 12);
    assert_eq!(slot_of(&game, PlayerColor::Blue), 10);
    assert!(game.roster().get(PlayerColor::Blue).unwrap().is_at_home());
    // Being hit is not a move for the victim.
    assert_eq!(game.roster().get(PlayerColor::Blue).unwrap().total_moves(), 1);

    let log = recorder.log();
    let hit = log
        .iter()
        .find_map(|e| match e {
            Event::Hit(h) => Some(h.clone()),
            _ => None,
        })
        .expect("a hit must have been observed");
    assert_eq!(hit.attacker, PlayerColor::Red);
    assert_eq!(hit.victim, PlayerColor::Blue);
    assert!(hit.victim_from.is_main());
    assert_eq!(hit.victim_from.slot(), 12);
    assert!(hit.victim_home.is_home());
    assert_eq!(hit.victim_home.slot(), 10);
}

/// Without the hit rule, tokens stack on a shared slot and nothing fires.
#[test]
fn test_base_rules_let_tokens_stack() {
    let config = GameConfig::new();
    let (mut game, recorder) = started(config, &[7, 2, 4]);

    for _ in 0..3 {
        game.play_turn();
    }

    assert_eq!(slot_of(&game, PlayerColor::Red), 12);
    assert_eq!(slot_of(&game, PlayerColor::Blue), 12);
    assert!(recorder.log().iter().all(|e| !matches!(e, Event::Hit(_))));
}

/// The goal is private: finishing there never counts as landing on
/// another color, even though the goal slot number is shared.
#[test]
fn test_goal_landing_is_never_a_hit() {
    let config = GameConfig::new()
        .with_rules(RuleSet::new().with_hit_home())
        .with_players(2);
    // Red walks 7, 11, 16 and crosses to the goal; Blue's fives keep it
    // clear of every slot Red lands on.
    let (mut game, recorder) = started(config, &[6, 5, 4, 5, 5, 5, 5]);

    for _ in 0..7 {
        game.play_turn();
    }

    assert_eq!(game.winner(), Some(PlayerColor::Red));
    assert!(recorder.log().iter().all(|e| !matches!(e, Event::Hit(_))));
}

// =============================================================================
// Four players
// =============================================================================

#[test]
fn test_four_player_rotation_and_lanes() {
    let config = GameConfig::new().with_players(4).with_board(BoardSize::Large);
    let (mut game, _) = started(config, &[3, 3, 3, 3]);

    for _ in 0..4 {
        game.play_turn();
    }

    // Everyone stepped 3 from their own home.
    assert_eq!(slot_of(&game, PlayerColor::Red), 4);
    assert_eq!(slot_of(&game, PlayerColor::Blue), 13);
    assert_eq!(slot_of(&game, PlayerColor::Green), 22);
    assert_eq!(slot_of(&game, PlayerColor::Yellow), 30);
    assert_eq!(game.roster().current().color(), PlayerColor::Red);
}
