//! Tests for engine notifications.

use std::cell::RefCell;
use std::rc::Rc;
use tactoe_engine::{
    BoardEngine, BoardEvent, EventLog, GameRng, GameState, Move, Player, Position,
};

fn observed() -> (BoardEngine, Rc<RefCell<EventLog>>) {
    let mut engine = BoardEngine::new();
    let log = Rc::new(RefCell::new(EventLog::new()));
    engine.subscribe(Box::new(Rc::clone(&log)));
    (engine, log)
}

#[test]
fn test_subscribe_announces_current_turn() {
    let (_engine, log) = observed();
    assert_eq!(log.borrow().events(), &[BoardEvent::TurnChanged(Player::X)]);
}

#[test]
fn test_accepted_move_notifies_turn_then_move() {
    let (mut engine, log) = observed();
    log.borrow_mut().drain();

    engine.play(Position::Center).expect("Valid move");

    assert_eq!(
        log.borrow().events(),
        &[
            BoardEvent::TurnChanged(Player::O),
            BoardEvent::MovePlayed(Move::new(Player::X, Position::Center)),
        ]
    );
}

#[test]
fn test_winning_move_only_notifies_game_end() {
    let (mut engine, log) = observed();
    for index in [0, 1, 3, 2] {
        engine.play_index(index).expect("Valid move");
    }
    log.borrow_mut().drain();

    engine.play_index(6).expect("Valid move");

    assert_eq!(
        log.borrow().events(),
        &[BoardEvent::GameEnded(GameState::Won(Player::X))]
    );
}

#[test]
fn test_draw_notifies_game_end_once() {
    let (mut engine, log) = observed();
    for index in [0, 3, 6, 4, 1, 2, 7, 8, 5] {
        engine.play_index(index).expect("Valid move");
    }

    let ended: Vec<_> = log
        .borrow()
        .events()
        .iter()
        .filter(|e| matches!(e, BoardEvent::GameEnded(_)))
        .copied()
        .collect();
    assert_eq!(ended, vec![BoardEvent::GameEnded(GameState::Draw)]);
}

#[test]
fn test_failed_move_is_silent() {
    let (mut engine, log) = observed();
    engine.play(Position::Center).expect("Valid move");
    log.borrow_mut().drain();

    assert!(engine.play(Position::Center).is_err());

    assert!(log.borrow().events().is_empty());
}

#[test]
fn test_late_subscriber_after_game_end_hears_nothing() {
    let mut engine = BoardEngine::new();
    for index in [0, 1, 3, 2, 6] {
        engine.play_index(index).expect("Valid move");
    }

    let log = Rc::new(RefCell::new(EventLog::new()));
    engine.subscribe(Box::new(Rc::clone(&log)));

    assert!(log.borrow().events().is_empty());
}

#[test]
fn test_observers_notified_in_registration_order() {
    let order = Rc::new(RefCell::new(Vec::new()));

    struct Tagged(&'static str, Rc<RefCell<Vec<&'static str>>>);
    impl tactoe_engine::BoardObserver for Tagged {
        fn game_ended(&mut self, _state: GameState) {
            self.1.borrow_mut().push(self.0);
        }
    }

    let mut engine = BoardEngine::new();
    engine.subscribe(Box::new(Tagged("first", Rc::clone(&order))));
    engine.subscribe(Box::new(Tagged("second", Rc::clone(&order))));
    assert_eq!(engine.observer_count(), 2);

    for index in [0, 1, 3, 2, 6] {
        engine.play_index(index).expect("Valid move");
    }

    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

#[test]
fn test_random_move_notifies_like_a_submitted_move() {
    let (mut engine, log) = observed();
    log.borrow_mut().drain();

    // Third of the nine empty squares.
    let played = engine.play_random(&mut |_len: usize| 2);

    assert_eq!(played, Some(Position::TopRight));
    assert_eq!(
        log.borrow().events(),
        &[
            BoardEvent::TurnChanged(Player::O),
            BoardEvent::MovePlayed(Move::new(Player::X, Position::TopRight)),
        ]
    );
}

#[test]
fn test_random_game_ends_with_a_single_game_end() {
    let (mut engine, log) = observed();
    let mut rng = GameRng::new(1);

    while engine.play_random(&mut rng).is_some() {}

    let events = log.borrow().events().to_vec();
    let ended = events
        .iter()
        .filter(|e| matches!(e, BoardEvent::GameEnded(_)))
        .count();
    assert_eq!(ended, 1);
    assert_eq!(events.last(), Some(&BoardEvent::GameEnded(engine.state())));
    assert!(engine.state().is_terminal());
}

#[test]
fn test_random_move_after_game_end_is_silent() {
    let (mut engine, log) = observed();
    for index in [0, 1, 3, 2, 6] {
        engine.play_index(index).expect("Valid move");
    }
    log.borrow_mut().drain();

    assert_eq!(engine.play_random(&mut GameRng::new(4)), None);

    assert!(log.borrow().events().is_empty());
}
