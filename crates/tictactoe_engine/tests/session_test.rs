//! Tests for the host call surface and its wire shape.

use tictactoe_engine::{CellView, EngineError, Mark, OutcomeObserver, OutcomeView, Session, Snapshot};

/// Records every notification it receives.
#[derive(Debug, Default)]
struct Recorder {
    events: Vec<String>,
}

impl OutcomeObserver for Recorder {
    fn on_win(&mut self, mark: Mark) {
        self.events.push(format!("win {mark}"));
    }

    fn on_draw(&mut self) {
        self.events.push("draw".to_string());
    }
}

fn select_all(session: &mut Session<Recorder>, indices: &[usize]) -> Snapshot {
    let mut last = session.snapshot();
    for &index in indices {
        last = session.select_cell(index).expect("index in range");
    }
    last
}

#[test]
fn test_win_notifies_once() {
    let mut session = Session::new(Recorder::default());

    let snapshot = select_all(&mut session, &[0, 3, 1, 4, 2]);
    assert_eq!(snapshot.outcome, OutcomeView::WinA);

    // Further selections are ignored and stay silent.
    let after = select_all(&mut session, &[5, 8, 0]);
    assert_eq!(after, snapshot);
    assert_eq!(session.observer().events, ["win X"]);
}

#[test]
fn test_draw_notifies_once() {
    let mut session = Session::new(Recorder::default());

    let snapshot = select_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(snapshot.outcome, OutcomeView::Draw);
    assert_eq!(session.observer().events, ["draw"]);
}

#[test]
fn test_ignored_selection_returns_unchanged_snapshot() {
    let mut session = Session::new(Recorder::default());
    let first = session.select_cell(4).expect("in range");
    let second = session.select_cell(4).expect("in range");

    assert_eq!(first, second);
    assert_eq!(session.engine().turn(), Mark::O);
    assert!(session.observer().events.is_empty());
}

#[test]
fn test_invalid_index_is_reported() {
    let mut session = Session::default();
    let before = session.snapshot();

    assert_eq!(session.select_cell(9), Err(EngineError::InvalidIndex { index: 9 }));
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_reset_returns_initial_snapshot() {
    let mut session = Session::new(Recorder::default());
    select_all(&mut session, &[0, 3, 1, 4, 2]);

    let snapshot = session.reset();

    assert_eq!(snapshot.board, [CellView::Empty; 9]);
    assert_eq!(snapshot.outcome, OutcomeView::None);
    assert_eq!(session.engine().turn(), Mark::X);

    // A new game notifies again.
    select_all(&mut session, &[0, 3, 1, 4, 2]);
    assert_eq!(session.into_observer().events, ["win X", "win X"]);
}

#[test]
fn test_snapshot_wire_shape() {
    let mut session = Session::default();
    session.select_cell(0).expect("in range");
    session.select_cell(4).expect("in range");

    let json = serde_json::to_value(session.snapshot()).expect("serializable");

    assert_eq!(
        json,
        serde_json::json!({
            "board": ["A", "empty", "empty", "empty", "B", "empty", "empty", "empty", "empty"],
            "outcome": "none",
        })
    );
}

#[test]
fn test_win_b_wire_name() {
    let mut session = Session::default();
    for index in [0, 3, 1, 4, 8, 5] {
        session.select_cell(index).expect("in range");
    }

    let json = serde_json::to_value(session.snapshot()).expect("serializable");
    assert_eq!(json["outcome"], "winB");
}
