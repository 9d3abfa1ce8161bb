//! Tests for the interactive terminal loop and replay command.

use std::io::Cursor;
use tictactoe_engine::{Mark, OutcomeView};
use tictactoe_host::{HostConfig, TerminalGame, replay};

type ScriptedGame = TerminalGame<Cursor<Vec<u8>>, Vec<u8>>;

/// Runs a scripted game and returns everything written to the terminal.
fn run_script(config: HostConfig, json: bool, script: &str) -> (String, ScriptedGame) {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut game = TerminalGame::new(config, json, input, Vec::new());
    game.run().expect("game loop succeeds");
    let text = String::from_utf8(game.output().clone()).expect("utf8 output");
    (text, game)
}

#[test]
fn test_win_then_decline_replay_stops() {
    let (text, game) = run_script(HostConfig::default(), false, "0\n3\n1\n4\n2\nn\n8\n");

    assert!(text.contains("X Wins!"));
    assert!(text.contains("Play again? [y/N]"));
    // The game stopped before reading the trailing selection.
    assert_eq!(game.session().engine().current_outcome().winner(), Some(Mark::X));
}

#[test]
fn test_accepting_replay_resets_board() {
    let (text, game) = run_script(HostConfig::default(), false, "0\n3\n1\n4\n2\nyes\n");

    assert!(text.contains("X Wins!"));
    assert_eq!(game.session().snapshot().outcome, OutcomeView::None);
    assert_eq!(game.session().engine().turn(), Mark::X);
}

#[test]
fn test_invalid_and_occupied_cells() {
    let (text, game) = run_script(HostConfig::default(), false, "9\n4\ncenter\nhello\nq\n");

    assert!(text.contains("Invalid cell index 9 (must be 0-8)"));
    assert!(text.contains("Unrecognized input \"hello\""));
    // Second selection of the center was ignored: O still to move.
    assert_eq!(game.session().engine().turn(), Mark::O);
}

#[test]
fn test_json_output_and_draw_without_prompt() {
    let config = HostConfig::default().with_prompt_play_again(false);
    let (text, game) = run_script(config, true, "0\n1\n2\n4\n3\n5\n7\n6\n8\n");

    assert!(text.contains("Draw!"));
    assert!(text.contains(r#""outcome":"draw""#));
    assert!(!text.contains("Play again?"));
    // Restarted automatically.
    assert_eq!(game.session().snapshot().outcome, OutcomeView::None);
}

#[test]
fn test_replay_prints_final_board() {
    let mut out = Vec::new();
    let snapshot = replay(&[0, 3, 1, 4, 2], &HostConfig::default(), false, &mut out).expect("valid replay");

    let text = String::from_utf8(out).expect("utf8 output");
    assert_eq!(snapshot.outcome, OutcomeView::WinA);
    assert!(text.starts_with("X|X|X\n-+-+-\nO|O|5"));
    assert!(text.contains("X Wins!"));
}

#[test]
fn test_replay_rejects_out_of_range() {
    let mut out = Vec::new();
    let err = replay(&[0, 11], &HostConfig::default(), true, &mut out).unwrap_err();
    assert!(err.to_string().contains("Invalid cell index 11"));
}
