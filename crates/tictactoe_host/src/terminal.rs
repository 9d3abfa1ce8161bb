//! Line-oriented terminal host.
//!
//! Reads one selection per line, renders the board after each one, and
//! runs the "Play again?" prompt when the engine reports a finished game.

use crate::config::HostConfig;
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, Cell, Mark, Outcome, OutcomeObserver, Position, Session, Snapshot};
use tracing::{debug, info, instrument};

/// Holds the terminal outcome reported by the engine until the game loop
/// announces it.
#[derive(Debug, Default)]
pub struct Announcer {
    pending: Option<Outcome>,
}

impl Announcer {
    /// Takes the outcome waiting to be announced.
    pub fn take(&mut self) -> Option<Outcome> {
        self.pending.take()
    }
}

impl OutcomeObserver for Announcer {
    fn on_win(&mut self, mark: Mark) {
        self.pending = Some(Outcome::Win(mark));
    }

    fn on_draw(&mut self) {
        self.pending = Some(Outcome::Draw);
    }
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Select the cell at this index. May be out of range.
    Select(usize),
    /// Start over.
    Reset,
    /// Leave the game.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Input {
    /// Parses a number, a position label, `r`/`reset` or `q`/`quit`.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Input::Quit,
            "r" | "reset" => return Input::Reset,
            _ => {}
        }
        if let Ok(index) = line.parse::<usize>() {
            return Input::Select(index);
        }
        match Position::from_label(line) {
            Some(pos) => Input::Select(pos.to_index()),
            None => Input::Unknown(line.to_string()),
        }
    }
}

/// Whether the game loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Interactive game over a reader and a writer.
pub struct TerminalGame<R, W> {
    session: Session<Announcer>,
    config: HostConfig,
    json: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalGame<R, W> {
    /// Creates a game reading selections from `input`.
    pub fn new(config: HostConfig, json: bool, input: R, output: W) -> Self {
        Self {
            session: Session::new(Announcer::default()),
            config,
            json,
            input,
            output,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &Session<Announcer> {
        &self.session
    }

    /// Returns the writer.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Runs until the player quits or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "Tic-Tac-Toe: enter a cell (0-8 or a name like \"center\"), r to reset, q to quit."
        )?;
        let snapshot = self.session.snapshot();
        self.show(&snapshot)?;

        while let Some(line) = self.read_line()? {
            if self.handle(Input::parse(&line))? == Flow::Stop {
                break;
            }
        }

        info!("Leaving game");
        Ok(())
    }

    fn handle(&mut self, input: Input) -> anyhow::Result<Flow> {
        debug!(?input, "Input received");
        match input {
            Input::Quit => return Ok(Flow::Stop),
            Input::Reset => {
                let snapshot = self.session.reset();
                self.show(&snapshot)?;
            }
            Input::Unknown(text) => {
                writeln!(self.output, "Unrecognized input {text:?}")?;
            }
            Input::Select(index) => match self.session.select_cell(index) {
                Ok(snapshot) => {
                    self.show(&snapshot)?;
                    if let Some(outcome) = self.session.observer_mut().take() {
                        return self.finish(outcome);
                    }
                }
                Err(err) => writeln!(self.output, "{err}")?,
            },
        }
        Ok(Flow::Continue)
    }

    /// Announces the outcome and asks whether to play again.
    fn finish(&mut self, outcome: Outcome) -> anyhow::Result<Flow> {
        let headline = match outcome {
            Outcome::Win(mark) => format!("{} Wins!", self.config.symbol(mark)),
            _ => "Draw!".to_string(),
        };
        writeln!(self.output, "{headline}")?;

        if *self.config.prompt_play_again() {
            write!(self.output, "Play again? [y/N] ")?;
            self.output.flush()?;
            let answer = self.read_line()?.unwrap_or_default();
            if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "ok") {
                return Ok(Flow::Stop);
            }
        }

        let snapshot = self.session.reset();
        self.show(&snapshot)?;
        Ok(Flow::Continue)
    }

    fn show(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        if self.json {
            writeln!(self.output, "{}", serde_json::to_string(snapshot)?)?;
        } else {
            let board = self.session.engine().board();
            writeln!(self.output, "{}", render(board, &self.config))?;
            if !self.session.engine().current_outcome().is_terminal() {
                let turn = self.session.engine().turn();
                writeln!(self.output, "{} to move", self.config.symbol(turn))?;
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Applies `indices` to a fresh game and prints the final board and outcome.
///
/// Selections that the engine ignores are skipped; an out-of-range index
/// aborts the replay.
#[instrument(skip(config, output))]
pub fn replay(
    indices: &[usize],
    config: &HostConfig,
    json: bool,
    output: &mut impl Write,
) -> anyhow::Result<Snapshot> {
    let mut session = Session::new(Announcer::default());
    for &index in indices {
        session.select_cell(index)?;
    }
    let snapshot = session.snapshot();

    if json {
        writeln!(output, "{}", serde_json::to_string(&snapshot)?)?;
    } else {
        writeln!(output, "{}", render(session.engine().board(), config))?;
        match session.engine().current_outcome() {
            Outcome::Win(mark) => writeln!(output, "{} Wins!", config.symbol(mark))?,
            Outcome::Draw => writeln!(output, "Draw!")?,
            Outcome::Ongoing => writeln!(output, "{} to move", config.symbol(session.engine().turn()))?,
        }
    }
    Ok(snapshot)
}

/// Draws the grid with the configured symbols and cell indices in empty cells.
pub fn render(board: &Board, config: &HostConfig) -> String {
    Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|pos| match board.get(*pos) {
                    Cell::Empty => pos.to_index().to_string(),
                    Cell::Occupied(mark) => config.symbol(mark).to_string(),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n-+-+-\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(Input::parse("4\n"), Input::Select(4));
        assert_eq!(Input::parse("12"), Input::Select(12));
        assert_eq!(Input::parse("Bottom right"), Input::Select(8));
        assert_eq!(Input::parse(" Q "), Input::Quit);
        assert_eq!(Input::parse("reset"), Input::Reset);
        assert_eq!(Input::parse("-1"), Input::Unknown("-1".to_string()));
    }

    #[test]
    fn test_render_matches_board_display_with_defaults() {
        let board = *tictactoe_engine::Engine::replay(&[0, 4])
            .expect("valid indices")
            .board();
        assert_eq!(render(&board, &HostConfig::default()), board.to_string());
    }
}
