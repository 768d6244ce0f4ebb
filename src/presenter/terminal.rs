use std::{io::Write, str::FromStr};

use log::{debug, warn};
use serde_json::json;
use thiserror::Error;

use crate::{Board, Outcome, Presenter, Snapshot};

#[derive(Error, Debug)]
pub enum PresenterError {
    #[error("could not write to the terminal: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize the game: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// A drawn grid with a status line.
    #[default]
    Text,
    /// One JSON document per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct PresenterArgs {
    pub format: OutputFormat,
}

impl PresenterArgs {
    const OUTPUT_VARIABLE: &'static str = "TICTACTOE_OUTPUT";

    // loads environment variables or uses default values if not set
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(Self::OUTPUT_VARIABLE).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let format = match value.map(|value| value.parse::<OutputFormat>()) {
            None => OutputFormat::default(),
            Some(Ok(format)) => format,
            Some(Err(message)) => {
                warn!("{}, falling back to {:?}", message, OutputFormat::default());
                OutputFormat::default()
            }
        };
        debug!("presenter format: {:?}", format);
        Self { format }
    }
}

/// Draws the game on any writer, normally stdout.
pub struct TerminalPresenter<W: Write> {
    pub writer: W,
    pub format: OutputFormat,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn from_args(writer: W, args: &PresenterArgs) -> Self {
        Self::new(writer, args.format)
    }

    /// Reports input that could not be turned into a command.
    pub fn report(&mut self, message: &str) -> Result<(), PresenterError> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{}", message)?,
            OutputFormat::Json => writeln!(self.writer, "{}", json!({ "error": message }))?,
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    type ErrorKind = PresenterError;

    fn render(&mut self, snapshot: &Snapshot) -> Result<(), Self::ErrorKind> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.writer, "{}", status_label(snapshot))?;
                write!(self.writer, "{}", draw_grid(&snapshot.board))?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, snapshot)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    fn announce(&mut self, outcome: Outcome) -> Result<(), Self::ErrorKind> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.writer, "Game Over: {}", outcome_message(outcome))?;
                writeln!(self.writer, "Press enter to play again.")?;
            }
            OutputFormat::Json => {
                writeln!(self.writer, "{}", json!({ "game_over": outcome }))?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// The line shown above the grid.
pub fn status_label(snapshot: &Snapshot) -> String {
    match snapshot.outcome {
        Outcome::Ongoing => format!("Player {}'s Turn", snapshot.next_player),
        outcome => outcome_message(outcome),
    }
}

fn outcome_message(outcome: Outcome) -> String {
    if let Some(winner) = outcome.winner() {
        return format!("Player {} Wins!", winner);
    }
    match outcome {
        Outcome::Draw => "It's a draw!",
        _ => "The game is still running",
    }
    .to_string()
}

fn draw_grid(board: &Board) -> String {
    let rows: Vec<String> = board
        .data
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|field| format!(" {} ", field))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    let separator = format!("\n{}\n", vec!["---"; Board::SIZE.1].join("+"));
    format!("{}\n", rows.join(separator.as_str()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{GameStore, Player};

    fn rendered(format: OutputFormat, snapshot: &Snapshot) -> String {
        let mut presenter = TerminalPresenter::new(Vec::new(), format);
        presenter.render(snapshot).unwrap();
        String::from_utf8(presenter.writer).unwrap()
    }

    #[test]
    fn text_render() {
        let mut store = GameStore::new();
        store.play(0);
        let snapshot = store.play(4);

        assert_eq!(
            rendered(OutputFormat::Text, &snapshot),
            "Player X's Turn\n \
             X |   |   \n\
             ---+---+---\n   \
             | O |   \n\
             ---+---+---\n   \
             |   |   \n"
        );
    }

    #[test]
    fn status_labels() {
        let mut store = GameStore::new();
        assert_eq!(status_label(&store.snapshot()), "Player X's Turn");
        store.play(0);
        assert_eq!(status_label(&store.snapshot()), "Player O's Turn");
        for cell in [3, 1, 4, 2] {
            store.play(cell);
        }
        assert_eq!(status_label(&store.snapshot()), "Player X Wins!");
    }

    #[test]
    fn json_render() {
        let mut store = GameStore::new();
        let snapshot = store.play(8);
        let output = rendered(OutputFormat::Json, &snapshot);
        assert!(output.ends_with('\n'));
        let parsed: Snapshot = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn announcements() {
        let mut presenter = TerminalPresenter::new(Vec::new(), OutputFormat::Text);
        presenter
            .announce(Outcome::Won { winner: Player::O })
            .unwrap();
        presenter.announce(Outcome::Draw).unwrap();
        let output = String::from_utf8(presenter.writer).unwrap();
        assert_eq!(
            output,
            "Game Over: Player O Wins!\nPress enter to play again.\n\
             Game Over: It's a draw!\nPress enter to play again.\n"
        );

        let mut presenter = TerminalPresenter::new(Vec::new(), OutputFormat::Json);
        presenter.announce(Outcome::Draw).unwrap();
        let output = String::from_utf8(presenter.writer).unwrap();
        assert_eq!(output, "{\"game_over\":{\"status\":\"draw\"}}\n");
    }

    #[test]
    fn report_in_json() {
        let mut presenter = TerminalPresenter::new(Vec::new(), OutputFormat::Json);
        presenter.report("bad input").unwrap();
        let output = String::from_utf8(presenter.writer).unwrap();
        assert_eq!(output, "{\"error\":\"bad input\"}\n");
    }

    #[test]
    fn args_from_value() {
        assert_eq!(PresenterArgs::from_value(None).format, OutputFormat::Text);
        assert_eq!(
            PresenterArgs::from_value(Some("JSON".to_string())).format,
            OutputFormat::Json
        );
        assert_eq!(
            PresenterArgs::from_value(Some("yaml".to_string())).format,
            OutputFormat::Text
        );
    }
}
