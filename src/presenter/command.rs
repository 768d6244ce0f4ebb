use std::str::FromStr;

use thiserror::Error;

use crate::CellIndex;

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(CellIndex),
    Reset,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown command {0:?}, expected a cell 0-8, `reset` or `quit`")]
pub struct ParseCommandError(pub String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "r" | "reset" => Ok(Command::Reset),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => other
                .parse::<CellIndex>()
                .map(Command::Play)
                .map_err(|_| ParseCommandError(input.to_string())),
        }
    }
}
