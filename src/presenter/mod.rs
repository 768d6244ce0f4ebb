use std::fmt::Debug;

use crate::{Outcome, Snapshot};

mod command;
mod game_loop;
mod terminal;

pub use command::{Command, ParseCommandError};
pub use game_loop::run;
pub use terminal::{status_label, OutputFormat, PresenterArgs, PresenterError, TerminalPresenter};

/// A front end for the game. It only ever sees snapshots; all state changes go
/// through the store.
pub trait Presenter {
    type ErrorKind: Debug;

    /// Draws the board together with a turn or status label.
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), Self::ErrorKind>;

    /// Surfaces the end of a game. Called once per terminal outcome.
    fn announce(&mut self, outcome: Outcome) -> Result<(), Self::ErrorKind>;
}
