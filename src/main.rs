use std::io::{stdin, stdout};

use tictactoe::*;

fn main() -> Result<(), PresenterError> {
    env_logger::init();

    let args = PresenterArgs::from_env();
    let mut presenter = TerminalPresenter::from_args(stdout().lock(), &args);
    let mut store = GameStore::new();

    run(stdin().lock(), &mut presenter, &mut store)
}
