use std::io::{BufRead, Write};

use log::{debug, info};
use tokio::sync::watch;

use crate::{Command, GameStore, Presenter, PresenterError, Snapshot, TerminalPresenter};

/// Draws the latest snapshot if the store published one since the last call.
fn render_update<W: Write>(
    updates: &mut watch::Receiver<Snapshot>,
    presenter: &mut TerminalPresenter<W>,
) -> Result<Option<Snapshot>, PresenterError> {
    if !updates.has_changed().unwrap_or(false) {
        debug!("no change to render");
        return Ok(None);
    }
    let snapshot = updates.borrow_and_update().clone();
    presenter.render(&snapshot)?;
    Ok(Some(snapshot))
}

/// Plays games with commands read line by line from `input` until it ends or
/// a quit command arrives.
///
/// A finished game is announced and reset once the next line acknowledges it.
/// Quitting at that prompt ends the loop without a reset.
pub fn run<R: BufRead, W: Write>(
    input: R,
    presenter: &mut TerminalPresenter<W>,
    store: &mut GameStore,
) -> Result<(), PresenterError> {
    let mut updates = store.subscribe();
    presenter.render(&updates.borrow_and_update())?;
    info!("Started a new game");

    let mut lines = input.lines();
    while let Some(line) = lines.next() {
        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                presenter.report(&err.to_string())?;
                continue;
            }
        };
        debug!("command: {:?}", command);

        match command {
            Command::Quit => break,
            Command::Reset => {
                store.reset();
            }
            Command::Play(cell) => {
                store.play(cell);
            }
        }

        let Some(snapshot) = render_update(&mut updates, presenter)? else {
            continue;
        };
        if snapshot.outcome.is_terminal() {
            presenter.announce(snapshot.outcome)?;
            match lines.next().transpose()? {
                None => break,
                Some(line) if matches!(line.parse::<Command>(), Ok(Command::Quit)) => break,
                Some(_) => {}
            }
            store.reset();
            render_update(&mut updates, presenter)?;
        }
    }

    info!("Bye");
    Ok(())
}
