mod snapshot;

pub use snapshot::Snapshot;

use crate::{evaluate, Board, CellIndex, InvalidMove, Move, Outcome, Player};
use log::{debug, info};
use tokio::sync::watch;

/// Owns the board of a single game and is the only place it is mutated.
///
/// A front end drives the game through [`GameStore::play`] and
/// [`GameStore::reset`] and learns about changes either by calling
/// [`GameStore::snapshot`] or through a receiver from
/// [`GameStore::subscribe`], which is updated after every accepted play and
/// every reset.
pub struct GameStore {
    board: Board,
    moves: Vec<Move>,
    sender: watch::Sender<Snapshot>,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Snapshot::default());
        Self {
            board: Board::new(),
            moves: Vec::new(),
            sender,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves made since the last reset, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn next_player(&self) -> Player {
        self.moves
            .last()
            .map(|last_move| last_move.player.other())
            .unwrap_or(Player::FIRST)
    }

    /// Evaluated from the board on every call.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board.clone(), self.next_player(), self.outcome())
    }

    /// The receiver starts out holding the current snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.sender.subscribe()
    }

    /// Places the next player's mark on `cell`, or reports why it can't.
    ///
    /// A rejected play leaves the store untouched and notifies nobody.
    pub fn try_play(&mut self, cell: CellIndex) -> Result<Snapshot, InvalidMove> {
        if self.outcome().is_terminal() {
            return Err(InvalidMove::GameEnded);
        }
        let player = self.next_player();
        self.board.place(cell, player)?;
        self.moves.push(Move::new(cell, player));

        let snapshot = self.notify();
        if snapshot.outcome.is_terminal() {
            info!("game over after {} moves: {}", self.moves.len(), snapshot.outcome);
        }
        Ok(snapshot)
    }

    /// Like [`GameStore::try_play`], but a rejected play is silently ignored.
    pub fn play(&mut self, cell: CellIndex) -> Snapshot {
        match self.try_play(cell) {
            Ok(snapshot) => snapshot,
            Err(invalid_move) => {
                debug!("ignoring play at {}: {}", cell, invalid_move);
                self.snapshot()
            }
        }
    }

    pub fn reset(&mut self) -> Snapshot {
        debug!("resetting game after {} moves", self.moves.len());
        self.board = Board::new();
        self.moves.clear();
        self.notify()
    }

    fn notify(&self) -> Snapshot {
        let snapshot = self.snapshot();
        self.sender.send_replace(snapshot.clone());
        snapshot
    }
}
