//! Turn sequencing.
//!
//! The [`Game`] struct owns the board and the capture set derived from it,
//! and drives a turn through its steps:
//! - capture detection when the turn starts
//! - selection of a piece of the side to move
//! - validation and commit of the proposed move
//! - capture resolution and crowning
//! - either another jump by the same piece or a change of turn
//!
//! Every call completes synchronously; a rejected call leaves the game
//! exactly as it was.

use crate::board::{Board, BoardError, BoardPiece, PieceId};
use crate::config::{ConfigError, GameConfig};
use crate::event::GameEvent;
use crate::rules::{self, ForcedMoves, Violation};
use checkers_core::{Cell, Color, Kind, Layout, Piece};
use thiserror::Error;

/// Why a piece cannot be picked up.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("cell {0} is off the board")]
    OutOfBounds(Cell),

    #[error("no piece on {0}")]
    Empty(Cell),

    #[error("piece belongs to {owner} but it is {turn}'s turn")]
    NotYourPiece { owner: Color, turn: Color },

    #[error("piece {0} is no longer on the board")]
    StalePiece(PieceId),

    #[error("piece {0} must finish its capture sequence")]
    ChainInProgress(PieceId),
}

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The piece cannot be moved by the side to play.
    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),
    /// The move breaks one of the movement rules.
    #[error("illegal move: {0}")]
    IllegalMove(#[from] Violation),
    /// The board refused a mechanical update it should have accepted.
    #[error("internal error: {0}")]
    Internal(#[from] BoardError),
}

/// Summary of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub piece: PieceId,
    pub from: Cell,
    pub to: Cell,
    /// The piece taken off the board, if the move was a capture.
    pub captured: Option<(PieceId, Piece)>,
    pub promoted: bool,
    /// True when the same piece must jump again before the turn ends.
    pub chain_continues: bool,
}

/// Result of [`Game::attempt_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted(MoveReport),
    Rejected(GameError),
}

impl MoveOutcome {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }
}

/// A game of checkers in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    /// Captures available on `board`, recomputed after every change.
    forced: ForcedMoves,
    /// Piece in the middle of a multi-jump, if any.
    chain: Option<PieceId>,
    /// Events not yet drained by the front end.
    events: Vec<GameEvent>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the standard layout with white to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let mut game = Game {
            forced: ForcedMoves::default(),
            board,
            turn,
            chain: None,
            events: Vec::new(),
        };
        game.start_turn();
        game
    }

    /// Creates a game from a layout diagram.
    pub fn from_layout(layout: &Layout, turn: Color) -> Self {
        Self::from_board(Board::from_layout(layout), turn)
    }

    /// Creates a game as described by a configuration.
    pub fn with_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let layout = config.starting_layout()?;
        Ok(Self::from_layout(&layout, config.first_turn))
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the color to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the piece that must continue capturing, if a multi-jump is
    /// under way.
    pub fn chain_piece(&self) -> Option<PieceId> {
        self.chain
    }

    /// Looks up a live piece.
    pub fn piece(&self, id: PieceId) -> Option<&BoardPiece> {
        self.board.get(id)
    }

    /// A read-only picture of the board.
    pub fn snapshot(&self) -> Layout {
        self.board.snapshot()
    }

    /// Every capture currently available, for both colors.
    pub fn all_forced_moves(&self) -> &ForcedMoves {
        &self.forced
    }

    /// Captures currently available to one color.
    pub fn forced_moves(&self, color: Color) -> ForcedMoves {
        self.forced.of_color(color)
    }

    /// Picks up the piece on a cell for the side to move.
    pub fn select(&self, cell: Cell) -> Result<PieceId, SelectionError> {
        if Board::is_out_of_bounds(cell) {
            return Err(SelectionError::OutOfBounds(cell));
        }
        let id = self.board.occupant(cell).ok_or(SelectionError::Empty(cell))?;
        self.check_selection(id)?;
        Ok(id)
    }

    /// Like [`select`](Self::select), but a failed selection is simply no
    /// selection.
    pub fn select_piece_at(&self, cell: Cell) -> Option<PieceId> {
        match self.select(cell) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::debug!(%cell, "selection ignored: {}", e);
                None
            }
        }
    }

    /// Checks a move without making it.
    pub fn validate(&self, id: PieceId, dest: Cell) -> Result<(), GameError> {
        let piece = self.check_selection(id)?;
        rules::validate(&self.board, piece, dest, &self.forced, self.turn)?;
        Ok(())
    }

    /// Every cell the piece may currently move to. Empty for pieces that
    /// cannot be selected.
    pub fn legal_destinations(&self, id: PieceId) -> Vec<Cell> {
        let Ok(piece) = self.check_selection(id) else {
            return Vec::new();
        };
        Cell::all()
            .filter(|&dest| {
                rules::check_rules(&self.board, piece, dest, &self.forced, self.turn).is_ok()
            })
            .collect()
    }

    /// Makes a move, or explains why it cannot be made.
    ///
    /// On success the move is committed, a jumped enemy piece is removed, a
    /// man reaching its crowning row becomes a king, and the turn passes
    /// unless the piece has another capture to make.
    pub fn try_move(&mut self, id: PieceId, dest: Cell) -> Result<MoveReport, GameError> {
        self.validate(id, dest)?;
        self.commit(id, dest)
    }

    /// Makes a move, reporting the outcome rather than an error.
    pub fn attempt_move(&mut self, id: PieceId, dest: Cell) -> MoveOutcome {
        match self.try_move(id, dest) {
            Ok(report) => MoveOutcome::Accepted(report),
            Err(e) => MoveOutcome::Rejected(e),
        }
    }

    /// Events emitted since the last drain, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Takes all pending events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn check_selection(&self, id: PieceId) -> Result<&BoardPiece, SelectionError> {
        let piece = self.board.get(id).ok_or(SelectionError::StalePiece(id))?;
        if piece.color() != self.turn {
            return Err(SelectionError::NotYourPiece {
                owner: piece.color(),
                turn: self.turn,
            });
        }
        match self.chain {
            Some(chain) if chain != id => Err(SelectionError::ChainInProgress(chain)),
            _ => Ok(piece),
        }
    }

    fn commit(&mut self, id: PieceId, dest: Cell) -> Result<MoveReport, GameError> {
        self.board.move_piece(id, dest)?;
        let moved = self.board.get(id).ok_or(BoardError::StalePiece(id))?;
        let from = moved.previous_cell();
        let color = moved.color();
        self.events.push(GameEvent::PieceMoved {
            piece: id,
            from,
            to: dest,
        });
        tracing::debug!(piece = %id, %from, to = %dest, "move accepted");

        let captured = self.resolve_capture(from, dest, color);
        let promoted = self.promote_if_crowned(id);

        debug_assert!(
            self.board.verify().is_ok(),
            "board inconsistent after move: {:?}",
            self.board.verify()
        );

        self.forced = ForcedMoves::detect(&self.board);
        let chain_continues = captured.is_some() && !self.forced.landings(id).is_empty();
        if chain_continues {
            tracing::debug!(piece = %id, "capture sequence continues");
            self.chain = Some(id);
        } else {
            self.chain = None;
            self.turn = self.turn.opposite();
            self.start_turn();
            self.events.push(GameEvent::TurnChanged { color: self.turn });
            tracing::debug!(turn = %self.turn, "turn changed");
        }

        Ok(MoveReport {
            piece: id,
            from,
            to: dest,
            captured,
            promoted,
            chain_continues,
        })
    }

    /// Removes the enemy piece between `from` and `to`, if there is one.
    fn resolve_capture(&mut self, from: Cell, to: Cell, mover: Color) -> Option<(PieceId, Piece)> {
        let jumped = from.midpoint(to);
        let victim = self
            .board
            .piece_at(jumped)
            .filter(|p| p.color() != mover)
            .map(BoardPiece::id)?;
        let removed = self.board.remove(victim)?;
        self.events.push(GameEvent::PieceCaptured {
            piece: victim,
            cell: jumped,
            captured: removed.piece(),
        });
        tracing::debug!(piece = %victim, cell = %jumped, "piece captured");
        Some((victim, removed.piece()))
    }

    /// Crowns a man standing on its crowning row. Kings are left alone, so
    /// calling this again is harmless.
    fn promote_if_crowned(&mut self, id: PieceId) -> bool {
        let Some(piece) = self.board.get(id) else {
            return false;
        };
        let cell = piece.cell();
        if piece.kind() != Kind::Man || cell.y != piece.color().crowning_row() {
            return false;
        }
        if !self.board.crown(id) {
            return false;
        }
        self.events.push(GameEvent::PiecePromoted { piece: id, cell });
        tracing::debug!(piece = %id, %cell, "piece crowned");
        true
    }

    fn start_turn(&mut self) {
        self.forced = ForcedMoves::detect(&self.board);
        tracing::trace!(
            turn = %self.turn,
            forced = self.forced.of_color(self.turn).len(),
            "turn started"
        );
    }
}
