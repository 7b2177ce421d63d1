//! Checkers rules engine.
//!
//! This crate provides:
//! - [`Board`] - 8×8 occupancy over an arena of pieces addressed by [`PieceId`]
//! - [`ForcedMoves`] - detection of the captures available on a board
//! - [`validate`] - the seven ordered movement rules
//! - [`Game`] - turn sequencing with capture, crowning and multi-jumps
//! - [`GameEvent`] - state changes for a front end to react to
//!
//! The engine knows nothing about input devices or rendering. A front end
//! resolves pointer positions to cells, then calls
//! [`Game::select_piece_at`] and [`Game::attempt_move`].
//!
//! # Example
//!
//! ```
//! use checkers_core::{Cell, Color};
//! use checkers_engine::{Game, GameEvent};
//!
//! let mut game = Game::new();
//! let piece = game.select_piece_at(Cell::new(2, 2)).unwrap();
//! assert!(game.attempt_move(piece, Cell::new(3, 3)).is_accepted());
//! assert_eq!(game.turn(), Color::Red);
//!
//! let events = game.drain_events();
//! assert_eq!(events.last(), Some(&GameEvent::TurnChanged { color: Color::Red }));
//! ```

mod board;
mod config;
mod event;
mod game;
pub mod rules;

pub use board::{Board, BoardError, BoardPiece, PieceId};
pub use config::{ConfigError, GameConfig};
pub use event::GameEvent;
pub use game::{Game, GameError, MoveOutcome, MoveReport, SelectionError};
pub use rules::{validate, ForcedMoves, Violation};
