//! Observable state changes.

use crate::board::PieceId;
use checkers_core::{Cell, Color, Piece};
use serde::Serialize;
use std::fmt;

/// Something a front end may want to react to, emitted by
/// [`Game`](crate::Game) in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    PieceMoved {
        piece: PieceId,
        from: Cell,
        to: Cell,
    },
    PieceCaptured {
        piece: PieceId,
        cell: Cell,
        captured: Piece,
    },
    PiecePromoted {
        piece: PieceId,
        cell: Cell,
    },
    TurnChanged {
        color: Color,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::PieceMoved { piece, from, to } => {
                write!(f, "piece {} moved {} -> {}", piece, from, to)
            }
            GameEvent::PieceCaptured {
                piece,
                cell,
                captured,
            } => write!(f, "{} {} captured on {}", captured, piece, cell),
            GameEvent::PiecePromoted { piece, cell } => {
                write!(f, "piece {} crowned on {}", piece, cell)
            }
            GameEvent::TurnChanged { color } => write!(f, "{} to move", color),
        }
    }
}
