//! Mandatory capture detection.

use crate::board::{Board, BoardPiece, PieceId};
use checkers_core::{Cell, Color, Offset};
use std::collections::BTreeMap;

/// Capture landings available to one piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForcedEntry {
    pub color: Color,
    pub landings: Vec<Cell>,
}

/// Every single-jump capture currently available on a board, keyed by the
/// capturing piece.
///
/// The set is derived state: it is always rebuilt from the board with
/// [`ForcedMoves::detect`] and never edited in place. Pieces with no capture
/// have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForcedMoves {
    entries: BTreeMap<PieceId, ForcedEntry>,
}

impl ForcedMoves {
    /// Scans both colors for available jumps.
    pub fn detect(board: &Board) -> Self {
        let mut entries = BTreeMap::new();
        for piece in board.pieces() {
            let landings = jump_landings(board, piece);
            if !landings.is_empty() {
                entries.insert(
                    piece.id(),
                    ForcedEntry {
                        color: piece.color(),
                        landings,
                    },
                );
            }
        }
        ForcedMoves { entries }
    }

    /// Number of pieces that have at least one capture.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capture landings for one piece; empty if it has none.
    pub fn landings(&self, id: PieceId) -> &[Cell] {
        self.entries
            .get(&id)
            .map_or(&[][..], |entry| entry.landings.as_slice())
    }

    /// True if `dest` is one of the piece's capture landings.
    pub fn contains(&self, id: PieceId, dest: Cell) -> bool {
        self.landings(id).contains(&dest)
    }

    /// True if any piece of `color` has a capture.
    pub fn has_any(&self, color: Color) -> bool {
        self.entries.values().any(|entry| entry.color == color)
    }

    /// The subset of entries belonging to one color.
    pub fn of_color(&self, color: Color) -> ForcedMoves {
        ForcedMoves {
            entries: self
                .entries
                .iter()
                .filter(|(_, entry)| entry.color == color)
                .map(|(&id, entry)| (id, entry.clone()))
                .collect(),
        }
    }

    /// Iterates over `(piece, landings)` pairs in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &[Cell])> {
        self.entries
            .iter()
            .map(|(&id, entry)| (id, entry.landings.as_slice()))
    }
}

/// Cells a piece can land on by jumping one adjacent enemy.
///
/// Men only look in their two forward directions; kings look in all four.
fn jump_landings(board: &Board, piece: &BoardPiece) -> Vec<Cell> {
    let from = piece.cell();
    let color = piece.color();

    Offset::DIAGONALS
        .iter()
        .filter(|step| piece.is_king() || step.dy == color.forward())
        .filter_map(|&step| {
            let adjacent = from + step;
            let jumped = board.piece_at(adjacent)?;
            if jumped.color() == color {
                return None;
            }
            let landing = from + step * 2;
            if Board::is_out_of_bounds(landing) || board.occupant(landing).is_some() {
                return None;
            }
            Some(landing)
        })
        .collect()
}
