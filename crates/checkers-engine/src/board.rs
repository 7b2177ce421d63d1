//! Board state: an 8×8 occupancy grid over an arena of pieces.
//!
//! Pieces live in a dense arena and are addressed by [`PieceId`] handles.
//! Each arena slot carries a generation counter that is bumped when its
//! piece is removed, so a handle that outlives its piece is detected
//! instead of silently pointing at whatever reuses the slot.

use checkers_core::{Cell, Color, Kind, Layout, Piece, BOARD_SIZE};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Handle to a piece on a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PieceId {
    index: u32,
    generation: u32,
}

impl PieceId {
    /// Arena slot of this handle.
    #[inline]
    pub const fn index(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.index, self.generation)
    }
}

/// Errors raised by mechanical board operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell {0} is off the board")]
    OutOfBounds(Cell),

    #[error("cell {0} is already occupied")]
    Occupied(Cell),

    #[error("piece {0} is no longer on the board")]
    StalePiece(PieceId),

    #[error("board inconsistent at {cell}: {detail}")]
    Inconsistent { cell: Cell, detail: String },
}

/// A piece standing on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPiece {
    id: PieceId,
    piece: Piece,
    cell: Cell,
    previous_cell: Cell,
}

impl BoardPiece {
    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.piece.color
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.piece.kind
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.piece.is_king()
    }

    /// The cell the piece currently stands on.
    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// The cell the piece stood on before its last move. Equal to
    /// [`cell`](Self::cell) for a piece that has not moved.
    #[inline]
    pub fn previous_cell(&self) -> Cell {
        self.previous_cell
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    piece: Option<BoardPiece>,
}

/// The playing surface.
///
/// Invariant: `grid[c] == Some(id)` exactly when the arena entry for `id`
/// is live and its `cell` is `c`.
#[derive(Debug, Clone)]
pub struct Board {
    grid: [[Option<PieceId>; 8]; 8],
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Creates a board set up for the start of a game.
    pub fn standard() -> Self {
        Self::from_layout(&Layout::standard())
    }

    /// Creates a board holding the pieces of a layout.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut board = Board::empty();
        for (cell, piece) in layout.pieces() {
            // Layout cells are on the board and unique.
            let _ = board.place(piece, cell);
        }
        board
    }

    /// The single bounds check used by every board consumer.
    #[inline]
    pub fn is_out_of_bounds(cell: Cell) -> bool {
        cell.is_out_of_bounds()
    }

    /// Places a new piece on an empty cell.
    pub fn place(&mut self, piece: Piece, cell: Cell) -> Result<PieceId, BoardError> {
        if Self::is_out_of_bounds(cell) {
            return Err(BoardError::OutOfBounds(cell));
        }
        if self.occupant(cell).is_some() {
            return Err(BoardError::Occupied(cell));
        }

        let id = match self.free.pop() {
            Some(index) => PieceId {
                index,
                generation: self.slots[index as usize].generation,
            },
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    piece: None,
                });
                PieceId {
                    index: (self.slots.len() - 1) as u32,
                    generation: 0,
                }
            }
        };

        self.slots[id.index()].piece = Some(BoardPiece {
            id,
            piece,
            cell,
            previous_cell: cell,
        });
        self.set_grid(cell, Some(id));
        Ok(id)
    }

    /// Relocates a piece. No rules are consulted; the destination only has
    /// to be on the board and free. The source cell is remembered as the
    /// piece's previous cell.
    pub fn move_piece(&mut self, id: PieceId, dest: Cell) -> Result<(), BoardError> {
        if Self::is_out_of_bounds(dest) {
            return Err(BoardError::OutOfBounds(dest));
        }
        let source = self.get(id).ok_or(BoardError::StalePiece(id))?.cell;
        if dest != source && self.occupant(dest).is_some() {
            return Err(BoardError::Occupied(dest));
        }

        self.set_grid(source, None);
        self.set_grid(dest, Some(id));
        let entry = self.entry_mut(id).ok_or(BoardError::StalePiece(id))?;
        entry.previous_cell = source;
        entry.cell = dest;
        Ok(())
    }

    /// Takes a piece off the board, invalidating its handle.
    pub fn remove(&mut self, id: PieceId) -> Option<BoardPiece> {
        let slot = self.slots.get_mut(id.index())?;
        if slot.generation != id.generation {
            return None;
        }
        let removed = slot.piece.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.set_grid(removed.cell, None);
        Some(removed)
    }

    /// Crowns a piece. Returns `true` only if the piece was a man; crowning
    /// a king leaves it untouched.
    pub fn crown(&mut self, id: PieceId) -> bool {
        match self.entry_mut(id) {
            Some(entry) if entry.piece.kind == Kind::Man => {
                entry.piece.kind = Kind::King;
                true
            }
            _ => false,
        }
    }

    /// Returns the handle of the piece on a cell. Off-board cells are empty.
    pub fn occupant(&self, cell: Cell) -> Option<PieceId> {
        if Self::is_out_of_bounds(cell) {
            return None;
        }
        self.grid[cell.y as usize][cell.x as usize]
    }

    /// Returns the piece on a cell. Off-board cells are empty.
    pub fn piece_at(&self, cell: Cell) -> Option<&BoardPiece> {
        self.occupant(cell).and_then(|id| self.get(id))
    }

    /// Looks up a live piece by handle.
    pub fn get(&self, id: PieceId) -> Option<&BoardPiece> {
        let slot = self.slots.get(id.index())?;
        if slot.generation != id.generation {
            return None;
        }
        slot.piece.as_ref()
    }

    /// Iterates over all live pieces in arena order.
    pub fn pieces(&self) -> impl Iterator<Item = &BoardPiece> {
        self.slots.iter().filter_map(|slot| slot.piece.as_ref())
    }

    /// Iterates over the live pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &BoardPiece> {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// Number of live pieces of a color.
    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// A read-only picture of the current placement.
    pub fn snapshot(&self) -> Layout {
        let mut layout = Layout::empty();
        for p in self.pieces() {
            layout.set(p.cell, Some(p.piece));
        }
        layout
    }

    /// Checks that the grid and the arena agree in both directions.
    pub fn verify(&self) -> Result<(), BoardError> {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let cell = Cell::new(x, y);
                if let Some(id) = self.occupant(cell) {
                    match self.get(id) {
                        None => {
                            return Err(BoardError::Inconsistent {
                                cell,
                                detail: format!("dangling handle {}", id),
                            })
                        }
                        Some(p) if p.cell != cell => {
                            return Err(BoardError::Inconsistent {
                                cell,
                                detail: format!("piece {} records cell {}", id, p.cell),
                            })
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        for p in self.pieces() {
            if self.occupant(p.cell) != Some(p.id) {
                return Err(BoardError::Inconsistent {
                    cell: p.cell,
                    detail: format!("piece {} missing from grid", p.id),
                });
            }
        }
        Ok(())
    }

    fn entry_mut(&mut self, id: PieceId) -> Option<&mut BoardPiece> {
        let slot = self.slots.get_mut(id.index())?;
        if slot.generation != id.generation {
            return None;
        }
        slot.piece.as_mut()
    }

    fn set_grid(&mut self, cell: Cell, value: Option<PieceId>) {
        debug_assert!(cell.in_bounds());
        self.grid[cell.y as usize][cell.x as usize] = value;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}
