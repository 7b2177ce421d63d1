//! Text diagrams of piece placement.
//!
//! A layout is written as eight rows, top row first (row 7 down to row 0),
//! with one glyph per column: `.` for an empty cell, `w`/`W` for a white
//! man/king and `r`/`R` for a red man/king. Whitespace inside a row is
//! ignored, so both `.w.w.w.w` and `. w . w . w . w` are accepted.

use crate::{Cell, Color, Piece, BOARD_SIZE};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a layout diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid layout: row {row} has {width} cells, expected 8")]
    InvalidRowWidth { row: i32, width: usize },

    #[error("invalid layout: unknown glyph '{glyph}' in row {row}")]
    InvalidGlyph { row: i32, glyph: char },

    #[error("invalid layout: piece on light cell {0}")]
    LightCell(Cell),
}

/// An 8×8 placement of pieces, indexed by [`Cell`].
///
/// This is a read-only picture of a board: it is what a game hands out as a
/// snapshot and what a board is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Rows bottom to top, columns left to right.
    rows: [[Option<Piece>; 8]; 8],
}

impl Layout {
    /// The standard opening position.
    pub const STANDARD: &'static str = "\
        .r.r.r.r\n\
        r.r.r.r.\n\
        .r.r.r.r\n\
        ........\n\
        ........\n\
        w.w.w.w.\n\
        .w.w.w.w\n\
        w.w.w.w.";

    /// Creates a layout with no pieces.
    pub const fn empty() -> Self {
        Layout {
            rows: [[None; 8]; 8],
        }
    }

    /// Creates the standard opening layout: three rows per side on the
    /// dark cells, white at the bottom.
    pub fn standard() -> Self {
        let mut layout = Layout::empty();
        for color in Color::ALL {
            for y in color.home_rows() {
                for x in 0..BOARD_SIZE {
                    let cell = Cell::new(x, y);
                    if cell.is_dark() {
                        layout.set(cell, Some(Piece::man(color)));
                    }
                }
            }
        }
        layout
    }

    /// Parses a diagram.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if rows.len() != 8 {
            return Err(LayoutError::InvalidRowCount(rows.len()));
        }

        let mut layout = Layout::empty();
        for (i, line) in rows.iter().enumerate() {
            let y = BOARD_SIZE - 1 - i as i32;
            let glyphs: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != 8 {
                return Err(LayoutError::InvalidRowWidth {
                    row: y,
                    width: glyphs.len(),
                });
            }
            for (x, &glyph) in glyphs.iter().enumerate() {
                let cell = Cell::new(x as i32, y);
                if glyph == '.' {
                    continue;
                }
                let piece =
                    Piece::from_char(glyph).ok_or(LayoutError::InvalidGlyph { row: y, glyph })?;
                if !cell.is_dark() {
                    return Err(LayoutError::LightCell(cell));
                }
                layout.set(cell, Some(piece));
            }
        }

        Ok(layout)
    }

    /// Returns the piece on a cell; off-board cells are always empty.
    pub fn get(&self, cell: Cell) -> Option<Piece> {
        if cell.is_out_of_bounds() {
            return None;
        }
        self.rows[cell.y as usize][cell.x as usize]
    }

    /// Sets or clears a cell. Off-board cells are ignored.
    pub fn set(&mut self, cell: Cell, piece: Option<Piece>) {
        if cell.is_out_of_bounds() {
            return;
        }
        self.rows[cell.y as usize][cell.x as usize] = piece;
    }

    /// Iterates over occupied cells, row by row from row 0.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        Cell::all().filter_map(move |cell| self.get(cell).map(|piece| (cell, piece)))
    }

    /// Counts the pieces of one color.
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_SIZE).rev() {
            for x in 0..BOARD_SIZE {
                let glyph = self.get(Cell::new(x, y)).map_or('.', Piece::to_char);
                write!(f, "{}", glyph)?;
            }
            if y > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
