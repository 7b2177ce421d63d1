//! Board coordinates.
//!
//! A [`Cell`] is a plain coordinate pair. It is allowed to lie off the
//! board so that raw input (for example a pointer outside the playing area)
//! can be represented; [`Cell::is_out_of_bounds`] is the one bounds check
//! everything else goes through.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Width and height of the board.
pub const BOARD_SIZE: i32 = 8;

/// A cell on (or off) the board, `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// The difference between two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    /// The four diagonal unit steps.
    pub const DIAGONALS: [Offset; 4] = [
        Offset::new(-1, -1),
        Offset::new(-1, 1),
        Offset::new(1, -1),
        Offset::new(1, 1),
    ];

    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Offset { dx, dy }
    }

    /// Squared Euclidean length.
    #[inline]
    pub const fn length_squared(self) -> i32 {
        self.dx * self.dx + self.dy * self.dy
    }

    /// True when the offset moves the same distance along both axes.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.dx.abs() == self.dy.abs()
    }
}

impl Mul<i32> for Offset {
    type Output = Offset;

    #[inline]
    fn mul(self, rhs: i32) -> Offset {
        Offset::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    #[inline]
    pub const fn is_out_of_bounds(self) -> bool {
        self.x < 0 || self.x >= BOARD_SIZE || self.y < 0 || self.y >= BOARD_SIZE
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        !self.is_out_of_bounds()
    }

    /// Dark cells are the only playable ones: (0, 0) is dark.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.x + self.y).rem_euclid(2) == 0
    }

    /// The cell halfway between `self` and `other`, rounding toward the
    /// lower coordinate.
    #[inline]
    pub const fn midpoint(self, other: Cell) -> Cell {
        Cell::new(
            (self.x + other.x).div_euclid(2),
            (self.y + other.y).div_euclid(2),
        )
    }

    /// Iterates over all 64 on-board cells, row by row.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Cell::new(x, y)))
    }
}

impl Add<Offset> for Cell {
    type Output = Cell;

    #[inline]
    fn add(self, rhs: Offset) -> Cell {
        Cell::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub for Cell {
    type Output = Offset;

    #[inline]
    fn sub(self, rhs: Cell) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Error returned when text is not an `x,y` pair.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid cell '{0}': expected 'x,y'")]
pub struct CellParseError(pub String);

impl FromStr for Cell {
    type Err = CellParseError;

    /// Parses `x,y`, optionally wrapped in parentheses. Off-board values are
    /// accepted; bounds are checked where the cell is used.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CellParseError(s.to_string());
        let inner = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let (x, y) = inner.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse::<i32>().map_err(|_| err())?;
        let y = y.trim().parse::<i32>().map_err(|_| err())?;
        Ok(Cell::new(x, y))
    }
}
