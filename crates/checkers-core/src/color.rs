//! Player color representation.

use serde::{Deserialize, Serialize};

/// Represents the two players in checkers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    White = 0,
    Red = 1,
}

impl Color {
    /// Both colors, white first.
    pub const ALL: [Color; 2] = [Color::White, Color::Red];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Red,
            Color::Red => Color::White,
        }
    }

    /// Returns the index (0 for White, 1 for Red).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row direction a man of this color advances in
    /// (+1 for White, -1 for Red).
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Red => -1,
        }
    }

    /// Returns the row on which a man of this color is crowned
    /// (7 for White, 0 for Red).
    #[inline]
    pub const fn crowning_row(self) -> i32 {
        match self {
            Color::White => 7,
            Color::Red => 0,
        }
    }

    /// Returns the rows this color occupies in the standard opening layout.
    pub const fn home_rows(self) -> [i32; 3] {
        match self {
            Color::White => [0, 1, 2],
            Color::Red => [5, 6, 7],
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Red => write!(f, "Red"),
        }
    }
}
