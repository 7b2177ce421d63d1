//! Checkers piece representation.

use crate::Color;
use serde::{Deserialize, Serialize};

/// The rank of a piece: an uncrowned man or a king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Kind {
    Man = 0,
    King = 1,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Man => write!(f, "Man"),
            Kind::King => write!(f, "King"),
        }
    }
}

/// A colored piece, independent of where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: Kind,
}

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(color: Color, kind: Kind) -> Self {
        Piece { color, kind }
    }

    /// Creates an uncrowned piece.
    #[inline]
    pub const fn man(color: Color) -> Self {
        Piece::new(color, Kind::Man)
    }

    /// Creates a crowned piece.
    #[inline]
    pub const fn king(color: Color) -> Self {
        Piece::new(color, Kind::King)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, Kind::King)
    }

    /// Returns the diagram glyph for this piece (`w`, `W`, `r`, `R`).
    pub const fn to_char(self) -> char {
        let c = match self.color {
            Color::White => 'w',
            Color::Red => 'r',
        };
        match self.kind {
            Kind::Man => c,
            Kind::King => c.to_ascii_uppercase(),
        }
    }

    /// Parses a diagram glyph.
    pub const fn from_char(c: char) -> Option<Piece> {
        let kind = if c.is_ascii_uppercase() {
            Kind::King
        } else {
            Kind::Man
        };
        let color = match c.to_ascii_lowercase() {
            'w' => Color::White,
            'r' => Color::Red,
            _ => return None,
        };
        Some(Piece::new(color, kind))
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
