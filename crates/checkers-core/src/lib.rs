//! Core types for checkers.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Color`], [`Kind`] and [`Piece`] for piece representation
//! - [`Cell`] and [`Offset`] for board coordinates
//! - [`Layout`] for text diagrams of piece placement

mod cell;
mod color;
mod layout;
mod piece;

pub use cell::{Cell, CellParseError, Offset, BOARD_SIZE};
pub use color::Color;
pub use layout::{Layout, LayoutError};
pub use piece::{Kind, Piece};
