//! The rules of the game.
//!
//! Two pieces make up the rule engine:
//! - [`ForcedMoves`] finds every capture currently available on a board.
//! - [`validate`] decides whether a single proposed move is legal, given
//!   those captures.
//!
//! Both are pure functions of the board; sequencing them into turns is the
//! job of [`Game`](crate::Game).

mod forced;
mod validate;

pub use forced::{ForcedEntry, ForcedMoves};
pub use validate::{validate, Violation};
pub(crate) use validate::check_rules;
