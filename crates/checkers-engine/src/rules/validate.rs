//! Move legality.
//!
//! A candidate move is checked against seven rules in a fixed order and the
//! first rule that fails decides the rejection. Later rules are never
//! consulted, so the reported [`Violation`] is stable for a given position.

use super::ForcedMoves;
use crate::board::{Board, BoardPiece};
use checkers_core::{Cell, Color, Kind};
use thiserror::Error;

/// Why a move was rejected, one variant per rule.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Rule 1.
    #[error("destination {0} is off the board")]
    OutOfBounds(Cell),

    /// Rule 2.
    #[error("piece dropped back on its own cell")]
    NullMove,

    /// Rule 3.
    #[error("destination {0} is occupied")]
    Occupied(Cell),

    /// Rule 4.
    #[error("a capture is available and must be taken")]
    CaptureRequired,

    /// Rule 5.
    #[error("pieces may only travel more than one cell when capturing")]
    TooFar,

    /// Rule 6.
    #[error("pieces only move diagonally")]
    NotDiagonal,

    /// Rule 7.
    #[error("{0} men cannot move backwards")]
    Backwards(Color),
}

impl Violation {
    /// The number (1-7) of the rule that failed.
    pub const fn rule(self) -> u8 {
        match self {
            Violation::OutOfBounds(_) => 1,
            Violation::NullMove => 2,
            Violation::Occupied(_) => 3,
            Violation::CaptureRequired => 4,
            Violation::TooFar => 5,
            Violation::NotDiagonal => 6,
            Violation::Backwards(_) => 7,
        }
    }
}

/// Checks whether `piece` may move to `dest` with `turn` to play.
///
/// `forced` must have been detected on `board` as it stands.
pub fn validate(
    board: &Board,
    piece: &BoardPiece,
    dest: Cell,
    forced: &ForcedMoves,
    turn: Color,
) -> Result<(), Violation> {
    let result = check_rules(board, piece, dest, forced, turn);
    if let Err(violation) = result {
        tracing::debug!(
            rule = violation.rule(),
            piece = %piece.id(),
            from = %piece.cell(),
            to = %dest,
            "move rejected: {}",
            violation
        );
    }
    result
}

/// The rule checks without logging, for callers probing many cells.
pub(crate) fn check_rules(
    board: &Board,
    piece: &BoardPiece,
    dest: Cell,
    forced: &ForcedMoves,
    turn: Color,
) -> Result<(), Violation> {
    let source = piece.cell();
    let delta = dest - source;

    if Board::is_out_of_bounds(dest) {
        return Err(Violation::OutOfBounds(dest));
    }

    if dest == source {
        return Err(Violation::NullMove);
    }

    if board.occupant(dest).is_some() {
        return Err(Violation::Occupied(dest));
    }

    // Any capture for the side to move, by any of its pieces, makes every
    // non-capturing move illegal.
    if forced.has_any(turn) && !forced.contains(piece.id(), dest) {
        return Err(Violation::CaptureRequired);
    }

    // Counts forced moves of both colors.
    if delta.length_squared() > 4 && forced.is_empty() {
        return Err(Violation::TooFar);
    }

    if !delta.is_diagonal() {
        return Err(Violation::NotDiagonal);
    }

    if piece.kind() == Kind::Man && delta.dy * piece.color().forward() < 0 {
        return Err(Violation::Backwards(piece.color()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceId;
    use checkers_core::{Layout, Piece};

    struct Fixture {
        board: Board,
        forced: ForcedMoves,
    }

    impl Fixture {
        fn new(diagram: &str) -> Self {
            let board = Board::from_layout(&Layout::parse(diagram).unwrap());
            let forced = ForcedMoves::detect(&board);
            Fixture { board, forced }
        }

        fn from_board(board: Board) -> Self {
            let forced = ForcedMoves::detect(&board);
            Fixture { board, forced }
        }

        fn id(&self, x: i32, y: i32) -> PieceId {
            self.board.piece_at(Cell::new(x, y)).unwrap().id()
        }

        fn check(&self, from: (i32, i32), to: (i32, i32)) -> Result<(), Violation> {
            let piece = self.board.piece_at(Cell::new(from.0, from.1)).unwrap();
            validate(
                &self.board,
                piece,
                Cell::new(to.0, to.1),
                &self.forced,
                piece.color(),
            )
        }
    }

    #[test]
    fn simple_forward_moves() {
        let f = Fixture::from_board(Board::standard());
        assert_eq!(f.check((0, 2), (1, 3)), Ok(()));
        assert_eq!(f.check((2, 2), (1, 3)), Ok(()));
        assert_eq!(f.check((1, 5), (0, 4)), Ok(()));
        assert_eq!(f.check((7, 5), (6, 4)), Ok(()));
    }

    #[test]
    fn rule_1_out_of_bounds() {
        let f = Fixture::from_board(Board::standard());
        assert_eq!(
            f.check((0, 2), (-1, 3)),
            Err(Violation::OutOfBounds(Cell::new(-1, 3)))
        );
        assert_eq!(f.check((0, 2), (-1, -1)).unwrap_err().rule(), 1);
    }

    #[test]
    fn rule_2_null_move() {
        let f = Fixture::from_board(Board::standard());
        assert_eq!(f.check((2, 2), (2, 2)), Err(Violation::NullMove));
    }

    #[test]
    fn rule_3_occupied() {
        let f = Fixture::from_board(Board::standard());
        assert_eq!(
            f.check((0, 2), (1, 1)),
            Err(Violation::Occupied(Cell::new(1, 1)))
        );
    }

    #[test]
    fn rule_4_capture_is_mandatory_for_every_piece_of_the_color() {
        // White (2,2) can capture (3,3); white (6,2) has only quiet moves.
        let f = Fixture::new(
            "........
             ........
             ........
             ........
             ...r....
             ..w...w.
             ........
             ........",
        );
        assert_eq!(f.check((6, 2), (7, 3)), Err(Violation::CaptureRequired));
        assert_eq!(f.check((6, 2), (5, 3)), Err(Violation::CaptureRequired));
        assert_eq!(f.check((2, 2), (1, 3)), Err(Violation::CaptureRequired));
        assert_eq!(f.check((2, 2), (4, 4)), Ok(()));
        assert!(f.forced.contains(f.id(2, 2), Cell::new(4, 4)));
    }

    #[test]
    fn rule_4_does_not_bind_the_other_color() {
        // Red (3,3) can jump (2,2) onto (1,1); white's jump is blocked.
        let f = Fixture::new(
            "........
             ........
             ........
             ....r...
             ...r....
             ..w.....
             ........
             w.......",
        );
        assert!(f.forced.has_any(Color::Red));
        assert!(!f.forced.has_any(Color::White));
        assert_eq!(f.check((0, 0), (1, 1)), Ok(()));
    }

    #[test]
    fn rule_5_long_move_without_any_capture() {
        let mut board = Board::empty();
        board.place(Piece::king(Color::White), Cell::new(0, 0)).unwrap();
        board.place(Piece::man(Color::Red), Cell::new(7, 7)).unwrap();
        let f = Fixture::from_board(board);
        assert!(f.forced.is_empty());
        assert_eq!(f.check((0, 0), (2, 2)), Err(Violation::TooFar));
        assert_eq!(f.check((0, 0), (5, 5)), Err(Violation::TooFar));
        // Rule 5 runs before rule 6.
        assert_eq!(f.check((0, 0), (0, 3)), Err(Violation::TooFar));
        assert_eq!(f.check((0, 0), (1, 1)), Ok(()));
    }

    #[test]
    fn rule_5_waived_by_a_capture_anywhere_on_the_board() {
        // Only red has a capture, yet white's long slide passes rule 5.
        let f = Fixture::new(
            "........
             ......r.
             .....r..
             ....w...
             ........
             ........
             ........
             W.......",
        );
        assert!(f.forced.has_any(Color::Red));
        assert!(!f.forced.has_any(Color::White));
        assert_eq!(f.check((0, 0), (3, 3)), Ok(()));
    }

    #[test]
    fn rule_6_not_diagonal() {
        let mut board = Board::empty();
        board.place(Piece::king(Color::Red), Cell::new(4, 4)).unwrap();
        let f = Fixture::from_board(board);
        assert_eq!(f.check((4, 4), (4, 5)), Err(Violation::NotDiagonal));
        assert_eq!(f.check((4, 4), (5, 4)), Err(Violation::NotDiagonal));
        assert_eq!(f.check((4, 4), (5, 6)).unwrap_err().rule(), 5);
    }

    #[test]
    fn rule_7_men_move_forward_kings_anywhere() {
        let mut board = Board::empty();
        board.place(Piece::man(Color::White), Cell::new(2, 4)).unwrap();
        board.place(Piece::man(Color::Red), Cell::new(5, 3)).unwrap();
        board.place(Piece::king(Color::White), Cell::new(6, 6)).unwrap();
        board.place(Piece::king(Color::Red), Cell::new(1, 1)).unwrap();
        let f = Fixture::from_board(board);
        assert!(f.forced.is_empty());

        assert_eq!(
            f.check((2, 4), (1, 3)),
            Err(Violation::Backwards(Color::White))
        );
        assert_eq!(f.check((2, 4), (3, 5)), Ok(()));
        assert_eq!(
            f.check((5, 3), (6, 4)),
            Err(Violation::Backwards(Color::Red))
        );
        assert_eq!(f.check((5, 3), (4, 2)), Ok(()));
        assert_eq!(f.check((6, 6), (5, 5)), Ok(()));
        assert_eq!(f.check((6, 6), (7, 7)), Ok(()));
        assert_eq!(f.check((1, 1), (2, 2)), Ok(()));
        assert_eq!(f.check((1, 1), (0, 0)), Ok(()));
    }

    #[test]
    fn rules_apply_in_order() {
        let f = Fixture::from_board(Board::standard());
        // Off board and also not diagonal: rule 1 wins.
        assert_eq!(f.check((0, 2), (0, 9)).unwrap_err().rule(), 1);
        // Occupied and backwards: rule 3 wins.
        assert_eq!(f.check((2, 2), (1, 1)).unwrap_err().rule(), 3);
        // Too far and not diagonal: rule 5 wins.
        assert_eq!(f.check((3, 5), (4, 2)).unwrap_err().rule(), 5);
    }
}
