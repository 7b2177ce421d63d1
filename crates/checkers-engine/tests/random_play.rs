//! Property tests: random legal play never corrupts the game.

use checkers_core::Cell;
use checkers_engine::{Game, MoveOutcome, PieceId};
use proptest::prelude::*;

/// Every legal `(piece, destination)` pair for the side to move.
fn legal_moves(game: &Game) -> Vec<(PieceId, Cell)> {
    let ids: Vec<PieceId> = game.board().pieces_of(game.turn()).map(|p| p.id()).collect();
    ids.into_iter()
        .flat_map(|id| {
            game.legal_destinations(id)
                .into_iter()
                .map(move |dest| (id, dest))
        })
        .collect()
}

fn kings(game: &Game) -> Vec<PieceId> {
    game.board()
        .pieces()
        .filter(|p| p.is_king())
        .map(|p| p.id())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_play_keeps_the_board_consistent(
        choices in prop::collection::vec(any::<u16>(), 1..150),
    ) {
        let mut game = Game::new();
        for choice in choices {
            let moves = legal_moves(&game);
            if moves.is_empty() {
                break;
            }
            let (id, dest) = moves[choice as usize % moves.len()];
            let mover = game.turn();
            let kings_before = kings(&game);
            let captures_available = game.forced_moves(mover).has_any(mover);

            let report = game.try_move(id, dest);
            prop_assert!(report.is_ok(), "legal move refused: {:?}", report);
            let report = report.unwrap();

            prop_assert!(game.board().verify().is_ok());
            for cell in Cell::all() {
                if let Some(piece) = game.board().piece_at(cell) {
                    prop_assert_eq!(piece.cell(), cell);
                }
            }

            if captures_available {
                prop_assert!(report.captured.is_some());
            }
            if report.chain_continues {
                prop_assert_eq!(game.turn(), mover);
                prop_assert_eq!(game.chain_piece(), Some(id));
            } else {
                prop_assert_eq!(game.turn(), mover.opposite());
                prop_assert_eq!(game.chain_piece(), None);
            }

            // Crowning is permanent.
            for king in kings_before {
                if let Some(piece) = game.piece(king) {
                    prop_assert!(piece.is_king());
                }
            }
        }
    }

    #[test]
    fn attempt_move_agrees_with_validate(
        opening in prop::collection::vec(any::<u16>(), 0..20),
        from in (0i32..8, 0i32..8),
        to in (-1i32..9, -1i32..9),
    ) {
        let mut game = Game::new();
        for choice in opening {
            let moves = legal_moves(&game);
            if moves.is_empty() {
                break;
            }
            let (id, dest) = moves[choice as usize % moves.len()];
            prop_assert!(game.try_move(id, dest).is_ok());
        }

        let Some(id) = game.board().occupant(Cell::new(from.0, from.1)) else {
            return Ok(());
        };
        let before = game.snapshot();
        let turn = game.turn();
        let pending = game.events().len();

        let dest = Cell::new(to.0, to.1);
        let verdict = game.validate(id, dest);

        match game.attempt_move(id, dest) {
            MoveOutcome::Accepted(_) => prop_assert!(verdict.is_ok()),
            MoveOutcome::Rejected(e) => {
                prop_assert_eq!(verdict, Err(e));
                prop_assert_eq!(game.snapshot(), before);
                prop_assert_eq!(game.turn(), turn);
                prop_assert_eq!(game.events().len(), pending);
            }
        }
    }
}
