//! Tests for the minimax search engine.

mod common;

use common::{board, reachable_in_progress};
use minimax_tictactoe::{Board, Game, GameStatus, INFINITY, Mark, Minimax, rules::empty_squares};

fn full_window(engine: Minimax, board: &Board, to_move: Mark) -> (Option<usize>, i32) {
    let report = engine.search(board, -INFINITY, INFINITY, to_move).unwrap();
    (report.result().square(), report.result().score())
}

#[test]
fn test_completes_own_row() {
    let b = board("XX.OO....");
    assert_eq!(empty_squares(&b), vec![2, 5, 6, 7, 8]);

    let report = Minimax::new(Mark::X).best_move(&b).unwrap();
    assert_eq!(report.result().square(), Some(2));
    assert_eq!(report.result().score(), 5);
}

#[test]
fn test_opponent_reply_is_minimized() {
    // O to move; X threatens 8 (diagonal) and O can take it to finish its row.
    let b = board("X...X.OO.");
    let engine = Minimax::new(Mark::X);
    let (square, score) = full_window(engine, &b, Mark::O);
    assert_eq!(square, Some(8));
    assert_eq!(score, -5);

    // Had O wandered to 1 instead, X wins next move.
    let mut elsewhere = b.clone();
    elsewhere.place_mark(1, Mark::O).unwrap();
    let (square, score) = full_window(engine, &elsewhere, Mark::X);
    assert_eq!(square, Some(8));
    assert_eq!(score, 4);
    assert!(score > -5);
}

#[test]
fn test_empty_board_is_a_draw_and_picks_first_square() {
    let report = Minimax::new(Mark::X).best_move(&Board::new()).unwrap();
    assert_eq!(report.result().square(), Some(0));
    assert_eq!(report.result().score(), 0);
    // No terminal check can fire at the root: the search must go deeper.
    assert!(*report.nodes() > 1);
}

#[test]
fn test_ties_go_to_lowest_square() {
    // X to move with two immediate wins, 5 (row) and 7 (column), both leaving
    // two squares open. Square 2 comes first but loses to O's reply at 7.
    let b = board("OX.XX.O.O");
    let report = Minimax::new(Mark::X).best_move(&b).unwrap();
    assert_eq!(report.result().square(), Some(5));
    assert_eq!(report.result().score(), 3);

    let exhaustive = Minimax::new(Mark::X)
        .with_alpha_beta_pruning(false)
        .best_move(&b)
        .unwrap();
    assert_eq!(exhaustive.result().square(), Some(5));
}

#[test]
fn test_score_sign_follows_searching_side() {
    let b = board("OO.XX....");
    // X completes the middle row at 5 with four squares left.
    let for_x = Minimax::new(Mark::X).best_move(&b).unwrap();
    assert_eq!(for_x.result().square(), Some(5));
    assert_eq!(for_x.result().score(), 5);

    // Searched for O with X to move, the same win is a loss for O.
    let (square, score) = full_window(Minimax::new(Mark::O), &b, Mark::X);
    assert_eq!(square, Some(5));
    assert_eq!(score, -5);
}

#[test]
fn test_search_leaves_live_board_unchanged() {
    let b = board("X...O....");
    let before = b.snapshot();
    Minimax::new(Mark::X).best_move(&b).unwrap();
    assert_eq!(b, before);
}

#[test]
fn test_pruning_matches_exhaustive_minimax_everywhere() {
    for game in reachable_in_progress() {
        let b = game.board();
        for me in [Mark::X, Mark::O] {
            let pruned = full_window(Minimax::new(me), b, game.to_move());
            let exhaustive = full_window(
                Minimax::new(me).with_alpha_beta_pruning(false),
                b,
                game.to_move(),
            );
            assert_eq!(pruned, exhaustive, "board:\n{b}\nme = {me}");
        }
    }
}

#[test]
fn test_engine_never_loses_to_itself() {
    let mut game = Game::new();
    while !game.status().is_over() {
        let engine = Minimax::new(game.to_move());
        let square = engine
            .best_move(game.board())
            .unwrap()
            .result()
            .square()
            .unwrap();
        game.make_move(square).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_engine_never_loses_to_any_opponent() {
    // Expert as O against every possible X line of play.
    fn explore(game: Game) {
        match game.status() {
            GameStatus::Won(mark) => assert_eq!(mark, Mark::O, "X beat the engine:\n{}", game.board()),
            GameStatus::Draw => {}
            GameStatus::InProgress => {
                for square in empty_squares(game.board()) {
                    let mut next = game.clone();
                    next.make_move(square).unwrap();
                    if !next.status().is_over() {
                        let reply = Minimax::new(Mark::O)
                            .best_move(next.board())
                            .unwrap()
                            .result()
                            .square()
                            .unwrap();
                        next.make_move(reply).unwrap();
                    }
                    explore(next);
                }
            }
        }
    }

    explore(Game::new());
}
