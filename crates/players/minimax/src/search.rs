//! Fixed-depth minimax over in-place board mutation.
//!
//! Both steps walk every available move, execute it on the one shared
//! board, recurse, and undo it before trying the next. No pruning, no
//! transposition table, no move ordering: a literal exhaustive minimax.
//! Ties keep the first move found, which makes the search deterministic
//! for a given board state and depth.

use kinghunt_core::{Board, BoardError, Color, Move};

use crate::eval::material_score;

/// Maximizing step: the best move `us` can make looking `depth` plies
/// ahead, together with its score. At depth 0 this is the static score
/// and no move; with no moves available the score is `i32::MIN`, so a
/// parent line that silences the opponent is rated accordingly.
pub fn best_move(
    board: &mut Board,
    us: Color,
    depth: u8,
    nodes: &mut u64,
) -> Result<(i32, Option<Move>), BoardError> {
    if depth == 0 {
        return Ok((material_score(board, us), None));
    }

    let mut best = i32::MIN;
    let mut chosen = None;
    for mv in board.all_moves(us) {
        board.execute_move(&mv)?;
        *nodes += 1;
        let (score, _) = meanest_response(board, us, depth - 1, nodes)?;
        board.undo_move(&mv)?;

        if score > best {
            best = score;
            chosen = Some(mv);
        }
    }
    Ok((best, chosen))
}

/// Minimizing step: the opponent reply that leaves `us` worst off,
/// assuming `us` then answers optimally.
pub fn meanest_response(
    board: &mut Board,
    us: Color,
    depth: u8,
    nodes: &mut u64,
) -> Result<(i32, Option<Move>), BoardError> {
    if depth == 0 {
        return Ok((material_score(board, us), None));
    }

    let mut worst = i32::MAX;
    let mut chosen = None;
    for mv in board.all_moves(us.other()) {
        board.execute_move(&mv)?;
        *nodes += 1;
        let (score, _) = best_move(board, us, depth - 1, nodes)?;
        board.undo_move(&mv)?;

        if score < worst {
            worst = score;
            chosen = Some(mv);
        }
    }
    Ok((worst, chosen))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
