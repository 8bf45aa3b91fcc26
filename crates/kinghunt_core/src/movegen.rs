//! Pseudo-legal move generation.
//!
//! Destinations follow each piece's movement rules but are not filtered
//! for leaving the mover's own king attacked. Check is announced by the
//! game loop, never enforced here.

use crate::board::Board;
use crate::location::{Direction, Location};
use crate::moves::Move;
use crate::types::{Color, PieceId, PieceKind};

/// Knight jump offsets as (row, col) deltas.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Every move available to `color`, enumerating occupied squares in
/// row-major order. The order is deterministic but callers must not read
/// anything else into it.
pub fn all_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for loc in board.occupied_locations() {
        let id = match board.piece_at(loc) {
            Some(id) => id,
            None => continue,
        };
        let piece = match board.piece(id) {
            Some(p) => p,
            None => continue,
        };
        if piece.color != color {
            continue;
        }
        for dest in destinations(board, id) {
            moves.push(Move {
                piece: id,
                source: loc,
                destination: dest,
                victim: board.piece_at(dest),
            });
        }
    }
    moves
}

/// The squares `id` could move to from its current square, ignoring
/// check-safety. Empty if the piece is not placed.
pub fn destinations(board: &Board, id: PieceId) -> Vec<Location> {
    let piece = match board.piece(id) {
        Some(p) => p,
        None => return Vec::new(),
    };
    let from = match piece.location {
        Some(loc) => loc,
        None => return Vec::new(),
    };

    let mut dests = Vec::new();
    match piece.kind {
        PieceKind::Pawn => gen_pawn(board, id, piece.color, from, &mut dests),
        PieceKind::Knight => gen_offsets(board, id, from, &KNIGHT_OFFSETS, &mut dests),
        PieceKind::Bishop => {
            for dir in Direction::DIAGONAL {
                sweep(board, id, from, dir, &mut dests);
            }
        }
        PieceKind::Rook => {
            for dir in Direction::CARDINAL {
                sweep(board, id, from, dir, &mut dests);
            }
        }
        PieceKind::Queen => {
            for dir in Direction::ALL {
                sweep(board, id, from, dir, &mut dests);
            }
        }
        PieceKind::King => {
            for dir in Direction::ALL {
                let dest = from.adjacent(dir);
                if board.is_valid_destination(id, dest) {
                    dests.push(dest);
                }
            }
        }
    }
    dests
}

fn gen_offsets(
    board: &Board,
    id: PieceId,
    from: Location,
    offsets: &[(i8, i8)],
    dests: &mut Vec<Location>,
) {
    for &(dr, dc) in offsets {
        let dest = Location::new(from.row + dr, from.col + dc);
        if board.is_valid_destination(id, dest) {
            dests.push(dest);
        }
    }
}

/// Walk one square at a time until the board edge or an occupied square.
/// A square held by an enemy piece is included (capture) and ends the
/// sweep.
fn sweep(board: &Board, id: PieceId, from: Location, dir: Direction, dests: &mut Vec<Location>) {
    let mut curr = from.adjacent(dir);
    while board.is_valid_destination(id, curr) {
        dests.push(curr);
        if board.piece_at(curr).is_some() {
            break;
        }
        curr = curr.adjacent(dir);
    }
}

fn gen_pawn(board: &Board, id: PieceId, color: Color, from: Location, dests: &mut Vec<Location>) {
    let (forward, diag_left, diag_right, start_row) = match color {
        Color::White => (
            Direction::North,
            Direction::Northwest,
            Direction::Northeast,
            6,
        ),
        Color::Black => (
            Direction::South,
            Direction::Southwest,
            Direction::Southeast,
            1,
        ),
    };

    let ahead = from.adjacent(forward);
    if board.is_valid_destination(id, ahead) && board.piece_at(ahead).is_none() {
        dests.push(ahead);
    }

    // The double step checks only its own landing square, not the square
    // stepped over.
    if from.row == start_row {
        let two_ahead = ahead.adjacent(forward);
        if board.is_valid_destination(id, two_ahead) && board.piece_at(two_ahead).is_none() {
            dests.push(two_ahead);
        }
    }

    for diag in [diag_left, diag_right] {
        let dest = from.adjacent(diag);
        if board.is_valid_destination(id, dest) && board.piece_at(dest).is_some() {
            dests.push(dest);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
