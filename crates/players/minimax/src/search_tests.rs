use super::*;
use kinghunt_core::{Location, PieceKind, Player};

use crate::SmartPlayer;

fn loc(row: i8, col: i8) -> Location {
    Location::new(row, col)
}

#[test]
fn test_search_leaves_board_untouched() {
    let mut board = Board::standard();
    let snapshot = board.clone();

    let mut player = SmartPlayer::new("Smart", Color::White);
    let mv = player.next_move(&mut board).unwrap();

    assert!(mv.is_some());
    assert!(player.nodes() > 0);
    assert_eq!(board, snapshot, "search must restore the board exactly");
}

#[test]
fn test_search_is_deterministic() {
    let mut board = Board::standard();
    let mut player = SmartPlayer::with_depth("Smart", Color::White, 3);

    let first = player.next_move(&mut board).unwrap();
    let second = player.next_move(&mut board).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_depth_one_takes_the_biggest_capture() {
    let mut board = Board::new();
    let rook = board
        .place(Color::White, PieceKind::Rook, loc(4, 4))
        .unwrap();
    board
        .place(Color::Black, PieceKind::Queen, loc(4, 0))
        .unwrap();
    board
        .place(Color::Black, PieceKind::Pawn, loc(0, 4))
        .unwrap();

    let mut nodes = 0;
    let (score, chosen) = best_move(&mut board, Color::White, 1, &mut nodes).unwrap();
    let chosen = chosen.unwrap();

    assert_eq!(chosen.piece, rook);
    assert_eq!(chosen.destination, loc(4, 0), "queen beats pawn");
    assert_eq!(score, 5 - 1);
}

#[test]
fn test_king_capture_dominates_material() {
    let mut board = Board::new();
    board
        .place(Color::White, PieceKind::Rook, loc(4, 4))
        .unwrap();
    board
        .place(Color::Black, PieceKind::Queen, loc(4, 0))
        .unwrap();
    board
        .place(Color::Black, PieceKind::King, loc(0, 4))
        .unwrap();

    let mut nodes = 0;
    let (_, chosen) = best_move(&mut board, Color::White, 1, &mut nodes).unwrap();

    // Taking the king (sentinel value 1000) outranks taking the queen.
    assert_eq!(chosen.unwrap().destination, loc(0, 4));
}

#[test]
fn test_depth_two_avoids_the_defended_pawn() {
    let mut board = Board::new();
    let queen = board
        .place(Color::White, PieceKind::Queen, loc(4, 4))
        .unwrap();
    // A defended pawn, its defender, and a free pawn down the rank.
    board
        .place(Color::Black, PieceKind::Pawn, loc(3, 3))
        .unwrap();
    board
        .place(Color::Black, PieceKind::Pawn, loc(2, 2))
        .unwrap();
    board
        .place(Color::Black, PieceKind::Pawn, loc(4, 7))
        .unwrap();
    let snapshot = board.clone();

    let mut nodes = 0;
    let (score, chosen) = best_move(&mut board, Color::White, 2, &mut nodes).unwrap();
    let chosen = chosen.unwrap();

    assert_eq!(chosen.piece, queen);
    assert_eq!(
        chosen.destination,
        loc(4, 7),
        "grabbing the defended pawn loses the queen to the recapture"
    );
    assert_eq!(score, 9 - 2);
    assert_eq!(board, snapshot);
}

#[test]
fn test_ties_keep_the_first_move_found() {
    // Two rooks, each able to capture an identical pawn: identical scores,
    // so the move generated first must win the tie.
    let mut board = Board::new();
    board
        .place(Color::White, PieceKind::Rook, loc(2, 0))
        .unwrap();
    board
        .place(Color::White, PieceKind::Rook, loc(5, 0))
        .unwrap();
    board
        .place(Color::Black, PieceKind::Pawn, loc(2, 7))
        .unwrap();
    board
        .place(Color::Black, PieceKind::Pawn, loc(5, 7))
        .unwrap();

    let moves = board.all_moves(Color::White);
    let first_capture = moves.iter().find(|mv| mv.victim.is_some()).copied().unwrap();

    let mut nodes = 0;
    let (_, chosen) = best_move(&mut board, Color::White, 1, &mut nodes).unwrap();
    assert_eq!(chosen.unwrap(), first_capture);
}

#[test]
fn test_no_moves_returns_none() {
    let mut board = Board::new();
    board
        .place(Color::Black, PieceKind::King, loc(0, 4))
        .unwrap();

    let mut player = SmartPlayer::new("Smart", Color::White);
    assert_eq!(player.next_move(&mut board).unwrap(), None);
}

#[test]
fn test_meanest_response_minimizes_our_score() {
    // Black to reply: capturing the white queen is the meanest answer.
    let mut board = Board::new();
    board
        .place(Color::White, PieceKind::Queen, loc(4, 4))
        .unwrap();
    let rook = board
        .place(Color::Black, PieceKind::Rook, loc(4, 0))
        .unwrap();

    let mut nodes = 0;
    let (score, reply) = meanest_response(&mut board, Color::White, 1, &mut nodes).unwrap();
    let reply = reply.unwrap();

    assert_eq!(reply.piece, rook);
    assert_eq!(reply.destination, loc(4, 4));
    assert_eq!(score, -5);
}
