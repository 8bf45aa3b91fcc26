//! Random Move Player
//!
//! Picks uniformly at random from the moves currently available to its
//! color. Useful for:
//! - Baseline opponents (any searching player should beat this)
//! - Stress testing move generation and the game loop

use kinghunt_core::{Board, BoardError, Color, Move, Player};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A player that makes random moves.
///
/// No evaluation at all: one move is drawn from the full move list each
/// turn. The simplest possible strategy, kept around as a baseline.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    color: Color,
}

impl RandomPlayer {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }

    fn next_move(&mut self, board: &mut Board) -> Result<Option<Move>, BoardError> {
        let moves = board.all_moves(self.color);
        Ok(moves.choose(&mut thread_rng()).copied())
    }
}
