//! Minimax Player
//!
//! Looks a fixed number of plies ahead with an exhaustive minimax,
//! searching by mutating the shared board in place and undoing every move
//! on the way back up. The board handed in is bit-identical before and
//! after a search; it is never copied.

mod eval;
mod search;

pub use eval::material_score;
pub use search::{best_move, meanest_response};

use kinghunt_core::{Board, BoardError, Color, Move, Player};

/// A player that picks the move maximizing its material score against the
/// opponent's best replies.
#[derive(Debug, Clone)]
pub struct SmartPlayer {
    name: String,
    color: Color,
    depth: u8,
    nodes: u64,
}

impl SmartPlayer {
    /// Default lookahead in plies.
    pub const DEFAULT_DEPTH: u8 = 3;

    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self::with_depth(name, color, Self::DEFAULT_DEPTH)
    }

    pub fn with_depth(name: impl Into<String>, color: Color, depth: u8) -> Self {
        Self {
            name: name.into(),
            color,
            depth,
            nodes: 0,
        }
    }

    /// Plies this player looks ahead.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Player for SmartPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }

    fn next_move(&mut self, board: &mut Board) -> Result<Option<Move>, BoardError> {
        self.nodes = 0;
        let (_score, best) = search::best_move(board, self.color, self.depth, &mut self.nodes)?;
        Ok(best)
    }
}
