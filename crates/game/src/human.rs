//! Human player fed by a blocking move source.

use kinghunt_core::{Board, BoardError, Color, Move, Player};

/// Collaborator that produces move selections, typically by blocking on
/// user input. Returning `None` means no more input is available.
pub trait MoveSource {
    fn select_move(&mut self, board: &Board) -> Option<Move>;
}

/// A player driven by an external move source.
///
/// Selections that are not in the current move list are silently dropped
/// and the source is asked again; the user never sees a hard error for an
/// illegal pick.
pub struct HumanPlayer<S: MoveSource> {
    name: String,
    color: Color,
    source: S,
}

impl<S: MoveSource> HumanPlayer<S> {
    pub fn new(name: impl Into<String>, color: Color, source: S) -> Self {
        Self {
            name: name.into(),
            color,
            source,
        }
    }
}

impl<S: MoveSource> Player for HumanPlayer<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }

    fn next_move(&mut self, board: &mut Board) -> Result<Option<Move>, BoardError> {
        let moves = board.all_moves(self.color);
        if moves.is_empty() {
            return Ok(None);
        }
        loop {
            match self.source.select_move(board) {
                Some(mv) if moves.contains(&mv) => return Ok(Some(mv)),
                Some(_) => continue,
                None => return Ok(None),
            }
        }
    }
}

#[cfg(test)]
#[path = "human_tests.rs"]
mod human_tests;
