//! KingHunt core: board state, pieces, moves, and the player seam.
//!
//! The board is the single shared mutable resource of a game. Moves record
//! their victim so they can be executed and undone in place, which is what
//! the minimax player relies on to search without ever copying the board.

pub mod board;
pub mod error;
pub mod location;
pub mod movegen;
pub mod moves;
pub mod types;

pub use board::Board;
pub use error::BoardError;
pub use location::{Direction, Location};
pub use movegen::{all_moves, destinations};
pub use moves::Move;
pub use types::{Color, Piece, PieceId, PieceKind};

/// Trait implemented by every move-selection strategy.
///
/// The game loop hands the shared board to exactly one player at a time.
/// A player may mutate the board while deciding (the minimax player does,
/// searching by execute/undo) but must hand it back in the state it was
/// received. `Ok(None)` means the player has no move to offer.
pub trait Player {
    /// Display name for turn announcements.
    fn name(&self) -> &str;

    /// The color this player moves for.
    fn color(&self) -> Color;

    /// Chooses the next move. The returned move has not been executed.
    fn next_move(&mut self, board: &mut Board) -> Result<Option<Move>, BoardError>;
}
