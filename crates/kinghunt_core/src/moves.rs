use crate::board::Board;
use crate::error::BoardError;
use crate::location::Location;
use crate::types::PieceId;

/// One piece's transition from `source` to `destination`, with whatever
/// occupied the destination at construction time recorded as the `victim`
/// so the move can be undone.
///
/// A move is a snapshot of the board at one instant. If the board changes
/// before the move is executed it goes stale, and `Board::execute_move`
/// will ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub piece: PieceId,
    pub source: Location,
    pub destination: Location,
    pub victim: Option<PieceId>,
}

impl Move {
    /// Builds a move for `piece` toward `destination`, reading the source
    /// square and any victim off the board.
    pub fn new(board: &Board, piece: PieceId, destination: Location) -> Result<Move, BoardError> {
        let view = board.piece(piece).ok_or(BoardError::UnknownPiece(piece))?;
        let source = view.location.ok_or(BoardError::NotPlaced(piece))?;
        if source == destination {
            return Err(BoardError::DegenerateMove(source));
        }
        Ok(Move {
            piece,
            source,
            destination,
            victim: board.piece_at(destination),
        })
    }

    /// Human-readable description, e.g.
    /// `white_knight (7, 1) -> (5, 2) capturing black_pawn`.
    pub fn describe(&self, board: &Board) -> String {
        let mover = board
            .piece(self.piece)
            .map(|p| p.icon())
            .unwrap_or_else(|| "unknown".to_string());
        let mut out = format!("{} {} -> {}", mover, self.source, self.destination);
        if let Some(victim) = self.victim.and_then(|v| board.piece(v)) {
            out.push_str(&format!(" capturing {}", victim.icon()));
        }
        out
    }
}
