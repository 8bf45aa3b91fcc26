use crate::error::BoardError;
use crate::location::Location;
use crate::movegen;
use crate::moves::Move;
use crate::types::{Color, Piece, PieceId, PieceKind};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Slot {
    color: Color,
    kind: PieceKind,
    location: Option<Location>,
}

/// An 8x8 grid of piece handles plus the owned piece table.
///
/// A board is constructed once per game and mutated in place for its whole
/// life: moves are executed and undone on the same instance, never on a
/// copy. Captured pieces keep their slot in the table (with no location)
/// so undoing the capture restores the very same piece.
///
/// Invariant: `grid[loc] == Some(id)` exactly when
/// `pieces[id].location == Some(loc)`. Mutating operations verify the
/// relation and report `OccupancyMismatch` when it is broken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [Option<PieceId>; 64],
    pieces: Vec<Slot>,
}

impl Board {
    /// Rows and columns per side.
    pub const SIZE: i8 = 8;

    /// An empty board with no pieces.
    pub fn new() -> Self {
        Board {
            grid: [None; 64],
            pieces: Vec::new(),
        }
    }

    /// The standard 32-piece opening setup: Black on rows 0 and 1, White
    /// on rows 6 and 7.
    pub fn standard() -> Self {
        let mut board = Board::new();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            let col = col as i8;
            board.spawn(Color::Black, kind, Location::new(0, col));
            board.spawn(Color::Black, PieceKind::Pawn, Location::new(1, col));
            board.spawn(Color::White, PieceKind::Pawn, Location::new(6, col));
            board.spawn(Color::White, kind, Location::new(7, col));
        }
        board
    }

    /// Whether `loc` names a square on this board.
    pub fn is_valid(loc: Location) -> bool {
        (0..Self::SIZE).contains(&loc.row) && (0..Self::SIZE).contains(&loc.col)
    }

    fn idx(loc: Location) -> usize {
        loc.row as usize * Self::SIZE as usize + loc.col as usize
    }

    fn slot(&self, id: PieceId) -> Result<&Slot, BoardError> {
        self.pieces.get(id.index()).ok_or(BoardError::UnknownPiece(id))
    }

    // Infallible insert for squares already known to be free and in range.
    fn spawn(&mut self, color: Color, kind: PieceKind, loc: Location) -> PieceId {
        let id = PieceId(self.pieces.len() as u16);
        self.pieces.push(Slot {
            color,
            kind,
            location: Some(loc),
        });
        self.grid[Self::idx(loc)] = Some(id);
        id
    }

    /// The piece occupying `loc`, if any. Off-board locations are empty.
    pub fn piece_at(&self, loc: Location) -> Option<PieceId> {
        if Self::is_valid(loc) {
            self.grid[Self::idx(loc)]
        } else {
            None
        }
    }

    /// Snapshot view of a piece. `None` for ids this board never issued.
    pub fn piece(&self, id: PieceId) -> Option<Piece> {
        self.pieces.get(id.index()).map(|slot| Piece {
            id,
            color: slot.color,
            kind: slot.kind,
            location: slot.location,
        })
    }

    /// Occupied squares in row-major order.
    pub fn occupied_locations(&self) -> Vec<Location> {
        let mut out = Vec::new();
        for row in 0..Self::SIZE {
            for col in 0..Self::SIZE {
                let loc = Location::new(row, col);
                if self.grid[Self::idx(loc)].is_some() {
                    out.push(loc);
                }
            }
        }
        out
    }

    /// Creates a new piece and places it at `loc`. Any occupant is removed
    /// from the grid first (it keeps its slot, unplaced).
    pub fn place(
        &mut self,
        color: Color,
        kind: PieceKind,
        loc: Location,
    ) -> Result<PieceId, BoardError> {
        if !Self::is_valid(loc) {
            return Err(BoardError::OffBoard(loc));
        }
        if let Some(other) = self.grid[Self::idx(loc)] {
            self.remove(other)?;
        }
        Ok(self.spawn(color, kind, loc))
    }

    /// Re-places a captured piece at `loc`; the undo path for captures.
    pub fn restore(&mut self, id: PieceId, loc: Location) -> Result<(), BoardError> {
        if !Self::is_valid(loc) {
            return Err(BoardError::OffBoard(loc));
        }
        let slot = self.slot(id)?;
        if let Some(at) = slot.location {
            return Err(BoardError::AlreadyPlaced { id, at });
        }
        if let Some(other) = self.grid[Self::idx(loc)] {
            self.remove(other)?;
        }
        self.pieces[id.index()].location = Some(loc);
        self.grid[Self::idx(loc)] = Some(id);
        Ok(())
    }

    /// Takes a piece off the grid. Its slot survives so it can be restored.
    pub fn remove(&mut self, id: PieceId) -> Result<(), BoardError> {
        let slot = self.slot(id)?;
        let loc = slot.location.ok_or(BoardError::NotPlaced(id))?;
        if self.grid[Self::idx(loc)] != Some(id) {
            return Err(BoardError::OccupancyMismatch(loc));
        }
        self.grid[Self::idx(loc)] = None;
        self.pieces[id.index()].location = None;
        Ok(())
    }

    /// Relocates a piece, capturing whatever occupies the destination.
    /// Moving a piece onto its own square is a no-op.
    pub fn move_piece(&mut self, id: PieceId, dest: Location) -> Result<(), BoardError> {
        let slot = self.slot(id)?;
        let source = slot.location.ok_or(BoardError::NotPlaced(id))?;
        if self.grid[Self::idx(source)] != Some(id) {
            return Err(BoardError::OccupancyMismatch(source));
        }
        if !Self::is_valid(dest) {
            return Err(BoardError::OffBoard(dest));
        }
        if dest == source {
            return Ok(());
        }
        self.grid[Self::idx(source)] = None;
        if let Some(other) = self.grid[Self::idx(dest)] {
            self.remove(other)?;
        }
        self.grid[Self::idx(dest)] = Some(id);
        self.pieces[id.index()].location = Some(dest);
        Ok(())
    }

    /// Whether `dest` is a square the piece may land on: on the board and
    /// either empty or held by the other color.
    pub fn is_valid_destination(&self, id: PieceId, dest: Location) -> bool {
        let mover = match self.piece(id) {
            Some(p) => p,
            None => return false,
        };
        if mover.location.is_none() || !Self::is_valid(dest) {
            return false;
        }
        match self.piece_at(dest).and_then(|v| self.piece(v)) {
            Some(occupant) => occupant.color != mover.color,
            None => true,
        }
    }

    /// Every move currently available to `color`.
    pub fn all_moves(&self, color: Color) -> Vec<Move> {
        movegen::all_moves(self, color)
    }

    /// Executes `mv` if its piece can still reach the destination. A stale
    /// move, invalidated by board changes since it was constructed, is
    /// silently ignored rather than treated as an error.
    pub fn execute_move(&mut self, mv: &Move) -> Result<(), BoardError> {
        if !self.is_valid_destination(mv.piece, mv.destination) {
            return Ok(());
        }
        if let Some(victim) = mv.victim {
            self.remove(victim)?;
        }
        self.move_piece(mv.piece, mv.destination)
    }

    /// Reverses `mv`: the piece returns to its source and any victim is
    /// restored at the destination. Only valid for the most recently
    /// executed move; the caller keeps that discipline (the search undoes
    /// moves in strict reverse order).
    pub fn undo_move(&mut self, mv: &Move) -> Result<(), BoardError> {
        self.move_piece(mv.piece, mv.source)?;
        if let Some(victim) = mv.victim {
            self.restore(victim, mv.destination)?;
        }
        Ok(())
    }

    /// Where `color`'s king currently stands, if it is on the board.
    pub fn king_location(&self, color: Color) -> Option<Location> {
        self.pieces
            .iter()
            .find(|slot| slot.color == color && slot.kind == PieceKind::King)
            .and_then(|slot| slot.location)
    }

    /// Number of kings still standing.
    pub fn kings_on_board(&self) -> usize {
        self.pieces
            .iter()
            .filter(|slot| slot.kind == PieceKind::King && slot.location.is_some())
            .count()
    }

    /// The game ends as soon as a king has been captured.
    pub fn is_game_over(&self) -> bool {
        self.kings_on_board() < 2
    }

    /// Whether `color`'s king is attacked: some move available to the other
    /// color has a king as its victim.
    pub fn is_check(&self, color: Color) -> bool {
        self.all_moves(color.other()).iter().any(|mv| {
            mv.victim
                .and_then(|v| self.piece(v))
                .map_or(false, |victim| victim.kind == PieceKind::King)
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
