use kinghunt_core::{Board, Color};

/// Material score from `us`'s perspective: the sum of our piece values
/// minus the opponent's, at the board's current (possibly mid-search)
/// state. The king's sentinel value makes king capture dominate any other
/// material swing.
pub fn material_score(board: &Board, us: Color) -> i32 {
    let mut score = 0;
    for loc in board.occupied_locations() {
        if let Some(piece) = board.piece_at(loc).and_then(|id| board.piece(id)) {
            if piece.color == us {
                score += piece.kind.value();
            } else {
                score -= piece.kind.value();
            }
        }
    }
    score
}
