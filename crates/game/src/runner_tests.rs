use super::*;
use kinghunt_core::{Location, Move, PieceKind};
use minimax_player::SmartPlayer;
use random_player::RandomPlayer;

fn loc(row: i8, col: i8) -> Location {
    Location::new(row, col)
}

/// Plays a fixed from/to script, cycling when it runs out.
struct ScriptedPlayer {
    name: String,
    color: Color,
    script: Vec<(Location, Location)>,
    next: usize,
}

impl ScriptedPlayer {
    fn new(name: &str, color: Color, script: Vec<(Location, Location)>) -> Self {
        Self {
            name: name.to_string(),
            color,
            script,
            next: 0,
        }
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }

    fn next_move(&mut self, board: &mut Board) -> Result<Option<Move>, BoardError> {
        if self.script.is_empty() {
            return Ok(None);
        }
        let (from, to) = self.script[self.next % self.script.len()];
        self.next += 1;
        let id = board.piece_at(from).unwrap();
        Ok(Some(Move::new(board, id, to).unwrap()))
    }
}

#[derive(Default)]
struct CountingObserver {
    turns: u32,
    moves: u32,
    finished: u32,
    last: Option<GameOutcome>,
}

impl GameObserver for CountingObserver {
    fn turn_started(&mut self, _name: &str, _color: Color, _in_check: bool) {
        self.turns += 1;
    }

    fn move_played(&mut self, _board: &Board, _mv: &Move) {
        self.moves += 1;
    }

    fn game_over(&mut self, _board: &Board, outcome: GameOutcome) {
        self.finished += 1;
        self.last = Some(outcome);
    }
}

fn rook_hunt_board() -> Board {
    let mut board = Board::new();
    board
        .place(Color::White, PieceKind::Rook, loc(5, 0))
        .unwrap();
    board
        .place(Color::White, PieceKind::King, loc(7, 4))
        .unwrap();
    board
        .place(Color::Black, PieceKind::King, loc(0, 4))
        .unwrap();
    board
        .place(Color::Black, PieceKind::Pawn, loc(3, 7))
        .unwrap();
    board
}

#[test]
fn test_king_capture_ends_the_game_with_a_winner() {
    let mut board = rook_hunt_board();
    // Rook to the back rank, then along it onto the black king.
    let mut white = ScriptedPlayer::new(
        "White",
        Color::White,
        vec![(loc(5, 0), loc(0, 0)), (loc(0, 0), loc(0, 4))],
    );
    let mut black = ScriptedPlayer::new(
        "Black",
        Color::Black,
        vec![(loc(3, 7), loc(4, 7)), (loc(4, 7), loc(5, 7))],
    );
    let mut observer = CountingObserver::default();

    let runner = GameRunner::new(RunnerConfig::default());
    let outcome = runner
        .play(&mut board, &mut white, &mut black, &mut observer)
        .unwrap();

    assert_eq!(outcome, GameOutcome::KingCaptured(Color::White));
    assert!(board.is_game_over());
    assert_eq!(observer.last, Some(outcome));
    assert_eq!(observer.finished, 1);
}

#[test]
fn test_turn_limit_terminates_shuffling_players() {
    let mut board = Board::new();
    board
        .place(Color::White, PieceKind::King, loc(7, 4))
        .unwrap();
    board
        .place(Color::Black, PieceKind::King, loc(0, 4))
        .unwrap();
    board
        .place(Color::White, PieceKind::Knight, loc(7, 1))
        .unwrap();
    board
        .place(Color::Black, PieceKind::Knight, loc(0, 1))
        .unwrap();

    let mut white = ScriptedPlayer::new(
        "White",
        Color::White,
        vec![(loc(7, 1), loc(5, 2)), (loc(5, 2), loc(7, 1))],
    );
    let mut black = ScriptedPlayer::new(
        "Black",
        Color::Black,
        vec![(loc(0, 1), loc(2, 2)), (loc(2, 2), loc(0, 1))],
    );
    let mut observer = CountingObserver::default();

    let runner = GameRunner::new(RunnerConfig {
        max_turns: 2,
        verbose: false,
    });
    let outcome = runner
        .play(&mut board, &mut white, &mut black, &mut observer)
        .unwrap();

    assert_eq!(outcome, GameOutcome::TurnLimit);
    assert_eq!(observer.turns, 4);
    assert_eq!(observer.moves, 4);
}

#[test]
fn test_side_without_moves_loses_its_turn_and_the_game() {
    // White king boxed into the corner by its own pawns: no white piece
    // has a single destination, while both kings are still standing.
    let mut board = Board::new();
    board
        .place(Color::White, PieceKind::King, loc(0, 0))
        .unwrap();
    board
        .place(Color::White, PieceKind::Pawn, loc(0, 1))
        .unwrap();
    board
        .place(Color::White, PieceKind::Pawn, loc(1, 0))
        .unwrap();
    board
        .place(Color::White, PieceKind::Pawn, loc(1, 1))
        .unwrap();
    board
        .place(Color::Black, PieceKind::King, loc(4, 4))
        .unwrap();
    assert!(board.all_moves(Color::White).is_empty());

    let mut white = RandomPlayer::new("White", Color::White);
    let mut black = ScriptedPlayer::new("Black", Color::Black, Vec::new());

    let runner = GameRunner::new(RunnerConfig::default());
    let outcome = runner
        .play(&mut board, &mut white, &mut black, &mut NullObserver)
        .unwrap();

    assert_eq!(outcome, GameOutcome::NoMoves(Color::White));
}

#[test]
fn test_quick_game_between_engines_finishes() {
    let mut white = SmartPlayer::with_depth("Smart", Color::White, 1);
    let mut black = RandomPlayer::new("Random", Color::Black);

    let outcome = quick_game(&mut white, &mut black, 5).unwrap();
    match outcome {
        GameOutcome::KingCaptured(_) | GameOutcome::NoMoves(_) | GameOutcome::TurnLimit => {}
    }
}
