//! Turn loop alternating two players over one shared board.

use std::fmt;

use kinghunt_core::{Board, BoardError, Color, Move, Player};

/// Configuration for a single game.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Full turns (one White move plus one Black move) before the game is
    /// cut off, so engine-vs-engine games always terminate.
    pub max_turns: u32,
    /// Print progress while playing.
    pub verbose: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_turns: 200,
            verbose: false,
        }
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// A king fell; the winner still has one.
    KingCaptured(Color),
    /// The side to move had no move to offer.
    NoMoves(Color),
    /// The turn limit was reached first.
    TurnLimit,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::KingCaptured(winner) => {
                write!(f, "game over: {} wins by king capture", winner)
            }
            GameOutcome::NoMoves(stuck) => write!(f, "game over: {} has no moves", stuck),
            GameOutcome::TurnLimit => write!(f, "game over: turn limit reached"),
        }
    }
}

/// Callbacks the runner fires as the game progresses. All methods are
/// fire-and-forget with empty defaults; a front end implements the ones
/// it renders.
pub trait GameObserver {
    fn turn_started(&mut self, _name: &str, _color: Color, _in_check: bool) {}

    /// Fired after the move has been executed. Source and destination are
    /// on the move for highlighting.
    fn move_played(&mut self, _board: &Board, _mv: &Move) {}

    fn game_over(&mut self, _board: &Board, _outcome: GameOutcome) {}
}

/// Observer that ignores everything; for headless games.
#[derive(Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Runs one game between two players.
pub struct GameRunner {
    config: RunnerConfig,
}

impl GameRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Alternates White and Black until a king falls, a player runs out of
    /// moves, or the turn limit is hit.
    pub fn play(
        &self,
        board: &mut Board,
        white: &mut dyn Player,
        black: &mut dyn Player,
        observer: &mut dyn GameObserver,
    ) -> Result<GameOutcome, BoardError> {
        for _turn in 0..self.config.max_turns {
            for color in [Color::White, Color::Black] {
                if board.is_game_over() {
                    return Ok(self.finish(board, observer, Self::decided(board)));
                }
                let player: &mut dyn Player = match color {
                    Color::White => &mut *white,
                    Color::Black => &mut *black,
                };
                if let Some(outcome) = self.next_turn(board, player, observer)? {
                    return Ok(self.finish(board, observer, outcome));
                }
            }
        }

        let outcome = if board.is_game_over() {
            Self::decided(board)
        } else {
            GameOutcome::TurnLimit
        };
        Ok(self.finish(board, observer, outcome))
    }

    /// One half-turn: announce, request a move, execute it, report it.
    fn next_turn(
        &self,
        board: &mut Board,
        player: &mut dyn Player,
        observer: &mut dyn GameObserver,
    ) -> Result<Option<GameOutcome>, BoardError> {
        let in_check = board.is_check(player.color());
        observer.turn_started(player.name(), player.color(), in_check);
        if self.config.verbose {
            if in_check {
                println!("{} to move (checked)", player.name());
            } else {
                println!("{} to move", player.name());
            }
        }

        let mv = match player.next_move(board)? {
            Some(mv) => mv,
            None => return Ok(Some(GameOutcome::NoMoves(player.color()))),
        };

        if self.config.verbose {
            println!("  {}", mv.describe(board));
        }
        board.execute_move(&mv)?;
        observer.move_played(board, &mv);
        Ok(None)
    }

    fn finish(
        &self,
        board: &Board,
        observer: &mut dyn GameObserver,
        outcome: GameOutcome,
    ) -> GameOutcome {
        observer.game_over(board, outcome);
        if self.config.verbose {
            println!("{}", outcome);
        }
        outcome
    }

    /// The winner is whichever side still has its king.
    fn decided(board: &Board) -> GameOutcome {
        match (
            board.king_location(Color::White),
            board.king_location(Color::Black),
        ) {
            (Some(_), None) => GameOutcome::KingCaptured(Color::White),
            (None, Some(_)) => GameOutcome::KingCaptured(Color::Black),
            // No kings at all: nothing left to decide.
            _ => GameOutcome::TurnLimit,
        }
    }
}

/// Plays a single headless game on a fresh standard board.
pub fn quick_game(
    white: &mut dyn Player,
    black: &mut dyn Player,
    max_turns: u32,
) -> Result<GameOutcome, BoardError> {
    let mut board = Board::standard();
    let runner = GameRunner::new(RunnerConfig {
        max_turns,
        verbose: false,
    });
    runner.play(&mut board, white, black, &mut NullObserver)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
