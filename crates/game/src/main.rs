//! KingHunt CLI
//!
//! Play a game in the terminal between any two of: human, random, smart.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use kinghunt_core::{Board, Color, Location, Move, Piece, PieceKind, Player};
use kinghunt_game::{
    GameRunner, HumanPlayer, MatchSettings, MoveSource, PlayerKind, RecordingObserver,
    RunnerConfig,
};
use minimax_player::SmartPlayer;
use random_player::RandomPlayer;

fn print_usage() {
    println!("KingHunt");
    println!();
    println!("Usage:");
    println!("  kinghunt [white] [black] [options]");
    println!();
    println!("Players:");
    println!("  human         - moves typed as: from_row from_col to_row to_col");
    println!("  random        - uniform random moves");
    println!("  smart         - minimax lookahead (smart:<depth> to override)");
    println!();
    println!("Options:");
    println!("  --config FILE     load settings from a TOML file first");
    println!("  --depth D         smart player lookahead in plies");
    println!("  --max-turns N     cut the game off after N full turns");
    println!("  --record FILE     write the game record as JSON");
    println!("  --quiet           suppress progress output");
    println!();
    println!("Examples:");
    println!("  kinghunt human smart --depth 3");
    println!("  kinghunt smart:4 random --max-turns 100 --record game.json");
}

fn parse_args(args: &[String]) -> Result<MatchSettings, String> {
    let mut settings = MatchSettings::default();
    let mut positional = 0;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| "--config requires a file".to_string())?;
                settings = MatchSettings::load(Path::new(path))?;
                i += 1;
            }
            "--depth" | "-d" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--depth requires a number".to_string())?;
                settings.depth = value
                    .parse()
                    .map_err(|_| format!("invalid depth '{}'", value))?;
                i += 1;
            }
            "--max-turns" | "-t" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--max-turns requires a number".to_string())?;
                settings.max_turns = value
                    .parse()
                    .map_err(|_| format!("invalid turn count '{}'", value))?;
                i += 1;
            }
            "--record" | "-r" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| "--record requires a file".to_string())?;
                settings.record = Some(path.clone());
                i += 1;
            }
            "--quiet" | "-q" => settings.verbose = false,
            spec if !spec.starts_with('-') => {
                let (kind, depth) = PlayerKind::parse(spec)?;
                match positional {
                    0 => settings.white = kind,
                    1 => settings.black = kind,
                    _ => return Err(format!("unexpected argument '{}'", spec)),
                }
                if let Some(depth) = depth {
                    settings.depth = depth;
                }
                positional += 1;
            }
            other => return Err(format!("unknown option '{}'", other)),
        }
        i += 1;
    }
    Ok(settings)
}

/// Reads move selections from stdin as four whitespace-separated numbers.
struct ConsoleSource;

impl MoveSource for ConsoleSource {
    fn select_move(&mut self, board: &Board) -> Option<Move> {
        let stdin = io::stdin();
        loop {
            print_board(board);
            print!("move (from_row from_col to_row to_col): ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }

            let fields: Vec<i8> = line
                .split_whitespace()
                .filter_map(|f| f.parse().ok())
                .collect();
            if fields.len() != 4 {
                println!("please enter four numbers, e.g. '6 4 4 4'");
                continue;
            }
            let from = Location::new(fields[0], fields[1]);
            let to = Location::new(fields[2], fields[3]);

            let id = match board.piece_at(from) {
                Some(id) => id,
                None => {
                    println!("no piece at {}", from);
                    continue;
                }
            };
            match Move::new(board, id, to) {
                Ok(mv) => return Some(mv),
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            }
        }
    }
}

fn glyph(piece: Piece) -> char {
    let letter = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}

fn print_board(board: &Board) {
    println!("    0 1 2 3 4 5 6 7");
    for row in 0..Board::SIZE {
        print!("  {} ", row);
        for col in 0..Board::SIZE {
            let square = board
                .piece_at(Location::new(row, col))
                .and_then(|id| board.piece(id))
                .map(glyph)
                .unwrap_or('.');
            print!("{} ", square);
        }
        println!();
    }
}

fn build_player(kind: PlayerKind, color: Color, depth: u8) -> Box<dyn Player> {
    let name = match color {
        Color::White => "White",
        Color::Black => "Black",
    };
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(name, color, ConsoleSource)),
        PlayerKind::Random => Box::new(RandomPlayer::new(name, color)),
        PlayerKind::Smart => Box::new(SmartPlayer::with_depth(name, color, depth)),
    }
}

fn run(settings: &MatchSettings) -> Result<(), String> {
    let mut board = Board::standard();
    let mut white = build_player(settings.white, Color::White, settings.depth);
    let mut black = build_player(settings.black, Color::Black, settings.depth);

    let mut recorder = RecordingObserver::new(white.name(), black.name());
    let runner = GameRunner::new(RunnerConfig {
        max_turns: settings.max_turns,
        verbose: settings.verbose,
    });

    let outcome = runner
        .play(&mut board, white.as_mut(), black.as_mut(), &mut recorder)
        .map_err(|e| format!("game aborted: {}", e))?;

    print_board(&board);
    println!("{}", outcome);

    let record = recorder.into_record();
    if settings.verbose {
        println!("{}", record.report());
    }
    if let Some(path) = &settings.record {
        record.save(Path::new(path))?;
        println!("record saved to {}", path);
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let settings = match parse_args(&args) {
        Ok(settings) => settings,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            println!();
            print_usage();
            process::exit(2);
        }
    };

    if let Err(msg) = run(&settings) {
        eprintln!("Error: {}", msg);
        process::exit(1);
    }
}
