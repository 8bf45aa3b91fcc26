//! Game records: what was played, by whom, and how it ended.

use std::path::Path;

use serde::{Deserialize, Serialize};

use kinghunt_core::{Board, Color, Move};

use crate::runner::{GameObserver, GameOutcome};

/// One executed move, as recorded for replay and analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    pub ply: u32,
    pub player: String,
    /// Icon identifier of the mover, e.g. `white_knight`.
    pub piece: String,
    pub from: (i8, i8),
    pub to: (i8, i8),
    /// Icon identifier of the captured piece, if any.
    pub captured: Option<String>,
}

/// Full record of one game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub moves: Vec<MoveEntry>,
    pub outcome: Option<String>,
}

impl GameRecord {
    pub fn new(white: &str, black: &str) -> Self {
        Self {
            white: white.to_string(),
            black: black.to_string(),
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Save the record as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load a record from a JSON file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// One-line summary of the game.
    pub fn report(&self) -> String {
        let captures = self.moves.iter().filter(|m| m.captured.is_some()).count();
        let mut out = format!(
            "{} vs {}: {} plies, {} captures",
            self.white,
            self.black,
            self.moves.len(),
            captures
        );
        if let Some(outcome) = &self.outcome {
            out.push_str(&format!(" ({})", outcome));
        }
        out
    }
}

/// Observer that appends every played move to a record.
pub struct RecordingObserver {
    record: GameRecord,
    current_player: String,
    ply: u32,
}

impl RecordingObserver {
    pub fn new(white: &str, black: &str) -> Self {
        Self {
            record: GameRecord::new(white, black),
            current_player: String::new(),
            ply: 0,
        }
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn into_record(self) -> GameRecord {
        self.record
    }
}

impl GameObserver for RecordingObserver {
    fn turn_started(&mut self, name: &str, _color: Color, _in_check: bool) {
        self.current_player = name.to_string();
    }

    fn move_played(&mut self, board: &Board, mv: &Move) {
        self.ply += 1;
        // The victim's slot survives capture, so its icon is still known.
        let piece = board
            .piece(mv.piece)
            .map(|p| p.icon())
            .unwrap_or_else(|| "unknown".to_string());
        let captured = mv.victim.and_then(|v| board.piece(v)).map(|p| p.icon());
        self.record.moves.push(MoveEntry {
            ply: self.ply,
            player: self.current_player.clone(),
            piece,
            from: (mv.source.row, mv.source.col),
            to: (mv.destination.row, mv.destination.col),
            captured,
        });
    }

    fn game_over(&mut self, _board: &Board, outcome: GameOutcome) {
        self.record.outcome = Some(outcome.to_string());
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
