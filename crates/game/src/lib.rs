//! Game orchestration for KingHunt.
//!
//! This crate provides everything around the core and the engine players:
//! - The alternating turn loop and its observer callbacks
//! - The human player with its blocking move-source collaborator
//! - Match settings (TOML) and game records (JSON)

mod human;
mod record;
mod runner;
mod settings;

pub use human::*;
pub use record::*;
pub use runner::*;
pub use settings::*;
