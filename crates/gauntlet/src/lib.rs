//! Match orchestration for UCI engines via cutechess-cli
//!
//! This crate provides the configuration and command-assembly core:
//! - Parsing the orchestrator's options into one immutable match config
//! - Pre-flight checks for the tool, both engine binaries, and openings file
//! - Assembling and launching the final cutechess-cli invocation
//!
//! # Usage
//!
//! ```bash
//! # 100 games between two engines, 8 at a time
//! cargo run -p gauntlet -- --a ./my-engine --b ./stockfish --games 100
//!
//! # Capped-strength opponent with an opening book
//! cargo run -p gauntlet -- --a ./my-engine --b ./stockfish --elo 2200 \
//!     --openings book.epd --plies 8
//! ```

mod args;
mod command;
mod config;
mod error;
mod exec;
mod validate;

pub use args::*;
pub use command::*;
pub use config::*;
pub use error::*;
pub use exec::*;
pub use validate::*;
