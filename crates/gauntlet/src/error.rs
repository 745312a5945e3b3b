//! Error taxonomy for the orchestrator
//!
//! Two failure classes exist before control transfers to cutechess-cli:
//! a malformed command line and a failed pre-flight check. Both map to
//! exit code 1. Once the tool is running, its own exit status is the
//! result and is never reinterpreted.

use thiserror::Error;

/// A malformed command line. Reported with the usage text, exit 1.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("option {0} requires a value")]
    MissingValue(String),

    #[error("unrecognized option: {0}")]
    UnknownFlag(String),

    #[error("{flag} expects KEY=VALUE with a nonempty key, got: {value}")]
    MalformedOption { flag: String, value: String },

    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },

    #[error("required option {0} was not given")]
    MissingEngine(&'static str),

    #[error("{0} requires --openings")]
    RequiresOpenings(&'static str),
}

/// A failed pre-flight check. Reported before any process launch, exit 1.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("{0} not found")]
    ToolNotFound(String),

    #[error("engine {side} binary is not an executable file: {path}")]
    EngineNotExecutable { side: &'static str, path: String },

    #[error("openings file does not exist: {0}")]
    OpeningsFileMissing(String),
}
