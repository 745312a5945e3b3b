//! Match configuration data model and engine descriptor rendering
//!
//! One immutable [`MatchConfig`] is built by the argument parser and passed
//! through validation, assembly, and execution. Numeric match parameters are
//! opaque strings forwarded verbatim; cutechess-cli owns their validation.

use std::path::Path;

/// Name the external match tool is looked up under.
pub const TOOL_NAME: &str = "cutechess-cli";

/// Configuration for one engine participant.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Path to the engine binary.
    pub cmd: String,
    /// Extra startup argument for the binary, if any.
    pub arg: Option<String>,
    /// Display name; defaults to the binary's base name.
    pub name: Option<String>,
    /// UCI options in the order they were given on the command line.
    pub options: Vec<(String, String)>,
}

impl EngineConfig {
    /// Display name for this engine, falling back to the base name of `cmd`.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => Path::new(&self.cmd)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.cmd.clone()),
        }
    }

    /// Render this engine as one cutechess-cli engine section.
    ///
    /// Token order is fixed: `cmd=`, `name=`, `proto=uci`, `arg=` (only when
    /// a nonempty startup argument was supplied), every `option.K=V` in
    /// command-line order, then `extra` options, then `option.Ponder=true`
    /// when pondering is on. Duplicate keys are kept as-is; cutechess-cli
    /// applies the last value.
    pub fn descriptor_tokens(&self, extra: &[(String, String)], ponder: bool) -> Vec<String> {
        let mut tokens = vec![
            format!("cmd={}", self.cmd),
            format!("name={}", self.display_name()),
            "proto=uci".to_string(),
        ];
        if let Some(arg) = &self.arg {
            if !arg.is_empty() {
                tokens.push(format!("arg={}", arg));
            }
        }
        for (key, value) in self.options.iter().chain(extra) {
            tokens.push(format!("option.{}={}", key, value));
        }
        if ponder {
            tokens.push("option.Ponder=true".to_string());
        }
        tokens
    }
}

/// File format of an openings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningFormat {
    Epd,
    Pgn,
}

impl OpeningFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "epd" => Some(Self::Epd),
            "pgn" => Some(Self::Pgn),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Epd => "epd",
            Self::Pgn => "pgn",
        }
    }
}

/// Order in which openings are drawn from the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningOrder {
    Random,
    Sequential,
}

impl OpeningOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "random" => Some(Self::Random),
            "sequential" => Some(Self::Sequential),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sequential => "sequential",
        }
    }
}

/// Openings settings forwarded to cutechess-cli.
#[derive(Debug, Clone)]
pub struct OpeningsConfig {
    /// Path to the EPD/PGN positions file.
    pub file: String,
    pub format: OpeningFormat,
    pub order: OpeningOrder,
    /// Opening depth limit in plies, forwarded verbatim.
    pub plies: Option<String>,
}

/// Fully parsed configuration for one orchestrator invocation.
///
/// Built once from the command line, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// External match tool; a bare name is resolved through PATH.
    pub tool: String,
    pub engine_a: EngineConfig,
    pub engine_b: EngineConfig,
    /// Seconds per move, shared by both engines.
    pub st: String,
    /// Allowed clock overshoot in milliseconds.
    pub timemargin: String,
    pub games: String,
    pub concurrency: String,
    pub pgn_out: String,
    /// Enable pondering for both engines.
    pub ponder: bool,
    /// Strength cap for engine B via UCI_Elo; zero or absent means uncapped.
    pub elo: Option<u32>,
    /// Chess variant, e.g. "fischerandom".
    pub variant: Option<String>,
    pub openings: Option<OpeningsConfig>,
    /// Raw tokens after the `--` separator, forwarded untouched.
    pub passthrough: Vec<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            engine_a: EngineConfig::default(),
            engine_b: EngineConfig::default(),
            st: "15".to_string(),
            timemargin: "100".to_string(),
            games: "100".to_string(),
            concurrency: "8".to_string(),
            pgn_out: "results.pgn".to_string(),
            ponder: false,
            elo: None,
            variant: None,
            openings: None,
            passthrough: Vec::new(),
        }
    }
}

impl MatchConfig {
    /// Strength-limit options injected into engine B's section.
    ///
    /// A zero Elo disables the cap entirely: neither `UCI_LimitStrength`
    /// nor `UCI_Elo` is emitted.
    pub fn strength_options(&self) -> Vec<(String, String)> {
        match self.elo {
            Some(elo) if elo > 0 => vec![
                ("UCI_LimitStrength".to_string(), "true".to_string()),
                ("UCI_Elo".to_string(), elo.to_string()),
            ],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
