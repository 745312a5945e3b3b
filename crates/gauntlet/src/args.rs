//! Command-line argument parsing
//!
//! A single left-to-right scan over the token list. Every recognized flag
//! except `--ponder` and `-h`/`--help` consumes exactly one value token.
//! A literal `--` switches to pass-through mode: all remaining tokens are
//! copied verbatim for cutechess-cli and never reinterpreted, including
//! further `--` tokens.

use crate::config::{MatchConfig, OpeningFormat, OpeningOrder, OpeningsConfig};
use crate::error::UsageError;

/// Outcome of a successful parse.
#[derive(Debug)]
pub enum Parsed {
    /// A complete, validated-for-shape configuration.
    Config(MatchConfig),
    /// `-h`/`--help` was seen; print usage and exit 0 without further work.
    Help,
}

/// Parse the command-line tokens (program name already stripped).
pub fn parse_args(tokens: &[String]) -> Result<Parsed, UsageError> {
    let mut config = MatchConfig::default();
    let mut openings_file: Option<String> = None;
    let mut format: Option<OpeningFormat> = None;
    let mut order: Option<OpeningOrder> = None;
    let mut plies: Option<String> = None;

    let mut i = 0;
    while i < tokens.len() {
        let flag = tokens[i].as_str();
        match flag {
            "-h" | "--help" => return Ok(Parsed::Help),
            "--ponder" => config.ponder = true,
            "--" => {
                config.passthrough.extend_from_slice(&tokens[i + 1..]);
                break;
            }
            _ if !takes_value(flag) => return Err(UsageError::UnknownFlag(flag.to_string())),
            _ => {
                let value = take_value(tokens, i, flag)?;
                match flag {
                    "--a" => config.engine_a.cmd = value.to_string(),
                    "--b" => config.engine_b.cmd = value.to_string(),
                    "--a-arg" => config.engine_a.arg = Some(value.to_string()),
                    "--b-arg" => config.engine_b.arg = Some(value.to_string()),
                    "--a-name" => config.engine_a.name = Some(value.to_string()),
                    "--b-name" => config.engine_b.name = Some(value.to_string()),
                    "--a-opt" => config.engine_a.options.push(split_option(flag, value)?),
                    "--b-opt" => config.engine_b.options.push(split_option(flag, value)?),
                    "--st" => config.st = value.to_string(),
                    "--timemargin" => config.timemargin = value.to_string(),
                    "--games" => config.games = value.to_string(),
                    "--concurrency" => config.concurrency = value.to_string(),
                    "--pgn" => config.pgn_out = value.to_string(),
                    "--elo" => {
                        config.elo = Some(value.parse().map_err(|_| UsageError::InvalidValue {
                            flag: flag.to_string(),
                            value: value.to_string(),
                        })?)
                    }
                    "--variant" => config.variant = Some(value.to_string()),
                    "--openings" => openings_file = Some(value.to_string()),
                    "--format" => {
                        format = Some(OpeningFormat::parse(value).ok_or_else(|| {
                            UsageError::InvalidValue {
                                flag: flag.to_string(),
                                value: value.to_string(),
                            }
                        })?)
                    }
                    "--order" => {
                        order = Some(OpeningOrder::parse(value).ok_or_else(|| {
                            UsageError::InvalidValue {
                                flag: flag.to_string(),
                                value: value.to_string(),
                            }
                        })?)
                    }
                    "--plies" => plies = Some(value.to_string()),
                    _ => return Err(UsageError::UnknownFlag(flag.to_string())),
                }
                i += 1; // skip the consumed value token
            }
        }
        i += 1;
    }

    if config.engine_a.cmd.is_empty() {
        return Err(UsageError::MissingEngine("--a"));
    }
    if config.engine_b.cmd.is_empty() {
        return Err(UsageError::MissingEngine("--b"));
    }

    match openings_file {
        Some(file) => {
            // The order actually parsed is the one the assembler emits.
            config.openings = Some(OpeningsConfig {
                file,
                format: format.unwrap_or(OpeningFormat::Epd),
                order: order.unwrap_or(OpeningOrder::Random),
                plies,
            });
        }
        None => {
            if format.is_some() {
                return Err(UsageError::RequiresOpenings("--format"));
            }
            if order.is_some() {
                return Err(UsageError::RequiresOpenings("--order"));
            }
            if plies.is_some() {
                return Err(UsageError::RequiresOpenings("--plies"));
            }
        }
    }

    Ok(Parsed::Config(config))
}

/// True for every flag that consumes exactly one value token.
fn takes_value(flag: &str) -> bool {
    matches!(
        flag,
        "--a" | "--b"
            | "--a-arg"
            | "--b-arg"
            | "--a-name"
            | "--b-name"
            | "--a-opt"
            | "--b-opt"
            | "--st"
            | "--timemargin"
            | "--games"
            | "--concurrency"
            | "--pgn"
            | "--elo"
            | "--variant"
            | "--openings"
            | "--format"
            | "--order"
            | "--plies"
    )
}

/// The value token following `flag`, or a usage error when input ends.
fn take_value<'a>(tokens: &'a [String], at: usize, flag: &str) -> Result<&'a str, UsageError> {
    tokens
        .get(at + 1)
        .map(|s| s.as_str())
        .ok_or_else(|| UsageError::MissingValue(flag.to_string()))
}

/// Split a `KEY=VALUE` engine option at the first `=`; the key must be
/// nonempty, the value may itself contain `=`.
fn split_option(flag: &str, value: &str) -> Result<(String, String), UsageError> {
    match value.split_once('=') {
        Some((key, val)) if !key.is_empty() => Ok((key.to_string(), val.to_string())),
        _ => Err(UsageError::MalformedOption {
            flag: flag.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod args_tests;
