//! Final cutechess-cli command assembly

use std::path::Path;

use crate::config::MatchConfig;

/// Assemble the complete cutechess-cli argument vector.
///
/// Group order matches the grammar cutechess-cli expects: tool, optional
/// variant, engine A section, engine B section, shared time control, game
/// count, concurrency, PGN output, optional openings, then the user's
/// pass-through tokens verbatim and in their original order. Nothing is
/// reordered, deduplicated, or re-parsed.
pub fn assemble(config: &MatchConfig, tool: &Path) -> Vec<String> {
    let mut cmd = vec![tool.to_string_lossy().into_owned()];

    if let Some(variant) = &config.variant {
        cmd.push("-variant".to_string());
        cmd.push(variant.clone());
    }

    cmd.push("-engine".to_string());
    cmd.extend(config.engine_a.descriptor_tokens(&[], config.ponder));

    cmd.push("-engine".to_string());
    cmd.extend(
        config
            .engine_b
            .descriptor_tokens(&config.strength_options(), config.ponder),
    );

    cmd.push("-each".to_string());
    cmd.push(format!("st={}", config.st));
    cmd.push(format!("timemargin={}", config.timemargin));

    cmd.push("-games".to_string());
    cmd.push(config.games.clone());
    cmd.push("-concurrency".to_string());
    cmd.push(config.concurrency.clone());
    cmd.push("-pgnout".to_string());
    cmd.push(config.pgn_out.clone());

    if let Some(openings) = &config.openings {
        cmd.push("-openings".to_string());
        cmd.push(format!("file={}", openings.file));
        cmd.push(format!("format={}", openings.format.as_str()));
        cmd.push(format!("order={}", openings.order.as_str()));
        if let Some(plies) = &openings.plies {
            cmd.push(format!("plies={}", plies));
        }
    }

    cmd.extend(config.passthrough.iter().cloned());
    cmd
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
