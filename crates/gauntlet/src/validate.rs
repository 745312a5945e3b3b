//! Pre-flight checks run before the match tool is launched
//!
//! A multi-game match is expensive, so every participant is verified up
//! front. Checks are fail-fast: the first failure aborts the run and no
//! process is started.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::MatchConfig;
use crate::error::PreconditionError;

/// Verify every external prerequisite of `config`.
///
/// Check order: match tool, engine A, engine B, openings file. Returns the
/// resolved tool path on success.
pub fn validate(config: &MatchConfig) -> Result<PathBuf, PreconditionError> {
    let tool = resolve_tool(&config.tool)?;
    check_engine("A", &config.engine_a.cmd)?;
    check_engine("B", &config.engine_b.cmd)?;
    if let Some(openings) = &config.openings {
        if !Path::new(&openings.file).exists() {
            return Err(PreconditionError::OpeningsFileMissing(openings.file.clone()));
        }
    }
    Ok(tool)
}

/// Resolve the match tool to an executable path.
///
/// A name containing a path separator is checked directly; a bare name is
/// searched for in the PATH directories.
pub fn resolve_tool(name: &str) -> Result<PathBuf, PreconditionError> {
    if name.contains(std::path::MAIN_SEPARATOR) {
        let path = Path::new(name);
        if is_executable_file(path) {
            return Ok(path.to_path_buf());
        }
        return Err(PreconditionError::ToolNotFound(name.to_string()));
    }
    let dirs: Vec<PathBuf> = match env::var_os("PATH") {
        Some(paths) => env::split_paths(&paths).collect(),
        None => Vec::new(),
    };
    search_dirs(name, &dirs).ok_or_else(|| PreconditionError::ToolNotFound(name.to_string()))
}

/// First executable file named `name` in `dirs`.
pub(crate) fn search_dirs(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable_file(candidate))
}

fn check_engine(side: &'static str, cmd: &str) -> Result<(), PreconditionError> {
    if !is_executable_file(Path::new(cmd)) {
        return Err(PreconditionError::EngineNotExecutable {
            side,
            path: cmd.to_string(),
        });
    }
    Ok(())
}

/// True when `path` names a regular file the current user may execute.
#[cfg(unix)]
pub(crate) fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match path.metadata() {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
pub(crate) fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}

#[cfg(all(test, unix))]
#[path = "validate_tests.rs"]
mod validate_tests;
