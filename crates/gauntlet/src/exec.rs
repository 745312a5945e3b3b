//! Launch the assembled command and propagate its exit status
//!
//! The tool runs with inherited stdio so its progress output reaches the
//! user directly. Nothing is captured or reinterpreted.

use std::io;
use std::process::Command;

/// Quote the argument vector as a single copy-pasteable shell line.
pub fn preview(argv: &[String]) -> String {
    shell_words::join(argv)
}

/// Run the assembled command and return its exit code.
///
/// A child terminated by a signal has no exit code and is reported as 1.
pub fn execute(argv: &[String]) -> io::Result<i32> {
    let status = Command::new(&argv[0]).args(&argv[1..]).status()?;
    match status.code() {
        Some(code) => Ok(code),
        None => {
            eprintln!("{} terminated by signal", argv[0]);
            Ok(1)
        }
    }
}
