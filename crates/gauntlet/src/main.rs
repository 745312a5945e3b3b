//! Gauntlet CLI
//!
//! Turn a small option set into a full cutechess-cli invocation, verify
//! every participant up front, then hand control to the tool.

use std::env;

use gauntlet::{assemble, execute, parse_args, preview, validate, Parsed};

fn print_usage() {
    println!("Gauntlet - cutechess-cli match orchestrator for UCI engines");
    println!();
    println!("Usage:");
    println!("  gauntlet --a <engine> --b <engine> [options] [-- <cutechess-cli args>]");
    println!();
    println!("Engines:");
    println!("  --a PATH          engine A binary (required)");
    println!("  --a-arg ARG       startup argument for engine A");
    println!("  --a-name NAME     display name for engine A (default: binary base name)");
    println!("  --a-opt K=V       UCI option for engine A (repeatable, order kept)");
    println!("  --b/--b-arg/--b-name/--b-opt   the same for engine B");
    println!();
    println!("Match:");
    println!("  --st SECONDS      time per move (default 15)");
    println!("  --timemargin MS   allowed clock overshoot (default 100)");
    println!("  --games N         number of games (default 100)");
    println!("  --concurrency N   concurrent games (default 8)");
    println!("  --pgn FILE        PGN output file (default results.pgn)");
    println!("  --ponder          enable pondering for both engines");
    println!("  --elo N           cap engine B strength via UCI_Elo (0 = uncapped)");
    println!("  --variant NAME    chess variant, e.g. fischerandom");
    println!();
    println!("Openings:");
    println!("  --openings FILE   starting-positions file");
    println!("  --format FMT      epd or pgn (default epd)");
    println!("  --order ORDER     random or sequential (default random)");
    println!("  --plies N         opening depth limit in plies");
    println!();
    println!("Everything after a literal -- goes to cutechess-cli unchanged, e.g.");
    println!("  gauntlet --a ./e1 --b ./e2 -- -draw movenumber=40 movecount=25 score=0");
}

fn run() -> i32 {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match parse_args(&args) {
        Ok(Parsed::Help) => {
            print_usage();
            return 0;
        }
        Ok(Parsed::Config(config)) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            print_usage();
            return 1;
        }
    };

    let tool = match validate(&config) {
        Ok(tool) => tool,
        Err(err) => {
            eprintln!("Error: {}", err);
            return 1;
        }
    };

    let argv = assemble(&config, &tool);
    println!("Running: {}", preview(&argv));

    match execute(&argv) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: failed to launch {}: {}", argv[0], err);
            1
        }
    }
}

fn main() {
    std::process::exit(run());
}
