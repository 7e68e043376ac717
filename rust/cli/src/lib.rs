//! # Shoe CLI Library
//!
//! Command-line harness for the `shoe-engine` blackjack core: deal hands from a
//! prepared shoe, inspect deck state, score hands, and check RNG output.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand, and returns the
//! process exit code.
//!
//! ```
//! use std::io;
//! let args = vec!["shoe", "deal", "--seed", "42"];
//! let code = shoe_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Prepare a deck and deal two cards to each hand
//! - `deck`: Show deck state predicates and card order
//! - `eval`: Score a hand given in short notation
//! - `rng`: Print ChaCha20 samples for a seed
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, ShoeCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_deck_command, handle_eval_command,
    handle_rng_command,
};
use config::{Config, ConfigResolved};
pub use error::CliError;

const COMMANDS: &[&str] = &["deal", "deck", "eval", "rng", "cfg"];

/// Main entry point for the CLI application.
///
/// Returns `0` on success and `2` on any error. `--help` and `--version`
/// print to `out` and return `0`; usage errors print a command summary to
/// `err`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ShoeCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };

    logging::init_logging(cli.verbose);

    match dispatch(cli.cmd, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Deal {
            seed,
            sets,
            hands,
            json,
        } => {
            let table = resolve_table(seed, sets, hands)?;
            handle_deal_command(&table, json, out)
        }
        Commands::Deck {
            seed,
            sets,
            shuffle,
            draw,
        } => {
            let table = resolve_table(seed, sets, None)?;
            if draw > 0 && !shuffle {
                ui::display_warning(err, "drawing from an unshuffled deck")?;
            }
            handle_deck_command(table.seed, table.sets, shuffle, draw, out)
        }
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Rng { seed } => handle_rng_command(seed, out),
        Commands::Cfg => {
            let resolved = config::load_with_sources()?;
            handle_cfg_command(&resolved, out)
        }
    }
}

/// Resolved configuration with command-line flags applied on top.
fn resolve_table(
    seed: Option<u64>,
    sets: Option<usize>,
    hands: Option<usize>,
) -> Result<Config, CliError> {
    let ConfigResolved { mut config, .. } = config::load_with_sources()?;
    if let Some(s) = seed {
        config.seed = Some(s);
    }
    if let Some(n) = sets {
        config.sets = n;
    }
    if let Some(n) = hands {
        config.hands = n;
    }
    config::validate(&config)?;
    Ok(config)
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }

    if writeln!(err, "{}", e).is_err()
        || writeln!(err).is_err()
        || writeln!(err, "Usage: shoe <command> [options]\n").is_err()
        || writeln!(err, "Commands:").is_err()
    {
        return exit_code::ERROR;
    }
    for c in COMMANDS {
        if writeln!(err, "  {}", c).is_err() {
            return exit_code::ERROR;
        }
    }
    let _ = writeln!(err, "\nFor full help, run: shoe --help");
    exit_code::ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_every_subcommand() {
        let commands = vec![
            vec!["shoe", "deal"],
            vec!["shoe", "deal", "--seed", "1", "--sets", "6", "--hands", "4", "--json"],
            vec!["shoe", "deck", "--shuffle", "--draw", "3"],
            vec!["shoe", "eval", "AS", "KH"],
            vec!["shoe", "rng", "--seed", "9"],
            vec!["shoe", "cfg"],
            vec!["shoe", "-v", "cfg"],
        ];
        for cmd_args in commands {
            let result = ShoeCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }

    #[test]
    fn test_eval_requires_cards() {
        assert!(ShoeCli::try_parse_from(["shoe", "eval"]).is_err());
    }

    #[test]
    fn test_usage_error_lists_commands() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["shoe", "shuffle-all"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let stderr = String::from_utf8(err).unwrap();
        assert!(stderr.contains("Commands:"));
        for c in COMMANDS {
            assert!(stderr.contains(c), "missing {}", c);
        }
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert_eq!(run(["shoe", "--help"], &mut out, &mut err), exit_code::SUCCESS);
        let stdout = String::from_utf8(out).unwrap();
        assert!(stdout.contains("deal"));
        assert!(err.is_empty());
    }
}
