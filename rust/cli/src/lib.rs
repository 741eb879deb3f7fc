//! # Casino War CLI Library
//!
//! Terminal front-end for the Casino War engine. It owns the presentation:
//! reading commands, rendering rounds and tallies, resolving card images,
//! while the engine owns every game rule.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the subcommand;
//! [`run_with_input`] does the same with an explicit input stream.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["casino-war", "sim", "--decks", "10", "--seed", "7"];
//! let code = casino_war_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive session (deal / reshuffle / status / quit)
//! - `deal`: Deal a single round from a fresh deck
//! - `sim`: Play whole decks unattended
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{CasinoWarCli, Commands};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "sim", "cfg"];

/// Main entry point for the CLI application, reading interactive input from stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], with interactive input taken from `input`.
///
/// # Example
///
/// ```
/// use std::io::{self, Cursor};
/// let mut input = Cursor::new("deal\nq\n");
/// let code = casino_war_cli::run_with_input(
///     ["casino-war", "play", "--seed", "42"],
///     &mut input,
///     &mut io::stdout(),
///     &mut io::stderr(),
/// );
/// assert_eq!(code, 0);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CasinoWarCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            let _ = ui::write_error(err, &CliError::Config(e.to_string()).to_string());
            return exit_code::ERROR;
        }
    };
    logging::init_logging(&resolved.config.log_filter);

    let seed_or_config = |seed: Option<u64>| {
        seed.or(resolved.config.seed)
            .unwrap_or_else(rand::random)
    };

    let result = match cli.cmd {
        Commands::Play { seed } => handle_play_command(seed_or_config(seed), out, err, input),
        Commands::Deal { seed, json, assets } => {
            let asset_dir = assets.then_some(resolved.config.asset_dir.as_str());
            handle_deal_command(seed_or_config(seed), json, asset_dir, out)
        }
        Commands::Sim { decks, seed, json } => {
            handle_sim_command(decks, seed_or_config(seed), json, out)
        }
        Commands::Cfg => handle_cfg_command(&resolved, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            let _ = write_usage(e, err);
            exit_code::ERROR
        }
    }
}

fn write_usage(e: clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "Casino War CLI")?;
    writeln!(err, "Usage: casino-war <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: casino-war --help")
}
