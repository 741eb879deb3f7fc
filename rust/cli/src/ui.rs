//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, including error messages and prompts.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Shown instead of a round when the deck can no longer deal.
pub fn prompt_reshuffle(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        out,
        "Deck exhausted. Type 'reshuffle' (or 'r') to start a fresh deck."
    )
}

pub fn prompt_command(out: &mut dyn Write) -> std::io::Result<()> {
    write!(out, "Command (deal/reshuffle/status/q): ")?;
    out.flush()
}
