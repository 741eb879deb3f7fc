//! Input validation for interactive play.
//!
//! Turns raw lines typed at the `play` prompt into session commands, with
//! user-facing messages for anything unrecognized.

/// Something the player asked the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Deal,
    Reshuffle,
    Status,
}

/// Result type for parsing user input at the play prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Command(SessionCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a session command (case-insensitive).
///
/// - "" , "d" or "deal" → Deal (a bare Enter deals, like pressing the button)
/// - "r", "reshuffle" or "shuffle" → Reshuffle
/// - "s" or "status" → Status
/// - "q" or "quit" → Quit
///
/// # Example
///
/// ```rust
/// # use casino_war_cli::validation::{parse_session_command, ParseResult, SessionCommand};
/// assert_eq!(parse_session_command("deal"), ParseResult::Command(SessionCommand::Deal));
/// assert_eq!(parse_session_command("Q"), ParseResult::Quit);
/// ```
pub fn parse_session_command(input: &str) -> ParseResult {
    match input.trim().to_lowercase().as_str() {
        "" | "d" | "deal" => ParseResult::Command(SessionCommand::Deal),
        "r" | "reshuffle" | "shuffle" => ParseResult::Command(SessionCommand::Reshuffle),
        "s" | "status" => ParseResult::Command(SessionCommand::Status),
        "q" | "quit" => ParseResult::Quit,
        other => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Use deal, reshuffle, status or q.",
            other
        )),
    }
}

/// Upper bound for `sim --decks`; keeps per-run totals well inside `u32`.
pub const MAX_DECKS: u32 = 100_000;

/// Checks the `--decks` argument of `sim`.
pub fn validate_decks(decks: u32) -> Result<u32, String> {
    if decks == 0 {
        Err("decks must be >= 1".to_string())
    } else if decks > MAX_DECKS {
        Err(format!("decks must be <= {}", MAX_DECKS))
    } else {
        Ok(decks)
    }
}
