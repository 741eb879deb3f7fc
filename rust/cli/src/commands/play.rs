//! # Play Command
//!
//! Interactive Casino War session driven by lines on stdin.
//!
//! Each line is one button press: deal a round, reshuffle the deck, show
//! the tallies, or quit. An exhausted deck is reported as a prompt to
//! reshuffle and the session carries on; the reshuffle is never automatic.
//! Round numbers and the tie count follow the current deck, like the win
//! tallies, so all of them restart on reshuffle.

use crate::error::CliError;
use crate::formatters::{format_outcome, format_tallies};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, SessionCommand, parse_session_command};
use casino_war_engine::engine::{RoundController, RoundResult};
use casino_war_engine::errors::GameError;
use std::io::{BufRead, Write};

/// Handle the play command: interactive rounds until quit or EOF.
///
/// # Arguments
///
/// * `seed` - RNG seed for every shuffle of the session
/// * `out` - Output stream for game display
/// * `err` - Error stream for invalid input messages
/// * `stdin` - Input stream for player commands
pub fn handle_play_command(
    seed: u64,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    writeln!(out, "play: seed={}", seed)?;

    let mut controller = RoundController::with_seed(seed);
    let mut ties = 0u32;

    loop {
        ui::prompt_command(out)?;
        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        match parse_session_command(&line) {
            ParseResult::Command(SessionCommand::Deal) => match controller.deal() {
                Ok(outcome) => {
                    if outcome.result == RoundResult::Tie {
                        ties += 1;
                    }
                    writeln!(
                        out,
                        "Round {}: {}",
                        controller.snapshot().rounds_played,
                        format_outcome(&outcome)
                    )?;
                    writeln!(
                        out,
                        "{}",
                        format_tallies(
                            outcome.player_wins,
                            outcome.dealer_wins,
                            outcome.cards_remaining
                        )
                    )?;
                }
                Err(GameError::DeckExhausted { .. }) => ui::prompt_reshuffle(out)?,
                Err(e) => return Err(e.into()),
            },
            ParseResult::Command(SessionCommand::Reshuffle) => {
                controller.reshuffle();
                ties = 0;
                writeln!(
                    out,
                    "Deck reshuffled. Cards left: {}",
                    controller.cards_remaining()
                )?;
            }
            ParseResult::Command(SessionCommand::Status) => {
                writeln!(
                    out,
                    "{}",
                    format_tallies(
                        controller.player_wins(),
                        controller.dealer_wins(),
                        controller.cards_remaining()
                    )
                )?;
            }
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Rounds played: {} (ties: {})",
        controller.snapshot().rounds_played,
        ties
    )?;
    writeln!(
        out,
        "Final {}",
        format_tallies(
            controller.player_wins(),
            controller.dealer_wins(),
            controller.cards_remaining()
        )
    )?;
    Ok(())
}
