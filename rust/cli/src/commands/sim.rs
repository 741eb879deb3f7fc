//! Unattended play over whole decks.
//!
//! Each deck is dealt until it is exhausted (26 rounds), then the session is
//! explicitly reshuffled before the next deck.

use crate::error::CliError;
use crate::validation::validate_decks;
use casino_war_engine::engine::{RoundController, RoundResult};
use casino_war_engine::game::Phase;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeckSummary {
    pub deck: u32,
    pub rounds: u32,
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub ties: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub seed: u64,
    pub decks: Vec<DeckSummary>,
    pub totals: DeckSummary,
}

pub fn handle_sim_command(
    decks: u32,
    seed: u64,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let decks = validate_decks(decks).map_err(CliError::InvalidInput)?;
    let report = run_sim(decks, seed)?;

    if json {
        let s = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
        return Ok(());
    }

    writeln!(out, "sim: decks={} seed={}", decks, seed)?;
    for d in &report.decks {
        writeln!(
            out,
            "Deck {}: rounds={} player={} dealer={} ties={}",
            d.deck, d.rounds, d.player_wins, d.dealer_wins, d.ties
        )?;
    }
    let t = &report.totals;
    writeln!(
        out,
        "Total: rounds={} player={} dealer={} ties={}",
        t.rounds, t.player_wins, t.dealer_wins, t.ties
    )?;
    Ok(())
}

fn run_sim(decks: u32, seed: u64) -> Result<SimReport, CliError> {
    let mut controller = RoundController::with_seed(seed);
    let mut summaries = Vec::new();
    let mut totals = DeckSummary::default();

    for deck in 1..=decks {
        if deck > 1 {
            controller.reshuffle();
        }
        let mut summary = DeckSummary {
            deck,
            ..DeckSummary::default()
        };
        while controller.phase() == Phase::Ready {
            let outcome = controller.deal()?;
            summary.rounds += 1;
            if outcome.result == RoundResult::Tie {
                summary.ties += 1;
            }
        }
        summary.player_wins = controller.player_wins();
        summary.dealer_wins = controller.dealer_wins();
        tracing::debug!(deck, ties = summary.ties, "deck finished");

        totals.rounds += summary.rounds;
        totals.player_wins += summary.player_wins;
        totals.dealer_wins += summary.dealer_wins;
        totals.ties += summary.ties;
        summaries.push(summary);
    }
    totals.deck = decks;

    Ok(SimReport {
        seed,
        decks: summaries,
        totals,
    })
}
