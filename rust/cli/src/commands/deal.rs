//! Deal command handler for a single round.
//!
//! Builds a fresh session, deals one round, and prints both cards and the
//! result. Supports seeding for deterministic output.

use crate::error::CliError;
use crate::formatters::{asset_path, format_card, format_result};
use casino_war_engine::engine::RoundController;
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - RNG seed for the session's shuffle
/// * `json` - Emit the round as a JSON document instead of text
/// * `asset_dir` - When set, also print each card's image path under this directory
/// * `out` - Output stream for command results
pub fn handle_deal_command(
    seed: u64,
    json: bool,
    asset_dir: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut controller = RoundController::with_seed(seed);
    let outcome = controller.deal()?;

    if json {
        let mut doc = serde_json::json!({
            "seed": seed,
            "outcome": outcome,
        });
        if let Some(dir) = asset_dir {
            doc["player_asset"] = asset_path(dir, &outcome.player_card)
                .display()
                .to_string()
                .into();
            doc["dealer_asset"] = asset_path(dir, &outcome.dealer_card)
                .display()
                .to_string()
                .into();
        }
        let s = serde_json::to_string_pretty(&doc).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
        return Ok(());
    }

    writeln!(
        out,
        "Dealer: {} ({})",
        format_card(&outcome.dealer_card),
        outcome.dealer_card
    )?;
    writeln!(
        out,
        "Player: {} ({})",
        format_card(&outcome.player_card),
        outcome.player_card
    )?;
    writeln!(out, "Result: {}", format_result(outcome.result))?;
    if let Some(dir) = asset_dir {
        writeln!(
            out,
            "Dealer asset: {}",
            asset_path(dir, &outcome.dealer_card).display()
        )?;
        writeln!(
            out,
            "Player asset: {}",
            asset_path(dir, &outcome.player_card).display()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_output_format() {
        let mut out = Vec::new();
        handle_deal_command(999, false, None, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3, "Output should have exactly 3 lines");
        assert!(lines[0].starts_with("Dealer:"));
        assert!(lines[1].starts_with("Player:"));
        assert!(lines[2].starts_with("Result:"));
    }

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(12345, false, None, &mut out1).unwrap();
        handle_deal_command(12345, false, None, &mut out2).unwrap();
        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_with_assets() {
        let mut out = Vec::new();
        handle_deal_command(3, false, Some("Images"), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let asset_lines: Vec<&str> = output
            .lines()
            .filter(|l| l.contains(" asset: "))
            .collect();
        assert_eq!(asset_lines.len(), 2);
        assert!(asset_lines.iter().all(|l| l.ends_with(".png")));
        assert!(asset_lines.iter().all(|l| l.contains("_of_")));
    }

    #[test]
    fn test_deal_command_json() {
        let mut out = Vec::new();
        handle_deal_command(42, true, Some("cards"), &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["seed"], 42);
        assert_eq!(v["outcome"]["cards_remaining"], 50);
        let result = v["outcome"]["result"].as_str().unwrap();
        assert!(["player_win", "dealer_win", "tie"].contains(&result));
        assert!(v["player_asset"].as_str().unwrap().starts_with("cards"));
    }
}
