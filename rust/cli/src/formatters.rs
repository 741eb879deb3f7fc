//! Card, round, and tally formatters for terminal display.
//!
//! Pure functions turning engine values into display text. Unicode suit
//! symbols are used where the terminal supports them, with an ASCII fallback.
//!
//! ## Example
//!
//! ```rust
//! use casino_war_engine::cards::{Card, Rank, Suit};
//! use casino_war_cli::formatters::format_card;
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use casino_war_engine::cards::{Card, Rank, Suit};
use casino_war_engine::engine::{RoundOutcome, RoundResult};
use std::path::{Path, PathBuf};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as ♥ ♦ ♣ ♠, or h d c s without Unicode support.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a single character (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

/// Format a Card as a string like "A♠" (Unicode) or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

pub fn format_result(result: RoundResult) -> &'static str {
    match result {
        RoundResult::PlayerWin => "Player wins!",
        RoundResult::DealerWin => "Dealer wins!",
        RoundResult::Tie => "Tie!",
    }
}

pub fn format_tallies(player_wins: u32, dealer_wins: u32, cards_remaining: usize) -> String {
    format!(
        "Player wins: {}  Dealer wins: {}  Cards left: {}",
        player_wins, dealer_wins, cards_remaining
    )
}

/// One-line summary of a round, e.g. "Dealer K♥ vs Player 5♣ -> Dealer wins!".
pub fn format_outcome(outcome: &RoundOutcome) -> String {
    format!(
        "Dealer {} vs Player {} -> {}",
        format_card(&outcome.dealer_card),
        format_card(&outcome.player_card),
        format_result(outcome.result)
    )
}

/// Resolves a card's asset key to an image path under `asset_dir`.
pub fn asset_path(asset_dir: &str, card: &Card) -> PathBuf {
    Path::new(asset_dir).join(format!("{}.png", card.asset_key()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(result: RoundResult) -> RoundOutcome {
        RoundOutcome {
            player_card: Card::new(Suit::Hearts, Rank::King),
            dealer_card: Card::new(Suit::Clubs, Rank::Five),
            result,
            player_wins: 1,
            dealer_wins: 0,
            cards_remaining: 50,
        }
    }

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(&Rank::Ace), "A");
        assert_eq!(format_rank(&Rank::Ten), "T");
        assert_eq!(format_rank(&Rank::Two), "2");
    }

    #[test]
    fn test_format_card() {
        let card = Card::new(Suit::Hearts, Rank::Queen);
        let formatted = format_card(&card);
        assert!(formatted == "Q♥" || formatted == "Qh");
    }

    #[test]
    fn test_format_result_texts() {
        assert_eq!(format_result(RoundResult::PlayerWin), "Player wins!");
        assert_eq!(format_result(RoundResult::DealerWin), "Dealer wins!");
        assert_eq!(format_result(RoundResult::Tie), "Tie!");
    }

    #[test]
    fn test_format_outcome_lists_dealer_first() {
        let line = format_outcome(&outcome(RoundResult::PlayerWin));
        assert!(line.starts_with("Dealer 5"));
        assert!(line.contains("vs Player K"));
        assert!(line.ends_with("-> Player wins!"));
    }

    #[test]
    fn test_format_tallies() {
        assert_eq!(
            format_tallies(3, 2, 42),
            "Player wins: 3  Dealer wins: 2  Cards left: 42"
        );
    }

    #[test]
    fn test_asset_path_uses_asset_key() {
        let card = Card::new(Suit::Spades, Rank::Ace);
        assert_eq!(
            asset_path("Images", &card),
            Path::new("Images").join("ace_of_spades.png")
        );
    }
}
