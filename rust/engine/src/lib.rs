//! # casino-war-engine: Casino War Game Engine Core
//!
//! Deck and round engine for a two-hand comparison game: one card each to the
//! player and the dealer, highest rank wins, equal ranks tie. Shuffles are
//! drawn from an injectable RNG so sessions can be replayed from a seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and rank values
//! - [`deck`] - 52-card deck building, shuffling and dealing
//! - [`engine`] - Round controller: deal, compare, tally, reshuffle
//! - [`game`] - Session state and phase
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use casino_war_engine::engine::{RoundController, RoundResult};
//!
//! let mut controller = RoundController::with_seed(42);
//! let outcome = controller.deal().unwrap();
//! match outcome.result {
//!     RoundResult::PlayerWin => println!("Player wins with {}", outcome.player_card),
//!     RoundResult::DealerWin => println!("Dealer wins with {}", outcome.dealer_card),
//!     RoundResult::Tie => println!("Tie!"),
//! }
//! ```
//!
//! ## Deterministic Shuffles
//!
//! ```rust
//! use casino_war_engine::deck::Deck;
//!
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! assert_eq!(deck1.cards(), deck2.cards());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
