use std::cmp::Ordering;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{rank_value, Card};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{Phase, SessionSnapshot, SessionState};

/// Who took a round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundResult {
    PlayerWin,
    DealerWin,
    Tie,
}

impl RoundResult {
    /// Compares rank values only; suits never break ties.
    pub fn compare(player: &Card, dealer: &Card) -> Self {
        match rank_value(player).cmp(&rank_value(dealer)) {
            Ordering::Greater => RoundResult::PlayerWin,
            Ordering::Less => RoundResult::DealerWin,
            Ordering::Equal => RoundResult::Tie,
        }
    }
}

/// Everything a front-end needs to render one round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub player_card: Card,
    pub dealer_card: Card,
    pub result: RoundResult,
    /// Tallies after this round
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub cards_remaining: usize,
}

/// Runs Casino War rounds against a single deck and keeps the session tallies.
///
/// The controller owns its random source so every reshuffle is reproducible
/// from the seed it was created with.
///
/// # Examples
///
/// ```
/// use casino_war_engine::engine::RoundController;
/// use casino_war_engine::game::Phase;
///
/// let mut controller = RoundController::with_seed(12345);
/// let outcome = controller.deal().expect("fresh deck has cards");
/// assert_eq!(outcome.cards_remaining, 50);
///
/// for _ in 0..25 {
///     controller.deal().unwrap();
/// }
/// assert_eq!(controller.phase(), Phase::Exhausted);
/// assert!(controller.deal().is_err());
///
/// controller.reshuffle();
/// assert_eq!(controller.cards_remaining(), 52);
/// ```
///
/// The session itself, and with it the undealt deck order, stays private:
///
/// ```compile_fail
/// use casino_war_engine::engine::RoundController;
///
/// let controller = RoundController::with_seed(1);
/// let _next = controller.session;
/// ```
#[derive(Debug)]
pub struct RoundController<R = ChaCha20Rng> {
    /// Source of randomness for every deck this session builds
    rng: R,
    session: SessionState,
}

impl RoundController<ChaCha20Rng> {
    /// New session seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl Default for RoundController<ChaCha20Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RoundController<R> {
    pub fn with_rng(mut rng: R) -> Self {
        let deck = Deck::build(&mut rng);
        Self {
            rng,
            session: SessionState::new(deck),
        }
    }

    /// Starts the session from a prepared deck. Later reshuffles draw from `rng`.
    pub fn from_deck(deck: Deck, rng: R) -> Self {
        Self {
            rng,
            session: SessionState::new(deck),
        }
    }

    /// Deals one card to the player, then one to the dealer, and scores the round.
    ///
    /// Fails with [`GameError::DeckExhausted`] when fewer than two cards are
    /// left; nothing is mutated in that case.
    pub fn deal(&mut self) -> Result<RoundOutcome, GameError> {
        if self.session.phase() == Phase::Exhausted {
            let remaining = self.session.cards_remaining();
            tracing::warn!(remaining, "deal rejected, deck exhausted");
            return Err(GameError::DeckExhausted { remaining });
        }

        let deck = self.session.deck_mut();
        let player_card = deck.deal_card()?;
        let dealer_card = deck.deal_card()?;

        let result = RoundResult::compare(&player_card, &dealer_card);
        match result {
            RoundResult::PlayerWin => self.session.record_player_win(),
            RoundResult::DealerWin => self.session.record_dealer_win(),
            RoundResult::Tie => {}
        }

        let outcome = RoundOutcome {
            player_card,
            dealer_card,
            result,
            player_wins: self.session.player_wins(),
            dealer_wins: self.session.dealer_wins(),
            cards_remaining: self.session.cards_remaining(),
        };
        tracing::debug!(
            player = %player_card,
            dealer = %dealer_card,
            result = ?result,
            remaining = outcome.cards_remaining,
            "round dealt"
        );
        Ok(outcome)
    }

    /// Replaces the deck with a fresh shuffle and zeroes both tallies.
    pub fn reshuffle(&mut self) {
        let previous = self.session.snapshot();
        self.session = SessionState::new(Deck::build(&mut self.rng));
        tracing::info!(
            player_wins = previous.player_wins,
            dealer_wins = previous.dealer_wins,
            discarded = previous.cards_remaining,
            "deck reshuffled"
        );
    }

    pub fn player_wins(&self) -> u32 {
        self.session.player_wins()
    }

    pub fn dealer_wins(&self) -> u32 {
        self.session.dealer_wins()
    }

    pub fn cards_remaining(&self) -> usize {
        self.session.cards_remaining()
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }
}
