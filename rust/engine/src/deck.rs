use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Number of cards in a freshly built deck.
pub const DECK_SIZE: usize = 52;

/// Builds a fresh 52-card deck and shuffles it with `rng`.
pub fn build_deck<R: Rng + ?Sized>(rng: &mut R) -> Deck {
    Deck::build(rng)
}

/// Single 52-card deck in dealing order.
///
/// Cards are only ever removed; a deck is never refilled; build a new one instead.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// Canonical order permuted by a uniform (Fisher-Yates) shuffle drawn from `rng`.
    pub fn build<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards, position: 0 }
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::build(&mut rng)
    }

    /// Uses `cards` as the dealing order. The order must contain each of the
    /// 52 cards exactly once.
    pub fn from_order(cards: Vec<Card>) -> Result<Self, GameError> {
        if cards.len() != DECK_SIZE {
            return Err(GameError::InvalidDeckOrder(format!(
                "expected {} cards, got {}",
                DECK_SIZE,
                cards.len()
            )));
        }
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for c in &cards {
            if !seen.insert(*c) {
                return Err(GameError::InvalidDeckOrder(format!("duplicate card {}", c)));
            }
        }
        Ok(Self { cards, position: 0 })
    }

    /// Removes and returns the next card.
    pub fn deal_card(&mut self) -> Result<Card, GameError> {
        match self.cards.get(self.position) {
            Some(&c) => {
                self.position += 1;
                Ok(c)
            }
            None => {
                tracing::error!("deal attempted on an empty deck");
                Err(GameError::EmptyDeck)
            }
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.position
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Cards removed since this deck was built, in dealing order.
    pub fn dealt(&self) -> &[Card] {
        &self.cards[..self.position]
    }

    /// Cards still in the deck, next card first.
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }
}
