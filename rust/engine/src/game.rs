use serde::{Deserialize, Serialize};

use crate::deck::{Deck, DECK_SIZE};

/// Where a session stands with respect to its deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// At least two cards left; a round may be dealt
    Ready,
    /// Fewer than two cards left; a reshuffle is required
    Exhausted,
}

/// Mutable state of one session: the current deck and cumulative win tallies.
/// Cards remaining is always the size of the current deck.
#[derive(Debug, Clone)]
pub struct SessionState {
    deck: Deck,
    player_wins: u32,
    dealer_wins: u32,
}

impl SessionState {
    pub(crate) fn new(deck: Deck) -> Self {
        Self {
            deck,
            player_wins: 0,
            dealer_wins: 0,
        }
    }

    pub(crate) fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }
    pub fn dealer_wins(&self) -> u32 {
        self.dealer_wins
    }
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn phase(&self) -> Phase {
        if self.cards_remaining() >= 2 {
            Phase::Ready
        } else {
            Phase::Exhausted
        }
    }

    pub(crate) fn record_player_win(&mut self) {
        self.player_wins += 1;
    }
    pub(crate) fn record_dealer_win(&mut self) {
        self.dealer_wins += 1;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            player_wins: self.player_wins,
            dealer_wins: self.dealer_wins,
            cards_remaining: self.cards_remaining(),
            rounds_played: (DECK_SIZE - self.cards_remaining()) / 2,
            phase: self.phase(),
        }
    }
}

/// Read-only copy of the session counters for display.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub cards_remaining: usize,
    /// Rounds dealt from the current deck
    pub rounds_played: usize,
    pub phase: Phase,
}
