use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck exhausted ({remaining} card(s) left), reshuffle before dealing")]
    DeckExhausted { remaining: usize },
    #[error("Cannot deal from an empty deck")]
    EmptyDeck,
    #[error("Invalid deck order: {0}")]
    InvalidDeckOrder(String),
}
