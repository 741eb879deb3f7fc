use std::collections::HashSet;

use casino_war_engine::cards::{all_ranks, all_suits, full_deck, Card};
use casino_war_engine::deck::{build_deck, Deck, DECK_SIZE};
use casino_war_engine::errors::GameError;
use rand::SeedableRng;
use rand_chacha::{ChaCha20Rng, ChaCha8Rng};

#[test]
fn canonical_deck_is_suit_major_ace_first() {
    let cards = full_deck();
    assert_eq!(cards.len(), 52);
    assert_eq!(cards[0].to_string(), "Ace of Spades");
    assert_eq!(cards[12].to_string(), "King of Spades");
    assert_eq!(cards[13].to_string(), "Ace of Hearts");
    assert_eq!(cards[51].to_string(), "King of Clubs");
}

#[test]
fn built_deck_has_52_unique_cards_for_many_seeds() {
    let expected: HashSet<Card> = all_suits()
        .iter()
        .flat_map(|&s| all_ranks().map(|r| Card::new(s, r)))
        .collect();
    assert_eq!(expected.len(), 52);

    for seed in 0..64u64 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut deck = build_deck(&mut rng);
        assert_eq!(deck.remaining(), DECK_SIZE);
        let mut seen = HashSet::new();
        for i in 0..DECK_SIZE {
            let c = deck.deal_card().expect("should have 52 cards");
            assert!(seen.insert(c), "card {} duplicated at position {}", c, i);
        }
        assert_eq!(seen, expected, "seed {} omitted a card", seed);
        assert_eq!(deck.deal_card(), Err(GameError::EmptyDeck));
    }
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let d1 = Deck::new_with_seed(12345);
    let d2 = Deck::new_with_seed(12345);
    assert_eq!(d1.cards(), d2.cards(), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let d1 = Deck::new_with_seed(1);
    let d2 = Deck::new_with_seed(2);
    assert_ne!(
        d1.cards(),
        d2.cards(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffle_moves_cards_out_of_canonical_order() {
    let deck = Deck::new_with_seed(77);
    assert_ne!(deck.cards(), full_deck().as_slice());
}

#[test]
fn any_rng_can_drive_the_shuffle() {
    let mut a = ChaCha8Rng::seed_from_u64(5);
    let mut b = ChaCha8Rng::seed_from_u64(5);
    assert_eq!(build_deck(&mut a).cards(), build_deck(&mut b).cards());
}

#[test]
fn first_card_position_is_roughly_uniform() {
    // 52 cards x 5200 shuffles: every card should lead at least a few times.
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let mut leads: std::collections::HashMap<Card, u32> = std::collections::HashMap::new();
    for _ in 0..5200 {
        let deck = build_deck(&mut rng);
        *leads.entry(deck.cards()[0]).or_default() += 1;
    }
    assert_eq!(leads.len(), 52);
    assert!(leads.values().all(|&n| (40..=170).contains(&n)), "{:?}", leads);
}
