use std::collections::HashSet;

use casino_war_engine::cards::{all_ranks, rank_value, Card, Rank, Suit};

#[test]
fn rank_values_match_face_values_with_ace_high() {
    let expected = [
        (Rank::Ace, 14),
        (Rank::King, 13),
        (Rank::Queen, 12),
        (Rank::Jack, 11),
        (Rank::Ten, 10),
        (Rank::Nine, 9),
        (Rank::Eight, 8),
        (Rank::Seven, 7),
        (Rank::Six, 6),
        (Rank::Five, 5),
        (Rank::Four, 4),
        (Rank::Three, 3),
        (Rank::Two, 2),
    ];
    for (rank, value) in expected {
        assert_eq!(rank_value(&Card::new(Suit::Hearts, rank)), value, "{:?}", rank);
    }
}

#[test]
fn rank_value_is_injective_and_strictly_ordered() {
    let values: Vec<u8> = all_ranks().iter().map(|r| r.value()).collect();
    let unique: HashSet<u8> = values.iter().copied().collect();
    assert_eq!(unique.len(), 13);

    let mut by_value = all_ranks().to_vec();
    by_value.sort_by_key(|r| r.value());
    for pair in by_value.windows(2) {
        assert!(pair[0].value() < pair[1].value());
        // derived ordering agrees with the comparison weight
        assert!(pair[0] < pair[1]);
    }
    assert_eq!(by_value.last(), Some(&Rank::Ace));
    assert_eq!(by_value.first(), Some(&Rank::Two));
}

#[test]
fn suit_does_not_affect_rank_value() {
    let spade = Card::new(Suit::Spades, Rank::Queen);
    let club = Card::new(Suit::Clubs, Rank::Queen);
    assert_eq!(rank_value(&spade), rank_value(&club));
}

#[test]
fn asset_keys_are_lowercase_rank_of_suit() {
    assert_eq!(Card::new(Suit::Spades, Rank::Ace).asset_key(), "ace_of_spades");
    assert_eq!(Card::new(Suit::Hearts, Rank::Queen).asset_key(), "queen_of_hearts");
    assert_eq!(Card::new(Suit::Diamonds, Rank::Two).asset_key(), "2_of_diamonds");
}
