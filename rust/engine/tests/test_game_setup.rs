use std::collections::HashSet;

use casino_war_engine::engine::RoundController;
use casino_war_engine::game::Phase;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn new_session_starts_ready_with_full_deck_and_zero_tallies() {
    let ctl = RoundController::with_seed(1234);
    assert_eq!(ctl.phase(), Phase::Ready);
    assert_eq!(ctl.cards_remaining(), 52);
    assert_eq!(ctl.player_wins(), 0);
    assert_eq!(ctl.dealer_wins(), 0);
    let snap = ctl.snapshot();
    assert_eq!(snap.rounds_played, 0);
    assert_eq!(snap.phase, Phase::Ready);
}

#[test]
fn same_seed_produces_deterministic_deal_order() {
    let mut c1 = RoundController::with_seed(42);
    let mut c2 = RoundController::with_seed(42);
    for _ in 0..5 {
        assert_eq!(c1.deal().unwrap(), c2.deal().unwrap());
    }
    c1.reshuffle();
    c2.reshuffle();
    assert_eq!(c1.deal().unwrap(), c2.deal().unwrap());
}

#[test]
fn injected_rng_drives_the_session() {
    let mut c1 = RoundController::with_rng(ChaCha8Rng::seed_from_u64(3));
    let mut c2 = RoundController::with_rng(ChaCha8Rng::seed_from_u64(3));
    for _ in 0..26 {
        assert_eq!(c1.deal().unwrap(), c2.deal().unwrap());
    }
    assert_eq!(c1.snapshot(), c2.snapshot());
}

#[test]
fn no_card_is_dealt_twice_from_one_deck() {
    for seed in [0u64, 7, 99, 2024] {
        let mut ctl = RoundController::with_seed(seed);
        let mut seen = HashSet::new();
        for round in 0..26 {
            let o = ctl.deal().unwrap();
            assert!(seen.insert(o.player_card), "seed {seed} round {round}");
            assert!(seen.insert(o.dealer_card), "seed {seed} round {round}");
        }
        assert_eq!(seen.len(), 52);
        let snap = ctl.snapshot();
        assert_eq!(snap.cards_remaining, 0);
        assert_eq!(snap.rounds_played, 26);
    }
}
