//! Session tests - tap handling, glyph cache, new game

use concentration::core::FlipOutcome;
use concentration::engine::{GameConfig, Session};

fn session(pairs: usize, seed: u64) -> Session {
    Session::new(&GameConfig {
        pairs,
        seed,
        ..GameConfig::default()
    })
    .unwrap()
}

#[test]
fn test_glyph_is_stable_across_flips_of_the_same_identifier() {
    let mut s = session(8, 404);
    let cards = s.game().cards().to_vec();
    let id = cards[0].identifier;
    let other = (1..cards.len())
        .find(|&i| cards[i].identifier != id)
        .unwrap();

    s.tap_card(0);
    let first = s.glyph_for(id);
    assert!(first.is_some());

    // Hide card 0 again with a mismatch, then show it once more.
    s.tap_card(other);
    assert!(!s.game().cards()[0].is_face_up);
    s.tap_card(0);

    assert_eq!(s.glyph_for(id), first);
    assert_eq!(s.snapshot().glyph_at(0), first);
}

#[test]
fn test_taps_follow_game_rules() {
    let mut s = session(8, 7);
    let cards = s.game().cards().to_vec();
    let partner = (1..cards.len())
        .find(|&i| cards[i].identifier == cards[0].identifier)
        .unwrap();

    assert_eq!(s.tap_card(0), Some(FlipOutcome::Exposed { index: 0 }));
    assert_eq!(s.tap_card(0), Some(FlipOutcome::Ignored));
    assert_eq!(
        s.tap_card(partner),
        Some(FlipOutcome::Matched {
            first: 0,
            second: partner
        })
    );
    assert_eq!(s.score_label(), "Score: 2");
    assert_eq!(s.flips_label(), "Flips: 2");
}

#[test]
fn test_out_of_range_tap_is_silently_ignored() {
    let mut s = session(3, 1);
    let before = s.snapshot();
    assert_eq!(s.tap_card(6), None);
    assert_eq!(s.tap_card(1_000), None);
    assert_eq!(s.snapshot(), before);
}

#[test]
fn test_new_game_picks_themes_and_resets() {
    let mut s = session(8, 12);
    let mut seen = std::collections::HashSet::new();
    seen.insert(s.theme());

    for _ in 0..200 {
        s.tap_card(0);
        s.tap_card(1);
        s.new_game();

        assert!(s.glyphs().is_empty());
        assert_eq!(s.game().flips_count(), 0);
        assert_eq!(s.game().score(), 0);
        assert_eq!(s.game().cards().len(), 16);
        seen.insert(s.theme());
    }

    assert_eq!(seen.len(), 6);
}
