//! Theme tests - static tables and uniform random selection

use concentration::core::{CoreError, Theme, ThemeProvider};
use concentration::types::{EMOJIS_PER_THEME, MAX_PAIRS};

#[test]
fn test_pick_random_is_uniform() {
    let mut provider = ThemeProvider::new(20180116);
    let mut counts = [0u32; 6];
    for _ in 0..60_000 {
        let theme = provider.pick_random();
        let i = Theme::ALL.iter().position(|&t| t == theme).unwrap();
        counts[i] += 1;
    }

    // Expected 10_000 each; 600 is well over 6 standard deviations.
    for (theme, &n) in Theme::ALL.iter().zip(&counts) {
        assert!((9_400..=10_600).contains(&n), "{} picked {} times", theme, n);
    }
}

#[test]
fn test_every_identifier_has_a_glyph_in_every_theme() {
    for theme in Theme::ALL {
        assert_eq!(theme.emojis().len(), EMOJIS_PER_THEME);
        for id in 0..MAX_PAIRS as u8 {
            assert!(ThemeProvider::glyph(theme, id).is_ok());
        }
    }
}

#[test]
fn test_glyph_out_of_range() {
    assert_eq!(
        ThemeProvider::glyph(Theme::Sports, EMOJIS_PER_THEME as u8),
        Err(CoreError::OutOfRange {
            index: EMOJIS_PER_THEME,
            len: EMOJIS_PER_THEME
        })
    );
}

#[test]
fn test_theme_tables() {
    assert_eq!(Theme::Animals.emojis()[0], "🦊");
    assert_eq!(Theme::Flags.emoji(2), Some("🇯🇵"));
    assert_eq!(Theme::Faces.card_color(), concentration::types::Rgb::new(255, 147, 0));
    assert_eq!(
        Theme::Appliances.background_color(),
        concentration::types::Rgb::new(23, 0, 77)
    );
}
