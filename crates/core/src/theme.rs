//! Theme module - visual themes and uniform random theme selection
//!
//! A theme is a named bundle of two colors and exactly
//! [`EMOJIS_PER_THEME`](crate::types::EMOJIS_PER_THEME) glyphs. Card identifiers
//! index directly into the glyph table, so identifier `n` is always drawn with
//! `theme.emojis()[n]`.

use strum::EnumCount;

use crate::error::CoreError;
use crate::rng::SimpleRng;
use crate::types::{Rgb, EMOJIS_PER_THEME};

/// The fixed set of card themes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumCount,
)]
#[strum(ascii_case_insensitive)]
pub enum Theme {
    Flags,
    Faces,
    Sports,
    Animals,
    Fruits,
    Appliances,
}

impl Theme {
    /// Every theme, in declaration order.
    ///
    /// The length is the derived variant count, so adding a theme without
    /// listing it here fails to compile.
    pub const ALL: [Theme; Theme::COUNT] = [
        Theme::Flags,
        Theme::Faces,
        Theme::Sports,
        Theme::Animals,
        Theme::Fruits,
        Theme::Appliances,
    ];

    /// Color of the back of a face-down card.
    pub const fn card_color(&self) -> Rgb {
        match self {
            Theme::Flags => Rgb::new(205, 205, 205),
            Theme::Faces => Rgb::new(255, 147, 0),
            Theme::Sports => Rgb::new(121, 214, 249),
            Theme::Animals => Rgb::new(236, 60, 26),
            Theme::Fruits => Rgb::new(119, 195, 68),
            Theme::Appliances => Rgb::new(93, 17, 247),
        }
    }

    /// Color of the view behind the cards.
    pub const fn background_color(&self) -> Rgb {
        match self {
            Theme::Flags => Rgb::new(65, 70, 77),
            Theme::Faces => Rgb::new(249, 217, 140),
            Theme::Sports => Rgb::new(15, 46, 63),
            Theme::Animals => Rgb::new(244, 168, 139),
            Theme::Fruits => Rgb::new(184, 226, 151),
            Theme::Appliances => Rgb::new(23, 0, 77),
        }
    }

    /// Glyphs for identifiers `0..EMOJIS_PER_THEME`.
    pub const fn emojis(&self) -> &'static [&'static str; EMOJIS_PER_THEME] {
        match self {
            Theme::Flags => &["🇧🇷", "🇧🇪", "🇯🇵", "🇨🇦", "🇺🇸", "🇵🇪", "🇮🇪", "🇦🇷"],
            Theme::Faces => &["😀", "🙄", "😡", "🤢", "🤡", "😱", "😍", "🤠"],
            Theme::Sports => &["🏌️", "🤼‍♂️", "🥋", "🏹", "🥊", "🏊", "🤾🏿‍♂️", "🏇🏿"],
            Theme::Animals => &["🦊", "🐼", "🦁", "🐘", "🐓", "🦀", "🐷", "🦉"],
            Theme::Fruits => &["🥑", "🍍", "🍆", "🍠", "🍉", "🍇", "🥝", "🍒"],
            Theme::Appliances => &["💻", "🖥", "⌚️", "☎️", "🖨", "🖱", "📱", "⌨️"],
        }
    }

    /// Glyph for a card identifier, if the theme has one.
    pub fn emoji(&self, identifier: u8) -> Option<&'static str> {
        self.emojis().get(identifier as usize).copied()
    }
}

/// Supplies uniformly random themes and bounds-checked glyph lookups.
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    rng: SimpleRng,
}

impl ThemeProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Pick one theme with equal probability over all variants.
    pub fn pick_random(&mut self) -> Theme {
        let i = self.rng.next_range(Theme::COUNT as u32) as usize;
        Theme::ALL[i]
    }

    /// Look up the glyph for `identifier` in `theme`.
    pub fn glyph(theme: Theme, identifier: u8) -> Result<&'static str, CoreError> {
        theme.emoji(identifier).ok_or(CoreError::OutOfRange {
            index: identifier as usize,
            len: EMOJIS_PER_THEME,
        })
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(1)
    }
}
