//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game rules, session glue, terminal rendering).
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MATCH_BONUS` | 2 | Points awarded when a pair is matched |
//! | `MISMATCH_PENALTY` | 1 | Points removed when two different cards are shown |
//! | `EMOJIS_PER_THEME` | 8 | Glyphs available in every theme |
//! | `MAX_PAIRS` | 8 | Largest deck a theme can skin |
//! | `MAX_CARDS` | 16 | `2 * MAX_PAIRS` |
//!
//! # Examples
//!
//! ```
//! use concentration_types::{Card, GameAction, MAX_CARDS, MAX_PAIRS};
//!
//! let card = Card::new(3);
//! assert!(!card.is_face_up);
//! assert!(!card.is_matched);
//!
//! assert!(GameAction::MoveUp.is_movement());
//! assert!(!GameAction::Flip.is_movement());
//! assert_eq!(MAX_CARDS, 2 * MAX_PAIRS);
//! ```

/// Points added to the score when a pair is matched.
pub const MATCH_BONUS: i32 = 2;

/// Points removed from the score when two different cards are shown.
pub const MISMATCH_PENALTY: i32 = 1;

/// Number of glyphs every theme provides (one per identifier).
pub const EMOJIS_PER_THEME: usize = 8;

/// Largest pair count a game may be created with.
///
/// Identifiers index directly into a theme's glyph table, so the deck can never
/// have more pairs than the smallest theme has glyphs.
pub const MAX_PAIRS: usize = EMOJIS_PER_THEME;

/// Largest deck size (two cards per pair).
pub const MAX_CARDS: usize = MAX_PAIRS * 2;

/// Pair count used when nothing else is configured.
pub const DEFAULT_PAIRS: usize = 8;

/// Cards per row in the terminal grid when nothing else is configured.
pub const DEFAULT_COLUMNS: u16 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_limits_follow_theme_size() {
        assert_eq!(MAX_PAIRS, EMOJIS_PER_THEME);
        assert_eq!(MAX_CARDS, 16);
        assert!(DEFAULT_PAIRS <= MAX_PAIRS);
        assert!(DEFAULT_PAIRS > 0);
    }

    #[test]
    fn score_rules() {
        assert_eq!(MATCH_BONUS, 2);
        assert_eq!(MISMATCH_PENALTY, 1);
    }
}

/// A single card in the deck.
///
/// The two cards of a pair share the same `identifier`. `is_matched` never
/// reverts to `false` within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub identifier: u8,
    pub is_face_up: bool,
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    pub const fn new(identifier: u8) -> Self {
        Self {
            identifier,
            is_face_up: false,
            is_matched: false,
        }
    }

    /// Face-up and not yet matched (awaiting a second flip).
    pub const fn is_exposed(&self) -> bool {
        self.is_face_up && !self.is_matched
    }

    /// Whether a flip on this card would change anything.
    pub const fn is_flippable(&self) -> bool {
        !self.is_face_up && !self.is_matched
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Relative brightness in 0..=255 (integer Rec. 601 weights).
    ///
    /// Used to pick readable label colors on top of theme backgrounds.
    pub const fn luma(&self) -> u8 {
        let y = (self.r as u32 * 299 + self.g as u32 * 587 + self.b as u32 * 114) / 1000;
        y as u8
    }

    pub const fn is_dark(&self) -> bool {
        self.luma() < 128
    }
}

/// Player actions that drive a session.
///
/// These actions are produced by keyboard input and consumed by the front end.
/// Card selection itself is positional (cursor or mouse), so flipping is a
/// single action applied to the selected card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the selection one card left
    MoveLeft,
    /// Move the selection one card right
    MoveRight,
    /// Move the selection one row up
    MoveUp,
    /// Move the selection one row down
    MoveDown,
    /// Flip the selected card
    Flip,
    /// Pick a new theme and deal a fresh deck
    NewGame,
}

impl GameAction {
    /// Whether the action only moves the selection.
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::MoveUp | GameAction::MoveDown
        )
    }
}
