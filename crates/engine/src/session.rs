//! Session: the glue between player input and the game rules.
//!
//! A session owns the game, the theme provider, the current theme, and the
//! glyph cache. Input handlers call [`Session::tap_card`] and
//! [`Session::new_game`]; renderers read a [`SessionSnapshot`].

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::core::{CoreError, FlipOutcome, GameSnapshot, GameState, Theme, ThemeProvider};
use crate::glyphs::GlyphCache;

/// Mixed into the game seed so theme picks and shuffles use different streams.
const THEME_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    themes: ThemeProvider,
    theme: Theme,
    glyphs: GlyphCache,
    games_started: u32,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub game: GameSnapshot,
    pub theme: Theme,
    pub glyphs: GlyphCache,
}

impl SessionSnapshot {
    /// Glyph to draw for the card at `index`, if it has been revealed.
    pub fn glyph_at(&self, index: usize) -> Option<&'static str> {
        let card = self.game.cards.get(index)?;
        self.glyphs.get(card.identifier)
    }

    pub fn flips_label(&self) -> String {
        flips_label(self.game.flips_count)
    }

    pub fn score_label(&self) -> String {
        score_label(self.game.score)
    }
}

fn flips_label(flips: u32) -> String {
    format!("Flips: {flips}")
}

fn score_label(score: i32) -> String {
    format!("Score: {score}")
}

impl Session {
    pub fn new(config: &GameConfig) -> Result<Self, CoreError> {
        let game = GameState::new(config.pairs, config.seed)?;
        let mut themes = ThemeProvider::new(config.seed ^ THEME_SEED_SALT);
        let theme = themes.pick_random();

        info!(pairs = config.pairs, seed = config.seed, %theme, "session started");

        Ok(Self {
            game,
            themes,
            theme,
            glyphs: GlyphCache::new(),
            games_started: 1,
        })
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn glyphs(&self) -> &GlyphCache {
        &self.glyphs
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    pub fn glyph_for(&self, identifier: u8) -> Option<&'static str> {
        self.glyphs.get(identifier)
    }

    /// Flip the card at `index` on behalf of the player.
    ///
    /// Taps outside the deck, or on a card the current theme has no glyph for,
    /// are ignored and return `None`.
    pub fn tap_card(&mut self, index: usize) -> Option<FlipOutcome> {
        let Some(card) = self.game.card(index).copied() else {
            debug!(index, len = self.game.cards().len(), "tap outside the deck ignored");
            return None;
        };

        let Some(glyph) = self.theme.emoji(card.identifier) else {
            debug!(index, identifier = card.identifier, theme = %self.theme, "no glyph for card, tap ignored");
            return None;
        };
        self.glyphs.remember(card.identifier, glyph);

        match self.game.flip_card(index) {
            Ok(outcome) => {
                match outcome {
                    FlipOutcome::Matched { first, second } => {
                        debug!(first, second, score = self.game.score(), "pair matched");
                        if self.game.is_complete() {
                            info!(
                                flips = self.game.flips_count(),
                                score = self.game.score(),
                                "all pairs matched"
                            );
                        }
                    }
                    FlipOutcome::Mismatched { hidden, shown } => {
                        debug!(hidden, shown, score = self.game.score(), "mismatch");
                    }
                    FlipOutcome::Exposed { index } => debug!(index, "card exposed"),
                    FlipOutcome::Ignored => debug!(index, "card already face-up or matched"),
                }
                Some(outcome)
            }
            Err(err) => {
                debug!(%err, "flip rejected");
                None
            }
        }
    }

    /// Pick a new theme, deal a fresh deck and forget revealed glyphs.
    pub fn new_game(&mut self) {
        self.theme = self.themes.pick_random();
        self.game.reset_game();
        self.glyphs.clear();
        self.games_started = self.games_started.saturating_add(1);
        info!(theme = %self.theme, game = self.games_started, "new game");
    }

    pub fn flips_label(&self) -> String {
        flips_label(self.game.flips_count())
    }

    pub fn score_label(&self) -> String {
        score_label(self.game.score())
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.game.snapshot_into(&mut out.game);
        out.theme = self.theme;
        out.glyphs = self.glyphs;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            game: self.game.snapshot(),
            theme: self.theme,
            glyphs: self.glyphs,
        }
    }
}
