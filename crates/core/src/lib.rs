//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the card-matching rules and the theme catalogue.
//! It has **no dependencies** on UI, logging, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same deal and the same theme picks
//! - **Testable**: Every rule is covered by unit tests next to the code
//! - **Portable**: The terminal front end is just one possible caller
//! - **Allocation-free**: The deck lives inline in an `ArrayVec`
//!
//! # Module Structure
//!
//! - [`game_state`]: The deck, flip/match/score rules, and reset
//! - [`theme`]: Themes (colors and glyph tables) and uniform random selection
//! - [`rng`]: Seeded PCG generator with unbiased bounded draws and shuffling
//! - [`scoring`]: Flip outcomes and the score change each one carries
//! - [`snapshot`]: Plain-data copy of a game for renderers
//! - [`error`]: Precondition failures (`InvalidConfiguration`, `OutOfRange`)
//!
//! # Game Rules
//!
//! - A game with N pairs has 2N cards; each identifier appears on exactly two
//! - Flipping a card with nothing exposed turns it face-up and exposes it
//! - Flipping a second card with the same identifier matches both (+2)
//! - Flipping a second card with a different identifier hides the first one,
//!   exposes the second one and costs a point (−1)
//! - Matched and already face-up cards ignore flips
//!
//! # Example
//!
//! ```
//! use concentration_core::{FlipOutcome, GameState, ThemeProvider};
//!
//! let mut game = GameState::new(8, 12345).unwrap();
//! assert_eq!(game.cards().len(), 16);
//!
//! assert_eq!(game.flip_card(0).unwrap(), FlipOutcome::Exposed { index: 0 });
//! assert_eq!(game.flips_count(), 1);
//!
//! let theme = ThemeProvider::new(7).pick_random();
//! let glyph = ThemeProvider::glyph(theme, game.cards()[0].identifier).unwrap();
//! assert!(!glyph.is_empty());
//! ```

pub mod error;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod theme;

pub use concentration_types as types;

// Re-export commonly used types for convenience
pub use error::CoreError;
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use scoring::{score_delta, FlipOutcome};
pub use snapshot::GameSnapshot;
pub use theme::{Theme, ThemeProvider};
