//! Session engine - the presentation-side controller around the core rules.
//!
//! The core crate knows nothing about themes being "current" or about which
//! glyph a player has already seen. This crate holds that state explicitly:
//!
//! - [`session`]: one running game plus its theme and glyph cache
//! - [`glyphs`]: identifier to glyph cache, cleared on every new game
//! - [`config`]: environment-driven configuration
//!
//! # Example
//!
//! ```
//! use concentration_engine::{GameConfig, Session};
//!
//! let config = GameConfig { pairs: 4, seed: 9, ..GameConfig::default() };
//! let mut session = Session::new(&config).unwrap();
//!
//! session.tap_card(0);
//! assert_eq!(session.flips_label(), "Flips: 1");
//!
//! session.new_game();
//! assert!(session.glyphs().is_empty());
//! ```

pub mod config;
pub mod glyphs;
pub mod session;

pub use concentration_core as core;
pub use concentration_types as types;

pub use config::{log_path_from_env, GameConfig};
pub use glyphs::GlyphCache;
pub use session::{Session, SessionSnapshot};
