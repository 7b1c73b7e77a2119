//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any rendering code. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and keeps a grid
//! cursor over the card layout so movement keys select a card to flip.

pub mod cursor;
pub mod map;

pub use concentration_types as types;

pub use cursor::CardCursor;
pub use map::{handle_key_event, is_primary_click, should_quit};
