//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout frameworks and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw emoji glyphs (often multi-codepoint, two columns wide) reliably
//! - Map mouse clicks back to cards with the same layout used for drawing

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use concentration_core as core;
pub use concentration_engine as engine;
pub use concentration_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Glyph, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
