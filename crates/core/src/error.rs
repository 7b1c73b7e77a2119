//! Error types for the game rules.
//!
//! Both variants are precondition failures detected at the boundary. Callers are
//! expected to validate before calling; an operation that returns an error has
//! left the state untouched.

/// Errors returned by [`GameState`](crate::GameState) and
/// [`ThemeProvider`](crate::ThemeProvider).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Pair count outside `1..=max`.
    #[error("invalid pair count {pairs}: expected 1..={max}")]
    InvalidConfiguration { pairs: usize, max: usize },

    /// Card index or glyph identifier outside the valid range.
    #[error("index {index} is out of range for {len} entries")]
    OutOfRange { index: usize, len: usize },
}
