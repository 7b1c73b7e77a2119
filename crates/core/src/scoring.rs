//! Scoring module - outcome of a flip and the score change it carries
//!
//! Rules:
//! - A matched pair is worth [`MATCH_BONUS`] points.
//! - Showing two different cards costs [`MISMATCH_PENALTY`] points.
//! - Exposing a first card, or an ignored flip, does not change the score.

use crate::types::{MATCH_BONUS, MISMATCH_PENALTY};

/// What a call to [`GameState::flip_card`](crate::GameState::flip_card) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipOutcome {
    /// Card was already face-up or matched; nothing changed.
    Ignored,
    /// No card was exposed; this card is now the exposed one.
    Exposed { index: usize },
    /// The exposed card and this card share an identifier.
    Matched { first: usize, second: usize },
    /// The exposed card was turned back down and this card is now exposed.
    Mismatched { hidden: usize, shown: usize },
}

/// Score change for a flip outcome.
pub fn score_delta(outcome: FlipOutcome) -> i32 {
    match outcome {
        FlipOutcome::Matched { .. } => MATCH_BONUS,
        FlipOutcome::Mismatched { .. } => -MISMATCH_PENALTY,
        FlipOutcome::Ignored | FlipOutcome::Exposed { .. } => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_deltas() {
        assert_eq!(score_delta(FlipOutcome::Ignored), 0);
        assert_eq!(score_delta(FlipOutcome::Exposed { index: 3 }), 0);
        assert_eq!(score_delta(FlipOutcome::Matched { first: 0, second: 1 }), 2);
        assert_eq!(score_delta(FlipOutcome::Mismatched { hidden: 0, shown: 1 }), -1);
    }
}
