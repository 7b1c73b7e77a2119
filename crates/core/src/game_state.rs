//! Game state module - the deck and the flip/match/score rules
//!
//! The only state carried between flips is which card, if any, is currently
//! exposed (face-up and unmatched). It is tracked explicitly as an
//! `Option<usize>` instead of being recomputed from the deck.

use arrayvec::ArrayVec;

use crate::error::CoreError;
use crate::rng::SimpleRng;
use crate::scoring::{score_delta, FlipOutcome};
use crate::snapshot::GameSnapshot;
use crate::types::{Card, MAX_CARDS, MAX_PAIRS};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    cards: ArrayVec<Card, MAX_CARDS>,
    pair_count: usize,
    exposed: Option<usize>,
    flips_count: u32,
    score: i32,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game with `number_of_pairs` pairs, shuffled with `seed`.
    ///
    /// Fails with [`CoreError::InvalidConfiguration`] unless
    /// `1 <= number_of_pairs <= MAX_PAIRS`.
    pub fn new(number_of_pairs: usize, seed: u64) -> Result<Self, CoreError> {
        if number_of_pairs == 0 || number_of_pairs > MAX_PAIRS {
            return Err(CoreError::InvalidConfiguration {
                pairs: number_of_pairs,
                max: MAX_PAIRS,
            });
        }

        let mut state = Self {
            cards: ArrayVec::new(),
            pair_count: number_of_pairs,
            exposed: None,
            flips_count: 0,
            score: 0,
            rng: SimpleRng::new(seed),
        };
        state.deal();
        Ok(state)
    }

    /// Rebuild the deck in a fresh order, face-down and unmatched.
    fn deal(&mut self) {
        self.cards.clear();
        for identifier in 0..self.pair_count as u8 {
            self.cards.push(Card::new(identifier));
            self.cards.push(Card::new(identifier));
        }
        self.rng.shuffle(self.cards.as_mut_slice());
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn flips_count(&self) -> u32 {
        self.flips_count
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Index of the face-up, unmatched card waiting for its partner.
    pub fn exposed(&self) -> Option<usize> {
        self.exposed
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// Every pair has been matched.
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|c| c.is_matched)
    }

    /// Flip the card at `index`.
    ///
    /// Flipping a matched or already face-up card is a no-op that returns
    /// [`FlipOutcome::Ignored`]. An index past the end of the deck returns
    /// [`CoreError::OutOfRange`] and leaves the state untouched.
    pub fn flip_card(&mut self, index: usize) -> Result<FlipOutcome, CoreError> {
        let len = self.cards.len();
        let card = *self
            .cards
            .get(index)
            .ok_or(CoreError::OutOfRange { index, len })?;

        if !card.is_flippable() {
            return Ok(FlipOutcome::Ignored);
        }

        self.flips_count = self.flips_count.saturating_add(1);

        let outcome = match self.exposed {
            Some(prior) if prior != index => {
                if self.cards[prior].identifier == card.identifier {
                    self.cards[prior].is_matched = true;
                    self.cards[index].is_matched = true;
                    self.cards[index].is_face_up = true;
                    self.exposed = None;
                    FlipOutcome::Matched {
                        first: prior,
                        second: index,
                    }
                } else {
                    self.cards[prior].is_face_up = false;
                    self.cards[index].is_face_up = true;
                    self.exposed = Some(index);
                    FlipOutcome::Mismatched {
                        hidden: prior,
                        shown: index,
                    }
                }
            }
            _ => {
                self.cards[index].is_face_up = true;
                self.exposed = Some(index);
                FlipOutcome::Exposed { index }
            }
        };

        self.score += score_delta(outcome);
        Ok(outcome)
    }

    /// Start over with the same pair count and a freshly shuffled deck.
    pub fn reset_game(&mut self) {
        self.deal();
        self.exposed = None;
        self.flips_count = 0;
        self.score = 0;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cards.clear();
        out.cards.extend(self.cards.iter().copied());
        out.pair_count = self.pair_count;
        out.exposed = self.exposed;
        out.flips_count = self.flips_count;
        out.score = self.score;
        out.complete = self.is_complete();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    fn with_identifiers(identifiers: &[u8]) -> Self {
        let mut state = Self::new(1, 1).unwrap();
        state.cards.clear();
        state.cards.extend(identifiers.iter().map(|&id| Card::new(id)));
        state.pair_count = identifiers.len() / 2;
        state
    }
}
