use arrayvec::ArrayVec;

use crate::types::{Card, MAX_CARDS};

/// Plain-data copy of a game, handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub cards: ArrayVec<Card, MAX_CARDS>,
    pub pair_count: usize,
    pub exposed: Option<usize>,
    pub flips_count: u32,
    pub score: i32,
    pub complete: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cards.clear();
        self.pair_count = 0;
        self.exposed = None;
        self.flips_count = 0;
        self.score = 0;
        self.complete = false;
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }
}
