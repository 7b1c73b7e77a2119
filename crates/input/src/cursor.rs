//! Grid cursor over the card layout.
//!
//! Cards are laid out row-major, `columns` per row. The last row may be short,
//! so vertical moves clamp to the last card.

use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardCursor {
    index: usize,
    len: usize,
    columns: usize,
}

impl CardCursor {
    pub fn new(len: usize, columns: u16) -> Self {
        Self {
            index: 0,
            len,
            columns: (columns as usize).max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Jump straight to a card (e.g. after a mouse click).
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    /// Apply a movement action. Returns whether the selection changed.
    ///
    /// Horizontal moves stop at row edges; non-movement actions are ignored.
    pub fn apply(&mut self, action: GameAction) -> bool {
        if self.len == 0 {
            return false;
        }

        let col = self.index % self.columns;
        let next = match action {
            GameAction::MoveLeft if col > 0 => self.index - 1,
            GameAction::MoveRight if col + 1 < self.columns => self.index + 1,
            GameAction::MoveUp => self.index.saturating_sub(self.columns),
            GameAction::MoveDown => self.index + self.columns,
            _ => self.index,
        };
        let next = next.min(self.len - 1);

        let changed = next != self.index;
        self.index = next;
        changed
    }
}
