//! Identifier to glyph cache.
//!
//! The first time a card identifier is revealed its glyph is remembered, so later
//! flips of the same identifier show the same glyph until the cache is cleared
//! for a new game.

use crate::types::MAX_PAIRS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphCache {
    slots: [Option<&'static str>; MAX_PAIRS],
}

impl GlyphCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `glyph` for `identifier` unless one is already stored.
    ///
    /// Returns the glyph now associated with the identifier, or `None` if the
    /// identifier is outside the table.
    pub fn remember(&mut self, identifier: u8, glyph: &'static str) -> Option<&'static str> {
        let slot = self.slots.get_mut(identifier as usize)?;
        Some(*slot.get_or_insert(glyph))
    }

    pub fn get(&self, identifier: u8) -> Option<&'static str> {
        self.slots.get(identifier as usize).copied().flatten()
    }

    pub fn clear(&mut self) {
        self.slots = [None; MAX_PAIRS];
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_glyph_wins() {
        let mut cache = GlyphCache::new();
        assert_eq!(cache.remember(2, "🦊"), Some("🦊"));
        assert_eq!(cache.remember(2, "🐼"), Some("🦊"));
        assert_eq!(cache.get(2), Some("🦊"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn unknown_identifiers() {
        let mut cache = GlyphCache::new();
        assert_eq!(cache.get(0), None);
        assert_eq!(cache.remember(MAX_PAIRS as u8, "🦊"), None);
        assert_eq!(cache.get(MAX_PAIRS as u8), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_forgets_everything() {
        let mut cache = GlyphCache::new();
        cache.remember(0, "🥑");
        cache.remember(7, "🍒");
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(7), None);
    }
}
