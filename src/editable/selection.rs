//! Selection bounds for the text editing engine.

use std::ops::Range;

/// A selection expressed as two byte offsets.
///
/// The anchor stays fixed while the active end follows the cursor during
/// shift-extended navigation and drag selection. Both ends are clamped by the
/// engine before they are stored here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionBounds {
    anchor: usize,
    active: usize,
}

impl SelectionBounds {
    /// Create a selection from an anchor and an active end
    pub const fn new(anchor: usize, active: usize) -> Self {
        Self { anchor, active }
    }

    /// Create a collapsed selection (cursor with no selection)
    pub const fn collapsed(pos: usize) -> Self {
        Self {
            anchor: pos,
            active: pos,
        }
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn set_anchor(&mut self, pos: usize) {
        self.anchor = pos;
    }

    pub fn set_active(&mut self, pos: usize) {
        self.active = pos;
    }

    /// Collapse both ends to `pos`
    pub fn clear(&mut self, pos: usize) {
        self.anchor = pos;
        self.active = pos;
    }

    /// Check if selection is empty (anchor == active)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Normalized `(min, max)` regardless of selection direction
    pub fn bounds(&self) -> (usize, usize) {
        if self.anchor <= self.active {
            (self.anchor, self.active)
        } else {
            (self.active, self.anchor)
        }
    }

    /// Normalized bounds as a byte range
    pub fn range(&self) -> Range<usize> {
        let (min, max) = self.bounds();
        min..max
    }

    /// Check if selection is reversed (active before anchor)
    pub fn is_reversed(&self) -> bool {
        self.active < self.anchor
    }

    /// Check if an offset lies within the selection (end exclusive)
    pub fn contains(&self, pos: usize) -> bool {
        self.range().contains(&pos)
    }
}
