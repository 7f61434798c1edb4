//! The engine's text buffer: one `String` plus a lazily rebuilt line cache.

use std::ops::Range;

use super::position::{self, Position, PositionMapper};

/// Editable text addressed by byte offset `[0, len]`.
///
/// Every mutation marks the line cache dirty; (line, column) queries rebuild
/// it on demand, which is why they take `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    mapper: PositionMapper,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
            mapper: PositionMapper::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Total length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clamp an offset into the buffer, snapping to a char boundary
    pub fn clamp(&self, offset: usize) -> usize {
        position::clamp_offset(&self.text, offset)
    }

    /// Text in a byte range (clamped)
    pub fn slice(&self, range: Range<usize>) -> &str {
        let start = self.clamp(range.start);
        let end = self.clamp(range.end).max(start);
        &self.text[start..end]
    }

    /// Insert text at a byte offset; returns the offset after the insertion
    pub fn insert(&mut self, offset: usize, text: &str) -> usize {
        let offset = self.clamp(offset);
        self.text.insert_str(offset, text);
        self.mapper.invalidate();
        offset + text.len()
    }

    /// Remove a byte range; returns the removed text
    pub fn remove(&mut self, range: Range<usize>) -> String {
        let start = self.clamp(range.start);
        let end = self.clamp(range.end).max(start);
        if start == end {
            return String::new();
        }
        let removed = self.text[start..end].to_string();
        self.text.replace_range(start..end, "");
        self.mapper.invalidate();
        removed
    }

    /// Replace the whole content
    pub fn set_content(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.mapper.invalidate();
    }

    /// Whether the line cache needs a rebuild
    pub fn is_dirty(&self) -> bool {
        self.mapper.is_dirty()
    }

    /// How many times the line cache has been rebuilt
    pub fn cache_rebuilds(&self) -> usize {
        self.mapper.rebuilds()
    }

    /// Number of lines (always >= 1)
    pub fn line_count(&mut self) -> usize {
        self.mapper.line_count(&self.text)
    }

    /// Byte span of a line, excluding its newline
    pub fn line_range(&mut self, line: usize) -> Range<usize> {
        self.mapper.line_range(&self.text, line)
    }

    /// Content of a line without its newline
    pub fn line(&mut self, line: usize) -> &str {
        let range = self.mapper.line_range(&self.text, line);
        &self.text[range]
    }

    pub fn position_of(&mut self, offset: usize) -> Position {
        self.mapper.line_col_for_offset(&self.text, offset)
    }

    pub fn offset_of(&mut self, line: usize, column: usize) -> usize {
        self.mapper.offset_for_line_col(&self.text, line, column)
    }

    pub fn prev_boundary(&self, offset: usize) -> usize {
        position::prev_char_boundary(&self.text, offset)
    }

    pub fn next_boundary(&self, offset: usize) -> usize {
        position::next_char_boundary(&self.text, offset)
    }

    pub fn word_start(&self, offset: usize) -> usize {
        position::word_start(&self.text, offset)
    }

    pub fn word_end(&self, offset: usize) -> usize {
        position::word_end(&self.text, offset)
    }

    pub fn word_bounds_at(&self, offset: usize) -> Range<usize> {
        position::word_bounds_at(&self.text, offset)
    }
}
