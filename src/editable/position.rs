//! Offset/position mapping and word-boundary search.
//!
//! Cursor and selection math is done on byte offsets, while navigation needs
//! (line, column) pairs. [`PositionMapper`] caches the start offset of every
//! line and rebuilds the cache only after the buffer marks it dirty, so the
//! many lookups made per frame stay cheap under rapid typing.

use std::ops::Range;

/// A position in the text buffer (line and column, both 0-indexed).
///
/// The column counts chars, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Check if a character separates words
pub fn is_separator(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\n'
            | '\r'
            | '.'
            | ','
            | ';'
            | ':'
            | '!'
            | '?'
            | '\''
            | '"'
            | '('
            | ')'
            | '-'
    )
}

/// Character class used when expanding a double-click selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Separator,
    Newline,
}

fn char_class(ch: char) -> CharClass {
    if ch == '\n' {
        CharClass::Newline
    } else if is_separator(ch) {
        CharClass::Separator
    } else {
        CharClass::Word
    }
}

/// Clamp an offset into `[0, len]`, snapping down to a char boundary
pub fn clamp_offset(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Offset of the char boundary before `offset` (0 at buffer start)
pub fn prev_char_boundary(text: &str, offset: usize) -> usize {
    let offset = clamp_offset(text, offset);
    text[..offset]
        .chars()
        .next_back()
        .map(|ch| offset - ch.len_utf8())
        .unwrap_or(0)
}

/// Offset of the char boundary after `offset` (len at buffer end)
pub fn next_char_boundary(text: &str, offset: usize) -> usize {
    let offset = clamp_offset(text, offset);
    text[offset..]
        .chars()
        .next()
        .map(|ch| offset + ch.len_utf8())
        .unwrap_or(text.len())
}

/// Start of the word at or before `offset`.
///
/// Skips separators leftwards, then the word itself. Called on an offset
/// that is already a word start, this lands on the previous word's start.
pub fn word_start(text: &str, offset: usize) -> usize {
    let offset = clamp_offset(text, offset);
    let mut chars = text[..offset].char_indices().rev().peekable();
    let mut pos = offset;

    while let Some(&(i, ch)) = chars.peek() {
        if !is_separator(ch) {
            break;
        }
        pos = i;
        chars.next();
    }
    while let Some(&(i, ch)) = chars.peek() {
        if is_separator(ch) {
            break;
        }
        pos = i;
        chars.next();
    }

    pos
}

/// End of the word at or after `offset`. Mirror image of [`word_start`].
pub fn word_end(text: &str, offset: usize) -> usize {
    let offset = clamp_offset(text, offset);
    let mut chars = text[offset..].char_indices().peekable();
    let mut pos = offset;

    while let Some(&(i, ch)) = chars.peek() {
        if !is_separator(ch) {
            break;
        }
        pos = offset + i + ch.len_utf8();
        chars.next();
    }
    while let Some(&(i, ch)) = chars.peek() {
        if is_separator(ch) {
            break;
        }
        pos = offset + i + ch.len_utf8();
        chars.next();
    }

    pos
}

/// The run of same-class characters under `offset` (double-click target).
///
/// At the end of a line the word before the cursor is used. Newlines never
/// join a run, so the result stays on one line.
pub fn word_bounds_at(text: &str, offset: usize) -> Range<usize> {
    let offset = clamp_offset(text, offset);

    let under = text[offset..].chars().next();
    let before = text[..offset].chars().next_back();
    let pivot = match (under, before) {
        (Some(ch), Some(prev)) if ch == '\n' && prev != '\n' => prev_char_boundary(text, offset),
        (None, Some(prev)) if prev != '\n' => prev_char_boundary(text, offset),
        (Some(_), _) => offset,
        _ => return offset..offset,
    };

    let Some(pivot_char) = text[pivot..].chars().next() else {
        return offset..offset;
    };
    let class = char_class(pivot_char);
    if class == CharClass::Newline {
        return offset..offset;
    }

    let mut start = pivot;
    for (i, ch) in text[..pivot].char_indices().rev() {
        if char_class(ch) != class {
            break;
        }
        start = i;
    }

    let mut end = pivot;
    for (i, ch) in text[pivot..].char_indices() {
        if char_class(ch) != class {
            break;
        }
        end = pivot + i + ch.len_utf8();
    }

    start..end
}

/// Cached line split of a text buffer.
#[derive(Debug, Clone)]
pub struct PositionMapper {
    /// Byte offset where each line starts (always contains 0)
    line_starts: Vec<usize>,
    dirty: bool,
    rebuilds: usize,
}

impl Default for PositionMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionMapper {
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
            dirty: true,
            rebuilds: 0,
        }
    }

    /// Mark the cache stale; it is rebuilt on the next query
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// How many times the line cache has been rebuilt
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    fn sync(&mut self, text: &str) {
        if !self.dirty {
            return;
        }
        self.line_starts.clear();
        self.line_starts.push(0);
        self.line_starts
            .extend(text.match_indices('\n').map(|(i, _)| i + 1));
        self.dirty = false;
        self.rebuilds += 1;
    }

    /// Number of lines (always >= 1)
    pub fn line_count(&mut self, text: &str) -> usize {
        self.sync(text);
        self.line_starts.len()
    }

    /// Byte span of a line, excluding its trailing newline
    pub fn line_range(&mut self, text: &str, line: usize) -> Range<usize> {
        self.sync(text);
        let line = line.min(self.line_starts.len() - 1);
        let start = self.line_starts[line];
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(text.len());
        start..end
    }

    /// Convert a byte offset to (line, column)
    pub fn line_col_for_offset(&mut self, text: &str, offset: usize) -> Position {
        let offset = clamp_offset(text, offset);
        self.sync(text);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = text[self.line_starts[line]..offset].chars().count();
        Position::new(line, column)
    }

    /// Convert (line, column) to a byte offset, clamping both
    pub fn offset_for_line_col(&mut self, text: &str, line: usize, column: usize) -> usize {
        let range = self.line_range(text, line);
        text[range.clone()]
            .char_indices()
            .nth(column)
            .map(|(i, _)| range.start + i)
            .unwrap_or(range.end)
    }
}
