//! TextEditEngine - buffer, cursor, selection, history and viewport kept
//! consistent under a stream of edit commands.

use std::ops::{Range, RangeInclusive};

use crate::config::EngineConfig;
use crate::geometry::Rect;
use crate::input::Key;
use crate::platform::{Clipboard, ClipboardError};
use crate::tracing::SelectionSnapshot;

use super::buffer::TextBuffer;
use super::click::ClickClassifier;
use super::history::{Snapshot, UndoHistory};
use super::messages::{MoveTarget, TextEditMsg};
use super::position::Position;
use super::repeat::KeyRepeatController;
use super::scroll::ScrollWindow;
use super::selection::SelectionBounds;

/// How pointer movement is interpreted while the button is held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerMode {
    /// Normal editing, pointer movement is ignored
    #[default]
    Idle,
    /// Held after a single click or shift-click: movement extends the selection
    DragSelecting,
    /// Held on the scrollbar thumb: movement scrolls
    ScrollbarDragging,
    /// Held after a double/triple click: the word/line selection is kept
    MultiClickPending,
}

/// The multi-line text editing engine.
///
/// The cursor is a byte offset that always sits on a char boundary in
/// `[0, len]`. When the selection is non-empty its active end equals the
/// cursor.
#[derive(Debug, Clone)]
pub struct TextEditEngine {
    pub(crate) buffer: TextBuffer,
    pub(crate) cursor: usize,
    pub(crate) selection: SelectionBounds,
    pub(crate) history: UndoHistory,
    pub(crate) scroll: ScrollWindow,
    pub(crate) clicks: ClickClassifier,
    pub(crate) repeat: KeyRepeatController<Key>,
    /// Column remembered across consecutive up/down moves
    pub(crate) desired_column: Option<usize>,
    pub(crate) pointer_mode: PointerMode,
    pub(crate) bounds: Rect,
    pub(crate) line_height: f64,
    pub(crate) focused: bool,
    pub(crate) frame: u64,
    /// Fractional wheel lines not yet scrolled
    pub(crate) wheel_remainder: f64,
    pub(crate) config: EngineConfig,
}

impl Default for TextEditEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default(), 16.0)
    }
}

impl TextEditEngine {
    /// Create an empty engine
    pub fn new(config: EngineConfig, line_height: f64) -> Self {
        let mut engine = Self {
            buffer: TextBuffer::new(),
            cursor: 0,
            selection: SelectionBounds::collapsed(0),
            history: UndoHistory::with_limit(config.undo_limit),
            scroll: ScrollWindow::new(config.min_thumb_height),
            clicks: ClickClassifier::new(config.double_click_frames),
            repeat: KeyRepeatController::new(
                config.key_repeat_delay_frames,
                config.key_repeat_interval_frames,
            ),
            desired_column: None,
            pointer_mode: PointerMode::Idle,
            bounds: Rect::default(),
            line_height: line_height.max(1.0),
            focused: false,
            frame: 0,
            wheel_remainder: 0.0,
            config,
        };
        engine.relayout();
        engine
    }

    /// Create an engine holding `text` with the cursor at its end
    pub fn with_text(text: &str, config: EngineConfig, line_height: f64) -> Self {
        let mut engine = Self::new(config, line_height);
        engine.set_text(text);
        engine
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Cursor byte offset
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> SelectionBounds {
        self.selection
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// The selected text (empty string if no selection)
    pub fn selected_text(&self) -> &str {
        self.buffer.slice(self.selection.range())
    }

    /// Cursor as (line, column)
    pub fn cursor_position(&mut self) -> Position {
        self.buffer.position_of(self.cursor)
    }

    pub fn line_count(&mut self) -> usize {
        self.buffer.line_count()
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn scroll(&self) -> &ScrollWindow {
        &self.scroll
    }

    /// First visible line
    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset()
    }

    /// Visible line capacity
    pub fn max_lines(&self) -> usize {
        self.scroll.max_lines()
    }

    pub fn pointer_mode(&self) -> PointerMode {
        self.pointer_mode
    }

    pub fn desired_column(&self) -> Option<usize> {
        self.desired_column
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Area text is laid out in: bounds minus padding and scrollbar
    pub fn text_area(&self) -> Rect {
        let mut area = self.bounds.inset(self.config.padding);
        if self.scroll.is_scrollable() {
            area.width = (area.width - self.config.scrollbar_width).max(0.0);
        }
        area
    }

    /// Move the widget's origin
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.bounds.x = x;
        self.bounds.y = y;
        self.relayout();
    }

    /// Resize the widget; recomputes capacity and re-clamps the scroll offset
    pub fn resize(&mut self, width: f64, height: f64) {
        self.bounds.width = width.max(0.0);
        self.bounds.height = height.max(0.0);
        self.relayout();
    }

    pub fn set_line_height(&mut self, line_height: f64) {
        let line_height = line_height.max(1.0);
        if (line_height - self.line_height).abs() > f64::EPSILON {
            self.line_height = line_height;
            self.relayout();
        }
    }

    fn relayout(&mut self) {
        let inner = self.bounds.inset(self.config.padding);
        let max_lines = (inner.height / self.line_height).floor() as usize;
        self.scroll.set_max_lines(max_lines);
        self.scroll.set_total_lines(self.buffer.line_count());

        let width = self.config.scrollbar_width.min(self.bounds.width).max(0.0);
        self.scroll.set_track(Rect::new(
            self.bounds.right() - width,
            self.bounds.y,
            width,
            self.bounds.height,
        ));
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Gaining focus starts with an empty selection at the cursor; losing it
    /// drops key-repeat timers and any pointer gesture.
    pub fn set_focused(&mut self, focused: bool) {
        if focused == self.focused {
            return;
        }
        self.focused = focused;
        if focused {
            self.selection.clear(self.cursor);
        } else {
            self.repeat.clear();
            self.scroll.end_drag();
            self.pointer_mode = PointerMode::Idle;
        }
        tracing::debug!(focused, "focus changed");
    }

    // =========================================================================
    // Cursor placement helpers
    // =========================================================================

    /// Put the cursor at `offset` and collapse the selection there
    pub(super) fn place_cursor(&mut self, offset: usize) {
        self.cursor = self.buffer.clamp(offset);
        self.selection.clear(self.cursor);
        self.desired_column = None;
    }

    /// Move the cursor to `offset`, extending the selection from the
    /// pre-command cursor if none was active
    pub(super) fn extend_to(&mut self, offset: usize) {
        if self.selection.is_empty() {
            self.selection.set_anchor(self.cursor);
        }
        self.cursor = self.buffer.clamp(offset);
        self.selection.set_active(self.cursor);
        self.desired_column = None;
    }

    fn move_to(&mut self, offset: usize, extend: bool) {
        if extend {
            self.extend_to(offset);
        } else {
            self.place_cursor(offset);
        }
    }

    /// Scroll so the cursor's line is on screen
    pub fn ensure_cursor_visible(&mut self) {
        let line = self.buffer.position_of(self.cursor).line;
        self.scroll.ensure_visible(line);
    }

    fn after_edit(&mut self) {
        self.scroll.set_total_lines(self.buffer.line_count());
        self.desired_column = None;
        self.ensure_cursor_visible();
    }

    fn record_undo(&mut self) {
        self.history.push(self.buffer.as_str(), self.cursor);
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Move (or extend the selection) toward `target`
    pub fn move_cursor(&mut self, target: MoveTarget, extend: bool) {
        let cursor = self.cursor;
        let has_selection = !self.selection.is_empty();

        let offset = match target {
            MoveTarget::Up => return self.move_vertical(true, extend),
            MoveTarget::Down => return self.move_vertical(false, extend),
            MoveTarget::Left if has_selection && !extend => self.selection.bounds().0,
            MoveTarget::Right if has_selection && !extend => self.selection.bounds().1,
            MoveTarget::Left => self.buffer.prev_boundary(cursor),
            MoveTarget::Right => self.buffer.next_boundary(cursor),
            MoveTarget::LineStart => {
                let line = self.buffer.position_of(cursor).line;
                self.buffer.line_range(line).start
            }
            MoveTarget::LineEnd => {
                let line = self.buffer.position_of(cursor).line;
                self.buffer.line_range(line).end
            }
            MoveTarget::WordLeft => self.buffer.word_start(cursor),
            MoveTarget::WordRight => self.buffer.word_end(cursor),
            MoveTarget::DocumentStart => 0,
            MoveTarget::DocumentEnd => self.buffer.len(),
        };

        self.move_to(offset, extend);

        match target {
            MoveTarget::DocumentStart => self.scroll.scroll_to_top(),
            MoveTarget::DocumentEnd => self.scroll.scroll_to_bottom(),
            _ => self.ensure_cursor_visible(),
        }
    }

    fn move_vertical(&mut self, up: bool, extend: bool) {
        let pos = self.buffer.position_of(self.cursor);
        let desired = self.desired_column.unwrap_or(pos.column);
        let line_count = self.buffer.line_count();

        let target_line = if up {
            pos.line.checked_sub(1)
        } else {
            Some(pos.line + 1).filter(|&line| line < line_count)
        };
        let offset = match target_line {
            Some(line) => self.buffer.offset_of(line, desired),
            None => self.cursor,
        };

        self.move_to(offset, extend);
        self.desired_column = Some(desired);
        self.ensure_cursor_visible();
    }

    pub fn move_left(&mut self) {
        self.move_cursor(MoveTarget::Left, false);
    }

    pub fn move_right(&mut self) {
        self.move_cursor(MoveTarget::Right, false);
    }

    pub fn move_up(&mut self) {
        self.move_cursor(MoveTarget::Up, false);
    }

    pub fn move_down(&mut self) {
        self.move_cursor(MoveTarget::Down, false);
    }

    pub fn move_word_left(&mut self) {
        self.move_cursor(MoveTarget::WordLeft, false);
    }

    pub fn move_word_right(&mut self) {
        self.move_cursor(MoveTarget::WordRight, false);
    }

    pub fn move_home(&mut self) {
        self.move_cursor(MoveTarget::LineStart, false);
    }

    pub fn move_end(&mut self) {
        self.move_cursor(MoveTarget::LineEnd, false);
    }

    pub fn ctrl_home(&mut self) {
        self.move_cursor(MoveTarget::DocumentStart, false);
    }

    pub fn ctrl_end(&mut self) {
        self.move_cursor(MoveTarget::DocumentEnd, false);
    }

    pub fn extend_left(&mut self) {
        self.move_cursor(MoveTarget::Left, true);
    }

    pub fn extend_right(&mut self) {
        self.move_cursor(MoveTarget::Right, true);
    }

    pub fn extend_up(&mut self) {
        self.move_cursor(MoveTarget::Up, true);
    }

    pub fn extend_down(&mut self) {
        self.move_cursor(MoveTarget::Down, true);
    }

    pub fn extend_word_left(&mut self) {
        self.move_cursor(MoveTarget::WordLeft, true);
    }

    pub fn extend_word_right(&mut self) {
        self.move_cursor(MoveTarget::WordRight, true);
    }

    pub fn extend_home(&mut self) {
        self.move_cursor(MoveTarget::LineStart, true);
    }

    pub fn extend_end(&mut self) {
        self.move_cursor(MoveTarget::LineEnd, true);
    }

    pub fn extend_ctrl_home(&mut self) {
        self.move_cursor(MoveTarget::DocumentStart, true);
    }

    pub fn extend_ctrl_end(&mut self) {
        self.move_cursor(MoveTarget::DocumentEnd, true);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn select_all(&mut self) {
        let len = self.buffer.len();
        self.selection = SelectionBounds::new(0, len);
        self.cursor = len;
        self.desired_column = None;
    }

    /// Select the word under `offset`
    pub fn select_word_at(&mut self, offset: usize) {
        let offset = self.buffer.clamp(offset);
        let range = self.buffer.word_bounds_at(offset);
        self.select_range(range);
    }

    /// Select the whole line under `offset`, excluding its newline
    pub fn select_line_at(&mut self, offset: usize) {
        let line = self.buffer.position_of(offset).line;
        let range = self.buffer.line_range(line);
        self.select_range(range);
    }

    fn select_range(&mut self, range: Range<usize>) {
        self.selection = SelectionBounds::new(range.start, range.end);
        self.cursor = range.end;
        self.desired_column = None;
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert a character, replacing any selection (one undo step)
    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut buf))
    }

    pub fn insert_newline(&mut self) -> bool {
        self.insert_char('\n')
    }

    /// Insert text at the cursor, replacing any selection (one undo step)
    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        self.record_undo();
        if !self.selection.is_empty() {
            let range = self.selection.range();
            self.buffer.remove(range.clone());
            self.cursor = range.start;
        }
        let end = self.buffer.insert(self.cursor, text);
        self.place_cursor(end);
        self.after_edit();
        true
    }

    /// Delete a range as one undoable step; the cursor lands at its start
    fn delete_range(&mut self, range: Range<usize>) -> bool {
        let start = self.buffer.clamp(range.start);
        let end = self.buffer.clamp(range.end);
        if start >= end {
            return false;
        }

        self.record_undo();
        self.buffer.remove(start..end);
        self.place_cursor(start);
        self.after_edit();
        true
    }

    /// Delete the selection if any
    pub fn delete_selection(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.delete_range(self.selection.range())
    }

    /// Delete the selection, or the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if !self.selection.is_empty() {
            return self.delete_selection();
        }
        let start = self.buffer.prev_boundary(self.cursor);
        self.delete_range(start..self.cursor)
    }

    /// Delete the selection, or the character after the cursor
    pub fn delete_forward(&mut self) -> bool {
        if !self.selection.is_empty() {
            return self.delete_selection();
        }
        let end = self.buffer.next_boundary(self.cursor);
        self.delete_range(self.cursor..end)
    }

    /// Delete the selection, or back to the previous word start
    pub fn ctrl_backspace(&mut self) -> bool {
        if !self.selection.is_empty() {
            return self.delete_selection();
        }
        let start = self.buffer.word_start(self.cursor);
        self.delete_range(start..self.cursor)
    }

    /// Delete the selection, or forward to the next word end
    pub fn ctrl_delete(&mut self) -> bool {
        if !self.selection.is_empty() {
            return self.delete_selection();
        }
        let end = self.buffer.word_end(self.cursor);
        self.delete_range(self.cursor..end)
    }

    /// Replace the whole content; clears history and puts the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.history.clear();
        self.place_cursor(self.buffer.len());
        self.after_edit();
    }

    // =========================================================================
    // Indentation
    // =========================================================================

    /// Lines covered by a selection spanning more than one line.
    ///
    /// A trailing line the selection only touches at column 0 is excluded.
    fn spanned_lines(&mut self) -> Option<RangeInclusive<usize>> {
        if self.selection.is_empty() {
            return None;
        }
        let (min, max) = self.selection.bounds();
        let first = self.buffer.position_of(min).line;
        let end = self.buffer.position_of(max);
        let last = if end.column == 0 && end.line > first {
            end.line - 1
        } else {
            end.line
        };
        (last > first).then_some(first..=last)
    }

    /// Indent every selected line, or insert one indent unit at the cursor
    pub fn indent(&mut self) -> bool {
        let indent = self.config.indent.clone();
        let Some(lines) = self.spanned_lines() else {
            return self.insert_text(&indent);
        };

        let starts: Vec<usize> = lines.map(|line| self.buffer.line_range(line).start).collect();
        let shift = |pos: usize| pos + indent.len() * starts.iter().filter(|&&s| s < pos).count();
        let anchor = shift(self.selection.anchor());
        let active = shift(self.selection.active());

        self.record_undo();
        for &start in starts.iter().rev() {
            self.buffer.insert(start, &indent);
        }

        self.selection = SelectionBounds::new(anchor, active);
        self.cursor = active;
        self.after_edit();
        true
    }

    /// Remove up to one indent unit from every selected line, or from the
    /// cursor's line
    pub fn outdent(&mut self) -> bool {
        let lines = match self.spanned_lines() {
            Some(lines) => lines,
            None => {
                let line = self.buffer.position_of(self.cursor).line;
                line..=line
            }
        };

        let unit = self.config.indent.len().max(1);
        let mut removals: Vec<Range<usize>> = Vec::new();
        for line in lines {
            let range = self.buffer.line_range(line);
            let text = self.buffer.slice(range.clone());
            let width = if text.starts_with(self.config.indent.as_str()) {
                self.config.indent.len()
            } else if text.starts_with('\t') {
                1
            } else {
                text.bytes().take(unit).take_while(|&b| b == b' ').count()
            };
            if width > 0 {
                removals.push(range.start..range.start + width);
            }
        }

        if removals.is_empty() {
            return false;
        }

        let adjust = |pos: usize| {
            let removed: usize = removals
                .iter()
                .map(|r| pos.saturating_sub(r.start).min(r.len()))
                .sum();
            pos - removed
        };
        let anchor = adjust(self.selection.anchor());
        let active = adjust(self.selection.active());
        let cursor = adjust(self.cursor);

        self.record_undo();
        for range in removals.iter().rev() {
            self.buffer.remove(range.clone());
        }

        self.selection = SelectionBounds::new(anchor, active);
        self.cursor = cursor;
        self.after_edit();
        true
    }

    // =========================================================================
    // Clipboard
    // =========================================================================

    /// Copy the selection; no-op without one
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) -> Result<bool, ClipboardError> {
        if self.selection.is_empty() {
            return Ok(false);
        }
        clipboard.write(self.selected_text())?;
        Ok(true)
    }

    /// Copy then delete the selection; nothing is deleted if the write fails
    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) -> Result<bool, ClipboardError> {
        if !self.copy(clipboard)? {
            return Ok(false);
        }
        Ok(self.delete_selection())
    }

    /// Insert clipboard text, replacing any selection
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) -> Result<bool, ClipboardError> {
        let text = clipboard.read()?;
        let text = text.replace("\r\n", "\n");
        Ok(self.insert_text(&text))
    }

    // =========================================================================
    // Undo / Redo
    // =========================================================================

    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let current = Snapshot::new(self.buffer.as_str(), self.cursor);
        match self.history.undo(current) {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let current = Snapshot::new(self.buffer.as_str(), self.cursor);
        match self.history.redo(current) {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.buffer.set_content(&snapshot.text);
        self.place_cursor(snapshot.cursor);
        self.after_edit();
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    pub fn page_up(&mut self) {
        self.desired_column = None;
        self.scroll.page_up();
    }

    pub fn page_down(&mut self) {
        self.desired_column = None;
        self.scroll.page_down();
    }

    /// Scroll by whole lines without moving the cursor
    pub fn scroll_by(&mut self, lines: isize) {
        self.desired_column = None;
        self.scroll.scroll_by(lines);
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Apply one command. Returns whether it changed anything observable;
    /// only clipboard commands can fail.
    pub fn apply(
        &mut self,
        msg: TextEditMsg,
        clipboard: &mut dyn Clipboard,
    ) -> Result<bool, ClipboardError> {
        if !msg.keeps_desired_column() {
            self.desired_column = None;
        }
        let before = SelectionSnapshot::from_engine(self);

        let changed = match msg {
            TextEditMsg::Move(target) => {
                self.move_cursor(target, false);
                true
            }
            TextEditMsg::MoveWithSelection(target) => {
                self.move_cursor(target, true);
                true
            }
            TextEditMsg::InsertChar(ch) => self.insert_char(ch),
            TextEditMsg::InsertText(text) => self.insert_text(&text),
            TextEditMsg::InsertNewline => self.insert_newline(),
            TextEditMsg::DeleteBackward => self.backspace(),
            TextEditMsg::DeleteForward => self.delete_forward(),
            TextEditMsg::DeleteWordBackward => self.ctrl_backspace(),
            TextEditMsg::DeleteWordForward => self.ctrl_delete(),
            TextEditMsg::SelectAll => {
                self.select_all();
                true
            }
            TextEditMsg::SelectWordAt(offset) => {
                self.select_word_at(offset);
                true
            }
            TextEditMsg::SelectLineAt(offset) => {
                self.select_line_at(offset);
                true
            }
            TextEditMsg::Indent => self.indent(),
            TextEditMsg::Outdent => self.outdent(),
            TextEditMsg::Copy => self.copy(clipboard)?,
            TextEditMsg::Cut => self.cut(clipboard)?,
            TextEditMsg::Paste => self.paste(clipboard)?,
            TextEditMsg::Undo => self.undo(),
            TextEditMsg::Redo => self.redo(),
            TextEditMsg::PageUp => {
                self.page_up();
                true
            }
            TextEditMsg::PageDown => {
                self.page_down();
                true
            }
            TextEditMsg::ScrollBy(lines) => {
                self.scroll_by(lines);
                true
            }
            TextEditMsg::Resize { width, height } => {
                self.resize(width, height);
                true
            }
        };

        if let Some(diff) = before.diff(&SelectionSnapshot::from_engine(self)) {
            tracing::trace!(target: "selection", "{}", diff);
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryClipboard;

    fn engine(text: &str, cursor: usize) -> TextEditEngine {
        let mut engine = TextEditEngine::with_text(text, EngineConfig::default(), 16.0);
        engine.place_cursor(cursor);
        engine
    }

    #[test]
    fn test_typing_into_empty_buffer() {
        let mut e = engine("", 0);
        e.insert_char('h');
        e.insert_char('i');
        assert_eq!(e.text(), "hi");
        assert_eq!(e.cursor(), 2);
    }

    #[test]
    fn test_insert_replaces_selection_as_one_undo_step() {
        let mut e = engine("hello world", 0);
        e.select_word_at(1);
        e.insert_char('X');
        assert_eq!(e.text(), "X world");
        assert_eq!(e.cursor(), 1);
        assert!(!e.has_selection());

        assert!(e.undo());
        assert_eq!(e.text(), "hello world");
        assert_eq!(e.cursor(), 5);
    }

    #[test]
    fn test_multibyte_insert_advances_by_encoded_width() {
        let mut e = engine("", 0);
        e.insert_char('é');
        assert_eq!(e.cursor(), 2);
        e.move_left();
        assert_eq!(e.cursor(), 0);
        e.delete_forward();
        assert_eq!(e.text(), "");
    }

    #[test]
    fn test_backspace_noop_at_start_pushes_no_history() {
        let mut e = engine("abc", 0);
        assert!(!e.backspace());
        assert!(!e.can_undo());
    }

    #[test]
    fn test_delete_forward_noop_at_end() {
        let mut e = engine("abc", 3);
        assert!(!e.delete_forward());
        assert_eq!(e.text(), "abc");
    }

    #[test]
    fn test_desired_column_survives_short_line() {
        let mut e = engine("long line\nab\nanother line", 7);
        e.move_down();
        assert_eq!(e.cursor_position(), Position::new(1, 2));
        e.move_down();
        assert_eq!(e.cursor_position(), Position::new(2, 7));
    }

    #[test]
    fn test_horizontal_move_resets_desired_column() {
        let mut e = engine("long line\nab\nanother line", 7);
        e.move_down();
        e.move_left();
        assert_eq!(e.desired_column(), None);
        e.move_down();
        assert_eq!(e.cursor_position(), Position::new(2, 1));
    }

    #[test]
    fn test_apply_reports_clipboard_errors_without_mutation() {
        let mut e = engine("hello", 0);
        e.select_all();
        let mut clipboard = MemoryClipboard::new();
        clipboard.fail_writes = true;

        assert!(e.apply(TextEditMsg::Cut, &mut clipboard).is_err());
        assert_eq!(e.text(), "hello");
        assert_eq!(e.selected_text(), "hello");
        assert!(!e.can_undo());
    }

    #[test]
    fn test_indent_multiline_selection() {
        let mut e = engine("a\nb\nc", 0);
        e.extend_down();
        e.extend_end();
        e.indent();
        assert_eq!(e.text(), "    a\n    b\nc");
        assert_eq!(e.selected_text(), "    a\n    b");
    }

    #[test]
    fn test_outdent_strips_one_unit() {
        let mut e = engine("        a\n  b", 9);
        e.select_all();
        assert!(e.outdent());
        assert_eq!(e.text(), "    a\nb");
        assert!(e.outdent());
        assert_eq!(e.text(), "a\nb");
        assert!(!e.outdent());
    }

    #[test]
    fn test_set_text_clears_history() {
        let mut e = engine("", 0);
        e.insert_char('x');
        e.set_text("fresh");
        assert_eq!(e.cursor(), 5);
        assert!(!e.can_undo());
    }
}
