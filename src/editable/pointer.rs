//! Pointer handling: hit-testing and the press/drag/release state machine.
//!
//! A press inside the widget focuses it and is routed by what it lands on:
//! - the scrollbar thumb starts a thumb drag
//! - the bare track pages toward the pointer
//! - text is classified as a single, double or triple click
//!
//! A press outside the widget only drops focus.

use crate::platform::TextMetrics;

use super::click::ClickKind;
use super::engine::{PointerMode, TextEditEngine};

impl TextEditEngine {
    /// Byte offset under the pointer.
    ///
    /// The row comes from the pointer's height in the text area plus the
    /// scroll offset, clamped to the last line. Within the row a char is
    /// selected once the pointer passes its horizontal midpoint.
    pub fn hit_test(&mut self, x: f64, y: f64, metrics: &dyn TextMetrics) -> usize {
        let area = self.text_area();
        let rel_y = y - area.y;
        let row = if rel_y <= 0.0 {
            0
        } else {
            (rel_y / self.line_height).floor() as usize
        };

        let last_line = self.buffer.line_count() - 1;
        let line = self.scroll.offset().saturating_add(row).min(last_line);
        let range = self.buffer.line_range(line);
        let target_x = x - area.x;

        let mut advance = 0.0;
        for (i, ch) in self.buffer.slice(range.clone()).char_indices() {
            let width = metrics.char_width(ch);
            if advance + width / 2.0 > target_x {
                return range.start + i;
            }
            advance += width;
        }
        range.end
    }

    /// Button went down at `(x, y)`. Returns whether the widget handled it.
    pub fn pointer_pressed(
        &mut self,
        x: f64,
        y: f64,
        shift: bool,
        metrics: &dyn TextMetrics,
    ) -> bool {
        if !self.bounds.contains(x, y) {
            self.set_focused(false);
            return false;
        }
        self.set_focused(true);

        if self.scroll.begin_drag(x, y) {
            self.pointer_mode = PointerMode::ScrollbarDragging;
            tracing::debug!(offset = self.scroll.offset(), "scrollbar drag started");
            return true;
        }

        if self.scroll.track_contains(x, y) {
            let above = self.scroll.thumb().is_some_and(|thumb| y < thumb.y);
            if above {
                self.scroll.page_up();
            } else {
                self.scroll.page_down();
            }
            self.pointer_mode = PointerMode::Idle;
            return true;
        }

        let offset = self.hit_test(x, y, metrics);

        if shift {
            self.clicks.reset();
            self.extend_to(offset);
            self.pointer_mode = PointerMode::DragSelecting;
            return true;
        }

        let kind = self.clicks.register_press(self.frame);
        match kind {
            ClickKind::Single => self.place_cursor(offset),
            ClickKind::Double => self.select_word_at(offset),
            ClickKind::Triple => self.select_line_at(offset),
        }
        self.pointer_mode = if kind.starts_drag() {
            PointerMode::DragSelecting
        } else {
            PointerMode::MultiClickPending
        };
        tracing::trace!(?kind, offset, frame = self.frame, "pointer press");
        true
    }

    /// Pointer moved with the button held.
    ///
    /// While drag-selecting outside the text area the view scrolls one line
    /// per call toward the pointer.
    pub fn pointer_dragged(&mut self, x: f64, y: f64, metrics: &dyn TextMetrics) {
        match self.pointer_mode {
            PointerMode::ScrollbarDragging => self.scroll.drag_to(y),
            PointerMode::DragSelecting => {
                let area = self.text_area();
                if y < area.y {
                    self.scroll.scroll_by(-1);
                } else if y >= area.bottom() {
                    self.scroll.scroll_by(1);
                }

                let visible = self.scroll.max_lines() as f64 * self.line_height;
                let bottom = area.y + visible.min(area.height) - 1.0;
                let y = y.clamp(area.y, bottom.max(area.y));
                let offset = self.hit_test(x, y, metrics);
                self.extend_to(offset);
            }
            PointerMode::Idle | PointerMode::MultiClickPending => {}
        }
    }

    /// Button went up; any gesture ends
    pub fn pointer_released(&mut self) {
        if self.pointer_mode == PointerMode::ScrollbarDragging {
            self.scroll.end_drag();
            tracing::debug!(offset = self.scroll.offset(), "scrollbar drag ended");
        }
        self.pointer_mode = PointerMode::Idle;
    }
}
