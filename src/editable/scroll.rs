//! Vertical scroll window and scrollbar thumb geometry.

use std::ops::Range;

use crate::geometry::Rect;

/// Default minimum thumb height so tiny thumbs stay grabbable
pub const DEFAULT_MIN_THUMB_HEIGHT: f64 = 20.0;

/// Maps the first visible line to a scrollbar thumb and back.
///
/// Invariant: `offset <= total_lines.saturating_sub(max_lines)`.
#[derive(Debug, Clone)]
pub struct ScrollWindow {
    offset: usize,
    max_lines: usize,
    total_lines: usize,
    track: Rect,
    min_thumb_height: f64,
    /// Pointer distance from the thumb top while dragging
    drag_offset: Option<f64>,
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_THUMB_HEIGHT)
    }
}

impl ScrollWindow {
    pub fn new(min_thumb_height: f64) -> Self {
        Self {
            offset: 0,
            max_lines: 1,
            total_lines: 1,
            track: Rect::default(),
            min_thumb_height: min_thumb_height.max(0.0),
            drag_offset: None,
        }
    }

    /// Index of the first visible line
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Visible line capacity
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.max_lines)
    }

    /// Lines currently on screen
    pub fn visible_range(&self) -> Range<usize> {
        self.offset..(self.offset + self.max_lines).min(self.total_lines)
    }

    pub fn is_scrollable(&self) -> bool {
        self.total_lines > self.max_lines
    }

    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total.max(1);
        self.clamp();
    }

    /// Set the visible capacity (at least one line)
    pub fn set_max_lines(&mut self, max_lines: usize) {
        self.max_lines = max_lines.max(1);
        self.clamp();
    }

    pub fn set_track(&mut self, track: Rect) {
        self.track = track;
    }

    pub fn track(&self) -> Rect {
        self.track
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_to(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.scroll_to(target);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.max_lines);
    }

    pub fn page_down(&mut self) {
        self.scroll_to(self.offset.saturating_add(self.max_lines));
    }

    /// Scroll the minimum amount needed to show `line`
    pub fn ensure_visible(&mut self, line: usize) {
        if line < self.offset {
            self.offset = line;
        } else if line >= self.offset + self.max_lines {
            self.offset = line + 1 - self.max_lines;
        }
        self.clamp();
    }

    /// Thumb rectangle, or `None` when everything fits or the track is empty
    pub fn thumb(&self) -> Option<Rect> {
        if !self.is_scrollable() || self.track.height <= 0.0 || self.track.width <= 0.0 {
            return None;
        }

        let ratio = self.max_lines as f64 / self.total_lines as f64;
        let height = (self.track.height * ratio)
            .max(self.min_thumb_height)
            .min(self.track.height);
        let travel = self.track.height - height;
        let max_offset = self.max_offset().max(1) as f64;
        let y = self.track.y + travel * (self.offset as f64 / max_offset);

        Some(Rect::new(self.track.x, y, self.track.width, height))
    }

    pub fn track_contains(&self, x: f64, y: f64) -> bool {
        self.is_scrollable() && self.track.contains(x, y)
    }

    /// Start a thumb drag if `(x, y)` is on the thumb
    pub fn begin_drag(&mut self, x: f64, y: f64) -> bool {
        match self.thumb() {
            Some(thumb) if thumb.contains(x, y) => {
                self.drag_offset = Some(y - thumb.y);
                true
            }
            _ => false,
        }
    }

    /// Move the thumb so it follows the pointer and derive the offset
    pub fn drag_to(&mut self, pointer_y: f64) {
        let (Some(grab), Some(thumb)) = (self.drag_offset, self.thumb()) else {
            return;
        };

        let travel = self.track.height - thumb.height;
        if travel <= 0.0 {
            return;
        }

        let thumb_y = (pointer_y - grab).clamp(self.track.y, self.track.y + travel);
        let ratio = (thumb_y - self.track.y) / travel;
        let offset = (ratio * self.max_offset() as f64).round() as usize;
        self.scroll_to(offset);
    }

    pub fn end_drag(&mut self) {
        self.drag_offset = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }
}
