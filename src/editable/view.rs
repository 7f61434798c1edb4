//! Read-only snapshot a renderer draws from.

use std::ops::Range;

use crate::geometry::Rect;

use super::engine::TextEditEngine;
use super::position::Position;

/// Everything needed to draw the widget for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineView<'a> {
    /// Visible lines, without their newline
    pub lines: Vec<&'a str>,
    /// Document line index of `lines[0]`
    pub first_line: usize,
    pub cursor: Position,
    /// Ordered (start, end) of a non-empty selection
    pub selection: Option<(Position, Position)>,
    pub text_area: Rect,
    pub line_height: f64,
    pub thumb: Option<Rect>,
    pub focused: bool,
}

impl EngineView<'_> {
    /// Highlighted column ranges, one per visible line the selection touches
    pub fn selection_spans(&self) -> Vec<(usize, Range<usize>)> {
        let Some((start, end)) = self.selection else {
            return Vec::new();
        };

        self.lines
            .iter()
            .enumerate()
            .map(|(i, text)| (self.first_line + i, text))
            .filter(|(line, _)| (start.line..=end.line).contains(line))
            .map(|(line, text)| {
                let from = if line == start.line { start.column } else { 0 };
                let to = if line == end.line {
                    end.column
                } else {
                    text.chars().count()
                };
                (line, from..to)
            })
            .collect()
    }

    /// Is the cursor on a visible line
    pub fn cursor_visible(&self) -> bool {
        (self.first_line..self.first_line + self.lines.len()).contains(&self.cursor.line)
    }
}

impl TextEditEngine {
    /// Snapshot the visible state for rendering
    pub fn view(&mut self) -> EngineView<'_> {
        let cursor = self.buffer.position_of(self.cursor);
        let selection = (!self.selection.is_empty()).then(|| {
            let (min, max) = self.selection.bounds();
            (self.buffer.position_of(min), self.buffer.position_of(max))
        });

        let visible = self.scroll.visible_range();
        let last_line = self.buffer.line_count();
        let ranges: Vec<Range<usize>> = (visible.start..visible.end.min(last_line))
            .map(|line| self.buffer.line_range(line))
            .collect();

        let text_area = self.text_area();
        let thumb = self.scroll.thumb();
        let text = self.buffer.as_str();

        EngineView {
            lines: ranges.into_iter().map(|range| &text[range]).collect(),
            first_line: visible.start,
            cursor,
            selection,
            text_area,
            line_height: self.line_height,
            thumb,
            focused: self.focused,
        }
    }
}
