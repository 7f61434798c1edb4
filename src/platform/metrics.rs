//! Text measurement used for hit-testing and layout.

use std::path::Path;

use anyhow::Context;
use fontdue::{Font, FontSettings};

/// Tab width in columns for measurement
pub const TABULATOR_WIDTH: usize = 4;

/// Measures rendered text in the same units as pointer coordinates.
///
/// Results must be deterministic for a given string within a frame.
pub trait TextMetrics {
    /// Rendered `(width, height)` of `text`
    fn measure(&self, text: &str) -> (f64, f64);

    /// Height of one text line
    fn line_height(&self) -> f64;

    /// Width of a single char
    fn char_width(&self, ch: char) -> f64 {
        let mut buf = [0u8; 4];
        self.measure(ch.encode_utf8(&mut buf)).0
    }
}

/// Fixed-advance metrics (terminal-style grids, tests, the replay tool).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub char_width: f64,
    pub line_height: f64,
}

impl MonospaceMetrics {
    pub fn new(char_width: f64, line_height: f64) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure(&self, text: &str) -> (f64, f64) {
        let columns: usize = text
            .chars()
            .map(|ch| if ch == '\t' { TABULATOR_WIDTH } else { 1 })
            .sum();
        (columns as f64 * self.char_width, self.line_height)
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }
}

/// Proportional metrics backed by a fontdue font.
pub struct FontMetrics {
    font: Font,
    px: f32,
    line_height: f64,
}

impl FontMetrics {
    /// Load a font from raw TTF/OTF bytes at the given pixel size
    pub fn from_bytes(bytes: &[u8], px: f32) -> anyhow::Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| anyhow::anyhow!("Failed to load font: {}", e))?;

        let line_height = font
            .horizontal_line_metrics(px)
            .map(|metrics| metrics.new_line_size.ceil() as f64)
            .unwrap_or_else(|| (px * 1.2).ceil() as f64);

        Ok(Self {
            font,
            px,
            line_height,
        })
    }

    /// Load a font file from disk
    pub fn from_file(path: &Path, px: f32) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read font {}", path.display()))?;
        Self::from_bytes(&bytes, px)
    }

    fn advance(&self, ch: char) -> f64 {
        if ch == '\t' {
            return self.font.metrics(' ', self.px).advance_width as f64 * TABULATOR_WIDTH as f64;
        }
        self.font.metrics(ch, self.px).advance_width as f64
    }
}

impl TextMetrics for FontMetrics {
    fn measure(&self, text: &str) -> (f64, f64) {
        let width = text.chars().map(|ch| self.advance(ch)).sum();
        (width, self.line_height)
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }

    fn char_width(&self, ch: char) -> f64 {
        self.advance(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_measure() {
        let metrics = MonospaceMetrics::new(10.0, 20.0);
        assert_eq!(metrics.measure("hello"), (50.0, 20.0));
        assert_eq!(metrics.measure(""), (0.0, 20.0));
        assert_eq!(metrics.char_width('é'), 10.0);
    }

    #[test]
    fn test_monospace_tab_is_wide() {
        let metrics = MonospaceMetrics::new(10.0, 20.0);
        assert_eq!(metrics.measure("\tx").0, 50.0);
    }

    #[test]
    fn test_font_metrics_rejects_garbage() {
        assert!(FontMetrics::from_bytes(b"not a font", 14.0).is_err());
    }
}
