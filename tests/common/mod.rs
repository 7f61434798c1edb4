//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use editcore::config::EngineConfig;
use editcore::editable::TextEditEngine;
use editcore::platform::{MemoryClipboard, MonospaceMetrics};

/// Line height used by every test engine
pub const LINE_HEIGHT: f64 = 16.0;
/// Char advance used by every test engine
pub const CHAR_WIDTH: f64 = 8.0;

/// Config with no padding so pointer math starts at the widget origin
pub fn test_config() -> EngineConfig {
    EngineConfig {
        padding: 0.0,
        ..EngineConfig::default()
    }
}

/// Create a focused engine with given text and cursor offset, sized to show
/// `visible_lines` lines
pub fn test_engine_sized(text: &str, cursor: usize, visible_lines: usize) -> TextEditEngine {
    let mut engine = TextEditEngine::with_text(text, test_config(), LINE_HEIGHT);
    engine.resize(400.0, visible_lines as f64 * LINE_HEIGHT);
    engine.set_focused(true);
    engine.ctrl_home();
    for _ in 0..text[..cursor].chars().count() {
        engine.move_right();
    }
    assert_eq!(engine.cursor(), cursor, "cursor must land on a char boundary");
    engine
}

/// Create a focused engine with given text and cursor offset
pub fn test_engine(text: &str, cursor: usize) -> TextEditEngine {
    test_engine_sized(text, cursor, 25)
}

pub fn metrics() -> MonospaceMetrics {
    MonospaceMetrics::new(CHAR_WIDTH, LINE_HEIGHT)
}

pub fn clipboard() -> MemoryClipboard {
    MemoryClipboard::new()
}

/// Pointer coordinates of (line, column) in a monospace test engine with
/// no scroll, aimed at the left edge of the char
pub fn point_at(line: usize, column: usize) -> (f64, f64) {
    (
        column as f64 * CHAR_WIDTH + 1.0,
        line as f64 * LINE_HEIGHT + LINE_HEIGHT / 2.0,
    )
}

/// `n` numbered lines "line 0", "line 1", ...
pub fn numbered_lines(n: usize) -> String {
    (0..n)
        .map(|i| format!("line {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}
