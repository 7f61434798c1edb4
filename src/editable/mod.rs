//! Multi-line text editing engine.
//!
//! # Architecture
//!
//! [`TextEditEngine`] owns one document and keeps it consistent while a host
//! feeds it commands and per-frame input. It is composed of small parts that
//! can each be used and tested alone:
//!
//! - [`TextBuffer`]: UTF-8 text with a lazily rebuilt line index ([`PositionMapper`])
//! - [`SelectionBounds`]: anchor/active byte offsets
//! - [`UndoHistory`]: bounded whole-document snapshots
//! - [`ScrollWindow`]: visible line range and scrollbar geometry
//! - [`ClickClassifier`]: single/double/triple click detection by frame
//! - [`KeyRepeatController`]: held-key auto-repeat by frame
//! - [`TextEditMsg`]: every command the engine understands
//!
//! Offsets are byte offsets into the text and always sit on char
//! boundaries. Columns count chars.
//!
//! # Example
//!
//! ```
//! use editcore::config::EngineConfig;
//! use editcore::editable::TextEditEngine;
//!
//! let mut engine = TextEditEngine::new(EngineConfig::default(), 16.0);
//! engine.insert_char('h');
//! engine.insert_char('i');
//! assert_eq!(engine.text(), "hi");
//! assert_eq!(engine.cursor(), 2);
//! ```

mod buffer;
mod click;
mod engine;
mod history;
mod messages;
mod pointer;
mod position;
mod repeat;
mod scroll;
mod selection;
mod view;

pub use buffer::TextBuffer;
pub use click::{ClickClassifier, ClickKind, DEFAULT_DOUBLE_CLICK_FRAMES};
pub use engine::{PointerMode, TextEditEngine};
pub use history::{Snapshot, UndoHistory, DEFAULT_UNDO_LIMIT};
pub use messages::{MoveTarget, TextEditMsg};
pub use position::{
    clamp_offset, is_separator, next_char_boundary, prev_char_boundary, word_bounds_at, word_end,
    word_start, Position, PositionMapper,
};
pub use repeat::{
    KeyRepeatController, KeyRepeatState, DEFAULT_REPEAT_DELAY_FRAMES,
    DEFAULT_REPEAT_INTERVAL_FRAMES,
};
pub use scroll::{ScrollWindow, DEFAULT_MIN_THUMB_HEIGHT};
pub use selection::SelectionBounds;
pub use view::EngineView;
