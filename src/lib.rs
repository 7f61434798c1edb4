//! editcore - a multi-line text editing engine
//!
//! This crate provides the buffer, cursor, selection, undo, scrolling and
//! pointer logic of a text widget, driven one frame at a time by a host that
//! supplies input, text measurement and a clipboard.

pub mod config;
pub mod config_paths;
pub mod editable;
pub mod geometry;
pub mod input;
pub mod platform;
pub mod script;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use config::EngineConfig;
pub use editable::{TextEditEngine, TextEditMsg};
pub use input::{FrameInput, InputSource, Key, Modifiers};
