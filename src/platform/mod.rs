//! Collaborators the engine talks to but does not own: text measurement and
//! the clipboard.

mod clipboard;
mod metrics;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use metrics::{FontMetrics, MonospaceMetrics, TextMetrics, TABULATOR_WIDTH};
