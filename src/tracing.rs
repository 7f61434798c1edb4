//! Logging setup and selection-change diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=trace` - cursor/selection changes per command
//! - `RUST_LOG=editcore::editable=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/editcore/logs/editcore.log` with daily rotation.
//! File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::TextEditEngine;

/// Install the global subscriber: stderr plus a rotating debug log file
///
/// Console output respects RUST_LOG and defaults to `warn`.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "editcore.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Cursor and selection state captured before and after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub cursor: usize,
    pub anchor: usize,
    pub active: usize,
    pub selection_empty: bool,
}

impl SelectionSnapshot {
    pub fn from_engine(engine: &TextEditEngine) -> Self {
        let selection = engine.selection();
        Self {
            cursor: engine.cursor(),
            anchor: selection.anchor(),
            active: selection.active(),
            selection_empty: selection.is_empty(),
        }
    }

    /// Human-readable description of what changed, or `None` when nothing did
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.cursor != other.cursor {
            changes.push(format!("cursor: {} → {}", self.cursor, other.cursor));
        }
        if self.selection_empty != other.selection_empty {
            let status = if other.selection_empty {
                "cleared"
            } else {
                "active"
            };
            changes.push(format!("selection {}", status));
        }
        if !other.selection_empty && self.anchor != other.anchor {
            changes.push(format!("anchor: {} → {}", self.anchor, other.anchor));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
