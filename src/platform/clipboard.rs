//! Clipboard access.
//!
//! Failures are never fatal to the engine: a failed read or write leaves the
//! buffer untouched and the error is handed back to the host to log.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard backend error: {0}")]
    Backend(#[from] arboard::Error),
}

/// Read/write access to a clipboard.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
    fn read(&mut self) -> Result<String, ClipboardError>;
}

/// In-process clipboard with optional failure injection.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: String,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(text: &str) -> Self {
        Self {
            contents: text.to_string(),
            ..Self::default()
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail_writes {
            return Err(ClipboardError::Unavailable("write rejected".to_string()));
        }
        self.contents = text.to_string();
        Ok(())
    }

    fn read(&mut self) -> Result<String, ClipboardError> {
        if self.fail_reads {
            return Err(ClipboardError::Unavailable("read rejected".to_string()));
        }
        Ok(self.contents.clone())
    }
}

/// The operating system clipboard via arboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(text)?;
        Ok(())
    }

    fn read(&mut self) -> Result<String, ClipboardError> {
        Ok(self.inner.get_text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_round_trip() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.write("copied").unwrap();
        assert_eq!(clipboard.read().unwrap(), "copied");
    }

    #[test]
    fn test_memory_clipboard_failures_keep_contents() {
        let mut clipboard = MemoryClipboard::with_contents("kept");
        clipboard.fail_writes = true;
        assert!(clipboard.write("new").is_err());
        assert_eq!(clipboard.contents(), "kept");

        clipboard.fail_reads = true;
        let err = clipboard.read().unwrap_err();
        assert!(err.to_string().contains("read rejected"));
    }
}
