//! An in-process clipboard.

use super::{Clipboard, Rejected};
use crate::codec::Utf16Payload;
use crate::error::ClipError;

/// A clipboard that lives in process memory.
///
/// Behaves like a system clipboard that only one caller can open at a time,
/// and records how often it was opened and closed. It can be configured to
/// refuse access or refuse payloads.
///
/// # Example
///
/// ```
/// use clipio::{Clipboard, MemoryClipboard};
///
/// let mut clipboard = MemoryClipboard::with_text("hello");
/// clipboard.open()?;
/// assert_eq!(clipboard.get_text().unwrap().to_string_lossy(), "hello");
/// clipboard.close();
/// # Ok::<(), clipio::ClipError>(())
/// ```
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: Option<Utf16Payload>,
    is_open: bool,
    opens: usize,
    closes: usize,
    unavailable: bool,
    reject_sets: bool,
}

impl MemoryClipboard {
    /// Creates an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard holding `text`.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(Utf16Payload::from_text(text)),
            ..Self::default()
        }
    }

    /// Creates a clipboard that always refuses to open.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Makes every [`Clipboard::set_text`] fail.
    pub fn rejecting_sets(mut self) -> Self {
        self.reject_sets = true;
        self
    }

    /// Returns the stored text, if any.
    pub fn text(&self) -> Option<&Utf16Payload> {
        self.text.as_ref()
    }

    /// Returns `true` while a caller holds the clipboard open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Number of successful opens.
    pub fn opens(&self) -> usize {
        self.opens
    }

    /// Number of closes of an open clipboard.
    pub fn closes(&self) -> usize {
        self.closes
    }

    fn require_open(&self) -> Result<(), ClipError> {
        if self.is_open {
            Ok(())
        } else {
            Err(ClipError::Clipboard {
                reason: "clipboard is not open".to_string(),
            })
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn open(&mut self) -> Result<(), ClipError> {
        if self.unavailable || self.is_open {
            return Err(ClipError::ClipboardUnavailable {
                reason: "clipboard is held by another owner".to_string(),
            });
        }
        self.is_open = true;
        self.opens += 1;
        Ok(())
    }

    fn empty(&mut self) -> Result<(), ClipError> {
        self.require_open()?;
        self.text = None;
        Ok(())
    }

    fn get_text(&mut self) -> Option<Utf16Payload> {
        if !self.is_open {
            return None;
        }
        self.text.clone()
    }

    fn set_text(&mut self, payload: Utf16Payload) -> Result<(), Rejected> {
        if !self.is_open {
            return Err(Rejected::new(payload, "clipboard is not open"));
        }
        if self.reject_sets {
            return Err(Rejected::new(payload, "payload refused"));
        }
        self.text = Some(payload);
        Ok(())
    }

    fn close(&mut self) {
        if self.is_open {
            self.is_open = false;
            self.closes += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_open() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.open().unwrap();
        assert!(clipboard.open().is_err());
        clipboard.close();
        assert!(clipboard.open().is_ok());
        assert_eq!(clipboard.opens(), 2);
    }

    #[test]
    fn test_operations_require_open() {
        let mut clipboard = MemoryClipboard::with_text("x");
        assert!(clipboard.get_text().is_none());
        assert!(clipboard.empty().is_err());
        assert!(clipboard.set_text(Utf16Payload::from_text("y")).is_err());
        assert_eq!(clipboard.text().unwrap().to_string_lossy(), "x");
    }

    #[test]
    fn test_empty_then_set() {
        let mut clipboard = MemoryClipboard::with_text("old");
        clipboard.open().unwrap();
        clipboard.empty().unwrap();
        assert!(clipboard.get_text().is_none());
        clipboard.set_text(Utf16Payload::from_text("new")).unwrap();
        assert_eq!(clipboard.get_text().unwrap().to_string_lossy(), "new");
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.close();
        assert_eq!(clipboard.closes(), 0);
    }
}
