//! Clipboard access.
//!
//! - [`Clipboard`] - The operations a backend provides
//! - [`ClipboardSession`] - Holds a backend open and closes it on drop
//! - [`MemoryClipboard`] - In-process backend
//! - `SystemClipboard` - Platform backend (feature `system-clipboard`)
//!
//! The system clipboard is a shared, exclusive resource: while one process
//! has it open, others wait. [`ClipboardSession`] guarantees the backend is
//! closed on every path out of a transfer, including early returns.

mod memory;
#[cfg(feature = "system-clipboard")]
mod system;

use std::fmt;

use tracing::debug;

pub use memory::MemoryClipboard;
#[cfg(feature = "system-clipboard")]
pub use system::SystemClipboard;

use crate::codec::Utf16Payload;
use crate::error::ClipError;

/// A text clipboard backend.
///
/// Callers should go through [`ClipboardSession`] rather than pairing
/// `open` and `close` by hand.
pub trait Clipboard {
    /// Acquires exclusive access.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::ClipboardUnavailable`] if access is refused.
    fn open(&mut self) -> Result<(), ClipError>;

    /// Removes the current contents.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::Clipboard`] if the backend refuses.
    fn empty(&mut self) -> Result<(), ClipError>;

    /// Returns the current text, or `None` if the clipboard holds no text.
    fn get_text(&mut self) -> Option<Utf16Payload>;

    /// Stores `payload` as the clipboard text.
    ///
    /// On success the clipboard owns the payload. On failure it is handed
    /// back inside [`Rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] if the backend refuses the payload.
    fn set_text(&mut self, payload: Utf16Payload) -> Result<(), Rejected>;

    /// Releases exclusive access.
    fn close(&mut self);
}

/// A payload the clipboard refused, returned to the caller.
///
/// Dropping it releases the payload.
#[derive(Debug)]
pub struct Rejected {
    payload: Utf16Payload,
    reason: String,
}

impl Rejected {
    /// Wraps a refused payload with the backend's reason.
    pub fn new(payload: Utf16Payload, reason: impl Into<String>) -> Self {
        Self {
            payload,
            reason: reason.into(),
        }
    }

    /// Returns the refused payload.
    pub fn payload(&self) -> &Utf16Payload {
        &self.payload
    }

    /// Returns the backend's reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Takes the payload back.
    pub fn into_payload(self) -> Utf16Payload {
        self.payload
    }
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "clipboard rejected {} units of text: {}",
            self.payload.len(),
            self.reason
        )
    }
}

impl std::error::Error for Rejected {}

impl From<Rejected> for ClipError {
    fn from(rejected: Rejected) -> Self {
        ClipError::Clipboard {
            reason: rejected.to_string(),
        }
    }
}

/// An open clipboard. Closing happens when the session is dropped.
///
/// # Example
///
/// ```
/// use clipio::{ClipboardSession, MemoryClipboard, Utf16Payload};
///
/// let mut clipboard = MemoryClipboard::new();
/// {
///     let mut session = ClipboardSession::open(&mut clipboard)?;
///     session.empty()?;
///     session.set_text(Utf16Payload::from_text("hi"))?;
/// }
/// assert!(!clipboard.is_open());
/// assert_eq!(clipboard.text().unwrap().to_string_lossy(), "hi");
/// # Ok::<(), clipio::ClipError>(())
/// ```
pub struct ClipboardSession<'a, C: Clipboard + ?Sized> {
    clipboard: &'a mut C,
}

impl<'a, C: Clipboard + ?Sized> ClipboardSession<'a, C> {
    /// Opens `clipboard` for the lifetime of the session.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`Clipboard::open`] error; nothing needs to
    /// be closed in that case.
    pub fn open(clipboard: &'a mut C) -> Result<Self, ClipError> {
        clipboard.open()?;
        debug!("clipboard opened");
        Ok(Self { clipboard })
    }

    /// Removes the current contents.
    ///
    /// # Errors
    ///
    /// See [`Clipboard::empty`].
    pub fn empty(&mut self) -> Result<(), ClipError> {
        self.clipboard.empty()
    }

    /// Returns the current text, if any.
    pub fn get_text(&mut self) -> Option<Utf16Payload> {
        self.clipboard.get_text()
    }

    /// Stores `payload` as the clipboard text.
    ///
    /// # Errors
    ///
    /// See [`Clipboard::set_text`].
    pub fn set_text(&mut self, payload: Utf16Payload) -> Result<(), Rejected> {
        self.clipboard.set_text(payload)
    }

    /// Closes the clipboard now.
    pub fn close(self) {}
}

impl<C: Clipboard + ?Sized> Drop for ClipboardSession<'_, C> {
    fn drop(&mut self) {
        self.clipboard.close();
        debug!("clipboard closed");
    }
}

impl<C: Clipboard + ?Sized> fmt::Debug for ClipboardSession<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipboardSession").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_closes_on_drop() {
        let mut clipboard = MemoryClipboard::new();
        {
            let _session = ClipboardSession::open(&mut clipboard).unwrap();
        }
        assert!(!clipboard.is_open());
        assert_eq!(clipboard.opens(), 1);
        assert_eq!(clipboard.closes(), 1);
    }

    #[test]
    fn test_session_closes_on_early_return() {
        fn fails(clipboard: &mut MemoryClipboard) -> Result<(), ClipError> {
            let mut session = ClipboardSession::open(clipboard)?;
            session.set_text(Utf16Payload::from_text("x"))?;
            Ok(())
        }

        let mut clipboard = MemoryClipboard::new().rejecting_sets();
        assert!(matches!(fails(&mut clipboard), Err(ClipError::Clipboard { .. })));
        assert!(!clipboard.is_open());
        assert_eq!(clipboard.closes(), 1);
    }

    #[test]
    fn test_failed_open_does_not_close() {
        let mut clipboard = MemoryClipboard::unavailable();
        let err = ClipboardSession::open(&mut clipboard).unwrap_err();
        assert!(matches!(err, ClipError::ClipboardUnavailable { .. }));
        assert_eq!(clipboard.closes(), 0);
    }

    #[test]
    fn test_rejected_returns_payload() {
        let mut clipboard = MemoryClipboard::new().rejecting_sets();
        let mut session = ClipboardSession::open(&mut clipboard).unwrap();
        let rejected = session
            .set_text(Utf16Payload::from_text("keep me"))
            .unwrap_err();
        assert_eq!(rejected.payload().to_string_lossy(), "keep me");
        assert_eq!(rejected.into_payload().len(), 7);
    }

    #[test]
    fn test_session_over_trait_object() {
        let mut clipboard = MemoryClipboard::new();
        let dynamic: &mut dyn Clipboard = &mut clipboard;
        let mut session = ClipboardSession::open(dynamic).unwrap();
        session.set_text(Utf16Payload::from_text("dyn")).unwrap();
        session.close();
        assert_eq!(clipboard.text().unwrap().to_string_lossy(), "dyn");
    }
}
