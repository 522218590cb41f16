//! The platform clipboard, through `arboard`.

use std::fmt;

use tracing::warn;

use super::{Clipboard, Rejected};
use crate::codec::Utf16Payload;
use crate::error::ClipError;

/// The operating system clipboard.
///
/// Opening creates the platform handle and closing drops it. On X11 and
/// Wayland the selection is owned by the process that set it, so by default
/// [`Clipboard::set_text`] blocks there until another program takes the
/// clipboard over. Elsewhere the setting returns immediately.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    wait: bool,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self {
            inner: None,
            wait: true,
        }
    }
}

impl SystemClipboard {
    /// Creates a closed handle that serves set text until it is replaced.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle whose `set_text` returns as soon as the text is
    /// handed over, even where the text then only lives as long as a
    /// clipboard manager keeps it.
    pub fn without_wait(mut self) -> Self {
        self.wait = false;
        self
    }

    /// Returns `true` if `set_text` serves the text until it is replaced.
    pub fn waits(&self) -> bool {
        self.wait
    }

    fn inner(&mut self) -> Result<&mut arboard::Clipboard, ClipError> {
        self.inner.as_mut().ok_or_else(|| ClipError::Clipboard {
            reason: "clipboard is not open".to_string(),
        })
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .field("wait", &self.wait)
            .finish()
    }
}

impl Clipboard for SystemClipboard {
    fn open(&mut self) -> Result<(), ClipError> {
        let clipboard = arboard::Clipboard::new().map_err(|e| ClipError::ClipboardUnavailable {
            reason: e.to_string(),
        })?;
        self.inner = Some(clipboard);
        Ok(())
    }

    fn empty(&mut self) -> Result<(), ClipError> {
        self.inner()?.clear().map_err(|e| ClipError::Clipboard {
            reason: e.to_string(),
        })
    }

    fn get_text(&mut self) -> Option<Utf16Payload> {
        let clipboard = self.inner.as_mut()?;
        match clipboard.get_text() {
            Ok(text) => Some(Utf16Payload::from_text(&text)),
            Err(arboard::Error::ContentNotAvailable) => None,
            Err(e) => {
                warn!(error = %e, "cannot read clipboard text");
                None
            }
        }
    }

    fn set_text(&mut self, payload: Utf16Payload) -> Result<(), Rejected> {
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(Rejected::new(payload, "clipboard is not open"));
        };
        let text = payload.to_string_lossy();
        match set_text(clipboard, text, self.wait) {
            Ok(()) => Ok(()),
            Err(e) => Err(Rejected::new(payload, e.to_string())),
        }
    }

    fn close(&mut self) {
        self.inner = None;
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_text(clipboard: &mut arboard::Clipboard, text: String, wait: bool) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if wait {
        tracing::debug!("serving clipboard text until it is replaced");
        clipboard.set().wait().text(text)
    } else {
        clipboard.set_text(text)
    }
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_text(clipboard: &mut arboard::Clipboard, text: String, _wait: bool) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}
