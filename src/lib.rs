//! clipio
//!
//! Move text between byte streams and the clipboard.
//!
//! `clipio` reads an input stream of unknown length into a single growable
//! buffer, optionally expanding bare LF to CRLF in place while it reads, and
//! hands the result to the clipboard as UTF-16. In the other direction it
//! converts the clipboard text back to bytes, optionally contracts CRLF to
//! LF in place, and writes it out.
//!
//! The crate intentionally:
//! - does NOT handle clipboard formats other than plain text
//! - does NOT stream output (the whole input is buffered first)
//! - does NOT manage concurrency
//!
//! # Copy in
//!
//! ```
//! use clipio::{MemoryClipboard, TransferConfig, copy_in};
//! use std::io::Cursor;
//!
//! let mut clipboard = MemoryClipboard::new();
//! let config = TransferConfig::default().with_expand_crlf(true);
//!
//! let report = copy_in(Cursor::new(b"line1\nline2\n"), &mut clipboard, &config)?;
//! assert_eq!(report.bytes, 14);
//! # Ok::<(), clipio::ClipError>(())
//! ```
//!
//! # Paste out
//!
//! ```
//! use clipio::{CodePage, MemoryClipboard, TransferConfig, paste_out};
//!
//! let mut clipboard = MemoryClipboard::with_text("a\r\nb");
//! let config = TransferConfig::new(CodePage::Utf8).with_strip_crlf(true);
//!
//! let mut out = Vec::new();
//! paste_out(&mut out, &mut clipboard, &config)?;
//! assert_eq!(out, b"a\nb");
//! # Ok::<(), clipio::ClipError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod clipboard;
mod codec;
mod config;
mod error;
mod stream;
mod transfer;

pub mod eol;

//
// Public surface
//

pub use buffer::{BufferLayout, TransformBuffer, ingest};
pub use clipboard::{Clipboard, ClipboardSession, MemoryClipboard, Rejected};
pub use codec::{CodePage, Transcoder, Utf16Payload};
pub use config::{DEFAULT_INCREMENT, MAX_INITIAL_INCREMENT, ReadFailure, TransferConfig};
pub use error::ClipError;
pub use stream::emit;
pub use transfer::{Direction, Stage, TransferReport, clear, copy_in, paste_out, run};

#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
