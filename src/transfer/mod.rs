//! One-shot transfers between a byte stream and a clipboard.
//!
//! - [`copy_in`] - Read a stream into the clipboard
//! - [`paste_out`] - Write the clipboard text to a stream
//! - [`clear`] - Empty the clipboard
//! - [`run`] - Dispatch on a [`Direction`]
//!
//! Each transfer walks the [`Stage`]s in order and ends in [`Stage::Done`]
//! whether it succeeds or fails; nothing is retried.
//!
//! # Example
//!
//! ```
//! use clipio::{MemoryClipboard, TransferConfig, copy_in, paste_out};
//! use std::io::Cursor;
//!
//! let mut clipboard = MemoryClipboard::new();
//!
//! let config = TransferConfig::default().with_expand_crlf(true);
//! copy_in(Cursor::new(b"a\nb"), &mut clipboard, &config)?;
//! assert_eq!(clipboard.text().unwrap().to_string_lossy(), "a\r\nb");
//!
//! let config = TransferConfig::default().with_strip_crlf(true);
//! let mut out = Vec::new();
//! paste_out(&mut out, &mut clipboard, &config)?;
//! assert_eq!(out, b"a\nb");
//! # Ok::<(), clipio::ClipError>(())
//! ```

use std::fmt;
use std::io::{Read, Write};

use tracing::debug;

use crate::buffer::ingest;
use crate::clipboard::{Clipboard, ClipboardSession};
use crate::config::TransferConfig;
use crate::error::ClipError;
use crate::stream::emit;

/// What a transfer does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Input stream to clipboard.
    CopyIn,
    /// Clipboard to output stream.
    PasteOut,
    /// Empty the clipboard.
    Clear,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::CopyIn => "copy-in",
            Direction::PasteOut => "paste-out",
            Direction::Clear => "clear",
        })
    }
}

/// Pipeline stages of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Nothing has happened yet.
    Idle,
    /// Reading the input stream.
    Reading,
    /// Rewriting line endings.
    Transforming,
    /// Converting between the code page and UTF-16.
    Transcoding,
    /// Holding the clipboard open.
    ClipboardIo,
    /// Finished, successfully or not.
    Done,
}

/// Summary of a finished transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferReport {
    /// The direction that ran.
    pub direction: Direction,
    /// Bytes on the stream side: finalized input or written output.
    pub bytes: usize,
    /// UTF-16 text units stored in or read from the clipboard.
    pub units: usize,
}

impl TransferReport {
    fn empty(direction: Direction) -> Self {
        Self {
            direction,
            bytes: 0,
            units: 0,
        }
    }
}

/// Logs stage transitions of one transfer.
struct Stages {
    direction: Direction,
    current: Stage,
}

impl Stages {
    fn new(direction: Direction) -> Self {
        Self {
            direction,
            current: Stage::Idle,
        }
    }

    fn advance(&mut self, next: Stage) {
        debug!(direction = %self.direction, from = ?self.current, to = ?next, "stage");
        self.current = next;
    }

    fn finish<T>(mut self, result: &Result<T, ClipError>) {
        if let Err(e) = result {
            debug!(direction = %self.direction, stage = ?self.current, error = %e, "transfer failed");
        }
        self.advance(Stage::Done);
    }
}

/// Reads `reader` to the end and stores it as the clipboard text.
///
/// The input is buffered and transcoded before the clipboard is opened. The
/// clipboard is always emptied; it is only populated when the input is not
/// empty.
///
/// # Errors
///
/// Any error from ingestion, transcoding or the clipboard. The clipboard is
/// closed again on every error after it was opened.
pub fn copy_in<R, C>(
    reader: R,
    clipboard: &mut C,
    config: &TransferConfig,
) -> Result<TransferReport, ClipError>
where
    R: Read,
    C: Clipboard + ?Sized,
{
    let mut stages = Stages::new(Direction::CopyIn);
    let result = copy_in_stages(reader, clipboard, config, &mut stages);
    stages.finish(&result);
    result
}

fn copy_in_stages<R: Read, C: Clipboard + ?Sized>(
    reader: R,
    clipboard: &mut C,
    config: &TransferConfig,
    stages: &mut Stages,
) -> Result<TransferReport, ClipError> {
    stages.advance(Stage::Reading);
    let bytes = ingest(reader, config)?;

    stages.advance(Stage::Transcoding);
    let payload = config.transcoder().to_utf16(&bytes)?;
    let report = TransferReport {
        direction: Direction::CopyIn,
        bytes: bytes.len(),
        units: payload.len(),
    };
    drop(bytes);

    stages.advance(Stage::ClipboardIo);
    let mut session = ClipboardSession::open(clipboard)?;
    session.empty()?;
    if report.bytes == 0 {
        debug!("empty input, clipboard left empty");
    } else {
        session.set_text(payload)?;
    }

    Ok(report)
}

/// Writes the clipboard text to `writer`.
///
/// The clipboard is closed as soon as its text has been copied out. If the
/// clipboard holds no text, or empty text, nothing is written.
///
/// # Errors
///
/// Any error from the clipboard, transcoding or the writer.
pub fn paste_out<W, C>(
    writer: W,
    clipboard: &mut C,
    config: &TransferConfig,
) -> Result<TransferReport, ClipError>
where
    W: Write,
    C: Clipboard + ?Sized,
{
    let mut stages = Stages::new(Direction::PasteOut);
    let result = paste_out_stages(writer, clipboard, config, &mut stages);
    stages.finish(&result);
    result
}

fn paste_out_stages<W: Write, C: Clipboard + ?Sized>(
    writer: W,
    clipboard: &mut C,
    config: &TransferConfig,
    stages: &mut Stages,
) -> Result<TransferReport, ClipError> {
    stages.advance(Stage::ClipboardIo);
    let payload = ClipboardSession::open(clipboard)?.get_text();
    let Some(payload) = payload.filter(|p| !p.is_empty()) else {
        debug!("clipboard holds no text");
        return Ok(TransferReport::empty(Direction::PasteOut));
    };

    stages.advance(Stage::Transcoding);
    let mut bytes = config.transcoder().from_utf16(payload.as_units())?;
    let units = payload.len();
    drop(payload);

    stages.advance(Stage::Transforming);
    let written = emit(writer, &mut bytes, config.strip_crlf())?;

    Ok(TransferReport {
        direction: Direction::PasteOut,
        bytes: written,
        units,
    })
}

/// Empties the clipboard.
///
/// # Errors
///
/// Any error from the clipboard.
pub fn clear<C: Clipboard + ?Sized>(clipboard: &mut C) -> Result<TransferReport, ClipError> {
    let mut stages = Stages::new(Direction::Clear);
    stages.advance(Stage::ClipboardIo);
    let result = ClipboardSession::open(clipboard)
        .and_then(|mut session| session.empty())
        .map(|()| TransferReport::empty(Direction::Clear));
    stages.finish(&result);
    result
}

/// Runs one transfer in the given direction.
///
/// Only the stream the direction needs is touched.
///
/// # Errors
///
/// See [`copy_in`], [`paste_out`] and [`clear`].
pub fn run<R, W, C>(
    direction: Direction,
    reader: R,
    writer: W,
    clipboard: &mut C,
    config: &TransferConfig,
) -> Result<TransferReport, ClipError>
where
    R: Read,
    W: Write,
    C: Clipboard + ?Sized,
{
    match direction {
        Direction::CopyIn => copy_in(reader, clipboard, config),
        Direction::PasteOut => paste_out(writer, clipboard, config),
        Direction::Clear => clear(clipboard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use std::io::{self, Cursor};

    #[test]
    fn test_copy_in_plain() {
        let mut clipboard = MemoryClipboard::new();
        let report = copy_in(Cursor::new(b"hello"), &mut clipboard, &TransferConfig::default())
            .unwrap();
        assert_eq!(report.bytes, 5);
        assert_eq!(report.units, 5);
        assert_eq!(clipboard.text().unwrap().to_string_lossy(), "hello");
        assert!(!clipboard.is_open());
    }

    #[test]
    fn test_copy_in_empty_input_empties_clipboard() {
        let mut clipboard = MemoryClipboard::with_text("previous");
        let report = copy_in(Cursor::new(b""), &mut clipboard, &TransferConfig::default())
            .unwrap();
        assert_eq!(report.bytes, 0);
        assert!(clipboard.text().is_none());
        assert_eq!(clipboard.closes(), 1);
    }

    #[test]
    fn test_copy_in_read_error_leaves_clipboard_untouched() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::ErrorKind::Other.into())
            }
        }

        let mut clipboard = MemoryClipboard::with_text("keep");
        let err = copy_in(Broken, &mut clipboard, &TransferConfig::default()).unwrap_err();
        assert!(matches!(err, ClipError::Read(_)));
        assert_eq!(clipboard.opens(), 0);
        assert_eq!(clipboard.text().unwrap().to_string_lossy(), "keep");
    }

    #[test]
    fn test_copy_in_rejected_closes_clipboard() {
        let mut clipboard = MemoryClipboard::new().rejecting_sets();
        let err = copy_in(Cursor::new(b"x"), &mut clipboard, &TransferConfig::default())
            .unwrap_err();
        assert!(matches!(err, ClipError::Clipboard { .. }));
        assert!(!clipboard.is_open());
    }

    #[test]
    fn test_paste_out_contracts() {
        let mut clipboard = MemoryClipboard::with_text("a\r\nb");
        let config = TransferConfig::default().with_strip_crlf(true);
        let mut out = Vec::new();
        let report = paste_out(&mut out, &mut clipboard, &config).unwrap();
        assert_eq!(out, b"a\nb");
        assert_eq!(report.bytes, 3);
        assert_eq!(report.units, 4);
    }

    #[test]
    fn test_paste_out_without_text() {
        let mut clipboard = MemoryClipboard::new();
        let mut out = Vec::new();
        let report = paste_out(&mut out, &mut clipboard, &TransferConfig::default()).unwrap();
        assert_eq!(report, TransferReport::empty(Direction::PasteOut));
        assert!(out.is_empty());
        assert!(!clipboard.is_open());
        assert_eq!(clipboard.closes(), 1);
    }

    #[test]
    fn test_paste_out_empty_text_writes_nothing() {
        let mut clipboard = MemoryClipboard::with_text("");
        let mut out = Vec::new();
        paste_out(&mut out, &mut clipboard, &TransferConfig::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_paste_out_unavailable() {
        let mut clipboard = MemoryClipboard::unavailable();
        let err = paste_out(Vec::new(), &mut clipboard, &TransferConfig::default()).unwrap_err();
        assert!(matches!(err, ClipError::ClipboardUnavailable { .. }));
    }

    #[test]
    fn test_clear() {
        let mut clipboard = MemoryClipboard::with_text("gone");
        let report = clear(&mut clipboard).unwrap();
        assert_eq!(report.direction, Direction::Clear);
        assert!(clipboard.text().is_none());
        assert!(!clipboard.is_open());
    }

    #[test]
    fn test_run_dispatch() {
        let mut clipboard = MemoryClipboard::new();
        let config = TransferConfig::default();

        run(Direction::CopyIn, Cursor::new(b"xyz"), io::sink(), &mut clipboard, &config).unwrap();

        let mut out = Vec::new();
        let report = run(Direction::PasteOut, io::empty(), &mut out, &mut clipboard, &config)
            .unwrap();
        assert_eq!(report.direction, Direction::PasteOut);
        assert_eq!(out, b"xyz");
    }
}
