//! Error types for clipio.

use std::fmt;

use crate::codec::CodePage;

/// Errors that can occur while moving text between a stream and the clipboard.
#[derive(Debug)]
pub enum ClipError {
    /// The transform buffer could not grow.
    OutOfMemory {
        /// Total buffer size that was requested.
        requested: usize,
    },

    /// An I/O error occurred while reading input data.
    Read(std::io::Error),

    /// An I/O error occurred while writing output data.
    Write(std::io::Error),

    /// The input exceeded the configured maximum.
    InputTooLarge {
        /// Number of finalized bytes when the limit was hit.
        actual: usize,
        /// The maximum allowed size.
        max: usize,
    },

    /// The clipboard could not be opened.
    ClipboardUnavailable {
        /// Backend-supplied description.
        reason: String,
    },

    /// The clipboard was opened but refused an operation.
    Clipboard {
        /// Backend-supplied description.
        reason: String,
    },

    /// Text could not be converted in strict mode.
    Transcoding {
        /// The code page on the multi-byte side of the conversion.
        code_page: CodePage,
        /// Offset of the offending byte or code unit in the source.
        position: usize,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for ClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipError::OutOfMemory { requested } => {
                write!(f, "out of memory: cannot grow buffer to {} bytes", requested)
            }
            ClipError::Read(e) => write!(f, "read error: {}", e),
            ClipError::Write(e) => write!(f, "write error: {}", e),
            ClipError::InputTooLarge { actual, max } => {
                write!(f, "input too large: {} bytes (max {})", actual, max)
            }
            ClipError::ClipboardUnavailable { reason } => {
                write!(f, "clipboard unavailable: {}", reason)
            }
            ClipError::Clipboard { reason } => write!(f, "clipboard error: {}", reason),
            ClipError::Transcoding {
                code_page,
                position,
            } => write!(
                f,
                "cannot transcode {} text at offset {}",
                code_page, position
            ),
            ClipError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for ClipError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClipError::Read(e) | ClipError::Write(e) => Some(e),
            _ => None,
        }
    }
}
