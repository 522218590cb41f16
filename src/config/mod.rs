//! Configuration for a single transfer.
//!
//! - [`TransferConfig`] - Code page, line-ending transforms and buffer policy
//! - [`ReadFailure`] - What a failed read from the source means
//!
//! # Example
//!
//! ```
//! use clipio::{CodePage, TransferConfig};
//!
//! let config = TransferConfig::new(CodePage::Utf8)
//!     .with_expand_crlf(true)
//!     .with_max_input(16 * 1024 * 1024);
//! config.validate()?;
//!
//! # Ok::<(), clipio::ClipError>(())
//! ```

use crate::codec::{CodePage, Transcoder};
use crate::error::ClipError;

/// Default size of the first read request (2 KiB).
pub const DEFAULT_INCREMENT: usize = 2048;

/// Largest accepted initial read size (1 GiB).
pub const MAX_INITIAL_INCREMENT: usize = 1 << 30;

/// How a failing read from the input source is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReadFailure {
    /// Abort the transfer with [`ClipError::Read`].
    #[default]
    Propagate,
    /// Treat the failure as end of input and keep what was read so far.
    TreatAsEof,
}

/// Configuration for one transfer between a stream and the clipboard.
///
/// The direction is not part of the configuration; `expand_crlf` only
/// affects reading into the clipboard and `strip_crlf` only affects writing
/// out of it.
///
/// # Example
///
/// ```
/// use clipio::{CodePage, ReadFailure, TransferConfig};
///
/// let config = TransferConfig::default()
///     .with_code_page(CodePage::Oem)
///     .with_strip_crlf(true)
///     .with_read_failure(ReadFailure::TreatAsEof);
///
/// assert_eq!(config.code_page(), CodePage::Oem);
/// assert!(config.strip_crlf());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransferConfig {
    /// Code page on the stream side.
    code_page: CodePage,

    /// Expand bare LF to CRLF while ingesting.
    expand_crlf: bool,

    /// Contract CRLF to LF while emitting.
    strip_crlf: bool,

    /// Fail instead of substituting on undecodable or unmappable text.
    strict: bool,

    /// Size of the first read request; doubles on every buffer growth.
    initial_increment: usize,

    /// Upper bound on finalized input bytes.
    max_input: Option<usize>,

    /// Policy for failing reads.
    read_failure: ReadFailure,
}

impl TransferConfig {
    /// Creates a configuration for the given code page with no transforms.
    pub const fn new(code_page: CodePage) -> Self {
        Self {
            code_page,
            expand_crlf: false,
            strip_crlf: false,
            strict: false,
            initial_increment: DEFAULT_INCREMENT,
            max_input: None,
            read_failure: ReadFailure::Propagate,
        }
    }

    /// Sets the code page.
    pub const fn with_code_page(mut self, code_page: CodePage) -> Self {
        self.code_page = code_page;
        self
    }

    /// Enables LF to CRLF expansion on ingestion.
    pub const fn with_expand_crlf(mut self, expand: bool) -> Self {
        self.expand_crlf = expand;
        self
    }

    /// Enables CRLF to LF contraction on emission.
    pub const fn with_strip_crlf(mut self, strip: bool) -> Self {
        self.strip_crlf = strip;
        self
    }

    /// Enables strict transcoding.
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the size of the first read request.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`TransferConfig::validate`] to check it.
    pub const fn with_initial_increment(mut self, size: usize) -> Self {
        self.initial_increment = size;
        self
    }

    /// Limits the number of finalized input bytes.
    pub const fn with_max_input(mut self, max: usize) -> Self {
        self.max_input = Some(max);
        self
    }

    /// Sets the read failure policy.
    pub const fn with_read_failure(mut self, policy: ReadFailure) -> Self {
        self.read_failure = policy;
        self
    }

    /// Returns the code page.
    pub const fn code_page(&self) -> CodePage {
        self.code_page
    }

    /// Returns whether LF is expanded to CRLF on ingestion.
    pub const fn expand_crlf(&self) -> bool {
        self.expand_crlf
    }

    /// Returns whether CRLF is contracted to LF on emission.
    pub const fn strip_crlf(&self) -> bool {
        self.strip_crlf
    }

    /// Returns whether transcoding is strict.
    pub const fn strict(&self) -> bool {
        self.strict
    }

    /// Returns the size of the first read request.
    pub const fn initial_increment(&self) -> usize {
        self.initial_increment
    }

    /// Returns the input limit, if any.
    pub const fn max_input(&self) -> Option<usize> {
        self.max_input
    }

    /// Returns the read failure policy.
    pub const fn read_failure(&self) -> ReadFailure {
        self.read_failure
    }

    /// Returns a transcoder for this configuration.
    pub const fn transcoder(&self) -> Transcoder {
        Transcoder::new(self.code_page).with_strict(self.strict)
    }

    /// Validates the current configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::InvalidConfig`] if the initial increment is zero
    /// or larger than [`MAX_INITIAL_INCREMENT`].
    ///
    /// # Example
    ///
    /// ```
    /// use clipio::TransferConfig;
    ///
    /// let config = TransferConfig::default().with_initial_increment(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ClipError> {
        if self.initial_increment == 0 {
            return Err(ClipError::InvalidConfig {
                message: "initial increment must be non-zero",
            });
        }

        if self.initial_increment > MAX_INITIAL_INCREMENT {
            return Err(ClipError::InvalidConfig {
                message: "initial increment is too large",
            });
        }

        Ok(())
    }
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self::new(CodePage::default())
    }
}
