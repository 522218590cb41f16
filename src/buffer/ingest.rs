//! Reading a whole source into a [`TransformBuffer`].

use std::io::{ErrorKind, Read};

use bytes::Bytes;
use tracing::{debug, trace, warn};

use super::TransformBuffer;
use crate::config::{ReadFailure, TransferConfig};
use crate::error::ClipError;

/// Reads `reader` to the end, expanding LF to CRLF if configured.
///
/// Reads are issued directly into the buffer's landing zone; a read of zero
/// bytes ends the input. Interrupted reads are retried. Other read errors
/// follow [`TransferConfig::read_failure`].
///
/// # Errors
///
/// - [`ClipError::InvalidConfig`] if `config` does not validate
/// - [`ClipError::OutOfMemory`] if the buffer cannot grow
/// - [`ClipError::InputTooLarge`] if the input exceeds the configured limit
/// - [`ClipError::Read`] if a read fails under [`ReadFailure::Propagate`]
///
/// On error the partial buffer is dropped.
///
/// # Example
///
/// ```
/// use clipio::{TransferConfig, ingest};
/// use std::io::Cursor;
///
/// let config = TransferConfig::default().with_expand_crlf(true);
/// let bytes = ingest(Cursor::new(b"line1\nline2\n"), &config)?;
/// assert_eq!(&bytes[..], b"line1\r\nline2\r\n");
/// # Ok::<(), clipio::ClipError>(())
/// ```
pub fn ingest<R: Read>(mut reader: R, config: &TransferConfig) -> Result<Bytes, ClipError> {
    config.validate()?;

    let mut buffer = TransformBuffer::new(config.initial_increment(), config.expand_crlf());
    let mut reads = 0usize;

    loop {
        let zone = buffer.landing_zone()?;
        let n = match reader.read(zone) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => match config.read_failure() {
                ReadFailure::Propagate => return Err(ClipError::Read(e)),
                ReadFailure::TreatAsEof => {
                    warn!(error = %e, done = buffer.len(), "read failed, keeping input read so far");
                    break;
                }
            },
        };

        buffer.commit(n);
        reads += 1;
        trace!(read = n, done = buffer.len(), "chunk ingested");

        if let Some(max) = config.max_input() {
            if buffer.len() > max {
                return Err(ClipError::InputTooLarge {
                    actual: buffer.len(),
                    max,
                });
            }
        }
    }

    debug!(
        bytes = buffer.len(),
        reads,
        growths = buffer.growths(),
        expand = config.expand_crlf(),
        "input ingested"
    );
    Ok(buffer.finish())
}
