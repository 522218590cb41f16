//! Writing a finished buffer to an output sink.

use std::io::Write;

use tracing::trace;

use crate::eol::{contract_in_place, trim_trailing_zeros};
use crate::error::ClipError;

/// Writes `buf` to `writer`, optionally contracting CRLF to LF first.
///
/// Contraction happens in place inside `buf`. Trailing zero bytes are
/// trimmed from the result in every case, but a non-empty buffer always
/// writes at least one byte.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`ClipError::Write`] if writing or flushing fails.
///
/// # Example
///
/// ```
/// use clipio::emit;
///
/// let mut buf = b"a\r\nb\0\0".to_vec();
/// let mut out = Vec::new();
/// let written = emit(&mut out, &mut buf, true)?;
///
/// assert_eq!(written, 3);
/// assert_eq!(out, b"a\nb");
/// # Ok::<(), clipio::ClipError>(())
/// ```
pub fn emit<W: Write>(mut writer: W, buf: &mut [u8], strip_crlf: bool) -> Result<usize, ClipError> {
    let len = if strip_crlf {
        contract_in_place(buf)
    } else {
        buf.len()
    };
    let len = trim_trailing_zeros(&buf[..len]);

    writer.write_all(&buf[..len]).map_err(ClipError::Write)?;
    writer.flush().map_err(ClipError::Write)?;

    trace!(bytes = len, from = buf.len(), "buffer emitted");
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_trailing_zero_trim() {
        let mut buf = b"hi\0\0\0".to_vec();
        let mut out = Vec::new();
        assert_eq!(emit(&mut out, &mut buf, false).unwrap(), 2);
        assert_eq!(out, b"hi");
    }

    #[test]
    fn test_single_zero_byte() {
        let mut buf = vec![0u8];
        let mut out = Vec::new();
        assert_eq!(emit(&mut out, &mut buf, true).unwrap(), 1);
        assert_eq!(out, b"\0");
    }

    #[test]
    fn test_empty_buffer() {
        let mut out = Vec::new();
        assert_eq!(emit(&mut out, &mut [], true).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_crlf_kept_without_strip() {
        let mut buf = b"a\r\nb".to_vec();
        let mut out = Vec::new();
        emit(&mut out, &mut buf, false).unwrap();
        assert_eq!(out, b"a\r\nb");
    }

    #[test]
    fn test_write_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = emit(Closed, &mut b"x".to_vec(), false).unwrap_err();
        assert!(matches!(err, ClipError::Write(_)));
    }
}
