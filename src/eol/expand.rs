//! LF to CRLF expansion.

use super::{CR, LF};

/// What a single input byte turns into during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// The byte is emitted unchanged.
    Keep(u8),
    /// A bare LF, emitted as `CR LF`.
    CrLf,
}

impl Expansion {
    /// Number of bytes this expansion emits (one or two).
    pub const fn len(self) -> usize {
        match self {
            Expansion::Keep(_) => 1,
            Expansion::CrLf => 2,
        }
    }

    /// Always `false`; an expansion emits at least one byte.
    pub const fn is_empty(self) -> bool {
        false
    }
}

/// Expands one byte given the byte that preceded it in the stream.
///
/// Use `0` as `prev` at the very start of a stream.
///
/// # Example
///
/// ```
/// use clipio::eol::{Expansion, expand_byte};
///
/// assert_eq!(expand_byte(b'\n', b'a'), Expansion::CrLf);
/// assert_eq!(expand_byte(b'\n', b'\r'), Expansion::Keep(b'\n'));
/// assert_eq!(expand_byte(b'x', b'\r'), Expansion::Keep(b'x'));
/// ```
pub const fn expand_byte(byte: u8, prev: u8) -> Expansion {
    if byte == LF && prev != CR {
        Expansion::CrLf
    } else {
        Expansion::Keep(byte)
    }
}

/// Expands every bare LF in `input` to CRLF, returning an owned buffer.
///
/// `preceded_by_cr` tells whether the byte just before `input` in the stream
/// was a CR, so a chunk starting with LF is not expanded twice.
///
/// # Example
///
/// ```
/// use clipio::eol::expand;
///
/// assert_eq!(expand(b"line1\nline2\n", false), b"line1\r\nline2\r\n");
/// assert_eq!(expand(b"\nb", true), b"\nb");
/// ```
pub fn expand(input: &[u8], preceded_by_cr: bool) -> Vec<u8> {
    let lf_count = memchr::memchr_iter(LF, input).count();
    let mut out = Vec::with_capacity(input.len() + lf_count);
    let mut prev = if preceded_by_cr { CR } else { 0 };

    for &byte in input {
        match expand_byte(byte, prev) {
            Expansion::Keep(b) => out.push(b),
            Expansion::CrLf => out.extend_from_slice(&[CR, LF]),
        }
        prev = byte;
    }

    out
}

/// Expands `buf[src..src + len]` in place, writing from `dst` forward.
///
/// The gap `src - dst` must be at least `len`: every byte may expand, and
/// the write cursor must never pass a byte that has not been read yet.
/// `prev` carries the look-behind byte in and out of the call.
///
/// Returns the number of bytes written at `dst`.
pub(crate) fn expand_within(
    buf: &mut [u8],
    dst: usize,
    src: usize,
    len: usize,
    prev: &mut u8,
) -> usize {
    assert!(
        dst <= src && src - dst >= len,
        "expansion gap too small: dst={dst} src={src} len={len}"
    );
    let mut out = dst;

    for read in src..src + len {
        let byte = buf[read];
        match expand_byte(byte, *prev) {
            Expansion::Keep(b) => {
                buf[out] = b;
                out += 1;
            }
            Expansion::CrLf => {
                buf[out] = CR;
                buf[out + 1] = LF;
                out += 2;
            }
        }
        *prev = byte;
        debug_assert!(out <= read + 1);
    }

    out - dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_byte() {
        assert_eq!(expand_byte(LF, 0), Expansion::CrLf);
        assert_eq!(expand_byte(LF, LF), Expansion::CrLf);
        assert_eq!(expand_byte(LF, CR), Expansion::Keep(LF));
        assert_eq!(expand_byte(CR, 0), Expansion::Keep(CR));
        assert_eq!(Expansion::CrLf.len(), 2);
        assert_eq!(Expansion::Keep(b'a').len(), 1);
    }

    #[test]
    fn test_expand_scenario() {
        let out = expand(b"line1\nline2\n", false);
        assert_eq!(out, b"line1\r\nline2\r\n");
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn test_expand_keeps_existing_crlf() {
        assert_eq!(expand(b"a\r\nb\nc", false), b"a\r\nb\r\nc");
    }

    #[test]
    fn test_expand_consecutive_lf() {
        assert_eq!(expand(b"\n\n", false), b"\r\n\r\n");
    }

    #[test]
    fn test_expand_empty() {
        assert!(expand(b"", true).is_empty());
    }

    #[test]
    fn test_expand_within_all_lf() {
        // Worst case: a gap of exactly `len` bytes and every byte expands.
        let mut buf = vec![0u8; 3 + 3];
        buf[3..].copy_from_slice(b"\n\n\n");
        let mut prev = 0;
        let written = expand_within(&mut buf, 0, 3, 3, &mut prev);
        assert_eq!(written, 6);
        assert_eq!(&buf, b"\r\n\r\n\r\n");
        assert_eq!(prev, LF);
    }

    #[test]
    fn test_expand_within_carries_prev() {
        let mut buf = vec![0u8; 4];
        buf[2..].copy_from_slice(b"\nb");
        let mut prev = CR;
        let written = expand_within(&mut buf, 0, 2, 2, &mut prev);
        assert_eq!(&buf[..written], b"\nb");
    }

    #[test]
    #[should_panic(expected = "expansion gap too small")]
    fn test_expand_within_rejects_short_gap() {
        let mut buf = vec![0u8; 4];
        let mut prev = 0;
        expand_within(&mut buf, 0, 1, 3, &mut prev);
    }
}
