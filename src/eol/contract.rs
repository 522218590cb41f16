//! CRLF to LF contraction and NUL trimming.

use memchr::memchr;

use super::{CR, LF};

/// Replaces every `CR LF` pair in `buf` with a single `LF`, in place.
///
/// Returns the new logical length; bytes past it are left unspecified. The
/// write cursor never overtakes the read cursor, so no scratch buffer is
/// needed. A lone CR, including one in the final position, is kept.
///
/// This is a single pass: `CR CR LF` contracts to `CR LF`, not to `LF`.
///
/// # Example
///
/// ```
/// use clipio::eol::contract_in_place;
///
/// let mut buf = *b"a\r\nb\r";
/// let len = contract_in_place(&mut buf);
/// assert_eq!(&buf[..len], b"a\nb\r");
/// ```
pub fn contract_in_place(buf: &mut [u8]) -> usize {
    let len = buf.len();
    let mut read = 0;
    let mut write = 0;

    while let Some(cr) = memchr(CR, &buf[read..]).map(|i| read + i) {
        if cr + 1 < len && buf[cr + 1] == LF {
            buf.copy_within(read..cr, write);
            write += cr - read;
            buf[write] = LF;
            write += 1;
            read = cr + 2;
        } else {
            buf.copy_within(read..=cr, write);
            write += cr + 1 - read;
            read = cr + 1;
        }
        debug_assert!(write <= read);
    }

    buf.copy_within(read..len, write);
    write + (len - read)
}

/// Contracts CRLF to LF, returning an owned buffer.
///
/// # Example
///
/// ```
/// use clipio::eol::contract;
///
/// assert_eq!(contract(b"a\r\nb"), b"a\nb");
/// ```
pub fn contract(input: &[u8]) -> Vec<u8> {
    let mut out = input.to_vec();
    let len = contract_in_place(&mut out);
    out.truncate(len);
    out
}

/// Returns the length of `buf` without its trailing zero bytes.
///
/// The first byte is never trimmed: a non-empty buffer of zeros keeps
/// exactly one byte.
///
/// # Example
///
/// ```
/// use clipio::eol::trim_trailing_zeros;
///
/// assert_eq!(trim_trailing_zeros(b"hi\0\0\0"), 2);
/// assert_eq!(trim_trailing_zeros(b"\0"), 1);
/// assert_eq!(trim_trailing_zeros(b""), 0);
/// ```
pub fn trim_trailing_zeros(buf: &[u8]) -> usize {
    match buf.iter().rposition(|&b| b != 0) {
        Some(last) => last + 1,
        None => buf.len().min(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_basic() {
        assert_eq!(contract(b"a\r\nb"), b"a\nb");
        assert_eq!(contract(b"line1\r\nline2\r\n"), b"line1\nline2\n");
    }

    #[test]
    fn test_contract_lone_cr_kept() {
        assert_eq!(contract(b"a\rb"), b"a\rb");
        assert_eq!(contract(b"\r"), b"\r");
        assert_eq!(contract(b"ab\r"), b"ab\r");
    }

    #[test]
    fn test_contract_single_pass() {
        assert_eq!(contract(b"\r\r\n"), b"\r\n");
        assert_eq!(contract(b"\r\n\r\n"), b"\n\n");
    }

    #[test]
    fn test_contract_no_cr() {
        let mut buf = *b"plain text\n";
        assert_eq!(contract_in_place(&mut buf), 11);
        assert_eq!(&buf, b"plain text\n");
    }

    #[test]
    fn test_contract_empty() {
        let mut buf: [u8; 0] = [];
        assert_eq!(contract_in_place(&mut buf), 0);
    }

    #[test]
    fn test_trim_trailing_zeros() {
        assert_eq!(trim_trailing_zeros(b"hi\0\0\0"), 2);
        assert_eq!(trim_trailing_zeros(b"hi"), 2);
        assert_eq!(trim_trailing_zeros(b"\0hi\0"), 3);
    }

    #[test]
    fn test_trim_all_zero_keeps_one() {
        assert_eq!(trim_trailing_zeros(b"\0"), 1);
        assert_eq!(trim_trailing_zeros(b"\0\0\0\0"), 1);
        assert_eq!(trim_trailing_zeros(b""), 0);
    }
}
