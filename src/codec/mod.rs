//! Multi-byte text ↔ UTF-16 transcoding.
//!
//! The clipboard stores text as UTF-16; streams carry bytes in one of the
//! code pages listed in [`CodePage`]. [`Transcoder`] converts between the two
//! with a two-call pattern: size the destination first, allocate it with one
//! zeroed unit of headroom, then convert and report the produced length.
//!
//! # Example
//!
//! ```
//! use clipio::{CodePage, Transcoder};
//!
//! let transcoder = Transcoder::new(CodePage::Utf8);
//! let payload = transcoder.to_utf16("héllo".as_bytes())?;
//! assert_eq!(payload.len(), 5);
//!
//! let bytes = transcoder.from_utf16(payload.text_units())?;
//! assert_eq!(bytes, "héllo".as_bytes());
//! # Ok::<(), clipio::ClipError>(())
//! ```

mod payload;
mod single_byte;
mod utf8;

use std::fmt;
use std::str::FromStr;

pub use payload::Utf16Payload;

use crate::error::ClipError;

/// The multi-byte character set used on the stream side.
///
/// Selected once per invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CodePage {
    /// UTF-8 (code page 65001).
    #[default]
    Utf8,
    /// The ANSI code page, resolved as Windows-1252.
    Ansi,
    /// The OEM code page, resolved as IBM437.
    Oem,
}

impl CodePage {
    /// Returns the numeric code page identifier.
    pub const fn id(self) -> u32 {
        match self {
            CodePage::Utf8 => 65001,
            CodePage::Ansi => 1252,
            CodePage::Oem => 437,
        }
    }

    /// Returns the short name used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            CodePage::Utf8 => "utf8",
            CodePage::Ansi => "acp",
            CodePage::Oem => "oem",
        }
    }

    fn table(self) -> Option<&'static single_byte::Table> {
        match self {
            CodePage::Utf8 => None,
            CodePage::Ansi => Some(&single_byte::WINDOWS_1252),
            CodePage::Oem => Some(&single_byte::CP437),
        }
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CodePage::Utf8 => "UTF-8",
            CodePage::Ansi => "ANSI",
            CodePage::Oem => "OEM",
        };
        write!(f, "{} ({})", label, self.id())
    }
}

impl FromStr for CodePage {
    type Err = ClipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" | "65001" => Ok(CodePage::Utf8),
            "acp" | "ansi" | "1252" | "windows-1252" => Ok(CodePage::Ansi),
            "oem" | "437" | "cp437" | "ibm437" => Ok(CodePage::Oem),
            _ => Err(ClipError::InvalidConfig {
                message: "unknown code page",
            }),
        }
    }
}

/// Converts between a [`CodePage`] and UTF-16.
///
/// By default conversion is lenient: undecodable input becomes U+FFFD and
/// characters missing from a single-byte code page become `?`. A strict
/// transcoder reports them as [`ClipError::Transcoding`] instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transcoder {
    code_page: CodePage,
    strict: bool,
}

impl Transcoder {
    /// Creates a lenient transcoder for the given code page.
    pub const fn new(code_page: CodePage) -> Self {
        Self {
            code_page,
            strict: false,
        }
    }

    /// Enables or disables strict mode.
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns the code page.
    pub const fn code_page(&self) -> CodePage {
        self.code_page
    }

    /// Returns whether strict mode is enabled.
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    fn error(&self, position: usize) -> ClipError {
        ClipError::Transcoding {
            code_page: self.code_page,
            position,
        }
    }

    /// Returns the number of UTF-16 units `bytes` converts to.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`ClipError::Transcoding`] for the first
    /// undecodable byte.
    pub fn utf16_len(&self, bytes: &[u8]) -> Result<usize, ClipError> {
        match self.code_page.table() {
            Some(_) => Ok(bytes.len()),
            None => utf8::utf16_len(bytes, self.strict).map_err(|pos| self.error(pos)),
        }
    }

    /// Converts `bytes` into `dst`, returning the number of units written.
    ///
    /// # Errors
    ///
    /// Same as [`Transcoder::utf16_len`].
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than [`Transcoder::utf16_len`] reports.
    pub fn encode_utf16_into(&self, bytes: &[u8], dst: &mut [u16]) -> Result<usize, ClipError> {
        match self.code_page.table() {
            Some(table) => Ok(table.decode_into(bytes, dst)),
            None => utf8::encode_utf16_into(bytes, dst, self.strict).map_err(|pos| self.error(pos)),
        }
    }

    /// Converts `bytes` into a NUL-terminated UTF-16 payload.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::OutOfMemory`] if the payload cannot be allocated,
    /// or a strict-mode [`ClipError::Transcoding`].
    pub fn to_utf16(&self, bytes: &[u8]) -> Result<Utf16Payload, ClipError> {
        let len = self.utf16_len(bytes)?;
        let mut units = zeroed::<u16>(len + 1)?;
        let produced = self.encode_utf16_into(bytes, &mut units)?;
        units.truncate(produced + 1);
        Ok(Utf16Payload::from_units(units))
    }

    /// Returns the number of bytes `units` converts to.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`ClipError::Transcoding`] for the first
    /// unpaired surrogate or unmappable character.
    pub fn multibyte_len(&self, units: &[u16]) -> Result<usize, ClipError> {
        match self.code_page.table() {
            Some(table) => table.encoded_len(units, self.strict),
            None => utf8::multibyte_len(units, self.strict),
        }
        .map_err(|pos| self.error(pos))
    }

    /// Converts `units` into `dst`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Same as [`Transcoder::multibyte_len`].
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than [`Transcoder::multibyte_len`] reports.
    pub fn decode_utf16_into(&self, units: &[u16], dst: &mut [u8]) -> Result<usize, ClipError> {
        match self.code_page.table() {
            Some(table) => table.encode_into(units, dst, self.strict),
            None => utf8::decode_utf16_into(units, dst, self.strict),
        }
        .map_err(|pos| self.error(pos))
    }

    /// Converts UTF-16 units into bytes of this code page.
    ///
    /// NUL units, including a terminator, are converted like any other
    /// character.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::OutOfMemory`] if the output cannot be allocated,
    /// or a strict-mode [`ClipError::Transcoding`].
    pub fn from_utf16(&self, units: &[u16]) -> Result<Vec<u8>, ClipError> {
        let len = self.multibyte_len(units)?;
        let mut bytes = zeroed::<u8>(len + 1)?;
        let produced = self.decode_utf16_into(units, &mut bytes)?;
        bytes.truncate(produced);
        Ok(bytes)
    }
}

/// Allocates `len` zeroed elements, reporting allocation failure.
fn zeroed<T: Copy + Default>(len: usize) -> Result<Vec<T>, ClipError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| ClipError::OutOfMemory {
            requested: len.saturating_mul(size_of::<T>()),
        })?;
    v.resize(len, T::default());
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_page_parse() {
        assert_eq!("utf8".parse::<CodePage>().unwrap(), CodePage::Utf8);
        assert_eq!("ACP".parse::<CodePage>().unwrap(), CodePage::Ansi);
        assert_eq!("437".parse::<CodePage>().unwrap(), CodePage::Oem);
        assert!("ebcdic".parse::<CodePage>().is_err());
    }

    #[test]
    fn test_code_page_display() {
        assert_eq!(CodePage::Utf8.to_string(), "UTF-8 (65001)");
        assert_eq!(CodePage::default(), CodePage::Utf8);
    }

    #[test]
    fn test_utf8_to_utf16_has_terminator() {
        let payload = Transcoder::new(CodePage::Utf8).to_utf16(b"ab").unwrap();
        assert_eq!(payload.as_units(), &[0x61, 0x62, 0]);
        assert_eq!(payload.text_units(), &[0x61, 0x62]);
    }

    #[test]
    fn test_empty_input() {
        let t = Transcoder::new(CodePage::Utf8);
        let payload = t.to_utf16(b"").unwrap();
        assert!(payload.is_empty());
        assert_eq!(payload.as_units(), &[0]);
        assert!(t.from_utf16(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_utf16_terminator_becomes_zero_byte() {
        let t = Transcoder::new(CodePage::Utf8);
        let payload = Utf16Payload::from_text("hi");
        assert_eq!(t.from_utf16(payload.as_units()).unwrap(), b"hi\0");
    }

    #[test]
    fn test_astral_roundtrip() {
        let t = Transcoder::new(CodePage::Utf8);
        let text = "x\u{1F600}y";
        let payload = t.to_utf16(text.as_bytes()).unwrap();
        assert_eq!(payload.len(), 4);
        assert_eq!(t.from_utf16(payload.text_units()).unwrap(), text.as_bytes());
    }

    #[test]
    fn test_lenient_invalid_utf8() {
        let t = Transcoder::new(CodePage::Utf8);
        let payload = t.to_utf16(b"a\xffb").unwrap();
        assert_eq!(payload.to_string_lossy(), "a\u{FFFD}b");
    }

    #[test]
    fn test_strict_invalid_utf8() {
        let t = Transcoder::new(CodePage::Utf8).with_strict(true);
        let err = t.to_utf16(b"ab\xff").unwrap_err();
        assert!(matches!(
            err,
            ClipError::Transcoding {
                code_page: CodePage::Utf8,
                position: 2
            }
        ));
    }

    #[test]
    fn test_strict_unpaired_surrogate() {
        let t = Transcoder::new(CodePage::Utf8).with_strict(true);
        let err = t.from_utf16(&[0x61, 0xD800, 0x62]).unwrap_err();
        assert!(matches!(err, ClipError::Transcoding { position: 1, .. }));

        let lenient = Transcoder::new(CodePage::Utf8);
        assert_eq!(
            lenient.from_utf16(&[0x61, 0xD800]).unwrap(),
            "a\u{FFFD}".as_bytes()
        );
    }

    #[test]
    fn test_ansi_roundtrip() {
        let t = Transcoder::new(CodePage::Ansi);
        // "€5 café" in Windows-1252
        let bytes = b"\x805 caf\xe9";
        let payload = t.to_utf16(bytes).unwrap();
        assert_eq!(payload.to_string_lossy(), "€5 café");
        assert_eq!(t.from_utf16(payload.text_units()).unwrap(), bytes);
    }

    #[test]
    fn test_oem_box_drawing() {
        let t = Transcoder::new(CodePage::Oem);
        let payload = t.to_utf16(b"\xc9\xcd\xbb").unwrap();
        assert_eq!(payload.to_string_lossy(), "╔═╗");
    }

    #[test]
    fn test_unmappable_character() {
        let units: Vec<u16> = "a\u{4E2D}b".encode_utf16().collect();
        let t = Transcoder::new(CodePage::Oem);
        assert_eq!(t.from_utf16(&units).unwrap(), b"a?b");

        let err = t.with_strict(true).from_utf16(&units).unwrap_err();
        assert!(matches!(
            err,
            ClipError::Transcoding {
                code_page: CodePage::Oem,
                position: 1
            }
        ));
    }
}
