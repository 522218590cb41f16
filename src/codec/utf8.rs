//! UTF-8 ↔ UTF-16. Errors carry the source offset of the bad input.

const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

pub(super) fn utf16_len(bytes: &[u8], strict: bool) -> Result<usize, usize> {
    let mut offset = 0;
    let mut len = 0;

    for chunk in bytes.utf8_chunks() {
        len += chunk.valid().encode_utf16().count();
        offset += chunk.valid().len();

        if !chunk.invalid().is_empty() {
            if strict {
                return Err(offset);
            }
            len += 1;
            offset += chunk.invalid().len();
        }
    }

    Ok(len)
}

pub(super) fn encode_utf16_into(bytes: &[u8], dst: &mut [u16], strict: bool) -> Result<usize, usize> {
    let mut offset = 0;
    let mut written = 0;

    for chunk in bytes.utf8_chunks() {
        for unit in chunk.valid().encode_utf16() {
            dst[written] = unit;
            written += 1;
        }
        offset += chunk.valid().len();

        if !chunk.invalid().is_empty() {
            if strict {
                return Err(offset);
            }
            dst[written] = REPLACEMENT as u16;
            written += 1;
            offset += chunk.invalid().len();
        }
    }

    Ok(written)
}

pub(super) fn multibyte_len(units: &[u16], strict: bool) -> Result<usize, usize> {
    let mut position = 0;
    let mut len = 0;

    for decoded in char::decode_utf16(units.iter().copied()) {
        let c = match decoded {
            Ok(c) => c,
            Err(_) if strict => return Err(position),
            Err(_) => REPLACEMENT,
        };
        len += c.len_utf8();
        position += decoded.map_or(1, char::len_utf16);
    }

    Ok(len)
}

pub(super) fn decode_utf16_into(units: &[u16], dst: &mut [u8], strict: bool) -> Result<usize, usize> {
    let mut position = 0;
    let mut written = 0;

    for decoded in char::decode_utf16(units.iter().copied()) {
        let c = match decoded {
            Ok(c) => c,
            Err(_) if strict => return Err(position),
            Err(_) => REPLACEMENT,
        };
        written += c.encode_utf8(&mut dst[written..]).len();
        position += decoded.map_or(1, char::len_utf16);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizing_matches_conversion() {
        let text = "añ€\u{1F600}";
        let len = utf16_len(text.as_bytes(), false).unwrap();
        let mut dst = vec![0u16; len];
        assert_eq!(encode_utf16_into(text.as_bytes(), &mut dst, false), Ok(len));
        assert_eq!(String::from_utf16(&dst).unwrap(), text);

        let back = multibyte_len(&dst, false).unwrap();
        assert_eq!(back, text.len());
    }

    #[test]
    fn test_truncated_sequence_offset() {
        // "é" is C3 A9; a lone C3 at the end is invalid.
        assert_eq!(utf16_len(b"ab\xc3", true), Err(2));
        assert_eq!(utf16_len(b"ab\xc3", false), Ok(3));
    }

    #[test]
    fn test_surrogate_pair_position() {
        // U+1F600 is two units; the unpaired high surrogate follows at index 3.
        let units = [0x61, 0xD83D, 0xDE00, 0xD83D];
        assert_eq!(multibyte_len(&units, true), Err(3));
        assert_eq!(multibyte_len(&units, false), Ok(1 + 4 + 3));
    }
}
