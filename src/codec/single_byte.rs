//! Single-byte code pages.
//!
//! Bytes `0x00..=0x7F` are ASCII in every supported table; only the upper
//! half is listed. Every entry is in the BMP, so one byte always decodes to
//! exactly one UTF-16 unit.

/// Upper-half mapping of a single-byte code page.
pub(super) struct Table {
    high: [u16; 128],
}

impl Table {
    fn decode(&self, byte: u8) -> u16 {
        if byte < 0x80 {
            u16::from(byte)
        } else {
            self.high[usize::from(byte - 0x80)]
        }
    }

    fn encode(&self, c: char) -> Option<u8> {
        let cp = u32::from(c);
        if cp < 0x80 {
            return Some(cp as u8);
        }
        self.high
            .iter()
            .position(|&unit| u32::from(unit) == cp)
            .map(|i| 0x80 + i as u8)
    }

    pub(super) fn decode_into(&self, bytes: &[u8], dst: &mut [u16]) -> usize {
        for (slot, &byte) in dst[..bytes.len()].iter_mut().zip(bytes) {
            *slot = self.decode(byte);
        }
        bytes.len()
    }

    pub(super) fn encoded_len(&self, units: &[u16], strict: bool) -> Result<usize, usize> {
        let mut position = 0;
        let mut len = 0;

        for decoded in char::decode_utf16(units.iter().copied()) {
            if strict {
                match decoded {
                    Ok(c) if self.encode(c).is_some() => {}
                    _ => return Err(position),
                }
            }
            len += 1;
            position += decoded.map_or(1, char::len_utf16);
        }

        Ok(len)
    }

    pub(super) fn encode_into(&self, units: &[u16], dst: &mut [u8], strict: bool) -> Result<usize, usize> {
        let mut position = 0;
        let mut written = 0;

        for decoded in char::decode_utf16(units.iter().copied()) {
            let byte = match decoded.as_ref().ok().and_then(|&c| self.encode(c)) {
                Some(byte) => byte,
                None if strict => return Err(position),
                None => b'?',
            };
            dst[written] = byte;
            written += 1;
            position += decoded.map_or(1, char::len_utf16);
        }

        Ok(written)
    }
}

/// Windows-1252. The five unassigned bytes map to the matching C1 controls.
pub(super) static WINDOWS_1252: Table = Table {
    high: [
        0x20AC, 0x0081, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021, // 0x80
        0x02C6, 0x2030, 0x0160, 0x2039, 0x0152, 0x008D, 0x017D, 0x008F, // 0x88
        0x0090, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014, // 0x90
        0x02DC, 0x2122, 0x0161, 0x203A, 0x0153, 0x009D, 0x017E, 0x0178, // 0x98
        0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7, // 0xA0
        0x00A8, 0x00A9, 0x00AA, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF, // 0xA8
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7, // 0xB0
        0x00B8, 0x00B9, 0x00BA, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00BF, // 0xB8
        0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x00C7, // 0xC0
        0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF, // 0xC8
        0x00D0, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x00D7, // 0xD0
        0x00D8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x00DD, 0x00DE, 0x00DF, // 0xD8
        0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x00E7, // 0xE0
        0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF, // 0xE8
        0x00F0, 0x00F1, 0x00F2, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x00F7, // 0xF0
        0x00F8, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x00FD, 0x00FE, 0x00FF, // 0xF8
    ],
};

/// IBM437, the DOS/OEM code page.
pub(super) static CP437: Table = Table {
    high: [
        0x00C7, 0x00FC, 0x00E9, 0x00E2, 0x00E4, 0x00E0, 0x00E5, 0x00E7, // 0x80
        0x00EA, 0x00EB, 0x00E8, 0x00EF, 0x00EE, 0x00EC, 0x00C4, 0x00C5, // 0x88
        0x00C9, 0x00E6, 0x00C6, 0x00F4, 0x00F6, 0x00F2, 0x00FB, 0x00F9, // 0x90
        0x00FF, 0x00D6, 0x00DC, 0x00A2, 0x00A3, 0x00A5, 0x20A7, 0x0192, // 0x98
        0x00E1, 0x00ED, 0x00F3, 0x00FA, 0x00F1, 0x00D1, 0x00AA, 0x00BA, // 0xA0
        0x00BF, 0x2310, 0x00AC, 0x00BD, 0x00BC, 0x00A1, 0x00AB, 0x00BB, // 0xA8
        0x2591, 0x2592, 0x2593, 0x2502, 0x2524, 0x2561, 0x2562, 0x2556, // 0xB0
        0x2555, 0x2563, 0x2551, 0x2557, 0x255D, 0x255C, 0x255B, 0x2510, // 0xB8
        0x2514, 0x2534, 0x252C, 0x251C, 0x2500, 0x253C, 0x255E, 0x255F, // 0xC0
        0x255A, 0x2554, 0x2569, 0x2566, 0x2560, 0x2550, 0x256C, 0x2567, // 0xC8
        0x2568, 0x2564, 0x2565, 0x2559, 0x2558, 0x2552, 0x2553, 0x256B, // 0xD0
        0x256A, 0x2518, 0x250C, 0x2588, 0x2584, 0x258C, 0x2590, 0x2580, // 0xD8
        0x03B1, 0x00DF, 0x0393, 0x03C0, 0x03A3, 0x03C3, 0x00B5, 0x03C4, // 0xE0
        0x03A6, 0x0398, 0x03A9, 0x03B4, 0x221E, 0x03C6, 0x03B5, 0x2229, // 0xE8
        0x2261, 0x00B1, 0x2265, 0x2264, 0x2320, 0x2321, 0x00F7, 0x2248, // 0xF0
        0x00B0, 0x2219, 0x00B7, 0x221A, 0x207F, 0x00B2, 0x25A0, 0x00A0, // 0xF8
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_identity() {
        for table in [&WINDOWS_1252, &CP437] {
            for b in 0u8..0x80 {
                assert_eq!(table.decode(b), u16::from(b));
                assert_eq!(table.encode(char::from(b)), Some(b));
            }
        }
    }

    #[test]
    fn test_tables_are_bijective() {
        for table in [&WINDOWS_1252, &CP437] {
            for b in 0x80u8..=0xFF {
                let c = char::from_u32(u32::from(table.decode(b))).unwrap();
                assert_eq!(table.encode(c), Some(b), "byte {b:#04x}");
            }
        }
    }

    #[test]
    fn test_known_mappings() {
        assert_eq!(WINDOWS_1252.decode(0x80), 0x20AC);
        assert_eq!(WINDOWS_1252.decode(0xE9), 0x00E9);
        assert_eq!(CP437.decode(0x82), 0x00E9);
        assert_eq!(CP437.encode('é'), Some(0x82));
        assert_eq!(CP437.encode('€'), None);
    }
}
