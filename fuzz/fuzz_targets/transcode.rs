#![no_main]

use clipio::{CodePage, Transcoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    for code_page in [CodePage::Utf8, CodePage::Ansi, CodePage::Oem] {
        let lenient = Transcoder::new(code_page);
        let payload = lenient.to_utf16(&data).unwrap();
        assert_eq!(payload.as_units().last(), Some(&0));

        // Lenient conversion always succeeds in both directions
        let back = lenient.from_utf16(payload.as_units()).unwrap();

        // Valid input survives a round trip
        let strict = lenient.with_strict(true);
        if strict.to_utf16(&data).is_ok() {
            assert_eq!(&back[..data.len()], &data[..]);
        }
    }
});
