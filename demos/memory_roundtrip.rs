//! Copy text into an in-memory clipboard and paste it back out.
//!
//! Run with:
//!     cargo run --example memory_roundtrip

use std::io::Cursor;

use clipio::{CodePage, MemoryClipboard, TransferConfig, copy_in, paste_out};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = "first line\nsecond line\nthird line, with a café\n";
    let mut clipboard = MemoryClipboard::new();

    println!("Copying {} bytes with LF -> CRLF expansion...\n", input.len());

    let config = TransferConfig::new(CodePage::Utf8).with_expand_crlf(true);
    let report = copy_in(Cursor::new(input.as_bytes()), &mut clipboard, &config)?;

    println!(
        "Stored {} bytes as {} UTF-16 units",
        report.bytes, report.units
    );
    if let Some(text) = clipboard.text() {
        println!("Clipboard: {:?}\n", text.to_string_lossy());
    }

    // Paste back as Windows-1252 with CRLF -> LF contraction
    let config = TransferConfig::new(CodePage::Ansi).with_strip_crlf(true);
    let mut out = Vec::new();
    let report = paste_out(&mut out, &mut clipboard, &config)?;

    println!("Pasted {} bytes ({}):", report.bytes, config.code_page());
    for line in out.split(|&b| b == b'\n').filter(|l| !l.is_empty()) {
        println!("  {:02x?}", line);
    }

    println!("\nClipboard opened {} times, closed {} times", clipboard.opens(), clipboard.closes());
    Ok(())
}
