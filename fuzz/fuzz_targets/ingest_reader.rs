#![no_main]

use std::io::{self, Read};

use clipio::eol::expand;
use clipio::{TransferConfig, ingest};
use libfuzzer_sys::fuzz_target;

/// Returns short reads whose sizes come from the fuzz input.
struct Jagged<'a> {
    data: &'a [u8],
    sizes: &'a [u8],
}

impl Read for Jagged<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let (&size, rest) = self.sizes.split_first().unwrap_or((&255, &[]));
        self.sizes = rest;
        let n = (size as usize).max(1).min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fuzz_target!(|input: (u8, Vec<u8>, Vec<u8>)| {
    let (increment, sizes, data) = input;
    let increment = usize::from(increment).max(1);

    for expand_crlf in [false, true] {
        let config = TransferConfig::default()
            .with_expand_crlf(expand_crlf)
            .with_initial_increment(increment);
        let reader = Jagged {
            data: &data,
            sizes: &sizes,
        };

        let bytes = ingest(reader, &config).unwrap();

        if expand_crlf {
            assert_eq!(&bytes[..], &expand(&data, false)[..]);
        } else {
            assert_eq!(&bytes[..], &data[..]);
        }
    }
});
