#![no_main]

use clipio::eol::{contract, contract_in_place, expand, trim_trailing_zeros};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    let expanded = expand(&data, false);
    assert!(expanded.len() <= 2 * data.len());

    // No bare LF survives expansion
    for (i, &b) in expanded.iter().enumerate() {
        if b == b'\n' {
            assert!(i > 0 && expanded[i - 1] == b'\r');
        }
    }

    // In-place and allocating contraction agree
    let contracted = contract(&data);
    let mut in_place = data.clone();
    let len = contract_in_place(&mut in_place);
    assert_eq!(&in_place[..len], &contracted[..]);
    assert!(contracted.len() <= data.len());

    // Without CR, contraction undoes expansion
    let no_cr: Vec<u8> = data.iter().copied().filter(|&b| b != b'\r').collect();
    assert_eq!(contract(&expand(&no_cr, false)), no_cr);

    let trimmed = trim_trailing_zeros(&data);
    assert!(trimmed <= data.len());
    assert!(data.is_empty() || trimmed >= 1);
});
