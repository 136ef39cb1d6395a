#![no_main]

use libfuzzer_sys::fuzz_target;
use stw_wire::reader::ByteReader;

// Fuzz target: preamble magic matcher.
//
// Catches bugs in:
// - Restart-on-mismatch state handling
// - Partial matches truncated by end of input
// - Offset accounting across arbitrarily long junk prefixes
fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let _ = stw_wire::scan_magic(&mut reader);
});
