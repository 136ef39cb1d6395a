#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: numeric operand field parser.
//
// Catches bugs in:
// - Non-UTF-8 field bytes
// - Fields that are all padding
// - Overflowing digit strings
// - Embedded signs and whitespace
fuzz_target!(|data: &[u8]| {
    let _ = stw_wire::operand::parse_int(data, 0);
});
