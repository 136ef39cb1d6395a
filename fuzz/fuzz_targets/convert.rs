#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full document conversion entry point.
//
// Calls `StwDecoder::convert_bytes(data)` on arbitrary input bytes.
// Catches bugs in:
// - Magic sequence scanning
// - Control code dispatch and operand reads
// - Capture buffer routing (header/footer toggles)
// - Diagnostic recording for short and malformed operands
// - Termination on truncated streams
fuzz_target!(|data: &[u8]| {
    let _ = stw_decoder::StwDecoder::convert_bytes(data);
});
