use std::io::Read;

use crate::error::WireError;
use crate::reader::ByteReader;

// Every ST-Writer document embeds this sequence somewhere near the
// start: the BASIC loader banner text, then a single NUL. Everything
// before it is loader code and is skipped unexamined.

/// Magic sequence: ASCII `"Do Run Run STWRITER.PRG"` followed by NUL.
/// 23 text bytes + 1 terminator = 24 bytes total.
pub const STW_MAGIC: &[u8; 24] = b"Do Run Run STWRITER.PRG\x00";

/// Scan forward until the magic sequence has been fully matched.
///
/// The matcher is the naive single-pattern search: keep a match index,
/// advance it when the next input byte equals the next pattern byte,
/// reset it to zero on any mismatch. The mismatched byte is NOT
/// re-examined against the start of the pattern, so inputs like
/// `"DDo Run Run STWRITER.PRG\0"` do not match. That quirk is part of
/// the format's de-facto contract and is kept as-is.
///
/// Returns the offset just past the final magic byte.
///
/// # Errors
///
/// - [`WireError::MagicNotFound`] if input ends before a full match.
/// - [`WireError::Io`] on read failure.
pub fn scan_magic<R: Read>(reader: &mut ByteReader<R>) -> Result<u64, WireError> {
    let mut idx = 0;
    while idx < STW_MAGIC.len() {
        match reader.read_byte()? {
            Some(b) if b == STW_MAGIC[idx] => idx += 1,
            Some(_) => idx = 0,
            None => return Err(WireError::MagicNotFound),
        }
    }
    Ok(reader.offset())
}
