use std::io::Read;

use crate::error::WireError;
use crate::reader::ByteReader;

// Numeric operands on disk are fixed-width ASCII digit fields padded
// with blanks, e.g. a 3-wide left margin of 10 is stored as "10 " or
// " 10". The sign, when present, belongs to the starting-page-number
// operand, which may be negative.

/// Parse a fixed-width digit field as a signed base-10 integer.
///
/// Leading and trailing ASCII whitespace is trimmed first.
///
/// # Errors
///
/// Returns [`WireError::InvalidDigits`] if the trimmed field is empty
/// or not a valid integer. `offset` is threaded through for the error
/// so diagnostics can point at the field's end position in the stream.
pub fn parse_int(bytes: &[u8], offset: u64) -> Result<i32, WireError> {
    let trimmed = bytes.trim_ascii();
    let invalid = || WireError::InvalidDigits {
        text: String::from_utf8_lossy(bytes).into_owned(),
        offset,
    };
    let text = std::str::from_utf8(trimmed).map_err(|_| invalid())?;
    text.parse::<i32>().map_err(|_| invalid())
}

/// Read a `width`-byte digit field and parse it.
///
/// # Errors
///
/// - [`WireError::ShortRead`] if fewer than `width` bytes remain; the
///   reader has consumed exactly the bytes that were available.
/// - [`WireError::InvalidDigits`] if the field does not parse.
pub fn read_int<R: Read>(reader: &mut ByteReader<R>, width: usize) -> Result<i32, WireError> {
    let field = reader.read_fixed(width)?;
    parse_int(&field, reader.offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_digits() {
        assert_eq!(parse_int(b"010", 0).unwrap(), 10);
        assert_eq!(parse_int(b"132", 0).unwrap(), 132);
        assert_eq!(parse_int(b"2", 0).unwrap(), 2);
    }

    #[test]
    fn blank_padding_is_trimmed() {
        assert_eq!(parse_int(b" 10", 0).unwrap(), 10);
        assert_eq!(parse_int(b"10 ", 0).unwrap(), 10);
        assert_eq!(parse_int(b" 5 ", 0).unwrap(), 5);
    }

    #[test]
    fn negative_page_numbers_parse() {
        assert_eq!(parse_int(b" -3", 0).unwrap(), -3);
        assert_eq!(parse_int(b"-12", 0).unwrap(), -12);
    }

    #[test]
    fn junk_field_is_rejected() {
        let err = parse_int(b"ab3", 7).unwrap_err();
        match err {
            WireError::InvalidDigits { text, offset } => {
                assert_eq!(text, "ab3");
                assert_eq!(offset, 7);
            }
            other => panic!("expected InvalidDigits, got {other:?}"),
        }
    }

    #[test]
    fn all_blank_field_is_rejected() {
        assert!(matches!(
            parse_int(b"   ", 0),
            Err(WireError::InvalidDigits { .. })
        ));
    }

    #[test]
    fn non_utf8_field_is_rejected() {
        assert!(matches!(
            parse_int(&[0xFF, 0xFE, 0x31], 0),
            Err(WireError::InvalidDigits { .. })
        ));
    }

    #[test]
    fn read_int_consumes_width_bytes() {
        let mut r = ByteReader::new(&b"070X"[..]);
        assert_eq!(read_int(&mut r, 3).unwrap(), 70);
        assert_eq!(r.read_byte().unwrap(), Some(b'X'));
    }

    #[test]
    fn read_int_short_input() {
        let mut r = ByteReader::new(&b"7"[..]);
        let err = read_int(&mut r, 2).unwrap_err();
        assert!(matches!(err, WireError::ShortRead { wanted: 2, got: 1, .. }));
    }
}
