use std::io::Read;

use crate::error::WireError;

/// Offset-tracking byte source over any [`std::io::Read`].
///
/// This is the collaborator interface the decoder consumes:
///
/// ```text
///   read_byte()        one byte, Ok(None) on clean end-of-input
///   read_fixed(n)      exactly n bytes, or ShortRead having consumed
///                      exactly what was available
///   read_until(b)      bytes up to (and consuming) a sentinel byte
/// ```
///
/// Callers are expected to hand in a `BufReader` — the decoder pulls
/// one byte at a time and an unbuffered file handle would pay a
/// syscall per byte.
///
/// `ShortRead` deliberately does not rewind: the ST-Writer format has
/// no resynchronization markers, so after a truncated operand the
/// stream position is simply wherever the failed read stopped.
pub struct ByteReader<R> {
    inner: R,
    offset: u64,
}

impl<R: Read> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    /// Absolute number of bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Read a single byte.
    ///
    /// Returns `Ok(None)` on clean end-of-input. Interrupted reads are
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Io`] for any non-`Interrupted` I/O failure.
    pub fn read_byte(&mut self) -> Result<Option<u8>, WireError> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.offset += 1;
                    return Ok(Some(buf[0]));
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(WireError::Io(e)),
            }
        }
    }

    /// Read exactly `n` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::ShortRead`] if the input ends first — the
    /// reader has then consumed exactly the bytes that were available,
    /// and the error records both counts.
    pub fn read_fixed(&mut self, n: usize) -> Result<Vec<u8>, WireError> {
        let mut buf = Vec::with_capacity(n);
        for _ in 0..n {
            match self.read_byte()? {
                Some(b) => buf.push(b),
                None => {
                    return Err(WireError::ShortRead {
                        wanted: n,
                        got: buf.len(),
                        offset: self.offset,
                    });
                }
            }
        }
        Ok(buf)
    }

    /// Read bytes until `sentinel` is seen.
    ///
    /// The sentinel byte is consumed but not included in the result.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if the input ends before
    /// the sentinel appears.
    pub fn read_until(&mut self, sentinel: u8) -> Result<Vec<u8>, WireError> {
        let mut buf = Vec::new();
        loop {
            match self.read_byte()? {
                Some(b) if b == sentinel => return Ok(buf),
                Some(b) => buf.push(b),
                None => {
                    return Err(WireError::UnexpectedEof {
                        offset: self.offset,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_byte_yields_none_at_eof() {
        let mut r = ByteReader::new(&b"ab"[..]);
        assert_eq!(r.read_byte().unwrap(), Some(b'a'));
        assert_eq!(r.read_byte().unwrap(), Some(b'b'));
        assert_eq!(r.read_byte().unwrap(), None);
        assert_eq!(r.offset(), 2);
    }

    #[test]
    fn read_fixed_returns_exact_bytes() {
        let mut r = ByteReader::new(&b"hello"[..]);
        assert_eq!(r.read_fixed(3).unwrap(), b"hel");
        assert_eq!(r.offset(), 3);
    }

    #[test]
    fn read_fixed_short_input_consumes_what_was_available() {
        let mut r = ByteReader::new(&b"xy"[..]);
        let err = r.read_fixed(3).unwrap_err();
        assert!(matches!(
            err,
            WireError::ShortRead {
                wanted: 3,
                got: 2,
                offset: 2
            }
        ));
        // The two available bytes are gone; nothing is rewound.
        assert_eq!(r.read_byte().unwrap(), None);
    }

    #[test]
    fn read_until_consumes_sentinel() {
        let mut r = ByteReader::new(&b"name\x00rest"[..]);
        assert_eq!(r.read_until(0x00).unwrap(), b"name");
        assert_eq!(r.read_byte().unwrap(), Some(b'r'));
    }

    #[test]
    fn read_until_empty_span() {
        let mut r = ByteReader::new(&b"\x18tail"[..]);
        assert_eq!(r.read_until(0x18).unwrap(), b"");
    }

    #[test]
    fn read_until_eof_before_sentinel() {
        let mut r = ByteReader::new(&b"never terminated"[..]);
        let err = r.read_until(0x00).unwrap_err();
        assert!(matches!(err, WireError::UnexpectedEof { offset: 16 }));
    }
}
