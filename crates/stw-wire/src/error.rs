/// Errors produced by the byte-source layer.
///
/// Every variant that involves a failed read carries the absolute
/// stream offset where the failure happened — essential context when
/// debugging control-coded binary documents, since the format has no
/// resynchronization markers and a single bad operand can shift every
/// byte that follows.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Input ended before a complete read could finish.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: u64 },

    /// A fixed-width read got fewer bytes than it asked for.
    ///
    /// The reader has consumed exactly `got` bytes of the `wanted` it
    /// was asked for. Nothing is pushed back: scanning resumes from the
    /// byte after the last one consumed.
    #[error("short read at offset {offset}: wanted {wanted} bytes, got {got}")]
    ShortRead {
        wanted: usize,
        got: usize,
        offset: u64,
    },

    /// Input was exhausted without the magic header sequence appearing.
    #[error("STWriter file header not found before end of input")]
    MagicNotFound,

    /// A fixed-width operand field did not hold a base-10 integer.
    #[error("invalid digit field {text:?} at offset {offset}")]
    InvalidDigits { text: String, offset: u64 },

    /// I/O error from the underlying reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
