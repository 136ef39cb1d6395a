/// Fatal conversion errors.
///
/// Only two conditions abort a run: the magic header never appearing,
/// and the output sink failing. Everything else — short operands,
/// digit fields that don't parse, unterminated spans — is a non-fatal
/// [`Diagnostic`](crate::Diagnostic) and the decoder keeps scanning.
/// End-of-input during the main loop is normal termination, not an
/// error.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Input was exhausted without the magic header sequence appearing.
    ///
    /// No text output is produced for such inputs — the scan happens
    /// before any byte reaches the sink.
    #[error("STWriter file header not found")]
    HeaderNotFound,

    /// The text sink (or the input, during the preamble scan) failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
