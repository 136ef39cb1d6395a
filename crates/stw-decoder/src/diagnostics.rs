use std::fmt;

use stw_types::ControlCode;

/// Which capture buffer an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Header,
    Footer,
}

impl Channel {
    pub fn name(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Footer => "footer",
        }
    }
}

/// A non-fatal event recorded while decoding.
///
/// These are values on the [`Conversion`](crate::Conversion) result
/// rather than log output, so callers decide where they go (the CLI
/// prints them to stderr).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Absolute input offset where the event was recorded — for read
    /// failures, the position after the last byte consumed.
    pub offset: u64,
    pub kind: DiagnosticKind,
}

/// What went wrong (or, for capture events, what happened).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A fixed-width digit operand was short or failed to parse. The
    /// state update was skipped; scanning resumed after exactly the
    /// bytes consumed, so the stream may be desynchronized from here
    /// on. The format gives no way to recover and none is attempted.
    BadOperand { code: ControlCode, reason: String },

    /// A terminator-delimited operand hit end-of-input before its
    /// sentinel byte.
    UnterminatedSpan { code: ControlCode, reason: String },

    /// The input stream failed mid-scan; the loop ended early.
    ReadFailed { reason: String },

    /// A header or footer capture was closed, with the text it
    /// accumulated. This is the decoder's log channel for diverted
    /// content — the same text also remains on the final settings.
    CaptureClosed { channel: Channel, text: Vec<u8> },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::BadOperand { code, reason } => {
                write!(
                    f,
                    "offset {}: bad operand for {}: {reason}",
                    self.offset,
                    code.name()
                )
            }
            DiagnosticKind::UnterminatedSpan { code, reason } => {
                write!(
                    f,
                    "offset {}: unterminated {}: {reason}",
                    self.offset,
                    code.name()
                )
            }
            DiagnosticKind::ReadFailed { reason } => {
                write!(f, "offset {}: read failed: {reason}", self.offset)
            }
            DiagnosticKind::CaptureClosed { channel, text } => {
                write!(
                    f,
                    "{}: {}",
                    channel.name().to_uppercase(),
                    String::from_utf8_lossy(text)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_operand_display_names_the_code() {
        let diag = Diagnostic {
            offset: 42,
            kind: DiagnosticKind::BadOperand {
                code: ControlCode::FontChange,
                reason: "short read".to_string(),
            },
        };
        let rendered = diag.to_string();
        assert!(rendered.contains("offset 42"));
        assert!(rendered.contains("font change"));
    }

    #[test]
    fn capture_closed_display_matches_log_format() {
        let diag = Diagnostic {
            offset: 0,
            kind: DiagnosticKind::CaptureClosed {
                channel: Channel::Footer,
                text: b"Page @".to_vec(),
            },
        };
        assert_eq!(diag.to_string(), "FOOTER: Page @");
    }
}
