use std::io::{Read, Write};

use stw_types::{ControlCode, DocumentSettings, Operand};
use stw_wire::reader::ByteReader;
use stw_wire::{WireError, operand, scan_magic};

use crate::action::{self, Emit, OperandValue};
use crate::diagnostics::{Channel, Diagnostic, DiagnosticKind};
use crate::error::DecodeError;

/// The result of a conversion run.
///
/// The transliterated text has already been written to the caller's
/// sink; this carries everything else: the final document state and
/// the non-fatal events recorded along the way.
#[derive(Debug)]
pub struct Conversion {
    /// Final settings snapshot, including captured header/footer text
    /// and the chain filename.
    pub settings: DocumentSettings,

    /// Non-fatal events in stream order: operand failures, read
    /// failures, and capture-closed reports.
    pub diagnostics: Vec<Diagnostic>,
}

/// Single-pass ST-Writer stream decoder.
///
/// Consumes a byte source fully and writes a plain-text transliteration
/// to the sink, tracking document formatting state as control codes go
/// by. Decoding proceeds in three phases:
///
///   1. **Preamble**: scan for the 24-byte magic sequence with the
///      naive restart matcher. Not finding it is the one fatal parse
///      condition — nothing is emitted for headerless inputs.
///   2. **Main loop**: read one byte at a time. Control codes consume
///      their operand and run through the pure [`action`] transition;
///      literal printable bytes route to the footer buffer, else the
///      header buffer, else the text sink (footer wins when both
///      captures are open). Unprintable strays are discarded.
///   3. **Finalize**: flush the sink and hand back the settings and
///      diagnostics.
///
/// End-of-input anywhere in the main loop is normal termination. A
/// short or malformed operand is a diagnostic, not an error: the state
/// update is skipped and scanning resumes after exactly the bytes
/// consumed. The format has no resynchronization markers, so the rest
/// of the stream may then be misread — that behavior is inherent to
/// the format's framing and is deliberately not papered over.
///
/// # Example
///
/// ```rust
/// use stw_decoder::StwDecoder;
///
/// let mut doc = b"Do Run Run STWRITER.PRG\x00".to_vec();
/// doc.extend_from_slice(b"Hello\x00");
///
/// let (text, conversion) = StwDecoder::convert_bytes(&doc).unwrap();
/// assert_eq!(text, b"Hello\n");
/// assert!(conversion.diagnostics.is_empty());
/// ```
pub struct StwDecoder;

impl StwDecoder {
    /// Convert an ST-Writer byte stream into plain text.
    ///
    /// Reads `input` to exhaustion, writing the transliteration to
    /// `output` (flushed before returning). Callers should hand in
    /// buffered streams; the decoder reads one byte at a time.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::HeaderNotFound`] if the magic sequence never
    ///   appears.
    /// - [`DecodeError::Io`] if the sink fails, or the source fails
    ///   during the preamble scan.
    pub fn convert<R: Read, W: Write>(input: R, mut output: W) -> Result<Conversion, DecodeError> {
        let mut reader = ByteReader::new(input);

        // 1. Preamble. This has to come first: everything before the
        // magic is loader junk, and without the magic the input is not
        // an ST-Writer document at all.
        match scan_magic(&mut reader) {
            Ok(_) => {}
            Err(WireError::Io(e)) => return Err(DecodeError::Io(e)),
            Err(_) => return Err(DecodeError::HeaderNotFound),
        }

        let mut settings = DocumentSettings::default();
        let mut diagnostics = Vec::new();

        // 2. Main loop.
        loop {
            let byte = match reader.read_byte() {
                Ok(Some(b)) => b,
                Ok(None) => break,
                Err(e) => {
                    diagnostics.push(Diagnostic {
                        offset: reader.offset(),
                        kind: DiagnosticKind::ReadFailed {
                            reason: e.to_string(),
                        },
                    });
                    break;
                }
            };

            let Some(code) = ControlCode::from_byte(byte) else {
                route_literal(byte, &mut settings, &mut output)?;
                continue;
            };

            let value = match read_operand(&mut reader, code) {
                Ok(v) => v,
                Err(diag) => {
                    // Skip the state update and keep scanning from
                    // wherever the failed read stopped.
                    diagnostics.push(diag);
                    continue;
                }
            };

            let outcome = action::apply(code, value, &mut settings);
            match outcome.emit {
                Emit::Nothing => {}
                Emit::Newline => output.write_all(b"\n")?,
                Emit::ParagraphBreak => output.write_all(b"\n\n")?,
                Emit::CommentMarker => output.write_all(b"COMMENT: ")?,
            }
            if let Some(channel) = outcome.closed {
                let text = match channel {
                    Channel::Header => settings.header.text.clone(),
                    Channel::Footer => settings.footer.text.clone(),
                };
                diagnostics.push(Diagnostic {
                    offset: reader.offset(),
                    kind: DiagnosticKind::CaptureClosed { channel, text },
                });
            }
        }

        // 3. Finalize.
        output.flush()?;
        Ok(Conversion {
            settings,
            diagnostics,
        })
    }

    /// Convert an in-memory document, returning the text alongside the
    /// [`Conversion`]. Convenience entry for tests, fuzzing, and
    /// structural checks.
    ///
    /// # Errors
    ///
    /// Same conditions as [`convert`](Self::convert); writes to a
    /// `Vec`, so `Io` can only arise from the preamble scan.
    pub fn convert_bytes(input: &[u8]) -> Result<(Vec<u8>, Conversion), DecodeError> {
        let mut text = Vec::new();
        let conversion = Self::convert(input, &mut text)?;
        Ok((text, conversion))
    }
}

/// Default handling for a byte that is not a control code.
///
/// Unprintable strays (including the unassigned 0x01 and 0x1A–0x1F)
/// are dropped. Printable bytes go to exactly one destination, checked
/// in priority order: footer capture, header capture, text sink.
fn route_literal<W: Write>(
    byte: u8,
    settings: &mut DocumentSettings,
    output: &mut W,
) -> Result<(), DecodeError> {
    if !is_printable(byte) {
        return Ok(());
    }
    if settings.footer.capturing {
        settings.footer.push(byte);
    } else if settings.header.capturing {
        settings.header.push(byte);
    } else {
        output.write_all(&[byte])?;
    }
    Ok(())
}

/// Printable under the Latin-1 reading of a stream byte: the ASCII
/// space and graphic range, plus the high graphic block 0xA1–0xFF.
/// 0xA0 (no-break space), 0xAD (soft hyphen), and the C0/C1 control
/// ranges are not printable.
fn is_printable(byte: u8) -> bool {
    byte == b' ' || byte.is_ascii_graphic() || (byte >= 0xA1 && byte != 0xAD)
}

/// Read the operand for `code`, mapping failures to the diagnostic the
/// driver records. Byte consumption on failure is exactly what the
/// underlying read consumed.
fn read_operand<R: Read>(
    reader: &mut ByteReader<R>,
    code: ControlCode,
) -> Result<OperandValue, Diagnostic> {
    match code.operand() {
        Operand::None => Ok(OperandValue::None),
        Operand::Digits(width) => match operand::read_int(reader, width) {
            Ok(v) => Ok(OperandValue::Int(v)),
            Err(e) => Err(Diagnostic {
                offset: reader.offset(),
                kind: DiagnosticKind::BadOperand {
                    code,
                    reason: e.to_string(),
                },
            }),
        },
        Operand::Terminated(sentinel) => match reader.read_until(sentinel) {
            Ok(bytes) => Ok(OperandValue::Bytes(bytes)),
            Err(e) => Err(Diagnostic {
                offset: reader.offset(),
                kind: DiagnosticKind::UnterminatedSpan {
                    code,
                    reason: e.to_string(),
                },
            }),
        },
    }
}
