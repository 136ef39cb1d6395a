use stw_types::{ControlCode, DocumentSettings, Font};

use crate::diagnostics::Channel;

/// What the driver loop should write to the text sink for a control
/// code. Emissions always go to the main sink, even while a capture is
/// open — only default-case literal bytes are diverted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Emit {
    Nothing,
    /// One newline (line/paragraph terminator).
    Newline,
    /// Two newlines (paragraph code).
    ParagraphBreak,
    /// The literal `"COMMENT: "` marker. The comment text itself is
    /// not suppressed — it passes through afterwards as ordinary
    /// characters.
    CommentMarker,
}

/// An operand after it has been read and (for digit fields) parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum OperandValue {
    None,
    Int(i32),
    Bytes(Vec<u8>),
}

/// Result of applying a control code: what to emit, and whether a
/// capture buffer was toggled shut (so the driver can report its
/// contents).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Outcome {
    pub emit: Emit,
    pub closed: Option<Channel>,
}

impl Outcome {
    fn nothing() -> Self {
        Self {
            emit: Emit::Nothing,
            closed: None,
        }
    }

    fn emit(emit: Emit) -> Self {
        Self { emit, closed: None }
    }
}

/// Pure state transition for one control code.
///
/// No I/O happens here: the driver loop has already read the operand
/// and performs the emission afterwards. This keeps every per-code
/// effect independently testable against a bare `DocumentSettings`.
pub(crate) fn apply(
    code: ControlCode,
    value: OperandValue,
    settings: &mut DocumentSettings,
) -> Outcome {
    match (code, value) {
        (ControlCode::LineBreak, _) => {
            // Line-oriented flags last until the terminator.
            settings.center = false;
            settings.block_right = false;
            Outcome::emit(Emit::Newline)
        }
        (ControlCode::ParagraphBreak, _) => Outcome::emit(Emit::ParagraphBreak),
        (ControlCode::CommentMarker, _) => Outcome::emit(Emit::CommentMarker),

        (ControlCode::CenterToggle, _) => {
            // First toggle centers the line; a second flips to
            // block-right, never back to plain.
            if settings.center {
                settings.center = false;
                settings.block_right = true;
            } else {
                settings.center = true;
            }
            Outcome::nothing()
        }

        (ControlCode::FooterToggle, _) => {
            if settings.footer.capturing {
                settings.footer.close();
                Outcome {
                    emit: Emit::Nothing,
                    closed: Some(Channel::Footer),
                }
            } else {
                settings.footer.open();
                Outcome::nothing()
            }
        }
        (ControlCode::HeaderToggle, _) => {
            if settings.header.capturing {
                settings.header.close();
                Outcome {
                    emit: Emit::Nothing,
                    closed: Some(Channel::Header),
                }
            } else {
                settings.header.open();
                Outcome::nothing()
            }
        }

        (ControlCode::BottomMargin, OperandValue::Int(v)) => {
            settings.margin_bottom = v;
            Outcome::nothing()
        }
        (ControlCode::TopMargin, OperandValue::Int(v)) => {
            settings.margin_top = v;
            Outcome::nothing()
        }
        (ControlCode::LeftMargin, OperandValue::Int(v)) => {
            settings.margin_left = v;
            Outcome::nothing()
        }
        (ControlCode::RightMargin, OperandValue::Int(v)) => {
            settings.margin_right = v;
            Outcome::nothing()
        }
        (ControlCode::LeftMargin2, OperandValue::Int(v)) => {
            settings.margin_left2 = v;
            Outcome::nothing()
        }
        (ControlCode::RightMargin2, OperandValue::Int(v)) => {
            settings.margin_right2 = v;
            Outcome::nothing()
        }
        (ControlCode::ParagraphSpacing, OperandValue::Int(v)) => {
            settings.paragraph_spacing = v;
            Outcome::nothing()
        }
        (ControlCode::ParagraphIndent, OperandValue::Int(v)) => {
            settings.indent = v;
            Outcome::nothing()
        }
        (ControlCode::LineSpacing, OperandValue::Int(v)) => {
            settings.line_spacing = v;
            Outcome::nothing()
        }
        (ControlCode::SectionLevel, OperandValue::Int(v)) => {
            settings.section_level = v;
            Outcome::nothing()
        }
        (ControlCode::StartPage, OperandValue::Int(v)) => {
            settings.start_page = v;
            Outcome::nothing()
        }
        (ControlCode::PageLength, OperandValue::Int(v)) => {
            settings.page_length = v;
            Outcome::nothing()
        }
        (ControlCode::FontChange, OperandValue::Int(v)) => {
            settings.font = Font::from_code(v);
            Outcome::nothing()
        }
        (ControlCode::JustifyToggle, OperandValue::Int(v)) => {
            settings.justified = v == 1;
            Outcome::nothing()
        }

        (ControlCode::ChainFile, OperandValue::Bytes(name)) => {
            settings.chain_file = name;
            Outcome::nothing()
        }

        // Operand read and thrown away: printer pass-through values
        // and escaped printer code spans mean nothing to a text
        // rendition.
        (ControlCode::PrinterControl, _) | (ControlCode::EscapeBlock, _) => Outcome::nothing(),

        // No effect on output or state.
        (ControlCode::PageEject, _) | (ControlCode::PageWait, _) => Outcome::nothing(),

        // A digit code with a non-int value (or vice versa) cannot be
        // produced by the driver; treat it as a skipped update.
        _ => Outcome::nothing(),
    }
}
