/// Operand shape that follows a control code on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// The code stands alone.
    None,
    /// A fixed-width ASCII digit field of this many bytes.
    Digits(usize),
    /// A variable-length run ended by this sentinel byte.
    Terminated(u8),
}

/// ST-Writer control codes — the single-byte commands interleaved with
/// document text.
///
/// The assigned range is 0x00–0x19 (Ctrl-@ through Ctrl-Y on the
/// original keyboard). 0x01 was never assigned, and 0x1A–0x1F are
/// unused; those bytes fall through [`from_byte`](Self::from_byte) as
/// `None` and get the literal-content treatment, which discards them
/// as unprintable.
///
/// ```text
/// ┌──────┬──────────────────┬───────────────────────────────────────┐
/// │ Byte │ Code             │ Operand                               │
/// ├──────┼──────────────────┼───────────────────────────────────────┤
/// │ 0x00 │ LineBreak        │ —                                     │
/// │ 0x02 │ BottomMargin     │ 3 digits                              │
/// │ 0x03 │ CenterToggle     │ — (twice in a row = block right)      │
/// │ 0x04 │ ParagraphSpacing │ 2 digits                              │
/// │ 0x05 │ PageEject        │ —                                     │
/// │ 0x06 │ FooterToggle     │ — (open capture / close and report)   │
/// │ 0x07 │ FontChange       │ 2 digits                              │
/// │ 0x08 │ HeaderToggle     │ — (open capture / close and report)   │
/// │ 0x09 │ ParagraphIndent  │ 2 digits                              │
/// │ 0x0A │ JustifyToggle    │ 2 digits (1 = justified)              │
/// │ 0x0B │ CommentMarker    │ —                                     │
/// │ 0x0C │ LeftMargin       │ 3 digits                              │
/// │ 0x0D │ LeftMargin2      │ 3 digits (second column)              │
/// │ 0x0E │ RightMargin2     │ 3 digits (second column)              │
/// │ 0x0F │ PrinterControl   │ 3 digits, read and discarded          │
/// │ 0x10 │ ParagraphBreak   │ —                                     │
/// │ 0x11 │ StartPage        │ 3 digits, may be negative             │
/// │ 0x12 │ RightMargin      │ 3 digits                              │
/// │ 0x13 │ LineSpacing      │ 1 digit                               │
/// │ 0x14 │ TopMargin        │ 3 digits                              │
/// │ 0x15 │ SectionLevel     │ 1 digit                               │
/// │ 0x16 │ ChainFile        │ bytes until 0x00                      │
/// │ 0x17 │ PageWait         │ —                                     │
/// │ 0x18 │ EscapeBlock      │ bytes until 0x18, discarded           │
/// │ 0x19 │ PageLength       │ 3 digits                              │
/// └──────┴──────────────────┴───────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlCode {
    LineBreak,
    BottomMargin,
    CenterToggle,
    ParagraphSpacing,
    PageEject,
    FooterToggle,
    FontChange,
    HeaderToggle,
    ParagraphIndent,
    JustifyToggle,
    CommentMarker,
    LeftMargin,
    LeftMargin2,
    RightMargin2,
    PrinterControl,
    ParagraphBreak,
    StartPage,
    RightMargin,
    LineSpacing,
    TopMargin,
    SectionLevel,
    ChainFile,
    PageWait,
    EscapeBlock,
    PageLength,
}

impl ControlCode {
    /// Decode a stream byte into a control code.
    ///
    /// Returns `None` for everything outside the assigned set —
    /// literal text, the unassigned 0x01, and 0x1A–0x1F alike. The
    /// caller's default handling decides what happens to those.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Self::LineBreak),
            0x02 => Some(Self::BottomMargin),
            0x03 => Some(Self::CenterToggle),
            0x04 => Some(Self::ParagraphSpacing),
            0x05 => Some(Self::PageEject),
            0x06 => Some(Self::FooterToggle),
            0x07 => Some(Self::FontChange),
            0x08 => Some(Self::HeaderToggle),
            0x09 => Some(Self::ParagraphIndent),
            0x0A => Some(Self::JustifyToggle),
            0x0B => Some(Self::CommentMarker),
            0x0C => Some(Self::LeftMargin),
            0x0D => Some(Self::LeftMargin2),
            0x0E => Some(Self::RightMargin2),
            0x0F => Some(Self::PrinterControl),
            0x10 => Some(Self::ParagraphBreak),
            0x11 => Some(Self::StartPage),
            0x12 => Some(Self::RightMargin),
            0x13 => Some(Self::LineSpacing),
            0x14 => Some(Self::TopMargin),
            0x15 => Some(Self::SectionLevel),
            0x16 => Some(Self::ChainFile),
            0x17 => Some(Self::PageWait),
            0x18 => Some(Self::EscapeBlock),
            0x19 => Some(Self::PageLength),
            _ => None,
        }
    }

    /// The raw stream byte for this code.
    pub fn code_byte(self) -> u8 {
        match self {
            Self::LineBreak => 0x00,
            Self::BottomMargin => 0x02,
            Self::CenterToggle => 0x03,
            Self::ParagraphSpacing => 0x04,
            Self::PageEject => 0x05,
            Self::FooterToggle => 0x06,
            Self::FontChange => 0x07,
            Self::HeaderToggle => 0x08,
            Self::ParagraphIndent => 0x09,
            Self::JustifyToggle => 0x0A,
            Self::CommentMarker => 0x0B,
            Self::LeftMargin => 0x0C,
            Self::LeftMargin2 => 0x0D,
            Self::RightMargin2 => 0x0E,
            Self::PrinterControl => 0x0F,
            Self::ParagraphBreak => 0x10,
            Self::StartPage => 0x11,
            Self::RightMargin => 0x12,
            Self::LineSpacing => 0x13,
            Self::TopMargin => 0x14,
            Self::SectionLevel => 0x15,
            Self::ChainFile => 0x16,
            Self::PageWait => 0x17,
            Self::EscapeBlock => 0x18,
            Self::PageLength => 0x19,
        }
    }

    /// The operand shape that follows this code in the stream.
    pub fn operand(self) -> Operand {
        match self {
            Self::LineBreak
            | Self::CenterToggle
            | Self::PageEject
            | Self::FooterToggle
            | Self::HeaderToggle
            | Self::CommentMarker
            | Self::ParagraphBreak
            | Self::PageWait => Operand::None,
            Self::LineSpacing | Self::SectionLevel => Operand::Digits(1),
            Self::ParagraphSpacing
            | Self::FontChange
            | Self::ParagraphIndent
            | Self::JustifyToggle => Operand::Digits(2),
            Self::BottomMargin
            | Self::LeftMargin
            | Self::LeftMargin2
            | Self::RightMargin2
            | Self::PrinterControl
            | Self::StartPage
            | Self::RightMargin
            | Self::TopMargin
            | Self::PageLength => Operand::Digits(3),
            Self::ChainFile => Operand::Terminated(0x00),
            Self::EscapeBlock => Operand::Terminated(0x18),
        }
    }

    /// Human-readable name, used by diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::LineBreak => "line break",
            Self::BottomMargin => "bottom margin",
            Self::CenterToggle => "center/block-right toggle",
            Self::ParagraphSpacing => "paragraph spacing",
            Self::PageEject => "page eject",
            Self::FooterToggle => "footer toggle",
            Self::FontChange => "font change",
            Self::HeaderToggle => "header toggle",
            Self::ParagraphIndent => "paragraph indent",
            Self::JustifyToggle => "justification toggle",
            Self::CommentMarker => "comment marker",
            Self::LeftMargin => "left margin",
            Self::LeftMargin2 => "column-2 left margin",
            Self::RightMargin2 => "column-2 right margin",
            Self::PrinterControl => "printer control code",
            Self::ParagraphBreak => "paragraph break",
            Self::StartPage => "starting page number",
            Self::RightMargin => "right margin",
            Self::LineSpacing => "line spacing",
            Self::TopMargin => "top margin",
            Self::SectionLevel => "section heading level",
            Self::ChainFile => "chain-file link",
            Self::PageWait => "page wait",
            Self::EscapeBlock => "escape block",
            Self::PageLength => "lines per page",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSIGNED: [u8; 25] = [
        0x00, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
        0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19,
    ];

    #[test]
    fn byte_mapping_roundtrips() {
        for byte in ASSIGNED {
            let code = ControlCode::from_byte(byte).unwrap();
            assert_eq!(code.code_byte(), byte);
        }
    }

    #[test]
    fn unassigned_bytes_map_to_none() {
        assert_eq!(ControlCode::from_byte(0x01), None);
        for byte in 0x1A..=0x1F {
            assert_eq!(ControlCode::from_byte(byte), None);
        }
        assert_eq!(ControlCode::from_byte(b'A'), None);
        assert_eq!(ControlCode::from_byte(0xFF), None);
    }

    #[test]
    fn operand_arity_table() {
        assert_eq!(ControlCode::LineBreak.operand(), Operand::None);
        assert_eq!(ControlCode::LineSpacing.operand(), Operand::Digits(1));
        assert_eq!(ControlCode::FontChange.operand(), Operand::Digits(2));
        assert_eq!(ControlCode::LeftMargin.operand(), Operand::Digits(3));
        assert_eq!(ControlCode::ChainFile.operand(), Operand::Terminated(0x00));
        assert_eq!(ControlCode::EscapeBlock.operand(), Operand::Terminated(0x18));
    }
}
