/// Printer font selected by the font-change control code.
///
/// ```text
/// ┌──────┬───────────┐
/// │ Code │ Font      │
/// ├──────┼───────────┤
/// │ 0    │ Pica      │
/// │ 1    │ Bold      │
/// │ 2    │ Condensed │
/// │ 3    │ Italic    │
/// │ 4    │ Elite     │
/// └──────┴───────────┘
/// ```
///
/// The format does not validate font codes, so `from_code` never
/// fails: anything outside the table is preserved verbatim in
/// `Other`, the way it arrived on disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Font {
    #[default]
    Pica,
    Bold,
    Condensed,
    Italic,
    Elite,
    /// Unrecognized font code, stored as-is.
    Other(i32),
}

impl Font {
    /// Map a font-change operand value to a font.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Pica,
            1 => Self::Bold,
            2 => Self::Condensed,
            3 => Self::Italic,
            4 => Self::Elite,
            other => Self::Other(other),
        }
    }

    /// The raw operand value for this font.
    pub fn code(self) -> i32 {
        match self {
            Self::Pica => 0,
            Self::Bold => 1,
            Self::Condensed => 2,
            Self::Italic => 3,
            Self::Elite => 4,
            Self::Other(code) => code,
        }
    }

    /// Display name for the settings report.
    pub fn display_name(self) -> String {
        match self {
            Self::Pica => "pica".to_string(),
            Self::Bold => "bold".to_string(),
            Self::Condensed => "condensed".to_string(),
            Self::Italic => "italic".to_string(),
            Self::Elite => "elite".to_string(),
            Self::Other(code) => format!("unknown ({code})"),
        }
    }
}
