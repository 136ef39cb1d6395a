use crate::font::Font;

/// Accumulator for header or footer text.
///
/// Capture toggles on each occurrence of the corresponding control
/// code: the first occurrence opens capture and clears the buffer, the
/// second closes it. The captured text survives the close so the final
/// settings snapshot can report it.
///
/// Header capture and footer capture are NOT mutually exclusive — the
/// format allows both to be open at once, and the decoder's routing
/// breaks the tie by checking footer first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureBuffer {
    /// Whether literal bytes are currently being diverted here.
    pub capturing: bool,
    /// Captured bytes. Unbounded; the format declares no maximum.
    pub text: Vec<u8>,
}

impl CaptureBuffer {
    /// Start capturing, discarding any previously captured text.
    pub fn open(&mut self) {
        self.capturing = true;
        self.text.clear();
    }

    /// Stop capturing. The text is retained for reporting.
    pub fn close(&mut self) {
        self.capturing = false;
    }

    pub fn push(&mut self, byte: u8) {
        self.text.push(byte);
    }

    /// Captured text, rendered lossily for display.
    pub fn display_text(&self) -> String {
        String::from_utf8_lossy(&self.text).into_owned()
    }
}

/// Document formatting state, mutated as control codes are decoded.
///
/// Created once per conversion run with [`Default`] (all margins and
/// counters zero, pica font, nothing captured) and returned to the
/// caller as the final snapshot once the stream is exhausted. It has no
/// persistence beyond one run.
///
/// Margins are in page units; `start_page` may be negative.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentSettings {
    pub margin_top: i32,
    pub margin_bottom: i32,
    pub margin_left: i32,
    pub margin_right: i32,
    /// Second-column margins for two-column layout.
    pub margin_left2: i32,
    pub margin_right2: i32,

    /// Lines per page.
    pub page_length: i32,
    pub start_page: i32,

    pub indent: i32,
    pub line_spacing: i32,
    pub paragraph_spacing: i32,
    pub section_level: i32,
    pub font: Font,
    pub justified: bool,

    pub header: CaptureBuffer,
    pub footer: CaptureBuffer,

    // Line-oriented flags, cleared by every line break. A second
    // center toggle flips center off and block-right on, never back
    // to plain.
    pub center: bool,
    pub block_right: bool,

    /// Filename from the chain-file link code, NUL-terminated on disk.
    pub chain_file: Vec<u8>,
}

impl DocumentSettings {
    /// Chain filename, rendered lossily for display.
    pub fn chain_file_display(&self) -> String {
        String::from_utf8_lossy(&self.chain_file).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let s = DocumentSettings::default();
        assert_eq!(s.margin_left, 0);
        assert_eq!(s.start_page, 0);
        assert_eq!(s.font, Font::Pica);
        assert!(!s.justified);
        assert!(!s.header.capturing);
        assert!(s.footer.text.is_empty());
        assert!(s.chain_file.is_empty());
    }

    #[test]
    fn capture_open_clears_previous_text() {
        let mut buf = CaptureBuffer::default();
        buf.open();
        buf.push(b'a');
        buf.close();
        assert_eq!(buf.text, b"a");

        buf.open();
        assert!(buf.capturing);
        assert!(buf.text.is_empty());
    }

    #[test]
    fn capture_close_retains_text() {
        let mut buf = CaptureBuffer::default();
        buf.open();
        buf.push(b'p');
        buf.push(b'.');
        buf.close();
        assert!(!buf.capturing);
        assert_eq!(buf.display_text(), "p.");
    }
}
