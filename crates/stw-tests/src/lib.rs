#![warn(clippy::pedantic)]

//! Test fixture support for the stw workspace.
//!
//! The production crates deliberately have no encoder — conversion is
//! one-directional — so the integration tests build their control-coded
//! input streams with [`DocBuilder`] instead.

use stw_types::ControlCode;
use stw_wire::STW_MAGIC;

/// Builder for ST-Writer byte streams.
///
/// Starts with the magic header (use [`without_magic`](Self::without_magic)
/// for negative tests) and appends literal text, control codes, and
/// operand fields in stream order.
///
/// # Example
///
/// ```rust
/// use stw_tests::DocBuilder;
/// use stw_types::ControlCode;
///
/// let doc = DocBuilder::new()
///     .text("Hello")
///     .code(ControlCode::LineBreak)
///     .build();
/// assert!(doc.starts_with(b"Do Run Run STWRITER.PRG\x00"));
/// assert!(doc.ends_with(b"Hello\x00"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DocBuilder {
    bytes: Vec<u8>,
}

impl DocBuilder {
    /// A document starting with the magic header.
    pub fn new() -> Self {
        Self {
            bytes: STW_MAGIC.to_vec(),
        }
    }

    /// A document with no magic header at all.
    pub fn without_magic() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Append literal text bytes.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.bytes.extend_from_slice(text.as_bytes());
        self
    }

    /// Append raw bytes verbatim.
    #[must_use]
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Append a bare control code.
    #[must_use]
    pub fn code(mut self, code: ControlCode) -> Self {
        self.bytes.push(code.code_byte());
        self
    }

    /// Append a control code followed by its digit field, exactly as
    /// given (the caller controls width and padding).
    #[must_use]
    pub fn code_field(mut self, code: ControlCode, field: &str) -> Self {
        self.bytes.push(code.code_byte());
        self.bytes.extend_from_slice(field.as_bytes());
        self
    }

    /// Append a chain-file link: the code, the name, the NUL terminator.
    #[must_use]
    pub fn chain_file(mut self, name: &str) -> Self {
        self.bytes.push(ControlCode::ChainFile.code_byte());
        self.bytes.extend_from_slice(name.as_bytes());
        self.bytes.push(0x00);
        self
    }

    /// Append an escape block: 0x18, the span, the closing 0x18.
    #[must_use]
    pub fn escape_block(mut self, span: &[u8]) -> Self {
        self.bytes.push(ControlCode::EscapeBlock.code_byte());
        self.bytes.extend_from_slice(span);
        self.bytes.push(ControlCode::EscapeBlock.code_byte());
        self
    }

    /// Append header text wrapped in a toggle pair.
    #[must_use]
    pub fn header(self, text: &str) -> Self {
        self.code(ControlCode::HeaderToggle)
            .text(text)
            .code(ControlCode::HeaderToggle)
    }

    /// Append footer text wrapped in a toggle pair.
    #[must_use]
    pub fn footer(self, text: &str) -> Self {
        self.code(ControlCode::FooterToggle)
            .text(text)
            .code(ControlCode::FooterToggle)
    }

    /// The finished byte stream.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_starts_with_magic() {
        let doc = DocBuilder::new().build();
        assert_eq!(doc, STW_MAGIC.to_vec());
    }

    #[test]
    fn without_magic_is_empty() {
        assert!(DocBuilder::without_magic().build().is_empty());
    }

    #[test]
    fn chain_file_is_nul_terminated() {
        let doc = DocBuilder::without_magic().chain_file("A:X.STW").build();
        assert_eq!(doc, b"\x16A:X.STW\x00");
    }

    #[test]
    fn escape_block_is_bracketed() {
        let doc = DocBuilder::without_magic().escape_block(b"\x1b[1m").build();
        assert_eq!(doc, b"\x18\x1b[1m\x18");
    }
}
