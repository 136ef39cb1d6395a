#![warn(clippy::pedantic)]

//! Settings report renderer.
//!
//! Formats the final [`DocumentSettings`] snapshot from a conversion
//! run as human-readable text or as JSON. Entirely independent of the
//! decoder — it only reads the snapshot it is given.

use serde::Serialize;
use stw_types::DocumentSettings;

/// Rendering error. Only the JSON mode can fail.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format for the settings report.
///
/// ```text
/// ┌──────┬─────────────────────────────────────────────┐
/// │ Mode │ Format                                      │
/// ├──────┼─────────────────────────────────────────────┤
/// │ Text │ aligned "label: value" lines (default)      │
/// │ Json │ machine-readable SettingsSummary object     │
/// └──────┴─────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportMode {
    #[default]
    Text,
    Json,
}

/// Serializable mirror of [`DocumentSettings`] with byte buffers
/// rendered lossily as strings.
#[derive(Debug, Serialize)]
struct SettingsSummary {
    margin_top: i32,
    margin_bottom: i32,
    margin_left: i32,
    margin_right: i32,
    margin_left2: i32,
    margin_right2: i32,
    page_length: i32,
    start_page: i32,
    indent: i32,
    line_spacing: i32,
    paragraph_spacing: i32,
    section_level: i32,
    font: String,
    justified: bool,
    header: String,
    footer: String,
    chain_file: String,
}

impl SettingsSummary {
    fn from_settings(s: &DocumentSettings) -> Self {
        Self {
            margin_top: s.margin_top,
            margin_bottom: s.margin_bottom,
            margin_left: s.margin_left,
            margin_right: s.margin_right,
            margin_left2: s.margin_left2,
            margin_right2: s.margin_right2,
            page_length: s.page_length,
            start_page: s.start_page,
            indent: s.indent,
            line_spacing: s.line_spacing,
            paragraph_spacing: s.paragraph_spacing,
            section_level: s.section_level,
            font: s.font.display_name(),
            justified: s.justified,
            header: s.header.display_text(),
            footer: s.footer.display_text(),
            chain_file: s.chain_file_display(),
        }
    }
}

/// Render the settings report in the given mode.
///
/// # Errors
///
/// Returns [`ReportError::Json`] if JSON serialization fails; text
/// mode is infallible.
pub fn render(settings: &DocumentSettings, mode: ReportMode) -> Result<String, ReportError> {
    match mode {
        ReportMode::Text => Ok(render_text(settings)),
        ReportMode::Json => {
            let summary = SettingsSummary::from_settings(settings);
            Ok(serde_json::to_string_pretty(&summary)?)
        }
    }
}

/// The human-readable summary, one setting group per line.
///
/// ```text
/// Margins:           top=6 bottom=6 left=10 right=70
/// Column 2 margins:  left=0 right=0
/// Page:              length=66 lines, starting at page 1
/// Type:              font=pica, line spacing=2, justified=no
/// Paragraph:         indent=5, spacing=1
/// Section level:     0
/// Header:            "Annual Report"
/// Footer:            "Page @"
/// Chain file:        "B:PART2.STW"
/// ```
///
/// Header, footer, and chain-file lines are omitted when empty.
fn render_text(s: &DocumentSettings) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Margins:           top={} bottom={} left={} right={}",
        s.margin_top, s.margin_bottom, s.margin_left, s.margin_right
    ));
    lines.push(format!(
        "Column 2 margins:  left={} right={}",
        s.margin_left2, s.margin_right2
    ));
    lines.push(format!(
        "Page:              length={} lines, starting at page {}",
        s.page_length, s.start_page
    ));
    lines.push(format!(
        "Type:              font={}, line spacing={}, justified={}",
        s.font.display_name(),
        s.line_spacing,
        if s.justified { "yes" } else { "no" }
    ));
    lines.push(format!(
        "Paragraph:         indent={}, spacing={}",
        s.indent, s.paragraph_spacing
    ));
    lines.push(format!("Section level:     {}", s.section_level));
    if !s.header.text.is_empty() {
        lines.push(format!("Header:            {:?}", s.header.display_text()));
    }
    if !s.footer.text.is_empty() {
        lines.push(format!("Footer:            {:?}", s.footer.display_text()));
    }
    if !s.chain_file.is_empty() {
        lines.push(format!("Chain file:        {:?}", s.chain_file_display()));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stw_types::Font;

    fn sample() -> DocumentSettings {
        let mut s = DocumentSettings::default();
        s.margin_top = 6;
        s.margin_bottom = 6;
        s.margin_left = 10;
        s.margin_right = 70;
        s.page_length = 66;
        s.start_page = 1;
        s.line_spacing = 2;
        s.indent = 5;
        s.font = Font::Elite;
        s.justified = true;
        s.footer.open();
        for b in b"Page @" {
            s.footer.push(*b);
        }
        s.footer.close();
        s.chain_file = b"B:PART2.STW".to_vec();
        s
    }

    #[test]
    fn text_report_includes_all_set_fields() {
        let report = render(&sample(), ReportMode::Text).unwrap();
        assert!(report.contains("top=6 bottom=6 left=10 right=70"));
        assert!(report.contains("length=66 lines, starting at page 1"));
        assert!(report.contains("font=elite"));
        assert!(report.contains("justified=yes"));
        assert!(report.contains("Footer:            \"Page @\""));
        assert!(report.contains("Chain file:        \"B:PART2.STW\""));
    }

    #[test]
    fn text_report_omits_empty_capture_lines() {
        let report = render(&DocumentSettings::default(), ReportMode::Text).unwrap();
        assert!(!report.contains("Header:"));
        assert!(!report.contains("Footer:"));
        assert!(!report.contains("Chain file:"));
    }

    #[test]
    fn json_report_is_machine_readable() {
        let report = render(&sample(), ReportMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["margin_left"], 10);
        assert_eq!(value["font"], "elite");
        assert_eq!(value["footer"], "Page @");
        assert_eq!(value["justified"], true);
    }

    #[test]
    fn json_report_renders_unknown_font_codes() {
        let mut s = DocumentSettings::default();
        s.font = Font::Other(9);
        let report = render(&s, ReportMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["font"], "unknown (9)");
    }
}
