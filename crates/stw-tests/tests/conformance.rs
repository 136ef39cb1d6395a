//! Snapshot conformance: a reference document run through the full
//! pipeline, with the converted text and both report renderings pinned
//! as snapshots.

use stw_decoder::StwDecoder;
use stw_report::ReportMode;
use stw_tests::DocBuilder;
use stw_types::ControlCode;

/// A small but representative document: margins, page setup, font and
/// justification, header/footer captures, a chain link, body text with
/// line and paragraph breaks, and a comment.
fn reference_document() -> Vec<u8> {
    DocBuilder::new()
        .code_field(ControlCode::TopMargin, "  6")
        .code_field(ControlCode::BottomMargin, "  6")
        .code_field(ControlCode::LeftMargin, " 10")
        .code_field(ControlCode::RightMargin, " 70")
        .code_field(ControlCode::PageLength, " 66")
        .code_field(ControlCode::StartPage, "  1")
        .code_field(ControlCode::LineSpacing, "1")
        .code_field(ControlCode::FontChange, " 4")
        .code_field(ControlCode::JustifyToggle, " 1")
        .header("ST-Writer Reference")
        .footer("Page @")
        .chain_file("B:PART2.STW")
        .text("MANUAL")
        .code(ControlCode::LineBreak)
        .text("First paragraph.")
        .code(ControlCode::ParagraphBreak)
        .text("Second paragraph.")
        .code(ControlCode::LineBreak)
        .code(ControlCode::CommentMarker)
        .text("draft only")
        .code(ControlCode::LineBreak)
        .build()
}

#[test]
fn converted_text() {
    let (text, conv) = StwDecoder::convert_bytes(&reference_document()).unwrap();
    // The only diagnostics are the two capture-closed reports.
    assert_eq!(conv.diagnostics.len(), 2);
    insta::assert_snapshot!(String::from_utf8(text).unwrap());
}

#[test]
fn settings_report_text() {
    let (_, conv) = StwDecoder::convert_bytes(&reference_document()).unwrap();
    let report = stw_report::render(&conv.settings, ReportMode::Text).unwrap();
    insta::assert_snapshot!(report);
}

#[test]
fn settings_report_json() {
    let (_, conv) = StwDecoder::convert_bytes(&reference_document()).unwrap();
    let report = stw_report::render(&conv.settings, ReportMode::Json).unwrap();
    insta::assert_snapshot!(report);
}
