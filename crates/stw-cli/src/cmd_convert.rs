/// Implementation of `stw convert`.
///
/// Reads the document, runs `StwDecoder::convert`, and writes the
/// plain-text transliteration to stdout or `-o <file>`. The streams
/// are buffered and the decoder flushes the output on every successful
/// path; a fatal error (no magic header, unopenable stream) surfaces
/// as a non-zero exit from `main`.
///
/// ```text
/// ┌──────────────────┬──────────────────────────────────────────────┐
/// │ Flag             │ Effect                                       │
/// ├──────────────────┼──────────────────────────────────────────────┤
/// │ -o, --output     │ write text to a file instead of stdout       │
/// │ --settings       │ settings report on stderr after converting   │
/// │ --settings-json  │ same report, as JSON                         │
/// └──────────────────┴──────────────────────────────────────────────┘
/// ```
use anyhow::{Context, Result};
use stw_decoder::StwDecoder;
use stw_report::ReportMode;

use crate::ConvertArgs;
use crate::streams::{open_input, open_output, print_diagnostics};

/// Run the `stw convert` command.
///
/// # Errors
///
/// Returns an error if a stream cannot be opened, the magic header is
/// not found, or the output cannot be written.
pub fn run(args: &ConvertArgs, verbose: bool) -> Result<()> {
    let input = open_input(args.input.as_deref())?;
    let output = open_output(args.output.as_deref())?;

    let conversion = StwDecoder::convert(input, output).context("conversion failed")?;

    print_diagnostics(&conversion.diagnostics, verbose);

    let report_mode = if args.settings_json {
        Some(ReportMode::Json)
    } else if args.settings {
        Some(ReportMode::Text)
    } else {
        None
    };
    if let Some(mode) = report_mode {
        let report =
            stw_report::render(&conversion.settings, mode).context("settings report failed")?;
        eprint!("{report}");
        if !report.ends_with('\n') {
            eprintln!();
        }
    }

    Ok(())
}
