/// Implementation of `stw settings`.
///
/// Decodes the document with the text output directed at `io::sink()`
/// — the decoder must still run in full, since settings accumulate as
/// control codes stream by — and prints the final settings report to
/// stdout, as aligned text or as JSON with `--json`.
use std::io;

use anyhow::{Context, Result};
use stw_decoder::StwDecoder;
use stw_report::ReportMode;

use crate::SettingsArgs;
use crate::streams::{open_input, print_diagnostics};

/// Run the `stw settings` command.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or the magic header
/// is not found.
pub fn run(args: &SettingsArgs, verbose: bool) -> Result<()> {
    let input = open_input(args.input.as_deref())?;

    let conversion = StwDecoder::convert(input, io::sink()).context("decode failed")?;

    print_diagnostics(&conversion.diagnostics, verbose);

    let mode = if args.json {
        ReportMode::Json
    } else {
        ReportMode::Text
    };
    let report = stw_report::render(&conversion.settings, mode).context("settings report failed")?;
    print!("{report}");
    if !report.ends_with('\n') {
        println!();
    }

    Ok(())
}
