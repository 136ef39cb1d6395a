/// Implementation of `stw check`.
///
/// Runs a full decode with the text counted rather than kept, then
/// prints a structural report. Exit code 0 means the document decoded;
/// non-fatal diagnostics are reported but do not fail the check, since
/// the format itself makes them survivable.
///
/// # Success output
///
/// ```text
/// ✓ Header: magic sequence found
/// ✓ Text: 1842 bytes of plain text
/// ✓ Diagnostics: none
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: STWriter file header not found
/// ```
use std::io::{self, Write};

use anyhow::{Result, anyhow};
use stw_decoder::{DiagnosticKind, StwDecoder};

use crate::CheckArgs;

/// Write sink that only counts the bytes passed through it.
struct CountingWriter {
    bytes: u64,
}

impl Write for CountingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run the `stw check` command.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or the document has
/// no magic header; the dispatcher in `main.rs` converts that to exit
/// code 1.
pub fn run(args: &CheckArgs) -> Result<()> {
    let input = crate::streams::open_input(args.input.as_deref())?;
    let mut counter = CountingWriter { bytes: 0 };

    match StwDecoder::convert(input, &mut counter) {
        Ok(conversion) => {
            println!("✓ Header: magic sequence found");
            println!("✓ Text: {} bytes of plain text", counter.bytes);

            let problems = conversion
                .diagnostics
                .iter()
                .filter(|d| !matches!(d.kind, DiagnosticKind::CaptureClosed { .. }))
                .count();
            if problems == 0 {
                println!("✓ Diagnostics: none");
            } else {
                println!(
                    "! Diagnostics: {problems} non-fatal issue{} (stream may be desynchronized)",
                    if problems == 1 { "" } else { "s" }
                );
                for diag in &conversion.diagnostics {
                    if !matches!(diag.kind, DiagnosticKind::CaptureClosed { .. }) {
                        println!("    {diag}");
                    }
                }
            }

            if conversion.settings.header.text.is_empty()
                && conversion.settings.footer.text.is_empty()
            {
                println!("✓ Captures: no header or footer defined");
            } else {
                println!("✓ Captures: header/footer text recorded (see `stw settings`)");
            }
            Ok(())
        }

        Err(e) => {
            println!("✗ Error: {e}");
            Err(anyhow!("check failed"))
        }
    }
}
