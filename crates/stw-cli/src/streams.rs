use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use stw_decoder::{Diagnostic, DiagnosticKind};

/// Open the input stream: a file when a path is given, stdin when the
/// path is absent or `-`. Always buffered — the decoder reads one byte
/// at a time.
pub fn open_input(path: Option<&Path>) -> Result<BufReader<Box<dyn Read>>> {
    let inner: Box<dyn Read> = match path {
        Some(p) if p.as_os_str() != "-" => Box::new(
            File::open(p).with_context(|| format!("cannot open {}", p.display()))?,
        ),
        _ => Box::new(io::stdin()),
    };
    Ok(BufReader::new(inner))
}

/// Open the output stream: a file when a path is given, stdout
/// otherwise. Buffered; the decoder flushes it before returning.
pub fn open_output(path: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>> {
    let inner: Box<dyn Write> = match path {
        Some(p) => Box::new(
            File::create(p).with_context(|| format!("cannot create {}", p.display()))?,
        ),
        None => Box::new(io::stdout()),
    };
    Ok(BufWriter::new(inner))
}

/// Print decode diagnostics to stderr.
///
/// Operand and read failures are always shown; capture-closed reports
/// (header/footer text) only with `--verbose`, since they describe
/// normal documents rather than problems.
pub fn print_diagnostics(diagnostics: &[Diagnostic], verbose: bool) {
    for diag in diagnostics {
        match diag.kind {
            DiagnosticKind::CaptureClosed { .. } => {
                if verbose {
                    eprintln!("{diag}");
                }
            }
            _ => eprintln!("{diag}"),
        }
    }
}
