/// ST-Writer command-line tool — convert, inspect, and check Atari
/// ST-Writer `.stw` documents.
///
/// # Command overview
///
/// ```text
/// stw <COMMAND> [OPTIONS]
///
/// Commands:
///   convert    Convert a document to plain text
///   settings   Print the document's formatting settings
///   check      Check a document for structural validity
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Also report captured header/footer text on stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                            |
/// |------|----------------------------------------------------|
/// | 0    | Success                                            |
/// | 1    | Fatal error (header not found, unopenable stream)  |
///
/// Error details and diagnostics go to stderr so stdout pipes cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_check;
mod cmd_convert;
mod cmd_settings;
mod streams;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The ST-Writer document converter.
#[derive(Parser)]
#[command(name = "stw", version, about = "Atari ST-Writer document converter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Also report captured header/footer text on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Convert an ST-Writer document to plain text.
    Convert(ConvertArgs),
    /// Print the formatting settings of a document.
    Settings(SettingsArgs),
    /// Check a document for structural validity.
    Check(CheckArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `stw convert`.
///
/// Reads the document (file or stdin), strips and interprets the
/// control codes, and writes plain text to stdout or `-o <file>`.
/// Operand diagnostics always go to stderr; the settings report is
/// opt-in and also goes to stderr so the text output stays clean.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Input `.stw` file (defaults to stdin; `-` also means stdin).
    pub input: Option<PathBuf>,

    /// Write plain text to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the settings report to stderr after converting.
    #[arg(long)]
    pub settings: bool,

    /// Print the settings report as JSON instead of text.
    #[arg(long, conflicts_with = "settings")]
    pub settings_json: bool,
}

/// Arguments for `stw settings`.
///
/// Decodes the document, discards the text, and prints only the
/// formatting settings report (margins, page geometry, font, header,
/// footer, chain file) to stdout.
#[derive(clap::Args)]
pub struct SettingsArgs {
    /// Input `.stw` file (defaults to stdin; `-` also means stdin).
    pub input: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `stw check`.
///
/// Runs a full decode and reports structural health: whether the magic
/// header was found, how much text the document produces, and how many
/// non-fatal diagnostics were recorded along the way.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Input `.stw` file (defaults to stdin; `-` also means stdin).
    pub input: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert(args) => cmd_convert::run(&args, cli.verbose),
        Commands::Settings(args) => cmd_settings::run(&args, cli.verbose),
        Commands::Check(args) => cmd_check::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
