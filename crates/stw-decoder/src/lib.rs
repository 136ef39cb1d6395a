#![warn(clippy::pedantic)]

pub mod diagnostics;
pub mod error;

mod action;
mod decoder;

pub use decoder::{Conversion, StwDecoder};
pub use diagnostics::{Channel, Diagnostic, DiagnosticKind};
pub use error::DecodeError;
