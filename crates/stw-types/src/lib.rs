#![warn(clippy::pedantic)]

pub mod control;
pub mod font;
pub mod settings;

pub use control::{ControlCode, Operand};
pub use font::Font;
pub use settings::{CaptureBuffer, DocumentSettings};
