#![warn(clippy::pedantic)]

pub mod error;
pub mod magic;
pub mod operand;
pub mod reader;

pub use error::WireError;
pub use magic::{STW_MAGIC, scan_magic};
pub use reader::ByteReader;
