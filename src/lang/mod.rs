/*!
# Rust Language Module

This Rust module provides the character-level view of a MIEP program:
the cursor that doubles as program counter, literal scanning, variable
names, and errors.

*/

/// Line numbers are 16-bit. Zero and negative values are sentinels
/// used by the runtime.
pub type LineNumber = i16;

#[macro_use]
mod error;
mod cursor;
mod ident;

pub use cursor::{is_miep_alphabetic, is_miep_digit, is_miep_hexdigit, is_miep_whitespace};
pub use cursor::Cursor;
pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
