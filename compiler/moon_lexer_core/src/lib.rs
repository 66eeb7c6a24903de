//! Low-level raw scanner for Moon.
//!
//! Produces `(RawTag, len)` pairs from a sentinel-terminated
//! [`SourceBuffer`]. Nothing here allocates per token, resolves keywords,
//! or builds payloads; that is the job of the cooking layer in
//! `moon_lexer`.
//!
//! ```text
//! bytes → SourceBuffer → Cursor → RawScanner → (RawTag, len)
//! ```

pub mod char_class;
mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
