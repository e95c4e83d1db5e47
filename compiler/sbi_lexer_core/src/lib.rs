//! Standalone raw tokenizer for Go source files.
//!
//! This crate knows nothing about import blocks or comment groups. It turns a
//! sentinel-terminated [`SourceBuffer`] into a stream of [`RawToken`] values,
//! each a `(RawTag, len)` pair. Keyword resolution, span construction, and
//! error reporting live in `sbi_parse`.
//!
//! # Example
//!
//! ```
//! use sbi_lexer_core::{RawScanner, RawTag, SourceBuffer};
//!
//! let buf = SourceBuffer::new("import \"fmt\"");
//! let mut scanner = RawScanner::new(buf.cursor());
//! assert_eq!(scanner.next_token().tag, RawTag::Ident);
//! assert_eq!(scanner.next_token().tag, RawTag::Whitespace);
//! assert_eq!(scanner.next_token().tag, RawTag::String);
//! assert_eq!(scanner.next_token().tag, RawTag::Eof);
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{RawTag, RawToken};
