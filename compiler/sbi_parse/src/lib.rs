//! Go source parser for stripblankimports.
//!
//! Parses just enough of a Go file to locate and rewrite its imports: the
//! package clause, every import declaration, and the comment groups of the
//! whole file. The rest of the file is tokenized and checked for bracket
//! balance, then carried through unchanged.
//!
//! # Example
//!
//! ```
//! let source = "package main\n\nimport (\n\t\"fmt\"\n\n\t\"os\"\n)\n";
//! let Ok(output) = sbi_parse::parse(source) else {
//!     panic!("valid Go header");
//! };
//! assert_eq!(output.file.text(output.file.package_name), "main");
//! assert_eq!(output.file.imports.len(), 2);
//! assert_eq!(output.table.line_count(), 8);
//! ```

mod comments;
mod cook;
mod error;
mod parser;

pub use error::{SyntaxError, SyntaxErrorKind};

use sbi_ir::{PositionTable, SourceFile};

/// A parsed file and the position table built for it.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub file: SourceFile,
    pub table: PositionTable,
}

/// Parse Go source text.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<ParseOutput, SyntaxError> {
    if u32::try_from(source.len()).is_err() {
        return Err(SyntaxError::whole_file(SyntaxErrorKind::FileTooLarge));
    }

    let table = PositionTable::build(source);
    let cook::Cooked { tokens, comments } = cook::cook(source, &table)?;
    let groups = comments::group_comments(&tokens, &comments, &table);
    let header = parser::parse_header(&tokens, source, &table)?;

    tracing::trace!(
        decls = header.decls.len(),
        imports = header.imports.len(),
        comment_groups = groups.len(),
        "parsed header"
    );

    let file = SourceFile {
        source: source.to_string(),
        tokens,
        package_name: header.package_name,
        decls: header.decls,
        imports: header.imports,
        comments: groups,
    };
    Ok(ParseOutput { file, table })
}

/// Parse raw bytes, rejecting anything that is not UTF-8.
pub fn parse_bytes(bytes: &[u8]) -> Result<ParseOutput, SyntaxError> {
    let source = std::str::from_utf8(bytes)
        .map_err(|_| SyntaxError::whole_file(SyntaxErrorKind::InvalidUtf8))?;
    parse(source)
}
