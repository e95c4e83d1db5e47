//! Syntax nodes for the parts of a Go file this tool understands.
//!
//! Only the package clause and import declarations are modeled. Everything
//! after the imports is carried as tokens so it can be printed back
//! unchanged.

use std::ops::Range;

use crate::{CommentGroup, Span, Token};

/// Anything with a start and end position in the source.
///
/// Import specs and comment groups are both consumed through this
/// capability when walking an import block in position order.
pub trait Positioned {
    fn span(&self) -> Span;

    /// Offset of the first byte.
    #[inline]
    fn start(&self) -> u32 {
        self.span().start
    }

    /// Offset one past the last byte.
    #[inline]
    fn end(&self) -> u32 {
        self.span().end
    }
}

impl Positioned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

/// A single import: `[name] "path"`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImportSpec {
    /// Local name: an identifier, `_`, or `.`.
    pub name: Option<Span>,
    /// The quoted path literal, quotes included.
    pub path: Span,
}

impl ImportSpec {
    pub const fn new(name: Option<Span>, path: Span) -> Self {
        ImportSpec { name, path }
    }
}

impl Positioned for ImportSpec {
    fn span(&self) -> Span {
        match self.name {
            Some(name) => name.merge(self.path),
            None => self.path,
        }
    }
}

/// One `import` declaration, grouped or not.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImportDecl {
    /// The `import` keyword.
    pub keyword: Span,
    /// `(` and `)` of a grouped declaration.
    pub parens: Option<(Span, Span)>,
    /// Indices into [`SourceFile::imports`].
    pub specs: Range<usize>,
}

impl Positioned for ImportDecl {
    fn span(&self) -> Span {
        match self.parens {
            Some((_, rparen)) => self.keyword.merge(rparen),
            None => self.keyword,
        }
    }
}

/// A parsed Go source file.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SourceFile {
    /// The full source text. Printing copies token text from here.
    pub source: String,
    /// Every significant token, comments included, in source order.
    pub tokens: Vec<Token>,
    /// Span of the package name.
    pub package_name: Span,
    /// Import declarations in source order.
    pub decls: Vec<ImportDecl>,
    /// Every import spec of every declaration, in source order.
    pub imports: Vec<ImportSpec>,
    /// Every comment group in the file, in source order.
    pub comments: Vec<CommentGroup>,
}

impl SourceFile {
    /// Source text covered by `span`.
    pub fn text(&self, span: Span) -> &str {
        self.source.get(span.to_range()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenKind;

    #[test]
    fn spec_span_includes_name() {
        let spec = ImportSpec::new(Some(Span::new(10, 11)), Span::new(12, 17));
        assert_eq!(spec.span(), Span::new(10, 17));
        let bare = ImportSpec::new(None, Span::new(12, 17));
        assert_eq!(bare.start(), 12);
        assert_eq!(bare.end(), 17);
    }

    #[test]
    fn grouped_decl_span_reaches_rparen() {
        let decl = ImportDecl {
            keyword: Span::new(14, 20),
            parens: Some((Span::new(21, 22), Span::new(40, 41))),
            specs: 0..2,
        };
        assert!(decl.parens.is_some());
        assert_eq!(decl.span(), Span::new(14, 41));
    }

    #[test]
    fn text_lookup() {
        let source = "package main\nimport \"fmt\"\n".to_string();
        let file = SourceFile {
            tokens: vec![Token::new(TokenKind::Package, Span::new(0, 7))],
            package_name: Span::new(8, 12),
            decls: vec![ImportDecl {
                keyword: Span::new(13, 19),
                parens: None,
                specs: 0..1,
            }],
            imports: vec![ImportSpec::new(None, Span::new(20, 25))],
            comments: Vec::new(),
            source,
        };
        assert_eq!(file.text(file.package_name), "main");
        assert_eq!(file.text(file.imports[0].path), "\"fmt\"");
        assert_eq!(file.imports[file.decls[0].specs.clone()].len(), 1);
        assert_eq!(file.text(Span::new(100, 200)), "");
    }
}
