//! Header parser: package clause and import declarations.
//!
//! Works over the cooked stream with comments removed. After the imports,
//! the rest of the file is only scanned for bracket balance and for
//! out-of-place `package`/`import` keywords.

use sbi_ir::{ImportDecl, ImportSpec, PositionTable, Span, Token, TokenKind};

use crate::{SyntaxError, SyntaxErrorKind};

/// Everything the header parse produces.
pub(crate) struct Header {
    pub package_name: Span,
    pub decls: Vec<ImportDecl>,
    pub imports: Vec<ImportSpec>,
}

/// Parse the header of a file whose cooked stream is `tokens`.
pub(crate) fn parse_header(
    tokens: &[Token],
    source: &str,
    table: &PositionTable,
) -> Result<Header, SyntaxError> {
    let significant: Vec<Token> = tokens
        .iter()
        .copied()
        .filter(|t| t.kind != TokenKind::Comment)
        .collect();
    Parser {
        tokens: &significant,
        pos: 0,
        source,
        table,
        decls: Vec::new(),
        imports: Vec::new(),
    }
    .parse_file()
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    source: &'a str,
    table: &'a PositionTable,
    decls: Vec<ImportDecl>,
    imports: Vec<ImportSpec>,
}

impl Parser<'_> {
    fn parse_file(mut self) -> Result<Header, SyntaxError> {
        self.expect(TokenKind::Package, "'package'")?;
        let name = self.expect(TokenKind::Ident, "package name")?;
        if self.text(name.span) == "_" {
            return Err(self.error(SyntaxErrorKind::InvalidPackageName, name.span));
        }
        self.terminate(name)?;

        while self.at(TokenKind::Import) {
            self.import_decl()?;
        }
        self.check_rest()?;

        Ok(Header {
            package_name: name.span,
            decls: self.decls,
            imports: self.imports,
        })
    }

    /// `import Spec` or `import ( {Spec ;} )`.
    fn import_decl(&mut self) -> Result<(), SyntaxError> {
        let Some(keyword) = self.bump() else {
            return Err(self.expected("'import'"));
        };
        let first = self.imports.len();

        if !self.at(TokenKind::LParen) {
            let path = self.import_spec()?;
            self.terminate(path)?;
            self.decls.push(ImportDecl {
                keyword: keyword.span,
                parens: None,
                specs: first..self.imports.len(),
            });
            return Ok(());
        }

        let lparen = self.expect(TokenKind::LParen, "'('")?;
        while !self.at(TokenKind::RParen) {
            let path = self.import_spec()?;
            match self.current() {
                Some(t) if t.kind == TokenKind::Semicolon => self.pos += 1,
                Some(t) if t.kind == TokenKind::RParen => {}
                Some(t) if self.starts_later_line(t, path) => {}
                _ => return Err(self.expected("';', ')' or newline")),
            }
        }
        let rparen = self.expect(TokenKind::RParen, "')'")?;
        self.terminate(rparen)?;

        self.decls.push(ImportDecl {
            keyword: keyword.span,
            parens: Some((lparen.span, rparen.span)),
            specs: first..self.imports.len(),
        });
        Ok(())
    }

    /// `[Ident | "."] String`. Returns the path token.
    fn import_spec(&mut self) -> Result<Token, SyntaxError> {
        let name = match self.current() {
            Some(t) if matches!(t.kind, TokenKind::Ident | TokenKind::Dot) => {
                self.pos += 1;
                Some(t.span)
            }
            _ => None,
        };
        let path = self.expect(TokenKind::String, "import path")?;
        self.imports.push(ImportSpec::new(name, path.span));
        Ok(path)
    }

    /// After a clause: `;`, a token on a later line, or end of file.
    fn terminate(&mut self, last: Token) -> Result<(), SyntaxError> {
        match self.current() {
            None => Ok(()),
            Some(t) if t.kind == TokenKind::Semicolon => {
                self.pos += 1;
                Ok(())
            }
            Some(t) if self.starts_later_line(t, last) => Ok(()),
            Some(_) => Err(self.expected("';' or newline")),
        }
    }

    /// Bracket balance and misplaced keywords over everything after the
    /// imports.
    fn check_rest(&self) -> Result<(), SyntaxError> {
        let mut open: Vec<Token> = Vec::new();
        for &token in &self.tokens[self.pos..] {
            match token.kind {
                TokenKind::Import => {
                    return Err(self.error(SyntaxErrorKind::ImportAfterDecl, token.span));
                }
                TokenKind::Package => {
                    return Err(self.error(SyntaxErrorKind::DuplicatePackage, token.span));
                }
                kind if kind.is_open() => open.push(token),
                kind if kind.is_close() => {
                    let Some(opener) = open.pop() else {
                        return Err(self.error(SyntaxErrorKind::UnexpectedClose(kind), token.span));
                    };
                    let expected = opener.kind.closing().unwrap_or(kind);
                    if expected != kind {
                        return Err(self.error(
                            SyntaxErrorKind::MismatchedClose {
                                expected,
                                found: kind,
                            },
                            token.span,
                        ));
                    }
                }
                _ => {}
            }
        }
        match open.pop() {
            Some(opener) => Err(self.error(SyntaxErrorKind::Unclosed(opener.kind), opener.span)),
            None => Ok(()),
        }
    }

    // ─── Helpers ─────────────────────────────────────────────────

    fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    fn expect(&mut self, kind: TokenKind, what: &'static str) -> Result<Token, SyntaxError> {
        match self.current() {
            Some(t) if t.kind == kind => {
                self.pos += 1;
                Ok(t)
            }
            _ => Err(self.expected(what)),
        }
    }

    fn starts_later_line(&self, token: Token, prev: Token) -> bool {
        self.table.line(token.span.start) > self.table.line(prev.span.end)
    }

    fn text(&self, span: Span) -> &str {
        self.source.get(span.to_range()).unwrap_or("")
    }

    fn expected(&self, expected: &'static str) -> SyntaxError {
        let (found, span) = match self.current() {
            Some(t) => (format!("'{}'", self.text(t.span)), t.span),
            None => {
                let end = self.table.source_len();
                ("end of file".to_string(), Span::new(end, end))
            }
        };
        self.error(SyntaxErrorKind::Expected { expected, found }, span)
    }

    fn error(&self, kind: SyntaxErrorKind, span: Span) -> SyntaxError {
        SyntaxError::at(kind, span, self.source, self.table)
    }
}

#[cfg(test)]
mod tests;
