use crate::{parse, SyntaxErrorKind};
use pretty_assertions::assert_eq;
use sbi_ir::{Positioned, SourceFile};

fn parse_ok(source: &str) -> SourceFile {
    match parse(source) {
        Ok(output) => output.file,
        Err(err) => panic!("unexpected error for {source:?}: {err}"),
    }
}

fn parse_err(source: &str) -> crate::SyntaxError {
    match parse(source) {
        Ok(_) => panic!("expected a syntax error for {source:?}"),
        Err(err) => err,
    }
}

fn import_paths(file: &SourceFile) -> Vec<&str> {
    file.imports.iter().map(|spec| file.text(spec.path)).collect()
}

// ─── Accepted headers ──────────────────────────────────────────

#[test]
fn package_only() {
    let file = parse_ok("package main\n");
    assert_eq!(file.text(file.package_name), "main");
    assert!(file.decls.is_empty());
    assert!(file.imports.is_empty());
}

#[test]
fn grouped_imports() {
    let file = parse_ok("package main\n\nimport (\n\t\"fmt\"\n\n\t\"os\"\n)\n");
    assert_eq!(file.decls.len(), 1);
    assert!(file.decls[0].parens.is_some());
    assert_eq!(import_paths(&file), vec!["\"fmt\"", "\"os\""]);
}

#[test]
fn single_import_declaration() {
    let file = parse_ok("package main\nimport \"fmt\"\nfunc main() {}\n");
    assert_eq!(file.decls.len(), 1);
    assert!(file.decls[0].parens.is_none());
    assert_eq!(import_paths(&file), vec!["\"fmt\""]);
}

#[test]
fn several_declarations_share_one_spec_list() {
    let file = parse_ok("package p\nimport \"a\"\nimport (\n\t\"b\"\n\t\"c\"\n)\n");
    assert_eq!(file.decls.len(), 2);
    assert_eq!(file.decls[0].specs, 0..1);
    assert_eq!(file.decls[1].specs, 1..3);
    assert_eq!(file.imports[file.decls[1].specs.clone()].len(), 2);
}

#[test]
fn named_blank_and_dot_imports() {
    let source = "package p\nimport (\n\tf \"fmt\"\n\t_ \"embed\"\n\t. \"math\"\n)\n";
    let file = parse_ok(source);
    let names: Vec<Option<&str>> = file
        .imports
        .iter()
        .map(|spec| spec.name.map(|name| file.text(name)))
        .collect();
    assert_eq!(names, vec![Some("f"), Some("_"), Some(".")]);
    assert_eq!(file.text(file.imports[0].span()), "f \"fmt\"");
}

#[test]
fn semicolons_separate_specs() {
    let file = parse_ok("package p; import (\"a\"; \"b\";); var x = 1");
    assert_eq!(import_paths(&file), vec!["\"a\"", "\"b\""]);
}

#[test]
fn empty_group_is_accepted() {
    let file = parse_ok("package p\nimport ()\n");
    assert_eq!(file.decls.len(), 1);
    assert!(file.imports.is_empty());
}

#[test]
fn raw_string_import_path() {
    let file = parse_ok("package p\nimport `fmt`\n");
    assert_eq!(import_paths(&file), vec!["`fmt`"]);
}

#[test]
fn comments_are_ignored_by_the_header() {
    let source = "// Package p.\npackage p // trailing\n\nimport (\n\t// fmt\n\t\"fmt\" /* x */\n)\n";
    let file = parse_ok(source);
    assert_eq!(import_paths(&file), vec!["\"fmt\""]);
    assert_eq!(file.comments.len(), 4);
}

#[test]
fn body_is_tokenized_not_parsed() {
    let source = "package p\n\nfunc f() { if x := g(); x > 0 { return } }\n";
    let file = parse_ok(source);
    assert!(file.tokens.len() > 10);
}

// ─── Rejected headers ──────────────────────────────────────────

#[test]
fn missing_package_clause() {
    let err = parse_err("import \"fmt\"\n");
    assert_eq!(
        err.kind,
        SyntaxErrorKind::Expected {
            expected: "'package'",
            found: "'import'".to_string(),
        }
    );
    assert_eq!(err.to_string(), "1:1: expected 'package', found 'import'");
}

#[test]
fn empty_file() {
    let err = parse_err("");
    assert_eq!(err.to_string(), "1:1: expected 'package', found end of file");
}

#[test]
fn blank_package_name() {
    assert_eq!(parse_err("package _\n").kind, SyntaxErrorKind::InvalidPackageName);
}

#[test]
fn package_clause_needs_terminator() {
    let err = parse_err("package p import \"fmt\"");
    assert_eq!(err.to_string(), "1:11: expected ';' or newline, found 'import'");
}

#[test]
fn spec_without_path() {
    let err = parse_err("package p\nimport (\n\tfmt\n)\n");
    assert_eq!(err.to_string(), "4:1: expected import path, found ')'");
}

#[test]
fn specs_on_one_line_need_semicolon() {
    let err = parse_err("package p\nimport (\"a\" \"b\")\n");
    assert_eq!(
        err.kind,
        SyntaxErrorKind::Expected {
            expected: "';', ')' or newline",
            found: "'\"b\"'".to_string(),
        }
    );
}

#[test]
fn unterminated_group() {
    let err = parse_err("package p\nimport (\n\t\"fmt\"\n");
    assert_eq!(
        err.to_string(),
        "4:1: expected ';', ')' or newline, found end of file"
    );
}

#[test]
fn import_after_declaration() {
    let err = parse_err("package p\nvar x = 1\nimport \"fmt\"\n");
    assert_eq!(err.kind, SyntaxErrorKind::ImportAfterDecl);
    assert_eq!(err.line, 3);
}

#[test]
fn second_package_clause() {
    assert_eq!(
        parse_err("package p\npackage q\n").kind,
        SyntaxErrorKind::DuplicatePackage
    );
}

// ─── Bracket balance ───────────────────────────────────────────

#[test]
fn unclosed_brace_in_body() {
    let err = parse_err("package p\nfunc f() {\n");
    assert_eq!(err.kind, SyntaxErrorKind::Unclosed(sbi_ir::TokenKind::LBrace));
    assert_eq!((err.line, err.column), (2, 10));
}

#[test]
fn stray_close_in_body() {
    let err = parse_err("package p\nvar x = 1)\n");
    assert_eq!(
        err.kind,
        SyntaxErrorKind::UnexpectedClose(sbi_ir::TokenKind::RParen)
    );
}

#[test]
fn mismatched_close_in_body() {
    let err = parse_err("package p\nvar x = f(]\n");
    assert_eq!(
        err.kind,
        SyntaxErrorKind::MismatchedClose {
            expected: sbi_ir::TokenKind::RParen,
            found: sbi_ir::TokenKind::RBracket,
        }
    );
}

#[test]
fn brackets_inside_literals_and_comments_do_not_count() {
    parse_ok("package p\nvar s = \"(\" // )\nvar r = '{'\n/* [ */\n");
}

#[test]
fn invalid_utf8_bytes() {
    let Err(err) = crate::parse_bytes(b"package p\n\xff\n") else {
        panic!("expected a UTF-8 error");
    };
    assert_eq!(err.kind, SyntaxErrorKind::InvalidUtf8);
}
