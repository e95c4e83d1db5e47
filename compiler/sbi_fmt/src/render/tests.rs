use super::*;
use pretty_assertions::assert_eq;
use sbi_parse::ParseOutput;

fn parsed(source: &str) -> ParseOutput {
    match sbi_parse::parse(source) {
        Ok(output) => output,
        Err(err) => panic!("unexpected syntax error: {err}"),
    }
}

fn line_of(output: &ParseOutput, needle: &str) -> u32 {
    match output.file.source.find(needle) {
        Some(at) => output.table.line(u32::try_from(at).unwrap_or(u32::MAX)),
        None => panic!("{needle:?} not in source"),
    }
}

#[test]
fn unmerged_table_prints_source_verbatim() {
    let source = "// Package p.\npackage p\n\nimport (\n\t\"a\"\n\n\t\"b\" // b\n)\n\nfunc f() {}\n";
    let output = parsed(source);
    assert_eq!(render(&output.file, &output.table), Ok(source.to_string()));
}

#[test]
fn leading_and_trailing_whitespace_survive() {
    let source = "\n\n  package p  \n\n";
    let output = parsed(source);
    assert_eq!(render(&output.file, &output.table), Ok(source.to_string()));
}

#[test]
fn merged_lines_are_dropped_and_indent_kept() {
    let source = "package p\nimport (\n\t\"a\"\n\n\n\t\"b\"\n)\n";
    let mut output = parsed(source);
    let a = line_of(&output, "\"a\"");
    assert!(output.table.merge_line(a));
    assert!(output.table.merge_line(a));
    assert_eq!(
        render(&output.file, &output.table),
        Ok("package p\nimport (\n\t\"a\"\n\t\"b\"\n)\n".to_string())
    );
}

#[test]
fn partial_merge_keeps_first_breaks() {
    let source = "package p\nimport (\n\t\"a\"\n  \n\n\t\"b\"\n)\n";
    let mut output = parsed(source);
    let a = line_of(&output, "\"a\"");
    assert!(output.table.merge_line(a));
    assert_eq!(
        render(&output.file, &output.table),
        Ok("package p\nimport (\n\t\"a\"\n  \n\t\"b\"\n)\n".to_string())
    );
}

#[test]
fn crlf_line_breaks_are_kept_whole() {
    let source = "package p\r\nimport (\r\n\t\"a\"\r\n\r\n\t\"b\"\r\n)\r\n";
    let mut output = parsed(source);
    let a = line_of(&output, "\"a\"");
    assert!(output.table.merge_line(a));
    assert_eq!(
        render(&output.file, &output.table),
        Ok("package p\r\nimport (\r\n\t\"a\"\r\n\t\"b\"\r\n)\r\n".to_string())
    );
}

#[test]
fn multi_line_tokens_are_copied_verbatim() {
    let source = "package p\n\nvar s = `a\n\n\nb`\n";
    let output = parsed(source);
    assert_eq!(render(&output.file, &output.table), Ok(source.to_string()));
}

#[test]
fn merge_onto_one_line_is_rejected() {
    let source = "package p\nimport (\n\t\"a\"\n\t\"b\"\n)\n";
    let mut output = parsed(source);
    let a = line_of(&output, "\"a\"");
    assert!(output.table.merge_line(a));
    assert!(matches!(
        render(&output.file, &output.table),
        Err(RenderError::JoinedLines(_))
    ));
}

#[test]
fn table_for_other_source_is_rejected() {
    let output = parsed("package p\n");
    let other = PositionTable::build("package p\n\n");
    assert_eq!(
        render(&output.file, &other),
        Err(RenderError::TableMismatch {
            table: 11,
            source_len: 10,
        })
    );
}

#[test]
fn renders_into_any_emitter() {
    struct Counting(usize);
    impl Emitter for Counting {
        fn emit(&mut self, text: &str) {
            self.0 += text.len();
        }
    }

    let source = "package p\nimport \"fmt\"\n";
    let output = parsed(source);
    let mut emitter = Counting(0);
    assert_eq!(print_file(&output.file, &output.table, &mut emitter), Ok(()));
    assert_eq!(emitter.0, source.len());
}
