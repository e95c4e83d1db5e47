use super::*;
use pretty_assertions::assert_eq;

#[test]
fn missing_executable_fails_to_spawn() {
    let goimports = Goimports::new("/nonexistent/goimports-for-tests", "");
    let err = goimports.format_stdin(b"package p\n").unwrap_err();
    assert!(matches!(err, GoimportsError::Spawn { .. }));
    assert!(err.to_string().contains("/nonexistent/goimports-for-tests"));
}

#[test]
fn missing_executable_fails_write_back() {
    let goimports = Goimports::new("/nonexistent/goimports-for-tests", "x");
    assert!(matches!(
        goimports.run(&[PathBuf::from("a.go")]),
        Err(DriverError::Goimports(GoimportsError::Spawn { .. }))
    ));
}

#[cfg(unix)]
mod with_fake_binary {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    /// Write an executable shell script into `dir`.
    fn script(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("fake-goimports");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn stdin_is_piped_through() {
        let dir = tempfile::tempdir().unwrap();
        let goimports = Goimports::new(script(dir.path(), "cat"), "example.com");
        let out = goimports.format_stdin(b"package p\n").unwrap();
        assert_eq!(out, b"package p\n".to_vec());
    }

    #[test]
    fn local_flag_is_passed() {
        let dir = tempfile::tempdir().unwrap();
        let goimports = Goimports::new(script(dir.path(), "echo \"$@\""), "example.com/me");
        let out = goimports.apply(b"").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-local example.com/me\n");
    }

    #[test]
    fn large_input_does_not_deadlock() {
        let dir = tempfile::tempdir().unwrap();
        let goimports = Goimports::new(script(dir.path(), "cat"), "");
        let content = vec![b'x'; 1 << 20];
        assert_eq!(goimports.format_stdin(&content).unwrap().len(), content.len());
    }

    #[test]
    fn non_zero_exit_reports_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let goimports = Goimports::new(script(dir.path(), "echo 'bad input' >&2; exit 2"), "");
        let err = goimports.format_stdin(b"package p\n").unwrap_err();
        let GoimportsError::Failed { stderr, .. } = &err else {
            panic!("expected a failed run, got {err:?}");
        };
        assert_eq!(stderr, "bad input");
    }

    #[test]
    fn write_back_passes_every_path_once() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("args");
        let body = format!("echo \"$@\" >> '{}'", log.display());
        let goimports = Goimports::new(script(dir.path(), &body), "local");
        goimports
            .write_back(&[PathBuf::from("a.go"), PathBuf::from("b.go")])
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(&log).unwrap(),
            "-local local -w a.go b.go\n"
        );
    }
}
