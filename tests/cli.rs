use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run(base: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_redmine-instances"))
        .args(args)
        .env("REDMINE_INSTANCES_BASE_DIR", base)
        .env("REDMINE_INSTANCES_DEFAULTS", base.join("no-such-defaults"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    let mut lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect();
    lines.sort();
    lines
}

#[test]
fn list_on_missing_root_is_empty() {
    let base = tempfile::tempdir().unwrap();
    let output = run(base.path(), &["list"], "");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn create_list_remove_round() {
    let base = tempfile::tempdir().unwrap();
    for name in ["a", "b"] {
        let output = run(base.path(), &["create", name], "");
        assert!(output.status.success(), "{:?}", output);
    }
    // Repeating create repairs instead of failing.
    assert!(run(base.path(), &["create", "a"], "").status.success());

    let output = run(base.path(), &["list"], "");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["a", "b"]);

    let output = run(base.path(), &["remove", "a"], "n\n");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Aborted."));
    assert!(base.path().join("instances/a/config").is_dir());

    let output = run(base.path(), &["remove", "a"], "y\n");
    assert!(output.status.success());
    assert!(!base.path().join("instances/a").exists());
    assert_eq!(stdout_lines(&run(base.path(), &["list"], "")), ["b"]);
}

#[test]
fn usage_errors_exit_with_one() {
    let base = tempfile::tempdir().unwrap();
    for args in [&[][..], &["create"][..], &["remove"][..], &["bogus"][..], &["create", ""][..]] {
        let output = run(base.path(), args, "");
        assert_eq!(output.status.code(), Some(1), "{:?}", args);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Usage"), "{:?}: {}", args, stderr);
    }
}

#[test]
fn help_prints_manual_when_piped() {
    let base = tempfile::tempdir().unwrap();
    let output = run(base.path(), &["help"], "");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("create INSTANCE"));
}
