//! Invocation and selection rules: which files a pass picks up, the
//! recursive flag, and invalid-invocation exit codes.

use std::fs;
use std::path::Path;
use predicates::prelude::*;
use tempfile::tempdir;

fn run(dir: &Path, args: &[&str]) -> std::process::Output {
    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin!("mdpress"));
    cmd.env("NO_COLOR", "1");
    cmd.arg(dir);
    cmd.args(args);
    cmd.output().expect("failed to run mdpress")
}

fn html_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".html"))
        .collect();
    names.sort();
    names
}

#[test]
fn unsupported_extension_is_never_selected() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("b.txt"), "not markdown").unwrap();

    let output = run(tmp.path(), &[]);
    assert!(output.status.success());
    assert!(html_files(tmp.path()).is_empty());
}

#[test]
fn markdown_extension_is_converted() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("notes.markdown"), "# Notes").unwrap();

    assert!(run(tmp.path(), &[]).status.success());

    let files = html_files(tmp.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("notes."), "got: {files:?}");
}

#[test]
fn recursive_by_default() {
    let tmp = tempdir().unwrap();
    fs::create_dir(tmp.path().join("sub")).unwrap();
    fs::write(tmp.path().join("sub/c.md"), "# C").unwrap();

    assert!(run(tmp.path(), &[]).status.success());
    assert_eq!(html_files(&tmp.path().join("sub")).len(), 1);
}

#[test]
fn recursive_false_is_top_level_only() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("a.md"), "# A").unwrap();
    fs::create_dir(tmp.path().join("sub")).unwrap();
    fs::write(tmp.path().join("sub/c.md"), "# C").unwrap();

    assert!(run(tmp.path(), &["--recursive=false"]).status.success());

    assert_eq!(html_files(tmp.path()).len(), 1);
    assert!(html_files(&tmp.path().join("sub")).is_empty());
}

#[test]
fn short_recursive_flag_accepts_a_value() {
    let tmp = tempdir().unwrap();
    fs::create_dir(tmp.path().join("sub")).unwrap();
    fs::write(tmp.path().join("sub/c.md"), "# C").unwrap();

    assert!(run(tmp.path(), &["-r=false"]).status.success());
    assert!(html_files(&tmp.path().join("sub")).is_empty());
}

#[test]
fn missing_directory_is_an_invalid_invocation() {
    let output = run(Path::new("/nonexistent/mdpress-test"), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        predicate::str::contains("does not exist").eval(&stderr),
        "got stderr: {stderr}"
    );
}

#[test]
fn missing_argument_is_an_invalid_invocation() {
    let output = std::process::Command::new(assert_cmd::cargo::cargo_bin!("mdpress"))
        .output()
        .expect("failed to run mdpress");
    assert!(!output.status.success());
}

#[test]
fn artifacts_are_not_reconverted_as_sources() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("a.md"), "# Hi").unwrap();

    assert!(run(tmp.path(), &[]).status.success());
    assert!(run(tmp.path(), &[]).status.success());

    // The generated .html files must not themselves grow artifacts.
    let files = html_files(tmp.path());
    assert_eq!(files.len(), 1, "got: {files:?}");
}
