/// CLI Verification Tests
///
/// Runs the compiled binary in a scratch working directory and checks
/// exit status, stdout and the presence of out.dot.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hopdot"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run hopdot")
}

#[test]
fn test_writes_out_dot() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("scan.xml"),
        r#"<nmaprun><host><address addr="192.0.2.10"/><trace>
            <hop ttl="1" ipaddr="10.0.0.1"/>
            <hop ttl="2" ipaddr="192.0.2.10" host="target.example"/>
        </trace></host></nmaprun>"#,
    )
    .unwrap();

    let output = run_in(dir.path(), &["scan.xml"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let dot = std::fs::read_to_string(dir.path().join("out.dot")).unwrap();
    assert!(dot.contains("\"scanner\" -> \"10.0.0.1\";"));
    assert!(dot.contains("\"10.0.0.1\" -> \"192.0.2.10_target.example\";"));
}

#[test]
fn test_no_trace_exits_one() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("scan.xml"),
        r#"<nmaprun><host><address addr="192.0.2.10"/></host></nmaprun>"#,
    )
    .unwrap();

    let output = run_in(dir.path(), &["scan.xml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("no trace information"));
    assert!(!dir.path().join("out.dot").exists());
}

#[test]
fn test_missing_input_file_fails() {
    let dir = tempdir().unwrap();
    let output = run_in(dir.path(), &["absent.xml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.xml"));
    assert!(!dir.path().join("out.dot").exists());
}

#[test]
fn test_malformed_xml_fails() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("scan.xml"), "<nmaprun><host>").unwrap();

    let output = run_in(dir.path(), &["scan.xml"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("out.dot").exists());
}

#[test]
fn test_missing_argument_is_usage_error() {
    let dir = tempdir().unwrap();
    let output = run_in(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
}
