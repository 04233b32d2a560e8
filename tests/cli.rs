//! End-to-end checks against the compiled `nanogrid-summary` binary.

use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nanogrid-summary"))
        .current_dir(dir)
        .output()
        .expect("failed to spawn nanogrid-summary")
}

fn read_output(dir: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(dir.join("output.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_writes_output_json() {
    let temp = TempDir::new().unwrap();
    let started = chrono::Utc::now().timestamp();

    let output = run_in(temp.path());
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json = read_output(temp.path());
    let object = json.as_object().unwrap();
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 4);
    for key in ["timestamp", "sum", "average", "message"] {
        assert!(object.contains_key(key), "missing key {key}");
    }

    assert_eq!(json["sum"], 500_500);
    assert_eq!(json["average"].as_f64(), Some(500.5));
    assert_eq!(json["message"], "Function executed successfully!");

    let timestamp: i64 = json["timestamp"].as_str().unwrap().parse().unwrap();
    assert!((timestamp - started).abs() <= 5);
}

#[test]
fn test_output_keys_in_declared_order() {
    let temp = TempDir::new().unwrap();
    assert!(run_in(temp.path()).status.success());

    let raw = std::fs::read_to_string(temp.path().join("output.json")).unwrap();
    let positions: Vec<usize> = ["\"timestamp\"", "\"sum\"", "\"average\"", "\"message\""]
        .iter()
        .map(|key| raw.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_prints_progress_to_stdout() {
    let temp = TempDir::new().unwrap();
    let output = run_in(temp.path());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sum: 500500"));
    assert!(stdout.contains("Average: 500.50"));
    assert!(stdout.contains("Execution completed successfully!"));
}

#[test]
fn test_second_run_overwrites() {
    let temp = TempDir::new().unwrap();
    assert!(run_in(temp.path()).status.success());
    assert!(run_in(temp.path()).status.success());

    let raw = std::fs::read_to_string(temp.path().join("output.json")).unwrap();
    assert_eq!(raw.matches("\"message\"").count(), 1);
    assert_eq!(read_output(temp.path())["sum"], 500_500);
}

#[test]
fn test_unwritable_output_exits_non_zero() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("output.json")).unwrap();

    let output = run_in(temp.path());
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to produce summary report"));
}
