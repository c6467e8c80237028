use serde_json::Value;
use std::io::Write;
use std::process::{Command, Stdio};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{latin_paragraph, TestFixture};

fn pagewise() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pagewise"))
}

/// Test that --stats-out writes a JSON summary with read and pagination figures
#[test]
fn test_stats_output_json_structure() {
    let fixture = TestFixture::new();
    let document = (0..3).map(|_| latin_paragraph(6, 10)).collect::<Vec<_>>().join("\n\n");
    let file = fixture.create_document("book.txt", &document);
    let stats_file = fixture.root_path.join("stats.json");

    let output = pagewise()
        .arg(&file)
        .args(["--words-per-section", "100", "--stats-out"])
        .arg(&stats_file)
        .output()
        .expect("Failed to run pagewise");
    assert!(output.status.success(), "pagewise failed: {}", String::from_utf8_lossy(&output.stderr));

    let stats: Value = serde_json::from_str(&std::fs::read_to_string(&stats_file).expect("Failed to read stats"))
        .expect("Failed to parse JSON");
    let pagination = &stats["pagination"];
    assert_eq!(pagination["page_count"], 3);
    assert_eq!(pagination["total_words"], 180);
    assert_eq!(pagination["words_per_section"], 100);
    assert_eq!(pagination["page_word_counts"], serde_json::json!([60, 60, 60]));
    assert_eq!(stats["read"]["bytes_read"], document.len());
}

#[test]
fn test_prints_requested_page() {
    let fixture = TestFixture::new();
    let file = fixture.create_document("short.txt", "第一段。\n\n第二段。");

    let output = pagewise().arg(&file).args(["--page", "1"]).output().expect("Failed to run pagewise");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("short.txt loaded"));
    assert!(stdout.contains("Page 1/1 · 6 words"));
    assert!(stdout.contains("第一段。\n\n第二段。"));
}

#[test]
fn test_budget_below_minimum_prints_notice() {
    let fixture = TestFixture::new();
    let file = fixture.create_document("doc.txt", "Hello world.");

    let output = pagewise()
        .arg(&file)
        .args(["--words-per-section", "50"])
        .output()
        .expect("Failed to run pagewise");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("At least 100 words per page are required"));
}

#[test]
fn test_missing_file_fails() {
    let fixture = TestFixture::new();
    let output = pagewise()
        .arg(fixture.root_path.join("missing.txt"))
        .output()
        .expect("Failed to run pagewise");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to open file"));
}

#[test]
fn test_interactive_navigation() {
    let fixture = TestFixture::new();
    let document = (0..3).map(|_| latin_paragraph(6, 10)).collect::<Vec<_>>().join("\n\n");
    let file = fixture.create_document("book.txt", &document);

    let mut child = pagewise()
        .arg(&file)
        .args(["--words-per-section", "100", "--interactive"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn pagewise");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"n\ng 3\nn\nq\n")
        .expect("Failed to write commands");

    let output = child.wait_with_output().expect("Failed to wait for pagewise");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Page 1/3"));
    assert!(stdout.contains("Page 2/3"));
    assert_eq!(stdout.matches("Page 3/3").count(), 2, "next on the last page must stay put");
}
