// Integration tests for the food-audit binary: stdout contract and exit codes.
//
// Run with: cargo test -p foodaudit-cli --test cli_tests -- --nocapture

use std::path::Path;
use std::process::{Command, Output};

fn food_audit() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_food-audit"));
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd.env_remove("FOOD_AUDIT_DATA");
    cmd.env_remove("LOG_LEVEL");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_sources(dir: &Path, delivery: &str, usage: &str, inventory: &str) {
    std::fs::write(dir.join("delivery.txt"), delivery).unwrap();
    std::fs::write(dir.join("usage.csv"), usage).unwrap();
    std::fs::write(dir.join("inventory.json"), inventory).unwrap();
}

fn sample_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_sources(
        dir.path(),
        "# delivery\nbanana=50\nfish=100\nlettuce=\n",
        "food,quantity\nbanana,8\nbanana,17\nfish,95\nfish,-5\n",
        r#"[{"item":"banana","quantity":18},{"item":"fish","quantity":5},{"item":"seeds","quantity":2}]"#,
    );
    dir
}

fn run(args: &[&str]) -> Output {
    food_audit().args(args).output().expect("run food-audit")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// ===========================================================================
// Text output
// ===========================================================================

#[test]
fn text_report_on_stdout() {
    let dir = sample_dir();
    let output = run(&["--data", dir.path().to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("Zoo Food Audit Report\n"), "{out}");
    assert!(out.contains("banana: DISCREPANCY -7 (expected: 25, actual: 18)"));
    assert!(out.contains("fish: OK"));
    assert!(out.contains("lettuce: UNKNOWN (empty value in delivery file)"));
    assert!(out.contains("seeds: UNKNOWN (no delivery record)"));
    assert!(out.contains("Summary: 1 discrepancy found, 2 items with missing data"));
    assert!(out.contains("Report generated: "));
}

#[test]
fn unknown_format_falls_back_to_text() {
    let dir = sample_dir();
    let output = run(&["-d", dir.path().to_str().unwrap(), "-f", "yaml"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Zoo Food Audit Report"));
}

// ===========================================================================
// JSON output
// ===========================================================================

#[test]
fn json_report_is_single_document() {
    let dir = sample_dir();
    let output = run(&["--data", dir.path().to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let val: serde_json::Value = serde_json::from_str(stdout(&output).trim())
        .unwrap_or_else(|e| panic!("stdout must be valid JSON: {e}"));

    let obj = val.as_object().expect("should be JSON object");
    assert!(obj.contains_key("timestamp"));
    assert_eq!(
        val["summary"],
        serde_json::json!({
            "totalItems": 4,
            "okCount": 1,
            "discrepancyCount": 1,
            "unknownCount": 2
        })
    );

    let items: Vec<&str> = val["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["item"].as_str().unwrap())
        .collect();
    assert_eq!(items, vec!["banana", "fish", "lettuce", "seeds"]);
}

#[test]
fn logs_stay_off_stdout() {
    let dir = sample_dir();
    let output = run(&["-d", dir.path().to_str().unwrap(), "-f", "json", "-l", "debug"]);
    assert!(output.status.success());
    serde_json::from_str::<serde_json::Value>(stdout(&output).trim()).expect("clean JSON on stdout");
}

#[test]
fn output_file_written() {
    let dir = sample_dir();
    let report = dir.path().join("out.json");
    let output = run(&[
        "-d",
        dir.path().to_str().unwrap(),
        "-f",
        "json",
        "-o",
        report.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let written = std::fs::read_to_string(&report).unwrap();
    assert_eq!(written.trim(), stdout(&output).trim());
}

// ===========================================================================
// Exit codes
// ===========================================================================

#[test]
fn missing_file_exits_1_and_names_role() {
    let dir = sample_dir();
    std::fs::remove_file(dir.path().join("inventory.json")).unwrap();

    let output = run(&["-d", dir.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty(), "no partial report");
    assert!(stderr(&output).contains("error: cannot read inventory file"));
}

#[test]
fn broken_inventory_json_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path(), "banana=1\n", "food,quantity\n", "{ not json");

    let output = run(&["-d", dir.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("failed to parse inventory file"));
}

#[test]
fn strict_exits_3_when_unbalanced() {
    let dir = sample_dir();
    let output = run(&["-d", dir.path().to_str().unwrap(), "--strict"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).contains("Zoo Food Audit Report"), "report still printed");
}

#[test]
fn strict_exits_0_when_balanced() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(
        dir.path(),
        "banana=50\n",
        "food,quantity\nbanana,25\n",
        r#"[{"item":"banana","quantity":25}]"#,
    );
    let output = run(&["-d", dir.path().to_str().unwrap(), "--strict"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Summary: All items OK! No discrepancies found."));
}

#[test]
fn invalid_config_exits_2() {
    let dir = sample_dir();
    std::fs::write(dir.path().join("audit.toml"), "[files]\nusage = \"delivery.txt\"\n").unwrap();
    let output = run(&["-d", dir.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("config validation error"));
}

#[test]
fn config_renames_sources() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("in.txt"), "hay=10\n").unwrap();
    std::fs::write(dir.path().join("feed.csv"), "food,quantity\nhay,4\n").unwrap();
    std::fs::write(dir.path().join("count.json"), r#"[{"item":"hay","quantity":6}]"#).unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(
        &config,
        "[files]\ndelivery = \"in.txt\"\nusage = \"feed.csv\"\ninventory = \"count.json\"\n",
    )
    .unwrap();

    let output = run(&["-d", dir.path().to_str().unwrap(), "-c", config.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("hay: OK"));
}

#[test]
fn data_dir_from_env() {
    let dir = sample_dir();
    let output = food_audit()
        .env("FOOD_AUDIT_DATA", dir.path())
        .output()
        .expect("run food-audit");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("fish: OK"));
}
