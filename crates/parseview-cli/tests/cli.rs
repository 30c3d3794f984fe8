use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's config directory.
fn parseview(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("parseview").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.join("xdg"));
    cmd
}

/// Command with an explicit config file, which need not exist for `config` subcommands.
fn parseview_with_config(home: &Path) -> Command {
    let mut cmd = parseview(home);
    cmd.arg("--config").arg(home.join("config.json"));
    cmd
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_view_invoice_text() {
    let dir = TempDir::new().unwrap();
    let payload = write(
        dir.path(),
        "invoice.json",
        r#"{"parse_status": "partial", "seller": "A Co", "amount": 1000}"#,
    );

    parseview(dir.path())
        .args(["view", "--kind", "invoice"])
        .arg(&payload)
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: 部分解析 (partial)"))
        .stdout(predicate::str::contains("销售方: A Co"))
        .stdout(predicate::str::contains("发票金额: ¥1,000.00"))
        .stdout(predicate::str::contains("税额: -"))
        .stdout(predicate::str::contains("暂无原始文本"));
}

#[test]
fn test_view_null_payload_json() {
    let dir = TempDir::new().unwrap();
    let payload = write(dir.path(), "empty.json", "null");

    let output = parseview(dir.path())
        .args(["view", "--kind", "contract", "--format", "json"])
        .arg(&payload)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["outcome"], "unparsed");
    assert_eq!(json["rows"].as_array().unwrap().len(), 0);
    assert_eq!(json["raw_json"], "");
    assert_eq!(json["badge"]["label"], "未解析");
}

#[test]
fn test_view_contract_csv() {
    let dir = TempDir::new().unwrap();
    let payload = write(
        dir.path(),
        "contract.json",
        r#"{"parse_status": "full", "party_a": "甲公司", "stamp_pages": [0, 2, 5]}"#,
    );

    parseview(dir.path())
        .args(["view", "--kind", "contract", "--format", "csv"])
        .arg(&payload)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("key,label,value\n"))
        .stdout(predicate::str::contains("party_a,甲方,甲公司"))
        .stdout(predicate::str::contains("stamp_pages,盖章页,\"1, 3, 6\""));
}

#[test]
fn test_view_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let payload = write(dir.path(), "invoice.json", "{}");

    parseview_with_config(dir.path())
        .args(["view", "--kind", "invoice"])
        .arg(&payload)
        .assert()
        .failure();
}

#[test]
fn test_view_missing_file() {
    let dir = TempDir::new().unwrap();

    parseview(dir.path())
        .args(["view", "--kind", "contract", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_view_invalid_json() {
    let dir = TempDir::new().unwrap();
    let payload = write(dir.path(), "broken.json", "{not json");

    parseview(dir.path())
        .args(["view", "--kind", "invoice"])
        .arg(&payload)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn test_batch_summary() {
    let dir = TempDir::new().unwrap();
    let records = dir.path().join("records");
    fs::create_dir_all(&records).unwrap();
    write(
        &records,
        "a.json",
        r#"{"kind": "contract", "parsed_data": {"parse_status": "full"}}"#,
    );
    write(
        &records,
        "b.json",
        r#"{"kind": "invoice", "file_path": "b.pdf", "parsed_data": {"parse_status": "failed"}}"#,
    );
    write(&records, "c.json", r#"{"kind": "invoice", "file_path": "c.pdf"}"#);
    let out = dir.path().join("out");

    parseview(dir.path())
        .arg("batch")
        .arg(records.join("*.json").to_str().unwrap())
        .arg("--output-dir")
        .arg(&out)
        .arg("--summary")
        .assert()
        .success();

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.contains("contract,full,未上传,neutral"));
    assert!(summary.contains("invoice,failed,解析失败,danger"));
    assert!(summary.contains("invoice,unparsed,待解析,neutral"));
    assert!(out.join("b.view.json").exists());
}

#[test]
fn test_batch_backend_rows_with_datetimes() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "contract.json",
        r#"{"kind": "contract", "id": 3, "sign_date": "2024-01-15T00:00:00", "amount": 1000.0,
            "file_path": "contracts/a.pdf", "parsed_data": {"parse_status": "full"},
            "created_at": "2024-01-10T09:00:00"}"#,
    );
    write(
        dir.path(),
        "invoice.json",
        r#"{"kind": "invoice", "invoice_date": "2024-03-01T00:00:00", "tax_amount": 13.5,
            "file_path": "invoices/b.pdf", "parsed_data": null}"#,
    );
    let out = dir.path().join("out");

    parseview(dir.path())
        .arg("batch")
        .arg(dir.path().join("*.json").to_str().unwrap())
        .arg("--output-dir")
        .arg(&out)
        .arg("--summary")
        .assert()
        .success();

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.contains("contract,full,完整解析,warning"));
    assert!(summary.contains("invoice,unparsed,待解析,neutral"));
}

#[test]
fn test_batch_stops_on_bad_record() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "bad.json", r#"{"kind": "receipt"}"#);

    parseview(dir.path())
        .arg("batch")
        .arg(dir.path().join("bad.json").to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rendering failed"));
}

#[test]
fn test_config_set_and_get() {
    let dir = TempDir::new().unwrap();

    parseview_with_config(dir.path())
        .args(["config", "set", "labels.pending", "排队中"])
        .assert()
        .success();

    parseview_with_config(dir.path())
        .args(["config", "get", "labels.pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"排队中\""));

    parseview_with_config(dir.path())
        .args(["config", "set", "labels.nope", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn test_config_set_literal_looking_label() {
    let dir = TempDir::new().unwrap();

    parseview_with_config(dir.path())
        .args(["config", "set", "labels.pending", "0"])
        .assert()
        .success();
    parseview_with_config(dir.path())
        .args(["config", "set", "placeholders.missing_value", "null"])
        .assert()
        .success();

    parseview_with_config(dir.path())
        .args(["config", "get", "labels.pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"0\""));
    parseview_with_config(dir.path())
        .args(["config", "get", "placeholders.missing_value"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"null\""));
}

#[test]
fn test_config_changes_view() {
    let dir = TempDir::new().unwrap();
    let payload = write(dir.path(), "invoice.json", r#"{"amount": 12, "invoice_date": "2024-01-15"}"#);

    parseview_with_config(dir.path())
        .args(["config", "set", "format.currency_symbol", "$"])
        .assert()
        .success();
    parseview_with_config(dir.path())
        .args(["config", "set", "format.date_style", "iso"])
        .assert()
        .success();

    parseview_with_config(dir.path())
        .args(["view", "--kind", "invoice"])
        .arg(&payload)
        .assert()
        .success()
        .stdout(predicate::str::contains("发票金额: $12.00"))
        .stdout(predicate::str::contains("开票日期: 2024-01-15"));
}

#[test]
fn test_config_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();

    parseview_with_config(dir.path()).args(["config", "init"]).assert().success();
    parseview_with_config(dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}
