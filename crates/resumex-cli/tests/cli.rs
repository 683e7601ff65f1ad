use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use resumex_core::document::DocxWriter;

fn resumex(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("resumex").unwrap();
    cmd.arg("--config")
        .arg(dir.path().join("config.json"))
        .arg("--data-dir")
        .arg(dir.path().join("data"));
    cmd
}

fn init(dir: &TempDir) {
    resumex(dir).args(["config", "init"]).assert().success();
}

fn write_docx(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut writer = DocxWriter::new();
    for line in lines {
        writer.add_paragraph(*line);
    }
    writer.save(&path).unwrap();
    path
}

fn list_json(dir: &TempDir) -> Vec<serde_json::Value> {
    let output = resumex(dir)
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn import_then_list() {
    let dir = tempfile::tempdir().unwrap();
    init(&dir);
    let path = write_docx(dir.path(), "zhangsan.docx", &["张三", "男", "手机：13900001111"]);

    resumex(&dir)
        .arg("import")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 imported"));

    let resumes = list_json(&dir);
    assert_eq!(resumes.len(), 1);
    assert_eq!(resumes[0]["Name"], "张三");
    assert_eq!(resumes[0]["Phone"], "13900001111");
    assert_eq!(resumes[0]["FileName"], "zhangsan.docx");
}

#[test]
fn reimport_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    init(&dir);
    let path = write_docx(dir.path(), "a.docx", &["张三"]);

    resumex(&dir).arg("import").arg(&path).assert().success();
    resumex(&dir)
        .arg("import")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 imported, 1 skipped"));

    assert_eq!(list_json(&dir).len(), 1);
}

#[test]
fn legacy_doc_fails_without_aborting() {
    let dir = tempfile::tempdir().unwrap();
    init(&dir);
    let legacy = dir.path().join("old.doc");
    fs::write(&legacy, b"legacy").unwrap();
    let valid = write_docx(dir.path(), "new.docx", &["李四"]);

    resumex(&dir)
        .arg("import")
        .arg(&legacy)
        .arg(&valid)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 imported, 0 skipped, 1 failed"))
        .stdout(predicate::str::contains("old.doc"));
}

#[test]
fn import_glob_pattern() {
    let dir = tempfile::tempdir().unwrap();
    init(&dir);
    let inbox = dir.path().join("inbox");
    fs::create_dir_all(&inbox).unwrap();
    write_docx(&inbox, "a.docx", &["张三"]);
    write_docx(&inbox, "b.docx", &["李四"]);

    let pattern = format!("{}/*.docx", inbox.display());
    resumex(&dir)
        .args(["import", &pattern])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 imported"));
}

#[test]
fn search_by_keyword() {
    let dir = tempfile::tempdir().unwrap();
    init(&dir);
    let a = write_docx(dir.path(), "a.docx", &["张三", "邮箱：zhang@example.com"]);
    let b = write_docx(dir.path(), "b.docx", &["李四", "邮箱：li@example.com"]);
    resumex(&dir).arg("import").arg(&a).arg(&b).assert().success();

    resumex(&dir)
        .args(["search", "ZHANG", "--field", "email", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zhang@example.com"))
        .stdout(predicate::str::contains("li@example.com").not());
}

#[test]
fn search_rejects_inverted_range() {
    let dir = tempfile::tempdir().unwrap();
    init(&dir);

    resumex(&dir)
        .args(["search", "--from", "2024-02-01", "--to", "2024-01-01"])
        .assert()
        .failure();
}

#[test]
fn show_and_delete() {
    let dir = tempfile::tempdir().unwrap();
    init(&dir);
    let path = write_docx(dir.path(), "a.docx", &["张三"]);
    resumex(&dir).arg("import").arg(&path).assert().success();

    let resumes = list_json(&dir);
    let id = resumes[0]["Id"].as_str().unwrap().to_string();

    resumex(&dir)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: 张三"));

    resumex(&dir).args(["delete", &id]).assert().success();
    resumex(&dir)
        .args(["delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resume not found"));

    assert!(list_json(&dir).is_empty());
}

#[test]
fn duplicates_export_text() {
    let dir = tempfile::tempdir().unwrap();
    init(&dir);
    let a = write_docx(dir.path(), "a.docx", &["张三", "13800000000"]);
    let b = write_docx(dir.path(), "b.docx", &["李四", "13800000000"]);
    resumex(&dir).arg("import").arg(&a).arg(&b).assert().success();

    resumex(&dir)
        .args(["duplicates", "--phone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("phone: 13800000000"));

    let report = dir.path().join("report.txt");
    resumex(&dir)
        .args(["duplicates", "--phone", "--export"])
        .arg(&report)
        .assert()
        .success();

    let content = fs::read_to_string(&report).unwrap();
    assert!(content.contains("Found 1 duplicate groups"));
    assert!(content.contains("File: b.docx"));
}

#[test]
fn duplicates_rejects_unknown_export_format() {
    let dir = tempfile::tempdir().unwrap();
    init(&dir);

    resumex(&dir)
        .args(["duplicates", "--export"])
        .arg(dir.path().join("report.pdf"))
        .assert()
        .failure();
}

#[test]
fn dirs_add_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    init(&dir);

    resumex(&dir)
        .args(["dirs", "add", "后端"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added directory"));
    resumex(&dir)
        .args(["dirs", "add", "后端"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    resumex(&dir)
        .args(["dirs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("后端"));
}

#[test]
fn config_set_and_get() {
    let dir = tempfile::tempdir().unwrap();
    init(&dir);

    resumex(&dir)
        .args(["config", "set", "import.replace_existing", "true"])
        .assert()
        .success();
    resumex(&dir)
        .args(["config", "get", "import.replace_existing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
    resumex(&dir)
        .args(["config", "set", "import.no_such_key", "1"])
        .assert()
        .failure();
}

#[test]
fn config_set_rejects_mistyped_value() {
    let dir = tempfile::tempdir().unwrap();
    init(&dir);
    let before = fs::read_to_string(dir.path().join("config.json")).unwrap();

    resumex(&dir)
        .args(["config", "set", "import.replace_existing", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value"));

    let after = fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn config_path_reports_state() {
    let dir = tempfile::tempdir().unwrap();

    resumex(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("missing"));

    init(&dir);
    resumex(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("present"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    resumex(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
