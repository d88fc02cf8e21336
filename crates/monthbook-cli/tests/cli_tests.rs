use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn monthbook(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("monthbook").expect("monthbook binary");
    cmd.env("MONTHBOOK_DATA_DIR", data_dir);
    cmd
}

#[test]
fn bare_invocation_prints_usage() {
    let dir = tempdir().expect("tempdir");
    monthbook(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("per-month budget ledger"));
}

#[test]
fn unknown_command_fails_with_a_hint() {
    let dir = tempdir().expect("tempdir");
    monthbook(dir.path())
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown command"));
}

#[test]
fn adding_a_transaction_updates_the_shown_totals() {
    let dir = tempdir().expect("tempdir");
    monthbook(dir.path())
        .args(["month", "set", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01"));

    monthbook(dir.path())
        .args(["add", "expense", "Rent", "1184", "January rent", "--date", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added transaction"));

    monthbook(dir.path())
        .args(["show", "2024-01"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Current balance: -$1,184.00")
                .and(predicate::str::contains("January rent"))
                .and(predicate::str::contains("2024-01-05")),
        );
}

#[test]
fn rejected_drafts_leave_the_month_untouched() {
    let dir = tempdir().expect("tempdir");
    monthbook(dir.path())
        .args(["month", "set", "2024-02"])
        .assert()
        .success();

    monthbook(dir.path())
        .args(["add", "expense", "Rent", "notanumber"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transaction added"));

    monthbook(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("(no transactions)"));
}

#[test]
fn month_navigation_steps_without_skipping() {
    let dir = tempdir().expect("tempdir");
    monthbook(dir.path())
        .args(["month", "set", "2024-01"])
        .assert()
        .success();
    monthbook(dir.path())
        .args(["month", "prev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-12"));
    monthbook(dir.path())
        .args(["month", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01"));
    monthbook(dir.path())
        .arg("month")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01"));
}

#[test]
fn quick_adds_create_and_apply() {
    let dir = tempdir().expect("tempdir");
    monthbook(dir.path())
        .args(["month", "set", "2024-03"])
        .assert()
        .success();
    monthbook(dir.path())
        .args(["quick", "new", "income", "GSA", "900", "Stipend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quick add"));
    monthbook(dir.path())
        .args(["quick", "apply", "income", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added transaction"));
    monthbook(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current balance: $900.00"));
}

#[test]
fn export_then_import_restores_a_deleted_month() {
    let dir = tempdir().expect("tempdir");
    let document = dir.path().join("backup.json");

    monthbook(dir.path())
        .args(["month", "set", "2024-04"])
        .assert()
        .success();
    monthbook(dir.path())
        .args(["balance", "250"])
        .assert()
        .success();
    monthbook(dir.path())
        .args(["add", "income", "Gifts", "50", "--date", "2024-04-02"])
        .assert()
        .success();
    monthbook(dir.path())
        .args(["export", document.to_str().expect("utf8 path")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2024-04"));

    monthbook(dir.path())
        .args(["balance", "0"])
        .assert()
        .success();
    monthbook(dir.path())
        .args(["import", document.to_str().expect("utf8 path")])
        .assert()
        .success();
    monthbook(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Beginning balance: $250.00"));
}

#[test]
fn import_of_garbage_fails_and_preserves_state() {
    let dir = tempdir().expect("tempdir");
    let document = dir.path().join("garbage.json");
    std::fs::write(&document, "definitely not json").expect("write garbage");

    monthbook(dir.path())
        .args(["month", "set", "2024-05"])
        .assert()
        .success();
    monthbook(dir.path())
        .args(["balance", "77"])
        .assert()
        .success();
    monthbook(dir.path())
        .args(["import", document.to_str().expect("utf8 path")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid budget document"));
    monthbook(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Beginning balance: $77.00"));
}

#[test]
fn corrupt_month_file_warns_and_shows_defaults() {
    let dir = tempdir().expect("tempdir");
    monthbook(dir.path())
        .args(["month", "set", "2024-07"])
        .assert()
        .success();
    std::fs::write(dir.path().join("2024-07.json"), "{ not json").expect("write corrupt state");

    monthbook(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("(no transactions)"))
        .stderr(predicate::str::contains("discarding unparsable month state"));
}

#[test]
fn category_rename_orphans_earlier_transactions() {
    let dir = tempdir().expect("tempdir");
    monthbook(dir.path())
        .args(["month", "set", "2024-06"])
        .assert()
        .success();
    // seed index 1 is Rent
    monthbook(dir.path())
        .args(["add", "expense", "Rent", "600", "--date", "2024-06-01"])
        .assert()
        .success();
    monthbook(dir.path())
        .args(["cat", "name", "expense", "1", "Housing"])
        .assert()
        .success();

    monthbook(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(
            // grand total keeps the orphan, the renamed row shows nothing spent
            predicate::str::contains("Expenses (spent $600.00)")
                .and(predicate::str::contains("Housing"))
                .and(predicate::str::contains("Current balance: -$600.00")),
        );
}
