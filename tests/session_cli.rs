use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env("EXPENSE_TRACKER_DIR", dir.path())
        .env_remove("EXPENSE_TRACKER_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_failed_login_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .write_stdin("test\nnope\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid login. Please try again."))
        .stdout(predicate::str::contains("Select an option").not());
}

#[test]
fn test_add_and_list_transaction() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .write_stdin("test\ntest\n2\n1,234.5\nIncome\nFood\n1\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Authentication Successful..!!"))
        .stdout(predicate::str::contains("Transaction added successfully."))
        .stdout(predicate::str::contains(
            "Amount: $1,234.50, Type: Income, Category: Food",
        ));
}

#[test]
fn test_edit_with_unknown_category() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .write_stdin("test\ntest\n2\n50\nExpense\nFood\n3\n1\nE\n60\n\nNonexistent\n1\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid category. Transaction not updated."))
        .stdout(predicate::str::contains(
            "Amount: $60.00, Type: Expense, Category: Food",
        ));
}

#[test]
fn test_budgets_and_spending() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .write_stdin("test\ntest\n2\n10\nIncome\nFood\n2\n5\nExpense\nFood\n5\n1\nFood\n200\n5\n2\n6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget of $200.00 set for Food."))
        .stdout(predicate::str::contains("Food: $200.00"))
        .stdout(predicate::str::contains("Food - Spent: $15.00, Budget: $200.00"))
        .stdout(predicate::str::contains("Utilities - Spent: $0.00, Budget: $0.00"));
}

#[test]
fn test_invalid_menu_choice() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .write_stdin("test\ntest\n42\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please select a valid option."));
}

#[test]
fn test_end_of_input_exits() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .write_stdin("test\ntest\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions to display."));
}

#[test]
fn test_end_of_input_mid_edit_changes_nothing() {
    let dir = TempDir::new().unwrap();
    tracker(&dir)
        .write_stdin("test\ntest\n2\n50\nExpense\nFood\n3\n1\nE\n60")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction updated successfully.").not());
}

#[test]
fn test_oversized_amount_does_not_crash() {
    let dir = TempDir::new().unwrap();
    let huge = "2\n79228162514264337593543950335\nExpense\nFood\n";
    tracker(&dir)
        .write_stdin(format!("test\ntest\n{huge}{huge}6\n7\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid amount. Transaction not added."))
        .stdout(predicate::str::contains("Food - Spent: $0.00, Budget: $0.00"));
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.json");
    fs::write(
        &config,
        r#"{
            "currency_symbol": "€",
            "default_categories": ["Rent", "Food"],
            "seed_users": [{ "login_id": "alice", "password": "pw" }]
        }"#,
    )
    .unwrap();

    tracker(&dir)
        .arg("--config")
        .arg(&config)
        .write_stdin("alice\npw\n4\nN\n2\n800\nExpense\nRent\n6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Existing categories:\nRent\nFood\n"))
        .stdout(predicate::str::contains("Rent - Spent: €800.00, Budget: €0.00"));
}

#[test]
fn test_settings_file_in_base_dir_is_read() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{ "date_format": "%Y-%m-%d" }"#).unwrap();

    tracker(&dir)
        .write_stdin("test\ntest\n2\n1\nExpense\nFood\n1\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Date: \d{4}-\d{2}-\d{2}, Amount: \$1\.00").unwrap());
}

#[test]
fn test_bad_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.json");
    fs::write(&config, "{ not json").unwrap();

    tracker(&dir)
        .arg("--config")
        .arg(&config)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}

#[test]
fn test_audit_log_written_when_enabled() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{ "audit_log": true }"#).unwrap();

    tracker(&dir)
        .write_stdin("test\ntest\n2\n50\nExpense\nFood\n3\n1\nD\n7\n")
        .assert()
        .success();

    let log = fs::read_to_string(dir.path().join("audit.log")).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(r#""operation":"create""#));
    assert!(lines[1].contains(r#""operation":"delete""#));
    assert!(!log.contains("password"));
}
