//! End-to-end tests of the walletbook binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn walletbook(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("walletbook").unwrap();
    cmd.env("WALLETBOOK_DATA_DIR", dir.path())
        .env_remove("WALLETBOOK_USER")
        .env_remove("WALLETBOOK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn use_document_backend(dir: &TempDir) {
    std::fs::write(dir.path().join("config.json"), r#"{"backend": "document"}"#).unwrap();
}

#[test]
fn first_run_creates_default_wallet() {
    let dir = TempDir::new().unwrap();
    walletbook(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Wallet"))
        .stdout(predicate::str::contains("Rp 0"));
}

#[test]
fn expense_reduces_account_balance() {
    let dir = TempDir::new().unwrap();
    walletbook(&dir)
        .args(["account", "add", "Bank", "-b", "1.000.000"])
        .assert()
        .success();
    walletbook(&dir)
        .args(["txn", "add", "Bank", "expense", "250000", "Groceries", "-c", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded expense Rp 250.000"));
    walletbook(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rp 750.000"));
}

#[test]
fn expense_without_category_is_rejected() {
    let dir = TempDir::new().unwrap();
    walletbook(&dir)
        .args(["txn", "add", "Main Wallet", "expense", "1000", "Coffee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category"));
    walletbook(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee").not());
}

#[test]
fn non_positive_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    walletbook(&dir)
        .args(["txn", "add", "Main Wallet", "income", "0", "Nothing"])
        .assert()
        .failure();
}

#[test]
fn unknown_account_is_reported() {
    let dir = TempDir::new().unwrap();
    walletbook(&dir)
        .args(["txn", "add", "Nowhere", "income", "1000", "Gift"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn users_are_partitioned() {
    let dir = TempDir::new().unwrap();
    walletbook(&dir)
        .args(["--user", "alice", "account", "add", "Alice Savings"])
        .assert()
        .success();
    walletbook(&dir)
        .args(["--user", "bob", "account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Savings").not());
    walletbook(&dir)
        .env("WALLETBOOK_USER", "alice")
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Savings"));
}

#[test]
fn document_backend_round_trip() {
    let dir = TempDir::new().unwrap();
    use_document_backend(&dir);
    walletbook(&dir)
        .args(["txn", "add", "Main Wallet", "income", "5000000", "Salary"])
        .assert()
        .success();
    walletbook(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rp 5.000.000"))
        .stdout(predicate::str::contains("1 transaction(s)"));
    assert!(dir.path().join("data/documents/local/transactions").is_dir());
}

#[test]
fn goal_contribution_from_default_account() {
    let dir = TempDir::new().unwrap();
    walletbook(&dir)
        .args(["txn", "add", "Main Wallet", "income", "2000000", "Salary"])
        .assert()
        .success();
    walletbook(&dir)
        .args(["goal", "add", "Bike", "1500000"])
        .assert()
        .success();
    walletbook(&dir)
        .args(["goal", "contribute", "Bike", "500000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved Rp 500.000 for Bike from Main Wallet"));
    walletbook(&dir)
        .args(["txn", "list", "-s", "saving for"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saving for: Bike"));
    walletbook(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rp 1.500.000"));
}

#[test]
fn budget_set_and_show() {
    let dir = TempDir::new().unwrap();
    walletbook(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budgets set."));
    walletbook(&dir)
        .args(["budget", "set", "Food", "300000"])
        .assert()
        .success();
    walletbook(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn template_use_records_transaction() {
    let dir = TempDir::new().unwrap();
    walletbook(&dir)
        .args(["template", "add", "Rent", "expense", "1500000", "-c", "Bills"])
        .assert()
        .success();
    walletbook(&dir)
        .args(["template", "use", "Rent", "-d", "2025-07-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded Rent"));
    walletbook(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-07-01"));
}

#[test]
fn audit_log_records_mutations() {
    let dir = TempDir::new().unwrap();
    walletbook(&dir)
        .args(["category", "add", "Pets"])
        .assert()
        .success();
    walletbook(&dir)
        .args(["audit", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pets"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();
    walletbook(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backend:       blob"))
        .stdout(predicate::str::contains("Active user:   local"));
}
