use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn submit_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin!("smilepay"));
    cmd.arg("submit")
        .env_remove("SMILEPAY_TIMEOUT_SECS")
        .env("SMILEPAY_DCVC", "107")
        .env("SMILEPAY_RVG2C", "1")
        .env("SMILEPAY_VERIFY_KEY", "789");
    cmd
}

#[test]
fn test_parse_success_fixture() {
    let mut cmd = Command::new(cargo_bin!("smilepay"));
    cmd.arg("parse").arg("tests/fixtures/success.xml");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""Status":"1""#))
        .stdout(predicate::str::contains(r#""Data_id":"""#))
        .stdout(predicate::str::contains(r#""Amount":500"#));
}

#[test]
fn test_parse_malformed_fixture_fails() {
    let mut cmd = Command::new(cargo_bin!("smilepay"));
    cmd.arg("parse").arg("tests/fixtures/malformed.xml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid XML response format"));
}

#[test]
fn test_status_lookup() {
    let mut cmd = Command::new(cargo_bin!("smilepay"));
    cmd.arg("status").arg("-2001");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("無參數碼及商家代號錯誤"));
}

#[test]
fn test_status_lookup_unknown_code() {
    let mut cmd = Command::new(cargo_bin!("smilepay"));
    cmd.arg("status").arg("-1234");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown SmilePay status: -1234"));
}

#[test]
fn test_submit_dry_run_prints_bodies() {
    let mut cmd = submit_cmd();
    cmd.arg("tests/fixtures/orders.csv").arg("--dry-run");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Pay_zg=2&Data_id=A001&Amount=500&Pur_name=%E7%8E%8B%E5%B0%8F%E6%98%8E&Dcvc=107&Rvg2c=1&Verify_key=789",
        ))
        .stdout(predicate::str::contains(
            "Od_sob=book&Pay_zg=51&Pay_subzg=7NET&Data_id=A002&Amount=120",
        ));
}

#[test]
fn test_submit_replay_success() {
    let mut cmd = submit_cmd();
    cmd.arg("tests/fixtures/orders.csv")
        .arg("--replay")
        .arg("tests/fixtures/success.xml");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""SmilePayNO":"00E0001000002913643""#).count(2));
}

#[test]
fn test_submit_replay_rejection_continues() {
    let mut cmd = submit_cmd();
    cmd.arg("tests/fixtures/orders.csv")
        .arg("--replay")
        .arg("tests/fixtures/rejected.xml");

    cmd.assert()
        .success()
        .stderr(
            predicate::str::contains("Error submitting order: SmilePay error: 無參數碼及商家代號錯誤")
                .count(2),
        );
}

#[test]
fn test_submit_reports_bad_rows_and_continues() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "Data_id,Pay_zg,Amount").unwrap();
    writeln!(csv, "A001,2,500").unwrap();
    writeln!(csv, "A002,2,not_a_number").unwrap();
    writeln!(csv, "A003,99,100").unwrap();
    writeln!(csv, "A004,3,700").unwrap();

    let mut cmd = submit_cmd();
    cmd.arg(csv.path()).arg("--dry-run");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading order").count(2))
        .stdout(predicate::str::contains("Data_id=A001"))
        .stdout(predicate::str::contains("Data_id=A004"));
}

#[test]
fn test_submit_requires_credentials() {
    let mut cmd = Command::new(cargo_bin!("smilepay"));
    cmd.arg("submit")
        .arg("tests/fixtures/orders.csv")
        .env_remove("SMILEPAY_DCVC")
        .env_remove("SMILEPAY_RVG2C")
        .env_remove("SMILEPAY_VERIFY_KEY");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--dcvc"));
}
