use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn staffbook(file: &assert_fs::NamedTempFile) -> Result<Command> {
    let mut cmd = Command::cargo_bin("staffbook")?;
    cmd.arg("-f").arg(file.path());
    Ok(cmd)
}

#[test]
fn add_then_list_shows_report_line() -> Result<()> {
    let file = assert_fs::NamedTempFile::new("employees.txt")?;

    staffbook(&file)?
        .args(["add", "--id", "1", "--name", "Alice", "--salary", "50000", "--role", "Manager"])
        .assert()
        .success()
        .stdout(predicate::str::contains("employee added."));

    staffbook(&file)?
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 1, Name: Alice, Salary: 60000.0"));

    file.close()?;
    Ok(())
}

#[test]
fn list_on_missing_store_prints_nothing() -> Result<()> {
    let file = assert_fs::NamedTempFile::new("employees.txt")?;

    staffbook(&file)?
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    file.close()?;
    Ok(())
}

#[test]
fn delete_reports_deleted_then_not_found() -> Result<()> {
    let file = assert_fs::NamedTempFile::new("employees.txt")?;
    file.write_str("2,Bob,55000.0\n")?;

    staffbook(&file)?
        .args(["delete", "--id", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("employee deleted."));

    staffbook(&file)?
        .args(["delete", "--id", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("employee not found."));

    staffbook(&file)?
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    file.close()?;
    Ok(())
}

#[test]
fn invalid_salary_input_is_reported_not_fatal() -> Result<()> {
    let file = assert_fs::NamedTempFile::new("employees.txt")?;

    staffbook(&file)?
        .args(["add", "--id", "1", "--name", "Alice", "--salary", "lots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is not a number"));

    staffbook(&file)?
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    file.close()?;
    Ok(())
}

#[test]
fn negative_salary_is_reported_not_fatal() -> Result<()> {
    let file = assert_fs::NamedTempFile::new("employees.txt")?;

    staffbook(&file)?
        .args(["add", "--id", "1", "--name", "Alice", "--salary", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("salary cannot be negative"));

    file.close()?;
    Ok(())
}

#[test]
fn unknown_role_falls_back_to_intern() -> Result<()> {
    let file = assert_fs::NamedTempFile::new("employees.txt")?;

    staffbook(&file)?
        .args(["add", "--id", "5", "--name", "Eve", "--salary", "40000", "--role", "CEO"])
        .assert()
        .success();

    staffbook(&file)?
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 5, Name: Eve, Salary: 40000.0"));

    file.close()?;
    Ok(())
}
