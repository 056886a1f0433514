//! Integration tests for the `showparquet` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::{contains, is_empty};
use tempfile::TempDir;

mod common;

use common::{TestResult, grid_rows, write_people_parquet};

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("showparquet"))
}

#[test]
fn prints_schema_table_for_valid_file() -> TestResult {
    let tmp = TempDir::new()?;
    let parquet = tmp.path().join("people.parquet");
    write_people_parquet(&parquet)?;

    let output = cli()
        .arg(&parquet)
        .assert()
        .success()
        .stderr(is_empty())
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output)?;
    assert_eq!(
        grid_rows(&stdout),
        vec![
            vec!["idx", "name", "physical type", "logical type"],
            vec!["0", "id", "INT64", "none"],
            vec!["1", "name", "BYTE_ARRAY", "STRING"],
            vec!["2", "active", "BOOLEAN", "none"],
        ]
    );
    Ok(())
}

#[test]
fn output_is_stable_across_runs() -> TestResult {
    let tmp = TempDir::new()?;
    let parquet = tmp.path().join("people.parquet");
    write_people_parquet(&parquet)?;

    let first = cli().arg(&parquet).assert().success().get_output().stdout.clone();
    let second = cli().arg(&parquet).assert().success().get_output().stdout.clone();
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn missing_file_reports_path_and_exits_one() -> TestResult {
    let tmp = TempDir::new()?;
    let missing = tmp.path().join("missing.parquet");

    cli()
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("missing.parquet").and(contains("was not found")));
    Ok(())
}

#[test]
fn relative_missing_path_is_echoed_verbatim() -> TestResult {
    let tmp = TempDir::new()?;

    cli()
        .current_dir(tmp.path())
        .arg("missing.parquet")
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr("Error: The file 'missing.parquet' was not found.\n");
    Ok(())
}

#[test]
fn non_parquet_file_is_reported_as_malformed() -> TestResult {
    let tmp = TempDir::new()?;
    let bogus = tmp.path().join("notes.parquet");
    std::fs::write(&bogus, "id,name\n1,ada\n")?;

    cli()
        .arg(&bogus)
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(
            contains("An error occurred while reading the Parquet file:")
                .and(contains("Please ensure it is a valid Parquet file.")),
        );
    Ok(())
}

#[test]
fn truncated_file_is_reported_as_malformed() -> TestResult {
    let tmp = TempDir::new()?;
    let parquet = tmp.path().join("people.parquet");
    write_people_parquet(&parquet)?;

    let bytes = std::fs::read(&parquet)?;
    std::fs::write(&parquet, &bytes[..bytes.len() - 16])?;

    cli()
        .arg(&parquet)
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("Please ensure it is a valid Parquet file."));
    Ok(())
}

#[test]
fn requires_exactly_one_path() {
    cli().assert().failure().stdout(is_empty());
    cli()
        .args(["a.parquet", "b.parquet"])
        .assert()
        .failure()
        .stdout(is_empty());
}

#[test]
fn help_describes_the_tool() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Display the schema of a Parquet file in a tabular format"));
}
