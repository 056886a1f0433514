//! CLI tool for displaying the column schema of a Parquet file.

mod error;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use showparquet_core::{Outcome, ParquetSchemaLoader, describe};
use snafu::ResultExt;

use crate::error::{CliResult, WriteStderrSnafu, WriteStdoutSnafu};

/// Display the schema of a Parquet file in a tabular format.
#[derive(Debug, Parser)]
#[command(name = "showparquet")]
struct Cli {
    /// The path to the Parquet file.
    parquet_file: PathBuf,
}

fn emit(outcome: &Outcome) -> CliResult<()> {
    if let Some(text) = outcome.stdout() {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}").context(WriteStdoutSnafu)?;
        stdout.flush().context(WriteStdoutSnafu)?;
    }

    let mut stderr = io::stderr().lock();
    for line in outcome.stderr_lines() {
        writeln!(stderr, "{line}").context(WriteStderrSnafu)?;
    }
    Ok(())
}

fn run(cli: &Cli) -> CliResult<u8> {
    let outcome = describe(&ParquetSchemaLoader::new(), &cli.parquet_file);
    emit(&outcome)?;
    Ok(outcome.exit_code())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
