use snafu::Snafu;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CliError {
    #[snafu(display("Failed to write to stdout: {source}"))]
    WriteStdout { source: std::io::Error },

    #[snafu(display("Failed to write to stderr: {source}"))]
    WriteStderr { source: std::io::Error },
}
