//! Turning a schema load result into what the user sees.
//!
//! There are exactly three outcomes. A successful load prints the rendered
//! schema on stdout and exits 0. A missing path, or any other failure the
//! loader reports, prints a diagnostic on stderr and exits 1. Nothing is ever
//! written to both streams.

use std::path::Path;

use crate::loader::{FailureReason, SchemaLoader};
use crate::render::render_schema;
use crate::schema::Schema;

/// Advisory line printed after a read/parse failure.
pub const MALFORMED_HINT: &str = "Please ensure it is a valid Parquet file.";

/// The user-visible result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The schema was loaded; `output` is the rendered table or sentence.
    Success {
        /// Text for stdout.
        output: String,
    },
    /// The path does not resolve to a file.
    NotFound {
        /// Diagnostic naming the missing path.
        message: String,
    },
    /// The file could not be interpreted.
    Malformed {
        /// Diagnostic carrying the loader's failure detail.
        message: String,
        /// Advisory line following the diagnostic.
        hint: String,
    },
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Success { .. } => 0,
            Outcome::NotFound { .. } | Outcome::Malformed { .. } => 1,
        }
    }

    /// Returns true for `Outcome::Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Text destined for stdout, present only on success.
    pub fn stdout(&self) -> Option<&str> {
        match self {
            Outcome::Success { output } => Some(output),
            _ => None,
        }
    }

    /// Lines destined for stderr, empty on success.
    pub fn stderr_lines(&self) -> Vec<&str> {
        match self {
            Outcome::Success { .. } => Vec::new(),
            Outcome::NotFound { message } => vec![message.as_str()],
            Outcome::Malformed { message, hint } => vec![message.as_str(), hint.as_str()],
        }
    }
}

/// Map a load result to an `Outcome`.
///
/// `file_label` is how the file is named in the empty-schema sentence.
pub fn classify(file_label: &str, result: Result<Schema, FailureReason>) -> Outcome {
    match result {
        Ok(schema) => Outcome::Success {
            output: render_schema(&schema, file_label),
        },
        Err(FailureReason::PathNotFound { path }) => Outcome::NotFound {
            message: format!("Error: The file '{path}' was not found."),
        },
        Err(FailureReason::ReadOrParse { detail }) => Outcome::Malformed {
            message: format!("An error occurred while reading the Parquet file: {detail}"),
            hint: MALFORMED_HINT.to_string(),
        },
    }
}

/// Load the schema at `path` with `loader` and classify the result.
pub fn describe<L: SchemaLoader>(loader: &L, path: &Path) -> Outcome {
    let label = path.display().to_string();
    let result = loader.load_schema(path).map_err(Into::into);
    classify(&label, result)
}
