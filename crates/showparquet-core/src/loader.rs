//! The schema loader seam.
//!
//! A loader turns a path into a `Schema`. Whatever went wrong inside it, the
//! rest of the crate only cares whether the path was missing or whether
//! anything else failed, so every loader error converts into a
//! `FailureReason`.

use std::path::Path;

use crate::schema::Schema;

/// Why a schema could not be obtained for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The path does not resolve to a file.
    PathNotFound {
        /// The path as it was requested.
        path: String,
    },
    /// The file exists but its schema could not be read or decoded.
    ReadOrParse {
        /// Human-readable description reported by the loader.
        detail: String,
    },
}

/// Something that can extract a `Schema` from a file's metadata.
///
/// Implementations must read only what is needed to describe the columns and
/// never materialize row data.
pub trait SchemaLoader {
    /// Loader-specific error type.
    type Error: Into<FailureReason>;

    /// Load the schema of the file at `path`.
    fn load_schema(&self, path: &Path) -> Result<Schema, Self::Error>;
}

impl<L: SchemaLoader + ?Sized> SchemaLoader for &L {
    type Error = L::Error;

    fn load_schema(&self, path: &Path) -> Result<Schema, Self::Error> {
        (**self).load_schema(path)
    }
}
