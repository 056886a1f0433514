//! Core library for inspecting the column schema of Parquet files.
//!
//! This crate provides the pieces behind the `showparquet` command:
//!
//! - A small schema model (`schema` module): an ordered list of
//!   `FieldDescriptor`s whose indices always run `0..len`.
//! - The `SchemaLoader` seam and its two-case failure taxonomy
//!   (`loader` module).
//! - A Parquet-backed loader that decodes only the file footer
//!   (`formats` module).
//! - A grid-table renderer (`render` module) and the classifier that turns a
//!   load result into a printable outcome with an exit code (`report` module).
//!
//! The renderer and classifier are pure functions; all file I/O lives in the
//! loader so they can be tested without touching the filesystem.
#![deny(missing_docs)]
pub mod formats;
pub mod loader;
pub mod render;
pub mod report;
pub mod schema;

pub use formats::parquet::{ParquetSchemaLoader, SchemaLoadError};
pub use loader::{FailureReason, SchemaLoader};
pub use render::render_schema;
pub use report::{Outcome, classify, describe};
pub use schema::{FieldDescriptor, LogicalType, Schema};
