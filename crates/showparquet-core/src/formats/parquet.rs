//! Parquet schema loader.
//!
//! Only the file footer is decoded: `SerializedFileReader` reads the footer
//! length and the `FileMetaData` it points to, and never touches column
//! chunks. Each leaf column of the Parquet schema becomes one
//! `FieldDescriptor`, named by its dotted column path.

use std::fs::File;
use std::io;
use std::path::Path;

use log::{debug, warn};
use parquet::basic::{ConvertedType, LogicalType as ParquetLogicalType, TimeUnit};
use parquet::errors::ParquetError;
use parquet::file::reader::{FileReader, SerializedFileReader};
use parquet::schema::types::{ColumnDescriptor, SchemaDescriptor};
use snafu::{Backtrace, IntoError, ResultExt, Snafu};

use crate::loader::{FailureReason, SchemaLoader};
use crate::schema::{LogicalType, Schema};

/// Errors raised while loading a schema from a Parquet file.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SchemaLoadError {
    /// The path does not exist.
    #[snafu(display("Path not found: {path}"))]
    NotFound {
        /// The requested path.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
        /// The backtrace at the time the error occurred.
        backtrace: Backtrace,
    },

    /// The path exists but could not be opened for reading.
    #[snafu(display("Failed to open {path}: {source}"))]
    Open {
        /// The requested path.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
        /// The backtrace at the time the error occurred.
        backtrace: Backtrace,
    },

    /// The file footer could not be read or decoded as Parquet metadata.
    #[snafu(display("{source}"))]
    ParquetRead {
        /// The requested path.
        path: String,
        /// Underlying Parquet error.
        source: ParquetError,
        /// The backtrace at the time the error occurred.
        backtrace: Backtrace,
    },
}

impl From<SchemaLoadError> for FailureReason {
    fn from(err: SchemaLoadError) -> Self {
        match err {
            SchemaLoadError::NotFound { path, .. } => FailureReason::PathNotFound { path },
            other => FailureReason::ReadOrParse {
                detail: other.to_string(),
            },
        }
    }
}

/// Loads schemas from Parquet file footers on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParquetSchemaLoader;

impl ParquetSchemaLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self
    }
}

impl SchemaLoader for ParquetSchemaLoader {
    type Error = SchemaLoadError;

    fn load_schema(&self, path: &Path) -> Result<Schema, SchemaLoadError> {
        let path_str = path.display().to_string();
        debug!("reading parquet footer from {path_str}");

        let file = File::open(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                NotFoundSnafu {
                    path: path_str.clone(),
                }
                .into_error(source)
            } else {
                OpenSnafu {
                    path: path_str.clone(),
                }
                .into_error(source)
            }
        })?;

        let reader = SerializedFileReader::new(file).context(ParquetReadSnafu {
            path: path_str.clone(),
        })?;

        let schema = schema_from_descriptor(reader.metadata().file_metadata().schema_descr());
        debug!("{path_str}: {} leaf columns", schema.len());
        Ok(schema)
    }
}

/// Build a `Schema` from the leaf columns of a Parquet schema descriptor.
pub fn schema_from_descriptor(descr: &SchemaDescriptor) -> Schema {
    let mut schema = Schema::new();
    for col in descr.columns() {
        schema.push(
            col.path().string(),
            format!("{:?}", col.physical_type()),
            column_logical_type(col),
        );
    }
    schema
}

fn column_logical_type(col: &ColumnDescriptor) -> LogicalType {
    if let Some(logical) = col.logical_type_ref() {
        return LogicalType::Named(logical_type_name(logical));
    }

    // Files written before logical types existed only carry a converted type.
    match col.converted_type() {
        ConvertedType::NONE => LogicalType::None,
        converted => LogicalType::Named(format!("{converted:?}")),
    }
}

fn time_unit_name(unit: &TimeUnit) -> &'static str {
    match unit {
        TimeUnit::MILLIS => "MILLIS",
        TimeUnit::MICROS => "MICROS",
        TimeUnit::NANOS => "NANOS",
    }
}

/// Spell a Parquet logical annotation the way the Parquet format names it.
fn logical_type_name(logical: &ParquetLogicalType) -> String {
    match logical {
        ParquetLogicalType::String => "STRING".to_string(),
        ParquetLogicalType::Map => "MAP".to_string(),
        ParquetLogicalType::List => "LIST".to_string(),
        ParquetLogicalType::Enum => "ENUM".to_string(),
        ParquetLogicalType::Date => "DATE".to_string(),
        ParquetLogicalType::Unknown => "UNKNOWN".to_string(),
        ParquetLogicalType::Json => "JSON".to_string(),
        ParquetLogicalType::Bson => "BSON".to_string(),
        ParquetLogicalType::Uuid => "UUID".to_string(),
        ParquetLogicalType::Float16 => "FLOAT16".to_string(),
        ParquetLogicalType::Decimal { scale, precision } => {
            format!("DECIMAL({precision},{scale})")
        }
        ParquetLogicalType::Integer {
            bit_width,
            is_signed,
        } => format!("INTEGER({bit_width},{is_signed})"),
        ParquetLogicalType::Time {
            is_adjusted_to_u_t_c,
            unit,
        } => format!("TIME({},{is_adjusted_to_u_t_c})", time_unit_name(unit)),
        ParquetLogicalType::Timestamp {
            is_adjusted_to_u_t_c,
            unit,
        } => format!("TIMESTAMP({},{is_adjusted_to_u_t_c})", time_unit_name(unit)),
        other => {
            let name = format!("{other:?}").to_ascii_uppercase();
            warn!("no display name for parquet logical type {other:?}, using {name}");
            name
        }
    }
}
