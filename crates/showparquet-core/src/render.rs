//! Grid-table rendering of a `Schema`.

use tabled::{builder::Builder, settings::Style};

use crate::schema::Schema;

/// Column headers, left to right.
pub const HEADERS: [&str; 4] = ["idx", "name", "physical type", "logical type"];

/// Sentence printed instead of a table when a file has no columns.
pub fn empty_schema_message(file_label: &str) -> String {
    format!("No columns found in the schema of '{file_label}'.")
}

/// Render `schema` as an ASCII grid table.
///
/// Every column is padded to its widest cell, header included, and every row
/// is separated by a `+---+` rule. An empty schema renders as the single
/// sentence from [`empty_schema_message`] naming `file_label`.
pub fn render_schema(schema: &Schema, file_label: &str) -> String {
    if schema.is_empty() {
        return empty_schema_message(file_label);
    }

    let mut builder = Builder::default();
    builder.push_record(HEADERS);
    for field in schema {
        builder.push_record([
            field.index().to_string(),
            field.name().to_string(),
            field.physical_type().to_string(),
            field.logical_type().to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::ascii());
    table.to_string()
}
