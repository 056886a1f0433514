//! Schema model shared by the loader and the renderer.
//!
//! A `Schema` is an ordered list of `FieldDescriptor`s. Order reflects the
//! on-disk column order and is never changed after loading. Indices are
//! assigned on insertion, so they always run `0..len` without gaps.

use std::fmt;

/// Display token used for a column that carries no logical annotation.
pub const NO_LOGICAL_TYPE: &str = "none";

/// Semantic interpretation layered over a column's physical type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum LogicalType {
    /// The column has no logical annotation.
    #[default]
    None,
    /// A named logical annotation such as `STRING` or `DECIMAL(10,2)`.
    Named(String),
}

impl LogicalType {
    /// Build a named logical type.
    pub fn named(name: impl Into<String>) -> Self {
        LogicalType::Named(name.into())
    }

    /// Returns true if the column has no logical annotation.
    pub fn is_none(&self) -> bool {
        matches!(self, LogicalType::None)
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalType::None => f.write_str(NO_LOGICAL_TYPE),
            LogicalType::Named(name) => f.write_str(name),
        }
    }
}

/// One column of a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    index: usize,
    name: String,
    physical_type: String,
    logical_type: LogicalType,
}

impl FieldDescriptor {
    /// Zero-based position of the column in its schema.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Column display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the on-disk storage representation (e.g. `INT64`).
    pub fn physical_type(&self) -> &str {
        &self.physical_type
    }

    /// Logical annotation, or `LogicalType::None`.
    pub fn logical_type(&self) -> &LogicalType {
        &self.logical_type
    }
}

/// Ordered sequence of column descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    /// An empty schema with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column; its index is the current length of the schema.
    pub fn push(
        &mut self,
        name: impl Into<String>,
        physical_type: impl Into<String>,
        logical_type: LogicalType,
    ) -> &FieldDescriptor {
        let index = self.fields.len();
        self.fields.push(FieldDescriptor {
            index,
            name: name.into(),
            physical_type: physical_type.into(),
            logical_type,
        });
        &self.fields[index]
    }

    /// All columns in schema order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Iterate over columns in schema order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<N, P> FromIterator<(N, P, LogicalType)> for Schema
where
    N: Into<String>,
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, P, LogicalType)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (name, physical, logical) in iter {
            schema.push(name, physical, logical);
        }
        schema
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
