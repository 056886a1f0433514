//! File-format specific schema loaders.

pub mod parquet;
