//! Row structs and DTOs.
//!
//! Rust field names follow the table columns; `serde` renames give the
//! Indonesian wire names clients already consume.

pub mod analytics;
pub mod history;
