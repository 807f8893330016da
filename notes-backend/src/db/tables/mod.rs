//! Table-level database operations.
//!
//! Each module contains `impl Database` blocks for a specific table.

pub mod notes;
