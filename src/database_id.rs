//! The ID type for database rows.

/// Alias for the integer primary key used by the SQLite tables.
pub type DatabaseId = i64;
