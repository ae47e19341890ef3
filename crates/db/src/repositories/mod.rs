//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod todo_repo;

pub use todo_repo::TodoRepo;

/// Default page size when the caller supplies no limit.
pub const DEFAULT_LIMIT: i64 = 100;

/// Upper bound for caller-supplied limits.
pub const MAX_LIMIT: i64 = 500;

/// Clamp a caller-supplied limit to `0..=MAX_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_LIMIT)
}

/// Clamp a caller-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
