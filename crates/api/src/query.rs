//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters accepted by `GET /todos`.
///
/// `priority` stays raw text here and is parsed into
/// [`Priority`](taskdeck_core::todo::Priority) in the handler, so an
/// unknown value produces a 400 with a usable message instead of a serde
/// rejection. Malformed `skip`/`limit`/`completed` values are rejected by
/// the `Query` extractor itself (also 400).
#[derive(Debug, Default, Deserialize)]
pub struct ListTodosParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
}
