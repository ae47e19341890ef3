//! Todo domain primitives: the priority scale and input normalization.
//!
//! Priority is a closed set. It crosses the HTTP boundary as free text so
//! the API layer can reject unknown values with a usable message, but
//! everywhere past that boundary it is this enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority scale for a todo. Serialized lowercase, stored lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// All valid priority names, in ascending order.
pub const VALID_PRIORITIES: &[&str] = &["low", "medium", "high"];

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(CoreError::Validation(format!(
                "Priority must be one of: {} (got '{other}')",
                VALID_PRIORITIES.join(", ")
            ))),
        }
    }
}

// Required by the db layer to decode the TEXT column via `#[sqlx(try_from)]`.
impl TryFrom<String> for Priority {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, CoreError> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Input normalization
// ---------------------------------------------------------------------------

/// Trim a caller-supplied title, rejecting empty or whitespace-only input.
///
/// Every write path goes through this before touching storage, so no
/// accepted write can leave a todo with an empty title.
pub fn normalize_title(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Title cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional description, defaulting to the empty string.
pub fn normalize_description(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}
