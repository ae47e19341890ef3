//! Todo entity model and DTOs.
//!
//! Two layers of input types exist on purpose. [`CreateTodo`] and
//! [`UpdateTodo`] are the wire shapes: `priority` is free text and `title`
//! may be absent, so the boundary can answer bad input with a 400 and a
//! message instead of a serde rejection. [`NewTodo`] and [`TodoPatch`] are
//! what the repository accepts -- normalized, with `priority` already a
//! [`Priority`].

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskdeck_core::error::CoreError;
use taskdeck_core::todo::{normalize_description, normalize_title, Priority};
use taskdeck_core::types::{DbId, Timestamp};

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[sqlx(try_from = "String")]
    pub priority: Priority,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Wire DTO for `POST /todos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
}

/// Wire DTO for `PUT /todos/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
}

/// Validated insert input. Only constructed via [`CreateTodo::into_new`],
/// so the repository can trust the fields.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// Validated partial update. `None` fields are not touched.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
}

/// Optional filters and pagination for listing. Present filters are
/// AND-combined.
#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Aggregate counts over all todos. `total == completed + pending` always.
#[derive(Debug, Clone, Copy, FromRow, Serialize, Deserialize)]
pub struct TodoStats {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
    pub high_priority_pending: i64,
}

impl CreateTodo {
    /// Normalize and validate into a repository-ready insert.
    pub fn into_new(self) -> Result<NewTodo, CoreError> {
        let title = normalize_title(self.title.as_deref().unwrap_or_default())?;
        let description = normalize_description(self.description.as_deref());
        let priority = match self.priority.as_deref() {
            Some(raw) => raw.parse()?,
            None => Priority::default(),
        };
        Ok(NewTodo {
            title,
            description,
            priority,
        })
    }
}

impl UpdateTodo {
    /// Normalize and validate into a repository-ready patch.
    ///
    /// A present-but-blank title is rejected; an absent title is fine.
    pub fn into_patch(self) -> Result<TodoPatch, CoreError> {
        let title = self.title.as_deref().map(normalize_title).transpose()?;
        let description = self
            .description
            .as_deref()
            .map(|d| normalize_description(Some(d)));
        let priority = self
            .priority
            .as_deref()
            .map(str::parse::<Priority>)
            .transpose()?;
        Ok(TodoPatch {
            title,
            description,
            completed: self.completed,
            priority,
        })
    }
}
