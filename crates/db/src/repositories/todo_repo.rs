//! Repository for the `todos` table.

use chrono::Utc;
use sqlx::SqlitePool;
use taskdeck_core::types::DbId;

use crate::models::todo::{NewTodo, Todo, TodoFilter, TodoPatch, TodoStats};
use crate::repositories::{clamp_limit, clamp_offset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, completed, priority, created_at, updated_at";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row.
    ///
    /// Both timestamps are bound from the same `now`, so
    /// `created_at == updated_at` on the returned row.
    pub async fn create(pool: &SqlitePool, input: &NewTodo) -> Result<Todo, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO todos (title, description, completed, priority, created_at, updated_at)
             VALUES (?1, ?2, 0, ?3, ?4, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.priority.as_str())
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a todo by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = ?1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List todos matching the AND of any supplied filters, in creation
    /// order, paginated by `skip`/`limit`.
    pub async fn list(pool: &SqlitePool, filter: &TodoFilter) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos
             WHERE (?1 IS NULL OR completed = ?1)
               AND (?2 IS NULL OR priority = ?2)
             ORDER BY id ASC
             LIMIT ?3 OFFSET ?4"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(filter.completed)
            .bind(filter.priority.map(|p| p.as_str()))
            .bind(clamp_limit(filter.limit))
            .bind(clamp_offset(filter.skip))
            .fetch_all(pool)
            .await
    }

    /// Update a todo. Only non-`None` fields in `patch` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// The whole read-modify-write is a single UPDATE statement, so it
    /// cannot interleave with another write to the same row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        patch: &TodoPatch,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET
                title = COALESCE(?2, title),
                description = COALESCE(?3, description),
                completed = COALESCE(?4, completed),
                priority = COALESCE(?5, priority),
                updated_at = ?6
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(&patch.description)
            .bind(patch.completed)
            .bind(patch.priority.map(|p| p.as_str()))
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a todo by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Aggregate counts over all todos.
    pub async fn stats(pool: &SqlitePool) -> Result<TodoStats, sqlx::Error> {
        sqlx::query_as::<_, TodoStats>(
            "SELECT
                COUNT(*) AS total,
                COALESCE(SUM(completed), 0) AS completed,
                COUNT(*) - COALESCE(SUM(completed), 0) AS pending,
                COALESCE(SUM(priority = 'high' AND completed = 0), 0) AS high_priority_pending
             FROM todos",
        )
        .fetch_one(pool)
        .await
    }
}
