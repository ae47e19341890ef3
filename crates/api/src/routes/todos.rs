//! Route tree for the `/todos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/todos` route tree.
///
/// ```text
/// /todos                 list (GET), create (POST)
/// /todos/{id}            get (GET), update (PUT), delete (DELETE)
/// /todos/stats/summary   aggregate counts (GET)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/todos",
            get(handlers::todo::list).post(handlers::todo::create),
        )
        .route("/todos/stats/summary", get(handlers::todo::stats))
        .route(
            "/todos/{id}",
            get(handlers::todo::get_by_id)
                .put(handlers::todo::update)
                .delete(handlers::todo::delete),
        )
}
