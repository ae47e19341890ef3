//! Connectivity-gated synchronization between the API and the local store.
//!
//! The session applies every mutation's response to the store instead of
//! re-fetching the list; the server's returned record is authoritative
//! (the client never guesses `updated_at`). Connectivity only changes on
//! probe outcomes -- a failed mutation reports an error but does not flip
//! the gate.

use taskdeck_core::todo::Priority;
use taskdeck_core::types::DbId;
use taskdeck_db::models::todo::{CreateTodo, Todo, UpdateTodo};

use crate::api::{ListQuery, TodoApi};
use crate::error::ClientError;
use crate::store::TodoStore;

/// Outcome of the most recent liveness probe.
///
/// Mutating actions are refused locally while `Disconnected`; only a
/// successful probe flips the state back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Connectivity {
    Connected,
    #[default]
    Disconnected,
}

/// A client session against one taskdeck server.
pub struct TodoSession {
    api: TodoApi,
    store: TodoStore,
    connectivity: Connectivity,
}

impl TodoSession {
    /// A new session starts disconnected; call [`TodoSession::connect`]
    /// before mutating.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_api(TodoApi::new(base_url))
    }

    pub fn with_api(api: TodoApi) -> Self {
        Self {
            api,
            store: TodoStore::new(),
            connectivity: Connectivity::Disconnected,
        }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    pub fn is_connected(&self) -> bool {
        self.connectivity == Connectivity::Connected
    }

    /// Probe the liveness endpoint and, on success, load the full list.
    ///
    /// The snapshot is stored newest-first to match presentation order;
    /// that is a client choice -- the server returns creation order.
    pub async fn connect(&mut self) -> Result<(), ClientError> {
        if let Err(err) = self.api.ping().await {
            self.connectivity = Connectivity::Disconnected;
            tracing::debug!(error = %err, "Liveness probe failed");
            return Err(err);
        }
        self.connectivity = Connectivity::Connected;
        tracing::debug!("Liveness probe succeeded");

        self.refresh().await
    }

    /// Re-run the connectivity probe and reload (the "retry" action).
    pub async fn retry(&mut self) -> Result<(), ClientError> {
        self.connect().await
    }

    /// Explicitly re-fetch the full list. Never called implicitly after a
    /// mutation.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let mut todos = self.api.list(&ListQuery::default()).await?;
        todos.reverse();
        self.store.set_all(todos);
        Ok(())
    }

    /// Create a todo and prepend the server's record to the local list.
    pub async fn create(
        &mut self,
        title: &str,
        description: Option<&str>,
        priority: Option<Priority>,
    ) -> Result<Todo, ClientError> {
        self.ensure_connected()?;
        let input = CreateTodo {
            title: Some(title.to_string()),
            description: description.map(str::to_string),
            priority: priority.map(|p| p.to_string()),
        };
        let todo = self.api.create(&input).await?;
        self.store.insert_new(todo.clone());
        Ok(todo)
    }

    /// Send a partial update; on success the server's record replaces the
    /// local one. On failure the local state is left unchanged.
    pub async fn update(&mut self, id: DbId, input: UpdateTodo) -> Result<Todo, ClientError> {
        self.ensure_connected()?;
        let todo = self.api.update(id, &input).await?;
        self.store.apply_update(todo.clone());
        Ok(todo)
    }

    /// Toggle-complete convenience wrapper: sends only `completed`.
    pub async fn set_completed(&mut self, id: DbId, completed: bool) -> Result<Todo, ClientError> {
        self.update(
            id,
            UpdateTodo {
                completed: Some(completed),
                ..Default::default()
            },
        )
        .await
    }

    /// Delete a todo and drop it from the local list.
    pub async fn delete(&mut self, id: DbId) -> Result<(), ClientError> {
        self.ensure_connected()?;
        self.api.delete(id).await?;
        self.store.remove(id);
        Ok(())
    }

    fn ensure_connected(&self) -> Result<(), ClientError> {
        match self.connectivity {
            Connectivity::Connected => Ok(()),
            Connectivity::Disconnected => Err(ClientError::Disconnected),
        }
    }
}
