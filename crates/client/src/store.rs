//! Local todo cache and its derived views.
//!
//! The store is synchronized at defined points only: a full snapshot on
//! load, and per-record patches applied from mutation responses. Derived
//! views are pure functions of the cached list and never touch the
//! network. Concurrent writes from other clients are out of scope; this
//! cache only reflects what this session has seen.

use taskdeck_core::todo::Priority;
use taskdeck_core::types::DbId;
use taskdeck_db::models::todo::Todo;

/// Completion-status filter for the visible list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

/// Priority filter for the visible list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

/// Active view filters. All present filters combine with AND.
#[derive(Debug, Clone, Default)]
pub struct ViewFilter {
    /// Case-insensitive substring match against title OR description.
    /// Blank means "no search filter".
    pub search: String,
    pub status: StatusFilter,
    pub priority: PriorityFilter,
}

/// Aggregate counts over the full cached list, independent of filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// In-memory reflection of the server's todo list.
///
/// Order is presentation order: snapshots are stored as given and created
/// todos are prepended, so callers control newest-first vs oldest-first.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole cache with a server snapshot.
    pub fn set_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// The full cached list, unfiltered.
    pub fn all(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: DbId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Prepend a freshly created todo.
    pub fn insert_new(&mut self, todo: Todo) {
        self.todos.insert(0, todo);
    }

    /// Replace the record with the same id. Returns `false` (and changes
    /// nothing) if the id is unknown.
    pub fn apply_update(&mut self, todo: Todo) -> bool {
        match self.todos.iter_mut().find(|t| t.id == todo.id) {
            Some(slot) => {
                *slot = todo;
                true
            }
            None => false,
        }
    }

    /// Remove the record with the given id. Returns `false` if unknown.
    pub fn remove(&mut self, id: DbId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() < before
    }

    /// Todos visible under the given filters, in cache order.
    pub fn filtered(&self, filter: &ViewFilter) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|t| Self::matches(t, filter))
            .collect()
    }

    /// Aggregate counts recomputed from the full list, ignoring filters.
    pub fn counts(&self) -> TodoCounts {
        let total = self.todos.len();
        let completed = self.todos.iter().filter(|t| t.completed).count();
        TodoCounts {
            total,
            completed,
            pending: total - completed,
        }
    }

    fn matches(todo: &Todo, filter: &ViewFilter) -> bool {
        let status_ok = match filter.status {
            StatusFilter::All => true,
            StatusFilter::Completed => todo.completed,
            StatusFilter::Pending => !todo.completed,
        };
        let priority_ok = match filter.priority {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => todo.priority == p,
        };
        status_ok && priority_ok && Self::matches_search(todo, &filter.search)
    }

    fn matches_search(todo: &Todo, needle: &str) -> bool {
        let needle = needle.trim();
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        todo.title.to_lowercase().contains(&needle)
            || todo.description.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn todo(id: DbId, title: &str, description: &str, completed: bool, priority: Priority) -> Todo {
        let now = Utc::now();
        Todo {
            id,
            title: title.to_string(),
            description: description.to_string(),
            completed,
            priority,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_store() -> TodoStore {
        let mut store = TodoStore::new();
        store.set_all(vec![
            todo(1, "Buy milk", "2 liters", false, Priority::Medium),
            todo(2, "Walk dog", "", true, Priority::Low),
            todo(3, "File taxes", "before the deadline", false, Priority::High),
        ]);
        store
    }

    fn titles(todos: &[&Todo]) -> Vec<String> {
        todos.iter().map(|t| t.title.clone()).collect()
    }

    // -- Merge operations -------------------------------------------------

    #[test]
    fn insert_new_prepends() {
        let mut store = sample_store();
        store.insert_new(todo(4, "Newest", "", false, Priority::Medium));
        assert_eq!(store.all()[0].title, "Newest");
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn apply_update_replaces_by_id() {
        let mut store = sample_store();
        let replaced = store.apply_update(todo(1, "Buy oat milk", "2 liters", true, Priority::Medium));
        assert!(replaced);

        let updated = store.get(1).unwrap();
        assert_eq!(updated.title, "Buy oat milk");
        assert!(updated.completed);
        // Position in the list is unchanged.
        assert_eq!(store.all()[0].id, 1);
    }

    #[test]
    fn apply_update_for_unknown_id_changes_nothing() {
        let mut store = sample_store();
        let replaced = store.apply_update(todo(99, "Ghost", "", false, Priority::Low));
        assert!(!replaced);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_deletes_by_id() {
        let mut store = sample_store();
        assert!(store.remove(2));
        assert!(store.get(2).is_none());
        assert_eq!(store.len(), 2);
        assert!(!store.remove(2));
    }

    // -- Search filter -----------------------------------------------------

    #[test]
    fn search_matches_title_case_insensitively() {
        let store = sample_store();
        let filter = ViewFilter {
            search: "MILK".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&store.filtered(&filter)), ["Buy milk"]);
    }

    #[test]
    fn search_matches_description_too() {
        let store = sample_store();
        let filter = ViewFilter {
            search: "deadline".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&store.filtered(&filter)), ["File taxes"]);
    }

    #[test]
    fn blank_search_matches_everything() {
        let store = sample_store();
        let filter = ViewFilter {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(store.filtered(&filter).len(), 3);
    }

    // -- Status and priority filters ----------------------------------------

    #[test]
    fn status_filter_splits_completed_and_pending() {
        let store = sample_store();

        let completed = ViewFilter {
            status: StatusFilter::Completed,
            ..Default::default()
        };
        assert_eq!(titles(&store.filtered(&completed)), ["Walk dog"]);

        let pending = ViewFilter {
            status: StatusFilter::Pending,
            ..Default::default()
        };
        assert_eq!(store.filtered(&pending).len(), 2);
    }

    #[test]
    fn priority_filter_selects_one_level() {
        let store = sample_store();
        let filter = ViewFilter {
            priority: PriorityFilter::Only(Priority::High),
            ..Default::default()
        };
        assert_eq!(titles(&store.filtered(&filter)), ["File taxes"]);
    }

    #[test]
    fn active_filters_combine_with_and() {
        let store = sample_store();
        // "File taxes" is high priority AND pending AND matches "taxes";
        // drop any one condition and other todos would qualify.
        let filter = ViewFilter {
            search: "taxes".to_string(),
            status: StatusFilter::Pending,
            priority: PriorityFilter::Only(Priority::High),
        };
        assert_eq!(titles(&store.filtered(&filter)), ["File taxes"]);

        let contradictory = ViewFilter {
            search: "taxes".to_string(),
            status: StatusFilter::Completed,
            priority: PriorityFilter::Only(Priority::High),
        };
        assert!(store.filtered(&contradictory).is_empty());
    }

    // -- Counts --------------------------------------------------------------

    #[test]
    fn counts_ignore_active_filters() {
        let store = sample_store();
        let counts = store.counts();
        assert_eq!(
            counts,
            TodoCounts {
                total: 3,
                completed: 1,
                pending: 2
            }
        );
        assert_eq!(counts.total, counts.completed + counts.pending);
    }

    #[test]
    fn counts_on_empty_store() {
        let store = TodoStore::new();
        assert_eq!(
            store.counts(),
            TodoCounts {
                total: 0,
                completed: 0,
                pending: 0
            }
        );
    }
}
