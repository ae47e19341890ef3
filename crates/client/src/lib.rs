//! Client-side state and HTTP plumbing for taskdeck.
//!
//! [`TodoApi`] wraps the REST contract one method per endpoint,
//! [`TodoStore`] holds the local reflection of server state with its
//! derived views, and [`TodoSession`] ties the two together behind a
//! connectivity gate.

pub mod api;
pub mod error;
pub mod session;
pub mod store;

pub use api::{ListQuery, TodoApi};
pub use error::ClientError;
pub use session::{Connectivity, TodoSession};
pub use store::{PriorityFilter, StatusFilter, TodoCounts, TodoStore, ViewFilter};
