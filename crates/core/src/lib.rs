//! Domain types shared across the taskdeck workspace.
//!
//! This crate has no database or HTTP dependencies so the server, the
//! repository layer, and the client can all use it.

pub mod error;
pub mod todo;
pub mod types;
