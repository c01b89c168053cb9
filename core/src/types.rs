//! Domain DTOs for the todo service.
//!
//! # Design
//! `Todo` is the persisted and returned shape; `TodoInput` is the request
//! payload for both create and update. Update replaces every field except
//! `id`, so the two operations share one input type — there is no partial
//! patch, and omitted optional fields fall back to their defaults rather
//! than retaining old values.

use serde::{Deserialize, Serialize};

/// A single todo item as persisted and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Request payload for creating or updating a todo.
///
/// `title` is required; `description` defaults to empty and `completed` to
/// false. A client-supplied `id` is ignored — ids are assigned by the
/// service on create and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}
