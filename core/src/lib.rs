//! Domain core for the todo service.
//!
//! # Overview
//! Defines the todo resource, the file-backed `Store`, and the `TodoService`
//! implementing the five CRUD operations. Nothing in this crate knows about
//! HTTP — the server crate maps service results onto status codes and bodies.
//!
//! # Design
//! - The entire collection lives in a single JSON document on disk. Every
//!   operation reads the whole collection, mutates an in-memory copy, and
//!   writes it back; nothing is cached across operations.
//! - `TodoService` holds the `Store` behind an `RwLock` so concurrent
//!   handlers cannot interleave read-modify-write sequences.
//! - Ids are positive integers assigned as `max(existing ids) + 1`, so a
//!   deleted id is never handed to a new todo while other todos are alive.

pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use error::{StoreError, TodoError};
pub use service::TodoService;
pub use store::{Store, StoreConfig};
pub use types::{Todo, TodoInput};
