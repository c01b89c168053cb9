//! CRUD operations over the todo collection.
//!
//! # Design
//! Each operation is a single read-modify-write transaction over the whole
//! collection. The store sits behind an `RwLock`: reads take the read guard,
//! mutations hold the write guard across the read-all/write-all pair, so two
//! concurrent creates cannot both observe the same `max(ids)` and a slow
//! update cannot lose another handler's write.

use tokio::sync::RwLock;

use crate::error::TodoError;
use crate::store::Store;
use crate::types::{Todo, TodoInput};

/// Business-logic layer implementing the five CRUD operations.
#[derive(Debug)]
pub struct TodoService {
    store: RwLock<Store>,
}

impl TodoService {
    pub fn new(store: Store) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Return the full collection, empty if nothing has been created yet.
    pub async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.store.read().await.read_all().await?)
    }

    /// Create a todo with a freshly assigned id and persist it.
    ///
    /// Ids are `max(existing ids) + 1`, not `len + 1` — after a delete in the
    /// middle of the collection, `len + 1` would collide with a live id.
    pub async fn create(&self, input: TodoInput) -> Result<Todo, TodoError> {
        validate(&input)?;
        let store = self.store.write().await;
        let mut todos = store.read_all().await?;
        let id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let todo = Todo {
            id,
            title: input.title,
            description: input.description,
            completed: input.completed,
        };
        todos.push(todo.clone());
        store.write_all(&todos).await?;
        tracing::debug!(id, "created todo");
        Ok(todo)
    }

    /// Look up a todo by id.
    pub async fn get(&self, id: u64) -> Result<Todo, TodoError> {
        let todos = self.store.read().await.read_all().await?;
        todos
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound)
    }

    /// Replace every field of an existing todo except its id.
    pub async fn update(&self, id: u64, input: TodoInput) -> Result<Todo, TodoError> {
        validate(&input)?;
        let store = self.store.write().await;
        let mut todos = store.read_all().await?;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound)?;
        todo.title = input.title;
        todo.description = input.description;
        todo.completed = input.completed;
        let updated = todo.clone();
        store.write_all(&todos).await?;
        tracing::debug!(id, "updated todo");
        Ok(updated)
    }

    /// Remove a todo from the collection.
    pub async fn delete(&self, id: u64) -> Result<(), TodoError> {
        let store = self.store.write().await;
        let mut todos = store.read_all().await?;
        let position = todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::NotFound)?;
        todos.remove(position);
        store.write_all(&todos).await?;
        tracing::debug!(id, "deleted todo");
        Ok(())
    }
}

fn validate(input: &TodoInput) -> Result<(), TodoError> {
    if input.title.trim().is_empty() {
        return Err(TodoError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    Ok(())
}
