//! HTTP surface for the todo service.
//!
//! # Design
//! Handlers are thin: extract, delegate to `TodoService`, wrap the result.
//! All status-code and error-body decisions live in `error.rs`; all business
//! logic lives in the core crate. `app` takes the service so tests can drive
//! the router in-process with `tower::ServiceExt::oneshot` against an
//! isolated store file.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use todo_core::{Todo, TodoInput, TodoService};

mod error;

use error::ApiError;

type Service = Arc<TodoService>;

pub fn app(service: TodoService) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(service))
}

pub async fn run(listener: TcpListener, service: TodoService) -> Result<(), std::io::Error> {
    axum::serve(listener, app(service)).await
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello, World!" }))
}

/// Liveness only, no dependency checks.
async fn health() -> Json<Value> {
    Json(json!({ "message": "OK" }))
}

async fn list_todos(State(service): State<Service>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(service.list().await?))
}

async fn create_todo(
    State(service): State<Service>,
    Json(input): Json<TodoInput>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(service): State<Service>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(service.get(id).await?))
}

async fn update_todo(
    State(service): State<Service>,
    Path(id): Path<u64>,
    Json(input): Json<TodoInput>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(service.update(id, input).await?))
}

async fn delete_todo(
    State(service): State<Service>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    service.delete(id).await?;
    Ok(Json(json!({
        "message": format!("Todo {id} deleted successfully")
    })))
}
