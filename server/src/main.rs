use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_core::{Store, StoreConfig, TodoService};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let db_path = std::env::var("TODO_DB_PATH").unwrap_or_else(|_| "todos.json".to_string());

    let store = Store::new(StoreConfig {
        path: db_path.clone().into(),
    });
    let service = TodoService::new(store);

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, db = %db_path, "listening");
    todo_server::run(listener, service).await
}
