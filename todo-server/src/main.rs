use clap::Parser;
use todo_server::{Config, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = Config::parse();
    todo_server::init_tracing(&config);

    tracing::info!("API endpoints:");
    tracing::info!("  GET    /api/todo              - List todos");
    tracing::info!("  POST   /api/todo              - Create a todo");
    tracing::info!("  GET    /api/todo/{{id}}         - Get one todo");
    tracing::info!("  PUT    /api/todo/{{id}}/toggle  - Toggle done");
    tracing::info!("  DELETE /api/todo/{{id}}         - Delete a todo");

    todo_server::serve(config).await
}
