//! Todo app server.
//!
//! This server:
//! - Serves the embedded egui frontend with the current todos as initial state
//! - Provides the REST API the frontend calls (`/api/todo`)
//! - Keeps todos in memory for the lifetime of the process

pub mod api;
pub mod config;
pub mod error;
pub mod page;
pub mod repo;

use axum::Router;
use axum::routing::{get, put};
use rust_embed::RustEmbed;
use todo_shared::api::TODOS_PATH;
use todo_shared::{Clock, DueDate, SystemClock, TodoDraft};
use tower_http::trace::TraceLayer;

pub use config::{Config, init_tracing};
pub use error::ServerError;
pub use repo::TodoRepository;

// Embed the frontend assets prepared by build.rs
// Convention: {CRATE_NAME}_DIST
#[derive(RustEmbed)]
#[folder = "$TODO_FRONTEND_DIST"]
pub struct FrontendAssets;

/// Routes for the API and the frontend served from `A`.
pub fn router<A>(repo: TodoRepository) -> Router
where
    A: RustEmbed + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(page::index::<A>))
        .route(TODOS_PATH, get(api::list_todos).post(api::create_todo))
        .route(
            "/api/todo/{id}",
            get(api::get_todo).delete(api::delete_todo),
        )
        .route("/api/todo/{id}/toggle", put(api::toggle_todo))
        .fallback(page::fallback::<A>)
        .layer(TraceLayer::new_for_http())
        .with_state(repo)
}

/// Insert a couple of sample todos due today.
pub async fn seed_demo(repo: &TodoRepository, clock: &impl Clock) {
    let today = DueDate::today(clock);
    for (title, content) in [
        ("Water the plants", "Balcony first, then the kitchen."),
        ("Write the weekly report", "Include the release notes."),
    ] {
        repo.insert(TodoDraft {
            title: title.into(),
            content: content.into(),
            due_date: today,
        })
        .await;
    }
}

/// Run the server until Ctrl-C.
pub async fn serve(config: Config) -> Result<(), ServerError> {
    let repo = TodoRepository::new();
    if config.seed_demo {
        seed_demo(&repo, &SystemClock).await;
    }

    let app = router::<FrontendAssets>(repo);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr,
            source,
        })?;
    tracing::info!("Server running on http://{}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
