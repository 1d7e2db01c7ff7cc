//! Serving the embedded frontend.
//!
//! Every path that is neither an API route nor an embedded asset gets the
//! app page, with the current todos injected as initial state. The frontend
//! reads the browser location itself, so `/todos/3` and `/new-todo` land on
//! the right page after a reload.

use std::marker::PhantomData;

use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use rust_embed::RustEmbed;
use todo_shared::TodoListState;
use todo_shared::page::{INITIAL_STATE_MARKER, STATE_ELEMENT_ID};

use crate::repo::TodoRepository;

const API_PREFIX: &str = "/api/";

/// The page template; served only through [`TodoPage`].
const INDEX_HTML: &str = "index.html";

/// The app page with the given initial state.
pub struct TodoPage<A: RustEmbed> {
    state: TodoListState,
    _assets: PhantomData<A>,
}

impl<A: RustEmbed> TodoPage<A> {
    pub fn new(state: TodoListState) -> Self {
        Self {
            state,
            _assets: PhantomData,
        }
    }
}

impl<A: RustEmbed> IntoResponse for TodoPage<A> {
    fn into_response(self) -> Response {
        let state_json = match serde_json::to_string(&self.state) {
            Ok(json) => json,
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to serialize todo state: {e}"),
                )
                    .into_response();
            }
        };

        let Some(content) = A::get(INDEX_HTML) else {
            tracing::error!("index.html missing from embedded frontend assets");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Frontend assets not found. Did you build the frontend?",
            )
                .into_response();
        };

        let html_str = String::from_utf8_lossy(&content.data);
        let state_script = format!(
            r#"<script id="{STATE_ELEMENT_ID}" type="application/json">{}</script>"#,
            state_json.replace("</", "<\\/")
        );
        Html(html_str.replace(INITIAL_STATE_MARKER, &state_script)).into_response()
    }
}

/// An embedded asset, with its MIME type guessed from the path.
pub fn asset<A: RustEmbed>(path: &str) -> Option<Response> {
    let content = A::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(([(header::CONTENT_TYPE, mime.to_string())], content.data.into_owned()).into_response())
}

/// `GET /`
pub async fn index<A: RustEmbed>(State(repo): State<TodoRepository>) -> TodoPage<A> {
    TodoPage::new(TodoListState::new(repo.list().await))
}

/// Assets by path, unknown API paths as 404, everything else the app page.
pub async fn fallback<A: RustEmbed>(State(repo): State<TodoRepository>, uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    if path != INDEX_HTML {
        if let Some(response) = asset::<A>(path) {
            return response;
        }
    }
    if uri.path().starts_with(API_PREFIX) {
        return (StatusCode::NOT_FOUND, "404 Not Found").into_response();
    }
    index::<A>(State(repo)).await.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestAssets, TestAssetsNoIndex, body_to_string};
    use todo_shared::{DueDate, Todo, TodoId};

    fn todo(title: &str) -> Todo {
        Todo {
            id: TodoId(1),
            title: title.into(),
            content: "content".into(),
            done: false,
            due_date: DueDate::new(2019, 5, 7),
        }
    }

    #[tokio::test]
    async fn page_injects_state_into_html() {
        let state = TodoListState::new(vec![todo("TODO_TEST_TITLE_1")]);
        let response = TodoPage::<TestAssets>::new(state).into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response).await;
        assert!(body.contains(r#"<script id="todo-state" type="application/json">"#));
        assert!(body.contains(r#""title":"TODO_TEST_TITLE_1""#));
        assert!(body.contains(r#""selected_todo":null"#));
        assert!(!body.contains(INITIAL_STATE_MARKER));
    }

    #[tokio::test]
    async fn page_escapes_script_closing_tag() {
        let state = TodoListState::new(vec![todo("</script><script>alert('xss')")]);
        let body = body_to_string(TodoPage::<TestAssets>::new(state).into_response()).await;

        assert!(body.contains(r#"<\/script>"#));
        assert!(!body.contains(r#"</script><script>"#));
    }

    #[tokio::test]
    async fn page_is_an_error_without_index_html() {
        let response = TodoPage::<TestAssetsNoIndex>::new(TodoListState::default()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn assets_get_mime_types() {
        let js = asset::<TestAssets>("app.js").unwrap();
        assert_eq!(js.headers().get("content-type").unwrap(), "text/javascript");

        let wasm = asset::<TestAssets>("app.wasm").unwrap();
        assert_eq!(wasm.headers().get("content-type").unwrap(), "application/wasm");

        assert!(asset::<TestAssets>("missing.css").is_none());
    }

    #[tokio::test]
    async fn fallback_serves_page_for_client_routes() {
        let repo = TodoRepository::new();
        let uri: Uri = "/todos/1".parse().unwrap();
        let response = fallback::<TestAssets>(State(repo), uri).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response).await;
        assert!(body.contains(r#"<script id="todo-state""#));
    }

    #[tokio::test]
    async fn fallback_never_serves_the_raw_template() {
        let repo = TodoRepository::new();
        repo.insert(todo_shared::TodoDraft {
            title: "TODO_TEST_TITLE_1".into(),
            content: String::new(),
            due_date: DueDate::new(2019, 5, 7),
        })
        .await;
        let uri: Uri = "/index.html".parse().unwrap();
        let response = fallback::<TestAssets>(State(repo), uri).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response).await;
        assert!(body.contains(r#"<script id="todo-state""#));
        assert!(body.contains(r#""title":"TODO_TEST_TITLE_1""#));
        assert!(!body.contains(INITIAL_STATE_MARKER));
    }

    #[tokio::test]
    async fn fallback_serves_assets_by_path() {
        let uri: Uri = "/app.js".parse().unwrap();
        let response = fallback::<TestAssets>(State(TodoRepository::new()), uri).await;
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/javascript"
        );
    }

    #[tokio::test]
    async fn fallback_keeps_api_misses_as_404() {
        let repo = TodoRepository::new();
        let uri: Uri = "/api/nothing".parse().unwrap();
        let response = fallback::<TestAssets>(State(repo), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
