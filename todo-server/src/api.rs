//! REST handlers under `/api/todo`.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use todo_shared::{ApiError, Todo, TodoDraft, TodoId};

use crate::error::ServerError;
use crate::repo::TodoRepository;

/// Checks the server applies before storing a draft.
///
/// The form sends whatever was typed; blank titles and impossible dates
/// stop here.
pub fn validate(draft: &TodoDraft) -> Result<(), ApiError> {
    if draft.title.trim().is_empty() {
        return Err(ApiError::validation("title", "must not be empty"));
    }
    if draft.due_date.to_naive_date().is_none() {
        return Err(ApiError::validation(
            "due_date",
            format!("{} is not a calendar day", draft.due_date),
        ));
    }
    Ok(())
}

pub async fn list_todos(State(repo): State<TodoRepository>) -> Json<Vec<Todo>> {
    Json(repo.list().await)
}

pub async fn create_todo(
    State(repo): State<TodoRepository>,
    body: Result<Json<TodoDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ServerError> {
    let Json(draft) = body?;
    if let Err(error) = validate(&draft) {
        tracing::debug!("rejected todo draft: {error}");
        return Err(error.into());
    }
    let todo = repo.insert(draft).await;
    tracing::info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_todo(
    State(repo): State<TodoRepository>,
    id: Result<Path<TodoId>, PathRejection>,
) -> Result<Json<Todo>, ServerError> {
    let Path(id) = id?;
    repo.get(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound { id }.into())
}

pub async fn toggle_todo(
    State(repo): State<TodoRepository>,
    id: Result<Path<TodoId>, PathRejection>,
) -> Result<Json<Todo>, ServerError> {
    let Path(id) = id?;
    let todo = repo.toggle(id).await.ok_or(ApiError::NotFound { id })?;
    tracing::info!(id = %todo.id, done = todo.done, "toggled todo");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(repo): State<TodoRepository>,
    id: Result<Path<TodoId>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    let Path(id) = id?;
    if !repo.remove(id).await {
        return Err(ApiError::NotFound { id }.into());
    }
    tracing::info!(%id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router;
    use crate::testing::{TestAssets, body_to_string};
    use axum::body::Body;
    use axum::http::{Method, Request};
    use axum::response::Response;
    use todo_shared::DueDate;
    use todo_shared::api::ErrorBody;
    use tower::ServiceExt;

    fn draft(title: &str, due_date: DueDate) -> TodoDraft {
        TodoDraft {
            title: title.into(),
            content: "TEST_CONTENT".into(),
            due_date,
        }
    }

    fn post_json(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/todo")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap()
    }

    fn post_draft(draft: &TodoDraft) -> Request<Body> {
        post_json(serde_json::to_vec(draft).unwrap())
    }

    async fn validation_error(response: Response) -> (String, String) {
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = serde_json::from_str(&body_to_string(response).await).unwrap();
        match body.error {
            ApiError::Validation { field, message } => (field, message),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn seeded() -> TodoRepository {
        let repo = TodoRepository::new();
        repo.insert(draft("TODO_TEST_TITLE_1", DueDate::new(2019, 5, 7)))
            .await;
        repo
    }

    #[test]
    fn validation_rules() {
        assert!(validate(&draft("ok", DueDate::new(2019, 5, 7))).is_ok());
        assert_eq!(
            validate(&draft("   ", DueDate::new(2019, 5, 7))),
            Err(ApiError::validation("title", "must not be empty"))
        );
        assert_eq!(
            validate(&draft("ok", DueDate::new(2019, 0, 7))),
            Err(ApiError::validation(
                "due_date",
                "2019-00-07 is not a calendar day"
            ))
        );
    }

    #[tokio::test]
    async fn post_creates_todo_not_done() {
        let repo = TodoRepository::new();
        let app = router::<TestAssets>(repo.clone());

        let response = app
            .oneshot(post_draft(&draft("TEST_TITLE", DueDate::new(2019, 5, 7))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let todo: Todo = serde_json::from_str(&body_to_string(response).await).unwrap();
        assert_eq!(todo.id, TodoId(1));
        assert_eq!(todo.title, "TEST_TITLE");
        assert_eq!(todo.content, "TEST_CONTENT");
        assert_eq!(todo.due_date, DueDate::new(2019, 5, 7));
        assert!(!todo.done);
        assert_eq!(repo.list().await, vec![todo]);
    }

    #[tokio::test]
    async fn post_rejects_impossible_date() {
        let repo = TodoRepository::new();
        let app = router::<TestAssets>(repo.clone());

        let response = app
            .oneshot(post_draft(&draft("TEST_TITLE", DueDate::new(2019, 0, 7))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = serde_json::from_str(&body_to_string(response).await).unwrap();
        assert!(matches!(body.error, ApiError::Validation { ref field, .. } if field == "due_date"));
        assert!(repo.list().await.is_empty());
    }

    #[tokio::test]
    async fn post_with_missing_field_names_it() {
        let repo = TodoRepository::new();
        let app = router::<TestAssets>(repo.clone());

        let response = app.oneshot(post_json(r#"{"title":"x"}"#)).await.unwrap();

        let (field, message) = validation_error(response).await;
        assert_eq!(field, "body");
        assert!(message.contains("missing field `content`"), "{message}");
        assert!(repo.list().await.is_empty());
    }

    #[tokio::test]
    async fn post_with_broken_json_is_a_validation_error() {
        let app = router::<TestAssets>(TodoRepository::new());
        let response = app.oneshot(post_json("{not json")).await.unwrap();

        let (field, _) = validation_error(response).await;
        assert_eq!(field, "body");
    }

    #[tokio::test]
    async fn malformed_ids_are_validation_errors() {
        let app = router::<TestAssets>(seeded().await);

        for (method, uri) in [
            (Method::GET, "/api/todo/abc"),
            (Method::PUT, "/api/todo/-1/toggle"),
            (Method::DELETE, "/api/todo/1.5"),
        ] {
            let response = app
                .clone()
                .oneshot(empty_request(method, uri))
                .await
                .unwrap();
            let (field, message) = validation_error(response).await;
            assert_eq!(field, "id", "{uri}");
            assert!(!message.is_empty(), "{uri}");
        }
    }

    #[tokio::test]
    async fn list_returns_all() {
        let app = router::<TestAssets>(seeded().await);
        let response = app
            .oneshot(empty_request(Method::GET, "/api/todo"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let todos: Vec<Todo> = serde_json::from_str(&body_to_string(response).await).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "TODO_TEST_TITLE_1");
    }

    #[tokio::test]
    async fn get_unknown_is_404_with_body() {
        let app = router::<TestAssets>(seeded().await);
        let response = app
            .oneshot(empty_request(Method::GET, "/api/todo/99"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = serde_json::from_str(&body_to_string(response).await).unwrap();
        assert_eq!(body.error, ApiError::NotFound { id: TodoId(99) });
    }

    #[tokio::test]
    async fn toggle_flips_done() {
        let repo = seeded().await;
        let app = router::<TestAssets>(repo.clone());
        let response = app
            .oneshot(empty_request(Method::PUT, "/api/todo/1/toggle"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let todo: Todo = serde_json::from_str(&body_to_string(response).await).unwrap();
        assert!(todo.done);
        assert!(repo.get(TodoId(1)).await.unwrap().done);
    }

    #[tokio::test]
    async fn delete_then_delete_again() {
        let repo = seeded().await;
        let app = router::<TestAssets>(repo.clone());

        let response = app
            .clone()
            .oneshot(empty_request(Method::DELETE, "/api/todo/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(empty_request(Method::DELETE, "/api/todo/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(repo.list().await.is_empty());
    }

    #[tokio::test]
    async fn index_carries_current_todos() {
        let app = router::<TestAssets>(seeded().await);
        let response = app.oneshot(empty_request(Method::GET, "/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response).await;
        assert!(body.contains(r#""title":"TODO_TEST_TITLE_1""#));
    }
}
