use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, header},
    routing::{get, put},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use todo_domain::todo::{NewTodo, TodoId};
use todo_infra::{InfraError, mock::MockTodoRepository, repository::TodoRepository};
use tower::ServiceExt;

use super::*;

// テスト用のスタブ実装

/// すべての操作がデータベースエラーになるリポジトリ
struct FailingTodoRepository;

#[async_trait]
impl TodoRepository for FailingTodoRepository {
    async fn insert(&self, _todo: &NewTodo) -> Result<Todo, InfraError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn find_by_id(&self, _id: TodoId) -> Result<Option<Todo>, InfraError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn update(&self, _todo: &Todo) -> Result<(), InfraError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn delete(&self, _id: TodoId) -> Result<(), InfraError> {
        Err(sqlx::Error::PoolClosed.into())
    }
}

fn create_test_app(repo: Arc<dyn TodoRepository>) -> Router {
    let state = Arc::new(TodoState {
        usecase: TodoUseCaseImpl::new(repo),
    });

    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
        .with_state(state)
}

fn seeded_repo() -> MockTodoRepository {
    let repo = MockTodoRepository::new();
    repo.add_todo(Todo::from_db(TodoId::new(1), "Test task".to_string(), false));
    repo
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// テストケース

#[tokio::test]
async fn test_list_todos_空なら空配列を返す() {
    // Given
    let sut = create_test_app(Arc::new(MockTodoRepository::new()));

    // When
    let response = sut
        .oneshot(empty_request(Method::GET, "/api/todos"))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_list_todos_todoの配列を返す() {
    // Given
    let sut = create_test_app(Arc::new(seeded_repo()));

    // When
    let response = sut
        .oneshot(empty_request(Method::GET, "/api/todos"))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        serde_json::json!([{ "id": 1, "task": "Test task", "completed": false }])
    );
}

#[tokio::test]
async fn test_create_todo_201で作成したtodoを返す() {
    // Given
    let repo = MockTodoRepository::new();
    let sut = create_test_app(Arc::new(repo.clone()));

    // When
    let response = sut
        .oneshot(json_request(
            Method::POST,
            "/api/todos",
            serde_json::json!({ "task": "Test task" }),
        ))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::CREATED);
    let dto: TodoDto = serde_json::from_value(read_json(response).await).unwrap();
    assert_eq!(
        dto,
        TodoDto {
            id:        1,
            task:      "Test task".to_string(),
            completed: false,
        }
    );
    assert_eq!(repo.todos().len(), 1);
}

#[rstest]
#[case::空文字(serde_json::json!({ "task": "" }))]
#[case::空白のみ(serde_json::json!({ "task": "   " }))]
#[case::taskなし(serde_json::json!({}))]
#[case::task_null(serde_json::json!({ "task": null }))]
#[case::task_数値(serde_json::json!({ "task": 42 }))]
#[tokio::test]
async fn test_create_todo_不正なタスクで400(#[case] body: serde_json::Value) {
    // Given
    let repo = MockTodoRepository::new();
    let sut = create_test_app(Arc::new(repo.clone()));

    // When
    let response = sut
        .oneshot(json_request(Method::POST, "/api/todos", body))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert!(!json["error"].as_str().unwrap().is_empty());
    assert!(repo.todos().is_empty());
}

#[tokio::test]
async fn test_create_todo_空タスクのエラーメッセージ() {
    // Given
    let sut = create_test_app(Arc::new(MockTodoRepository::new()));

    // When
    let response = sut
        .oneshot(json_request(
            Method::POST,
            "/api/todos",
            serde_json::json!({ "task": " " }),
        ))
        .await
        .unwrap();

    // Then
    assert_eq!(
        read_json(response).await,
        serde_json::json!({ "error": "Task is required and cannot be empty" })
    );
}

#[tokio::test]
async fn test_create_todo_jsonでないボディで400() {
    // Given
    let sut = create_test_app(Arc::new(MockTodoRepository::new()));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/todos")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("task=Test"))
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(read_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_create_todo_ボディなしで400() {
    // Given
    let sut = create_test_app(Arc::new(MockTodoRepository::new()));

    // When
    let response = sut
        .oneshot(empty_request(Method::POST, "/api/todos"))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(read_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_update_todo_200でメッセージを返す() {
    // Given
    let repo = seeded_repo();
    let sut = create_test_app(Arc::new(repo.clone()));

    // When
    let response = sut
        .oneshot(json_request(
            Method::PUT,
            "/api/todos/1",
            serde_json::json!({ "completed": true }),
        ))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        serde_json::json!({ "message": "Todo updated" })
    );
    let todos = repo.todos();
    let stored = &todos[0];
    assert_eq!(stored.task(), "Test task");
    assert!(stored.completed());
}

#[tokio::test]
async fn test_update_todo_nullは変更しない扱い() {
    // Given
    let repo = seeded_repo();
    let sut = create_test_app(Arc::new(repo.clone()));

    // When
    let response = sut
        .oneshot(json_request(
            Method::PUT,
            "/api/todos/1",
            serde_json::json!({ "task": null, "completed": null }),
        ))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        repo.todos()[0],
        Todo::from_db(TodoId::new(1), "Test task".to_string(), false)
    );
}

#[tokio::test]
async fn test_update_todo_存在しないtodoで404() {
    // Given
    let sut = create_test_app(Arc::new(MockTodoRepository::new()));

    // When
    let response = sut
        .oneshot(json_request(
            Method::PUT,
            "/api/todos/999",
            serde_json::json!({ "completed": true }),
        ))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json(response).await,
        serde_json::json!({ "error": "Todo not found" })
    );
}

fn raw_request(method: Method, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[rstest]
#[case::ボディなし(empty_request(Method::PUT, "/api/todos/999"))]
#[case::jsonでない(raw_request(Method::PUT, "/api/todos/999", "completed=true"))]
#[case::型不一致(json_request(Method::PUT, "/api/todos/999", serde_json::json!({ "completed": "yes" })))]
#[tokio::test]
async fn test_update_todo_存在しないtodoはボディによらず404(#[case] request: Request<Body>) {
    // Given
    let sut = create_test_app(Arc::new(MockTodoRepository::new()));

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json(response).await,
        serde_json::json!({ "error": "Todo not found" })
    );
}

#[rstest]
#[case::ボディなし(empty_request(Method::PUT, "/api/todos/1"))]
#[case::jsonでない(raw_request(Method::PUT, "/api/todos/1", "completed=true"))]
#[case::completedが文字列(json_request(Method::PUT, "/api/todos/1", serde_json::json!({ "completed": "yes" })))]
#[case::taskが数値(json_request(Method::PUT, "/api/todos/1", serde_json::json!({ "task": 42 })))]
#[tokio::test]
async fn test_update_todo_存在するtodoへの不正なボディで400(#[case] request: Request<Body>) {
    // Given
    let repo = seeded_repo();
    let sut = create_test_app(Arc::new(repo.clone()));

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(read_json(response).await["error"].is_string());
    assert_eq!(
        repo.todos(),
        vec![Todo::from_db(TodoId::new(1), "Test task".to_string(), false)]
    );
}

#[rstest]
#[case::put(Method::PUT)]
#[case::delete(Method::DELETE)]
#[tokio::test]
async fn test_整数でないidで404(#[case] method: Method) {
    // Given
    let sut = create_test_app(Arc::new(seeded_repo()));

    // When
    let response = sut
        .oneshot(json_request(method, "/api/todos/abc", serde_json::json!({})))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_todo_200でメッセージを返す() {
    // Given
    let repo = seeded_repo();
    let sut = create_test_app(Arc::new(repo.clone()));

    // When
    let response = sut
        .oneshot(empty_request(Method::DELETE, "/api/todos/1"))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        serde_json::json!({ "message": "Todo deleted" })
    );
    assert!(repo.todos().is_empty());
}

#[tokio::test]
async fn test_delete_todo_存在しないtodoで404() {
    // Given
    let sut = create_test_app(Arc::new(MockTodoRepository::new()));

    // When
    let response = sut
        .oneshot(empty_request(Method::DELETE, "/api/todos/1"))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case::list(empty_request(Method::GET, "/api/todos"))]
#[case::create(json_request(Method::POST, "/api/todos", serde_json::json!({ "task": "Test task" })))]
#[case::update(json_request(Method::PUT, "/api/todos/1", serde_json::json!({ "completed": true })))]
#[case::delete(empty_request(Method::DELETE, "/api/todos/1"))]
#[tokio::test]
async fn test_ストア障害で500(#[case] request: Request<Body>) {
    // Given
    let sut = create_test_app(Arc::new(FailingTodoRepository));

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        read_json(response).await,
        serde_json::json!({ "error": "Internal server error" })
    );
}
