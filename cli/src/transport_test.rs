use super::*;

use auth::forms::PasswordChangeForm;
use auth::{AuthError, AuthGateway, LoginRequest, MemoryTokenStore};
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, response::IntoResponse};
use serde_json::json;

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "Bearer T")
}

async fn issue_token(Json(body): Json<Value>) -> impl IntoResponse {
    if body["username"] == "alice" && body["password"] == "secret" {
        (
            StatusCode::OK,
            Json(json!({
                "access_token": "T",
                "token_type": "bearer",
                "user_id": 1,
                "email": "a@x.com",
                "username": "alice"
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Incorrect username or password" })),
        )
    }
}

async fn me(headers: HeaderMap) -> impl IntoResponse {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Could not validate credentials" })));
    }
    (
        StatusCode::OK,
        Json(json!({
            "user_id": 1,
            "username": "alice",
            "email": "a@x.com",
            "first_name": "Alice",
            "last_name": null,
            "created_at": "2024-05-01T10:00:00"
        })),
    )
}

async fn change_password(headers: HeaderMap) -> StatusCode {
    if authorized(&headers) { StatusCode::NO_CONTENT } else { StatusCode::UNAUTHORIZED }
}

async fn spawn_stub() -> ApiConfig {
    let app = Router::new()
        .route("/api/auth/token", post(issue_token))
        .route("/api/users/me", get(me))
        .route("/api/users/me/password", put(change_password))
        .route("/health", get(|| async { Json(json!({ "status": "ok" })) }));
    serve(app).await
}

async fn serve(app: Router) -> ApiConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    ApiConfig::new(&format!("http://{addr}/api"))
}

#[test]
fn methods_map_to_reqwest() {
    assert_eq!(http_method(Method::Get), reqwest::Method::GET);
    assert_eq!(http_method(Method::Post), reqwest::Method::POST);
    assert_eq!(http_method(Method::Put), reqwest::Method::PUT);
}

#[tokio::test]
async fn login_stores_token_and_publishes_session() {
    let config = spawn_stub().await;
    let gateway = AuthGateway::new(ReqwestTransport::new(config).unwrap(), MemoryTokenStore::new());

    let session = gateway
        .login(&LoginRequest {
            username: "alice".to_owned(),
            password: "secret".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(session.username(), "alice");
    assert_eq!(gateway.storage().token().as_deref(), Some("T"));
    assert!(gateway.is_authenticated());
}

#[tokio::test]
async fn wrong_password_surfaces_server_detail() {
    let config = spawn_stub().await;
    let gateway = AuthGateway::new(ReqwestTransport::new(config).unwrap(), MemoryTokenStore::new());

    let err = gateway
        .login(&LoginRequest {
            username: "alice".to_owned(),
            password: "nope".to_owned(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Incorrect username or password");
    assert!(err.is_rejection());
    assert_eq!(gateway.storage().token(), None);
    assert!(!gateway.is_authenticated());
}

#[tokio::test]
async fn password_change_accepts_empty_no_content_reply() {
    let config = spawn_stub().await;
    let gateway = AuthGateway::new(ReqwestTransport::new(config).unwrap(), MemoryTokenStore::with_token("T"));
    assert!(gateway.restore_session().await.is_some());

    let form = PasswordChangeForm {
        current_password: "secret".to_owned(),
        new_password: "better-secret".to_owned(),
        confirm_password: "better-secret".to_owned(),
    };
    gateway.submit_password_change(&form).await.unwrap();
    assert!(gateway.is_authenticated());
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let config = ApiConfig::new("http://127.0.0.1:9/api");
    let gateway = AuthGateway::new(ReqwestTransport::new(config).unwrap(), MemoryTokenStore::new());

    let err = gateway
        .login(&LoginRequest {
            username: "alice".to_owned(),
            password: "secret".to_owned(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Transport(TransportError::Network(_))));
}

#[tokio::test]
async fn health_reads_server_root() {
    let config = spawn_stub().await;
    let transport = ReqwestTransport::new(config).unwrap();
    let body = transport.health().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn health_with_non_json_body_is_http_error() {
    let config = serve(Router::new().route("/health", get(|| async { "ok" }))).await;
    let transport = ReqwestTransport::new(config).unwrap();
    let err = transport.health().await.unwrap_err();
    assert!(matches!(err, CliError::Http(_)), "{err:?}");
}
