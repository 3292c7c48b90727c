// tests/support/helpers.rs
use super::mocks::{
    InMemoryArticleRepo, InMemoryUserRepo, PlainPasswordHasher, SequentialTokens, TestClock,
};
use article_api::application::{
    commands::users::EnsureAccountCommand, services::ApplicationServices,
};
use article_api::infrastructure::security::session_store::InMemorySessionStore;
use article_api::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tower::util::ServiceExt as _;

pub const TEST_USERNAME: &str = "alice";
pub const TEST_PASSWORD: &str = "wonderland";
pub const SESSION_TTL: Duration = Duration::from_secs(3600);

pub struct TestApp {
    pub router: Router,
    pub services: Arc<ApplicationServices>,
    pub articles: Arc<InMemoryArticleRepo>,
    pub users: Arc<InMemoryUserRepo>,
    pub clock: Arc<TestClock>,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(InMemoryArticleRepo::default()).await
}

/// App over the given article store, with `alice`/`wonderland` registered and
/// rate limiting off.
pub async fn spawn_app_with(articles: InMemoryArticleRepo) -> TestApp {
    let articles = Arc::new(articles);
    let users = Arc::new(InMemoryUserRepo::default());
    let clock = Arc::new(TestClock::default());

    let services = Arc::new(ApplicationServices::new(
        articles.clone(),
        articles.clone(),
        users.clone(),
        Arc::new(PlainPasswordHasher),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(SequentialTokens::default()),
        clock.clone(),
        SESSION_TTL,
    ));

    services
        .user_commands
        .ensure_account(EnsureAccountCommand {
            username: TEST_USERNAME.into(),
            password: TEST_PASSWORD.into(),
        })
        .await
        .expect("seed test account");

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let router = build_router(state, &RouterOptions::default());

    TestApp {
        router,
        services,
        articles,
        users,
        clock,
    }
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn with_basic_auth(mut request: Request<Body>, username: &str, password: &str) -> Request<Body> {
    let encoded = STANDARD.encode(format!("{username}:{password}"));
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Basic {encoded}").parse().unwrap(),
    );
    request
}

pub fn with_session(mut request: Request<Body>, token: &str) -> Request<Body> {
    request
        .headers_mut()
        .insert(header::COOKIE, format!("sessionid={token}").parse().unwrap());
    request
}

pub async fn body_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

/// Creates an article through the open surface and returns its id.
pub async fn create_article(app: &TestApp, title: &str) -> i64 {
    let resp = app
        .send(json_request(
            Method::POST,
            "/article/",
            &super::builders::article_payload(title),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await["id"].as_i64().expect("numeric id")
}
