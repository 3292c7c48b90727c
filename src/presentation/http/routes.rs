// src/presentation/http/routes.rs
use crate::config::{AppConfig, RateLimitSettings};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, auth, root},
    middleware::{authentication::require_authentication, rate_limit::rate_limit_layer},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Cross-cutting router settings taken from [`AppConfig`].
#[derive(Clone, Debug, Default)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    pub rate_limit: Option<RateLimitSettings>,
}

impl RouterOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit(),
        }
    }
}

/// Collection and detail routes backed by the shared article handlers.
fn article_routes(collection: &str, detail: &str) -> Router {
    Router::new()
        .route(
            collection,
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            detail,
            get(articles::get_article)
                .put(articles::update_article)
                .patch(articles::partial_update_article)
                .delete(articles::delete_article),
        )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600));

    if origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}

pub fn build_router(state: HttpState, options: &RouterOptions) -> Router {
    let generic = article_routes("/generic/article/", "/generic/article/{id}/")
        .route_layer(middleware::from_fn(require_authentication));

    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api-auth/login/", post(auth::login))
        .route("/api-auth/logout/", post(auth::logout))
        .route("/api-auth/me/", get(auth::current_user))
        .merge(article_routes("/article/", "/detail/{id}/"))
        .merge(generic)
        .route("/viewset/", get(root::api_root))
        .merge(article_routes("/viewset/article/", "/viewset/article/{id}/"))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins));

    if let Some(settings) = options.rate_limit {
        match rate_limit_layer(settings) {
            Some(layer) => router = router.layer(layer),
            None => tracing::warn!(?settings, "rate limiting disabled: invalid settings"),
        }
    }

    router.layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
