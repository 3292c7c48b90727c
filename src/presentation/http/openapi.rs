// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    path::PathItem,
    security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityRequirement, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::partial_update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::root::api_root,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::auth::current_user,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::ArticleRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::CurrentUserResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::SessionDto,
            crate::application::validation::FieldErrors
        )
    ),
    tags(
        (name = "Articles", description = "Article CRUD; the same operations are mounted under /article/, /generic/ and /viewset/"),
        (name = "Auth", description = "Session login and logout"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Article API",
        description = "CRUD service for articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// (source path, mirrored path, authentication required)
const MIRRORED_PATHS: [(&str, &str, bool); 4] = [
    ("/article/", "/generic/article/", true),
    ("/detail/{id}/", "/generic/article/{id}/", true),
    ("/article/", "/viewset/article/", false),
    ("/detail/{id}/", "/viewset/article/{id}/", false),
];

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme("basicAuth", SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)));
        components.add_security_scheme(
            "sessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("sessionid"))),
        );

        for (source, target, secured) in MIRRORED_PATHS {
            let Some(item) = openapi.paths.paths.get(source).cloned() else {
                continue;
            };
            let prefix = target.trim_matches('/').split('/').next().unwrap_or("mirror");
            openapi
                .paths
                .paths
                .insert(target.to_string(), mirror_path_item(item, prefix, secured));
        }
    }
}

fn mirror_path_item(mut item: PathItem, prefix: &str, secured: bool) -> PathItem {
    let operations = [
        &mut item.get,
        &mut item.post,
        &mut item.put,
        &mut item.patch,
        &mut item.delete,
    ];

    for operation in operations.into_iter().flatten() {
        operation.operation_id = operation
            .operation_id
            .as_ref()
            .map(|id| format!("{prefix}_{id}"));
        if secured {
            operation.security = Some(vec![
                SecurityRequirement::new("basicAuth", Vec::<String>::new()),
                SecurityRequirement::new("sessionCookie", Vec::<String>::new()),
            ]);
        }
    }
    item
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/docs/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` (default
/// [`DEFAULT_SNAPSHOT_PATH`]) and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let document = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(output_path)
}
