// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand, UpdateMode,
    },
    dto::ArticleDto,
    queries::articles::GetArticleQuery,
    validation::FieldValue,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ArticlePath, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// Article fields as sent by clients. `id` and unknown keys are ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ArticleRequest {
    #[schema(value_type = Option<String>, max_length = 100, example = "Hello")]
    #[serde(default)]
    pub title: FieldValue,
    #[schema(value_type = Option<String>, max_length = 100, example = "Ann")]
    #[serde(default)]
    pub author: FieldValue,
    #[schema(value_type = Option<String>, max_length = 50, example = "ann@x.io")]
    #[serde(default)]
    pub email: FieldValue,
    #[schema(value_type = Option<String>, example = "2024-01-01T00:00:00Z")]
    #[serde(default)]
    pub date: FieldValue,
}

impl ArticleRequest {
    fn into_update(self, id: i64, mode: UpdateMode) -> UpdateArticleCommand {
        UpdateArticleCommand {
            id,
            mode,
            title: self.title,
            author: self.author,
            email: self.email,
            date: self.date,
        }
    }
}

impl From<ArticleRequest> for CreateArticleCommand {
    fn from(request: ArticleRequest) -> Self {
        Self {
            title: request.title,
            author: request.author,
            email: request.email,
            date: request.date,
        }
    }
}

#[utoipa::path(
    get,
    path = "/article/",
    responses(
        (status = 200, description = "All articles in ascending id order.", body = [ArticleDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/article/",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Field validation errors keyed by field name."),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let article = state
        .services
        .article_commands
        .create_article(payload.into())
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    get,
    path = "/detail/{id}/",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ArticlePath(id): ArticlePath,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article(GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/detail/{id}/",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article replaced.", body = ArticleDto),
        (status = 400, description = "Field validation errors keyed by field name."),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ArticlePath(id): ArticlePath,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .update_article(payload.into_update(id, UpdateMode::Full))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/detail/{id}/",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Supplied fields updated.", body = ArticleDto),
        (status = 400, description = "Field validation errors keyed by field name."),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn partial_update_article(
    Extension(state): Extension<HttpState>,
    ArticlePath(id): ArticlePath,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .update_article(payload.into_update(id, UpdateMode::Partial))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/detail/{id}/",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ArticlePath(id): ArticlePath,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    #[test]
    fn absent_fields_deserialize_as_missing() {
        let request: ArticleRequest = serde_json::from_str(r#"{"title": "t", "id": 9}"#).unwrap();
        assert_eq!(request.title, FieldValue::present("t"));
        assert_eq!(request.author, FieldValue::Missing);
        assert_eq!(request.date, FieldValue::Missing);
    }

    #[test]
    fn schema_lists_fields_without_defaults() {
        let schema = serde_json::to_value(ArticleRequest::schema()).unwrap();
        for field in ["title", "author", "email", "date"] {
            let property = &schema["properties"][field];
            assert!(property.is_object(), "missing {field}");
            assert!(property.get("default").is_none(), "{field} has a default");
        }
    }
}
