// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    extract::{FromRequest, FromRequestParts, Path},
    http::{HeaderMap, request::Parts},
};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Basic};

use super::error::{HttpError, HttpResult};

pub const SESSION_COOKIE: &str = "sessionid";

/// JSON request body whose rejections render like every other API error.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct JsonBody<T>(pub T);

/// Numeric article id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct ArticlePath(pub i64);

impl<S> FromRequestParts<S> for ArticlePath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}

/// Caller identity; rejects with 401 when neither basic credentials nor a
/// live session cookie are present.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(Self(user.clone()));
        }

        let state = app_state(parts)?;
        authenticate_headers(&state, &parts.headers).await.map(Self)
    }
}

/// Raw session token from the cookie, if any.
#[derive(Debug, Clone)]
pub struct SessionCookie(pub Option<String>);

impl<S> FromRequestParts<S> for SessionCookie
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(session_token(&parts.headers)))
    }
}

fn app_state(parts: &Parts) -> HttpResult<HttpState> {
    parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
        HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
    })
}

fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_owned))
        .filter(|token| !token.is_empty())
}

/// Basic credentials win over a session cookie when both are sent.
pub async fn authenticate_headers(
    state: &HttpState,
    headers: &HeaderMap,
) -> HttpResult<AuthenticatedUser> {
    let users = &state.services.user_queries;

    if let Some(Authorization(basic)) = headers.typed_get::<Authorization<Basic>>() {
        return users
            .authenticate_basic(basic.username(), basic.password())
            .await
            .map_err(HttpError::from_error);
    }

    if let Some(token) = session_token(headers) {
        return users
            .authenticate_session(&token)
            .await
            .map_err(HttpError::from_error);
    }

    Err(HttpError::from_error(ApplicationError::unauthorized(
        "authentication credentials were not provided",
    )))
}
