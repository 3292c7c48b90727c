// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginCommand, LogoutCommand},
    dto::{AuthMethod, SessionDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{
    Authenticated, JsonBody, SESSION_COOKIE, SessionCookie,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CurrentUserResponse {
    pub username: String,
    /// `basic` or `session`.
    pub auth: String,
}

fn session_cookie(value: &str, max_age: u64) -> HeaderValue {
    let cookie = format!("{SESSION_COOKIE}={value}; HttpOnly; Path=/; SameSite=Lax; Max-Age={max_age}");
    // Tokens are base64url and never contain characters invalid in a header.
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static("sessionid=; Max-Age=0"))
}

#[utoipa::path(
    post,
    path = "/api-auth/login/",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened; the token is set as the `sessionid` cookie.", body = SessionDto),
        (status = 401, description = "Invalid credentials.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> HttpResult<Response> {
    let session = state
        .services
        .user_commands
        .login(LoginCommand {
            username: payload.username,
            password: payload.password,
        })
        .await
        .into_http()?;

    let max_age = state.services.user_commands.session_ttl().as_secs();
    let cookie = session_cookie(&session.token, max_age);

    Ok(([(header::SET_COOKIE, cookie)], Json(session)).into_response())
}

#[utoipa::path(
    post,
    path = "/api-auth/logout/",
    responses(
        (status = 204, description = "Session closed and cookie cleared.")
    ),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    SessionCookie(token): SessionCookie,
) -> HttpResult<Response> {
    state
        .services
        .user_commands
        .logout(LogoutCommand { token })
        .await
        .into_http()?;

    Ok((
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, session_cookie("", 0))],
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api-auth/me/",
    responses(
        (status = 200, description = "The authenticated caller.", body = CurrentUserResponse),
        (status = 401, description = "No valid credentials.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("basicAuth" = []), ("sessionCookie" = [])),
    tag = "Auth"
)]
pub async fn current_user(Authenticated(user): Authenticated) -> Json<CurrentUserResponse> {
    let auth = match user.via {
        AuthMethod::Basic => "basic",
        AuthMethod::Session => "session",
    };
    Json(CurrentUserResponse {
        username: user.username,
        auth: auth.into(),
    })
}
