// src/presentation/http/middleware/authentication.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::extractors::authenticate_headers;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Rejects unauthenticated requests with 401 before they reach a handler.
///
/// Usage: `route_layer(axum::middleware::from_fn(require_authentication))`.
/// The resolved caller is stored in the request extensions, where the
/// `Authenticated` extractor picks it up without a second lookup.
pub async fn require_authentication(mut req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    match authenticate_headers(&state, req.headers()).await {
        Ok(user) => {
            tracing::debug!(user_id = user.id.0, via = ?user.via, "request authenticated");
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}
