//! Authentication gate.
//!
//! Per-request guard with no cross-request state: resolves the opaque token
//! from the `Authorization` header (the raw header value is the token) and
//! threads the identity through as a typed request extension.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated identity attached to protected requests.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if token.is_empty() {
        return Err(ApiError::Unauthorized);
    }

    let user = state
        .user_service
        .resolve_token(token)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    request.extensions_mut().insert(AuthUser {
        username: user.username,
    });

    Ok(next.run(request).await)
}
