//! Bearer-token authentication middleware.
//!
//! Validates the `Authorization: Bearer` JWT and resolves its subject
//! against the user collection; the resolved [`User`] is inserted into
//! the request extensions as the acting user.

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use helpdesk_core::models::user::User;
use helpdesk_core::storage::Storage;

use crate::api::AppState;
use crate::token;

/// The authenticated acting user for this request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

pub async fn require_bearer<S: Storage>(
    State(state): State<AppState<S>>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let bearer = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = token::decode(bearer, &state.config).map_err(|_| StatusCode::UNAUTHORIZED)?;
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| StatusCode::UNAUTHORIZED)?;

    // A token whose subject no longer exists is as good as no token.
    let user = state
        .desk
        .user_by_id(user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    req.extensions_mut().insert(AuthUser(user));
    Ok(next.run(req).await)
}
