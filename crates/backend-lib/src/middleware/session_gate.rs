//! Session gate in front of protected routes.
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use mediagate_common::routes;
use metrics::counter;
use tracing::debug;

use crate::config::RejectPolicy;
use crate::cookie::session_id_from;
use crate::error::AppError;
use crate::metrics::AUTH_REJECTED;
use crate::AppState;

/// Forward the request only when it carries a known session cookie
///
/// The request passes through untouched and the session's expiry is not
/// extended. Lookup failures surface as server errors.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let policy = state.settings.reject_policy;

    let Some(session_id) = session_id_from(request.headers()) else {
        debug!(path = %request.uri().path(), "No cookie found");
        return Ok(reject(policy));
    };

    let known = if state.settings.strict_expiry {
        state.auth.validate_session_at(&session_id, Utc::now()).await?
    } else {
        state.auth.validate_session(&session_id).await?
    };

    if !known {
        debug!(path = %request.uri().path(), "No cookie in sessions");
        return Ok(reject(policy));
    }

    Ok(next.run(request).await)
}

/// Response for a request without a usable session
pub fn reject(policy: RejectPolicy) -> Response {
    counter!(AUTH_REJECTED).increment(1);
    match policy {
        RejectPolicy::Redirect => Redirect::to(routes::ROOT).into_response(),
        RejectPolicy::NotFound => StatusCode::NOT_FOUND.into_response(),
        RejectPolicy::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
    }
}
