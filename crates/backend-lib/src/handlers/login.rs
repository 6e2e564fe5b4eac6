// ============================
// mediagate-backend/src/handlers/login.rs
// ============================
//! Login and logout: the only way into and out of the session store.
use std::net::SocketAddr;

use axum::{
    body::Bytes,
    extract::{ConnectInfo, Request, State},
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use mediagate_common::{PasswordLogin, TokenLogin};
use tracing::{info, warn};

use crate::config::LoginVariant;
use crate::cookie::{clear_session_cookie, session_cookie, session_id_from};
use crate::error::AppError;
use crate::AppState;

/// Largest login body read into memory
pub const MAX_LOGIN_BODY: usize = 16 * 1024;

/// Pull the submitted secret out of the variant's JSON shape
fn decode_secret(variant: LoginVariant, body: &Bytes) -> Result<String, serde_json::Error> {
    match variant {
        LoginVariant::Password => {
            serde_json::from_slice::<PasswordLogin>(body).map(PasswordLogin::into_secret)
        },
        LoginVariant::Token => serde_json::from_slice::<TokenLogin>(body).map(TokenLogin::into_secret),
    }
}

fn decode_failure(variant: LoginVariant, reason: String) -> AppError {
    match variant {
        LoginVariant::Password => AppError::MalformedLogin(reason),
        LoginVariant::Token => AppError::Forbidden,
    }
}

fn mismatch(variant: LoginVariant) -> AppError {
    match variant {
        LoginVariant::Password => AppError::InvalidCredentials,
        LoginVariant::Token => AppError::Forbidden,
    }
}

/// `POST /api/v1/login`
///
/// Compares the submitted secret with the configured one and, on a match,
/// mints a session and hands its identifier back as an `HttpOnly` cookie.
/// There is no lockout; failures are only logged.
pub async fn login(State(state): State<AppState>, request: Request) -> Result<Response, AppError> {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let variant = state.settings.login_variant;

    let secret = match axum::body::to_bytes(request.into_body(), MAX_LOGIN_BODY).await {
        Ok(body) => decode_secret(variant, &body).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };
    let secret = match secret {
        Ok(secret) => secret,
        Err(reason) => {
            warn!(?peer, "error decoding request body: {reason}");
            return Err(decode_failure(variant, reason));
        },
    };

    let session = match state.auth.login(&secret).await {
        Ok(session) => session,
        Err(AppError::InvalidCredentials) => {
            warn!(?peer, "Invalid login");
            return Err(mismatch(variant));
        },
        Err(e) => return Err(e),
    };
    info!(?peer, session_id = %session.id, "Successful login");

    let cookie = session_cookie(&session, variant == LoginVariant::Token)
        .map_err(|e| AppError::Internal(format!("invalid session cookie: {e}")))?;

    Ok((StatusCode::OK, [(SET_COOKIE, cookie)]).into_response())
}

/// `POST /api/v1/logout`
///
/// Forgets the session named by the cookie, if any, and always clears the
/// cookie on the client.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, AppError> {
    if let Some(session_id) = session_id_from(&headers) {
        state.auth.logout(&session_id).await?;
        info!(session_id = %session_id, "Session ended");
    }

    let cookie = clear_session_cookie()
        .map_err(|e| AppError::Internal(format!("invalid session cookie: {e}")))?;

    Ok((StatusCode::NO_CONTENT, [(SET_COOKIE, cookie)]).into_response())
}
