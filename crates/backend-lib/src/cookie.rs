//! Session cookie encoding and extraction.
use axum::http::{
    header::{InvalidHeaderValue, COOKIE},
    HeaderMap, HeaderValue,
};
use chrono::{DateTime, Utc};
use mediagate_common::SESSION_COOKIE_NAME;

use crate::auth::Session;

/// IMF-fixdate as used by the `Expires` attribute
const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Format a timestamp for the `Expires` cookie attribute
pub fn http_date(at: DateTime<Utc>) -> String {
    at.format(HTTP_DATE).to_string()
}

/// Build the `Set-Cookie` value handing a session to the client
pub fn session_cookie(session: &Session, same_site_lax: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={}; Path=/; Expires={}; HttpOnly",
        session.id,
        http_date(session.expires_at)
    );
    if same_site_lax {
        cookie.push_str("; SameSite=Lax");
    }
    HeaderValue::from_str(&cookie)
}

/// Build a `Set-Cookie` value telling the client to forget its session
pub fn clear_session_cookie() -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE_NAME}=; Path=/; Max-Age=0; HttpOnly"
    ))
}

/// Session identifier from the request's `Cookie` headers, if any
///
/// The first non-empty `session_id` pair wins.
pub fn session_id_from(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (key, val) = pair.trim().split_once('=')?;
            (key.trim() == SESSION_COOKIE_NAME).then(|| val.trim().trim_matches('"'))
        })
        .find(|val| !val.is_empty())
        .map(str::to_string)
}
