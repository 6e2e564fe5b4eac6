//! Login page and the catch-all redirect.
use axum::{
    extract::State,
    response::{Html, Redirect},
};
use mediagate_common::routes;
use tokio::fs;
use tracing::error;

use crate::error::AppError;
use crate::AppState;

/// Placeholder in the login page replaced with the service's base URL
pub const BASE_URL_PLACEHOLDER: &str = "{{.}}";

pub const LOGIN_PAGE: &str = "login.html";

/// Escape text for an HTML attribute or element body
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Substitute the escaped base URL into a page template
pub fn render(template: &str, base_url: &str) -> String {
    template.replace(BASE_URL_PLACEHOLDER, &escape_html(base_url))
}

/// `GET /`
pub async fn root(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let path = state.settings.static_dir.join(LOGIN_PAGE);
    let template = fs::read_to_string(&path).await.map_err(|e| {
        error!(path = %path.display(), "error opening login page: {e}");
        AppError::Io(e)
    })?;
    Ok(Html(render(&template, &state.settings.base_url)))
}

/// Anything unmatched goes back to the login page
pub async fn redirect_to_root() -> Redirect {
    Redirect::to(routes::ROOT)
}
