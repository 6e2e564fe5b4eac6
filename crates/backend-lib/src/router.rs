// ============================
// mediagate-backend/src/router.rs
// ============================
//! Route table: public login surface plus the session-gated routes.
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, get_service, post},
    Router,
};
use mediagate_common::routes;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{login, pages, upload};
use crate::middleware::require_session;
use crate::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.settings.static_dir.clone();

    // Every route registered here sits behind the session gate
    let protected = Router::new()
        .route(
            routes::HOME,
            get_service(ServeFile::new(static_dir.join("home.html"))),
        )
        .route(
            routes::UPLOAD,
            post(upload::upload).layer(DefaultBodyLimit::max(state.settings.max_upload_bytes)),
        )
        .nest_service(routes::STATIC, ServeDir::new(&static_dir))
        .route_layer(from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route(routes::ROOT, get(pages::root))
        .route(routes::LOGIN, post(login::login))
        .route(routes::LOGOUT, post(login::logout))
        .route(
            routes::FAVICON,
            get_service(ServeFile::new(static_dir.join("favicon.ico"))),
        )
        .merge(protected)
        .fallback(pages::redirect_to_root)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
