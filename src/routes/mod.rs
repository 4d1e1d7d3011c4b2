//! Route tables and the assembled application router.

mod book;
mod common;
mod user;

pub use book::book_routes;
pub use common::common_routes;
pub use user::user_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Every route of the service behind CORS, a body size limit and request tracing.
pub fn app_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(book_routes(state.clone()))
        .merge(user_routes(state))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
