//! User routes: add, verify, list.

use crate::handlers::user::{add, list, verify};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/user/add", post(add))
        .route("/user/verify", post(verify))
        .route("/user/get", get(list))
        .with_state(state)
}
