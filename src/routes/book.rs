//! Book routes: add, edit, delete, list.

use crate::handlers::book::{add, delete, edit, list};
use crate::state::AppState;
use axum::{
    routing::{delete as delete_route, get, post, put},
    Router,
};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/book/add", post(add))
        .route("/book/edit/:id", put(edit).patch(edit))
        .route("/book/delete/:id", delete_route(delete))
        .route("/book/get", get(list))
        .with_state(state)
}
