//! User handlers: add, verify, list.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{Credentials, NewUser, UserListing};
use crate::response::{success_many, success_one, success_one_ok};
use crate::service::UserService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn add(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::add(&state.pool, &state.hasher, body).await?;
    Ok(success_one(format!("user {} has been added", user.username)))
}

pub async fn verify(
    State(state): State<AppState>,
    JsonBody(creds): JsonBody<Credentials>,
) -> Result<impl IntoResponse, AppError> {
    if UserService::verify(&state.pool, &state.hasher, creds).await? {
        Ok(success_one_ok("User verified"))
    } else {
        Err(AppError::NotVerified)
    }
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows: Vec<UserListing> = UserService::list(&state.pool)
        .await?
        .into_iter()
        .map(|u| UserListing::from_user(u, state.user_list_include_hash))
        .collect();
    Ok(success_many(rows))
}
