//! Shared application state, built once at startup and handed to every route.

use crate::config::Settings;
use crate::service::PasswordHasher;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub hasher: PasswordHasher,
    pub user_list_include_hash: bool,
}

impl AppState {
    pub fn new(pool: SqlitePool, settings: &Settings) -> Self {
        AppState {
            pool,
            hasher: PasswordHasher::new(settings.bcrypt_cost),
            user_list_include_hash: settings.user_list_include_hash,
        }
    }
}
