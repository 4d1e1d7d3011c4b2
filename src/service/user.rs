//! User persistence: add, verify, list. Plaintext passwords never reach the database or the logs.

use crate::error::AppError;
use crate::model::{Credentials, Lookup, NewUser, User};
use crate::service::{PasswordHasher, RequestValidator};
use sqlx::SqlitePool;

pub const DUPLICATE_USERNAME: &str = "That username is already taken";

pub struct UserService;

impl UserService {
    /// Exact, case-sensitive username match.
    pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Lookup<User>, AppError> {
        let row = sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await?;
        Ok(Lookup::from_option(row))
    }

    /// Hash the password and store the user unless the username is taken.
    pub async fn add(pool: &SqlitePool, hasher: &PasswordHasher, new: NewUser) -> Result<User, AppError> {
        let username = RequestValidator::require("username", new.username)?;
        let password = RequestValidator::require("password", new.password)?;

        if Self::find_by_username(pool, &username).await?.is_found() {
            tracing::warn!(%username, "duplicate username rejected");
            return Err(AppError::Conflict(DUPLICATE_USERNAME.into()));
        }

        let digest = hasher.hash(password).await?;
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password) VALUES (?, ?) RETURNING id, username, password",
        )
        .bind(username)
        .bind(digest)
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::from_write(e, DUPLICATE_USERNAME))?;
        tracing::info!(id = user.id, username = %user.username, "user added");
        Ok(user)
    }

    /// Check a username/password pair. Unknown users and wrong passwords both yield `false`.
    pub async fn verify(pool: &SqlitePool, hasher: &PasswordHasher, creds: Credentials) -> Result<bool, AppError> {
        let (Some(username), Some(password)) = (creds.username, creds.password) else {
            return Ok(false);
        };
        let verified = match Self::find_by_username(pool, &username).await? {
            Lookup::Found(user) => hasher.verify(password, user.password).await?,
            Lookup::NotFound => false,
        };
        tracing::debug!(%username, verified, "password check");
        Ok(verified)
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, User>("SELECT id, username, password FROM users ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}
