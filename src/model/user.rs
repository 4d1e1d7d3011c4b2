//! User row, request bodies and the listing shape.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored user row. `password` holds the bcrypt digest.
#[derive(Clone, Debug, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewUser {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /user/verify`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserListing {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserListing {
    pub fn from_user(user: User, include_hash: bool) -> Self {
        UserListing {
            id: user.id,
            username: user.username,
            password: include_hash.then_some(user.password),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_omits_hash_when_disabled() {
        let user = User {
            id: 3,
            username: "ada".into(),
            password: "$2b$04$abc".into(),
        };
        let hidden = serde_json::to_value(UserListing::from_user(user.clone(), false)).unwrap();
        assert_eq!(hidden, serde_json::json!({"id": 3, "username": "ada"}));
        let shown = serde_json::to_value(UserListing::from_user(user, true)).unwrap();
        assert_eq!(shown["password"], "$2b$04$abc");
    }
}
