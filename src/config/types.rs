//! Service settings with their defaults.

use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://bookshelf.sqlite";
pub const DEFAULT_LOG_FILTER: &str = "bookshelf=info,tower_http=info";

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub db_max_connections: u32,
    /// bcrypt work factor, 4..=31.
    pub bcrypt_cost: u32,
    pub max_body_bytes: usize,
    /// Whether `GET /user/get` echoes the stored digest.
    pub user_list_include_hash: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            db_max_connections: 5,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            max_body_bytes: 64 * 1024,
            user_list_include_hash: true,
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}
