//! Bookshelf: book and user CRUD over a single SQLite database.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::Lookup;
pub use routes::{app_router, book_routes, common_routes, user_routes};
pub use service::{BookService, PasswordHasher, UserService};
pub use state::AppState;
pub use store::connect;
