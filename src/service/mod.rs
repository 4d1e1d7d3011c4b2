//! Book and user operations over the SQLite pool.

mod book;
mod password;
mod user;
mod validation;
pub use book::{BookService, DUPLICATE_TITLE};
pub use password::PasswordHasher;
pub use user::{UserService, DUPLICATE_USERNAME};
pub use validation::RequestValidator;
