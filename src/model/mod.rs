//! Row types, request payloads and list projections for both resources.

pub mod book;
pub mod user;

pub use book::{Book, BookPatch, BookSummary, NewBook};
pub use user::{Credentials, NewUser, User, UserListing};

/// Result of a by-key fetch. Callers match on it before mutating anything.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn from_option(row: Option<T>) -> Self {
        match row {
            Some(r) => Lookup::Found(r),
            None => Lookup::NotFound,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}
