//! HTTP handlers for the book and user resources.

pub mod book;
pub mod user;
