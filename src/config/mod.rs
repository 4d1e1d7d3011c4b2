//! Runtime settings: typed values and loading from the environment.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
