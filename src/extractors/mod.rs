//! Request extractors whose rejections use the service's error envelope.

pub mod id;
pub mod json;

pub use id::RecordId;
pub use json::{is_json_content_type, JsonBody};
