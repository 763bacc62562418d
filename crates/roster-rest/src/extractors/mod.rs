//! Custom Axum extractors.

mod json_body;
mod user_id_path;

pub use json_body::*;
pub use user_id_path::*;
