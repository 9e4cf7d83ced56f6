pub mod json;
pub mod text;

pub use json::metrics_to_json;
pub use text::metrics_to_text;
