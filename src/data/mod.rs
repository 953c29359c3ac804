mod loader;

#[cfg(not(target_arch = "wasm32"))]
pub use loader::load_questions_from_json;
pub use loader::{parse_questions, LoadError};
