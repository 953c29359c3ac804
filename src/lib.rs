//! # mcq-quiz
//!
//! A browser-resident multiple-choice quiz widget, with a companion seeder
//! for the question store.
//!
//! The core is target-independent: parse a JSON question payload, track
//! per-question selections in a [`Session`], and grade the full collection in
//! one synchronous pass. On `wasm32` the `ui` module mounts the widget onto a
//! hosting page; natively the `seed-questions` binary pads the question store
//! with placeholder records.
//!
//! ## Usage
//!
//! ```rust
//! use mcq_quiz::{parse_questions, App};
//!
//! # fn main() -> Result<(), mcq_quiz::LoadError> {
//! let payload = r#"[
//!     { "id": 1, "question": "2+2?", "options": ["3", "4", "5", "6"], "answer": 1 }
//! ]"#;
//!
//! let questions = parse_questions(payload)?;
//! let mut app = App::with_questions(questions);
//! app.mark_rendered();
//! app.select_option(0, 1);
//!
//! let report = app.submit().expect("first submit always grades");
//! assert_eq!(report.correct, 1);
//! # Ok(())
//! # }
//! ```

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod builder;
mod data;
mod grade;
mod models;
mod render;
mod session;
#[cfg(target_arch = "wasm32")]
pub mod ui;

use std::io;

pub use app::App;
#[cfg(not(target_arch = "wasm32"))]
pub use builder::{pad_questions, seed_question_store, QUESTION_STORE_PATH, TARGET_QUESTION_COUNT};
#[cfg(not(target_arch = "wasm32"))]
pub use data::load_questions_from_json;
pub use data::{parse_questions, LoadError};
pub use grade::{grade, GradeReport, Verdict};
pub use models::{AppState, Question};
pub use render::{build_cards, ChoiceInput, QuestionCard};
pub use session::Session;

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading questions from the store.
    Load(LoadError),
    /// IO error while rewriting the store.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}
