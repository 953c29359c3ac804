use std::collections::HashSet;
use std::fmt;
use std::io;

use crate::models::Question;

/// Error loading a question collection.
#[derive(Debug)]
pub enum LoadError {
    /// The question store could not be read.
    Read(io::Error),
    /// The payload is not a JSON array of question records.
    Parse(serde_json::Error),
    /// A record violates the question invariants.
    Invalid { index: usize, reason: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read(e) => write!(f, "failed to read question store: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse question data: {}", e),
            LoadError::Invalid { index, reason } => {
                write!(f, "invalid question record at index {}: {}", index, reason)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Read(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::Invalid { .. } => None,
        }
    }
}

/// Parses a JSON payload into question records, rejecting any record whose
/// `answer` is out of range, whose `options` are empty, or whose `id` repeats.
///
/// An empty array is valid; the widget treats it as "no questions", not as
/// an error.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(json).map_err(LoadError::Parse)?;
    validate(&questions)?;
    Ok(questions)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_questions_from_json<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<Vec<Question>, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(LoadError::Read)?;
    parse_questions(&contents)
}

fn validate(questions: &[Question]) -> Result<(), LoadError> {
    let mut seen_ids = HashSet::new();

    for (index, question) in questions.iter().enumerate() {
        if question.options.is_empty() {
            return Err(LoadError::Invalid {
                index,
                reason: "options must not be empty".to_string(),
            });
        }
        if question.answer >= question.options.len() {
            return Err(LoadError::Invalid {
                index,
                reason: format!(
                    "answer index {} out of range for {} options",
                    question.answer,
                    question.options.len()
                ),
            });
        }
        if !seen_ids.insert(question.id) {
            return Err(LoadError::Invalid {
                index,
                reason: format!("duplicate id {}", question.id),
            });
        }
    }

    Ok(())
}
