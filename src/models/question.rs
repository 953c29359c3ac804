use serde::{Deserialize, Serialize};

/// One quiz item: a prompt, its ordered options, and the index of the
/// correct option.
///
/// Records coming from a store or an embedded payload are validated by
/// [`crate::parse_questions`]: `answer` indexes into `options`, `options` is
/// non-empty, and `id` is unique within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub answer: usize,
}
