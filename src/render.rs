use crate::models::Question;

/// Radio-group name for the question at `index`. Exclusivity is scoped to a
/// single question; groups across questions are independent.
pub fn group_name(index: usize) -> String {
    format!("question-{}", index)
}

/// Element id of the feedback region for the question at `index`.
pub fn feedback_id(index: usize) -> String {
    format!("feedback-{}", index)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceInput {
    pub value: usize,
    pub label: String,
}

/// Everything needed to render one question: a 1-based ordinal heading, the
/// exclusive-choice inputs in option order, and an initially hidden feedback
/// region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCard {
    pub heading: String,
    pub group: String,
    pub feedback_id: String,
    pub choices: Vec<ChoiceInput>,
}

/// Pure render pass: maps the collection, in order, to one card per question.
/// Attaching the cards to a live page is the caller's concern.
pub fn build_cards(questions: &[Question]) -> Vec<QuestionCard> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| QuestionCard {
            heading: format!("{}. {}", index + 1, question.question),
            group: group_name(index),
            feedback_id: feedback_id(index),
            choices: question
                .options
                .iter()
                .enumerate()
                .map(|(value, label)| ChoiceInput {
                    value,
                    label: label.clone(),
                })
                .collect(),
        })
        .collect()
}
