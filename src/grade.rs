use crate::models::Question;
use crate::session::Session;

/// Outcome for a single question after grading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { correct_option: String },
    Skipped { correct_option: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }

    /// Feedback line shown next to the question.
    pub fn feedback(&self) -> String {
        match self {
            Verdict::Correct => "Correct!".to_string(),
            Verdict::Incorrect { correct_option } => {
                format!("Incorrect. Correct answer: {}", correct_option)
            }
            Verdict::Skipped { correct_option } => {
                format!("Skipped. Correct answer: {}", correct_option)
            }
        }
    }
}

/// Result of grading the full collection in one pass.
#[derive(Debug, Clone)]
pub struct GradeReport {
    pub verdicts: Vec<Verdict>,
    pub correct: usize,
    pub incorrect: usize,
}

impl GradeReport {
    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }
}

/// Grades every question, in collection order, against the session's
/// selections.
pub fn grade(questions: &[Question], session: &Session) -> GradeReport {
    let mut verdicts = Vec::with_capacity(questions.len());
    let mut correct = 0;

    for (question, selection) in questions.iter().zip(session.selections()) {
        let verdict = match selection {
            Some(choice) if *choice == question.answer => {
                correct += 1;
                Verdict::Correct
            }
            Some(_) => Verdict::Incorrect {
                correct_option: question.options[question.answer].clone(),
            },
            // Unanswered counts as incorrect.
            None => Verdict::Skipped {
                correct_option: question.options[question.answer].clone(),
            },
        };
        verdicts.push(verdict);
    }

    let incorrect = questions.len() - correct;

    GradeReport {
        verdicts,
        correct,
        incorrect,
    }
}
