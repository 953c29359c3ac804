use crate::grade::{grade, GradeReport};
use crate::models::{AppState, Question};
use crate::session::Session;

/// Drives the widget through its `Loading → Rendered → Submitted` lifecycle.
pub struct App {
    state: AppState,
    questions: Vec<Question>,
    session: Session,
}

impl App {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let session = Session::new(questions.len());

        Self {
            state: AppState::Loading,
            questions,
            session,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn selection(&self, question: usize) -> Option<usize> {
        self.session.selection(question)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Marks the initial render as complete, enabling selection and submission.
    pub fn mark_rendered(&mut self) {
        if self.state == AppState::Loading {
            self.state = AppState::Rendered;
        }
    }

    /// Records a selection. Ignored before rendering, after submission, and
    /// for out-of-range indices.
    pub fn select_option(&mut self, question: usize, option: usize) {
        if self.state != AppState::Rendered {
            return;
        }

        let valid = self
            .questions
            .get(question)
            .is_some_and(|q| option < q.options.len());
        if valid {
            self.session.select(question, option);
        }
    }

    /// Grades the full collection in one synchronous pass. Returns `Some`
    /// exactly once; the machine is terminal afterwards.
    pub fn submit(&mut self) -> Option<GradeReport> {
        if self.state != AppState::Rendered {
            return None;
        }

        self.session.finalize();
        self.state = AppState::Submitted;
        Some(grade(&self.questions, &self.session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_questions() -> Vec<Question> {
        vec![
            Question {
                id: 1,
                question: "2+2?".to_string(),
                options: vec![
                    "3".to_string(),
                    "4".to_string(),
                    "5".to_string(),
                    "6".to_string(),
                ],
                answer: 1,
            },
            Question {
                id: 2,
                question: "1+1?".to_string(),
                options: vec!["2".to_string(), "3".to_string()],
                answer: 0,
            },
        ]
    }

    #[test]
    fn test_lifecycle_reaches_terminal_state() {
        let mut app = App::with_questions(two_questions());
        assert_eq!(app.state(), AppState::Loading);

        app.mark_rendered();
        assert_eq!(app.state(), AppState::Rendered);

        assert!(app.submit().is_some());
        assert_eq!(app.state(), AppState::Submitted);
    }

    #[test]
    fn test_selection_before_render_is_ignored() {
        let mut app = App::with_questions(two_questions());
        app.select_option(0, 1);
        assert_eq!(app.selection(0), None);
    }

    #[test]
    fn test_out_of_range_option_is_ignored() {
        let mut app = App::with_questions(two_questions());
        app.mark_rendered();
        app.select_option(1, 2);
        assert_eq!(app.selection(1), None);
    }

    #[test]
    fn test_submit_grades_current_selections() {
        let mut app = App::with_questions(two_questions());
        app.mark_rendered();
        app.select_option(0, 1);

        let report = app.submit().unwrap();
        assert_eq!(report.correct, 1);
        assert_eq!(report.incorrect, 1);
        assert_eq!(report.total(), 2);
    }

    #[test]
    fn test_submission_is_terminal() {
        let mut app = App::with_questions(two_questions());
        app.mark_rendered();
        app.select_option(0, 1);
        assert!(app.submit().is_some());

        // Neither a second submit nor a new selection has any effect.
        assert!(app.submit().is_none());
        app.select_option(0, 0);
        assert_eq!(app.selection(0), Some(1));
        assert_eq!(app.state(), AppState::Submitted);
    }
}
