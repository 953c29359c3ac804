/// Per-page-load record of the user's selections and submission status.
///
/// One slot per question, `None` meaning unselected. Once finalized the
/// session is read-only; further selections are ignored.
#[derive(Debug, Clone)]
pub struct Session {
    selections: Vec<Option<usize>>,
    submitted: bool,
}

impl Session {
    pub fn new(question_count: usize) -> Self {
        Self {
            selections: vec![None; question_count],
            submitted: false,
        }
    }

    pub fn select(&mut self, question: usize, option: usize) {
        if self.submitted || question >= self.selections.len() {
            return;
        }
        self.selections[question] = Some(option);
    }

    pub fn selection(&self, question: usize) -> Option<usize> {
        self.selections.get(question).copied().flatten()
    }

    pub fn selections(&self) -> &[Option<usize>] {
        &self.selections
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn finalize(&mut self) {
        self.submitted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unselected() {
        let session = Session::new(3);
        assert_eq!(session.selections(), &[None, None, None]);
        assert!(!session.is_submitted());
    }

    #[test]
    fn test_reselect_replaces_previous_choice() {
        let mut session = Session::new(2);
        session.select(0, 1);
        session.select(0, 3);
        assert_eq!(session.selection(0), Some(3));
        assert_eq!(session.selection(1), None);
    }

    #[test]
    fn test_out_of_range_question_ignored() {
        let mut session = Session::new(1);
        session.select(5, 0);
        assert_eq!(session.selections(), &[None]);
    }

    #[test]
    fn test_finalized_session_is_read_only() {
        let mut session = Session::new(2);
        session.select(0, 2);
        session.finalize();
        session.select(0, 0);
        session.select(1, 1);
        assert_eq!(session.selection(0), Some(2));
        assert_eq!(session.selection(1), None);
    }
}
