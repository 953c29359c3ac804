//! One-shot seeder for the question store: pads an existing collection to a
//! target count with placeholder records.

use std::fs;
use std::path::Path;

use rand::Rng;

use crate::data::load_questions_from_json;
use crate::models::Question;
use crate::QuizError;

/// Number of records the store is padded up to.
pub const TARGET_QUESTION_COUNT: usize = 50;

/// Question store location, relative to the site root.
pub const QUESTION_STORE_PATH: &str = "_data/questions.json";

/// Appends placeholder records until the collection holds `target` questions.
/// Existing records are left untouched; ids continue from the current maximum.
/// A collection already at or over `target` is returned unchanged.
pub fn pad_questions<R: Rng>(questions: &mut Vec<Question>, target: usize, rng: &mut R) {
    let mut next_id = questions.iter().map(|q| q.id).max().map_or(1, |id| id + 1);

    while questions.len() < target {
        questions.push(placeholder_question(next_id, rng));
        next_id += 1;
    }
}

fn placeholder_question<R: Rng>(id: u32, rng: &mut R) -> Question {
    Question {
        id,
        question: format!("Sample Question {}", id),
        options: vec![
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
            "Option D".to_string(),
        ],
        answer: rng.gen_range(0..4),
    }
}

/// Reads the store at `path`, pads it to `target` records, and writes the full
/// collection back pretty-printed. Nothing is written unless the store read
/// and parsed cleanly; a store already at `target` is left as is.
pub fn seed_question_store<P: AsRef<Path>>(path: P, target: usize) -> Result<(), QuizError> {
    let path = path.as_ref();
    let mut questions = load_questions_from_json(path)?;
    let existing = questions.len();

    if existing >= target {
        log::info!(
            "{} already holds {} questions, nothing to do",
            path.display(),
            existing
        );
        return Ok(());
    }

    pad_questions(&mut questions, target, &mut rand::thread_rng());

    let json = serde_json::to_string_pretty(&questions).map_err(|e| QuizError::Io(e.into()))?;
    fs::write(path, json).map_err(QuizError::Io)?;

    log::info!(
        "appended {} placeholder questions to {}",
        target - existing,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn existing_questions(count: usize) -> Vec<Question> {
        (1..=count)
            .map(|id| Question {
                id: id as u32,
                question: format!("Real question {}", id),
                options: vec!["a".to_string(), "b".to_string()],
                answer: 0,
            })
            .collect()
    }

    #[test]
    fn test_pads_to_exactly_target() {
        let mut questions = existing_questions(3);
        let mut rng = StdRng::seed_from_u64(7);

        pad_questions(&mut questions, 50, &mut rng);
        assert_eq!(questions.len(), 50);
    }

    #[test]
    fn test_existing_records_are_untouched() {
        let original = existing_questions(5);
        let mut questions = original.clone();
        let mut rng = StdRng::seed_from_u64(7);

        pad_questions(&mut questions, 50, &mut rng);
        assert_eq!(&questions[..5], &original[..]);
    }

    #[test]
    fn test_generated_ids_are_contiguous() {
        let mut questions = existing_questions(12);
        let mut rng = StdRng::seed_from_u64(7);

        pad_questions(&mut questions, 50, &mut rng);

        let generated_ids: Vec<u32> = questions[12..].iter().map(|q| q.id).collect();
        let expected: Vec<u32> = (13..=50).collect();
        assert_eq!(generated_ids, expected);
    }

    #[test]
    fn test_generated_records_satisfy_invariants() {
        let mut questions = existing_questions(0);
        let mut rng = StdRng::seed_from_u64(7);

        pad_questions(&mut questions, 50, &mut rng);

        for question in &questions {
            assert_eq!(question.options.len(), 4);
            assert!(question.answer < 4);
            assert_eq!(
                question.question,
                format!("Sample Question {}", question.id)
            );
        }
    }

    #[test]
    fn test_collection_at_or_over_target_is_unchanged() {
        for count in [50, 60] {
            let original = existing_questions(count);
            let mut questions = original.clone();
            let mut rng = StdRng::seed_from_u64(7);

            pad_questions(&mut questions, 50, &mut rng);
            assert_eq!(questions, original);
        }
    }

    #[test]
    fn test_padding_is_deterministic_for_a_fixed_seed() {
        let mut first = existing_questions(2);
        let mut second = existing_questions(2);

        pad_questions(&mut first, 50, &mut StdRng::seed_from_u64(42));
        pad_questions(&mut second, 50, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
