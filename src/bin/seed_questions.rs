use clap::Parser;
use mcq_quiz::{seed_question_store, QUESTION_STORE_PATH, TARGET_QUESTION_COUNT};

/// Pad the question store with placeholder records.
///
/// Reads `_data/questions.json`, appends generated records until the store
/// holds 50 questions, and writes the full collection back. A store already
/// at the target is left unchanged.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() {
    pretty_env_logger::init();
    Args::parse();

    if let Err(e) = seed_question_store(QUESTION_STORE_PATH, TARGET_QUESTION_COUNT) {
        eprintln!("Error seeding questions: {}", e);
        std::process::exit(1);
    }
}
