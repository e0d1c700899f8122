//! Error types for enneakit-core.
//!
//! The engine itself is closed-form arithmetic with no failure modes; these
//! errors only cover boundary misuse (wrong answer shape, answering a
//! finished quiz) and serialization at the persistence edge.

use thiserror::Error;

/// Top-level error type for enneakit-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Engine boundary misuse
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from driving a quiz engine incorrectly.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The answer's shape doesn't match the current question kind.
    #[error("Answer shape mismatch: question '{question_id}' expects {expected}")]
    AnswerShape {
        question_id: String,
        expected: &'static str,
    },

    /// A ranking answer must be a permutation of the option indices.
    #[error("Invalid ranking for '{question_id}': expected a permutation of 0..{option_count}")]
    InvalidRanking {
        question_id: String,
        option_count: usize,
    },

    /// A Likert answer must be in 1..=5.
    #[error("Likert answer {value} out of range (expected 1-5)")]
    LikertOutOfRange { value: u8 },

    /// No question is currently presented (quiz not started, or between stages).
    #[error("No current question to answer")]
    NoCurrentQuestion,

    /// The quiz has already produced its final results.
    #[error("Quiz is finished; no further answers accepted")]
    QuizFinished,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
