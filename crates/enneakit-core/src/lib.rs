//! # Enneakit Core Library
//!
//! Core engine for an adaptive Enneagram self-assessment: a Bayesian-style
//! probability model over the nine types, an information-gain question
//! selector, a multi-criterion convergence checker, and the orchestration
//! state machines that sequence screening, refinement, forced-choice
//! disambiguation, wing determination, instinct ranking, and health
//! assessment.
//!
//! ## Architecture
//!
//! - **Probability Model**: softmax-normalized categorical distributions
//!   over types and instincts; every update returns a fresh value
//! - **Question Selector**: expected-entropy-reduction ranking over the
//!   phase-appropriate static pool
//! - **Convergence Checker**: ordered stopping rule (hard cap, floor, high
//!   confidence, large margin)
//! - **Orchestration Engines**: [`AdaptiveEngine`] and [`MergedEngine`],
//!   pure `(state, answer) -> state` transitions with no I/O
//!
//! The surrounding application owns persistence and rendering; the engine's
//! only contract is the in-process [`QuizEngine`] trait plus lossless JSON
//! round-trips of [`QuizState`] and [`Results`].

pub mod content;
pub mod convergence;
pub mod engine;
pub mod error;
pub mod probability;
pub mod questions;
pub mod results;
pub mod selector;
pub mod types;

pub use convergence::{ConvergenceCheck, ConvergenceConfig, ConvergenceReason};
pub use engine::{
    AdaptiveEngine, EngineConfig, MergedEngine, Progress, QuizEngine, QuizState, Stage,
    TypeRanking,
};
pub use error::{CoreError, EngineError, Result};
pub use probability::{InstinctProbabilities, TypeProbabilities};
pub use questions::{Answer, ChoiceSide, Question};
pub use results::{Results, WingResult};
pub use selector::Phase;
pub use types::{Center, Instinct, TypeId};
