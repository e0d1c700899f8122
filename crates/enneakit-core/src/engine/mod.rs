//! Orchestration engines: the finite state machines that sequence quiz
//! stages, dispatch answers to the right sub-processor, and assemble the
//! final results.
//!
//! Two engines share the same contract but compose stages differently:
//! [`AdaptiveEngine`] (Likert screening with interleaved interrupts) and
//! [`MergedEngine`] (ranking scenarios, ipsative instincts, health block).

pub mod adaptive;
pub mod merged;
pub mod stage;
pub mod state;

pub use adaptive::AdaptiveEngine;
pub use merged::MergedEngine;
pub use stage::Stage;
pub use state::{AnswerRecord, ForcedChoiceQueue, LevelTally, QuizState, WingTally};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::convergence::ConvergenceConfig;
use crate::error::EngineError;
use crate::questions::{Answer, Question};
use crate::results::{self, HealthAssessment, SynthesisInput};
use crate::selector::Phase;
use crate::types::{is_confused_pair, TypeId};

/// Raw-score boost applied to the chosen type (and penalty to the unchosen)
/// by one forced-choice answer. Far larger than a Likert contribution: a
/// direct A/B pick is stronger evidence than an agreement rating.
pub const FORCED_CHOICE_DELTA: f64 = 4.0;

/// Tunables for stage sequencing. Interrupt positions are configuration, not
/// code, so a changed pool length is a config edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub convergence: ConvergenceConfig,
    /// Type-stage answer counts after which an attention check is inserted.
    pub attention_positions: Vec<u32>,
    /// Instinct-stage answer counts after which an integration-level
    /// question is inserted.
    pub integration_positions: Vec<u32>,
    /// Probability gap under which two confused types trigger forced choice.
    pub confusion_gap: f64,
    /// Minimum wing questions before the wing is fixed.
    pub min_wing_questions: u32,
    /// Instinct stage may stop once converged and past this floor.
    pub min_instinct_questions: u32,
    /// Instinct margin treated as converged.
    pub instinct_margin_threshold: f64,
    /// Weight multiplier for scenario-stage contributions (merged engine).
    pub scenario_weight: f64,
    /// Typing answers before the merged engine considers forced choice.
    pub min_questions_for_forced_choice: u32,
}

impl EngineConfig {
    /// Defaults for the original adaptive engine.
    pub fn adaptive() -> Self {
        Self {
            convergence: ConvergenceConfig::default(),
            attention_positions: vec![7, 14],
            integration_positions: vec![2, 5, 8, 11],
            confusion_gap: 0.15,
            min_wing_questions: 6,
            min_instinct_questions: 10,
            instinct_margin_threshold: 0.15,
            scenario_weight: 1.0,
            min_questions_for_forced_choice: u32::MAX,
        }
    }

    /// Defaults for the merged engine: scenario screening at reduced
    /// weight, shorter wing stage, forced choice from a question floor.
    pub fn merged() -> Self {
        Self {
            attention_positions: Vec::new(),
            integration_positions: Vec::new(),
            min_wing_questions: 4,
            scenario_weight: 0.8,
            min_questions_for_forced_choice: 8,
            ..Self::adaptive()
        }
    }
}

/// Read-only progress report for UI display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub stage: Stage,
    /// Typing-stage phase, when applicable.
    pub phase: Option<Phase>,
    pub percent_complete: f64,
    pub estimated_remaining: u32,
    pub message: String,
}

/// One row of the live type ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRanking {
    pub type_id: TypeId,
    pub probability: f64,
}

/// Common contract of both orchestration engines. Every method is a pure
/// value transition; abandoning a run means dropping the state.
pub trait QuizEngine {
    /// Fresh state at the intro stage, uniform priors, nothing presented.
    fn initial_state(&self) -> QuizState {
        QuizState::new()
    }

    /// Leave the intro stage and present the first question.
    fn start(&self, state: QuizState) -> QuizState;

    /// Single entry point for answers; shape must match the current
    /// question kind.
    fn process_answer(&self, state: QuizState, answer: Answer) -> Result<QuizState, EngineError>;

    /// UI-facing progress summary.
    fn progress(&self, state: &QuizState) -> Progress;

    /// Current type ranking, descending.
    fn rankings(&self, state: &QuizState) -> Vec<TypeRanking> {
        state
            .type_probs
            .top_types(9)
            .into_iter()
            .map(|(type_id, probability)| TypeRanking {
                type_id,
                probability,
            })
            .collect()
    }
}

/// Validate a Likert answer for the given question.
pub(crate) fn likert_value(question: &Question, answer: &Answer) -> Result<u8, EngineError> {
    match answer {
        Answer::Likert(v) if (1..=5).contains(v) => Ok(*v),
        Answer::Likert(v) => Err(EngineError::LikertOutOfRange { value: *v }),
        _ => Err(EngineError::AnswerShape {
            question_id: question.id().to_string(),
            expected: "a 1-5 Likert rating",
        }),
    }
}

/// Validate a ranking answer as a permutation of 0..option_count.
pub(crate) fn ranking_value(
    question: &Question,
    answer: &Answer,
    option_count: usize,
) -> Result<Vec<usize>, EngineError> {
    let Answer::Ranking(order) = answer else {
        return Err(EngineError::AnswerShape {
            question_id: question.id().to_string(),
            expected: "a best-first ranking of the options",
        });
    };
    let mut seen = vec![false; option_count];
    let valid = order.len() == option_count
        && order.iter().all(|&i| {
            if i < option_count && !seen[i] {
                seen[i] = true;
                true
            } else {
                false
            }
        });
    if valid {
        Ok(order.clone())
    } else {
        Err(EngineError::InvalidRanking {
            question_id: question.id().to_string(),
            option_count,
        })
    }
}

/// Confused pairs among the top-3 candidates whose gap is under the
/// threshold, in ranking order.
pub(crate) fn confused_pairs_in_top3(
    state: &QuizState,
    confusion_gap: f64,
) -> Vec<(TypeId, TypeId)> {
    let top = state.type_probs.top_types(3);
    let mut pairs = Vec::new();
    for i in 0..top.len() {
        for j in (i + 1)..top.len() {
            let (a, pa) = top[i];
            let (b, pb) = top[j];
            if (pa - pb).abs() < confusion_gap && is_confused_pair(a, b) {
                pairs.push(if a <= b { (a, b) } else { (b, a) });
            }
        }
    }
    pairs
}

/// Assemble final results and move the state to its terminal stage.
pub(crate) fn finalize(mut state: QuizState, health: HealthAssessment) -> QuizState {
    let (wing_type, wing_balance) = match &state.wing {
        Some(tally) if tally.answered > 0 => (tally.dominant(), tally.balance()),
        // Defensive fallback for an incomplete wing pool: balanced default
        // wing, upper adjacent type by convention.
        _ => (state.type_probs.leading_type().0.wings().1, 0.0),
    };
    let results = results::synthesize(&SynthesisInput {
        session_id: &state.session_id,
        type_probs: &state.type_probs,
        instinct_probs: &state.instinct_probs,
        wing_type,
        wing_balance,
        health,
        attention: state.attention,
        completed_at: Utc::now(),
    });
    state.results = Some(results);
    state.advance(Stage::Results);
    state.current_question = None;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probability::TypeProbabilities;
    use std::collections::BTreeMap;

    #[test]
    fn test_likert_validation() {
        let q = crate::questions::screening::pool().remove(0);
        assert_eq!(likert_value(&q, &Answer::Likert(3)).unwrap(), 3);
        assert!(likert_value(&q, &Answer::Likert(0)).is_err());
        assert!(likert_value(&q, &Answer::Likert(6)).is_err());
        assert!(likert_value(&q, &Answer::Ranking(vec![0])).is_err());
    }

    #[test]
    fn test_ranking_validation_requires_permutation() {
        let q = crate::questions::scenario::pool().remove(0);
        assert!(ranking_value(&q, &Answer::Ranking(vec![2, 0, 1]), 3).is_ok());
        assert!(ranking_value(&q, &Answer::Ranking(vec![0, 0, 1]), 3).is_err());
        assert!(ranking_value(&q, &Answer::Ranking(vec![0, 1]), 3).is_err());
        assert!(ranking_value(&q, &Answer::Ranking(vec![0, 1, 3]), 3).is_err());
        assert!(ranking_value(&q, &Answer::Likert(3), 3).is_err());
    }

    #[test]
    fn test_confused_pair_detection() {
        let mut state = QuizState::new();
        // Near-tied 5 and 9: curated pair, small gap.
        let deltas: BTreeMap<_, _> = [
            (crate::types::TypeId::Investigator, 8.0),
            (crate::types::TypeId::Peacemaker, 7.9),
        ]
        .iter()
        .cloned()
        .collect();
        state.type_probs = TypeProbabilities::new().apply_raw_deltas(&deltas, false);
        let pairs = confused_pairs_in_top3(&state, 0.15);
        assert_eq!(
            pairs,
            vec![(
                crate::types::TypeId::Investigator,
                crate::types::TypeId::Peacemaker
            )]
        );
    }

    #[test]
    fn test_finalize_without_wing_uses_fallback() {
        let mut state = QuizState::new();
        state.stage = Stage::Instinct;
        let deltas: BTreeMap<_, _> = [(crate::types::TypeId::Enthusiast, 10.0)]
            .iter()
            .cloned()
            .collect();
        state.type_probs = TypeProbabilities::new().apply_raw_deltas(&deltas, false);
        let done = finalize(state, HealthAssessment::classify(0.0, 0.0, 0));
        let results = done.results.unwrap();
        // Upper adjacent wing of 7 is 8.
        assert_eq!(results.wing.code, "7w8");
        assert_eq!(results.wing.balance, 0.0);
        assert!(done.stage.is_terminal());
    }
}
