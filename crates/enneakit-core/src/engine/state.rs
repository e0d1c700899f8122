//! The quiz-run aggregate. Value-semantic: engines take a state by value
//! and return a new one; nothing here performs I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::stage::Stage;
use crate::convergence::ConvergenceCheck;
use crate::error::Result;
use crate::probability::{InstinctProbabilities, TypeProbabilities};
use crate::questions::{Answer, Question};
use crate::results::{AttentionSummary, Results};
use crate::types::{Instinct, TypeId};

/// One audited answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: String,
    pub answer: Answer,
    pub answered_at: DateTime<Utc>,
}

/// Running sums for the two candidate wings of the fixed core type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingTally {
    pub core_type: TypeId,
    pub wing_a: TypeId,
    pub wing_b: TypeId,
    pub score_a: f64,
    pub score_b: f64,
    pub answered: u32,
}

impl WingTally {
    /// Start a tally for the core type's two adjacent wings.
    pub fn new(core_type: TypeId) -> Self {
        let (wing_a, wing_b) = core_type.wings();
        Self {
            core_type,
            wing_a,
            wing_b,
            score_a: 0.0,
            score_b: 0.0,
            answered: 0,
        }
    }

    pub fn add(&mut self, wing_type: TypeId, value: f64) {
        if wing_type == self.wing_a {
            self.score_a += value;
        } else if wing_type == self.wing_b {
            self.score_b += value;
        }
        self.answered += 1;
    }

    /// (wingA - wingB) / (wingA + wingB); 0 when nothing accumulated.
    /// In [-1, 1] by construction since scores are non-negative.
    pub fn balance(&self) -> f64 {
        let total = self.score_a + self.score_b;
        if total == 0.0 {
            0.0
        } else {
            (self.score_a - self.score_b) / total
        }
    }

    /// Heavier wing; ties go to the upper adjacent type by convention.
    pub fn dominant(&self) -> TypeId {
        if self.score_a > self.score_b {
            self.wing_a
        } else {
            self.wing_b
        }
    }
}

/// Queue of confused pairs awaiting forced-choice resolution. Pairs are
/// processed front-to-back, each pair's question set exhausted before the
/// next begins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForcedChoiceQueue {
    pub pending: Vec<(TypeId, TypeId)>,
    pub answered: u32,
}

/// Centered agreement sums for healthy/unhealthy framed questions
/// (integration-level interrupts and the merged engine's health block).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelTally {
    pub healthy: f64,
    pub unhealthy: f64,
    pub answered: u32,
}

/// One in-progress quiz run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizState {
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    pub stage: Stage,
    pub type_probs: TypeProbabilities,
    pub instinct_probs: InstinctProbabilities,
    /// Ids of every answered question across all pools.
    pub answered: BTreeSet<String>,
    /// Ordered audit trail; never replayed, never used for undo.
    pub history: Vec<AnswerRecord>,
    pub current_question: Option<Question>,
    /// Set when the typing stage stopped, for user-facing messaging.
    pub convergence: Option<ConvergenceCheck>,
    pub wing: Option<WingTally>,
    pub forced_choice: ForcedChoiceQueue,
    pub attention: AttentionSummary,
    pub integration: LevelTally,
    pub health: LevelTally,
    pub instinct_answered: u32,
    /// Next scenario to present (merged engine).
    pub scenario_index: usize,
    /// Ipsative rank totals per instinct (merged engine).
    pub ipsative_totals: BTreeMap<Instinct, f64>,
    pub results: Option<Results>,
}

impl QuizState {
    pub fn new() -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            stage: Stage::Intro,
            type_probs: TypeProbabilities::new(),
            instinct_probs: InstinctProbabilities::new(),
            answered: BTreeSet::new(),
            history: Vec::new(),
            current_question: None,
            convergence: None,
            wing: None,
            forced_choice: ForcedChoiceQueue::default(),
            attention: AttentionSummary::default(),
            integration: LevelTally::default(),
            health: LevelTally::default(),
            instinct_answered: 0,
            scenario_index: 0,
            ipsative_totals: BTreeMap::new(),
            results: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.stage.is_terminal() && self.current_question.is_none()
    }

    /// Mark a question answered and append it to the audit trail.
    pub fn record(&mut self, question: &Question, answer: Answer) {
        self.answered.insert(question.id().to_string());
        self.history.push(AnswerRecord {
            question_id: question.id().to_string(),
            answer,
            answered_at: Utc::now(),
        });
    }

    /// Move to a later stage. Illegal transitions are an engine bug.
    pub fn advance(&mut self, next: Stage) {
        debug_assert!(
            self.stage.can_transition(next),
            "illegal stage transition {:?} -> {next:?}",
            self.stage
        );
        self.stage = next;
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<QuizState> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}
