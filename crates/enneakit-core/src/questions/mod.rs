//! Question model and the static, hand-authored question pools.
//!
//! Questions are a tagged union with a globally unique `id` per variant, so
//! answer dispatch is exhaustive and the answered-set can be tracked across
//! every pool uniformly.

pub mod forced_choice;
pub mod health;
pub mod instinct;
pub mod interrupts;
pub mod refinement;
pub mod scenario;
pub mod screening;
pub mod wing;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Instinct, TypeId};

/// Which side of a forced-choice pair was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceSide {
    A,
    B,
}

/// Healthy vs unhealthy framing for level-of-development questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framing {
    Healthy,
    Unhealthy,
}

/// One option of a forced-choice pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForcedOption {
    pub text: String,
    pub type_id: TypeId,
}

/// One rankable option in a screening scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOption {
    pub text: String,
    pub type_scores: BTreeMap<TypeId, f64>,
}

/// One rankable paragraph in the ipsative instinct stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphOption {
    pub text: String,
    pub instinct: Instinct,
}

/// A quiz question. Every variant carries a globally unique id and the
/// scoring contract specific to its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    /// Broad Likert question scoring several types at once.
    Screening {
        id: String,
        text: String,
        type_scores: BTreeMap<TypeId, f64>,
    },
    /// Focused Likert question for the refinement phase.
    Core {
        id: String,
        text: String,
        type_scores: BTreeMap<TypeId, f64>,
    },
    /// Agree/disagree statement separating exactly two types.
    Differentiator {
        id: String,
        text: String,
        positive: TypeId,
        negative: TypeId,
        weight: f64,
    },
    /// Likert question accumulating evidence toward one wing of a core type.
    Wing {
        id: String,
        text: String,
        core_type: TypeId,
        wing_type: TypeId,
    },
    /// Direct A/B disambiguation between two commonly confused types.
    ForcedChoice {
        id: String,
        option_a: ForcedOption,
        option_b: ForcedOption,
    },
    /// Unidirectional resonance statement for one or more instincts.
    Instinct {
        id: String,
        text: String,
        instinct_scores: BTreeMap<Instinct, f64>,
    },
    /// Interrupt with a single correct Likert answer; scores nothing.
    AttentionCheck {
        id: String,
        text: String,
        expected: u8,
    },
    /// Interrupt probing level of development; scores nothing toward types.
    IntegrationLevel {
        id: String,
        text: String,
        framing: Framing,
    },
    /// Forced-ranking scenario for the merged engine's screening stage.
    Scenario {
        id: String,
        prompt: String,
        options: Vec<ScenarioOption>,
    },
    /// Ipsative paragraph-ranking set for the merged engine's instinct stage.
    InstinctParagraph { id: String, options: Vec<ParagraphOption> },
    /// Likert question for the merged engine's health-level block.
    Health {
        id: String,
        text: String,
        framing: Framing,
    },
}

impl Question {
    pub fn id(&self) -> &str {
        match self {
            Question::Screening { id, .. }
            | Question::Core { id, .. }
            | Question::Differentiator { id, .. }
            | Question::Wing { id, .. }
            | Question::ForcedChoice { id, .. }
            | Question::Instinct { id, .. }
            | Question::AttentionCheck { id, .. }
            | Question::IntegrationLevel { id, .. }
            | Question::Scenario { id, .. }
            | Question::InstinctParagraph { id, .. }
            | Question::Health { id, .. } => id,
        }
    }

    /// Per-type score weights for variants that carry them. Differentiators
    /// expand to a +/- pair; non-scoring variants return `None`.
    pub fn type_scores(&self) -> Option<BTreeMap<TypeId, f64>> {
        match self {
            Question::Screening { type_scores, .. } | Question::Core { type_scores, .. } => {
                Some(type_scores.clone())
            }
            Question::Differentiator {
                positive,
                negative,
                weight,
                ..
            } => {
                let mut map = BTreeMap::new();
                map.insert(*positive, *weight);
                map.insert(*negative, -*weight);
                Some(map)
            }
            _ => None,
        }
    }
}

/// An answer to the current question. Shape must match the question kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// 1 = strongly disagree .. 5 = strongly agree.
    Likert(u8),
    /// Pick of a forced-choice side.
    Choice(ChoiceSide),
    /// Option indices ordered best-first (scenario and paragraph ranking).
    Ranking(Vec<usize>),
}

/// Every question in every pool, for validation and tooling.
pub fn all_questions() -> Vec<Question> {
    let mut all = Vec::new();
    all.extend(screening::pool());
    all.extend(refinement::core_pool());
    all.extend(refinement::differentiator_pool());
    all.extend(wing::pool());
    all.extend(forced_choice::pool());
    all.extend(instinct::pool());
    all.extend(instinct::paragraph_sets());
    all.extend(interrupts::attention_pool());
    all.extend(interrupts::integration_pool());
    all.extend(scenario::pool());
    all.extend(health::pool());
    all
}

/// A pool-content defect found by [`validate_pools`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PoolDefect {
    DuplicateId { id: String },
    MissingWingCoverage { type_number: u8 },
    MissingForcedChoicePair { a: u8, b: u8 },
}

/// Check the static pools for content defects: duplicate ids, types without
/// wing questions, confused pairs without forced-choice questions. These are
/// authoring mistakes, not runtime errors.
pub fn validate_pools() -> Vec<PoolDefect> {
    let mut defects = Vec::new();
    let mut seen = BTreeSet::new();
    for q in all_questions() {
        if !seen.insert(q.id().to_string()) {
            defects.push(PoolDefect::DuplicateId {
                id: q.id().to_string(),
            });
        }
    }
    for t in TypeId::ALL {
        if wing::for_type(t).is_empty() {
            defects.push(PoolDefect::MissingWingCoverage {
                type_number: t.number(),
            });
        }
    }
    for (a, b) in crate::types::CONFUSED_PAIRS {
        if forced_choice::for_pair(a, b).is_empty() {
            defects.push(PoolDefect::MissingForcedChoicePair {
                a: a.number(),
                b: b.number(),
            });
        }
    }
    defects
}
