//! Information-gain question selection.
//!
//! For each candidate question we simulate the answers the still-viable
//! types would plausibly give, run a trial probability update per simulated
//! answer, and measure the expected entropy reduction. The trial updates are
//! discarded -- this is why the probability model must be value-semantic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::probability::TypeProbabilities;
use crate::questions::Question;

/// Probability floor below which a type is no longer a live hypothesis.
pub const VIABLE_THRESHOLD: f64 = 0.05;

/// Types below this probability are ignored when simulating answers.
const SIMULATION_FLOOR: f64 = 0.02;

/// Current phase of the type-determination stage. Pure function of the
/// probability state, re-evaluated every turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Screening,
    Refinement,
    Differentiation,
}

pub fn classify_phase(probs: &TypeProbabilities) -> Phase {
    let viable = probs.viable_candidates(VIABLE_THRESHOLD).len();
    let entropy = probs.entropy();
    if viable >= 6 || entropy > 0.7 {
        Phase::Screening
    } else if viable <= 3 && entropy < 0.5 {
        Phase::Differentiation
    } else {
        Phase::Refinement
    }
}

/// Likert answer a type's population would most likely give, from the
/// question's weight for that type: strong positive lands near 4.5,
/// unscored near 3, negative near 2.
fn expected_answer(weight: f64) -> f64 {
    (3.0 + 0.75 * weight).clamp(1.0, 5.0)
}

/// Mass distribution over answers 1-5 given the current type probabilities.
/// Each viable type votes for its expected answer with a +/-1 smear; spill
/// past the scale edges folds back onto the edge value.
fn simulated_answer_distribution(
    probs: &TypeProbabilities,
    scores: &std::collections::BTreeMap<crate::types::TypeId, f64>,
) -> [f64; 5] {
    let mut dist = [0.0; 5];
    let mut add = |answer: i32, mass: f64, dist: &mut [f64; 5]| {
        let idx = answer.clamp(1, 5) as usize - 1;
        dist[idx] += mass;
    };
    for (&t, &p) in &probs.probabilities {
        if p < SIMULATION_FLOOR {
            continue;
        }
        let weight = scores.get(&t).copied().unwrap_or(0.0);
        let center = expected_answer(weight).round() as i32;
        add(center, p * 0.5, &mut dist);
        add(center - 1, p * 0.25, &mut dist);
        add(center + 1, p * 0.25, &mut dist);
    }
    let total: f64 = dist.iter().sum();
    if total > 0.0 {
        for d in &mut dist {
            *d /= total;
        }
    }
    dist
}

/// Expected information gain from asking this question: current entropy
/// minus the answer-weighted entropy after a non-mutating trial update.
pub fn information_gain(probs: &TypeProbabilities, question: &Question) -> f64 {
    let Some(scores) = question.type_scores() else {
        return 0.0;
    };
    let dist = simulated_answer_distribution(probs, &scores);
    let current = probs.entropy();
    let mut expected = 0.0;
    for (i, &mass) in dist.iter().enumerate() {
        if mass <= 0.0 {
            continue;
        }
        let trial = probs.update(&scores, (i + 1) as u8);
        expected += mass * trial.entropy();
    }
    (current - expected).max(0.0)
}

/// Fraction of the question's scored types that are still live hypotheses.
fn relevance(probs: &TypeProbabilities, question: &Question) -> f64 {
    let Some(scores) = question.type_scores() else {
        return 0.0;
    };
    if scores.is_empty() {
        return 0.0;
    }
    let viable: BTreeSet<_> = probs
        .viable_candidates(VIABLE_THRESHOLD)
        .into_iter()
        .collect();
    let hits = scores.keys().filter(|t| viable.contains(t)).count();
    hits as f64 / scores.len() as f64
}

/// Pick the unanswered question with the best relevance-weighted expected
/// information gain. Ties break toward pool order. `None` means the pool is
/// exhausted -- the caller treats that as a stage-completion signal.
pub fn select_next<'a>(
    probs: &TypeProbabilities,
    pool: &'a [Question],
    answered: &BTreeSet<String>,
) -> Option<&'a Question> {
    let mut best: Option<(&Question, f64)> = None;
    for question in pool {
        if answered.contains(question.id()) {
            continue;
        }
        let gain = information_gain(probs, question);
        let score = gain * (0.5 + 0.5 * relevance(probs, question));
        match best {
            Some((_, s)) if score <= s => {}
            _ => best = Some((question, score)),
        }
    }
    best.map(|(q, _)| q)
}
