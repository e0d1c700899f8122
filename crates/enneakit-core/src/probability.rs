//! Categorical probability model over types and instincts.
//!
//! Raw evidence accumulates as signed scores; probabilities are derived via
//! a temperature-scaled softmax. Every update returns a fresh value -- the
//! question selector relies on being able to run hypothetical updates and
//! discard them, so nothing here mutates in place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{Instinct, TypeId};

/// Softmax temperature for decision-making over types. Lower = sharper.
pub const DECISION_TEMPERATURE: f64 = 2.0;

/// Softmax temperature for instinct scoring.
pub const INSTINCT_TEMPERATURE: f64 = 1.5;

/// Softmax temperature for display-only resonance percentages. Deliberately
/// high so secondary types show meaningful shares in the final report.
pub const RESONANCE_TEMPERATURE: f64 = 8.0;

/// Neutral midpoint of the 1-5 Likert scale.
const LIKERT_NEUTRAL: f64 = 3.0;

/// Temperature-scaled softmax with max-subtraction for numeric stability.
/// Shift-invariant: adding a constant to every raw score leaves the result
/// unchanged.
fn softmax<K: Ord + Copy>(raw: &BTreeMap<K, f64>, temperature: f64) -> BTreeMap<K, f64> {
    let max = raw.values().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: BTreeMap<K, f64> = raw
        .iter()
        .map(|(&k, &v)| (k, ((v - max) / temperature).exp()))
        .collect();
    let total: f64 = exps.values().sum();
    exps.into_iter().map(|(k, e)| (k, e / total)).collect()
}

/// Shannon entropy of a probability map, normalized to [0, 1] by the
/// entropy of the uniform distribution over the same support.
fn normalized_entropy<K: Ord + Copy>(probs: &BTreeMap<K, f64>) -> f64 {
    let n = probs.len();
    if n <= 1 {
        return 0.0;
    }
    let h: f64 = probs
        .values()
        .filter(|&&p| p > 0.0)
        .map(|&p| -p * p.log2())
        .sum();
    h / (n as f64).log2()
}

/// Probability distribution over the nine types, with the raw accumulated
/// evidence it was derived from and the number of scoring questions answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeProbabilities {
    pub probabilities: BTreeMap<TypeId, f64>,
    pub raw_scores: BTreeMap<TypeId, f64>,
    pub question_count: u32,
}

impl TypeProbabilities {
    /// Uniform prior: 1/9 each, zero raw scores, zero questions.
    pub fn new() -> Self {
        let probabilities = TypeId::ALL.iter().map(|&t| (t, 1.0 / 9.0)).collect();
        let raw_scores = TypeId::ALL.iter().map(|&t| (t, 0.0)).collect();
        Self {
            probabilities,
            raw_scores,
            question_count: 0,
        }
    }

    /// Apply a Likert answer (1-5) against a question's per-type weights.
    ///
    /// The answer is centered on the neutral midpoint, so a 3 contributes
    /// nothing and the sign of the contribution follows agreement vs
    /// disagreement. An empty score map leaves the distribution unchanged
    /// but still counts the question.
    pub fn update(&self, type_scores: &BTreeMap<TypeId, f64>, answer: u8) -> Self {
        let weight = f64::from(answer) - LIKERT_NEUTRAL;
        let deltas: BTreeMap<TypeId, f64> =
            type_scores.iter().map(|(&t, &s)| (t, s * weight)).collect();
        self.apply_raw_deltas(&deltas, true)
    }

    /// Apply pre-weighted raw-score deltas directly. Used by the scenario
    /// stage (bulk contributions at a reduced multiplier) and the
    /// forced-choice stage (fixed +/- boosts).
    pub fn apply_raw_deltas(&self, deltas: &BTreeMap<TypeId, f64>, count_question: bool) -> Self {
        let mut raw_scores = self.raw_scores.clone();
        for (&t, &d) in deltas {
            *raw_scores.entry(t).or_insert(0.0) += d;
        }
        let probabilities = softmax(&raw_scores, DECISION_TEMPERATURE);
        Self {
            probabilities,
            raw_scores,
            question_count: self.question_count + u32::from(count_question),
        }
    }

    /// Leading type and its probability. Ties break toward the
    /// lower-numbered type.
    pub fn leading_type(&self) -> (TypeId, f64) {
        self.top_types(1)[0]
    }

    /// Top `n` types by descending probability, enumeration-order tie-break.
    pub fn top_types(&self, n: usize) -> Vec<(TypeId, f64)> {
        let mut ranked: Vec<(TypeId, f64)> = TypeId::ALL
            .iter()
            .map(|&t| (t, self.probabilities[&t]))
            .collect();
        // Stable sort keeps numeric order among equals.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(n);
        ranked
    }

    /// Margin of the leader over the runner-up.
    pub fn margin(&self) -> f64 {
        let top = self.top_types(2);
        top[0].1 - top[1].1
    }

    /// Composite confidence: rewards both absolute certainty and separation
    /// from the runner-up. Capped at 1.
    pub fn confidence(&self) -> f64 {
        let top = self.top_types(2);
        (top[0].1 * (1.0 + (top[0].1 - top[1].1))).min(1.0)
    }

    /// Normalized Shannon entropy in [0, 1]; 1 = fully uniform.
    pub fn entropy(&self) -> f64 {
        normalized_entropy(&self.probabilities)
    }

    /// Types above the probability threshold, sorted descending.
    pub fn viable_candidates(&self, threshold: f64) -> Vec<TypeId> {
        self.top_types(9)
            .into_iter()
            .filter(|&(_, p)| p > threshold)
            .map(|(t, _)| t)
            .collect()
    }

    /// True when two types score within `threshold` of each other.
    pub fn are_confused(&self, a: TypeId, b: TypeId, threshold: f64) -> bool {
        (self.probabilities[&a] - self.probabilities[&b]).abs() < threshold
    }

    /// Display-only resonance distribution: a flatter softmax over the same
    /// raw scores, rounded to integer percentages that sum to exactly 100
    /// (the top entry absorbs the rounding remainder).
    pub fn resonance_distribution(&self) -> BTreeMap<TypeId, u8> {
        let soft = softmax(&self.raw_scores, RESONANCE_TEMPERATURE);
        let mut percentages: BTreeMap<TypeId, u8> = soft
            .iter()
            .map(|(&t, &p)| (t, (p * 100.0).round() as u8))
            .collect();
        let total: i32 = percentages.values().map(|&p| i32::from(p)).sum();
        let remainder = 100 - total;
        let (leader, _) = self.leading_type();
        let entry = percentages.entry(leader).or_insert(0);
        *entry = (i32::from(*entry) + remainder).clamp(0, 100) as u8;
        percentages
    }
}

impl Default for TypeProbabilities {
    fn default() -> Self {
        Self::new()
    }
}

/// Probability distribution over the three instincts. Same shape as
/// [`TypeProbabilities`] but instinct questions are unidirectional
/// resonance statements, so a single answer never produces negative
/// evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstinctProbabilities {
    pub probabilities: BTreeMap<Instinct, f64>,
    pub raw_scores: BTreeMap<Instinct, f64>,
    pub question_count: u32,
}

impl InstinctProbabilities {
    /// Uniform prior: 1/3 each.
    pub fn new() -> Self {
        let probabilities = Instinct::ALL.iter().map(|&i| (i, 1.0 / 3.0)).collect();
        let raw_scores = Instinct::ALL.iter().map(|&i| (i, 0.0)).collect();
        Self {
            probabilities,
            raw_scores,
            question_count: 0,
        }
    }

    /// Apply a Likert answer against a question's per-instinct weights.
    /// The raw answer is scaled to (0, 1] rather than centered.
    pub fn update(&self, instinct_scores: &BTreeMap<Instinct, f64>, answer: u8) -> Self {
        let weight = f64::from(answer) / 5.0;
        let mut raw_scores = self.raw_scores.clone();
        for (&i, &s) in instinct_scores {
            *raw_scores.entry(i).or_insert(0.0) += s * weight;
        }
        let probabilities = softmax(&raw_scores, INSTINCT_TEMPERATURE);
        Self {
            probabilities,
            raw_scores,
            question_count: self.question_count + 1,
        }
    }

    /// Build from ipsative ranking totals (merged engine): scores are summed
    /// directly, no softmax, each divided by a fixed denominator to
    /// approximate a probability.
    pub fn from_ipsative(totals: &BTreeMap<Instinct, f64>, denominator: f64) -> Self {
        let raw_scores: BTreeMap<Instinct, f64> = Instinct::ALL
            .iter()
            .map(|&i| (i, totals.get(&i).copied().unwrap_or(0.0)))
            .collect();
        let probabilities = raw_scores
            .iter()
            .map(|(&i, &s)| (i, (s / denominator).clamp(0.0, 1.0)))
            .collect();
        Self {
            probabilities,
            raw_scores,
            question_count: 0,
        }
    }

    /// Margin of the leading instinct over the runner-up.
    pub fn margin(&self) -> f64 {
        let s = self.stack();
        self.probabilities[&s[0]] - self.probabilities[&s[1]]
    }

    /// All three instincts ordered by descending probability; ties break in
    /// sp, so, sx enumeration order.
    pub fn stack(&self) -> [Instinct; 3] {
        let mut ranked: Vec<Instinct> = Instinct::ALL.to_vec();
        ranked.sort_by(|a, b| {
            self.probabilities[b]
                .partial_cmp(&self.probabilities[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        [ranked[0], ranked[1], ranked[2]]
    }
}

impl Default for InstinctProbabilities {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scores(entries: &[(TypeId, f64)]) -> BTreeMap<TypeId, f64> {
        entries.iter().cloned().collect()
    }

    #[test]
    fn test_uniform_prior() {
        let p = TypeProbabilities::new();
        assert_eq!(p.question_count, 0);
        for t in TypeId::ALL {
            assert!((p.probabilities[&t] - 1.0 / 9.0).abs() < 1e-12);
            assert_eq!(p.raw_scores[&t], 0.0);
        }
        assert!((p.entropy() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_update_does_not_mutate_input() {
        let p = TypeProbabilities::new();
        let before = p.clone();
        let _ = p.update(&scores(&[(TypeId::Individualist, 2.0)]), 5);
        assert_eq!(p, before);
    }

    #[test]
    fn test_agreement_raises_scored_type() {
        let p = TypeProbabilities::new();
        let next = p.update(&scores(&[(TypeId::Individualist, 2.0)]), 5);
        assert_eq!(next.question_count, 1);
        assert!(next.probabilities[&TypeId::Individualist] > 1.0 / 9.0);
        assert!(next.raw_scores[&TypeId::Individualist] > 0.0);
    }

    #[test]
    fn test_neutral_answer_contributes_nothing() {
        let p = TypeProbabilities::new();
        let next = p.update(&scores(&[(TypeId::Challenger, 3.0)]), 3);
        assert_eq!(next.question_count, 1);
        assert_eq!(next.probabilities, p.probabilities);
    }

    #[test]
    fn test_disagreement_is_negative_evidence() {
        let p = TypeProbabilities::new();
        let next = p.update(&scores(&[(TypeId::Challenger, 2.0)]), 1);
        assert!(next.probabilities[&TypeId::Challenger] < 1.0 / 9.0);
    }

    #[test]
    fn test_empty_scores_counts_but_does_not_move() {
        let p = TypeProbabilities::new();
        let next = p.update(&BTreeMap::new(), 5);
        assert_eq!(next.question_count, 1);
        assert_eq!(next.probabilities, p.probabilities);
    }

    #[test]
    fn test_tie_break_is_numeric_order() {
        let p = TypeProbabilities::new();
        let (leader, _) = p.leading_type();
        assert_eq!(leader, TypeId::Reformer);
    }

    #[test]
    fn test_instinct_never_negative_evidence() {
        let p = InstinctProbabilities::new();
        let weak = p.update(&[(Instinct::Sx, 2.0)].iter().cloned().collect(), 1);
        // Even a "1" answer adds non-negative raw score.
        assert!(weak.raw_scores[&Instinct::Sx] > 0.0);
    }

    #[test]
    fn test_instinct_stack_orders_descending() {
        let mut p = InstinctProbabilities::new();
        let so: BTreeMap<Instinct, f64> = [(Instinct::So, 3.0)].iter().cloned().collect();
        let sx: BTreeMap<Instinct, f64> = [(Instinct::Sx, 3.0)].iter().cloned().collect();
        p = p.update(&so, 5);
        p = p.update(&so, 5);
        p = p.update(&sx, 4);
        assert_eq!(p.stack(), [Instinct::So, Instinct::Sx, Instinct::Sp]);
    }

    #[test]
    fn test_resonance_percentages_sum_to_100() {
        let mut p = TypeProbabilities::new();
        p = p.update(&scores(&[(TypeId::Investigator, 3.0)]), 5);
        p = p.update(&scores(&[(TypeId::Loyalist, 1.5), (TypeId::Reformer, -1.0)]), 4);
        let dist = p.resonance_distribution();
        let total: u32 = dist.values().map(|&v| u32::from(v)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_ipsative_normalization() {
        let totals: BTreeMap<Instinct, f64> =
            [(Instinct::Sp, 15.0), (Instinct::So, 9.0), (Instinct::Sx, 6.0)]
                .iter()
                .cloned()
                .collect();
        let p = InstinctProbabilities::from_ipsative(&totals, 15.0);
        assert!((p.probabilities[&Instinct::Sp] - 1.0).abs() < 1e-12);
        assert!((p.probabilities[&Instinct::So] - 0.6).abs() < 1e-12);
        assert_eq!(p.stack(), [Instinct::Sp, Instinct::So, Instinct::Sx]);
    }

    proptest! {
        #[test]
        fn prop_probabilities_normalized(
            answers in prop::collection::vec((1u8..=5, 0usize..9, -3.0f64..3.0), 1..40)
        ) {
            let mut p = TypeProbabilities::new();
            for (answer, idx, weight) in answers {
                let map = scores(&[(TypeId::ALL[idx], weight)]);
                p = p.update(&map, answer);
            }
            let sum: f64 = p.probabilities.values().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
            for &v in p.probabilities.values() {
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }

        #[test]
        fn prop_softmax_shift_invariance(
            raws in prop::collection::vec(-50.0f64..50.0, 9),
            shift in -100.0f64..100.0,
        ) {
            let base: BTreeMap<TypeId, f64> = TypeId::ALL
                .iter()
                .zip(&raws)
                .map(|(&t, &r)| (t, r))
                .collect();
            let shifted: BTreeMap<TypeId, f64> =
                base.iter().map(|(&t, &r)| (t, r + shift)).collect();
            let a = softmax(&base, DECISION_TEMPERATURE);
            let b = softmax(&shifted, DECISION_TEMPERATURE);
            for t in TypeId::ALL {
                prop_assert!((a[&t] - b[&t]).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_question_count_monotone(
            answers in prop::collection::vec(1u8..=5, 0..30)
        ) {
            let mut p = TypeProbabilities::new();
            for (i, answer) in answers.iter().enumerate() {
                p = p.update(&scores(&[(TypeId::Enthusiast, 1.0)]), *answer);
                prop_assert_eq!(p.question_count, (i + 1) as u32);
            }
        }
    }
}
