//! Stopping rule for the type-determination stage.
//!
//! Re-evaluated as a pure function after every scoring answer. The decision
//! order is load-bearing: the hard cap always wins, the minimum floor always
//! applies, and high confidence is checked before large margin because the
//! two reasons surface different user-facing messaging.

use serde::{Deserialize, Serialize};

use crate::probability::TypeProbabilities;

/// Tunable thresholds for convergence checking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConvergenceConfig {
    /// Never converge before this many scoring questions.
    pub min_questions: u32,
    /// Always converge at this many scoring questions.
    pub max_questions: u32,
    /// Leader probability required for a high-confidence stop.
    pub high_confidence_threshold: f64,
    /// Questions required before a high-confidence stop.
    pub questions_for_high_confidence: u32,
    /// Entropy ceiling for a high-confidence stop.
    pub entropy_threshold: f64,
    /// Leader-minus-runner-up margin required for a margin stop.
    pub margin_threshold: f64,
    /// Questions required before a margin stop.
    pub questions_for_margin: u32,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            min_questions: 12,
            max_questions: 25,
            high_confidence_threshold: 0.85,
            questions_for_high_confidence: 15,
            entropy_threshold: 0.35,
            margin_threshold: 0.30,
            questions_for_margin: 18,
        }
    }
}

/// Why the quiz stopped asking type questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvergenceReason {
    MaxQuestions,
    HighConfidence,
    LargeMargin,
}

/// Outcome of one convergence evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceCheck {
    pub converged: bool,
    pub reason: Option<ConvergenceReason>,
}

impl ConvergenceCheck {
    fn stop(reason: ConvergenceReason) -> Self {
        Self {
            converged: true,
            reason: Some(reason),
        }
    }

    fn keep_going() -> Self {
        Self {
            converged: false,
            reason: None,
        }
    }
}

/// Evaluate the stopping rule. First match wins; reimplementations of the
/// quiz must preserve this exact precedence.
pub fn check(probs: &TypeProbabilities, config: &ConvergenceConfig) -> ConvergenceCheck {
    if probs.question_count >= config.max_questions {
        return ConvergenceCheck::stop(ConvergenceReason::MaxQuestions);
    }
    if probs.question_count < config.min_questions {
        return ConvergenceCheck::keep_going();
    }
    let (_, top) = probs.leading_type();
    if top >= config.high_confidence_threshold
        && probs.question_count >= config.questions_for_high_confidence
        && probs.entropy() <= config.entropy_threshold
    {
        return ConvergenceCheck::stop(ConvergenceReason::HighConfidence);
    }
    if probs.margin() >= config.margin_threshold
        && probs.question_count >= config.questions_for_margin
    {
        return ConvergenceCheck::stop(ConvergenceReason::LargeMargin);
    }
    ConvergenceCheck::keep_going()
}

/// Rough estimate of remaining type questions, for progress display only.
/// Falls as entropy falls; never exceeds the distance to the hard cap.
pub fn estimate_remaining(probs: &TypeProbabilities, config: &ConvergenceConfig) -> u32 {
    let to_cap = config.max_questions.saturating_sub(probs.question_count);
    let to_floor = config.min_questions.saturating_sub(probs.question_count);
    // Scale the expected extra questions by how uncertain we still are.
    let uncertainty_based = (probs.entropy() * to_cap as f64).ceil() as u32;
    uncertainty_based.max(to_floor).min(to_cap)
}

/// Progress through the type stage in [0, 1], monotone as questions
/// accumulate and entropy falls. Display heuristic only -- never used for
/// a stopping decision.
pub fn progress(probs: &TypeProbabilities, config: &ConvergenceConfig) -> f64 {
    let by_count = f64::from(probs.question_count) / f64::from(config.max_questions);
    let by_certainty = 1.0 - probs.entropy();
    (0.6 * by_count + 0.4 * by_certainty).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeId;
    use std::collections::BTreeMap;

    /// Build a state with a dominant leader and an arbitrary question count.
    fn dominant_state(count: u32, lead_score: f64) -> TypeProbabilities {
        let mut p = TypeProbabilities::new();
        let deltas: BTreeMap<TypeId, f64> =
            [(TypeId::Individualist, lead_score)].iter().cloned().collect();
        p = p.apply_raw_deltas(&deltas, false);
        p.question_count = count;
        p
    }

    #[test]
    fn test_floor_blocks_even_extreme_certainty() {
        let config = ConvergenceConfig::default();
        // Leader near 0.99 but only 5 questions in.
        let p = dominant_state(5, 40.0);
        assert!(p.leading_type().1 > 0.95);
        let result = check(&p, &config);
        assert!(!result.converged);
        assert_eq!(result.reason, None);
    }

    #[test]
    fn test_hard_cap_wins_over_other_reasons() {
        let config = ConvergenceConfig::default();
        // Satisfies high-confidence and margin criteria simultaneously.
        let p = dominant_state(config.max_questions, 40.0);
        let result = check(&p, &config);
        assert_eq!(result.reason, Some(ConvergenceReason::MaxQuestions));
    }

    #[test]
    fn test_high_confidence_beats_large_margin() {
        let config = ConvergenceConfig::default();
        let p = dominant_state(20, 40.0);
        let result = check(&p, &config);
        assert!(result.converged);
        assert_eq!(result.reason, Some(ConvergenceReason::HighConfidence));
    }

    #[test]
    fn test_margin_stop_when_confidence_short() {
        let config = ConvergenceConfig::default();
        // Two strong candidates: big margin over third but leader below the
        // high-confidence bar.
        let mut p = TypeProbabilities::new();
        let deltas: BTreeMap<TypeId, f64> = [
            (TypeId::Investigator, 6.0),
            (TypeId::Loyalist, 2.0),
        ]
        .iter()
        .cloned()
        .collect();
        p = p.apply_raw_deltas(&deltas, false);
        p.question_count = 18;
        let result = check(&p, &config);
        if p.leading_type().1 < config.high_confidence_threshold
            && p.margin() >= config.margin_threshold
        {
            assert_eq!(result.reason, Some(ConvergenceReason::LargeMargin));
        }
    }

    #[test]
    fn test_uniform_never_converges_before_cap() {
        let config = ConvergenceConfig::default();
        let mut p = TypeProbabilities::new();
        for count in 0..config.max_questions {
            p.question_count = count;
            assert!(!check(&p, &config).converged, "converged at {count}");
        }
        p.question_count = config.max_questions;
        assert_eq!(
            check(&p, &config).reason,
            Some(ConvergenceReason::MaxQuestions)
        );
    }

    #[test]
    fn test_estimate_remaining_bounded_and_shrinking() {
        let config = ConvergenceConfig::default();
        let uncertain = TypeProbabilities::new();
        let certain = dominant_state(20, 40.0);
        assert!(estimate_remaining(&uncertain, &config) <= config.max_questions);
        assert!(
            estimate_remaining(&certain, &config) <= estimate_remaining(&uncertain, &config)
        );
    }

    #[test]
    fn test_progress_monotone_in_count() {
        let config = ConvergenceConfig::default();
        let mut prev = 0.0;
        let mut p = TypeProbabilities::new();
        for count in 0..=config.max_questions {
            p.question_count = count;
            let now = progress(&p, &config);
            assert!(now >= prev);
            prev = now;
        }
    }
}
