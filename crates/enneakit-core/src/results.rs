//! Final results synthesis: a deterministic, side-effect-free transform of
//! the finished probability state into the structured report the caller
//! persists. Created once at quiz completion, never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::content;
use crate::error::Result;
use crate::probability::{InstinctProbabilities, TypeProbabilities};
use crate::types::{Center, HarmonicGroup, HornevianGroup, Instinct, TypeId};

/// Leader probability below which the result is flagged inconclusive.
const INCONCLUSIVE_CONFIDENCE: f64 = 0.40;

/// Leader-to-runner-up gap below which the result is flagged inconclusive.
const INCONCLUSIVE_MARGIN: f64 = 0.10;

/// Gap within which a non-leader counts as a confusion candidate.
const CONFUSION_CANDIDATE_GAP: f64 = 0.10;

/// Wing determination outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingResult {
    /// Label like `4w5`.
    pub code: String,
    pub wing_type: TypeId,
    /// Balance between the two adjacent wings in [-1, 1]; 0 = even.
    pub balance: f64,
    pub text: String,
}

/// Growth or stress arrow with its narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowInsight {
    pub target: TypeId,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthLevel {
    Healthy,
    Average,
    Unhealthy,
}

/// Level-of-development classification from the health/integration answers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    pub level: HealthLevel,
    pub healthy_score: f64,
    pub unhealthy_score: f64,
}

impl HealthAssessment {
    /// Classify from accumulated healthy/unhealthy agreement scores.
    pub fn classify(healthy_score: f64, unhealthy_score: f64, answered: u32) -> Self {
        let span = f64::from(answered.max(1));
        let lean = (healthy_score - unhealthy_score) / span;
        let level = if lean > 0.5 {
            HealthLevel::Healthy
        } else if lean < -0.5 {
            HealthLevel::Unhealthy
        } else {
            HealthLevel::Average
        };
        Self {
            level,
            healthy_score,
            unhealthy_score,
        }
    }
}

/// Attention-check pass/fail summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttentionSummary {
    pub presented: u32,
    pub passed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InconclusiveReason {
    LowConfidence,
    NarrowMargin,
}

/// Everything the synthesis step needs from the finished quiz state.
#[derive(Debug, Clone)]
pub struct SynthesisInput<'a> {
    pub session_id: &'a str,
    pub type_probs: &'a TypeProbabilities,
    pub instinct_probs: &'a InstinctProbabilities,
    pub wing_type: TypeId,
    pub wing_balance: f64,
    pub health: HealthAssessment,
    pub attention: AttentionSummary,
    pub completed_at: DateTime<Utc>,
}

/// The final, immutable quiz report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Results {
    pub session_id: String,
    pub completed_at: DateTime<Utc>,
    pub primary_type: TypeId,
    pub primary_name: String,
    pub summary: String,
    pub confidence: f64,
    /// Display percentages for all nine types; always sums to exactly 100.
    pub type_percentages: BTreeMap<TypeId, u8>,
    /// Three digits, one per center, starting with the primary's center.
    pub tritype: String,
    pub wing: WingResult,
    pub instinct_stack: [Instinct; 3],
    pub growth: ArrowInsight,
    pub stress: ArrowInsight,
    pub harmonic_group: HarmonicGroup,
    pub hornevian_group: HornevianGroup,
    /// Total probability mass per center.
    pub center_balance: BTreeMap<Center, f64>,
    /// Non-leader types scoring within the confusion gap of the leader.
    pub confusion_candidates: Vec<TypeId>,
    pub health: HealthAssessment,
    pub attention: AttentionSummary,
    pub inconclusive: Option<InconclusiveReason>,
}

impl Results {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Results> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Highest-probability type within each center, independently of global
/// rank, ordered starting from the center the primary type belongs to.
pub fn tritype(probs: &TypeProbabilities) -> [TypeId; 3] {
    let (primary, _) = probs.leading_type();
    let start = Center::ALL
        .iter()
        .position(|&c| c == primary.center())
        .unwrap_or(0);
    let mut digits = [primary; 3];
    for (i, slot) in digits.iter_mut().enumerate() {
        let center = Center::ALL[(start + i) % 3];
        // Members are in tritype digit order; strict greater keeps the
        // earlier member on ties.
        let mut best = center.members()[0];
        for &candidate in &center.members()[1..] {
            if probs.probabilities[&candidate] > probs.probabilities[&best] {
                best = candidate;
            }
        }
        *slot = best;
    }
    digits
}

/// Build the final report. Pure function of its input.
pub fn synthesize(input: &SynthesisInput<'_>) -> Results {
    let (primary, top_p) = input.type_probs.leading_type();
    let margin = input.type_probs.margin();

    let inconclusive = if top_p < INCONCLUSIVE_CONFIDENCE {
        Some(InconclusiveReason::LowConfidence)
    } else if margin < INCONCLUSIVE_MARGIN {
        Some(InconclusiveReason::NarrowMargin)
    } else {
        None
    };

    let confusion_candidates = input
        .type_probs
        .top_types(9)
        .into_iter()
        .skip(1)
        .filter(|&(_, p)| top_p - p < CONFUSION_CANDIDATE_GAP)
        .map(|(t, _)| t)
        .collect();

    let center_balance = Center::ALL
        .iter()
        .map(|&c| {
            let mass: f64 = c
                .members()
                .iter()
                .map(|t| input.type_probs.probabilities[t])
                .sum();
            (c, mass)
        })
        .collect();

    let tritype_digits = tritype(input.type_probs);
    let tritype_code: String = tritype_digits.iter().map(|t| t.to_string()).collect();

    Results {
        session_id: input.session_id.to_string(),
        completed_at: input.completed_at,
        primary_type: primary,
        primary_name: primary.name().to_string(),
        summary: content::type_summary(primary).to_string(),
        confidence: input.type_probs.confidence(),
        type_percentages: input.type_probs.resonance_distribution(),
        tritype: tritype_code,
        wing: WingResult {
            code: format!("{}w{}", primary.number(), input.wing_type.number()),
            wing_type: input.wing_type,
            balance: input.wing_balance.clamp(-1.0, 1.0),
            text: content::wing_text(primary, input.wing_type).to_string(),
        },
        instinct_stack: input.instinct_probs.stack(),
        growth: ArrowInsight {
            target: primary.growth_arrow(),
            text: content::growth_text(primary).to_string(),
        },
        stress: ArrowInsight {
            target: primary.stress_arrow(),
            text: content::stress_text(primary).to_string(),
        },
        harmonic_group: primary.harmonic_group(),
        hornevian_group: primary.hornevian_group(),
        center_balance,
        confusion_candidates,
        health: input.health,
        attention: input.attention,
        inconclusive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probs_with(deltas: &[(TypeId, f64)]) -> TypeProbabilities {
        let map: BTreeMap<TypeId, f64> = deltas.iter().cloned().collect();
        TypeProbabilities::new().apply_raw_deltas(&map, false)
    }

    fn input<'a>(
        tp: &'a TypeProbabilities,
        ip: &'a InstinctProbabilities,
    ) -> SynthesisInput<'a> {
        SynthesisInput {
            session_id: "test-session",
            type_probs: tp,
            instinct_probs: ip,
            wing_type: tp.leading_type().0.wings().1,
            wing_balance: 0.4,
            health: HealthAssessment::classify(8.0, 2.0, 6),
            attention: AttentionSummary {
                presented: 2,
                passed: 2,
            },
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn test_tritype_center_independence() {
        // Type 8 leads globally, 3 second, 2 third -- but 9 outranks 1
        // within the gut center. The gut digit must be 9's centermate
        // choice, i.e. 8 itself leads gut; check the heart/head digits and
        // the 9-vs-1 ordering specifically.
        let p = probs_with(&[
            (TypeId::Challenger, 10.0),
            (TypeId::Achiever, 8.0),
            (TypeId::Helper, 7.0),
            (TypeId::Peacemaker, 5.0),
            (TypeId::Reformer, 4.0),
            (TypeId::Loyalist, 3.0),
        ]);
        let digits = tritype(&p);
        // Primary is 8 (gut), so the code starts at the gut center.
        assert_eq!(digits[0], TypeId::Challenger);
        // Heart digit: 3 beats 2 and 4.
        assert_eq!(digits[1], TypeId::Achiever);
        // Head digit: 6 beats 5 and 7 here even though it's not global top-3.
        assert_eq!(digits[2], TypeId::Loyalist);
    }

    #[test]
    fn test_tritype_gut_digit_not_global_top3() {
        // 9 outranks 1 in the gut even though 9 is outside the global top 3.
        let p = probs_with(&[
            (TypeId::Achiever, 10.0),
            (TypeId::Enthusiast, 8.0),
            (TypeId::Helper, 7.0),
            (TypeId::Peacemaker, 5.0),
            (TypeId::Reformer, 4.0),
        ]);
        let digits = tritype(&p);
        // Primary 3 is heart; heart digit first.
        assert_eq!(digits[0], TypeId::Achiever);
        // Head comes next in center rotation, then gut.
        assert_eq!(digits[1], TypeId::Enthusiast);
        assert_eq!(digits[2], TypeId::Peacemaker);
    }

    #[test]
    fn test_confident_result_not_inconclusive() {
        let tp = probs_with(&[(TypeId::Individualist, 12.0)]);
        let ip = InstinctProbabilities::new();
        let results = synthesize(&input(&tp, &ip));
        assert_eq!(results.primary_type, TypeId::Individualist);
        assert_eq!(results.inconclusive, None);
        assert_eq!(results.wing.code, "4w5");
        assert_eq!(results.growth.target, TypeId::Reformer);
        assert_eq!(results.stress.target, TypeId::Helper);
    }

    #[test]
    fn test_uniform_result_is_inconclusive_low_confidence() {
        let tp = TypeProbabilities::new();
        let ip = InstinctProbabilities::new();
        let results = synthesize(&input(&tp, &ip));
        assert_eq!(results.inconclusive, Some(InconclusiveReason::LowConfidence));
    }

    #[test]
    fn test_narrow_margin_is_inconclusive() {
        // Two near-tied strong candidates: confident leader, tiny gap.
        let tp = probs_with(&[(TypeId::Investigator, 10.0), (TypeId::Loyalist, 9.9)]);
        let ip = InstinctProbabilities::new();
        let results = synthesize(&input(&tp, &ip));
        assert_eq!(results.inconclusive, Some(InconclusiveReason::NarrowMargin));
        assert!(results.confusion_candidates.contains(&TypeId::Loyalist));
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let tp = probs_with(&[(TypeId::Helper, 6.0), (TypeId::Peacemaker, 5.0)]);
        let ip = InstinctProbabilities::new();
        let results = synthesize(&input(&tp, &ip));
        let total: u32 = results.type_percentages.values().map(|&v| u32::from(v)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_results_json_round_trip() {
        let tp = probs_with(&[(TypeId::Enthusiast, 9.0)]);
        let ip = InstinctProbabilities::new();
        let results = synthesize(&input(&tp, &ip));
        let json = results.to_json().unwrap();
        let back = Results::from_json(&json).unwrap();
        assert_eq!(back, results);
    }

    #[test]
    fn test_health_classification_bands() {
        assert_eq!(
            HealthAssessment::classify(10.0, 1.0, 6).level,
            HealthLevel::Healthy
        );
        assert_eq!(
            HealthAssessment::classify(3.0, 3.0, 6).level,
            HealthLevel::Average
        );
        assert_eq!(
            HealthAssessment::classify(1.0, 10.0, 6).level,
            HealthLevel::Unhealthy
        );
    }
}
