//! The merged engine: ranking-scenario screening at reduced weight, Likert
//! refinement, optional forced choice from a question floor, a shorter wing
//! stage, ipsative instinct paragraph ranking, and a health-level block.

use std::collections::BTreeMap;

use super::{
    confused_pairs_in_top3, finalize, likert_value, ranking_value, EngineConfig, Progress,
    QuizEngine, FORCED_CHOICE_DELTA,
};
use crate::convergence;
use crate::engine::stage::Stage;
use crate::engine::state::{QuizState, WingTally};
use crate::error::EngineError;
use crate::probability::InstinctProbabilities;
use crate::questions::{
    forced_choice, health, instinct, refinement, scenario, screening, wing, Answer, ChoiceSide,
    Framing, Question,
};
use crate::results::HealthAssessment;
use crate::selector::{self, Phase};
use crate::types::TypeId;

/// Rank factors for a best-first scenario ranking: the top option counts
/// for, the bottom against, the middle not at all.
const SCENARIO_RANK_FACTORS: [f64; 3] = [1.0, 0.0, -1.0];

/// Points per rank slot in the ipsative instinct stage; five sets at 3/2/1
/// give each instinct a 15-point ceiling.
const IPSATIVE_RANK_POINTS: [f64; 3] = [3.0, 2.0, 1.0];
const IPSATIVE_DENOMINATOR: f64 = 15.0;

pub struct MergedEngine {
    config: EngineConfig,
    scenario_pool: Vec<Question>,
    screening_pool: Vec<Question>,
    core_pool: Vec<Question>,
    differentiator_pool: Vec<Question>,
    paragraph_pool: Vec<Question>,
    health_pool: Vec<Question>,
}

impl MergedEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::merged())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            scenario_pool: scenario::pool(),
            screening_pool: screening::pool(),
            core_pool: refinement::core_pool(),
            differentiator_pool: refinement::differentiator_pool(),
            paragraph_pool: instinct::paragraph_sets(),
            health_pool: health::pool(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn present_scenario(&self, mut state: QuizState) -> QuizState {
        match self.scenario_pool.get(state.scenario_index) {
            Some(q) => {
                state.current_question = Some(q.clone());
                state
            }
            None => {
                state.advance(Stage::Typing);
                self.resume_typing(state)
            }
        }
    }

    fn phase_pool(&self, phase: Phase) -> &[Question] {
        match phase {
            Phase::Screening => &self.screening_pool,
            Phase::Refinement => &self.core_pool,
            Phase::Differentiation => &self.differentiator_pool,
        }
    }

    fn next_type_question(&self, state: &QuizState) -> Option<Question> {
        let phase = selector::classify_phase(&state.type_probs);
        if let Some(q) =
            selector::select_next(&state.type_probs, self.phase_pool(phase), &state.answered)
        {
            return Some(q.clone());
        }
        for pool in [
            &self.screening_pool,
            &self.core_pool,
            &self.differentiator_pool,
        ] {
            if let Some(q) = selector::select_next(&state.type_probs, pool, &state.answered) {
                return Some(q.clone());
            }
        }
        None
    }

    fn pending_confused_pairs(&self, state: &QuizState) -> Vec<(TypeId, TypeId)> {
        confused_pairs_in_top3(state, self.config.confusion_gap)
            .into_iter()
            .filter(|&(a, b)| {
                forced_choice::for_pair(a, b)
                    .iter()
                    .any(|q| !state.answered.contains(q.id()))
            })
            .collect()
    }

    fn after_type_answer(&self, mut state: QuizState) -> QuizState {
        let check = convergence::check(&state.type_probs, &self.config.convergence);
        if check.converged {
            state.convergence = Some(check);
            return self.leave_typing(state);
        }
        // Unlike the adaptive engine, forced choice can begin before
        // convergence once past the question floor.
        if state.type_probs.question_count >= self.config.min_questions_for_forced_choice {
            let pending = self.pending_confused_pairs(&state);
            if !pending.is_empty() {
                state.forced_choice.pending = pending;
                state.advance(Stage::ForcedChoice);
                return self.continue_forced_choice(state);
            }
        }
        self.resume_typing(state)
    }

    fn resume_typing(&self, mut state: QuizState) -> QuizState {
        match self.next_type_question(&state) {
            Some(q) => {
                state.current_question = Some(q);
                state
            }
            None => self.leave_typing(state),
        }
    }

    fn leave_typing(&self, mut state: QuizState) -> QuizState {
        let pending = self.pending_confused_pairs(&state);
        if pending.is_empty() {
            return self.enter_wing(state);
        }
        state.forced_choice.pending = pending;
        state.advance(Stage::ForcedChoice);
        self.continue_forced_choice(state)
    }

    fn continue_forced_choice(&self, mut state: QuizState) -> QuizState {
        while let Some(&(a, b)) = state.forced_choice.pending.first() {
            let next = forced_choice::for_pair(a, b)
                .into_iter()
                .find(|q| !state.answered.contains(q.id()));
            match next {
                Some(q) => {
                    state.current_question = Some(q);
                    return state;
                }
                None => {
                    state.forced_choice.pending.remove(0);
                }
            }
        }
        self.enter_wing(state)
    }

    fn enter_wing(&self, mut state: QuizState) -> QuizState {
        state.advance(Stage::Wing);
        let core = state.type_probs.leading_type().0;
        state.wing = Some(WingTally::new(core));
        self.continue_wing(state)
    }

    fn continue_wing(&self, mut state: QuizState) -> QuizState {
        let (core_type, answered) = match &state.wing {
            Some(t) => (t.core_type, t.answered),
            None => return self.enter_instinct(state),
        };
        if answered >= self.config.min_wing_questions {
            return self.enter_instinct(state);
        }
        match wing::for_type(core_type)
            .into_iter()
            .find(|q| !state.answered.contains(q.id()))
        {
            Some(q) => {
                state.current_question = Some(q);
                state
            }
            None => self.enter_instinct(state),
        }
    }

    fn enter_instinct(&self, mut state: QuizState) -> QuizState {
        state.advance(Stage::Instinct);
        self.continue_instinct(state)
    }

    fn continue_instinct(&self, mut state: QuizState) -> QuizState {
        match self
            .paragraph_pool
            .iter()
            .find(|q| !state.answered.contains(q.id()))
        {
            Some(q) => {
                state.current_question = Some(q.clone());
                state
            }
            None => {
                state.instinct_probs = InstinctProbabilities::from_ipsative(
                    &state.ipsative_totals,
                    IPSATIVE_DENOMINATOR,
                );
                state.advance(Stage::Health);
                self.continue_health(state)
            }
        }
    }

    fn continue_health(&self, mut state: QuizState) -> QuizState {
        match self
            .health_pool
            .iter()
            .find(|q| !state.answered.contains(q.id()))
        {
            Some(q) => {
                state.current_question = Some(q.clone());
                state
            }
            None => {
                let health = HealthAssessment::classify(
                    state.health.healthy,
                    state.health.unhealthy,
                    state.health.answered,
                );
                finalize(state, health)
            }
        }
    }
}

impl Default for MergedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizEngine for MergedEngine {
    fn start(&self, mut state: QuizState) -> QuizState {
        if state.stage != Stage::Intro {
            return state;
        }
        state.advance(Stage::Scenario);
        self.present_scenario(state)
    }

    fn process_answer(
        &self,
        mut state: QuizState,
        answer: Answer,
    ) -> Result<QuizState, EngineError> {
        if state.results.is_some() {
            return Err(EngineError::QuizFinished);
        }
        let question = state
            .current_question
            .take()
            .ok_or(EngineError::NoCurrentQuestion)?;
        match &question {
            Question::Scenario { options, .. } => {
                let order = ranking_value(&question, &answer, options.len())?;
                let mut deltas: BTreeMap<TypeId, f64> = BTreeMap::new();
                for (rank, &opt_idx) in order.iter().enumerate() {
                    let factor = SCENARIO_RANK_FACTORS[rank] * self.config.scenario_weight;
                    for (&t, &s) in &options[opt_idx].type_scores {
                        *deltas.entry(t).or_insert(0.0) += s * factor;
                    }
                }
                state.type_probs = state.type_probs.apply_raw_deltas(&deltas, true);
                state.record(&question, answer);
                state.scenario_index += 1;
                Ok(self.present_scenario(state))
            }
            Question::Screening { .. }
            | Question::Core { .. }
            | Question::Differentiator { .. } => {
                let v = likert_value(&question, &answer)?;
                let scores = question.type_scores().unwrap_or_default();
                state.type_probs = state.type_probs.update(&scores, v);
                state.record(&question, answer);
                Ok(self.after_type_answer(state))
            }
            Question::ForcedChoice {
                option_a, option_b, ..
            } => {
                let Answer::Choice(side) = &answer else {
                    return Err(EngineError::AnswerShape {
                        question_id: question.id().to_string(),
                        expected: "an A/B choice",
                    });
                };
                let (chosen, unchosen) = match *side {
                    ChoiceSide::A => (option_a.type_id, option_b.type_id),
                    ChoiceSide::B => (option_b.type_id, option_a.type_id),
                };
                let deltas: BTreeMap<_, _> = [
                    (chosen, FORCED_CHOICE_DELTA),
                    (unchosen, -FORCED_CHOICE_DELTA),
                ]
                .into_iter()
                .collect();
                state.type_probs = state.type_probs.apply_raw_deltas(&deltas, false);
                state.forced_choice.answered += 1;
                state.record(&question, answer);
                Ok(self.continue_forced_choice(state))
            }
            Question::Wing { wing_type, .. } => {
                let v = likert_value(&question, &answer)?;
                if let Some(tally) = state.wing.as_mut() {
                    tally.add(*wing_type, f64::from(v));
                }
                state.record(&question, answer);
                Ok(self.continue_wing(state))
            }
            Question::InstinctParagraph { options, .. } => {
                let order = ranking_value(&question, &answer, options.len())?;
                for (rank, &opt_idx) in order.iter().enumerate() {
                    let instinct = options[opt_idx].instinct;
                    *state.ipsative_totals.entry(instinct).or_insert(0.0) +=
                        IPSATIVE_RANK_POINTS[rank];
                }
                state.instinct_answered += 1;
                state.record(&question, answer);
                Ok(self.continue_instinct(state))
            }
            Question::Health { framing, .. } => {
                let v = likert_value(&question, &answer)?;
                let centered = f64::from(v) - 3.0;
                match framing {
                    Framing::Healthy => state.health.healthy += centered,
                    Framing::Unhealthy => state.health.unhealthy += centered,
                }
                state.health.answered += 1;
                state.record(&question, answer);
                Ok(self.continue_health(state))
            }
            // Attention checks and integration interrupts belong to the
            // adaptive engine.
            _ => Err(EngineError::AnswerShape {
                question_id: question.id().to_string(),
                expected: "a question kind this engine presents",
            }),
        }
    }

    fn progress(&self, state: &QuizState) -> Progress {
        let cfg = &self.config;
        let scenario_total = self.scenario_pool.len() as u32;
        let (percent, remaining) = match state.stage {
            Stage::Intro => (
                0.0,
                scenario_total + cfg.convergence.max_questions + cfg.min_wing_questions,
            ),
            Stage::Scenario => {
                let done = state.scenario_index as u32;
                (
                    0.1 * f64::from(done) / f64::from(scenario_total.max(1)),
                    scenario_total.saturating_sub(done) + cfg.convergence.max_questions,
                )
            }
            Stage::Typing => {
                let typing = convergence::progress(&state.type_probs, &cfg.convergence);
                (
                    0.1 + typing * 0.45,
                    convergence::estimate_remaining(&state.type_probs, &cfg.convergence)
                        + cfg.min_wing_questions,
                )
            }
            Stage::ForcedChoice => (0.6, cfg.min_wing_questions + 8),
            Stage::Wing => {
                let answered = state.wing.as_ref().map_or(0, |t| t.answered);
                let frac = f64::from(answered) / f64::from(cfg.min_wing_questions.max(1));
                (
                    0.65 + 0.1 * frac.min(1.0),
                    cfg.min_wing_questions.saturating_sub(answered)
                        + self.paragraph_pool.len() as u32
                        + self.health_pool.len() as u32,
                )
            }
            Stage::Instinct => {
                let total = self.paragraph_pool.len() as u32;
                let frac = f64::from(state.instinct_answered) / f64::from(total.max(1));
                (
                    0.75 + 0.1 * frac.min(1.0),
                    total.saturating_sub(state.instinct_answered) + self.health_pool.len() as u32,
                )
            }
            Stage::Health => {
                let total = self.health_pool.len() as u32;
                let frac = f64::from(state.health.answered) / f64::from(total.max(1));
                (
                    0.85 + 0.15 * frac.min(1.0),
                    total.saturating_sub(state.health.answered),
                )
            }
            Stage::Results => (1.0, 0),
        };
        let phase = matches!(state.stage, Stage::Typing)
            .then(|| selector::classify_phase(&state.type_probs));
        Progress {
            stage: state.stage,
            phase,
            percent_complete: percent.clamp(0.0, 1.0),
            estimated_remaining: remaining,
            message: state.stage.label().to_string(),
        }
    }
}
