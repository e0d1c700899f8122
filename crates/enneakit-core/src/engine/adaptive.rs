//! The original adaptive engine: Likert type determination with attention
//! checks interleaved at fixed positions, conditional forced choice, wing
//! questions, and instinct questions with integration-level interrupts.

use std::collections::BTreeMap;

use super::{
    confused_pairs_in_top3, finalize, likert_value, EngineConfig, Progress, QuizEngine,
    FORCED_CHOICE_DELTA,
};
use crate::convergence;
use crate::engine::stage::Stage;
use crate::engine::state::{QuizState, WingTally};
use crate::error::EngineError;
use crate::questions::{
    forced_choice, interrupts, refinement, screening, wing, Answer, ChoiceSide, Framing, Question,
};
use crate::selector::{self, Phase};

/// Stateless orchestrator; all per-run data lives in [`QuizState`].
pub struct AdaptiveEngine {
    config: EngineConfig,
    screening_pool: Vec<Question>,
    core_pool: Vec<Question>,
    differentiator_pool: Vec<Question>,
    instinct_pool: Vec<Question>,
    attention_pool: Vec<Question>,
    integration_pool: Vec<Question>,
}

impl AdaptiveEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::adaptive())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            screening_pool: screening::pool(),
            core_pool: refinement::core_pool(),
            differentiator_pool: refinement::differentiator_pool(),
            instinct_pool: crate::questions::instinct::pool(),
            attention_pool: interrupts::attention_pool(),
            integration_pool: interrupts::integration_pool(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn phase_pool(&self, phase: Phase) -> &[Question] {
        match phase {
            Phase::Screening => &self.screening_pool,
            Phase::Refinement => &self.core_pool,
            Phase::Differentiation => &self.differentiator_pool,
        }
    }

    /// Phase-appropriate pick, falling back through the other scoring pools
    /// before declaring the stage exhausted.
    fn next_type_question(&self, state: &QuizState) -> Option<Question> {
        let phase = selector::classify_phase(&state.type_probs);
        let primary = selector::select_next(&state.type_probs, self.phase_pool(phase), &state.answered);
        if let Some(q) = primary {
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

    fn after_type_answer(&self, mut state: QuizState) -> QuizState {
        // Convergence wins over an interrupt falling on the same position:
        // a converged run must not be stretched by one extra question.
        let check = convergence::check(&state.type_probs, &self.config.convergence);
        if check.converged {
            state.convergence = Some(check);
            return self.leave_typing(state);
        }
        // Position-based attention interrupt; does not consume a scoring
        // slot and does not affect convergence.
        if self
            .config
            .attention_positions
            .contains(&state.type_probs.question_count)
        {
            if let Some(q) = self
                .attention_pool
                .iter()
                .find(|q| !state.answered.contains(q.id()))
            {
                state.current_question = Some(q.clone());
                return state;
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
            // Exhausted pools end the stage; never an error.
            None => self.leave_typing(state),
        }
    }

    fn leave_typing(&self, mut state: QuizState) -> QuizState {
        let pending: Vec<_> = confused_pairs_in_top3(&state, self.config.confusion_gap)
            .into_iter()
            .filter(|&(a, b)| {
                forced_choice::for_pair(a, b)
                    .iter()
                    .any(|q| !state.answered.contains(q.id()))
            })
            .collect();
        if pending.is_empty() {
            return self.enter_wing(state);
        }
        state.forced_choice.pending = pending;
        state.advance(Stage::ForcedChoice);
        self.continue_forced_choice(state)
    }

    /// Pairs are worked through sequentially; each pair's question set is
    /// exhausted before the next pair begins.
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
        // Wing stage keys off the post-forced-choice leader.
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

    fn after_instinct_answer(&self, mut state: QuizState) -> QuizState {
        // Position-based integration-level interrupt, alternating framing
        // by pool order.
        if self
            .config
            .integration_positions
            .contains(&state.instinct_answered)
        {
            if let Some(q) = self
                .integration_pool
                .iter()
                .find(|q| !state.answered.contains(q.id()))
            {
                state.current_question = Some(q.clone());
                return state;
            }
        }
        self.continue_instinct(state)
    }

    fn continue_instinct(&self, mut state: QuizState) -> QuizState {
        let next = self
            .instinct_pool
            .iter()
            .find(|q| !state.answered.contains(q.id()));
        let converged = state.instinct_probs.margin() >= self.config.instinct_margin_threshold
            && state.instinct_answered >= self.config.min_instinct_questions;
        match next {
            None => self.finish(state),
            Some(_) if converged => self.finish(state),
            Some(q) => {
                state.current_question = Some(q.clone());
                state
            }
        }
    }

    fn finish(&self, state: QuizState) -> QuizState {
        let health = crate::results::HealthAssessment::classify(
            state.integration.healthy,
            state.integration.unhealthy,
            state.integration.answered,
        );
        finalize(state, health)
    }
}

impl Default for AdaptiveEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizEngine for AdaptiveEngine {
    fn start(&self, mut state: QuizState) -> QuizState {
        if state.stage != Stage::Intro {
            return state;
        }
        state.advance(Stage::Typing);
        self.resume_typing(state)
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
            Question::Screening { .. }
            | Question::Core { .. }
            | Question::Differentiator { .. } => {
                let v = likert_value(&question, &answer)?;
                let scores = question.type_scores().unwrap_or_default();
                state.type_probs = state.type_probs.update(&scores, v);
                state.record(&question, answer);
                Ok(self.after_type_answer(state))
            }
            Question::AttentionCheck { expected, .. } => {
                let v = likert_value(&question, &answer)?;
                state.attention.presented += 1;
                if v == *expected {
                    state.attention.passed += 1;
                }
                state.record(&question, answer);
                Ok(self.resume_typing(state))
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
            Question::Instinct {
                instinct_scores, ..
            } => {
                let v = likert_value(&question, &answer)?;
                state.instinct_probs = state.instinct_probs.update(instinct_scores, v);
                state.instinct_answered += 1;
                state.record(&question, answer);
                Ok(self.after_instinct_answer(state))
            }
            Question::IntegrationLevel { framing, .. } => {
                let v = likert_value(&question, &answer)?;
                let centered = f64::from(v) - 3.0;
                match framing {
                    Framing::Healthy => state.integration.healthy += centered,
                    Framing::Unhealthy => state.integration.unhealthy += centered,
                }
                state.integration.answered += 1;
                state.record(&question, answer);
                Ok(self.continue_instinct(state))
            }
            // Scenario, paragraph, and health questions belong to the
            // merged engine and are never presented here.
            _ => Err(EngineError::AnswerShape {
                question_id: question.id().to_string(),
                expected: "a question kind this engine presents",
            }),
        }
    }

    fn progress(&self, state: &QuizState) -> Progress {
        let cfg = &self.config;
        let (percent, remaining) = match state.stage {
            Stage::Intro => (0.0, cfg.convergence.max_questions + cfg.min_wing_questions + cfg.min_instinct_questions),
            Stage::Typing => {
                let typing = convergence::progress(&state.type_probs, &cfg.convergence);
                (
                    typing * 0.55,
                    convergence::estimate_remaining(&state.type_probs, &cfg.convergence)
                        + cfg.min_wing_questions
                        + cfg.min_instinct_questions,
                )
            }
            Stage::ForcedChoice => (0.6, cfg.min_wing_questions + cfg.min_instinct_questions + 2),
            Stage::Wing => {
                let answered = state.wing.as_ref().map_or(0, |t| t.answered);
                let frac = f64::from(answered) / f64::from(cfg.min_wing_questions.max(1));
                (
                    0.65 + 0.1 * frac.min(1.0),
                    cfg.min_wing_questions.saturating_sub(answered) + cfg.min_instinct_questions,
                )
            }
            Stage::Instinct => {
                let total = self.instinct_pool.len() as u32;
                let frac = f64::from(state.instinct_answered) / f64::from(total.max(1));
                (
                    0.75 + 0.2 * frac.min(1.0),
                    total.saturating_sub(state.instinct_answered),
                )
            }
            Stage::Scenario | Stage::Health => (0.0, 0),
            Stage::Results => (1.0, 0),
        };
        let phase = matches!(state.stage, Stage::Typing)
            .then(|| selector::classify_phase(&state.type_probs));
        let message = match state.stage {
            Stage::Typing => match selector::classify_phase(&state.type_probs) {
                Phase::Screening => "Casting a wide net across all nine types.".to_string(),
                Phase::Refinement => "Narrowing in on your strongest candidates.".to_string(),
                Phase::Differentiation => "Teasing apart your final candidates.".to_string(),
            },
            other => other.label().to_string(),
        };
        Progress {
            stage: state.stage,
            phase,
            percent_complete: percent.clamp(0.0, 1.0),
            estimated_remaining: remaining,
            message,
        }
    }
}
