//! Shared test driver: a scripted persona that answers whatever question
//! the engine presents, the way a consistent test-taker of a given type,
//! wing, and instinct would.

use enneakit_core::questions::{Answer, ChoiceSide, Framing, Question};
use enneakit_core::{Instinct, QuizEngine, QuizState, TypeId};

pub struct Persona {
    pub core_type: TypeId,
    pub preferred_wing: TypeId,
    pub dominant_instinct: Instinct,
    pub healthy: bool,
}

impl Persona {
    pub fn answer(&self, question: &Question) -> Answer {
        match question {
            Question::Screening { type_scores, .. } | Question::Core { type_scores, .. } => {
                let w = type_scores.get(&self.core_type).copied().unwrap_or(0.0);
                Answer::Likert(likert_for_weight(w))
            }
            Question::Differentiator {
                positive, negative, ..
            } => {
                if *positive == self.core_type {
                    Answer::Likert(5)
                } else if *negative == self.core_type {
                    Answer::Likert(1)
                } else {
                    Answer::Likert(3)
                }
            }
            Question::Wing { wing_type, .. } => {
                if *wing_type == self.preferred_wing {
                    Answer::Likert(5)
                } else {
                    Answer::Likert(2)
                }
            }
            Question::ForcedChoice { option_a, .. } => {
                if option_a.type_id == self.core_type {
                    Answer::Choice(ChoiceSide::A)
                } else {
                    Answer::Choice(ChoiceSide::B)
                }
            }
            Question::Instinct {
                instinct_scores, ..
            } => {
                if instinct_scores.contains_key(&self.dominant_instinct) {
                    Answer::Likert(5)
                } else {
                    Answer::Likert(2)
                }
            }
            Question::AttentionCheck { expected, .. } => Answer::Likert(*expected),
            Question::IntegrationLevel { framing, .. } | Question::Health { framing, .. } => {
                let agree_healthy = matches!(framing, Framing::Healthy) == self.healthy;
                Answer::Likert(if agree_healthy { 5 } else { 1 })
            }
            Question::Scenario { options, .. } => {
                // Rank options by how strongly they score the persona type.
                let mut order: Vec<usize> = (0..options.len()).collect();
                order.sort_by(|&a, &b| {
                    let wa = options[a]
                        .type_scores
                        .get(&self.core_type)
                        .copied()
                        .unwrap_or(0.0);
                    let wb = options[b]
                        .type_scores
                        .get(&self.core_type)
                        .copied()
                        .unwrap_or(0.0);
                    wb.partial_cmp(&wa).unwrap()
                });
                Answer::Ranking(order)
            }
            Question::InstinctParagraph { options, .. } => {
                let mut order: Vec<usize> = (0..options.len()).collect();
                order.sort_by_key(|&i| {
                    if options[i].instinct == self.dominant_instinct {
                        0
                    } else {
                        1
                    }
                });
                Answer::Ranking(order)
            }
        }
    }
}

/// Drive the quiz to completion (bounded by `max_steps` against bugs).
pub fn run_to_completion<E: QuizEngine>(
    engine: &E,
    mut state: QuizState,
    persona: &Persona,
    max_steps: usize,
) -> QuizState {
    for _ in 0..max_steps {
        let Some(question) = state.current_question.clone() else {
            break;
        };
        let answer = persona.answer(&question);
        state = engine.process_answer(state, answer).expect("answer accepted");
    }
    assert!(state.is_finished(), "quiz did not finish in {max_steps} steps");
    state
}

fn likert_for_weight(w: f64) -> u8 {
    if w > 0.0 {
        5
    } else if w < 0.0 {
        1
    } else {
        3
    }
}
