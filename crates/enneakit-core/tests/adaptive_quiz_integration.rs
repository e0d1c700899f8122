//! End-to-end runs through the adaptive engine: full persona quizzes,
//! convergence behavior, forced-choice mechanics, and determinism.

mod common;

use std::collections::BTreeMap;

use common::{run_to_completion, Persona};
use enneakit_core::engine::{Stage, FORCED_CHOICE_DELTA};
use enneakit_core::questions::{forced_choice, Answer, ChoiceSide, Question};
use enneakit_core::{
    AdaptiveEngine, ConvergenceReason, Instinct, QuizEngine, QuizState, TypeId, TypeProbabilities,
};

fn type_four() -> Persona {
    Persona {
        core_type: TypeId::Individualist,
        preferred_wing: TypeId::Investigator,
        dominant_instinct: Instinct::Sx,
        healthy: true,
    }
}

#[test]
fn consistent_type_four_converges_early() {
    let engine = AdaptiveEngine::new();
    let state = engine.start(engine.initial_state());
    let done = run_to_completion(&engine, state, &type_four(), 300);

    let check = done.convergence.expect("typing stage stopped");
    assert!(check.converged);
    assert_ne!(check.reason, Some(ConvergenceReason::MaxQuestions));
    assert!(
        done.type_probs.question_count <= 18,
        "took {} scoring questions",
        done.type_probs.question_count
    );

    let results = done.results.expect("results assembled");
    assert_eq!(results.primary_type, TypeId::Individualist);
    assert_eq!(results.wing.code, "4w5");
    assert!(results.wing.balance < 0.0 || results.wing.wing_type == TypeId::Investigator);
    assert_eq!(results.instinct_stack[0], Instinct::Sx);
    assert_eq!(results.inconclusive, None);
    assert_eq!(results.attention.presented, results.attention.passed);
}

#[test]
fn neutral_answers_exhaust_the_question_cap() {
    let engine = AdaptiveEngine::new();
    let mut state = engine.start(engine.initial_state());
    // Strict neutral on everything.
    for _ in 0..300 {
        let Some(_) = state.current_question else { break };
        state = engine.process_answer(state, Answer::Likert(3)).unwrap();
    }
    assert!(state.is_finished());
    assert_eq!(state.type_probs.question_count, 25);
    assert_eq!(
        state.convergence.unwrap().reason,
        Some(ConvergenceReason::MaxQuestions)
    );
    assert!(state.type_probs.entropy() > 0.95);
    assert!(state.results.unwrap().inconclusive.is_some());
}

#[test]
fn identical_answer_sequences_are_deterministic() {
    let engine = AdaptiveEngine::new();
    let persona = type_four();
    let a = run_to_completion(&engine, engine.start(engine.initial_state()), &persona, 300);
    let b = run_to_completion(&engine, engine.start(engine.initial_state()), &persona, 300);

    let ra = a.results.unwrap();
    let rb = b.results.unwrap();
    assert_eq!(ra.primary_type, rb.primary_type);
    assert_eq!(ra.tritype, rb.tritype);
    assert_eq!(ra.wing, rb.wing);
    assert_eq!(ra.instinct_stack, rb.instinct_stack);
    assert_eq!(ra.type_percentages, rb.type_percentages);
    assert_eq!(ra.confidence, rb.confidence);
    assert_eq!(a.type_probs, b.type_probs);
    assert_eq!(a.history.len(), b.history.len());
}

#[test]
fn forced_choice_applies_fixed_score_delta() {
    let engine = AdaptiveEngine::new();
    // Hand-build a state mid-forced-choice between the confused 5/9 pair.
    let mut state = QuizState::new();
    state.stage = Stage::Typing;
    let deltas: BTreeMap<TypeId, f64> = [
        (TypeId::Investigator, 8.0),
        (TypeId::Peacemaker, 7.8),
    ]
    .iter()
    .cloned()
    .collect();
    state.type_probs = TypeProbabilities::new().apply_raw_deltas(&deltas, false);
    state.stage = Stage::ForcedChoice;
    state.forced_choice.pending = vec![(TypeId::Investigator, TypeId::Peacemaker)];
    let question = forced_choice::for_pair(TypeId::Investigator, TypeId::Peacemaker)
        .into_iter()
        .next()
        .unwrap();
    let (chosen, unchosen) = match &question {
        Question::ForcedChoice {
            option_a, option_b, ..
        } => (option_a.type_id, option_b.type_id),
        _ => unreachable!(),
    };
    state.current_question = Some(question);

    let before = state.type_probs.clone();
    let after = engine
        .process_answer(state, Answer::Choice(ChoiceSide::A))
        .unwrap();

    let gap_before = before.raw_scores[&chosen] - before.raw_scores[&unchosen];
    let gap_after = after.type_probs.raw_scores[&chosen] - after.type_probs.raw_scores[&unchosen];
    assert!((gap_after - gap_before - 2.0 * FORCED_CHOICE_DELTA).abs() < 1e-12);
    // Interrupt-style: the choice doesn't consume a scoring slot.
    assert_eq!(after.type_probs.question_count, before.question_count);
}

#[test]
fn forced_choice_session_resolves_all_pairs_then_fixes_wing() {
    let engine = AdaptiveEngine::new();
    let mut state = QuizState::new();
    let deltas: BTreeMap<TypeId, f64> = [
        (TypeId::Investigator, 8.0),
        (TypeId::Peacemaker, 7.8),
    ]
    .iter()
    .cloned()
    .collect();
    state.type_probs = TypeProbabilities::new().apply_raw_deltas(&deltas, false);
    state.stage = Stage::ForcedChoice;
    state.forced_choice.pending = vec![(TypeId::Investigator, TypeId::Peacemaker)];
    let question = forced_choice::for_pair(TypeId::Investigator, TypeId::Peacemaker)
        .into_iter()
        .next()
        .unwrap();
    state.current_question = Some(question);

    // Consistently pick the Peacemaker side of every pair question.
    let mut steps = 0;
    while let Some(q) = state.current_question.clone() {
        let Question::ForcedChoice { option_a, .. } = &q else {
            break;
        };
        let side = if option_a.type_id == TypeId::Peacemaker {
            ChoiceSide::A
        } else {
            ChoiceSide::B
        };
        state = engine.process_answer(state, Answer::Choice(side)).unwrap();
        steps += 1;
        assert!(steps < 10);
    }
    // All three 5v9 questions consumed; the post-forced-choice leader wins
    // the wing stage.
    assert_eq!(state.forced_choice.answered, 3);
    assert_eq!(state.stage, Stage::Wing);
    assert_eq!(
        state.wing.as_ref().unwrap().core_type,
        TypeId::Peacemaker
    );
    assert!(matches!(state.current_question, Some(Question::Wing { .. })));
}

#[test]
fn freshly_started_state_round_trips_through_json() {
    let engine = AdaptiveEngine::new();
    let state = engine.start(engine.initial_state());
    // The pending screening question carries type-keyed score maps; the
    // whole state must survive persistence anyway.
    assert!(matches!(
        state.current_question,
        Some(Question::Screening { .. })
    ));
    let restored = QuizState::from_json(&state.to_json().unwrap()).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn interrupts_do_not_advance_question_count() {
    let engine = AdaptiveEngine::new();
    let mut state = engine.start(engine.initial_state());
    let mut scoring_answers = 0u32;
    for _ in 0..40 {
        let Some(q) = state.current_question.clone() else { break };
        match q {
            Question::AttentionCheck { expected, .. } => {
                let count_before = state.type_probs.question_count;
                state = engine
                    .process_answer(state, Answer::Likert(expected))
                    .unwrap();
                assert_eq!(state.type_probs.question_count, count_before);
            }
            _ => {
                state = engine.process_answer(state, Answer::Likert(4)).unwrap();
                if state.stage == Stage::Typing {
                    scoring_answers += 1;
                    assert_eq!(state.type_probs.question_count, scoring_answers);
                } else {
                    break;
                }
            }
        }
    }
    assert!(scoring_answers > 0);
}
