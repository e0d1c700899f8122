//! End-to-end runs through the merged engine: scenario screening, Likert
//! refinement, ipsative instinct ranking, and the health block.

mod common;

use common::{run_to_completion, Persona};
use enneakit_core::engine::Stage;
use enneakit_core::questions::Question;
use enneakit_core::results::HealthLevel;
use enneakit_core::{Instinct, MergedEngine, QuizEngine, TypeId};

fn type_eight() -> Persona {
    Persona {
        core_type: TypeId::Challenger,
        preferred_wing: TypeId::Enthusiast,
        dominant_instinct: Instinct::Sp,
        healthy: true,
    }
}

#[test]
fn full_merged_run_reaches_results() {
    let engine = MergedEngine::new();
    let state = engine.start(engine.initial_state());
    assert_eq!(state.stage, Stage::Scenario);

    let done = run_to_completion(&engine, state, &type_eight(), 300);
    let results = done.results.expect("results assembled");

    assert_eq!(results.primary_type, TypeId::Challenger);
    assert_eq!(results.wing.wing_type, TypeId::Enthusiast);
    assert_eq!(results.wing.code, "8w7");
    assert_eq!(results.instinct_stack[0], Instinct::Sp);
    assert_eq!(results.health.level, HealthLevel::Healthy);
    // Merged engine presents no attention checks.
    assert_eq!(results.attention.presented, 0);
    // Scenario answers count as scoring questions.
    assert!(done.type_probs.question_count >= 3);
}

#[test]
fn unhealthy_persona_is_classified_unhealthy() {
    let engine = MergedEngine::new();
    let persona = Persona {
        healthy: false,
        ..type_eight()
    };
    let done = run_to_completion(&engine, engine.start(engine.initial_state()), &persona, 300);
    assert_eq!(done.results.unwrap().health.level, HealthLevel::Unhealthy);
}

#[test]
fn instinct_stage_is_ipsative_not_softmax() {
    let engine = MergedEngine::new();
    let done = run_to_completion(
        &engine,
        engine.start(engine.initial_state()),
        &type_eight(),
        300,
    );
    // Five sets, dominant instinct ranked first every time: 5 * 3 points,
    // normalized by the fixed 15-point denominator.
    let p = &done.instinct_probs;
    assert!((p.probabilities[&Instinct::Sp] - 1.0).abs() < 1e-9);
    assert!((p.raw_scores[&Instinct::Sp] - 15.0).abs() < 1e-9);
}

#[test]
fn wing_stage_uses_shorter_minimum() {
    let engine = MergedEngine::new();
    let done = run_to_completion(
        &engine,
        engine.start(engine.initial_state()),
        &type_eight(),
        300,
    );
    assert_eq!(done.wing.as_ref().unwrap().answered, 4);
}

#[test]
fn scenario_stage_precedes_typing() {
    let engine = MergedEngine::new();
    let mut state = engine.start(engine.initial_state());
    let persona = type_eight();
    let mut scenario_count = 0;
    while matches!(state.current_question, Some(Question::Scenario { .. })) {
        let q = state.current_question.clone().unwrap();
        state = engine.process_answer(state, persona.answer(&q)).unwrap();
        scenario_count += 1;
    }
    assert_eq!(scenario_count, 3);
    assert_eq!(state.stage, Stage::Typing);
    assert!(matches!(
        state.current_question,
        Some(Question::Screening { .. }) | Some(Question::Core { .. })
    ));
}

#[test]
fn merged_state_survives_json_round_trip_mid_quiz() {
    let engine = MergedEngine::new();
    let mut state = engine.start(engine.initial_state());
    let persona = type_eight();
    for _ in 0..5 {
        let q = state.current_question.clone().unwrap();
        state = engine.process_answer(state, persona.answer(&q)).unwrap();
    }
    let json = state.to_json().unwrap();
    let restored = enneakit_core::QuizState::from_json(&json).unwrap();
    assert_eq!(restored, state);
    // A restored state keeps working.
    let q = restored.current_question.clone().unwrap();
    let next = engine.process_answer(restored, persona.answer(&q)).unwrap();
    assert!(next.history.len() > state.history.len());
}
