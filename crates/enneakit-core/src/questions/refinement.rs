//! Refinement-phase pools: focused core questions probing one type's
//! driving fear or desire, and two-type differentiators for the
//! differentiation phase.

use std::collections::BTreeMap;

use super::Question;
use crate::types::TypeId;

fn core(id: &str, text: &str, scores: &[(TypeId, f64)]) -> Question {
    let type_scores: BTreeMap<TypeId, f64> = scores.iter().cloned().collect();
    Question::Core {
        id: id.into(),
        text: text.into(),
        type_scores,
    }
}

fn diff(id: &str, text: &str, positive: TypeId, negative: TypeId, weight: f64) -> Question {
    Question::Differentiator {
        id: id.into(),
        text: text.into(),
        positive,
        negative,
        weight,
    }
}

/// Three fear/desire questions per type, heavy single-type weights with
/// occasional small cross-weights.
pub fn core_pool() -> Vec<Question> {
    use TypeId::*;
    vec![
        // Type 1
        core(
            "core-1a",
            "A harsh inner critic narrates nearly everything I do.",
            &[(Reformer, 2.5)],
        ),
        core(
            "core-1b",
            "I fear that if I relax my standards I will become corrupt or bad.",
            &[(Reformer, 2.5), (Loyalist, 0.5)],
        ),
        core(
            "core-1c",
            "Resentment builds in me when others don't carry their share responsibly.",
            &[(Reformer, 2.0), (Challenger, 0.5)],
        ),
        // Type 2
        core(
            "core-2a",
            "I fear that if I stopped giving, no one would want me around.",
            &[(Helper, 2.5)],
        ),
        core(
            "core-2b",
            "I track what others need and offer it before they ask.",
            &[(Helper, 2.5), (Peacemaker, 0.5)],
        ),
        core(
            "core-2c",
            "It is genuinely hard for me to ask for help for myself.",
            &[(Helper, 2.0), (Challenger, 0.5)],
        ),
        // Type 3
        core(
            "core-3a",
            "I fear being worthless apart from what I achieve.",
            &[(Achiever, 2.5)],
        ),
        core(
            "core-3b",
            "I instinctively become whatever the situation rewards.",
            &[(Achiever, 2.5)],
        ),
        core(
            "core-3c",
            "Slowing down feels dangerous, as if my value would evaporate.",
            &[(Achiever, 2.0), (Enthusiast, 0.5)],
        ),
        // Type 4
        core(
            "core-4a",
            "I fear having no identity or personal significance of my own.",
            &[(Individualist, 2.5)],
        ),
        core(
            "core-4b",
            "Melancholy can feel strangely comfortable, almost like home.",
            &[(Individualist, 2.5)],
        ),
        core(
            "core-4c",
            "I compare my inner life to others' and feel uniquely flawed.",
            &[(Individualist, 2.0), (Loyalist, 0.5)],
        ),
        // Type 5
        core(
            "core-5a",
            "I fear being overwhelmed by other people's needs and emotions.",
            &[(Investigator, 2.5)],
        ),
        core(
            "core-5b",
            "I prefer to observe and understand before I participate.",
            &[(Investigator, 2.5), (Peacemaker, 0.5)],
        ),
        core(
            "core-5c",
            "Competence is my armor; being exposed as ignorant is intolerable.",
            &[(Investigator, 2.0), (Reformer, 0.5)],
        ),
        // Type 6
        core(
            "core-6a",
            "I fear being without support or guidance when things go wrong.",
            &[(Loyalist, 2.5)],
        ),
        core(
            "core-6b",
            "I second-guess my own decisions and seek reassurance from others.",
            &[(Loyalist, 2.5)],
        ),
        core(
            "core-6c",
            "I am loyal to people and groups long past the point others would leave.",
            &[(Loyalist, 2.0), (Helper, 0.5)],
        ),
        // Type 7
        core(
            "core-7a",
            "I fear being trapped in pain or deprivation with no way out.",
            &[(Enthusiast, 2.5)],
        ),
        core(
            "core-7b",
            "Planning future pleasures excites me as much as having them.",
            &[(Enthusiast, 2.5)],
        ),
        core(
            "core-7c",
            "When conversations get heavy I instinctively lighten them.",
            &[(Enthusiast, 2.0), (Peacemaker, 0.5)],
        ),
        // Type 8
        core(
            "core-8a",
            "I fear being controlled or betrayed more than almost anything.",
            &[(Challenger, 2.5)],
        ),
        core(
            "core-8b",
            "Confrontation energizes me where it drains other people.",
            &[(Challenger, 2.5), (Reformer, -0.5)],
        ),
        core(
            "core-8c",
            "I protect the people under my care fiercely and without hesitation.",
            &[(Challenger, 2.0), (Helper, 0.5)],
        ),
        // Type 9
        core(
            "core-9a",
            "I fear that asserting myself will cost me connection and peace.",
            &[(Peacemaker, 2.5)],
        ),
        core(
            "core-9b",
            "I numb myself with routines and small comforts to avoid being disturbed.",
            &[(Peacemaker, 2.5)],
        ),
        core(
            "core-9c",
            "My own priorities blur until other people's agendas fill my day.",
            &[(Peacemaker, 2.0), (Helper, 0.5)],
        ),
    ]
}

/// Agree/disagree statements that separate exactly two types. Keyed to the
/// curated confused pairs plus a few classic lookalikes.
pub fn differentiator_pool() -> Vec<Question> {
    use TypeId::*;
    vec![
        diff(
            "diff-1v6",
            "My vigilance comes from an inner standard of correctness, not from anticipating danger.",
            Reformer,
            Loyalist,
            2.0,
        ),
        diff(
            "diff-6v1",
            "I check with trusted people before acting; my own judgment alone never feels sufficient.",
            Loyalist,
            Reformer,
            2.0,
        ),
        diff(
            "diff-2v9",
            "I move toward people actively with help and warmth rather than simply accommodating them.",
            Helper,
            Peacemaker,
            2.0,
        ),
        diff(
            "diff-9v2",
            "Being comfortable and unbothered matters more to me than being needed.",
            Peacemaker,
            Helper,
            2.0,
        ),
        diff(
            "diff-3v7",
            "I chase goals for the recognition they bring, not the stimulation of pursuing them.",
            Achiever,
            Enthusiast,
            2.0,
        ),
        diff(
            "diff-7v3",
            "I abandon projects once the novelty fades, even when finishing would look good.",
            Enthusiast,
            Achiever,
            2.0,
        ),
        diff(
            "diff-3v8",
            "I would rather be admired than feared.",
            Achiever,
            Challenger,
            2.0,
        ),
        diff(
            "diff-8v3",
            "I'd sacrifice my image in a heartbeat to keep my autonomy.",
            Challenger,
            Achiever,
            2.0,
        ),
        diff(
            "diff-4v9",
            "I amplify my feelings to feel real; I don't flatten them to stay comfortable.",
            Individualist,
            Peacemaker,
            2.0,
        ),
        diff(
            "diff-5v9",
            "My withdrawal is to think and analyze, not to tune out and drift.",
            Investigator,
            Peacemaker,
            2.0,
        ),
        diff(
            "diff-6v9",
            "My mind scans for what could go wrong far more than it settles into comfort.",
            Loyalist,
            Peacemaker,
            2.0,
        ),
        diff(
            "diff-4v5",
            "I process the world primarily through feeling and identity, not analysis and detachment.",
            Individualist,
            Investigator,
            2.0,
        ),
    ]
}
