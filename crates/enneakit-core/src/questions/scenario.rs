//! Forced-ranking screening scenarios for the merged engine. Each presents
//! a situation with three reactions; the user orders them best-fit first.

use std::collections::BTreeMap;

use super::{Question, ScenarioOption};
use crate::types::TypeId;

fn opt(text: &str, scores: &[(TypeId, f64)]) -> ScenarioOption {
    let type_scores: BTreeMap<TypeId, f64> = scores.iter().cloned().collect();
    ScenarioOption {
        text: text.into(),
        type_scores,
    }
}

pub fn pool() -> Vec<Question> {
    use TypeId::*;
    vec![
        Question::Scenario {
            id: "scn-1".into(),
            prompt: "A project you care about is going badly. Your first instinct is to:".into(),
            options: vec![
                opt(
                    "Take charge, name what's broken, and push it back on course.",
                    &[(Challenger, 2.0), (Reformer, 1.0), (Achiever, 0.5)],
                ),
                opt(
                    "Step back, analyze what went wrong, and quietly rework the plan.",
                    &[(Investigator, 2.0), (Loyalist, 1.0), (Peacemaker, 0.5)],
                ),
                opt(
                    "Rally the people involved, smooth tensions, and restore morale.",
                    &[(Helper, 2.0), (Peacemaker, 1.0), (Enthusiast, 0.5)],
                ),
            ],
        },
        Question::Scenario {
            id: "scn-2".into(),
            prompt: "At a party full of strangers, you most naturally:".into(),
            options: vec![
                opt(
                    "Work the room, telling stories and keeping the energy high.",
                    &[(Enthusiast, 2.0), (Achiever, 1.0), (Helper, 0.5)],
                ),
                opt(
                    "Find one interesting person and go deep, ignoring the crowd.",
                    &[(Individualist, 2.0), (Investigator, 1.0), (Loyalist, 0.5)],
                ),
                opt(
                    "Settle somewhere comfortable and let conversation come to you.",
                    &[(Peacemaker, 2.0), (Investigator, 0.5), (Reformer, 0.5)],
                ),
            ],
        },
        Question::Scenario {
            id: "scn-3".into(),
            prompt: "You receive pointed criticism of work you are proud of. You:".into(),
            options: vec![
                opt(
                    "Measure it against your own standards and fix only what is genuinely wrong.",
                    &[(Reformer, 2.0), (Investigator, 1.0), (Challenger, 0.5)],
                ),
                opt(
                    "Feel it deeply and personally before you can evaluate it at all.",
                    &[(Individualist, 2.0), (Loyalist, 1.0), (Helper, 0.5)],
                ),
                opt(
                    "Reframe it fast, salvage what's useful, and move on to the next thing.",
                    &[(Enthusiast, 2.0), (Achiever, 1.0), (Peacemaker, 0.5)],
                ),
            ],
        },
    ]
}
