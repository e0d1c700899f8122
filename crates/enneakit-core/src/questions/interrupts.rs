//! Interrupt questions injected at fixed positions during the type and
//! instinct stages. Neither variant scores toward type probabilities and
//! neither consumes a scoring-question slot.

use super::{Framing, Question};

/// Attention checks with a single correct Likert answer.
pub fn attention_pool() -> Vec<Question> {
    vec![
        Question::AttentionCheck {
            id: "att-1".into(),
            text: "To show you are reading carefully, select \"Strongly Agree\" for this statement.".into(),
            expected: 5,
        },
        Question::AttentionCheck {
            id: "att-2".into(),
            text: "For quality control, select \"Disagree\" for this statement.".into(),
            expected: 2,
        },
    ]
}

/// Level-of-development probes, alternating healthy and unhealthy framing.
pub fn integration_pool() -> Vec<Question> {
    vec![
        Question::IntegrationLevel {
            id: "int-1".into(),
            text: "Lately I can observe my own habitual reactions without being run by them.".into(),
            framing: Framing::Healthy,
        },
        Question::IntegrationLevel {
            id: "int-2".into(),
            text: "Lately small setbacks send me into spirals that are hard to exit.".into(),
            framing: Framing::Unhealthy,
        },
        Question::IntegrationLevel {
            id: "int-3".into(),
            text: "Lately I recover from conflict quickly and without grudges.".into(),
            framing: Framing::Healthy,
        },
        Question::IntegrationLevel {
            id: "int-4".into(),
            text: "Lately I feel driven by compulsions I know are not good for me.".into(),
            framing: Framing::Unhealthy,
        },
    ]
}
