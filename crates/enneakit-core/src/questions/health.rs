//! Health-level Likert block for the merged engine's final assessment stage.

use super::{Framing, Question};

fn h(id: &str, text: &str, framing: Framing) -> Question {
    Question::Health {
        id: id.into(),
        text: text.into(),
        framing,
    }
}

pub fn pool() -> Vec<Question> {
    vec![
        h(
            "hlt-1",
            "Most days I act from choice rather than compulsion.",
            Framing::Healthy,
        ),
        h(
            "hlt-2",
            "I can name my core fear and notice when it is steering me.",
            Framing::Healthy,
        ),
        h(
            "hlt-3",
            "My close relationships have felt stable and nourishing recently.",
            Framing::Healthy,
        ),
        h(
            "hlt-4",
            "I have been stuck repeating patterns I can see but cannot stop.",
            Framing::Unhealthy,
        ),
        h(
            "hlt-5",
            "Recently I have needed more and more effort just to hold things together.",
            Framing::Unhealthy,
        ),
        h(
            "hlt-6",
            "People close to me have expressed worry about how I am doing.",
            Framing::Unhealthy,
        ),
    ]
}
