//! Broad screening questions. Each scores several types at once so the
//! first few answers carve the hypothesis space quickly.

use std::collections::BTreeMap;

use super::Question;
use crate::types::TypeId;

fn q(id: &str, text: &str, scores: &[(TypeId, f64)]) -> Question {
    let type_scores: BTreeMap<TypeId, f64> = scores.iter().cloned().collect();
    Question::Screening {
        id: id.into(),
        text: text.into(),
        type_scores,
    }
}

pub fn pool() -> Vec<Question> {
    use TypeId::*;
    vec![
        q(
            "scr-01",
            "I notice mistakes and imperfections that other people seem to overlook.",
            &[(Reformer, 2.0), (Investigator, 0.5), (Achiever, 0.5)],
        ),
        q(
            "scr-02",
            "Other people's needs register with me before my own do.",
            &[(Helper, 2.0), (Peacemaker, 1.0), (Loyalist, 0.5)],
        ),
        q(
            "scr-03",
            "Being seen as successful matters to me more than I usually admit.",
            &[(Achiever, 2.0), (Enthusiast, 0.5), (Challenger, 0.5)],
        ),
        q(
            "scr-04",
            "I often feel that something essential is missing from my life that others seem to have.",
            &[(Individualist, 2.0), (Investigator, 0.5), (Loyalist, 0.5)],
        ),
        q(
            "scr-05",
            "I need a lot of time alone to recharge and think things through.",
            &[(Investigator, 2.0), (Individualist, 1.0), (Peacemaker, 0.5)],
        ),
        q(
            "scr-06",
            "I run worst-case scenarios in my head so I'm never caught off guard.",
            &[(Loyalist, 2.0), (Investigator, 0.5), (Reformer, 0.5)],
        ),
        q(
            "scr-07",
            "I keep my options open because committing to one thing means missing out on others.",
            &[(Enthusiast, 2.0), (Achiever, 0.5), (Individualist, -0.5)],
        ),
        q(
            "scr-08",
            "When I enter a room I quickly sense who holds the power.",
            &[(Challenger, 2.0), (Achiever, 0.5), (Loyalist, 0.5)],
        ),
        q(
            "scr-09",
            "I go along with others to keep the peace, even when I privately disagree.",
            &[(Peacemaker, 2.0), (Helper, 0.5), (Challenger, -1.0)],
        ),
        q(
            "scr-10",
            "I hold myself to standards that most people would find unreasonably strict.",
            &[(Reformer, 2.0), (Achiever, 0.5), (Enthusiast, -0.5)],
        ),
        q(
            "scr-11",
            "I feel most alive when someone truly needs me.",
            &[(Helper, 2.0), (Loyalist, 0.5), (Investigator, -1.0)],
        ),
        q(
            "scr-12",
            "I adapt how I present myself depending on who I'm with.",
            &[(Achiever, 2.0), (Helper, 0.5), (Individualist, -0.5)],
        ),
        q(
            "scr-13",
            "My emotional life feels deeper and more turbulent than most people's.",
            &[(Individualist, 2.0), (Loyalist, 0.5), (Peacemaker, -0.5)],
        ),
        q(
            "scr-14",
            "I hoard my time and energy because I fear being depleted by demands.",
            &[(Investigator, 2.0), (Peacemaker, 0.5), (Helper, -1.0)],
        ),
        q(
            "scr-15",
            "I test people before I trust them.",
            &[(Loyalist, 2.0), (Challenger, 1.0), (Enthusiast, -0.5)],
        ),
        q(
            "scr-16",
            "I reframe painful situations into something positive almost immediately.",
            &[(Enthusiast, 2.0), (Peacemaker, 1.0), (Individualist, -1.0)],
        ),
        q(
            "scr-17",
            "Showing vulnerability feels like handing someone a weapon.",
            &[(Challenger, 2.0), (Investigator, 0.5), (Helper, -0.5)],
        ),
        q(
            "scr-18",
            "I lose track of my own opinions by merging with what the people around me want.",
            &[(Peacemaker, 2.0), (Helper, 0.5), (Challenger, -1.0)],
        ),
    ]
}
