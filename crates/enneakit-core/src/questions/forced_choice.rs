//! Forced-choice disambiguation sets for the curated confused pairs.
//! A direct A/B pick is stronger evidence than a Likert rating, so these
//! apply a fixed raw-score delta instead of the usual weighted update.

use super::{ForcedOption, Question};
use crate::types::TypeId;

fn fc(id: &str, a: (TypeId, &str), b: (TypeId, &str)) -> Question {
    Question::ForcedChoice {
        id: id.into(),
        option_a: ForcedOption {
            text: a.1.into(),
            type_id: a.0,
        },
        option_b: ForcedOption {
            text: b.1.into(),
            type_id: b.0,
        },
    }
}

/// Questions targeting one confused pair, order-insensitive.
pub fn for_pair(a: TypeId, b: TypeId) -> Vec<Question> {
    pool()
        .into_iter()
        .filter(|q| match q {
            Question::ForcedChoice {
                option_a, option_b, ..
            } => {
                (option_a.type_id == a && option_b.type_id == b)
                    || (option_a.type_id == b && option_b.type_id == a)
            }
            _ => false,
        })
        .collect()
}

pub fn pool() -> Vec<Question> {
    use TypeId::*;
    vec![
        // 1 vs 6
        fc(
            "fc-1v6-1",
            (Reformer, "I double-check things because they must be done correctly."),
            (Loyalist, "I double-check things because something might go wrong."),
        ),
        fc(
            "fc-1v6-2",
            (Reformer, "My anger shows as tight-lipped irritation at sloppiness."),
            (Loyalist, "My anxiety shows as scanning for hidden problems."),
        ),
        fc(
            "fc-1v6-3",
            (Reformer, "I trust my own judgment of right and wrong above any authority."),
            (Loyalist, "I look to trusted authorities or allies to validate my judgment."),
        ),
        // 2 vs 9
        fc(
            "fc-2v9-1",
            (Helper, "I actively move toward people with warmth and offers of help."),
            (Peacemaker, "I passively accommodate people so nothing gets stirred up."),
        ),
        fc(
            "fc-2v9-2",
            (Helper, "I need to feel needed."),
            (Peacemaker, "I need to feel settled."),
        ),
        fc(
            "fc-2v9-3",
            (Helper, "I know exactly what others need, though rarely what I need."),
            (Peacemaker, "I lose track of what anyone needs, including me."),
        ),
        // 3 vs 7
        fc(
            "fc-3v7-1",
            (Achiever, "I finish things because results define me."),
            (Enthusiast, "I start things because possibilities excite me."),
        ),
        fc(
            "fc-3v7-2",
            (Achiever, "I'd trade fun for status."),
            (Enthusiast, "I'd trade status for fun."),
        ),
        fc(
            "fc-3v7-3",
            (Achiever, "My pace is set by goals and deadlines."),
            (Enthusiast, "My pace is set by appetite and curiosity."),
        ),
        // 3 vs 8
        fc(
            "fc-3v8-1",
            (Achiever, "I want to be admired for excelling."),
            (Challenger, "I want to be respected for strength."),
        ),
        fc(
            "fc-3v8-2",
            (Achiever, "I adapt my style to win the room."),
            (Challenger, "The room adapts to me or I leave."),
        ),
        fc(
            "fc-3v8-3",
            (Achiever, "Failure frightens me more than conflict."),
            (Challenger, "Being controlled frightens me more than failure."),
        ),
        // 4 vs 9
        fc(
            "fc-4v9-1",
            (Individualist, "I intensify my feelings to know who I am."),
            (Peacemaker, "I mute my feelings to stay comfortable."),
        ),
        fc(
            "fc-4v9-2",
            (Individualist, "Being ordinary is my nightmare."),
            (Peacemaker, "Being disturbed is my nightmare."),
        ),
        fc(
            "fc-4v9-3",
            (Individualist, "I dwell on what's missing."),
            (Peacemaker, "I dwell on what's pleasant."),
        ),
        // 5 vs 9
        fc(
            "fc-5v9-1",
            (Investigator, "My mind sharpens and dissects when I withdraw."),
            (Peacemaker, "My mind drifts and diffuses when I withdraw."),
        ),
        fc(
            "fc-5v9-2",
            (Investigator, "I guard my time and energy deliberately."),
            (Peacemaker, "My time slips away without my noticing."),
        ),
        fc(
            "fc-5v9-3",
            (Investigator, "I detach to understand."),
            (Peacemaker, "I detach to stay at peace."),
        ),
        // 6 vs 9
        fc(
            "fc-6v9-1",
            (Loyalist, "My head is busy with doubts and contingencies."),
            (Peacemaker, "My head is settled unless something forces an issue."),
        ),
        fc(
            "fc-6v9-2",
            (Loyalist, "I question others' motives before relaxing around them."),
            (Peacemaker, "I relax around others unless given a strong reason not to."),
        ),
        fc(
            "fc-6v9-3",
            (Loyalist, "Preparedness is how I find calm."),
            (Peacemaker, "Calm is how I avoid needing preparedness."),
        ),
    ]
}
