//! Instinct pools: Likert resonance statements for the adaptive engine and
//! ipsative paragraph-ranking sets for the merged engine.

use std::collections::BTreeMap;

use super::{ParagraphOption, Question};
use crate::types::Instinct;

fn q(id: &str, text: &str, scores: &[(Instinct, f64)]) -> Question {
    let instinct_scores: BTreeMap<Instinct, f64> = scores.iter().cloned().collect();
    Question::Instinct {
        id: id.into(),
        text: text.into(),
        instinct_scores,
    }
}

fn set(id: &str, sp: &str, so: &str, sx: &str) -> Question {
    Question::InstinctParagraph {
        id: id.into(),
        options: vec![
            ParagraphOption {
                text: sp.into(),
                instinct: Instinct::Sp,
            },
            ParagraphOption {
                text: so.into(),
                instinct: Instinct::So,
            },
            ParagraphOption {
                text: sx.into(),
                instinct: Instinct::Sx,
            },
        ],
    }
}

/// Likert resonance statements. Unidirectional: agreement adds evidence,
/// disagreement merely adds less.
pub fn pool() -> Vec<Question> {
    use Instinct::*;
    vec![
        q("ins-01", "I keep close tabs on my comfort, health, and resources.", &[(Sp, 2.0)]),
        q("ins-02", "A well-stocked, secure home base matters enormously to me.", &[(Sp, 2.0)]),
        q("ins-03", "I notice temperature, hunger, and fatigue before other people do.", &[(Sp, 1.5)]),
        q("ins-04", "Financial or practical insecurity gnaws at me even in good times.", &[(Sp, 1.5), (So, 0.5)]),
        q("ins-05", "I'm acutely aware of group dynamics, status, and who belongs.", &[(So, 2.0)]),
        q("ins-06", "Contributing to a community gives my life much of its meaning.", &[(So, 2.0)]),
        q("ins-07", "I keep track of many relationships and maintain them deliberately.", &[(So, 1.5)]),
        q("ins-08", "Being excluded from a group stings me more than personal failure.", &[(So, 1.5), (Sx, 0.5)]),
        q("ins-09", "I crave intense one-to-one connection more than broad belonging.", &[(Sx, 2.0)]),
        q("ins-10", "Chemistry and attraction pull my attention like a magnet.", &[(Sx, 2.0)]),
        q("ins-11", "I'd rather burn brightly with one person than be comfortable alone.", &[(Sx, 1.5)]),
        q("ins-12", "Merging deeply with someone feels more vital to me than safety or status.", &[(Sx, 1.5)]),
    ]
}

/// Five paragraph-ranking sets; the user orders all three each time.
/// Ranks score 3/2/1, so five sets give each instinct a 15-point ceiling.
pub fn paragraph_sets() -> Vec<Question> {
    vec![
        set(
            "insp-1",
            "On a free weekend I restock, repair, and rest; tending my nest is satisfying in itself.",
            "On a free weekend I gravitate to gatherings; I want to know what my people are up to.",
            "On a free weekend I want unbroken time with the person who fascinates me most.",
        ),
        set(
            "insp-2",
            "Under stress I audit my reserves: money, food, sleep, escape routes.",
            "Under stress I rally my network and talk things through widely.",
            "Under stress I seek out one intense presence that makes me feel alive again.",
        ),
        set(
            "insp-3",
            "In a new city I first secure lodging, food, and a sense of physical safety.",
            "In a new city I first map the scenes, groups, and communities worth joining.",
            "In a new city I first look for the one person or pursuit worth my full intensity.",
        ),
        set(
            "insp-4",
            "My recurring worries are about health, money, and being unprepared.",
            "My recurring worries are about standing, reputation, and being left out.",
            "My recurring worries are about losing the spark in my closest bond.",
        ),
        set(
            "insp-5",
            "People call me grounded and self-sufficient.",
            "People call me connected and community-minded.",
            "People call me intense and magnetic.",
        ),
    ]
}
