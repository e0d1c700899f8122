//! Expanded wing questions: for every core type, three Likert statements
//! leaning toward each adjacent wing.

use super::Question;
use crate::types::TypeId;

fn w(id: &str, core_type: TypeId, wing_type: TypeId, text: &str) -> Question {
    Question::Wing {
        id: id.into(),
        text: text.into(),
        core_type,
        wing_type,
    }
}

/// All wing questions for a given core type, in pool order.
pub fn for_type(core_type: TypeId) -> Vec<Question> {
    pool()
        .into_iter()
        .filter(|q| matches!(q, Question::Wing { core_type: c, .. } if *c == core_type))
        .collect()
}

pub fn pool() -> Vec<Question> {
    use TypeId::*;
    vec![
        // 1w9 / 1w2
        w("wing-1-9a", Reformer, Peacemaker, "My idealism is quiet and detached; I'd rather model the right way than push it."),
        w("wing-1-9b", Reformer, Peacemaker, "I stay calm and measured even when something is clearly wrong."),
        w("wing-1-9c", Reformer, Peacemaker, "I prefer improving things behind the scenes to confronting people directly."),
        w("wing-1-2a", Reformer, Helper, "My standards are in service of people; I correct because I care about them."),
        w("wing-1-2b", Reformer, Helper, "I get personally involved in helping others meet the standards I hold."),
        w("wing-1-2c", Reformer, Helper, "Warmth and advocacy come out alongside my criticism."),
        // 2w1 / 2w3
        w("wing-2-1a", Helper, Reformer, "I help according to principle; there is a right way to serve people."),
        w("wing-2-1b", Helper, Reformer, "I feel guilty when my care for others falls short of my own standards."),
        w("wing-2-1c", Helper, Reformer, "My giving is dutiful and structured more than showy."),
        w("wing-2-3a", Helper, Achiever, "I like my generosity to be visible and appreciated."),
        w("wing-2-3b", Helper, Achiever, "I'm drawn to helping successful or important people."),
        w("wing-2-3c", Helper, Achiever, "I network naturally; connecting people feels like a talent."),
        // 3w2 / 3w4
        w("wing-3-2a", Achiever, Helper, "My ambition runs through people; I win by being liked and helpful."),
        w("wing-3-2b", Achiever, Helper, "Encouraging others toward their goals is part of how I succeed."),
        w("wing-3-2c", Achiever, Helper, "Charm is one of my most effective tools."),
        w("wing-3-4a", Achiever, Individualist, "I want my achievements to express something authentic about me."),
        w("wing-3-4b", Achiever, Individualist, "Private self-doubt shadows my public competence."),
        w("wing-3-4c", Achiever, Individualist, "I'm drawn to work that is artful, not merely impressive."),
        // 4w3 / 4w5
        w("wing-4-3a", Individualist, Achiever, "I want my uniqueness to be recognized publicly."),
        w("wing-4-3b", Individualist, Achiever, "I polish how my depth comes across to an audience."),
        w("wing-4-3c", Individualist, Achiever, "Ambition and image matter to me more than I like to admit."),
        w("wing-4-5a", Individualist, Investigator, "I withdraw into my inner world and ideas rather than perform."),
        w("wing-4-5b", Individualist, Investigator, "My depth is intellectual as much as emotional."),
        w("wing-4-5c", Individualist, Investigator, "I'd rather be understood by a few than admired by many."),
        // 5w4 / 5w6
        w("wing-5-4a", Investigator, Individualist, "My analysis has an aesthetic, personal edge; ideas must feel meaningful."),
        w("wing-5-4b", Investigator, Individualist, "I'm drawn to strange, moody, or unconventional subjects."),
        w("wing-5-4c", Investigator, Individualist, "Emotional intensity leaks into my otherwise detached thinking."),
        w("wing-5-6a", Investigator, Loyalist, "I collect knowledge to be prepared for what could go wrong."),
        w("wing-5-6b", Investigator, Loyalist, "I'm more comfortable working within a trusted system or discipline."),
        w("wing-5-6c", Investigator, Loyalist, "Loyalty to a small circle matters alongside my independence."),
        // 6w5 / 6w7
        w("wing-6-5a", Loyalist, Investigator, "I manage anxiety by retreating into research and analysis."),
        w("wing-6-5b", Loyalist, Investigator, "I'm reserved and self-contained more than outgoing."),
        w("wing-6-5c", Loyalist, Investigator, "I trust systems and expertise over personalities."),
        w("wing-6-7a", Loyalist, Enthusiast, "I cope with worry through humor and staying busy."),
        w("wing-6-7b", Loyalist, Enthusiast, "I'm sociable and playful despite my underlying vigilance."),
        w("wing-6-7c", Loyalist, Enthusiast, "New experiences tempt me even when they feel risky."),
        // 7w6 / 7w8
        w("wing-7-6a", Enthusiast, Loyalist, "My enthusiasm is anchored by loyalty to my people."),
        w("wing-7-6b", Enthusiast, Loyalist, "Beneath the fun, I keep an eye out for what might go wrong."),
        w("wing-7-6c", Enthusiast, Loyalist, "I prefer adventures shared with a trusted group."),
        w("wing-7-8a", Enthusiast, Challenger, "I pursue what I want aggressively and hate being slowed down."),
        w("wing-7-8b", Enthusiast, Challenger, "I'm blunt and competitive underneath the playfulness."),
        w("wing-7-8c", Enthusiast, Challenger, "I take charge of the fun rather than wait for an invitation."),
        // 8w7 / 8w9
        w("wing-8-7a", Challenger, Enthusiast, "My power is loud, fast, and appetite-driven."),
        w("wing-8-7b", Challenger, Enthusiast, "I charge into new ventures; restraint bores me."),
        w("wing-8-7c", Challenger, Enthusiast, "I dominate a room with energy and humor."),
        w("wing-8-9a", Challenger, Peacemaker, "My strength is steady and quiet; I don't need to prove it."),
        w("wing-8-9b", Challenger, Peacemaker, "I protect calmly and escalate only when truly pushed."),
        w("wing-8-9c", Challenger, Peacemaker, "People describe me as grounded more than intimidating."),
        // 9w8 / 9w1
        w("wing-9-8a", Peacemaker, Challenger, "Under my easygoing surface there is stubborn, immovable force."),
        w("wing-9-8b", Peacemaker, Challenger, "When finally pushed too far, my anger arrives all at once."),
        w("wing-9-8c", Peacemaker, Challenger, "I assert myself physically and practically more than verbally."),
        w("wing-9-1a", Peacemaker, Reformer, "My calm carries a quiet sense of how things ought to be."),
        w("wing-9-1b", Peacemaker, Reformer, "I keep order and routine as a way of keeping peace."),
        w("wing-9-1c", Peacemaker, Reformer, "I judge silently even while accommodating outwardly."),
    ]
}
