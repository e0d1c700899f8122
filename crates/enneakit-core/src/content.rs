//! Static descriptive text attached to results: short type summaries and
//! growth/stress arrow narratives.

use crate::types::TypeId;

/// One-paragraph summary of a type, used in the final report.
pub fn type_summary(t: TypeId) -> &'static str {
    match t {
        TypeId::Reformer => {
            "Principled, purposeful, and self-controlled. Driven by a desire to be good and \
             to improve the world, with a vigilant inner critic measuring everything against \
             a high internal standard."
        }
        TypeId::Helper => {
            "Caring, interpersonal, and generous. Moves toward people with warmth and help, \
             reading needs others haven't voiced, while finding it hard to acknowledge needs \
             of their own."
        }
        TypeId::Achiever => {
            "Adaptable, driven, and image-conscious. Orients life around goals and the \
             recognition success brings, instinctively becoming whatever each situation \
             rewards."
        }
        TypeId::Individualist => {
            "Expressive, introspective, and emotionally honest. Searches for identity and \
             significance, drawn to depth and authenticity and haunted by a sense that \
             something essential is missing."
        }
        TypeId::Investigator => {
            "Perceptive, innovative, and self-contained. Conserves time and energy, retreats \
             to observe and understand, and armors against intrusion with competence and \
             privacy."
        }
        TypeId::Loyalist => {
            "Committed, responsible, and vigilant. Scans for what could go wrong, tests \
             before trusting, and builds security through loyalty, preparation, and allies."
        }
        TypeId::Enthusiast => {
            "Spontaneous, versatile, and optimistic. Keeps options open and plans full, \
             reframing pain into possibility and moving fast to stay ahead of deprivation."
        }
        TypeId::Challenger => {
            "Self-confident, decisive, and protective. Takes charge of situations, guards \
             autonomy fiercely, and treats vulnerability as a risk to be controlled."
        }
        TypeId::Peacemaker => {
            "Receptive, reassuring, and agreeable. Keeps inner and outer peace by merging \
             with others' agendas, muting preferences until they are hard to find."
        }
    }
}

/// One-line blurb for a core type leaning toward one of its wings.
pub fn wing_text(core: TypeId, wing: TypeId) -> &'static str {
    match (core.number(), wing.number()) {
        (1, 9) => "An idealist with a calm, detached streak: reforms by modeling rather than confronting.",
        (1, 2) => "A principled advocate: standards held warmly, corrections made for people's sake.",
        (2, 1) => "A dutiful giver: helps by principle, with a clear sense of the right way to serve.",
        (2, 3) => "An ambitious host: generosity that is social, visible, and well-connected.",
        (3, 2) => "A charming achiever: succeeds through people, warmth, and likability.",
        (3, 4) => "A reflective achiever: wants success that expresses something authentic.",
        (4, 3) => "An expressive individualist: depth polished for an audience, ambition close behind.",
        (4, 5) => "A withdrawn individualist: depth turned inward, intellectual as much as emotional.",
        (5, 4) => "An imaginative investigator: analysis with an aesthetic, personal edge.",
        (5, 6) => "A systematic investigator: knowledge gathered as preparation, loyal to a trusted few.",
        (6, 5) => "A reserved loyalist: manages doubt through research and self-containment.",
        (6, 7) => "An engaging loyalist: vigilance softened by humor, busyness, and company.",
        (7, 6) => "A grounded enthusiast: adventure preferred with trusted people along.",
        (7, 8) => "A driven enthusiast: appetite backed by bluntness and competitive push.",
        (8, 7) => "An expansive challenger: loud, fast, appetite-driven power.",
        (8, 9) => "A steady challenger: quiet strength that escalates only when truly pushed.",
        (9, 8) => "An assertive peacemaker: easygoing surface over stubborn, immovable force.",
        (9, 1) => "An orderly peacemaker: calm carried with a quiet sense of how things ought to be.",
        // Non-adjacent combinations never occur.
        _ => "A balanced blend of the core type and its adjacent wing.",
    }
}

/// Narrative for a type's growth (integration) direction.
pub fn growth_text(t: TypeId) -> &'static str {
    match t {
        TypeId::Reformer => {
            "In growth, Ones move toward Seven: the inner critic loosens and spontaneity, \
             play, and genuine enjoyment become available without guilt."
        }
        TypeId::Helper => {
            "In growth, Twos move toward Four: they turn their attention inward, own their \
             real feelings and needs, and care for themselves as honestly as for others."
        }
        TypeId::Achiever => {
            "In growth, Threes move toward Six: they commit to people and causes beyond \
             their image, becoming loyal, cooperative, and grounded in something larger \
             than achievement."
        }
        TypeId::Individualist => {
            "In growth, Fours move toward One: feeling becomes fuel for discipline, and \
             they build steady, principled structure around their creativity."
        }
        TypeId::Investigator => {
            "In growth, Fives move toward Eight: knowledge converts into confident action, \
             and they engage the world with embodied strength instead of watching it."
        }
        TypeId::Loyalist => {
            "In growth, Sixes move toward Nine: the scanning mind settles, trust comes \
             easier, and they rest in a calm that no longer requires constant vigilance."
        }
        TypeId::Enthusiast => {
            "In growth, Sevens move toward Five: they go deep instead of wide, finding \
             that sustained focus yields a satisfaction novelty never delivered."
        }
        TypeId::Challenger => {
            "In growth, Eights move toward Two: strength opens into warmth, and their \
             protective power is placed in open-hearted service of others."
        }
        TypeId::Peacemaker => {
            "In growth, Nines move toward Three: they wake up to their own agenda, invest \
             in their development, and discover that asserting themselves deepens rather \
             than destroys connection."
        }
    }
}

/// Narrative for a type's stress (disintegration) direction.
pub fn stress_text(t: TypeId) -> &'static str {
    match t {
        TypeId::Reformer => {
            "Under stress, Ones move toward Four: suppressed resentment turns to moody \
             self-pity and a sense of being uniquely burdened and misunderstood."
        }
        TypeId::Helper => {
            "Under stress, Twos move toward Eight: unacknowledged needs erupt as blame and \
             domineering demands for the appreciation they feel owed."
        }
        TypeId::Achiever => {
            "Under stress, Threes move toward Nine: they stall out, going through the \
             motions, numbing with busywork and disengaging from what they actually want."
        }
        TypeId::Individualist => {
            "Under stress, Fours move toward Two: they over-attach, suppressing their own \
             identity to earn love through clinging helpfulness."
        }
        TypeId::Investigator => {
            "Under stress, Fives move toward Seven: scattered, impulsive activity replaces \
             focus as the mind flees its own anxiety."
        }
        TypeId::Loyalist => {
            "Under stress, Sixes move toward Three: they mask anxiety with frantic \
             image-managing productivity, working harder while trusting less."
        }
        TypeId::Enthusiast => {
            "Under stress, Sevens move toward One: frustration hardens into perfectionism \
             and sharp-tongued criticism of everything falling short of the plan."
        }
        TypeId::Challenger => {
            "Under stress, Eights move toward Five: they withdraw into secretive, \
             strategizing isolation, hoarding information and cutting contact."
        }
        TypeId::Peacemaker => {
            "Under stress, Nines move toward Six: placid calm gives way to worst-case \
             worry, indecision, and anxious dependence on reassurance."
        }
    }
}
