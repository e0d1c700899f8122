//! Domain vocabulary: the nine Enneagram types, the three instincts,
//! the three body-centers, and the fixed relationship tables between them
//! (wings, growth/stress arrows, harmonic and Hornevian groups, and the
//! curated list of commonly confused type pairs).

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One of the nine Enneagram personality types.
///
/// Serializes as its traditional number (1-9); deserialization also accepts
/// the stringified form, which is how JSON map keys arrive. Declaration
/// order matches numeric order, so the derived `Ord` gives the
/// deterministic tie-break order used throughout the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeId {
    Reformer,
    Helper,
    Achiever,
    Individualist,
    Investigator,
    Loyalist,
    Enthusiast,
    Challenger,
    Peacemaker,
}

impl TypeId {
    /// All nine types in numeric order.
    pub const ALL: [TypeId; 9] = [
        TypeId::Reformer,
        TypeId::Helper,
        TypeId::Achiever,
        TypeId::Individualist,
        TypeId::Investigator,
        TypeId::Loyalist,
        TypeId::Enthusiast,
        TypeId::Challenger,
        TypeId::Peacemaker,
    ];

    /// Traditional number for this type (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(n: u8) -> Option<TypeId> {
        match n {
            1..=9 => Some(TypeId::ALL[(n - 1) as usize]),
            _ => None,
        }
    }

    /// Traditional short name.
    pub fn name(self) -> &'static str {
        match self {
            TypeId::Reformer => "The Reformer",
            TypeId::Helper => "The Helper",
            TypeId::Achiever => "The Achiever",
            TypeId::Individualist => "The Individualist",
            TypeId::Investigator => "The Investigator",
            TypeId::Loyalist => "The Loyalist",
            TypeId::Enthusiast => "The Enthusiast",
            TypeId::Challenger => "The Challenger",
            TypeId::Peacemaker => "The Peacemaker",
        }
    }

    /// The two adjacent types that can serve as wings, in numeric order
    /// (9 wraps around to 1).
    pub fn wings(self) -> (TypeId, TypeId) {
        let idx = self as usize;
        (TypeId::ALL[(idx + 8) % 9], TypeId::ALL[(idx + 1) % 9])
    }

    /// Growth (integration) arrow target.
    pub fn growth_arrow(self) -> TypeId {
        match self {
            TypeId::Reformer => TypeId::Enthusiast,
            TypeId::Helper => TypeId::Individualist,
            TypeId::Achiever => TypeId::Loyalist,
            TypeId::Individualist => TypeId::Reformer,
            TypeId::Investigator => TypeId::Challenger,
            TypeId::Loyalist => TypeId::Peacemaker,
            TypeId::Enthusiast => TypeId::Investigator,
            TypeId::Challenger => TypeId::Helper,
            TypeId::Peacemaker => TypeId::Achiever,
        }
    }

    /// Stress (disintegration) arrow target.
    pub fn stress_arrow(self) -> TypeId {
        match self {
            TypeId::Reformer => TypeId::Individualist,
            TypeId::Helper => TypeId::Challenger,
            TypeId::Achiever => TypeId::Peacemaker,
            TypeId::Individualist => TypeId::Helper,
            TypeId::Investigator => TypeId::Enthusiast,
            TypeId::Loyalist => TypeId::Achiever,
            TypeId::Enthusiast => TypeId::Reformer,
            TypeId::Challenger => TypeId::Investigator,
            TypeId::Peacemaker => TypeId::Loyalist,
        }
    }

    pub fn center(self) -> Center {
        Center::of(self)
    }

    pub fn harmonic_group(self) -> HarmonicGroup {
        match self {
            TypeId::Helper | TypeId::Enthusiast | TypeId::Peacemaker => {
                HarmonicGroup::PositiveOutlook
            }
            TypeId::Reformer | TypeId::Achiever | TypeId::Investigator => {
                HarmonicGroup::Competency
            }
            TypeId::Individualist | TypeId::Loyalist | TypeId::Challenger => {
                HarmonicGroup::Reactive
            }
        }
    }

    pub fn hornevian_group(self) -> HornevianGroup {
        match self {
            TypeId::Achiever | TypeId::Enthusiast | TypeId::Challenger => {
                HornevianGroup::Assertive
            }
            TypeId::Reformer | TypeId::Helper | TypeId::Loyalist => HornevianGroup::Compliant,
            TypeId::Individualist | TypeId::Investigator | TypeId::Peacemaker => {
                HornevianGroup::Withdrawn
            }
        }
    }
}

impl From<TypeId> for u8 {
    fn from(t: TypeId) -> u8 {
        t.number()
    }
}

impl TryFrom<u8> for TypeId {
    type Error = String;

    fn try_from(n: u8) -> Result<TypeId, String> {
        TypeId::from_number(n).ok_or_else(|| format!("invalid Enneagram type number: {n}"))
    }
}

impl Serialize for TypeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for TypeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<TypeId, D::Error> {
        struct NumberVisitor;

        impl de::Visitor<'_> for NumberVisitor {
            type Value = TypeId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an Enneagram type number between 1 and 9")
            }

            fn visit_u64<E: de::Error>(self, n: u64) -> Result<TypeId, E> {
                u8::try_from(n)
                    .ok()
                    .and_then(TypeId::from_number)
                    .ok_or_else(|| E::custom(format!("invalid Enneagram type number: {n}")))
            }

            fn visit_i64<E: de::Error>(self, n: i64) -> Result<TypeId, E> {
                u8::try_from(n)
                    .ok()
                    .and_then(TypeId::from_number)
                    .ok_or_else(|| E::custom(format!("invalid Enneagram type number: {n}")))
            }

            // JSON map keys are strings, and buffered deserialization of
            // tagged enums also replays numbers-as-keys in string form.
            fn visit_str<E: de::Error>(self, s: &str) -> Result<TypeId, E> {
                s.parse::<u8>()
                    .ok()
                    .and_then(TypeId::from_number)
                    .ok_or_else(|| E::custom(format!("invalid Enneagram type number: {s:?}")))
            }
        }

        deserializer.deserialize_any(NumberVisitor)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One of the three instinctual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instinct {
    /// Self-preservation.
    Sp,
    /// Social.
    So,
    /// Sexual / one-to-one.
    Sx,
}

impl Instinct {
    pub const ALL: [Instinct; 3] = [Instinct::Sp, Instinct::So, Instinct::Sx];

    pub fn label(self) -> &'static str {
        match self {
            Instinct::Sp => "Self-Preservation",
            Instinct::So => "Social",
            Instinct::Sx => "One-to-One",
        }
    }
}

impl fmt::Display for Instinct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Instinct::Sp => "sp",
            Instinct::So => "so",
            Instinct::Sx => "sx",
        };
        write!(f, "{s}")
    }
}

/// One of the three body-centers of intelligence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Center {
    Gut,
    Heart,
    Head,
}

impl Center {
    pub const ALL: [Center; 3] = [Center::Gut, Center::Heart, Center::Head];

    /// The center a type belongs to: gut {8,9,1}, heart {2,3,4}, head {5,6,7}.
    pub fn of(t: TypeId) -> Center {
        match t {
            TypeId::Challenger | TypeId::Peacemaker | TypeId::Reformer => Center::Gut,
            TypeId::Helper | TypeId::Achiever | TypeId::Individualist => Center::Heart,
            TypeId::Investigator | TypeId::Loyalist | TypeId::Enthusiast => Center::Head,
        }
    }

    /// Members of this center in tritype digit order.
    pub fn members(self) -> [TypeId; 3] {
        match self {
            Center::Gut => [TypeId::Challenger, TypeId::Peacemaker, TypeId::Reformer],
            Center::Heart => [TypeId::Helper, TypeId::Achiever, TypeId::Individualist],
            Center::Head => [TypeId::Investigator, TypeId::Loyalist, TypeId::Enthusiast],
        }
    }
}

/// Harmonic group: how a type copes when it doesn't get what it wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonicGroup {
    PositiveOutlook,
    Competency,
    Reactive,
}

/// Hornevian group: a type's social stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HornevianGroup {
    Assertive,
    Compliant,
    Withdrawn,
}

/// Type pairs that test-takers commonly confuse. When two of these score
/// within the confusion gap of each other, a forced-choice sub-session is
/// queued to separate them.
///
/// Pairs are stored with the lower-numbered type first.
pub const CONFUSED_PAIRS: [(TypeId, TypeId); 7] = [
    (TypeId::Reformer, TypeId::Loyalist),
    (TypeId::Helper, TypeId::Peacemaker),
    (TypeId::Achiever, TypeId::Enthusiast),
    (TypeId::Achiever, TypeId::Challenger),
    (TypeId::Individualist, TypeId::Peacemaker),
    (TypeId::Investigator, TypeId::Peacemaker),
    (TypeId::Loyalist, TypeId::Peacemaker),
];

/// Check whether a pair (in either order) is in the curated confusion list.
pub fn is_confused_pair(a: TypeId, b: TypeId) -> bool {
    let key = if a <= b { (a, b) } else { (b, a) };
    CONFUSED_PAIRS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_round_trip() {
        for t in TypeId::ALL {
            assert_eq!(TypeId::from_number(t.number()), Some(t));
        }
        assert_eq!(TypeId::from_number(0), None);
        assert_eq!(TypeId::from_number(10), None);
    }

    #[test]
    fn test_wings_are_adjacent_with_wraparound() {
        assert_eq!(
            TypeId::Reformer.wings(),
            (TypeId::Peacemaker, TypeId::Helper)
        );
        assert_eq!(
            TypeId::Peacemaker.wings(),
            (TypeId::Challenger, TypeId::Reformer)
        );
        assert_eq!(
            TypeId::Investigator.wings(),
            (TypeId::Individualist, TypeId::Loyalist)
        );
    }

    #[test]
    fn test_arrows_are_mutual_cycles() {
        // Growth and stress arrows are inverses of each other.
        for t in TypeId::ALL {
            assert_eq!(t.growth_arrow().stress_arrow(), t);
            assert_eq!(t.stress_arrow().growth_arrow(), t);
        }
    }

    #[test]
    fn test_every_type_has_a_center() {
        let mut counts = std::collections::BTreeMap::new();
        for t in TypeId::ALL {
            *counts.entry(t.center()).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|&c| c == 3));
    }

    #[test]
    fn test_confused_pair_lookup_is_order_insensitive() {
        assert!(is_confused_pair(TypeId::Loyalist, TypeId::Reformer));
        assert!(is_confused_pair(TypeId::Reformer, TypeId::Loyalist));
        assert!(!is_confused_pair(TypeId::Reformer, TypeId::Helper));
    }

    #[test]
    fn test_serde_as_numbers() {
        let json = serde_json::to_string(&TypeId::Individualist).unwrap();
        assert_eq!(json, "4");
        let back: TypeId = serde_json::from_str("4").unwrap();
        assert_eq!(back, TypeId::Individualist);
        assert!(serde_json::from_str::<TypeId>("12").is_err());
    }

    #[test]
    fn test_serde_as_map_keys() {
        // JSON object keys are strings; both directions must cope.
        let map: std::collections::BTreeMap<TypeId, f64> =
            [(TypeId::Reformer, 2.0), (TypeId::Peacemaker, -1.0)]
                .iter()
                .cloned()
                .collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"1":2.0,"9":-1.0}"#);
        let back: std::collections::BTreeMap<TypeId, f64> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
