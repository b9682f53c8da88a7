//! Persons and their pronoun forms.
//!
//! Soul never owns persons; the surrounding world hands it snapshots. Identity
//! is carried by [`PersonId`] alone, so two snapshots of the same person with
//! different display names still compare equal.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::SoulError;

/// Opaque identity handle for a person supplied by the world model.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonId(u64);

impl PersonId {
    /// Creates an identity handle from a raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonId({})", self.0)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Grammatical gender, which selects the pronoun forms.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    /// he / him / his
    Male,
    /// she / her / her
    Female,
    /// it / it / its
    #[default]
    Neuter,
    /// they / them / their
    Plural,
}

impl Gender {
    /// Subjective pronoun ("he").
    #[must_use]
    pub const fn subjective(self) -> &'static str {
        match self {
            Self::Male => "he",
            Self::Female => "she",
            Self::Neuter => "it",
            Self::Plural => "they",
        }
    }

    /// Objective pronoun ("him").
    #[must_use]
    pub const fn objective(self) -> &'static str {
        match self {
            Self::Male => "him",
            Self::Female => "her",
            Self::Neuter => "it",
            Self::Plural => "them",
        }
    }

    /// Possessive determiner ("his").
    #[must_use]
    pub const fn possessive(self) -> &'static str {
        match self {
            Self::Male => "his",
            Self::Female => "her",
            Self::Neuter => "its",
            Self::Plural => "their",
        }
    }

    /// Reflexive pronoun ("himself").
    #[must_use]
    pub const fn reflexive(self) -> &'static str {
        match self {
            Self::Male => "himself",
            Self::Female => "herself",
            Self::Neuter => "itself",
            Self::Plural => "themselves",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Neuter => "neuter",
            Self::Plural => "plural",
        };
        f.write_str(name)
    }
}

impl FromStr for Gender {
    type Err = SoulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m" | "male" | "he" => Ok(Self::Male),
            "f" | "female" | "she" => Ok(Self::Female),
            "n" | "neuter" | "it" => Ok(Self::Neuter),
            "p" | "plural" | "they" => Ok(Self::Plural),
            _ => Err(SoulError::UnknownGender(s.to_string())),
        }
    }
}

/// A person that can act or be addressed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    id: PersonId,
    name: String,
    gender: Gender,
}

impl Person {
    /// Creates a person snapshot.
    #[must_use]
    pub fn new(id: PersonId, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id,
            name: name.into(),
            gender,
        }
    }

    /// Identity handle.
    #[must_use]
    pub fn id(&self) -> PersonId {
        self.id
    }

    /// Display name, capitalized the way it is shown to others.
    #[must_use]
    pub fn name(&self) -> String {
        crate::grammar::capitalize(&self.name)
    }

    /// Lowercase name used when matching typed words.
    #[must_use]
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Grammatical gender.
    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Subjective pronoun.
    #[must_use]
    pub fn subjective(&self) -> &'static str {
        self.gender.subjective()
    }

    /// Objective pronoun.
    #[must_use]
    pub fn objective(&self) -> &'static str {
        self.gender.objective()
    }

    /// Possessive determiner.
    #[must_use]
    pub fn possessive(&self) -> &'static str {
        self.gender.possessive()
    }

    /// Reflexive pronoun.
    #[must_use]
    pub fn reflexive(&self) -> &'static str {
        self.gender.reflexive()
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn person_id_roundtrips_raw(raw: u64) {
            prop_assert_eq!(PersonId::new(raw).raw(), raw);
        }

        #[test]
        fn equality_follows_id(a: u64, b: u64, name in "[a-z]{1,8}") {
            let pa = Person::new(PersonId::new(a), name.clone(), Gender::Male);
            let pb = Person::new(PersonId::new(b), name, Gender::Female);
            prop_assert_eq!(pa == pb, a == b);
        }

        #[test]
        fn key_is_lowercase(name in "[A-Za-z]{1,12}") {
            let p = Person::new(PersonId::new(0), name.clone(), Gender::Neuter);
            prop_assert_eq!(p.key(), name.to_lowercase());
        }
    }
}
