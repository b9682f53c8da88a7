//! Parsed clauses.

use soul_foundation::Person;

/// One verb with everything the player attached to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedClause {
    /// The verb name.
    pub verb: String,
    /// Targets in the order named, without duplicates.
    pub targets: Vec<Person>,
    /// Adverb phrases in the order given, intensifiers included.
    pub adverbs: Vec<String>,
    /// Set by `plainly`: no adverbs at all, not even the verb's default.
    pub plain: bool,
    /// The quoted message, if any.
    pub message: Option<String>,
    /// Body-part phrases ("on the hand").
    pub bodyparts: Vec<String>,
}

impl ParsedClause {
    /// Starts a clause for `verb`.
    #[must_use]
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            ..Self::default()
        }
    }

    /// Adds a target unless already present.
    pub fn add_target(&mut self, person: &Person) {
        if !self.targets.contains(person) {
            self.targets.push(person.clone());
        }
    }

    /// Removes a target if present.
    pub fn remove_target(&mut self, person: &Person) {
        self.targets.retain(|p| p != person);
    }

    /// Whether nothing but a verb has been collected.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.targets.is_empty()
            && self.adverbs.is_empty()
            && self.message.is_none()
            && self.bodyparts.is_empty()
    }
}
