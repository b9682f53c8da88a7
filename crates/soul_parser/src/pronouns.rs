//! Pronoun back-references.
//!
//! "it", "him", "her" and "them" refer back to the targets of the previous
//! clause. Before any clause of the current emote has closed, they refer to
//! the actor's [`LastTargets`] instead.

use soul_foundation::{Person, Result, SoulError};

/// Words that refer back to earlier targets.
pub const BACK_REFERENCES: &[&str] = &["it", "him", "her", "them"];

/// The most recently resolved target set of one actor.
///
/// Updated whenever a clause closes with targets; only the caller clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LastTargets {
    targets: Vec<Person>,
}

impl LastTargets {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a target set. Empty sets are ignored.
    pub fn remember(&mut self, targets: &[Person]) {
        if !targets.is_empty() {
            self.targets = targets.to_vec();
        }
    }

    /// The recorded targets.
    #[must_use]
    pub fn get(&self) -> &[Person] {
        &self.targets
    }

    /// Whether nothing is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Forgets the recorded targets.
    pub fn clear(&mut self) {
        self.targets.clear();
    }
}

/// Whether `word` is a back-reference pronoun.
#[must_use]
pub fn is_back_reference(word: &str) -> bool {
    BACK_REFERENCES.contains(&word)
}

/// Checks that `word` can refer to `set`.
///
/// "them" needs two or more persons, or a single person referred to as
/// "them". The other pronouns need exactly one person whose objective
/// pronoun is the word itself.
///
/// # Errors
///
/// Returns [`SoulError::MissingBackReference`] when the pronoun doesn't fit.
pub fn resolve<'a>(word: &str, set: &'a [Person]) -> Result<&'a [Person]> {
    let fits = match set {
        [] => false,
        [one] => one.objective() == word,
        _ => word == "them",
    };
    if fits {
        Ok(set)
    } else {
        Err(SoulError::MissingBackReference)
    }
}
