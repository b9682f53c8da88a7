//! Who is around when an emote is made.

use soul_foundation::Person;

/// Longest name, in words, matched across several tokens.
pub const MAX_NAME_WORDS: usize = 5;

/// The actor plus everyone present who can be targeted.
///
/// `present` may or may not include the actor; [`others`](Self::others)
/// always leaves them out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Audience {
    actor: Person,
    present: Vec<Person>,
}

/// Result of matching a name prefix against the people present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameMatch<'a> {
    /// Exactly one name starts with the prefix.
    Found(&'a Person),
    /// Several names start with the prefix; their keys, sorted.
    Ambiguous(Vec<String>),
    /// Nobody matches.
    None,
}

impl Audience {
    /// Creates an audience.
    #[must_use]
    pub fn new(actor: Person, present: Vec<Person>) -> Self {
        Self { actor, present }
    }

    /// The person making the emote.
    #[must_use]
    pub fn actor(&self) -> &Person {
        &self.actor
    }

    /// Everyone present, as given.
    #[must_use]
    pub fn present(&self) -> &[Person] {
        &self.present
    }

    /// Everyone present except the actor, in the order given.
    pub fn others(&self) -> impl Iterator<Item = &Person> {
        self.present.iter().filter(move |p| p.id() != self.actor.id())
    }

    /// Whether `person` is the actor or one of the people present.
    #[must_use]
    pub fn contains(&self, person: &Person) -> bool {
        *person == self.actor || self.present.contains(person)
    }

    /// The person whose lowercase name is exactly `word`, actor included.
    #[must_use]
    pub fn find_exact(&self, word: &str) -> Option<&Person> {
        std::iter::once(&self.actor)
            .chain(self.others())
            .find(|p| p.key() == word)
    }

    /// The person whose name is spelled by the leading `words`, and how many
    /// words it takes. Shorter names are tried first.
    #[must_use]
    pub fn find_name(&self, words: &[&str]) -> Option<(&Person, usize)> {
        let mut name = String::new();
        for (count, word) in words.iter().take(MAX_NAME_WORDS).enumerate() {
            if count > 0 {
                name.push(' ');
            }
            name.push_str(word);
            if let Some(person) = self.find_exact(&name) {
                return Some((person, count + 1));
            }
        }
        None
    }

    /// People other than the actor whose name starts with `prefix`.
    ///
    /// Only lowercase letters and spaces are matched; anything else finds
    /// nobody.
    #[must_use]
    pub fn find_prefix(&self, prefix: &str) -> NameMatch<'_> {
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_lowercase() || c == ' ') {
            return NameMatch::None;
        }

        let mut found: Vec<(String, &Person)> = self
            .others()
            .map(|p| (p.key(), p))
            .filter(|(key, _)| key.starts_with(prefix))
            .collect();
        found.sort_by(|a, b| a.0.cmp(&b.0));
        found.dedup_by(|a, b| a.0 == b.0);

        match found.as_slice() {
            [] => NameMatch::None,
            [(_, person)] => NameMatch::Found(person),
            _ => NameMatch::Ambiguous(found.into_iter().map(|(key, _)| key).collect()),
        }
    }
}
