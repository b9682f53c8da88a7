//! REPL session state.
//!
//! A session plays the part of the surrounding world: it owns the parser,
//! the people in the room, each actor's remembered targets and any
//! continuation left over from an ambiguous emote.

use std::collections::HashMap;
use std::path::Path;

use soul_foundation::{Gender, ParseContinuation, Person, PersonId, SoulError};
use soul_parser::{Audience, Emote, LastTargets, Soul};
use tracing::{debug, info};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::serialize;

/// Session state for a REPL.
#[derive(Debug)]
pub struct Session {
    soul: Soul,
    actor: Person,
    present: Vec<Person>,
    last_targets: HashMap<PersonId, LastTargets>,
    pending: Option<ParseContinuation>,
    next_id: u64,
}

impl Session {
    /// Creates a session from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the standard vocabulary fails to load, or if the
    /// configured extension file can't be read.
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let mut session = Self {
            soul: Soul::standard()?,
            actor: Person::new(PersonId::new(1), config.actor.as_str(), config.gender),
            present: Vec::new(),
            last_targets: HashMap::new(),
            pending: None,
            next_id: 2,
        };
        session.present.push(session.actor.clone());
        for (name, gender) in &config.present {
            session.enter(name, *gender);
        }
        if let Some(path) = &config.extensions {
            session.load_extensions(path)?;
        }
        Ok(session)
    }

    // =========================================================================
    // Emotes
    // =========================================================================

    /// Parses an emote by the current actor.
    ///
    /// If the previous emote was ambiguous, this input is first tried as
    /// the answer. A new ambiguity is remembered for the next call.
    ///
    /// # Errors
    ///
    /// Returns the parser's error.
    pub fn emote(&mut self, input: &str) -> std::result::Result<Emote, SoulError> {
        let audience = self.audience();
        let last = self.last_targets.entry(self.actor.id()).or_default();
        let result = match self.pending.take() {
            Some(continuation) => self.soul.resume(&continuation, input, &audience, last),
            None => self.soul.parse(input, &audience, last),
        };
        if let Err(err) = &result {
            self.pending = err.continuation().cloned();
        }
        result
    }

    /// The continuation left by an ambiguous emote, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&ParseContinuation> {
        self.pending.as_ref()
    }

    /// Forgets the current actor's remembered targets.
    pub fn forget(&mut self) {
        if let Some(last) = self.last_targets.get_mut(&self.actor.id()) {
            last.clear();
        }
    }

    /// The current actor's remembered targets.
    #[must_use]
    pub fn last_targets(&self) -> &[Person] {
        self.last_targets
            .get(&self.actor.id())
            .map(LastTargets::get)
            .unwrap_or_default()
    }

    // =========================================================================
    // People
    // =========================================================================

    /// The current actor plus everyone present.
    #[must_use]
    pub fn audience(&self) -> Audience {
        Audience::new(self.actor.clone(), self.present.clone())
    }

    /// The current actor.
    #[must_use]
    pub fn actor(&self) -> &Person {
        &self.actor
    }

    /// Everyone in the room, the actor included.
    #[must_use]
    pub fn present(&self) -> &[Person] {
        &self.present
    }

    /// Adds someone to the room.
    pub fn enter(&mut self, name: &str, gender: Gender) -> Person {
        let person = Person::new(PersonId::new(self.next_id), name, gender);
        self.next_id += 1;
        debug!(person = %person, id = %person.id(), "entered");
        self.present.push(person.clone());
        person
    }

    /// Removes someone from the room by name.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Usage`] for the actor or an unknown name.
    pub fn leave(&mut self, name: &str) -> Result<Person> {
        let key = name.to_lowercase();
        if key == self.actor.key() {
            return Err(RuntimeError::Usage("the actor can't leave".to_string()));
        }
        let index = self
            .present
            .iter()
            .position(|p| p.key() == key)
            .ok_or_else(|| RuntimeError::Usage(format!("nobody called {name} is here")))?;
        let person = self.present.remove(index);
        self.last_targets.remove(&person.id());
        for last in self.last_targets.values_mut() {
            if last.get().contains(&person) {
                last.clear();
            }
        }
        Ok(person)
    }

    /// Switches the actor to someone present.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Usage`] for an unknown name.
    pub fn act_as(&mut self, name: &str) -> Result<&Person> {
        let key = name.to_lowercase();
        let person = self
            .present
            .iter()
            .find(|p| p.key() == key)
            .cloned()
            .ok_or_else(|| RuntimeError::Usage(format!("nobody called {name} is here")))?;
        self.actor = person;
        self.pending = None;
        Ok(&self.actor)
    }

    // =========================================================================
    // Vocabulary
    // =========================================================================

    /// The parser.
    #[must_use]
    pub fn soul(&self) -> &Soul {
        &self.soul
    }

    /// The parser, for registry changes.
    pub fn soul_mut(&mut self) -> &mut Soul {
        &mut self.soul
    }

    /// Saves the extension tier to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be written.
    pub fn save_extensions(&self, path: &Path) -> Result<()> {
        let extensions = self.soul.registry().extensions();
        serialize::save_to_file(&extensions, path)?;
        info!(path = %path.display(), verbs = extensions.verbs.len(), "saved extensions");
        Ok(())
    }

    /// Replaces the extension tier with the contents of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or its contents clash
    /// with the base vocabulary.
    pub fn load_extensions(&mut self, path: &Path) -> Result<()> {
        let extensions = serialize::load_from_file(path)?;
        let verbs = extensions.verbs.len();
        self.soul.registry_mut().restore_extensions(extensions)?;
        info!(path = %path.display(), verbs, "loaded extensions");
        Ok(())
    }
}
