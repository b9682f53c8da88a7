//! The emote parser.
//!
//! Orchestrates the full flow from raw input to a rendered [`Emote`]:
//! tokenize, classify word by word into clauses, reduce each clause and
//! wrap the lot in per-reader renderings.

use soul_foundation::{Ambiguity, ParseContinuation, Person, Result, SoulError};
use tracing::{debug, trace};

use crate::audience::{Audience, MAX_NAME_WORDS, NameMatch};
use crate::clause::ParsedClause;
use crate::modifier::{Form, Modifier};
use crate::pronouns::{self, LastTargets};
use crate::reducer::reduce;
use crate::render::{Emote, RenderedClause};
use crate::resolver::{self, Resolution};
use crate::tokenizer::{InputToken, InputTokenizer, Token};
use crate::vocabulary::Registry;

/// Connector words, skipped wherever they appear.
pub const NULL_WORDS: &[&str] = &["and", "&", "at", "to", "before", "in", "on", "the", "with"];

/// Words meaning the actor.
pub const SELF_WORDS: &[&str] = &["me", "myself", "i"];

/// Words meaning everyone present except the actor.
pub const GROUP_WORDS: &[&str] = &["all", "everybody", "everyone"];

/// Words that switch between adding and removing targets.
pub const EXCEPT_WORDS: &[&str] = &["except", "but"];

/// The emote parser and renderer.
///
/// Owns its [`Registry`]; everything else a parse needs is passed in.
#[derive(Clone, Debug, Default)]
pub struct Soul {
    registry: Registry,
}

impl Soul {
    /// Creates a parser over `registry`.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Creates a parser over the standard vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if the standard vocabulary fails to load.
    pub fn standard() -> Result<Self> {
        Ok(Self::new(Registry::standard()?))
    }

    /// The registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The registry, for adding and removing extensions.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    /// Parses an emote made by `audience.actor()`.
    ///
    /// `last` supplies targets for leading pronouns and is updated whenever a
    /// clause closes with targets.
    ///
    /// # Errors
    ///
    /// Returns a [`SoulError`] describing what the player got wrong. An
    /// ambiguous word yields [`SoulError::AmbiguousToken`], whose
    /// continuation can be passed to [`resume`](Self::resume).
    pub fn parse(&self, input: &str, audience: &Audience, last: &mut LastTargets) -> Result<Emote> {
        let tokens = InputTokenizer::tokenize(input);
        let Some(first) = tokens.first() else {
            return Err(SoulError::NoVerb);
        };

        let modifier = first.word().and_then(Modifier::from_word);
        let start = usize::from(modifier.is_some());
        if modifier.is_some() && tokens.len() == 1 {
            return Err(SoulError::MissingEmote {
                modifier: first.raw.to_lowercase(),
            });
        }

        let clauses = Webster::new(&self.registry, audience, &tokens, last).run(start)?;
        let form = modifier.map(Modifier::form).unwrap_or_default();
        self.render(audience, modifier, form, clauses)
    }

    /// Continues after an ambiguity.
    ///
    /// If `text` is a longer form of the ambiguous word, the original
    /// sentence is parsed again with `text` in its place. Otherwise `text` is
    /// parsed as a new emote.
    ///
    /// # Errors
    ///
    /// As for [`parse`](Self::parse).
    pub fn resume(
        &self,
        continuation: &ParseContinuation,
        text: &str,
        audience: &Audience,
        last: &mut LastTargets,
    ) -> Result<Emote> {
        match continuation.complete(text) {
            Some(sentence) => {
                debug!(%sentence, "resuming ambiguous emote");
                self.parse(&sentence, audience, last)
            }
            None => self.parse(text, audience, last),
        }
    }

    /// What the actor would see for `verb` on its own.
    ///
    /// Verbs that need a target are shown aimed at the actor.
    ///
    /// # Errors
    ///
    /// Returns [`SoulError::NoVerb`] for an unknown verb.
    pub fn preview(&self, verb: &str, actor: &Person) -> Result<String> {
        let definition = self.registry.lookup(verb).ok_or(SoulError::NoVerb)?;
        let mut clause = ParsedClause::new(verb);
        let reduced = match reduce(verb, definition, &clause) {
            Err(SoulError::MissingTarget { .. }) => {
                clause.add_target(actor);
                reduce(verb, definition, &clause)?
            }
            other => other?,
        };
        let rendered = RenderedClause::new(reduced, actor.clone(), false, Form::Finite);
        let emote = Emote::new(actor.clone(), Vec::new(), None, vec![rendered], vec![clause]);
        Ok(emote.actor_message())
    }

    fn render(
        &self,
        audience: &Audience,
        modifier: Option<Modifier>,
        form: Form,
        clauses: Vec<ParsedClause>,
    ) -> Result<Emote> {
        let actor = audience.actor();
        let mut rendered = Vec::with_capacity(clauses.len());
        let mut previous: Option<&[Person]> = None;

        for clause in &clauses {
            let definition = self.registry.lookup(&clause.verb).ok_or(SoulError::NoVerb)?;
            let reduced = reduce(&clause.verb, definition, clause)?;
            let repeated = !clause.targets.is_empty()
                && !clause.targets.contains(actor)
                && previous.is_some_and(|p| same_people(p, &clause.targets));
            rendered.push(RenderedClause::new(reduced, actor.clone(), repeated, form));
            previous = Some(clause.targets.as_slice());
        }

        let recipients = audience.others().cloned().collect();
        Ok(Emote::new(actor.clone(), recipients, modifier, rendered, clauses))
    }
}

fn same_people(a: &[Person], b: &[Person]) -> bool {
    a.len() == b.len() && a.iter().all(|p| b.contains(p))
}

/// The run of plain words starting at `tokens[start]`.
fn words_from(tokens: &[InputToken], start: usize) -> Vec<&str> {
    tokens[start..]
        .iter()
        .map_while(InputToken::word)
        .take(MAX_NAME_WORDS)
        .collect()
}

/// Word-by-word clause builder.
struct Webster<'a> {
    registry: &'a Registry,
    audience: &'a Audience,
    tokens: &'a [InputToken],
    last: &'a mut LastTargets,
    closed: Vec<ParsedClause>,
    current: ParsedClause,
    has_verb: bool,
    excluding: bool,
    intensifier: Option<(String, usize)>,
    previous_targets: Option<Vec<Person>>,
}

impl<'a> Webster<'a> {
    fn new(
        registry: &'a Registry,
        audience: &'a Audience,
        tokens: &'a [InputToken],
        last: &'a mut LastTargets,
    ) -> Self {
        Self {
            registry,
            audience,
            tokens,
            last,
            closed: Vec::new(),
            current: ParsedClause::default(),
            has_verb: false,
            excluding: false,
            intensifier: None,
            previous_targets: None,
        }
    }

    fn run(mut self, start: usize) -> Result<Vec<ParsedClause>> {
        let mut i = start;
        while i < self.tokens.len() {
            i += self.step(i)?;
        }
        if !self.has_verb {
            return Err(SoulError::NoVerb);
        }
        self.close()?;
        Ok(self.closed)
    }

    /// Classifies the token at `i` and returns how many tokens it used.
    fn step(&mut self, i: usize) -> Result<usize> {
        let tokens = self.tokens;
        let token = &tokens[i];
        let word = match &token.token {
            Token::Message(message) => {
                trace!(position = token.position, "message");
                self.current.message = Some(message.clone());
                return Ok(1);
            }
            Token::Word(word) => word.as_str(),
        };
        trace!(position = token.position, word, "classifying");
        if NULL_WORDS.contains(&word) {
            return Ok(1);
        }

        if self.registry.is_intensifier(word) {
            self.intensifier = Some((word.to_string(), token.position));
        } else if SELF_WORDS.contains(&word) {
            let actor = self.audience.actor().clone();
            self.apply(&[actor]);
        } else if pronouns::is_back_reference(word) {
            let set = self.previous_targets.as_deref().unwrap_or(self.last.get());
            let set = pronouns::resolve(word, set)?;
            if let Some(gone) = set.iter().find(|p| !self.audience.contains(p)) {
                debug!(person = %gone.name(), "back-reference to someone not present");
                return Err(SoulError::MissingBackReference);
            }
            let set = set.to_vec();
            self.apply(&set);
        } else if GROUP_WORDS.contains(&word) {
            if self.excluding {
                self.current.targets.clear();
            } else {
                let others: Vec<Person> = self.audience.others().cloned().collect();
                self.apply(&others);
            }
        } else if EXCEPT_WORDS.contains(&word) {
            if self.current.targets.is_empty() {
                return Err(SoulError::MisplacedExcept {
                    word: token.raw.clone(),
                });
            }
            self.excluding = !self.excluding;
        } else if word == "plainly" {
            self.current.plain = true;
        } else if let Some((person, count)) = self.audience.find_name(&words_from(tokens, i)) {
            let person = person.clone();
            self.apply(&[person]);
            return Ok(count);
        } else if self.registry.is_verb(word) {
            self.begin(word)?;
        } else if self.registry.is_adverb(word) {
            self.push_adverb(word);
        } else if let Some(phrase) = self.registry.bodypart(word) {
            self.current.bodyparts.push(phrase.to_string());
        } else {
            return self.resolve_prefix(i, word);
        }
        Ok(1)
    }

    fn resolve_prefix(&mut self, i: usize, word: &str) -> Result<usize> {
        match self.audience.find_prefix(word) {
            NameMatch::Found(person) => {
                let person = person.clone();
                self.apply(&[person]);
                return Ok(1);
            }
            NameMatch::Ambiguous(candidates) => {
                return Err(self.ambiguous(Ambiguity::Person, candidates, i, i));
            }
            NameMatch::None => {}
        }

        match resolver::resolve_adverb(self.registry, self.tokens, i) {
            Resolution::Found(phrase, consumed) => {
                self.push_adverb(&phrase);
                return Ok(consumed);
            }
            Resolution::Ambiguous { candidates, end } => {
                return Err(self.ambiguous(Ambiguity::Adverb, candidates, i, end));
            }
            Resolution::NotFound => {}
        }

        match resolver::resolve_bodypart(self.registry, word) {
            Resolution::Found(part, _) => {
                if let Some(phrase) = self.registry.bodypart(&part) {
                    self.current.bodyparts.push(phrase.to_string());
                }
                Ok(1)
            }
            Resolution::Ambiguous { candidates, .. } => {
                Err(self.ambiguous(Ambiguity::Bodypart, candidates, i, i))
            }
            Resolution::NotFound => Err(SoulError::unknown_token(self.tokens[i].position)),
        }
    }

    fn ambiguous(&self, kind: Ambiguity, candidates: Vec<String>, start: usize, end: usize) -> SoulError {
        let raw = |range: &[InputToken]| {
            range
                .iter()
                .map(|t| t.raw.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        };
        let continuation = ParseContinuation::new(
            raw(&self.tokens[..start]),
            raw(&self.tokens[start..=end]),
            raw(&self.tokens[end + 1..]),
        );
        debug!(?kind, candidates = candidates.len(), "ambiguous word");
        SoulError::AmbiguousToken {
            kind,
            candidates,
            continuation,
        }
    }

    fn apply(&mut self, people: &[Person]) {
        for person in people {
            if self.excluding {
                self.current.remove_target(person);
            } else {
                self.current.add_target(person);
            }
        }
    }

    fn push_adverb(&mut self, adverb: &str) {
        let phrase = match self.intensifier.take() {
            Some((intensifier, _)) => format!("{intensifier} {adverb}"),
            None => adverb.to_string(),
        };
        self.current.adverbs.push(phrase);
    }

    /// Starts a new verb, closing the previous clause if there was one.
    fn begin(&mut self, verb: &str) -> Result<()> {
        if self.has_verb {
            self.close()?;
            self.current = ParsedClause::new(verb);
        } else {
            self.current.verb = verb.to_string();
            self.has_verb = true;
        }
        Ok(())
    }

    /// Gives a pending intensifier to the verb's default adverb.
    fn settle_intensifier(&mut self) -> Result<()> {
        let Some((intensifier, position)) = self.intensifier.take() else {
            return Ok(());
        };
        let default = self
            .registry
            .lookup(&self.current.verb)
            .and_then(|definition| definition.defaults().adverb.as_deref());
        match default {
            Some(adverb) if !self.current.plain && self.current.adverbs.is_empty() => {
                self.current.adverbs.push(format!("{intensifier} {adverb}"));
                Ok(())
            }
            _ => Err(SoulError::unknown_token(position)),
        }
    }

    fn close(&mut self) -> Result<()> {
        self.settle_intensifier()?;
        let clause = std::mem::take(&mut self.current);
        debug!(
            verb = %clause.verb,
            targets = clause.targets.len(),
            adverbs = clause.adverbs.len(),
            "clause closed"
        );
        if !clause.targets.is_empty() {
            self.last.remember(&clause.targets);
            self.previous_targets = Some(clause.targets.clone());
        }
        self.excluding = false;
        self.closed.push(clause);
        Ok(())
    }
}
