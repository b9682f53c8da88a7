//! Per-reader rendering and sentence assembly.
//!
//! Every clause is rendered three ways: for the actor, for each person it
//! targets, and for everyone else. An [`Emote`] joins the clause texts
//! ("a, b and c") and wraps them in the subject and modifier framing.

use soul_foundation::{Person, grammar};

use crate::clause::ParsedClause;
use crate::modifier::{Form, Modifier};
use crate::reducer::ReducedClause;
use crate::template::{Slot, Template};

/// A reduced clause ready to render for any reader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedClause {
    reduced: ReducedClause,
    actor: Person,
    repeated: bool,
    form: Form,
}

impl RenderedClause {
    /// Wraps a reduced clause.
    ///
    /// `repeated` is set when the clause targets the same people as the one
    /// before it; names are then replaced by pronouns.
    #[must_use]
    pub fn new(reduced: ReducedClause, actor: Person, repeated: bool, form: Form) -> Self {
        Self {
            reduced,
            actor,
            repeated,
            form,
        }
    }

    /// The verb name.
    #[must_use]
    pub fn verb(&self) -> &str {
        &self.reduced.verb
    }

    /// Who the clause is aimed at.
    #[must_use]
    pub fn targets(&self) -> &[Person] {
        &self.reduced.targets
    }

    /// The clause as the actor reads it.
    #[must_use]
    pub fn actor_text(&self) -> String {
        self.render_for(Some(&self.actor))
    }

    /// The clause as an uninvolved bystander reads it.
    #[must_use]
    pub fn bystander_text(&self) -> String {
        self.render_for(None)
    }

    /// The clause as `reader` reads it.
    #[must_use]
    pub fn text_for(&self, reader: &Person) -> String {
        self.render_for(Some(reader))
    }

    fn render_for(&self, reader: Option<&Person>) -> String {
        let perspectives = match self.form {
            Form::Finite => &self.reduced.finite,
            Form::Infinitive => &self.reduced.infinitive,
        };
        let template: &Template = match reader {
            Some(r) if *r == self.actor => &perspectives.actor,
            Some(r) if self.reduced.targets.contains(r) => &perspectives.target,
            _ => &perspectives.bystander,
        };
        template.render(|slot| self.resolve(slot, reader))
    }

    fn resolve(&self, slot: Slot, reader: Option<&Person>) -> String {
        let actor = &self.actor;
        let targets = &self.reduced.targets;
        let is_reader = |p: &Person| reader.is_some_and(|r| r == p);
        let reader_targeted = targets.iter().any(is_reader);

        match slot {
            Slot::Who if self.repeated => self.resolve(Slot::Obj, reader),
            Slot::Poss if self.repeated => self.resolve(Slot::Their, reader),
            Slot::Who => {
                let words: Vec<String> = targets
                    .iter()
                    .map(|t| match (is_reader(t), t == actor) {
                        (true, true) => "yourself".to_string(),
                        (true, false) => "you".to_string(),
                        (false, true) => actor.reflexive().to_string(),
                        (false, false) => t.name(),
                    })
                    .collect();
                grammar::join(&words, "and")
            }
            Slot::Poss => {
                let words: Vec<String> = targets
                    .iter()
                    .map(|t| match (is_reader(t), t == actor) {
                        (true, true) => "your own".to_string(),
                        (true, false) => "your".to_string(),
                        (false, true) => format!("{} own", actor.possessive()),
                        (false, false) => grammar::possessive(&t.name()),
                    })
                    .collect();
                grammar::join(&words, "and")
            }
            Slot::Their => match targets.as_slice() {
                [] => String::new(),
                [t] if is_reader(t) => "your".to_string(),
                [t] => t.possessive().to_string(),
                _ if reader_targeted => "your".to_string(),
                _ => "their".to_string(),
            },
            Slot::Obj => match targets.as_slice() {
                [] => String::new(),
                [t] if is_reader(t) && t == actor => "yourself".to_string(),
                [t] if is_reader(t) => "you".to_string(),
                [t] if t == actor => actor.reflexive().to_string(),
                [t] => t.objective().to_string(),
                _ if reader_targeted => "all of you".to_string(),
                _ => "them".to_string(),
            },
            Slot::Subj => match targets.as_slice() {
                [] => String::new(),
                [t] if is_reader(t) => "you".to_string(),
                [t] => t.subjective().to_string(),
                _ if reader_targeted => "you".to_string(),
                _ => "they".to_string(),
            },
            Slot::You | Slot::Pron if is_reader(actor) => "you".to_string(),
            Slot::Your | Slot::My if is_reader(actor) => "your".to_string(),
            Slot::You | Slot::My => actor.objective().to_string(),
            Slot::Your => actor.possessive().to_string(),
            Slot::Pron => actor.subjective().to_string(),
            Slot::Is => {
                if reader_targeted || targets.len() > 1 {
                    "are".to_string()
                } else {
                    "is".to_string()
                }
            }
            Slot::How | Slot::At | Slot::Where | Slot::What | Slot::Msg => String::new(),
        }
    }
}

/// A fully parsed emote, ready to show to anyone present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Emote {
    actor: Person,
    recipients: Vec<Person>,
    modifier: Option<Modifier>,
    clauses: Vec<RenderedClause>,
    breakdown: Vec<ParsedClause>,
}

impl Emote {
    /// Assembles an emote. `recipients` should not include the actor.
    #[must_use]
    pub fn new(
        actor: Person,
        recipients: Vec<Person>,
        modifier: Option<Modifier>,
        clauses: Vec<RenderedClause>,
        breakdown: Vec<ParsedClause>,
    ) -> Self {
        Self {
            actor,
            recipients,
            modifier,
            clauses,
            breakdown,
        }
    }

    // =========================================================================
    // Messages
    // =========================================================================

    /// The full sentence the actor sees: "You smile happily at Bob."
    #[must_use]
    pub fn actor_message(&self) -> String {
        let texts: Vec<String> = self.clauses.iter().map(RenderedClause::actor_text).collect();
        self.frame(true, &texts)
    }

    /// The full sentence `reader` sees.
    #[must_use]
    pub fn message_for(&self, reader: &Person) -> String {
        if *reader == self.actor {
            return self.actor_message();
        }
        let texts: Vec<String> = self.clauses.iter().map(|c| c.text_for(reader)).collect();
        self.frame(false, &texts)
    }

    /// The full sentence an uninvolved bystander sees.
    #[must_use]
    pub fn bystander_message(&self) -> String {
        let texts: Vec<String> = self.clauses.iter().map(RenderedClause::bystander_text).collect();
        self.frame(false, &texts)
    }

    fn frame(&self, for_actor: bool, texts: &[String]) -> String {
        let body = grammar::join(texts, "and");
        let name = self.actor.name();

        let subject = match (self.modifier, for_actor) {
            (Some(Modifier::Suddenly), true) => "You suddenly".to_string(),
            (Some(Modifier::Suddenly), false) => format!("{name} suddenly"),
            (Some(Modifier::Fail), true) => "You try to".to_string(),
            (Some(Modifier::Fail), false) => format!("{name} tries to"),
            (Some(Modifier::Pretend), true) => "You pretend to".to_string(),
            (Some(Modifier::Pretend), false) => format!("{name} pretends to"),
            (Some(Modifier::Dont), true) => "You don't".to_string(),
            (Some(Modifier::Dont), false) => format!("{name} doesn't"),
            (Some(Modifier::Attempt), true) => "You attempt to".to_string(),
            (Some(Modifier::Attempt), false) => format!("{name} attempts to"),
            (_, true) => "You".to_string(),
            (_, false) => name,
        };

        let closing = match (self.modifier, for_actor) {
            (Some(Modifier::Again), _) => " again.",
            (Some(Modifier::Fail), true) => ", but fail miserably.",
            (Some(Modifier::Fail), false) => ", but fails miserably.",
            (Some(Modifier::Attempt), _) => ", without much success.",
            _ if self.terminated() => "",
            _ => ".",
        };

        format!("{subject} {body}{closing}")
    }

    /// Whether the actor's text already ends a sentence.
    fn terminated(&self) -> bool {
        self.clauses
            .last()
            .is_some_and(|c| grammar::is_terminated(&c.actor_text()))
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Who made the emote.
    #[must_use]
    pub fn actor(&self) -> &Person {
        &self.actor
    }

    /// Everyone who should see a message, excluding the actor.
    #[must_use]
    pub fn recipients(&self) -> &[Person] {
        &self.recipients
    }

    /// The leading modifier, if any.
    #[must_use]
    pub fn modifier(&self) -> Option<Modifier> {
        self.modifier
    }

    /// The rendered clauses, in order.
    #[must_use]
    pub fn clauses(&self) -> &[RenderedClause] {
        &self.clauses
    }

    /// What was parsed out of the input, clause by clause.
    #[must_use]
    pub fn breakdown(&self) -> &[ParsedClause] {
        &self.breakdown
    }

    /// Everyone targeted by any clause, first mention first.
    #[must_use]
    pub fn targets(&self) -> Vec<Person> {
        let mut all: Vec<Person> = Vec::new();
        for person in self.clauses.iter().flat_map(RenderedClause::targets) {
            if !all.contains(person) {
                all.push(person.clone());
            }
        }
        all
    }
}
