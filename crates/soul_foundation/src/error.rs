//! Error types for Soul.
//!
//! Every failure a player can provoke is a [`SoulError`] value whose
//! `Display` is the sentence shown back to them.

use thiserror::Error;

use crate::continuation::ParseContinuation;
use crate::grammar;

/// Result alias used across the Soul crates.
pub type Result<T> = std::result::Result<T, SoulError>;

/// The main error type for parsing and rendering emotes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SoulError {
    /// The input contained no verb.
    #[error("No verb?")]
    NoVerb,

    /// A word could not be classified.
    #[error("The {ordinal} word in that sentence doesn't make sense to me.")]
    UnknownToken {
        /// 1-based position of the word in the sentence.
        position: usize,
        /// Spelled ordinal of `position`.
        ordinal: String,
    },

    /// A prefix matched more than one person, adverb or body part.
    #[error("{}\n{}", .kind.question(), grammar::join(.candidates, "or"))]
    AmbiguousToken {
        /// What the word could have been.
        kind: Ambiguity,
        /// Every candidate, in lexical order.
        candidates: Vec<String>,
        /// State needed to resume once the player picks a candidate.
        continuation: ParseContinuation,
    },

    /// A pronoun had nothing suitable to refer back to.
    #[error("Who?")]
    MissingBackReference,

    /// A verb that needs a target was used without one.
    #[error("Need person for verb {verb}.")]
    MissingTarget {
        /// The verb that needed a target.
        verb: String,
    },

    /// `except` or `but` appeared before anyone was named.
    #[error("That '{word}' doesn't look grammatically right there.")]
    MisplacedExcept {
        /// The offending word as typed.
        word: String,
    },

    /// A modifier word was given with nothing to modify.
    #[error("{}", missing_emote_question(.modifier))]
    MissingEmote {
        /// The modifier word as typed.
        modifier: String,
    },

    /// A gender name was not recognised.
    #[error("unknown gender: {0}")]
    UnknownGender(String),

    /// The verb registry rejected a change.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A verb template could not be parsed.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl SoulError {
    /// Creates an unknown-token error for a 1-based position.
    #[must_use]
    pub fn unknown_token(position: usize) -> Self {
        Self::UnknownToken {
            position,
            ordinal: grammar::ordinal(position),
        }
    }

    /// Returns the continuation if this is an ambiguity failure.
    #[must_use]
    pub fn continuation(&self) -> Option<&ParseContinuation> {
        match self {
            Self::AmbiguousToken { continuation, .. } => Some(continuation),
            _ => None,
        }
    }
}

fn missing_emote_question(modifier: &str) -> &'static str {
    match modifier {
        "suddenly" => "Suddenly what?",
        "again" => "Do what again?",
        "fail" => "Fail with what?",
        "pretend" => "Pretend to do what?",
        "dont" | "don't" => "Don't do what?",
        "attempt" => "Attempt what?",
        "feeling" => "What feeling?",
        _ => "Hmm, what?",
    }
}

/// What kind of word an ambiguous prefix was resolved against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ambiguity {
    /// A present person's name.
    Person,
    /// An adverb from either tier.
    Adverb,
    /// A body part.
    Bodypart,
}

impl Ambiguity {
    /// The question asked when the prefix is ambiguous.
    #[must_use]
    pub const fn question(self) -> &'static str {
        match self {
            Self::Person => "Who do you mean?",
            Self::Adverb => "What adverb was that?",
            Self::Bodypart => "What body part was that?",
        }
    }
}

/// Errors raised when mutating the verb registry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Extension verbs may not reuse a base verb name.
    #[error("'{0}' is a standard verb and can't be redefined")]
    ProtectedVerb(String),

    /// Verb and adverb names are non-empty lowercase words.
    #[error("'{0}' is not a usable name")]
    InvalidName(String),
}

/// Errors raised when parsing template markup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{NAME}` slot used a name that isn't known.
    #[error("unknown slot {{{slot}}} in template \"{template}\"")]
    UnknownSlot {
        /// The slot name as written.
        slot: String,
        /// The full template markup.
        template: String,
    },

    /// A `{` was never closed.
    #[error("unterminated slot in template \"{template}\"")]
    Unterminated {
        /// The full template markup.
        template: String,
    },
}
