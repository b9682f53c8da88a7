//! Leading words that frame a whole emote ("suddenly", "fail", ...).

use std::fmt;

/// A modifier placed before the emote.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modifier {
    /// "You suddenly smile."
    Suddenly,
    /// "You smile again."
    Again,
    /// "You try to smile, but fail miserably."
    Fail,
    /// "You pretend to smile."
    Pretend,
    /// "You don't smile."
    Dont,
    /// "You attempt to smile, without much success."
    Attempt,
    /// Expresses a feeling; renders like a plain emote.
    Feeling,
}

/// Which verb form the clauses are rendered in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Form {
    /// "smiles"
    #[default]
    Finite,
    /// "to smile"
    Infinitive,
}

impl Modifier {
    /// Recognises a modifier word.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "suddenly" => Some(Self::Suddenly),
            "again" => Some(Self::Again),
            "fail" => Some(Self::Fail),
            "pretend" => Some(Self::Pretend),
            "dont" | "don't" => Some(Self::Dont),
            "attempt" => Some(Self::Attempt),
            "feeling" => Some(Self::Feeling),
            _ => None,
        }
    }

    /// The word as typed.
    #[must_use]
    pub const fn word(self) -> &'static str {
        match self {
            Self::Suddenly => "suddenly",
            Self::Again => "again",
            Self::Fail => "fail",
            Self::Pretend => "pretend",
            Self::Dont => "don't",
            Self::Attempt => "attempt",
            Self::Feeling => "feeling",
        }
    }

    /// The verb form clauses take under this modifier.
    ///
    /// Modifiers that say the action did not really happen take the
    /// infinitive.
    #[must_use]
    pub const fn form(self) -> Form {
        match self {
            Self::Fail | Self::Pretend | Self::Dont | Self::Attempt => Form::Infinitive,
            Self::Suddenly | Self::Again | Self::Feeling => Form::Finite,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}
