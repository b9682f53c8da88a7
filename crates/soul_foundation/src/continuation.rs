//! Resumable parse state for ambiguous input.

/// The sentence split around an ambiguous word.
///
/// Returned inside [`SoulError::AmbiguousToken`](crate::SoulError::AmbiguousToken).
/// When the player's next input extends [`uncertain_part`](Self::uncertain_part),
/// [`complete`](Self::complete) rebuilds the whole sentence with the
/// disambiguated word in place.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseContinuation {
    parsed_part: String,
    uncertain_part: String,
    unparsed_part: String,
}

impl ParseContinuation {
    /// Creates a continuation from the three sentence parts.
    #[must_use]
    pub fn new(
        parsed_part: impl Into<String>,
        uncertain_part: impl Into<String>,
        unparsed_part: impl Into<String>,
    ) -> Self {
        Self {
            parsed_part: parsed_part.into(),
            uncertain_part: uncertain_part.into(),
            unparsed_part: unparsed_part.into(),
        }
    }

    /// Words before the ambiguous one, including any modifier.
    #[must_use]
    pub fn parsed_part(&self) -> &str {
        &self.parsed_part
    }

    /// The ambiguous text as the player typed it.
    #[must_use]
    pub fn uncertain_part(&self) -> &str {
        &self.uncertain_part
    }

    /// Words after the ambiguous text.
    #[must_use]
    pub fn unparsed_part(&self) -> &str {
        &self.unparsed_part
    }

    /// Rebuilds the full sentence if `text` is a longer form of the
    /// uncertain part; otherwise `None` and `text` is a fresh command.
    #[must_use]
    pub fn complete(&self, text: &str) -> Option<String> {
        let text = text.trim();
        let uncertain = self.uncertain_part.to_lowercase();
        if text.len() <= uncertain.len() || !text.to_lowercase().starts_with(&uncertain) {
            return None;
        }
        let parts: Vec<&str> = [self.parsed_part.as_str(), text, self.unparsed_part.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        Some(parts.join(" "))
    }
}
