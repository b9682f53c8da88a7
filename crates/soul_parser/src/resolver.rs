//! Prefix resolution for adverbs and body parts.
//!
//! Adverbs may span several words ("from the heart"), so an ambiguous
//! prefix is extended across the following tokens for as long as something
//! still matches.

use crate::tokenizer::InputToken;
use crate::vocabulary::Registry;

/// Outcome of resolving a prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// A single phrase, and how many tokens it covers.
    Found(String, usize),
    /// Several candidates, sorted; `end` is the index of the last token of
    /// the ambiguous text.
    Ambiguous {
        /// Every matching phrase.
        candidates: Vec<String>,
        /// Index of the last token involved.
        end: usize,
    },
    /// Nothing matches.
    NotFound,
}

/// Resolves an adverb prefix starting at `tokens[start]`.
///
/// Both tiers are searched together. An exact phrase wins over longer
/// phrases it is a prefix of.
#[must_use]
pub fn resolve_adverb(registry: &Registry, tokens: &[InputToken], start: usize) -> Resolution {
    let Some(first) = tokens.get(start).and_then(InputToken::word) else {
        return Resolution::NotFound;
    };

    let mut prefix = first.to_string();
    let mut matches = registry.any_adverbs_with_prefix(&prefix);
    if matches.is_empty() {
        return Resolution::NotFound;
    }

    let mut end = start;
    while matches.len() > 1 {
        let Some(next) = tokens.get(end + 1).and_then(InputToken::word) else {
            break;
        };
        let extended = format!("{prefix} {next}");
        let narrowed = registry.any_adverbs_with_prefix(&extended);
        if narrowed.is_empty() {
            break;
        }
        prefix = extended;
        matches = narrowed;
        end += 1;
    }

    if matches.len() == 1 {
        let phrase = matches.remove(0);
        let consumed = covered(&phrase, &tokens[start..]);
        return Resolution::Found(phrase, consumed);
    }
    if matches.contains(&prefix) {
        return Resolution::Found(prefix, end - start + 1);
    }
    Resolution::Ambiguous {
        candidates: matches,
        end,
    }
}

/// Resolves a single-token body-part prefix.
#[must_use]
pub fn resolve_bodypart(registry: &Registry, word: &str) -> Resolution {
    let mut matches = registry.bodyparts_with_prefix(word);
    match matches.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Found(matches.remove(0), 1),
        _ => Resolution::Ambiguous {
            candidates: matches,
            end: 0,
        },
    }
}

/// How many leading tokens the phrase covers.
///
/// Whole words keep counting; a word that is only a prefix of the phrase's
/// word counts and ends the run.
fn covered(phrase: &str, tokens: &[InputToken]) -> usize {
    let mut count = 0;
    for (expected, token) in phrase.split(' ').zip(tokens) {
        let Some(word) = token.word() else { break };
        if word == expected {
            count += 1;
        } else {
            if !word.is_empty() && expected.starts_with(word) {
                count += 1;
            }
            break;
        }
    }
    count.max(1)
}
