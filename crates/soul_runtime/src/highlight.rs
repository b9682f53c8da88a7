//! Input highlighting for the REPL.

use std::borrow::Cow;

use soul_parser::Modifier;

/// Highlighter for emote input.
///
/// Quoted messages are yellow, REPL commands cyan and a leading modifier
/// word magenta.
pub struct SoulHighlighter;

impl SoulHighlighter {
    /// Creates a new highlighter.
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with(':') {
            return Cow::Owned(format!("\x1b[36m{line}\x1b[0m"));
        }
        if !line.contains(['"', '\'']) && !starts_with_modifier(line) {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut quote: Option<char> = None;
        let mut first_word = true;

        for (i, word) in line.split(' ').enumerate() {
            if i > 0 {
                result.push(' ');
            }
            if quote.is_none() {
                quote = word.chars().next().filter(|c| matches!(c, '"' | '\''));
                if quote.is_some() {
                    result.push_str("\x1b[33m");
                }
            }
            if first_word && !word.is_empty() && quote.is_none() && starts_with_modifier(word) {
                result.push_str("\x1b[35m");
                result.push_str(word);
                result.push_str("\x1b[0m");
            } else {
                result.push_str(word);
            }
            if !word.is_empty() {
                first_word = false;
            }
            if let Some(q) = quote {
                let closes = word.trim_end_matches(',').ends_with(q);
                if closes && (word.len() > 1 || i > 0) {
                    quote = None;
                    result.push_str("\x1b[0m");
                }
            }
        }
        if quote.is_some() {
            result.push_str("\x1b[0m");
        }

        Cow::Owned(result)
    }
}

impl Default for SoulHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

fn starts_with_modifier(line: &str) -> bool {
    let first = line.split_whitespace().next().unwrap_or_default();
    Modifier::from_word(&first.to_lowercase()).is_some()
}
