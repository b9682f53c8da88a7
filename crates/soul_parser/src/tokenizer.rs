//! Input tokenization.
//!
//! Splits an emote on whitespace, merges quoted messages (single or double
//! quotes) into a single token and strips trailing commas. Words are
//! lowercased; messages keep their case.

/// What a token is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A lowercase word.
    Word(String),
    /// A quoted message, without its quotes.
    Message(String),
}

/// A token along with where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputToken {
    /// The classified token.
    pub token: Token,
    /// The input text it was built from, as typed.
    pub raw: String,
    /// 1-based position of its first word in the sentence.
    pub position: usize,
}

impl InputToken {
    /// The word, if this is a word token.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match &self.token {
            Token::Word(word) => Some(word),
            Token::Message(_) => None,
        }
    }
}

/// Tokenizes emote input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string.
    ///
    /// - A word starting with `"` or `'` opens a message that runs until a
    ///   word ending with the same quote (or quote and comma), or to the end
    ///   of input.
    /// - One trailing comma is stripped from every other word.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<InputToken> {
        let words: Vec<&str> = input.split_whitespace().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < words.len() {
            let start = i;
            let word = words[i];

            if let Some((quote, rest)) = open_message(word) {
                let mut message = rest.to_string();
                let mut closed = closes_message(rest, quote);
                while !closed && i + 1 < words.len() {
                    i += 1;
                    message.push(' ');
                    message.push_str(words[i]);
                    closed = closes_message(words[i], quote);
                }
                if closed {
                    if message.ends_with(',') {
                        message.pop();
                    }
                    message.pop();
                }
                tokens.push(InputToken {
                    token: Token::Message(message),
                    raw: words[start..=i].join(" "),
                    position: start + 1,
                });
            } else {
                let stripped = word.strip_suffix(',').unwrap_or(word);
                if !stripped.is_empty() {
                    tokens.push(InputToken {
                        token: Token::Word(stripped.to_lowercase()),
                        raw: word.to_string(),
                        position: start + 1,
                    });
                }
            }
            i += 1;
        }

        tokens
    }
}

fn open_message(word: &str) -> Option<(char, &str)> {
    let quote = word.chars().next().filter(|c| matches!(c, '"' | '\''))?;
    Some((quote, &word[1..]))
}

fn closes_message(word: &str, quote: char) -> bool {
    let word = word.strip_suffix(',').unwrap_or(word);
    !word.is_empty() && word.ends_with(quote)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        InputTokenizer::tokenize(input)
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(
            kinds("smile at bob"),
            vec![
                Token::Word("smile".to_string()),
                Token::Word("at".to_string()),
                Token::Word("bob".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_lowercase() {
        assert_eq!(
            kinds("Smile at BOB"),
            vec![
                Token::Word("smile".to_string()),
                Token::Word("at".to_string()),
                Token::Word("bob".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_strips_trailing_comma() {
        assert_eq!(
            kinds("wave, bow and smile"),
            vec![
                Token::Word("wave".to_string()),
                Token::Word("bow".to_string()),
                Token::Word("and".to_string()),
                Token::Word("smile".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_quoted_message() {
        let tokens = InputTokenizer::tokenize("say \"Hello  there world\" to bob");
        assert_eq!(tokens[1].token, Token::Message("Hello there world".to_string()));
        assert_eq!(tokens[1].raw, "\"Hello there world\"");
        assert_eq!(tokens[1].position, 2);
        assert_eq!(tokens[2].position, 5);
    }

    #[test]
    fn test_tokenize_single_quoted_message() {
        assert_eq!(
            kinds("say 'hi there' to all"),
            vec![
                Token::Word("say".to_string()),
                Token::Message("hi there".to_string()),
                Token::Word("to".to_string()),
                Token::Word("all".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_quotes_must_match() {
        assert_eq!(
            kinds("say \"it's fine\""),
            vec![
                Token::Word("say".to_string()),
                Token::Message("it's fine".to_string()),
            ]
        );
        assert_eq!(
            kinds("say 'a \"b\" c'"),
            vec![
                Token::Word("say".to_string()),
                Token::Message("a \"b\" c".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_single_word_message() {
        assert_eq!(
            kinds("sing \"la\""),
            vec![
                Token::Word("sing".to_string()),
                Token::Message("la".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_unterminated_message_runs_to_end() {
        assert_eq!(
            kinds("say \"oh no"),
            vec![
                Token::Word("say".to_string()),
                Token::Message("oh no".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_message_followed_by_comma() {
        assert_eq!(
            kinds("say \"hi\", smile"),
            vec![
                Token::Word("say".to_string()),
                Token::Message("hi".to_string()),
                Token::Word("smile".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(InputTokenizer::tokenize("   ").is_empty());
    }
}
