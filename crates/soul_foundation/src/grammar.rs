//! Small English helpers shared by the parser and the renderer.

/// Uppercases the first character of `word`, leaving the rest alone.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Joins items as "a, b and c" using `conjunction` before the last item.
///
/// ```
/// use soul_foundation::grammar::join;
///
/// assert_eq!(join(&["wave", "bow", "smile"], "and"), "wave, bow and smile");
/// assert_eq!(join(&["bob", "bobby"], "or"), "bob or bobby");
/// ```
#[must_use]
pub fn join<S: AsRef<str>>(items: &[S], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} {conjunction} {}", head.join(", "), last.as_ref())
        }
    }
}

/// Possessive form of a display name: "Bob's", "James'".
#[must_use]
pub fn possessive(name: &str) -> String {
    if name.ends_with('s') {
        format!("{name}'")
    } else {
        format!("{name}'s")
    }
}

/// Spelled ordinal for a 1-based position.
///
/// Positions up to twelve are written out; later ones use numeric suffixes.
#[must_use]
pub fn ordinal(position: usize) -> String {
    const WORDS: [&str; 12] = [
        "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
        "tenth", "eleventh", "twelfth",
    ];
    if (1..=WORDS.len()).contains(&position) {
        return WORDS[position - 1].to_string();
    }
    let suffix = match (position % 10, position % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{position}{suffix}")
}

/// Whether a sentence already carries terminal punctuation.
#[must_use]
pub fn is_terminated(text: &str) -> bool {
    text.ends_with(['.', '?', '!'])
}
