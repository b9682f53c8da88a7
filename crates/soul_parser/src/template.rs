//! Verb template markup.
//!
//! Templates are written as plain text with two kinds of markup:
//!
//! - `$` marks where the third-person verb suffix goes (`smile$` renders as
//!   "smile" for the actor and "smiles" for everyone else).
//! - `{NAME}` is a slot. A slot preceded by a single space absorbs that space
//!   and puts it back only when the slot renders to something, so
//!   `"smile$ {HOW} {AT}"` with no adverb and no target renders as "smile".
//!
//! `HOW`, `AT`, `WHERE`, `WHAT` and `MSG` are filled when a clause is reduced.
//! The remaining slots depend on who is reading and are filled at render
//! time.

use std::fmt;

use soul_foundation::TemplateError;

/// A named hole in a template.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Joined adverbs.
    How,
    /// Preposition plus targets, or nothing without targets.
    At,
    /// Joined body-part phrases.
    Where,
    /// The message, bare.
    What,
    /// The message, quoted.
    Msg,
    /// Target names.
    Who,
    /// Target objective pronoun.
    Obj,
    /// Target possessive names.
    Poss,
    /// Target possessive pronoun.
    Their,
    /// Actor objective pronoun.
    You,
    /// Actor possessive pronoun.
    Your,
    /// Actor objective pronoun, written before "self".
    My,
    /// Actor subjective pronoun.
    Pron,
    /// Target subjective pronoun.
    Subj,
    /// "is" or "are" depending on the targets.
    Is,
}

impl Slot {
    const ALL: [Slot; 15] = [
        Slot::How,
        Slot::At,
        Slot::Where,
        Slot::What,
        Slot::Msg,
        Slot::Who,
        Slot::Obj,
        Slot::Poss,
        Slot::Their,
        Slot::You,
        Slot::Your,
        Slot::My,
        Slot::Pron,
        Slot::Subj,
        Slot::Is,
    ];

    /// The name used in markup.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Slot::How => "HOW",
            Slot::At => "AT",
            Slot::Where => "WHERE",
            Slot::What => "WHAT",
            Slot::Msg => "MSG",
            Slot::Who => "WHO",
            Slot::Obj => "OBJ",
            Slot::Poss => "POSS",
            Slot::Their => "THEIR",
            Slot::You => "YOU",
            Slot::Your => "YOUR",
            Slot::My => "MY",
            Slot::Pron => "PRON",
            Slot::Subj => "SUBJ",
            Slot::Is => "IS",
        }
    }

    /// Looks a slot up by its markup name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Slot> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }

    /// Slots that can't be rendered without at least one target.
    #[must_use]
    pub const fn needs_target(self) -> bool {
        matches!(self, Slot::Who | Slot::Obj | Slot::Poss | Slot::Their)
    }
}

/// One piece of a parsed template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Literal text.
    Text(String),
    /// The third-person verb suffix marker.
    Suffix,
    /// A slot, with whether it absorbed a leading space.
    Slot {
        /// Which slot.
        slot: Slot,
        /// Whether a space is emitted before a non-empty rendering.
        spaced: bool,
    },
}

/// A parsed verb template.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses template markup.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] for unknown slot names or an unclosed `{`.
    pub fn parse(markup: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut chars = markup.chars();

        while let Some(ch) = chars.next() {
            match ch {
                '$' => {
                    flush(&mut text, &mut segments);
                    segments.push(Segment::Suffix);
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(TemplateError::Unterminated {
                            template: markup.to_string(),
                        });
                    }
                    let slot = Slot::from_name(&name).ok_or_else(|| TemplateError::UnknownSlot {
                        slot: name.clone(),
                        template: markup.to_string(),
                    })?;
                    let spaced = text.ends_with(' ');
                    if spaced {
                        text.pop();
                    }
                    flush(&mut text, &mut segments);
                    segments.push(Segment::Slot { slot, spaced });
                }
                _ => text.push(ch),
            }
        }
        flush(&mut text, &mut segments);
        Ok(Self { segments })
    }

    /// A template of fixed text with no markup.
    #[must_use]
    pub fn literal(text: &str) -> Self {
        let mut segments = Vec::new();
        if !text.is_empty() {
            segments.push(Segment::Text(text.to_string()));
        }
        Self { segments }
    }

    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Builds `"<verb>$ <tail> {slots...}"`, each slot spaced.
    #[must_use]
    pub fn verb_phrase(verb: &str, tail: &Template, slots: &[Slot]) -> Self {
        let mut segments = vec![Segment::Text(verb.to_string()), Segment::Suffix];
        if !tail.is_empty() {
            segments.push(Segment::Text(" ".to_string()));
            segments.extend(tail.segments.iter().cloned());
        }
        segments.extend(
            slots
                .iter()
                .map(|&slot| Segment::Slot { slot, spaced: true }),
        );
        Self { segments }
    }

    /// Whether the template has no segments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The parsed segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether `slot` appears anywhere.
    #[must_use]
    pub fn contains(&self, slot: Slot) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Slot { slot: found, .. } if *found == slot))
    }

    /// Whether any slot needs a target to render.
    #[must_use]
    pub fn needs_target(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Slot { slot, .. } if slot.needs_target()))
    }

    /// Replaces every occurrence of `slot` with `replacement`.
    ///
    /// An empty replacement removes the slot along with its absorbed space.
    #[must_use]
    pub fn substitute(&self, slot: Slot, replacement: &Template) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Slot { slot: found, spaced } if *found == slot => {
                    if replacement.is_empty() {
                        continue;
                    }
                    if *spaced {
                        segments.push(Segment::Text(" ".to_string()));
                    }
                    segments.extend(replacement.segments.iter().cloned());
                }
                other => segments.push(other.clone()),
            }
        }
        Self { segments }
    }

    /// Resolves the `$` marker to `suffix`.
    #[must_use]
    pub fn conjugate(&self, suffix: &str) -> Self {
        let segments = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Suffix => Segment::Text(suffix.to_string()),
                other => other.clone(),
            })
            .collect();
        Self { segments }
    }

    /// Renders to text, asking `resolve` for every remaining slot.
    ///
    /// A leftover `$` renders as nothing.
    pub fn render(&self, mut resolve: impl FnMut(Slot) -> String) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Suffix => {}
                Segment::Slot { slot, spaced } => {
                    let value = resolve(*slot);
                    if !value.is_empty() {
                        if *spaced {
                            out.push(' ');
                        }
                        out.push_str(&value);
                    }
                }
            }
        }
        out.trim().to_string()
    }

    /// Writes the template back out as markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Suffix => out.push('$'),
                Segment::Slot { slot, spaced } => {
                    if *spaced {
                        out.push(' ');
                    }
                    out.push('{');
                    out.push_str(slot.name());
                    out.push('}');
                }
            }
        }
        out
    }
}

fn flush(text: &mut String, segments: &mut Vec<Segment>) {
    if !text.is_empty() {
        segments.push(Segment::Text(std::mem::take(text)));
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

impl TryFrom<String> for Template {
    type Error = TemplateError;

    fn try_from(markup: String) -> Result<Self, Self::Error> {
        Template::parse(&markup)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.to_markup()
    }
}
