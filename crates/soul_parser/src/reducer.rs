//! Verb reduction: turns a parsed clause into per-reader templates.
//!
//! Reduction fills every slot that doesn't depend on the reader (`HOW`,
//! `AT`, `WHERE`, `WHAT`, `MSG`) and picks the templates for the verb's
//! shape. What's left is resolved per reader by [`crate::render`].

use soul_foundation::{Person, Result, SoulError, grammar};
use tracing::trace;

use crate::clause::ParsedClause;
use crate::template::{Segment, Slot, Template};
use crate::verb::{Conjugated, Perspectives, VerbDefinition, VerbShape};

/// A clause with its templates chosen and reader-independent slots filled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReducedClause {
    /// The verb name.
    pub verb: String,
    /// The clause's targets.
    pub targets: Vec<Person>,
    /// Templates for an ordinary emote.
    pub finite: Perspectives,
    /// Templates for "try to ..." framing.
    pub infinitive: Perspectives,
}

/// Templates picked for a shape, before conjugation.
enum Picked {
    /// One template, conjugated per reader.
    Single(Template),
    /// Separate first- and third-person templates.
    Pair(Template, Template),
    /// Independent templates per reader.
    Full(Perspectives),
}

/// Reduces `clause` using `definition`.
///
/// # Errors
///
/// Returns [`SoulError::MissingTarget`] if the chosen templates name a
/// target and the clause has none.
pub fn reduce(verb: &str, definition: &VerbDefinition, clause: &ParsedClause) -> Result<ReducedClause> {
    let targeted = !clause.targets.is_empty();

    let (picked, preposition) = match definition.shape() {
        VerbShape::Simple { text, at } => (Picked::Single(text.clone()), at.as_deref()),
        VerbShape::Default { preposition } => (
            Picked::Single(Template::verb_phrase(verb, &Template::default(), &[Slot::How, Slot::At])),
            Some(preposition.as_str()),
        ),
        VerbShape::Dual(pair) => (pair_of(pair), None),
        VerbShape::Personal {
            untargeted,
            targeted: with_target,
        } => {
            let text = if targeted { with_target } else { untargeted };
            (Picked::Single(text.clone()), None)
        }
        VerbShape::Quad {
            untargeted,
            targeted: with_target,
        } => (pair_of(if targeted { with_target } else { untargeted }), None),
        VerbShape::Previous { preposition } => (
            Picked::Single(Template::verb_phrase(verb, preposition, &[Slot::Who, Slot::How])),
            None,
        ),
        VerbShape::Physical { preposition } => (
            Picked::Single(Template::verb_phrase(
                verb,
                preposition,
                &[Slot::Who, Slot::How, Slot::Where],
            )),
            None,
        ),
        VerbShape::Short { preposition } => (
            Picked::Single(Template::verb_phrase(verb, preposition, &[Slot::How])),
            None,
        ),
        VerbShape::Full {
            untargeted,
            targeted: with_target,
        } => {
            let texts = if targeted { with_target } else { untargeted };
            (Picked::Full(texts.clone()), None)
        }
    };

    let fill = Fill::new(definition, clause, preposition);
    let (finite, infinitive) = match picked {
        Picked::Single(text) => {
            let text = fill.apply(&text);
            let first = text.conjugate("");
            let third = text.conjugate("s");
            (
                Perspectives {
                    actor: first.clone(),
                    target: third.clone(),
                    bystander: third,
                },
                Perspectives {
                    actor: first.clone(),
                    target: first.clone(),
                    bystander: first,
                },
            )
        }
        Picked::Pair(first, third) => {
            let first = fill.apply(&first).conjugate("");
            let third = fill.apply(&third).conjugate("s");
            (
                Perspectives {
                    actor: first.clone(),
                    target: third.clone(),
                    bystander: third,
                },
                Perspectives {
                    actor: first.clone(),
                    target: first.clone(),
                    bystander: first,
                },
            )
        }
        Picked::Full(texts) => {
            let filled = texts.map(|t| fill.apply(t));
            let finite = Perspectives {
                actor: filled.actor.conjugate(""),
                target: filled.target.conjugate("s"),
                bystander: filled.bystander.conjugate("s"),
            };
            (finite, filled.map(|t| t.conjugate("")))
        }
    };

    if !targeted && finite.iter().chain(infinitive.iter()).any(Template::needs_target) {
        return Err(SoulError::MissingTarget {
            verb: verb.to_string(),
        });
    }

    trace!(verb, targets = clause.targets.len(), "reduced clause");
    Ok(ReducedClause {
        verb: verb.to_string(),
        targets: clause.targets.clone(),
        finite,
        infinitive,
    })
}

fn pair_of(pair: &Conjugated) -> Picked {
    Picked::Pair(pair.first.clone(), pair.third.clone())
}

/// Replacements for the reader-independent slots.
struct Fill {
    how: Template,
    at: Template,
    place: Template,
    what: Template,
    msg: Template,
}

impl Fill {
    fn new(definition: &VerbDefinition, clause: &ParsedClause, preposition: Option<&str>) -> Self {
        let defaults = definition.defaults();

        let how = if clause.plain {
            Template::default()
        } else if clause.adverbs.is_empty() {
            defaults
                .adverb
                .as_deref()
                .map(Template::literal)
                .unwrap_or_default()
        } else {
            Template::literal(&grammar::join(&clause.adverbs, "and"))
        };

        let at = match preposition {
            Some(p) if !clause.targets.is_empty() => {
                let mut segments = Vec::new();
                if p.is_empty() {
                    segments.push(Segment::Slot {
                        slot: Slot::Who,
                        spaced: false,
                    });
                } else {
                    segments.push(Segment::Text(p.to_string()));
                    segments.push(Segment::Slot {
                        slot: Slot::Who,
                        spaced: true,
                    });
                }
                Template::from_segments(segments)
            }
            _ => Template::default(),
        };

        let place = if clause.bodyparts.is_empty() {
            defaults.bodypart.clone().unwrap_or_default()
        } else {
            Template::literal(&grammar::join(&clause.bodyparts, "and"))
        };

        let (what, msg) = match (&clause.message, &defaults.message) {
            (Some(message), _) => (
                Template::literal(message),
                Template::literal(&format!("'{message}'")),
            ),
            (None, Some(default)) => match default.strip_prefix('\'') {
                Some(bare) => (Template::literal(bare), Template::literal(bare)),
                None => (
                    Template::literal(default),
                    Template::literal(&format!("'{default}'")),
                ),
            },
            (None, None) => (Template::default(), Template::default()),
        };

        Self {
            how,
            at,
            place,
            what,
            msg,
        }
    }

    fn apply(&self, template: &Template) -> Template {
        template
            .substitute(Slot::At, &self.at)
            .substitute(Slot::How, &self.how)
            .substitute(Slot::Where, &self.place)
            .substitute(Slot::What, &self.what)
            .substitute(Slot::Msg, &self.msg)
    }
}
