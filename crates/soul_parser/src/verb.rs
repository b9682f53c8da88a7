//! Verb definitions.
//!
//! A verb is a [`VerbShape`] (which templates it has and how they combine
//! with targets) plus optional [`VerbDefaults`] used when the player leaves a
//! slot empty.

use soul_foundation::TemplateError;

use crate::template::Template;

/// One template per reader: the actor, an addressed target, everyone else.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Perspectives {
    /// What the actor reads.
    pub actor: Template,
    /// What each target reads.
    pub target: Template,
    /// What bystanders read.
    pub bystander: Template,
}

impl Perspectives {
    /// Parses three templates.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if any markup is invalid.
    pub fn parse(actor: &str, target: &str, bystander: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            actor: Template::parse(actor)?,
            target: Template::parse(target)?,
            bystander: Template::parse(bystander)?,
        })
    }

    /// Applies `f` to each template.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(&Template) -> Template) -> Self {
        Self {
            actor: f(&self.actor),
            target: f(&self.target),
            bystander: f(&self.bystander),
        }
    }

    /// Iterates the three templates.
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        [&self.actor, &self.target, &self.bystander].into_iter()
    }
}

/// First- and third-person wordings of the same template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conjugated {
    /// "cry"
    pub first: Template,
    /// "cries"
    pub third: Template,
}

impl Conjugated {
    /// Parses both wordings.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if either markup is invalid.
    pub fn parse(first: &str, third: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            first: Template::parse(first)?,
            third: Template::parse(third)?,
        })
    }
}

/// How a verb's templates are built and chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerbShape {
    /// A single template. `{AT}` becomes `at {WHO}` when there are targets
    /// and `at` is set, and disappears otherwise.
    Simple {
        /// The template.
        text: Template,
        /// Preposition placed before the targets.
        at: Option<String>,
    },
    /// `"<verb>$ {HOW} {AT}"` with `preposition` before the targets.
    Default {
        /// Preposition placed before the targets.
        preposition: String,
    },
    /// Separate first- and third-person templates.
    Dual(Conjugated),
    /// One template without targets, another with.
    Personal {
        /// Used when nobody is targeted.
        untargeted: Template,
        /// Used when somebody is targeted.
        targeted: Template,
    },
    /// A [`Dual`](Self::Dual) pair for each of untargeted and targeted use.
    Quad {
        /// Used when nobody is targeted.
        untargeted: Conjugated,
        /// Used when somebody is targeted.
        targeted: Conjugated,
    },
    /// `"<verb>$ <preposition> {WHO} {HOW}"`; needs a target.
    Previous {
        /// Text between the verb and the targets.
        preposition: Template,
    },
    /// `"<verb>$ <preposition> {WHO} {HOW} {WHERE}"`; needs a target.
    Physical {
        /// Text between the verb and the targets.
        preposition: Template,
    },
    /// `"<verb>$ <preposition> {HOW}"`; never shows a target.
    Short {
        /// Text after the verb.
        preposition: Template,
    },
    /// Six independent templates.
    Full {
        /// Used when nobody is targeted.
        untargeted: Perspectives,
        /// Used when somebody is targeted.
        targeted: Perspectives,
    },
}

/// Values used for slots the player didn't fill.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbDefaults {
    /// Adverb used when none was given.
    pub adverb: Option<String>,
    /// Message used when none was given. A leading `'` means "show unquoted".
    pub message: Option<String>,
    /// Body-part phrase used when none was given. May contain slots.
    pub bodypart: Option<Template>,
}

/// A registered verb.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbDefinition {
    shape: VerbShape,
    defaults: VerbDefaults,
}

impl VerbDefinition {
    /// Creates a definition from a shape with no defaults.
    #[must_use]
    pub fn new(shape: VerbShape) -> Self {
        Self {
            shape,
            defaults: VerbDefaults::default(),
        }
    }

    /// A [`VerbShape::Simple`] verb.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the markup is invalid.
    pub fn simple(text: &str, at: Option<&str>) -> Result<Self, TemplateError> {
        Ok(Self::new(VerbShape::Simple {
            text: Template::parse(text)?,
            at: at.map(str::to_string),
        }))
    }

    /// A [`VerbShape::Default`] verb.
    #[must_use]
    pub fn stem(preposition: &str) -> Self {
        Self::new(VerbShape::Default {
            preposition: preposition.to_string(),
        })
    }

    /// A [`VerbShape::Dual`] verb.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if either markup is invalid.
    pub fn dual(first: &str, third: &str) -> Result<Self, TemplateError> {
        Ok(Self::new(VerbShape::Dual(Conjugated::parse(first, third)?)))
    }

    /// A [`VerbShape::Personal`] verb.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if either markup is invalid.
    pub fn personal(untargeted: &str, targeted: &str) -> Result<Self, TemplateError> {
        Ok(Self::new(VerbShape::Personal {
            untargeted: Template::parse(untargeted)?,
            targeted: Template::parse(targeted)?,
        }))
    }

    /// A [`VerbShape::Quad`] verb from four markups: untargeted first/third,
    /// then targeted first/third.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if any markup is invalid.
    pub fn quad(texts: [&str; 4]) -> Result<Self, TemplateError> {
        let [a, b, c, d] = texts;
        Ok(Self::new(VerbShape::Quad {
            untargeted: Conjugated::parse(a, b)?,
            targeted: Conjugated::parse(c, d)?,
        }))
    }

    /// A [`VerbShape::Previous`] verb.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the markup is invalid.
    pub fn previous(preposition: &str) -> Result<Self, TemplateError> {
        Ok(Self::new(VerbShape::Previous {
            preposition: Template::parse(preposition)?,
        }))
    }

    /// A [`VerbShape::Physical`] verb.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the markup is invalid.
    pub fn physical(preposition: &str) -> Result<Self, TemplateError> {
        Ok(Self::new(VerbShape::Physical {
            preposition: Template::parse(preposition)?,
        }))
    }

    /// A [`VerbShape::Short`] verb.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the markup is invalid.
    pub fn short(preposition: &str) -> Result<Self, TemplateError> {
        Ok(Self::new(VerbShape::Short {
            preposition: Template::parse(preposition)?,
        }))
    }

    /// A [`VerbShape::Full`] verb.
    #[must_use]
    pub fn full(untargeted: Perspectives, targeted: Perspectives) -> Self {
        Self::new(VerbShape::Full {
            untargeted,
            targeted,
        })
    }

    /// Sets the default adverb.
    #[must_use]
    pub fn with_adverb(mut self, adverb: &str) -> Self {
        self.defaults.adverb = Some(adverb.to_string());
        self
    }

    /// Sets the default message.
    #[must_use]
    pub fn with_message(mut self, message: &str) -> Self {
        self.defaults.message = Some(message.to_string());
        self
    }

    /// Sets the default body part.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the markup is invalid.
    pub fn with_bodypart(mut self, bodypart: &str) -> Result<Self, TemplateError> {
        self.defaults.bodypart = Some(Template::parse(bodypart)?);
        Ok(self)
    }

    /// The shape.
    #[must_use]
    pub fn shape(&self) -> &VerbShape {
        &self.shape
    }

    /// The defaults.
    #[must_use]
    pub fn defaults(&self) -> &VerbDefaults {
        &self.defaults
    }
}
