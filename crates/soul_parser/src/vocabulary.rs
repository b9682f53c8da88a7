//! The verb, adverb and body-part registry.
//!
//! Two tiers of verbs and adverbs are kept: the base tier, loaded once and
//! never changed, and an extension tier that hosts add to and remove from at
//! runtime. Tiers are `im` ordered collections, so cloning a registry to
//! snapshot it is cheap and prefix searches come back in lexical order.

use im::{OrdMap, OrdSet};
use soul_foundation::{RegistryError, Result};
use tracing::debug;

use crate::stdlib;
use crate::verb::VerbDefinition;

/// Which tier a word lives in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tier {
    /// Loaded at startup, immutable.
    Base,
    /// Added at runtime.
    Extension,
}

/// The extension tier on its own, for persisting between sessions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extensions {
    /// Extension verbs by name.
    pub verbs: OrdMap<String, VerbDefinition>,
    /// Extension adverbs.
    pub adverbs: OrdSet<String>,
}

/// Runtime storage for everything a player can type.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    base_verbs: OrdMap<String, VerbDefinition>,
    extension_verbs: OrdMap<String, VerbDefinition>,
    base_adverbs: OrdSet<String>,
    extension_adverbs: OrdSet<String>,
    intensifiers: OrdSet<String>,
    bodyparts: OrdMap<String, String>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the standard verbs, adverbs, intensifiers
    /// and body parts.
    ///
    /// # Errors
    ///
    /// Returns an error if a standard template fails to parse.
    pub fn standard() -> Result<Self> {
        let mut registry = Self::new();
        for (name, definition) in stdlib::base_verbs()? {
            registry.base_verbs.insert(name.to_string(), definition);
        }
        registry.base_adverbs = stdlib::ADVERBS
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        registry.intensifiers = stdlib::INTENSIFIERS
            .iter()
            .map(|word| (*word).to_string())
            .collect();
        registry.bodyparts = stdlib::BODYPARTS
            .iter()
            .map(|(word, phrase)| ((*word).to_string(), (*phrase).to_string()))
            .collect();
        debug!(
            verbs = registry.base_verbs.len(),
            adverbs = registry.base_adverbs.len(),
            "loaded standard vocabulary"
        );
        Ok(registry)
    }

    /// Adds a verb to the base tier. Intended for building custom tables.
    pub fn insert_base_verb(&mut self, name: &str, definition: VerbDefinition) {
        self.base_verbs.insert(name.to_string(), definition);
    }

    /// Adds an adverb to the base tier.
    pub fn insert_base_adverb(&mut self, adverb: &str) {
        self.base_adverbs.insert(adverb.to_string());
    }

    /// Adds an intensifier such as "very".
    pub fn insert_intensifier(&mut self, word: &str) {
        self.intensifiers.insert(word.to_string());
    }

    /// Maps a body-part word to the phrase it renders as.
    pub fn insert_bodypart(&mut self, word: &str, phrase: &str) {
        self.bodyparts.insert(word.to_string(), phrase.to_string());
    }

    // =========================================================================
    // Verbs
    // =========================================================================

    /// Looks a verb up, extension tier first.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&VerbDefinition> {
        self.extension_verbs
            .get(name)
            .or_else(|| self.base_verbs.get(name))
    }

    /// Whether `name` is a verb in either tier.
    #[must_use]
    pub fn is_verb(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Registers extension verbs, replacing extension verbs of the same name.
    ///
    /// Nothing is registered if any name is unusable or belongs to a base
    /// verb.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ProtectedVerb`] or
    /// [`RegistryError::InvalidName`].
    pub fn register_extension<I, S>(&mut self, verbs: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, VerbDefinition)>,
        S: Into<String>,
    {
        let verbs: Vec<(String, VerbDefinition)> =
            verbs.into_iter().map(|(n, d)| (n.into(), d)).collect();
        for (name, _) in &verbs {
            if !is_word(name) {
                return Err(RegistryError::InvalidName(name.clone()).into());
            }
            if self.base_verbs.contains_key(name) {
                return Err(RegistryError::ProtectedVerb(name.clone()).into());
            }
        }
        for (name, definition) in verbs {
            debug!(verb = %name, "registered extension verb");
            self.extension_verbs.insert(name, definition);
        }
        Ok(())
    }

    /// Removes extension verbs. Names not in the extension tier are ignored.
    pub fn unregister_extension<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            if self.extension_verbs.remove(name.as_ref()).is_some() {
                debug!(verb = name.as_ref(), "removed extension verb");
            }
        }
    }

    /// All verb names across both tiers, sorted.
    #[must_use]
    pub fn verb_names(&self) -> Vec<String> {
        let mut names: OrdSet<String> = self.base_verbs.keys().cloned().collect();
        for name in self.extension_verbs.keys() {
            names.insert(name.clone());
        }
        names.into_iter().collect()
    }

    /// Base verb names, sorted.
    #[must_use]
    pub fn base_verb_names(&self) -> Vec<String> {
        self.base_verbs.keys().cloned().collect()
    }

    /// Extension verb names, sorted.
    #[must_use]
    pub fn extension_verb_names(&self) -> Vec<String> {
        self.extension_verbs.keys().cloned().collect()
    }

    // =========================================================================
    // Adverbs
    // =========================================================================

    /// Adds extension adverbs. Adverbs already known in either tier are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidName`] if an adverb isn't made of
    /// lowercase words; nothing is added in that case.
    pub fn register_adverb<I, S>(&mut self, adverbs: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let adverbs: Vec<String> = adverbs.into_iter().map(Into::into).collect();
        if let Some(bad) = adverbs.iter().find(|a| !is_phrase(a)) {
            return Err(RegistryError::InvalidName(bad.clone()).into());
        }
        for adverb in adverbs {
            if !self.base_adverbs.contains(&adverb) {
                debug!(adverb = %adverb, "registered extension adverb");
                self.extension_adverbs.insert(adverb);
            }
        }
        Ok(())
    }

    /// Removes extension adverbs. Base adverbs can't be removed.
    pub fn unregister_adverb<I, S>(&mut self, adverbs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for adverb in adverbs {
            self.extension_adverbs.remove(adverb.as_ref());
        }
    }

    /// Whether `word` is an adverb in either tier.
    #[must_use]
    pub fn is_adverb(&self, word: &str) -> bool {
        self.base_adverbs.contains(word) || self.extension_adverbs.contains(word)
    }

    /// Adverbs in `tier` starting with `prefix`, in lexical order.
    ///
    /// Prefixes containing anything other than lowercase letters and spaces
    /// match nothing.
    #[must_use]
    pub fn adverbs_with_prefix(&self, tier: Tier, prefix: &str) -> Vec<String> {
        let set = match tier {
            Tier::Base => &self.base_adverbs,
            Tier::Extension => &self.extension_adverbs,
        };
        if !is_prefix(prefix) {
            return Vec::new();
        }
        set.range(prefix.to_string()..)
            .take_while(|adverb| adverb.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// Adverbs in either tier starting with `prefix`, merged in lexical
    /// order.
    #[must_use]
    pub fn any_adverbs_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut matches = self.adverbs_with_prefix(Tier::Base, prefix);
        matches.extend(self.adverbs_with_prefix(Tier::Extension, prefix));
        matches.sort();
        matches.dedup();
        matches
    }

    /// Adverbs in `tier`, sorted.
    #[must_use]
    pub fn adverbs(&self, tier: Tier) -> Vec<String> {
        match tier {
            Tier::Base => self.base_adverbs.iter().cloned().collect(),
            Tier::Extension => self.extension_adverbs.iter().cloned().collect(),
        }
    }

    // =========================================================================
    // Intensifiers and body parts
    // =========================================================================

    /// Whether `word` is an intensifier ("very", "quite", ...).
    #[must_use]
    pub fn is_intensifier(&self, word: &str) -> bool {
        self.intensifiers.contains(word)
    }

    /// Intensifiers, sorted.
    #[must_use]
    pub fn intensifiers(&self) -> Vec<String> {
        self.intensifiers.iter().cloned().collect()
    }

    /// The phrase for an exact body-part word.
    #[must_use]
    pub fn bodypart(&self, word: &str) -> Option<&str> {
        self.bodyparts.get(word).map(String::as_str)
    }

    /// Body-part words starting with `prefix`, in lexical order.
    #[must_use]
    pub fn bodyparts_with_prefix(&self, prefix: &str) -> Vec<String> {
        if !is_prefix(prefix) {
            return Vec::new();
        }
        self.bodyparts
            .range(prefix.to_string()..)
            .take_while(|(word, _)| word.starts_with(prefix))
            .map(|(word, _)| word.clone())
            .collect()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// A copy of the extension tier.
    #[must_use]
    pub fn extensions(&self) -> Extensions {
        Extensions {
            verbs: self.extension_verbs.clone(),
            adverbs: self.extension_adverbs.clone(),
        }
    }

    /// Replaces the extension tier.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the registry unchanged, if a verb collides
    /// with a base verb or a name is unusable.
    pub fn restore_extensions(&mut self, extensions: Extensions) -> Result<()> {
        let mut staged = self.clone();
        staged.extension_verbs = OrdMap::new();
        staged.extension_adverbs = OrdSet::new();
        staged.register_extension(extensions.verbs)?;
        staged.register_adverb(extensions.adverbs)?;
        *self = staged;
        Ok(())
    }
}

/// A single lowercase word, e.g. a verb name.
fn is_word(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '-' || c == '\'')
}

/// One or more lowercase words separated by single spaces.
fn is_phrase(text: &str) -> bool {
    !text.is_empty()
        && text
            .split(' ')
            .all(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()))
}

/// Prefix searches only consider lowercase letters and spaces.
fn is_prefix(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_lowercase() || c == ' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use soul_foundation::SoulError;

    fn registry() -> Registry {
        Registry::standard().unwrap()
    }

    #[test]
    fn standard_tables_load() {
        let r = registry();
        assert!(r.is_verb("smile"));
        assert!(r.is_verb("kick"));
        assert!(r.is_adverb("happily"));
        assert!(r.is_intensifier("very"));
        assert_eq!(r.bodypart("hurts"), Some("where it hurts"));
        assert!(r.base_verb_names().len() > 150);
    }

    #[test]
    fn extension_verbs_register_and_unregister() {
        let mut r = registry();
        let wiggle = VerbDefinition::simple("wiggle$ {YOUR} ears {HOW} {AT}", Some("at")).unwrap();
        r.register_extension([("earwiggle", wiggle)]).unwrap();
        assert!(r.is_verb("earwiggle"));
        assert_eq!(r.extension_verb_names(), vec!["earwiggle".to_string()]);

        r.unregister_extension(["earwiggle", "smile"]);
        assert!(!r.is_verb("earwiggle"));
        assert!(r.is_verb("smile"));
    }

    #[test]
    fn base_verbs_cannot_be_shadowed() {
        let mut r = registry();
        let err = r
            .register_extension([("smile", VerbDefinition::stem("at"))])
            .unwrap_err();
        assert_eq!(
            err,
            SoulError::from(RegistryError::ProtectedVerb("smile".to_string()))
        );
    }

    #[test]
    fn failed_registration_registers_nothing() {
        let mut r = registry();
        let result = r.register_extension([
            ("zonk", VerbDefinition::stem("at")),
            ("Bad Name", VerbDefinition::stem("at")),
        ]);
        assert!(result.is_err());
        assert!(!r.is_verb("zonk"));
    }

    #[test]
    fn re_registering_replaces_extension() {
        let mut r = registry();
        r.register_extension([("zonk", VerbDefinition::stem("at"))])
            .unwrap();
        r.register_extension([("zonk", VerbDefinition::stem("to"))])
            .unwrap();
        assert_eq!(r.lookup("zonk"), Some(&VerbDefinition::stem("to")));
    }

    #[test]
    fn adverb_prefix_is_sorted_and_tiered() {
        let mut r = registry();
        assert_eq!(r.adverbs_with_prefix(Tier::Base, "ang"), vec!["angrily"]);
        let s = r.adverbs_with_prefix(Tier::Base, "s");
        assert!(s.len() > 2);
        let mut sorted = s.clone();
        sorted.sort();
        assert_eq!(s, sorted);

        r.register_adverb(["zanily"]).unwrap();
        assert!(r.adverbs_with_prefix(Tier::Base, "zan").is_empty());
        assert_eq!(r.adverbs_with_prefix(Tier::Extension, "zan"), vec!["zanily"]);

        r.register_adverb(["angstily"]).unwrap();
        assert_eq!(r.any_adverbs_with_prefix("ang"), vec!["angrily", "angstily"]);

        r.unregister_adverb(["zanily", "happily"]);
        assert!(!r.is_adverb("zanily"));
        assert!(r.is_adverb("happily"));
    }

    #[test]
    fn prefix_rejects_non_letters() {
        let r = registry();
        assert!(r.adverbs_with_prefix(Tier::Base, "a.").is_empty());
        assert!(r.adverbs_with_prefix(Tier::Base, "").is_empty());
        assert!(r.bodyparts_with_prefix("H").is_empty());
    }

    #[test]
    fn bodypart_prefix() {
        let r = registry();
        assert_eq!(r.bodyparts_with_prefix("h"), vec!["hand", "head", "hurts"]);
        assert_eq!(r.bodyparts_with_prefix("sho"), vec!["shoulder"]);
    }

    #[test]
    fn restore_extensions_round_trip() {
        let mut r = registry();
        r.register_extension([("zonk", VerbDefinition::stem("at"))])
            .unwrap();
        r.register_adverb(["zanily"]).unwrap();
        let saved = r.extensions();

        let mut fresh = registry();
        fresh.restore_extensions(saved).unwrap();
        assert!(fresh.is_verb("zonk"));
        assert!(fresh.is_adverb("zanily"));
    }
}
