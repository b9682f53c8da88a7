//! Integration tests for extension verbs

use soul_foundation::{Gender, Person, PersonId, RegistryError, SoulError};
use soul_parser::{Audience, LastTargets, Perspectives, Registry, Soul, VerbDefinition};

fn alice() -> Person {
    Person::new(PersonId::new(1), "alice", Gender::Female)
}

fn bob() -> Person {
    Person::new(PersonId::new(2), "bob", Gender::Male)
}

fn audience() -> Audience {
    Audience::new(alice(), vec![alice(), bob()])
}

fn parse(soul: &Soul, input: &str) -> Result<String, SoulError> {
    soul.parse(input, &audience(), &mut LastTargets::new())
        .map(|emote| emote.actor_message())
}

// =============================================================================
// Register / unregister
// =============================================================================

#[test]
fn extension_verbs_come_and_go() {
    let mut soul = Soul::standard().unwrap();
    assert!(parse(&soul, "twirl").is_err());

    soul.registry_mut()
        .register_extension([("twirl", VerbDefinition::stem("around").with_adverb("gracefully"))])
        .unwrap();
    assert_eq!(parse(&soul, "twirl").unwrap(), "You twirl gracefully.");
    assert_eq!(
        parse(&soul, "twirl at bob").unwrap(),
        "You twirl gracefully around Bob."
    );

    soul.registry_mut().unregister_extension(["twirl"]);
    assert!(matches!(
        parse(&soul, "twirl"),
        Err(SoulError::NoVerb | SoulError::UnknownToken { .. })
    ));
    assert_eq!(parse(&soul, "smile").unwrap(), "You smile happily.");
}

#[test]
fn base_verbs_are_protected() {
    let mut registry = Registry::standard().unwrap();
    let err = registry
        .register_extension([
            ("twirl", VerbDefinition::stem("at")),
            ("smile", VerbDefinition::stem("at")),
        ])
        .unwrap_err();
    assert_eq!(err, SoulError::Registry(RegistryError::ProtectedVerb("smile".into())));
    assert!(!registry.is_verb("twirl"));

    registry.unregister_extension(["smile"]);
    assert!(registry.is_verb("smile"));
}

#[test]
fn names_must_be_words() {
    let mut registry = Registry::new();
    assert!(matches!(
        registry.register_extension([("Two Words", VerbDefinition::stem("at"))]),
        Err(SoulError::Registry(RegistryError::InvalidName(_)))
    ));
}

#[test]
fn verb_names_merge_tiers() {
    let mut registry = Registry::standard().unwrap();
    let before = registry.verb_names().len();
    registry
        .register_extension([("zzyzx", VerbDefinition::short("").unwrap())])
        .unwrap();
    let names = registry.verb_names();
    assert_eq!(names.len(), before + 1);
    assert_eq!(names.last().map(String::as_str), Some("zzyzx"));
    assert_eq!(registry.extension_verb_names(), vec!["zzyzx"]);
}

// =============================================================================
// Shapes
// =============================================================================

#[test]
fn full_shape_uses_all_six_templates() {
    let mut soul = Soul::standard().unwrap();
    let untargeted = Perspectives::parse("glow", "glows", "glows").unwrap();
    let targeted = Perspectives::parse(
        "glow$ at {WHO}",
        "glows warmly at you",
        "glows at {WHO}",
    )
    .unwrap();
    soul.registry_mut()
        .register_extension([("shine", VerbDefinition::full(untargeted, targeted))])
        .unwrap();

    let emote = soul
        .parse("shine at bob", &audience(), &mut LastTargets::new())
        .unwrap();
    assert_eq!(emote.actor_message(), "You glow at Bob.");
    assert_eq!(emote.message_for(&bob()), "Alice glows warmly at you.");
    assert_eq!(parse(&soul, "shine").unwrap(), "You glow.");
}

#[test]
fn physical_shape_needs_a_target() {
    let mut soul = Soul::standard().unwrap();
    soul.registry_mut()
        .register_extension([("tickle", VerbDefinition::physical("").unwrap())])
        .unwrap();
    assert_eq!(
        parse(&soul, "tickle"),
        Err(SoulError::MissingTarget { verb: "tickle".into() })
    );
    assert_eq!(parse(&soul, "tickle bob").unwrap(), "You tickle Bob.");
}
