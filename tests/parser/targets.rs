//! Integration tests for target resolution

use soul_foundation::{Gender, Person, PersonId, SoulError};
use soul_parser::{Audience, Emote, LastTargets, Soul};

fn person(id: u64, name: &str, gender: Gender) -> Person {
    Person::new(PersonId::new(id), name, gender)
}

fn alice() -> Person {
    person(1, "alice", Gender::Female)
}

fn bob() -> Person {
    person(2, "bob", Gender::Male)
}

fn carol() -> Person {
    person(3, "carol", Gender::Female)
}

fn parse(input: &str) -> Result<Emote, SoulError> {
    let audience = Audience::new(alice(), vec![alice(), bob(), carol()]);
    Soul::standard()
        .unwrap()
        .parse(input, &audience, &mut LastTargets::new())
}

// =============================================================================
// Groups
// =============================================================================

#[test]
fn all_targets_everyone_but_the_actor() {
    let emote = parse("wave at all").unwrap();
    assert_eq!(emote.targets(), vec![bob(), carol()]);
    assert_eq!(emote.actor_message(), "You wave happily at Bob and Carol.");
}

#[test]
fn except_removes_from_the_group() {
    let emote = parse("wave at all except bob").unwrap();
    assert_eq!(emote.targets(), vec![carol()]);

    let emote = parse("wave at everyone but carol").unwrap();
    assert_eq!(emote.targets(), vec![bob()]);
}

#[test]
fn except_needs_someone_first() {
    assert!(matches!(
        parse("smile except bob"),
        Err(SoulError::MisplacedExcept { .. })
    ));
}

// =============================================================================
// Names
// =============================================================================

#[test]
fn names_are_case_insensitive() {
    let emote = parse("smile at BOB").unwrap();
    assert_eq!(emote.targets(), vec![bob()]);
}

#[test]
fn naming_someone_twice_targets_them_once() {
    let emote = parse("smile at bob and bob").unwrap();
    assert_eq!(emote.targets(), vec![bob()]);
}

#[test]
fn unique_prefix_names_a_person() {
    let emote = parse("poke ca").unwrap();
    assert_eq!(emote.targets(), vec![carol()]);
}

#[test]
fn verb_needing_a_target() {
    assert_eq!(
        parse("kick").unwrap_err(),
        SoulError::MissingTarget { verb: "kick".into() }
    );
    assert_eq!(parse("kick").unwrap_err().to_string(), "Need person for verb kick.");
}

#[test]
fn nothing_but_noise() {
    assert_eq!(parse("at the bob").unwrap_err(), SoulError::NoVerb);
    assert_eq!(
        parse("smile grobble").unwrap_err().to_string(),
        "The second word in that sentence doesn't make sense to me."
    );
}

#[test]
fn breakdown_lists_each_clause() {
    let emote = parse("wave, bow and smile at bob").unwrap();
    let verbs: Vec<&str> = emote.breakdown().iter().map(|c| c.verb.as_str()).collect();
    assert_eq!(verbs, vec!["wave", "bow", "smile"]);
    assert!(emote.breakdown()[0].targets.is_empty());
    assert_eq!(emote.breakdown()[2].targets, vec![bob()]);
}
