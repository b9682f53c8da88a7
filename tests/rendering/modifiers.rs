//! Integration tests for modifiers and terminators

use soul_foundation::{Gender, Person, PersonId, SoulError};
use soul_parser::{Audience, Emote, LastTargets, Modifier, Soul};

fn person(id: u64, name: &str, gender: Gender) -> Person {
    Person::new(PersonId::new(id), name, gender)
}

fn alice() -> Person {
    person(1, "alice", Gender::Female)
}

fn bob() -> Person {
    person(2, "bob", Gender::Male)
}

fn parse(input: &str) -> Result<Emote, SoulError> {
    let audience = Audience::new(alice(), vec![alice(), bob()]);
    Soul::standard()
        .unwrap()
        .parse(input, &audience, &mut LastTargets::new())
}

#[test]
fn fail_uses_the_infinitive() {
    let emote = parse("fail smile").unwrap();
    assert_eq!(emote.modifier(), Some(Modifier::Fail));
    assert_eq!(
        emote.actor_message(),
        "You try to smile happily, but fail miserably."
    );
    assert_eq!(
        emote.bystander_message(),
        "Alice tries to smile happily, but fails miserably."
    );
}

#[test]
fn dont_negates_the_action() {
    let emote = parse("don't smile at bob").unwrap();
    assert_eq!(emote.actor_message(), "You don't smile happily at Bob.");
    assert_eq!(emote.message_for(&bob()), "Alice doesn't smile happily at you.");

    let emote = parse("dont scream").unwrap();
    assert_eq!(emote.modifier(), Some(Modifier::Dont));
    assert_eq!(emote.actor_message(), "You don't scream loudly.");
    assert_eq!(emote.bystander_message(), "Alice doesn't scream loudly.");
}

#[test]
fn pretend_and_attempt() {
    let emote = parse("pretend smile").unwrap();
    assert_eq!(emote.modifier(), Some(Modifier::Pretend));
    assert_eq!(emote.actor_message(), "You pretend to smile happily.");
    assert_eq!(emote.bystander_message(), "Alice pretends to smile happily.");

    let emote = parse("attempt wave at bob").unwrap();
    assert_eq!(
        emote.actor_message(),
        "You attempt to wave happily at Bob, without much success."
    );
    assert_eq!(
        emote.message_for(&bob()),
        "Alice attempts to wave happily at you, without much success."
    );
}

#[test]
fn suddenly_and_again() {
    let emote = parse("suddenly wave").unwrap();
    assert_eq!(emote.actor_message(), "You suddenly wave happily.");
    assert_eq!(emote.bystander_message(), "Alice suddenly waves happily.");

    let emote = parse("again nod").unwrap();
    assert_eq!(emote.actor_message(), "You nod solemnly again.");
}

#[test]
fn feeling_changes_nothing() {
    assert_eq!(
        parse("feeling smile").unwrap().actor_message(),
        parse("smile").unwrap().actor_message()
    );
}

#[test]
fn modifier_without_an_emote() {
    assert_eq!(parse("fail").unwrap_err().to_string(), "Fail with what?");
    assert_eq!(parse("again").unwrap_err().to_string(), "Do what again?");
    assert_eq!(parse("pretend").unwrap_err().to_string(), "Pretend to do what?");
    assert_eq!(parse("attempt").unwrap_err().to_string(), "Attempt what?");
}

#[test]
fn messages_ending_a_sentence_are_not_doubled() {
    let emote = parse("sing \"la la la!\"").unwrap();
    assert!(emote.actor_message().ends_with("la la la!"));
    assert!(!emote.actor_message().ends_with("!."));
}

#[test]
fn default_message_is_used() {
    let emote = parse("say").unwrap();
    assert_eq!(emote.actor_message(), "You say nothing.");
}
