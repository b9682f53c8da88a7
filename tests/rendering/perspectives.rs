//! Integration tests for per-reader perspectives

use soul_foundation::{Gender, Person, PersonId};
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

fn parse(input: &str) -> Emote {
    let audience = Audience::new(alice(), vec![alice(), bob(), carol()]);
    Soul::standard()
        .unwrap()
        .parse(input, &audience, &mut LastTargets::new())
        .unwrap()
}

// =============================================================================
// Single clause
// =============================================================================

#[test]
fn untargeted_smile() {
    let emote = parse("smile");
    assert_eq!(emote.actor_message(), "You smile happily.");
    assert_eq!(emote.bystander_message(), "Alice smiles happily.");
    assert_eq!(emote.message_for(&bob()), "Alice smiles happily.");
    assert_eq!(emote.clauses()[0].actor_text(), "smile happily");
}

#[test]
fn target_reads_an_addressed_form() {
    let emote = parse("smile at bob");
    let for_bob = emote.message_for(&bob());
    let for_carol = emote.message_for(&carol());
    assert_eq!(for_bob, "Alice smiles happily at you.");
    assert_eq!(for_carol, "Alice smiles happily at Bob.");
    assert_ne!(for_bob, for_carol);
    assert_eq!(emote.actor_message(), "You smile happily at Bob.");
}

#[test]
fn recipients_exclude_the_actor() {
    let emote = parse("smile at bob");
    assert_eq!(emote.recipients(), &[bob(), carol()]);
    assert_eq!(emote.actor(), &alice());
}

#[test]
fn possessive_templates() {
    let emote = parse("stomp on bob");
    assert_eq!(emote.actor_message(), "You stomp on Bob's foot.");
    assert_eq!(emote.message_for(&bob()), "Alice stomps on your foot.");
    assert_eq!(emote.message_for(&carol()), "Alice stomps on Bob's foot.");

    let emote = parse("stomp");
    assert_eq!(emote.bystander_message(), "Alice stomps her foot.");
}

#[test]
fn reflexive_target() {
    let emote = parse("poke myself");
    assert_eq!(emote.actor_message(), "You poke yourself in the ribs.");
    assert_eq!(emote.bystander_message(), "Alice pokes herself in the ribs.");
}

#[test]
fn dual_shape_spells_both_persons() {
    let emote = parse("cry");
    assert_eq!(emote.actor_message(), "You cry.");
    assert_eq!(emote.bystander_message(), "Alice cries.");
}

// =============================================================================
// Several clauses
// =============================================================================

#[test]
fn three_clauses_use_commas_then_and() {
    let emote = parse("wave, bow and smile at bob");
    assert_eq!(
        emote.actor_message(),
        "You wave happily, bow and smile happily at Bob."
    );
    assert_eq!(
        emote.message_for(&bob()),
        "Alice waves happily, bows and smiles happily at you."
    );
    assert_eq!(
        emote.bystander_message(),
        "Alice waves happily, bows and smiles happily at Bob."
    );
}

#[test]
fn each_clause_has_its_own_targets() {
    let emote = parse("smile at bob and wave at carol");
    assert_eq!(
        emote.message_for(&bob()),
        "Alice smiles happily at you and waves happily at Carol."
    );
    assert_eq!(
        emote.message_for(&carol()),
        "Alice smiles happily at Bob and waves happily at you."
    );
    assert_eq!(emote.targets(), vec![bob(), carol()]);
}

#[test]
fn single_quoted_message_to_everyone() {
    let emote = parse("say 'hi' to all");
    assert_eq!(emote.actor_message(), "You say 'hi' to Bob and Carol.");
    assert_eq!(emote.message_for(&bob()), "Alice says 'hi' to you and Carol.");
    assert_eq!(emote.targets(), vec![bob(), carol()]);
}
