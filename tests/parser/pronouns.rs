//! Integration tests for back-references

use soul_foundation::{Gender, Person, PersonId, SoulError};
use soul_parser::{Audience, LastTargets, Soul, VerbDefinition};

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

fn crate_box() -> Person {
    person(4, "box", Gender::Neuter)
}

fn audience() -> Audience {
    Audience::new(alice(), vec![alice(), bob(), carol(), crate_box()])
}

/// The standard vocabulary plus two object-handling verbs.
fn soul() -> Soul {
    let mut soul = Soul::standard().unwrap();
    soul.registry_mut()
        .register_extension([
            ("examine", VerbDefinition::previous("").unwrap()),
            ("drop", VerbDefinition::previous("").unwrap()),
        ])
        .unwrap();
    soul
}

// =============================================================================
// Within one emote
// =============================================================================

#[test]
fn it_refers_to_the_previous_clause() {
    let emote = soul()
        .parse("examine box and drop it", &audience(), &mut LastTargets::new())
        .unwrap();
    assert_eq!(emote.clauses().len(), 2);
    assert_eq!(emote.clauses()[1].targets(), &[crate_box()]);
    assert_eq!(emote.actor_message(), "You examine Box and drop it.");
}

#[test]
fn him_after_a_named_target() {
    let emote = soul()
        .parse("smile at bob and wink at him", &audience(), &mut LastTargets::new())
        .unwrap();
    assert_eq!(
        emote.message_for(&bob()),
        "Alice smiles happily at you and winks suggestively at you."
    );
    assert_eq!(
        emote.bystander_message(),
        "Alice smiles happily at Bob and winks suggestively at him."
    );
}

#[test]
fn them_needs_a_group() {
    let soul = soul();
    let emote = soul
        .parse("wave at bob and carol and bow to them", &audience(), &mut LastTargets::new())
        .unwrap();
    assert_eq!(emote.clauses()[1].targets(), &[bob(), carol()]);

    assert_eq!(
        soul.parse("wave at bob and bow to them", &audience(), &mut LastTargets::new())
            .unwrap_err(),
        SoulError::MissingBackReference
    );
}

#[test]
fn wrong_pronoun_for_the_target() {
    let err = soul()
        .parse("smile at bob and wink at her", &audience(), &mut LastTargets::new())
        .unwrap_err();
    assert_eq!(err, SoulError::MissingBackReference);
}

// =============================================================================
// Across emotes
// =============================================================================

#[test]
fn last_targets_carry_over() {
    let soul = soul();
    let mut last = LastTargets::new();
    soul.parse("smile at carol", &audience(), &mut last).unwrap();
    let emote = soul.parse("wink at her", &audience(), &mut last).unwrap();
    assert_eq!(emote.targets(), vec![carol()]);
}

#[test]
fn untargeted_emotes_keep_the_memory() {
    let soul = soul();
    let mut last = LastTargets::new();
    soul.parse("smile at carol", &audience(), &mut last).unwrap();
    soul.parse("nod", &audience(), &mut last).unwrap();
    assert_eq!(last.get(), &[carol()]);
}

#[test]
fn remembered_targets_must_still_be_present() {
    let soul = soul();
    let mut last = LastTargets::new();
    soul.parse("smile at bob", &audience(), &mut last).unwrap();

    let bob_gone = Audience::new(alice(), vec![alice(), carol()]);
    assert_eq!(
        soul.parse("wave at him", &bob_gone, &mut last).unwrap_err(),
        SoulError::MissingBackReference
    );

    let emote = soul.parse("wave at him", &audience(), &mut last).unwrap();
    assert_eq!(emote.targets(), vec![bob()]);
}
