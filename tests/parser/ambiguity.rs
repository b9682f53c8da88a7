//! Integration tests for prefixes, ambiguity and resuming

use soul_foundation::{Ambiguity, Gender, Person, PersonId, SoulError};
use soul_parser::{Audience, LastTargets, Soul};

fn person(id: u64, name: &str, gender: Gender) -> Person {
    Person::new(PersonId::new(id), name, gender)
}

fn alice() -> Person {
    person(1, "alice", Gender::Female)
}

fn bob() -> Person {
    person(2, "bob", Gender::Male)
}

fn bobby() -> Person {
    person(3, "bobby", Gender::Male)
}

fn audience() -> Audience {
    Audience::new(alice(), vec![alice(), bob(), bobby()])
}

// =============================================================================
// Adverbs
// =============================================================================

#[test]
fn unique_adverb_prefix() {
    let emote = Soul::standard()
        .unwrap()
        .parse("smile ang", &audience(), &mut LastTargets::new())
        .unwrap();
    assert_eq!(emote.actor_message(), "You smile angrily.");
}

#[test]
fn ambiguous_adverb_prefix_lists_candidates_in_order() {
    let err = Soul::standard()
        .unwrap()
        .parse("smile s", &audience(), &mut LastTargets::new())
        .unwrap_err();
    let SoulError::AmbiguousToken {
        kind,
        candidates,
        continuation,
    } = err
    else {
        panic!("expected an ambiguity, got {err:?}");
    };
    assert_eq!(kind, Ambiguity::Adverb);
    assert!(candidates.len() >= 2);
    assert!(candidates.iter().all(|c| c.starts_with('s')));
    assert!(candidates.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(continuation.parsed_part(), "smile");
    assert_eq!(continuation.uncertain_part(), "s");
}

// =============================================================================
// Resuming
// =============================================================================

#[test]
fn resume_with_the_full_name() {
    let soul = Soul::standard().unwrap();
    let mut last = LastTargets::new();
    let err = soul
        .parse("smile at bo sadly", &audience(), &mut last)
        .unwrap_err();
    let continuation = err.continuation().cloned().unwrap();
    assert_eq!(continuation.unparsed_part(), "sadly");

    let emote = soul
        .resume(&continuation, "bobby", &audience(), &mut last)
        .unwrap();
    assert_eq!(emote.actor_message(), "You smile sadly at Bobby.");
}

#[test]
fn resume_with_something_else_starts_over() {
    let soul = Soul::standard().unwrap();
    let mut last = LastTargets::new();
    let err = soul.parse("smile at bo", &audience(), &mut last).unwrap_err();
    let continuation = err.continuation().cloned().unwrap();

    let emote = soul
        .resume(&continuation, "wave", &audience(), &mut last)
        .unwrap();
    assert_eq!(emote.actor_message(), "You wave happily.");
}
