//! Integration tests for extension adverbs

use soul_foundation::{Gender, Person, PersonId, SoulError};
use soul_parser::{Audience, LastTargets, Registry, Soul, Tier};

fn audience() -> Audience {
    let alice = Person::new(PersonId::new(1), "alice", Gender::Female);
    Audience::new(alice.clone(), vec![alice])
}

#[test]
fn extension_adverbs_resolve_by_prefix() {
    let mut soul = Soul::standard().unwrap();
    soul.registry_mut().register_adverb(["zestily"]).unwrap();

    let emote = soul
        .parse("grin zes", &audience(), &mut LastTargets::new())
        .unwrap();
    assert_eq!(emote.actor_message(), "You grin zestily.");

    soul.registry_mut().unregister_adverb(["zestily"]);
    assert_eq!(
        soul.parse("grin zes", &audience(), &mut LastTargets::new())
            .unwrap_err(),
        SoulError::unknown_token(2)
    );
}

#[test]
fn base_adverbs_stay_in_the_base_tier() {
    let mut registry = Registry::standard().unwrap();
    registry.register_adverb(["happily"]).unwrap();
    assert!(registry.adverbs(Tier::Extension).is_empty());

    registry.unregister_adverb(["happily"]);
    assert!(registry.is_adverb("happily"));
}

#[test]
fn prefix_lookup_is_sorted() {
    let registry = Registry::standard().unwrap();
    let found = registry.adverbs_with_prefix(Tier::Base, "sa");
    assert!(found.contains(&"sadly".to_string()));
    let mut sorted = found.clone();
    sorted.sort();
    assert_eq!(found, sorted);
    assert!(registry.adverbs_with_prefix(Tier::Base, "S!").is_empty());
}

#[test]
fn extension_adverbs_share_prefixes_with_base_adverbs() {
    let mut soul = Soul::standard().unwrap();
    soul.registry_mut().register_adverb(["angstily"]).unwrap();

    let err = soul
        .parse("smile ang", &audience(), &mut LastTargets::new())
        .unwrap_err();
    let SoulError::AmbiguousToken { candidates, .. } = err else {
        panic!("expected ambiguity, got {err:?}");
    };
    assert_eq!(candidates, vec!["angrily", "angstily"]);

    let emote = soul
        .parse("smile angr", &audience(), &mut LastTargets::new())
        .unwrap();
    assert_eq!(emote.actor_message(), "You smile angrily.");
}
