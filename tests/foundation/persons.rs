//! Integration tests for persons and genders

use soul_foundation::{Gender, Person, PersonId};

fn person(id: u64, name: &str, gender: Gender) -> Person {
    Person::new(PersonId::new(id), name, gender)
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn identity_is_by_id() {
    let a = person(1, "bob", Gender::Male);
    let b = person(1, "Robert", Gender::Male);
    let c = person(2, "bob", Gender::Male);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn names_and_keys() {
    let p = person(3, "carol", Gender::Female);
    assert_eq!(p.name(), "Carol");
    assert_eq!(p.key(), "carol");
    assert_eq!(person(4, "DAVE", Gender::Male).key(), "dave");
}

// =============================================================================
// Pronouns
// =============================================================================

#[test]
fn pronoun_table() {
    let rows = [
        (Gender::Male, ["he", "him", "his", "himself"]),
        (Gender::Female, ["she", "her", "her", "herself"]),
        (Gender::Neuter, ["it", "it", "its", "itself"]),
        (Gender::Plural, ["they", "them", "their", "themselves"]),
    ];
    for (gender, [subj, obj, poss, refl]) in rows {
        let p = person(1, "x", gender);
        assert_eq!(p.subjective(), subj);
        assert_eq!(p.objective(), obj);
        assert_eq!(p.possessive(), poss);
        assert_eq!(p.reflexive(), refl);
    }
}

#[test]
fn gender_parsing() {
    assert_eq!("m".parse::<Gender>().unwrap(), Gender::Male);
    assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
    assert_eq!("it".parse::<Gender>().unwrap(), Gender::Neuter);
    assert_eq!("they".parse::<Gender>().unwrap(), Gender::Plural);
    assert!("sideways".parse::<Gender>().is_err());
    assert_eq!(Gender::default(), Gender::Neuter);
}
