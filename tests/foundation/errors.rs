//! Integration tests for error types
//!
//! Every player-facing error renders as the sentence shown back to them.

use soul_foundation::{
    Ambiguity, ParseContinuation, RegistryError, SoulError, TemplateError,
};

// =============================================================================
// Display
// =============================================================================

#[test]
fn player_sentences() {
    assert_eq!(SoulError::NoVerb.to_string(), "No verb?");
    assert_eq!(SoulError::MissingBackReference.to_string(), "Who?");
    assert_eq!(
        SoulError::MissingTarget { verb: "kick".into() }.to_string(),
        "Need person for verb kick."
    );
    assert_eq!(
        SoulError::unknown_token(2).to_string(),
        "The second word in that sentence doesn't make sense to me."
    );
}

#[test]
fn missing_emote_questions() {
    let cases = [
        ("suddenly", "Suddenly what?"),
        ("again", "Do what again?"),
        ("fail", "Fail with what?"),
        ("don't", "Don't do what?"),
        ("feeling", "What feeling?"),
    ];
    for (modifier, question) in cases {
        let err = SoulError::MissingEmote { modifier: modifier.into() };
        assert_eq!(err.to_string(), question);
    }
}

#[test]
fn ambiguity_lists_candidates() {
    let err = SoulError::AmbiguousToken {
        kind: Ambiguity::Adverb,
        candidates: vec!["sadly".into(), "sagely".into(), "smugly".into()],
        continuation: ParseContinuation::new("smile", "s", ""),
    };
    assert_eq!(err.to_string(), "What adverb was that?\nsadly, sagely or smugly");
    assert_eq!(
        err.continuation().map(ParseContinuation::uncertain_part),
        Some("s")
    );
    assert!(SoulError::NoVerb.continuation().is_none());
}

#[test]
fn nested_errors_convert() {
    let err: SoulError = RegistryError::ProtectedVerb("smile".into()).into();
    assert!(err.to_string().contains("smile"));

    let err: SoulError = TemplateError::Unterminated { template: "{WHO".into() }.into();
    assert!(matches!(err, SoulError::Template(_)));
}

// =============================================================================
// Continuations
// =============================================================================

#[test]
fn continuation_rebuilds_sentence() {
    let cont = ParseContinuation::new("smile at", "bo", "and wave");
    assert_eq!(cont.complete("bobby").as_deref(), Some("smile at bobby and wave"));
    assert_eq!(cont.complete("bo"), None);
    assert_eq!(cont.complete("nod"), None);
}
