//! Integration tests for the soul_parser crate.
//!
//! Tests for the parsing pipeline:
//! - Target and group resolution
//! - Adverb and body-part prefixes
//! - Back-references across clauses and emotes
//! - Resuming after an ambiguity

mod ambiguity;
mod pronouns;
mod targets;
