//! Emote parser and multi-perspective renderer.
//!
//! This crate turns player input like "smile at bob" or "suddenly wave,
//! bow and grin evilly at all except carol" into one sentence per reader:
//! the actor, each person addressed, and everyone else present.
//!
//! # Architecture
//!
//! ```text
//! "wave, bow and smile at bob"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [wave, bow, and, smile, at, bob]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ WEBSTER         │  → [wave] [bow] [smile → Bob]
//! │ (classify)      │     persons, pronouns, adverbs, body parts
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ REDUCER         │  → "smile$ happily at {WHO}" per verb shape
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RENDERER        │  → "You wave happily, bow and smile happily at Bob."
//! │                 │     "Alice waves happily, bows and smiles happily at you."
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`vocabulary`] - Verb, adverb and body-part registry with base and extension tiers
//! - [`stdlib`] - The standard verb table and vocabularies
//! - [`template`] - Template markup with slots and the verb suffix marker
//! - [`verb`] - Verb shapes and definitions
//! - [`tokenizer`] - Convert raw input to tokens, merging quoted messages
//! - [`audience`] - Who is present and name matching
//! - [`pronouns`] - Back-references and remembered targets
//! - [`resolver`] - Adverb and body-part prefix resolution
//! - [`clause`] - Parsed clauses
//! - [`modifier`] - Leading words that frame an emote
//! - [`reducer`] - Per-shape template selection and slot filling
//! - [`render`] - Per-reader rendering and sentence assembly
//! - [`parser`] - The [`Soul`] pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod audience;
pub mod clause;
pub mod modifier;
pub mod parser;
pub mod pronouns;
pub mod reducer;
pub mod render;
pub mod resolver;
pub mod stdlib;
pub mod template;
pub mod tokenizer;
pub mod verb;
pub mod vocabulary;

// Re-export main types for convenience
pub use audience::Audience;
pub use clause::ParsedClause;
pub use modifier::Modifier;
pub use parser::Soul;
pub use pronouns::LastTargets;
pub use render::{Emote, RenderedClause};
pub use template::Template;
pub use verb::{Perspectives, VerbDefinition, VerbShape};
pub use vocabulary::{Extensions, Registry, Tier};
