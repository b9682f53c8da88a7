//! Soul - Emote parser and multi-perspective renderer
//!
//! This crate re-exports all layers of the Soul system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: soul_runtime    - REPL, CLI, extension persistence
//! Layer 1: soul_parser     - Registry, tokenizer, clause builder, renderer
//! Layer 0: soul_foundation - Core types (Person, Gender, SoulError)
//! ```

pub use soul_foundation as foundation;
pub use soul_parser as parser;
pub use soul_runtime as runtime;
