//! Integration tests for rendering emotes.
//!
//! Tests for the sentences each reader sees:
//! - Actor, target and bystander perspectives
//! - Combining several clauses
//! - Modifiers and sentence terminators

mod modifiers;
mod perspectives;
