//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Person, Gender, SoulError, and the grammar helpers.

mod errors;
mod grammar;
mod persons;
