//! Integration tests for the verb registry.
//!
//! Tests for the base and extension tiers and how parsing sees them.

mod adverbs;
mod verbs;
