//! Persons, pronouns, grammar helpers and error types for Soul.
//!
//! This crate provides:
//! - [`Person`] / [`PersonId`] / [`Gender`] - who can act and be addressed
//! - [`SoulError`] - every failure a player can provoke, with its message
//! - [`ParseContinuation`] - resumable state for ambiguous input
//! - [`grammar`] - joining, possessives and ordinals

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod continuation;
pub mod error;
pub mod grammar;
pub mod person;

pub use continuation::ParseContinuation;
pub use error::{Ambiguity, RegistryError, Result, SoulError, TemplateError};
pub use person::{Gender, Person, PersonId};
