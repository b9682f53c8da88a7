//! REPL, CLI, and extension persistence for Soul.
//!
//! This crate provides:
//! - [`Repl`] - Interactive host where each line is an emote or a command
//! - [`Session`] - The room: who is present, who is acting, remembered targets
//! - [`RuntimeConfig`] - Startup configuration and log filter selection
//! - Extension-tier serialization with `MessagePack`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod repl;
pub mod serialize;
pub mod session;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, ReaderEditor, RustylineEditor};
pub use error::{Result, RuntimeError};
pub use repl::{Outcome, Repl};
pub use session::Session;
