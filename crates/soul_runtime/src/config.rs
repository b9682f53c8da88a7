//! Runtime configuration.

use std::path::PathBuf;

use soul_foundation::Gender;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Log filter used with `--trace`.
pub const TRACE_FILTER: &str = "warn,soul_parser=trace,soul_runtime=debug";

/// Configuration for a REPL session.
///
/// Controls who is acting, who else is in the room, where extensions are
/// persisted and how much is logged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Name of the acting person.
    pub actor: String,

    /// Gender of the acting person.
    pub gender: Gender,

    /// Other people present at startup.
    pub present: Vec<(String, Gender)>,

    /// Extension file loaded at startup, if any.
    pub extensions: Option<PathBuf>,

    /// Log parser internals to stderr.
    pub trace: bool,

    /// Show the welcome banner.
    pub show_banner: bool,

    /// Primary prompt.
    pub prompt: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            actor: "player".to_string(),
            gender: Gender::Neuter,
            present: Vec::new(),
            extensions: None,
            trace: false,
            show_banner: true,
            prompt: "soul> ".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// A populated room for trying things out: Alice acting, with Bob,
    /// Carol and a box present.
    #[must_use]
    pub fn development() -> Self {
        Self {
            actor: "alice".to_string(),
            gender: Gender::Female,
            present: vec![
                ("bob".to_string(), Gender::Male),
                ("carol".to_string(), Gender::Female),
                ("box".to_string(), Gender::Neuter),
            ],
            ..Self::default()
        }
    }

    /// Builder method to set the actor.
    #[must_use]
    pub fn with_actor(mut self, name: impl Into<String>, gender: Gender) -> Self {
        self.actor = name.into();
        self.gender = gender;
        self
    }

    /// Builder method to add someone to the room.
    #[must_use]
    pub fn with_present(mut self, name: impl Into<String>, gender: Gender) -> Self {
        self.present.push((name.into(), gender));
        self
    }

    /// Builder method to set the extension file.
    #[must_use]
    pub fn with_extensions(mut self, path: impl Into<PathBuf>) -> Self {
        self.extensions = Some(path.into());
        self
    }

    /// Builder method to enable/disable tracing.
    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Builder method to show/hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The log filter to use when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.trace { TRACE_FILTER } else { DEFAULT_FILTER }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_room_is_populated() {
        let config = RuntimeConfig::development();
        assert_eq!(config.actor, "alice");
        assert_eq!(config.present.len(), 3);
        assert!(!config.trace);
    }

    #[test]
    fn builders_chain() {
        let config = RuntimeConfig::default()
            .with_actor("dave", Gender::Male)
            .with_present("erin", Gender::Female)
            .with_extensions("ext.soul")
            .with_trace(true)
            .with_banner(false);
        assert_eq!(config.actor, "dave");
        assert_eq!(config.present, vec![("erin".to_string(), Gender::Female)]);
        assert_eq!(config.extensions, Some(PathBuf::from("ext.soul")));
        assert_eq!(config.log_filter(), TRACE_FILTER);
        assert!(!config.show_banner);
    }
}
