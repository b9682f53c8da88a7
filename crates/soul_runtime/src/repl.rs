//! The main REPL implementation.
//!
//! Plain lines are emotes by the current actor. Lines starting with `:` are
//! host commands, and `help` lines describe the vocabulary.

use std::io::{self, Write};
use std::path::Path;

use soul_foundation::{Gender, SoulError, grammar};
use soul_parser::{Emote, Perspectives, Tier, VerbDefinition};

use crate::config::RuntimeConfig;
use crate::editor::{COMMANDS, LineEditor, ReadResult, RustylineEditor};
use crate::error::{Result, RuntimeError};
use crate::session::Session;

/// What evaluating one line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Lines to print.
    Lines(Vec<String>),
    /// The user asked to leave.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (parser, room, remembered targets).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or the session fails to initialize.
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        let session = Session::new(config)?;
        let mut repl = Self::with_editor(editor, session).with_prompt(config.prompt.as_str());
        repl.show_banner = config.show_banner;
        Ok(repl)
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and session.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "soul> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }
        self.refresh_keywords();

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Outcome::Lines(lines)) => {
                    for line in lines {
                        println!("{line}");
                    }
                }
                Ok(Outcome::Quit) => break,
                Err(e) => self.print_error(&e),
            }
        }

        Ok(())
    }

    /// Evaluates one line of input.
    ///
    /// # Errors
    ///
    /// Returns the parser's error for a rejected emote, or a usage error
    /// for a malformed command.
    pub fn eval(&mut self, line: &str) -> Result<Outcome> {
        let line = line.trim();
        if let Some(command) = line.strip_prefix(':') {
            let outcome = self.command(command)?;
            self.refresh_keywords();
            return Ok(outcome);
        }
        let mut words = line.split_whitespace();
        if words.next().is_some_and(|w| w.eq_ignore_ascii_case("help")) {
            let args: Vec<&str> = words.collect();
            return self.help(&args).map(Outcome::Lines);
        }

        let emote = self.session.emote(line)?;
        Ok(Outcome::Lines(emote_lines(&emote)))
    }

    fn refresh_keywords(&mut self) {
        let mut keywords: Vec<String> = COMMANDS.iter().map(ToString::to_string).collect();
        keywords.extend(self.session.soul().registry().verb_names());
        self.editor.set_keywords(keywords);
    }

    // =========================================================================
    // Help
    // =========================================================================

    fn help(&self, args: &[&str]) -> Result<Vec<String>> {
        let registry = self.session.soul().registry();
        match args {
            [] => Ok(HELP.lines().map(str::to_string).collect()),
            ["feelings"] => {
                let verbs = registry.verb_names();
                Ok(vec![
                    format!("{} feelings:", verbs.len()),
                    verbs.join(", "),
                ])
            }
            ["adverbs"] => {
                let mut lines = vec![registry.adverbs(Tier::Base).join(", ")];
                let extra = registry.adverbs(Tier::Extension);
                if !extra.is_empty() {
                    lines.push(format!("Added: {}", extra.join(", ")));
                }
                Ok(lines)
            }
            ["feeling", "list"] => {
                let actor = self.session.actor();
                registry
                    .verb_names()
                    .into_iter()
                    .map(|verb| -> Result<String> {
                        let text = self.session.soul().preview(&verb, actor)?;
                        Ok(format!("{verb:>12}: {text}"))
                    })
                    .collect()
            }
            ["feeling", verb] => {
                let text = self
                    .session
                    .soul()
                    .preview(&verb.to_lowercase(), self.session.actor())?;
                Ok(vec![text])
            }
            _ => Err(RuntimeError::Usage(
                "help [feelings | adverbs | feeling <verb> | feeling list]".to_string(),
            )),
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    fn command(&mut self, command: &str) -> Result<Outcome> {
        let (name, rest) = command
            .trim()
            .split_once(char::is_whitespace)
            .map_or((command.trim(), ""), |(n, r)| (n, r.trim()));

        let lines = match name {
            "quit" | "q" => return Ok(Outcome::Quit),
            "who" => self.who(),
            "enter" => self.enter(rest)?,
            "leave" => {
                let person = self.session.leave(required(rest, ":leave <name>")?)?;
                vec![format!("{} leaves.", person.name())]
            }
            "as" => {
                let person = self.session.act_as(required(rest, ":as <name>")?)?;
                vec![format!("You are now {}.", person.name())]
            }
            "forget" => {
                self.session.forget();
                vec!["Forgotten.".to_string()]
            }
            "add-verb" => self.add_verb(rest)?,
            "remove-verb" => {
                let names = list(rest);
                self.session.soul_mut().registry_mut().unregister_extension(&names);
                vec![format!("Removed {}.", grammar::join(&names, "and"))]
            }
            "add-adverb" => {
                let adverbs = list(rest);
                self.session.soul_mut().registry_mut().register_adverb(adverbs.clone())?;
                vec![format!("Added {}.", grammar::join(&adverbs, "and"))]
            }
            "remove-adverb" => {
                let adverbs = list(rest);
                self.session.soul_mut().registry_mut().unregister_adverb(&adverbs);
                vec![format!("Removed {}.", grammar::join(&adverbs, "and"))]
            }
            "save-extensions" => {
                let path = required(rest, ":save-extensions <path>")?;
                self.session.save_extensions(Path::new(path))?;
                vec![format!("Saved extensions to {path}.")]
            }
            "load-extensions" => {
                let path = required(rest, ":load-extensions <path>")?;
                self.session.load_extensions(Path::new(path))?;
                vec![format!("Loaded extensions from {path}.")]
            }
            other => {
                return Err(RuntimeError::Usage(format!(
                    "unknown command :{other} (try 'help')"
                )));
            }
        };
        Ok(Outcome::Lines(lines))
    }

    fn who(&self) -> Vec<String> {
        let actor = self.session.actor();
        self.session
            .present()
            .iter()
            .map(|p| {
                if p == actor {
                    format!("{} ({}, acting)", p.name(), p.gender())
                } else {
                    format!("{} ({})", p.name(), p.gender())
                }
            })
            .collect()
    }

    fn enter(&mut self, rest: &str) -> Result<Vec<String>> {
        let mut words = rest.split_whitespace();
        let name = words
            .next()
            .ok_or_else(|| RuntimeError::Usage(":enter <name> [gender]".to_string()))?;
        let gender = match words.next() {
            Some(g) => g.parse::<Gender>()?,
            None => Gender::Neuter,
        };
        let person = self.session.enter(name, gender);
        Ok(vec![format!("{} enters.", person.name())])
    }

    fn add_verb(&mut self, rest: &str) -> Result<Vec<String>> {
        const USAGE: &str = ":add-verb <name> <kind> [| argument]...";

        let mut parts = rest.split('|').map(str::trim);
        let head = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();
        let (name, kind) = head
            .split_once(char::is_whitespace)
            .map(|(n, k)| (n.trim(), k.trim()))
            .ok_or_else(|| RuntimeError::Usage(USAGE.to_string()))?;

        let definition = build_verb(kind, &args).map_err(|e| match e {
            BuildError::Arity(expected) => {
                RuntimeError::Usage(format!("a {kind} verb takes {expected}"))
            }
            BuildError::Kind => RuntimeError::Usage(format!(
                "unknown verb kind '{kind}' (stem, simple, dual, personal, quad, previous, physical, short, full)"
            )),
            BuildError::Template(e) => RuntimeError::Soul(e),
        })?;

        self.session
            .soul_mut()
            .registry_mut()
            .register_extension([(name.to_lowercase(), definition)])?;
        let preview = self
            .session
            .soul()
            .preview(&name.to_lowercase(), self.session.actor())?;
        Ok(vec![format!("Added {name}: {preview}")])
    }

    // =========================================================================
    // Output
    // =========================================================================

    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &RuntimeError) {
        match error.soul() {
            Some(e) => println!("{e}"),
            None => eprintln!("\x1b[31mError: {error}\x1b[0m"),
        }
    }

    fn print_banner(&self) {
        println!("\x1b[1;36mSoul v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!(
            "You are {}. Type an emote, 'help' for commands, Ctrl+D to exit.\n",
            self.session.actor().name()
        );
        let _ = io::stdout().flush();
    }
}

/// The actor's line followed by one line per person present.
#[must_use]
pub fn emote_lines(emote: &Emote) -> Vec<String> {
    let mut lines = vec![emote.actor_message()];
    for reader in emote.recipients() {
        lines.push(format!("  {}: {}", reader.name(), emote.message_for(reader)));
    }
    lines
}

const HELP: &str = "\
Type an emote, e.g. 'smile at bob' or 'suddenly wave, bow and grin at all except carol'.

help feelings              list every verb
help adverbs               list every adverb
help feeling <verb>        show what a verb looks like
help feeling list          show every verb
:who                       who is present
:enter <name> [gender]     someone arrives (male, female, neuter, plural)
:leave <name>              someone leaves
:as <name>                 act as someone else
:add-verb <name> <kind> [| argument]...
:remove-verb <name>...     remove added verbs
:add-adverb <adverb>, ...  add adverbs
:remove-adverb <adverb>, ...
:save-extensions <path>    save added verbs and adverbs
:load-extensions <path>    replace added verbs and adverbs
:forget                    forget who 'him', 'her' and 'them' refer to
:quit                      leave";

fn required<'a>(rest: &'a str, usage: &str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(RuntimeError::Usage(usage.to_string()))
    } else {
        Ok(rest)
    }
}

/// Splits a comma or whitespace separated list. Commas win when present so
/// multi-word adverbs survive.
fn list(rest: &str) -> Vec<String> {
    let items: Vec<&str> = if rest.contains(',') {
        rest.split(',').collect()
    } else {
        rest.split_whitespace().collect()
    };
    items
        .into_iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

enum BuildError {
    Arity(&'static str),
    Kind,
    Template(SoulError),
}

impl From<soul_foundation::TemplateError> for BuildError {
    fn from(e: soul_foundation::TemplateError) -> Self {
        Self::Template(e.into())
    }
}

fn build_verb(kind: &str, args: &[&str]) -> std::result::Result<VerbDefinition, BuildError> {
    let optional = |i: usize| args.get(i).copied().filter(|a| !a.is_empty());
    let definition = match (kind, args) {
        ("stem" | "default", [] | [_]) => VerbDefinition::stem(optional(0).unwrap_or("at")),
        ("simple", [text]) => VerbDefinition::simple(text, None)?,
        ("simple", [text, at]) => VerbDefinition::simple(text, Some(*at))?,
        ("simple", _) => return Err(BuildError::Arity("a template and an optional preposition")),
        ("dual", [first, third]) => VerbDefinition::dual(first, third)?,
        ("personal", [untargeted, targeted]) => VerbDefinition::personal(untargeted, targeted)?,
        ("dual" | "personal", _) => return Err(BuildError::Arity("two templates")),
        ("quad", [a, b, c, d]) => VerbDefinition::quad([*a, *b, *c, *d])?,
        ("quad", _) => return Err(BuildError::Arity("four templates")),
        ("previous", [] | [_]) => VerbDefinition::previous(optional(0).unwrap_or_default())?,
        ("physical", [] | [_]) => VerbDefinition::physical(optional(0).unwrap_or_default())?,
        ("short", [] | [_]) => VerbDefinition::short(optional(0).unwrap_or_default())?,
        ("stem" | "default" | "previous" | "physical" | "short", _) => {
            return Err(BuildError::Arity("at most one preposition"));
        }
        ("full", [a, b, c, d, e, f]) => VerbDefinition::full(
            Perspectives::parse(a, b, c)?,
            Perspectives::parse(d, e, f)?,
        ),
        ("full", _) => return Err(BuildError::Arity("six templates")),
        _ => return Err(BuildError::Kind),
    };
    Ok(definition)
}
