//! Soul CLI entry point.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use soul_foundation::Gender;
use soul_runtime::{ReaderEditor, Repl, RuntimeConfig, Session};
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    runtime: RuntimeConfig,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--trace" => config.runtime.trace = true,
            flag @ ("--actor" | "--gender" | "--present" | "--extensions") => {
                i += 1;
                let Some(value) = args.get(i) else {
                    return Err(format!("{flag} requires a value").into());
                };
                match flag {
                    "--actor" => config.runtime.actor.clone_from(value),
                    "--gender" => config.runtime.gender = value.parse()?,
                    "--present" => {
                        let (name, gender) = match value.split_once(':') {
                            Some((name, gender)) => (name, gender.parse::<Gender>()?),
                            None => (value.as_str(), Gender::Neuter),
                        };
                        config.runtime.present.push((name.to_string(), gender));
                    }
                    _ => config.runtime.extensions = Some(PathBuf::from(value)),
                }
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("soul {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.runtime.log_filter().into()),
        )
        .with_writer(io::stderr)
        .init();

    if config.batch_mode {
        let session = Session::new(&config.runtime)?;
        let editor = ReaderEditor::new(io::stdin().lock());
        Repl::with_editor(editor, session).without_banner().run()?;
        return Ok(());
    }

    Repl::new(&config.runtime)?.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mSoul\x1b[0m - Emote parser and multi-perspective renderer

\x1b[1mUSAGE:\x1b[0m
    soul [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help               Print help information
    -V, --version            Print version information
    -b, --batch              Read emotes from stdin without prompting
    --actor NAME             Who is acting (default: player)
    --gender GENDER          The actor's gender: male, female, neuter, plural
    --present NAME[:GENDER]  Someone else in the room (repeatable)
    --extensions PATH        Load extension verbs and adverbs at startup

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace                  Log parser internals to stderr (RUST_LOG overrides)

\x1b[1mEXAMPLES:\x1b[0m
    soul --actor alice --gender f --present bob:m --present carol:f
    echo 'smile at bob' | soul -b --actor alice --present bob:m

\x1b[1mREPL COMMANDS:\x1b[0m
    help                 List commands
    help feeling list    Show every verb
    :who                 Who is present
    :add-verb ...        Add an extension verb
    Ctrl+D               Exit REPL"
    );
}
