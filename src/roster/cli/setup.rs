use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roster", version, args_override_self = true)]
#[command(about = "A simple CLI tool to manage users in a JSON file.", long_about = None)]
pub struct Cli {
    /// List all users.
    #[arg(long)]
    pub list: bool,

    /// Add a new user with the given name, age, and email.
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 3,
        value_names = ["NAME", "AGE", "EMAIL"],
        allow_negative_numbers = true
    )]
    pub add: Option<Vec<String>>,

    /// Update an existing user's age.
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 2,
        value_names = ["NAME", "NEW_AGE"],
        allow_negative_numbers = true
    )]
    pub update: Option<Vec<String>>,

    /// Data file to read and write (defaults to data.json, or roster.json's data_file)
    #[arg(short, long, env = "ROSTER_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// The one operation an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Add {
        name: String,
        age: String,
        email: String,
    },
    Update {
        name: String,
        new_age: String,
    },
    Help,
}

impl Cli {
    /// Flags are not mutually exclusive; `--list` beats `--add`, which beats `--update`.
    pub fn action(&self) -> Action {
        if self.list {
            return Action::List;
        }
        if let Some([name, age, email]) = self.add.as_deref() {
            return Action::Add {
                name: name.clone(),
                age: age.clone(),
                email: email.clone(),
            };
        }
        if let Some([name, new_age]) = self.update.as_deref() {
            return Action::Update {
                name: name.clone(),
                new_age: new_age.clone(),
            };
        }
        Action::Help
    }
}

/// Diagnostics go to stderr. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
