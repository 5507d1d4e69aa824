//! The `roster` binary: flag parsing, logging setup, printing and exit codes.

mod print;
mod setup;

use clap::{CommandFactory, Parser};
use roster::api::{RosterApi, RosterConfig};
use roster::error::Result;
use roster::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;

use print::{print_messages, print_users};
use setup::{init_logging, Action, Cli};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.action() {
        Action::Help => {
            Cli::command().print_help()?;
            Ok(())
        }
        Action::List => handle_list(&init_api(&cli)?),
        Action::Add { name, age, email } => handle_add(&mut init_api(&cli)?, &name, &age, &email),
        Action::Update { name, new_age } => handle_update(&mut init_api(&cli)?, &name, &new_age),
    }
}

fn init_api(cli: &Cli) -> Result<RosterApi<FileStore>> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = RosterConfig::load(&cwd)?;
    if let Some(file) = &cli.file {
        config.set_data_file(file.clone());
    }

    let data_file = config.resolve_data_file(&cwd);
    debug!(path = %data_file.display(), policy = ?config.save_policy, "using data file");

    Ok(RosterApi::new(FileStore::new(data_file)).with_save_policy(config.save_policy))
}

fn handle_list(api: &RosterApi<FileStore>) -> Result<()> {
    let result = api.list_users()?;
    print_users(&result.listed_users);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(api: &mut RosterApi<FileStore>, name: &str, age: &str, email: &str) -> Result<()> {
    let result = api.add_user(name, age, email)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(api: &mut RosterApi<FileStore>, name: &str, new_age: &str) -> Result<()> {
    let result = api.update_age(name, new_age)?;
    print_messages(&result.messages);
    Ok(())
}
