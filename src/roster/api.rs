//! # API Facade
//!
//! The single entry point for roster operations. Each call is one full invocation:
//! load the roster from the store, run the command against it, and (for `add` and
//! `update`) write it back according to the [`SavePolicy`].
//!
//! Errors from loading, age coercion or saving propagate unchanged. A failed command
//! never saves.

use crate::commands::{self, CmdResult};
use crate::config::SavePolicy;
use crate::error::Result;
use crate::model::Roster;
use crate::store::DataStore;
use tracing::debug;

pub struct RosterApi<S: DataStore> {
    store: S,
    save_policy: SavePolicy,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            save_policy: SavePolicy::default(),
        }
    }

    pub fn with_save_policy(mut self, policy: SavePolicy) -> Self {
        self.save_policy = policy;
        self
    }

    pub fn list_users(&self) -> Result<CmdResult> {
        let roster = self.store.load()?;
        commands::list::run(&roster)
    }

    pub fn add_user(&mut self, name: &str, age: &str, email: &str) -> Result<CmdResult> {
        let mut roster = self.store.load()?;
        let result = commands::add::run(&mut roster, name, age, email)?;
        self.persist(&roster, &result)?;
        Ok(result)
    }

    pub fn update_age(&mut self, name: &str, new_age: &str) -> Result<CmdResult> {
        let mut roster = self.store.load()?;
        let result = commands::update::run(&mut roster, name, new_age)?;
        self.persist(&roster, &result)?;
        Ok(result)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self, roster: &Roster, result: &CmdResult) -> Result<()> {
        match self.save_policy {
            SavePolicy::Always => self.store.save(roster),
            SavePolicy::OnChange if result.mutated() => self.store.save(roster),
            SavePolicy::OnChange => {
                debug!("nothing changed, skipping save");
                Ok(())
            }
        }
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
pub use crate::config::RosterConfig;
