//! # Roster Architecture
//!
//! Roster keeps a list of users (name, age, email) in a JSON file. The library holds all
//! of the behavior; the `roster` binary is a thin client that parses flags and prints.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, sets up logging, prints, owns exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - load → command → save, honoring the save policy          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list / add / update against an in-memory Roster          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process. Outcomes
//! the user should see (duplicate names, unknown users) come back as [`commands::CmdMessage`]s;
//! failures come back as [`error::RosterError`].
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every client goes through
//! - [`commands`]: list, add and update
//! - [`store`]: persistence of the whole record set
//! - [`model`]: `User` and `Roster`
//! - [`config`]: `roster.json` settings (data file, save policy)
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
