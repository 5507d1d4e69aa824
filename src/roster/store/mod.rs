//! # Storage Layer
//!
//! The [`DataStore`] trait is the boundary between the in-memory [`Roster`] and
//! wherever it is kept between invocations.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single JSON file (default `data.json`)
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "name": "Alice",
//!     "age": 30,
//!     "email": "a@x.com"
//!   }
//! ]
//! ```
//!
//! The whole set is read and written at once. There is no locking and no atomic
//! replace: two processes working on the same file can lose each other's writes, and a
//! crash mid-write can leave a truncated file.

use crate::error::Result;
use crate::model::Roster;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read the full record set. A store with nothing saved yet yields an empty roster.
    fn load(&self) -> Result<Roster>;

    /// Replace the stored record set with `roster`.
    fn save(&mut self, roster: &Roster) -> Result<()>;
}
