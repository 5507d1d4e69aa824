use super::DataStore;
use crate::error::Result;
use crate::model::Roster;

/// In-memory storage for testing.
/// Does NOT persist data; counts saves so callers can check when a write happened.
#[derive(Default)]
pub struct InMemoryStore {
    roster: Roster,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster,
            save_count: 0,
        }
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Roster> {
        Ok(self.roster.clone())
    }

    fn save(&mut self, roster: &Roster) -> Result<()> {
        self.roster = roster.clone();
        self.save_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::User;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        users: Vec<User>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                users: Vec::new(),
            }
        }

        pub fn with_users(mut self, count: usize) -> Self {
            for i in 0..count {
                let n = self.users.len() + 1;
                self.users.push(User::new(
                    format!("User {}", n),
                    20 + i as i64,
                    format!("user{}@example.com", n),
                ));
            }
            self.store = InMemoryStore::with_roster(Roster::from(self.users.clone()));
            self
        }

        pub fn with_user(mut self, name: &str, age: i64, email: &str) -> Self {
            self.users.push(User::new(name, age, email));
            self.store = InMemoryStore::with_roster(Roster::from(self.users.clone()));
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
