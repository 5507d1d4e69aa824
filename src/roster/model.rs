use serde::{Deserialize, Serialize};

/// A single user record. Field order here is the key order in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: i64,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    /// Case-insensitive comparison against the stored name.
    ///
    /// Stored names keep the casing they were added with, so both sides are folded
    /// on every lookup.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// The full set of users for one invocation, in insertion order.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// First user whose name matches case-insensitively.
    pub fn find(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name_matches(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.name_matches(name))
    }

    /// Appends without checking uniqueness; callers go through `commands::add`.
    pub fn push(&mut self, user: User) {
        self.users.push(user);
    }
}

impl From<Vec<User>> for Roster {
    fn from(users: Vec<User>) -> Self {
        Self { users }
    }
}

impl IntoIterator for Roster {
    type Item = User;
    type IntoIter = std::vec::IntoIter<User>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.into_iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.iter()
    }
}
