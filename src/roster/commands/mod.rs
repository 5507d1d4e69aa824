use crate::model::User;

pub mod add;
pub mod helpers;
pub mod list;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a command produced. `affected_users` is non-empty exactly when the roster
/// was changed.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_users: Vec<User>,
    pub affected_users: Vec<User>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_users(mut self, users: Vec<User>) -> Self {
        self.listed_users = users;
        self
    }

    pub fn with_affected_users(mut self, users: Vec<User>) -> Self {
        self.affected_users = users;
        self
    }

    pub fn mutated(&self) -> bool {
        !self.affected_users.is_empty()
    }
}
