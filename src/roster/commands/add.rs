use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Roster, User};
use tracing::debug;

use super::helpers::parse_age;

/// Append a new user unless the name is already taken (case-insensitively).
///
/// The duplicate check runs before the age is coerced, so a taken name with a bad age
/// is reported as a duplicate rather than failing.
pub fn run(roster: &mut Roster, name: &str, age: &str, email: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if roster.contains_name(name) {
        debug!(name, "add rejected, name taken");
        result.add_message(CmdMessage::warning(format!(
            "User '{}' already exists.",
            name
        )));
        return Ok(result);
    }

    let user = User::new(name, parse_age(age)?, email);
    roster.push(user.clone());

    result.add_message(CmdMessage::success(format!("Added user: {}", name)));
    Ok(result.with_affected_users(vec![user]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::RosterError;

    fn alice_roster() -> Roster {
        Roster::from(vec![User::new("Alice", 30, "a@x.com")])
    }

    #[test]
    fn adds_to_empty_roster() {
        let mut roster = Roster::new();
        let result = run(&mut roster, "Alice", "30", "a@x.com").unwrap();

        assert_eq!(roster.users(), &[User::new("Alice", 30, "a@x.com")]);
        assert!(result.mutated());
        assert_eq!(result.messages[0].content, "Added user: Alice");
    }

    #[test]
    fn appends_at_the_end() {
        let mut roster = alice_roster();
        run(&mut roster, "Bob", "25", "b@x.com").unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.users()[1], User::new("Bob", 25, "b@x.com"));
        assert_eq!(roster.users()[0].name, "Alice");
    }

    #[test]
    fn rejects_duplicate_name_in_any_case() {
        for name in ["Alice", "alice", "ALICE", "aLiCe"] {
            let mut roster = alice_roster();
            let result = run(&mut roster, name, "40", "b@x.com").unwrap();

            assert_eq!(roster, alice_roster());
            assert!(!result.mutated());
            assert_eq!(
                result.messages[0].content,
                format!("User '{}' already exists.", name)
            );
        }
    }

    #[test]
    fn duplicate_wins_over_bad_age() {
        let mut roster = alice_roster();
        let result = run(&mut roster, "alice", "not-a-number", "b@x.com").unwrap();
        assert!(!result.mutated());
        assert_eq!(roster, alice_roster());
    }

    #[test]
    fn bad_age_fails_without_mutation() {
        let mut roster = alice_roster();
        let err = run(&mut roster, "Bob", "twenty", "b@x.com").unwrap_err();

        assert!(matches!(err, RosterError::InvalidAge { .. }));
        assert_eq!(roster, alice_roster());
    }

    #[test]
    fn outcome_levels() {
        let mut roster = Roster::new();
        let added = run(&mut roster, "Alice", "30", "a@x.com").unwrap();
        assert_eq!(added.messages[0].level, MessageLevel::Success);

        let dup = run(&mut roster, "alice", "31", "a@x.com").unwrap();
        assert_eq!(dup.messages.len(), 1);
        assert_eq!(dup.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn email_is_stored_verbatim() {
        let mut roster = Roster::new();
        run(&mut roster, "Carol", "41", "  not an email ").unwrap();
        assert_eq!(roster.users()[0].email, "  not an email ");
    }
}
