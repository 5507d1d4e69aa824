use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Roster;
use tracing::debug;

use super::helpers::parse_age;

/// Set the age of the first user whose name matches case-insensitively.
///
/// The age text is only coerced once a match is found; an unknown name is reported
/// without looking at it.
pub fn run(roster: &mut Roster, name: &str, new_age: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(user) = roster.find_mut(name) else {
        debug!(name, "update found no matching user");
        result.add_message(CmdMessage::warning(format!(
            "User '{}' not found in the data.",
            name
        )));
        return Ok(result);
    };

    user.age = parse_age(new_age)?;
    let updated = user.clone();

    result.add_message(CmdMessage::success(format!(
        "Updated {}'s age to {}",
        name, new_age
    )));
    Ok(result.with_affected_users(vec![updated]))
}
