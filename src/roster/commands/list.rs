use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Roster;

pub fn run(roster: &Roster) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_users(roster.users().to_vec()))
}
