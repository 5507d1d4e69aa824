use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::model::User;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("No users found.");
        return;
    }

    println!("{}", "List of users:".bold());
    for user in users {
        println!("{}", format_user(user));
    }
}

fn format_user(user: &User) -> String {
    format!("- {} (Age: {}, Email: {})", user.name, user.age, user.email)
}
