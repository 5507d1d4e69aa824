use crate::error::{RosterError, Result};

/// Coerce user-typed age text to an integer. Surrounding whitespace, a leading sign and
/// single underscores between digits (`1_000`) are accepted; anything else that is not
/// a base-10 integer fitting in an `i64` is an error.
pub fn parse_age(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    let digits = trimmed.trim_start_matches(['+', '-']);
    let grouped = digits.contains('_')
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__");

    let candidate = if grouped {
        trimmed.replace('_', "")
    } else {
        trimmed.to_string()
    };

    candidate
        .parse::<i64>()
        .map_err(|source| RosterError::InvalidAge {
            value: text.to_string(),
            source,
        })
}
