//! Line parsing for the console transport.

use positor_core::handlers::Command;

/// Map an input line to a game command. The configured prefix is
/// accepted but optional on the console, so `!affirm` and `affirm` both
/// work. Anything else is not a command.
pub fn parse_command(line: &str, prefix: &str) -> Option<Command> {
    let trimmed = line.trim();
    let verb = trimmed.strip_prefix(prefix).unwrap_or(trimmed);

    match verb.to_lowercase().as_str() {
        "start" => Some(Command::Start),
        "affirm" => Some(Command::Affirm),
        "deny" => Some(Command::Deny),
        "end" => Some(Command::End),
        _ => None,
    }
}
