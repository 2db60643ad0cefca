//! Symptom input screen
//!
//! Free-form symptom logging: name (required), severity (required, one of
//! the fixed options) and optional notes. Entries are immutable once added.

use crate::errors::Result;
use crate::screens::{Display, InputHandler, Screen, Transition};
use crate::session::{Session, Severity};

/// Parsed symptom-log-screen input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    Add,
    Back,
    Quit,
    Unknown,
}

/// Parse a symptom-log command: `add` or `back`.
pub fn parse_action(input: &str) -> LogAction {
    match input.trim().to_lowercase().as_str() {
        "add" => LogAction::Add,
        "back" | "b" => LogAction::Back,
        "quit" | "exit" | "q" => LogAction::Quit,
        _ => LogAction::Unknown,
    }
}

pub fn run(
    display: &Display,
    input: &mut InputHandler,
    session: &mut Session,
) -> Result<Transition> {
    loop {
        display.show_section("Symptom Input");

        if session.symptom_logs().is_empty() {
            display.show_hint("No symptoms logged yet.");
        } else {
            for (index, log) in session.symptom_logs().iter().enumerate() {
                display.show_symptom_log(index + 1, log);
            }
        }

        display.show_hint("Commands: add, back");

        match input.read_line("> ")? {
            None => return Ok(Transition::Quit),
            Some(line) => match parse_action(&line) {
                LogAction::Add => add_log(display, input, session)?,
                LogAction::Back => return Ok(Transition::To(Screen::Dashboard)),
                LogAction::Quit => return Ok(Transition::Quit),
                LogAction::Unknown => display.show_warning("Unknown command. Try: add, back"),
            },
        }
    }
}

/// Prompt the symptom fields. A blank name or an unrecognized severity
/// suppresses the add without comment.
fn add_log(display: &Display, input: &mut InputHandler, session: &mut Session) -> Result<()> {
    let name = match input.read_line("  Symptom name: ")? {
        None => return Ok(()),
        Some(name) => name,
    };

    display.show_hint("  Severity: 1. Mild  2. Moderate  3. Severe");
    let severity = match input.read_line("  Severity: ")? {
        None => return Ok(()),
        Some(choice) => match Severity::parse(&choice) {
            Some(severity) => severity,
            None => return Ok(()),
        },
    };

    let notes = match input.read_line("  Notes: ")? {
        None => return Ok(()),
        Some(notes) => notes,
    };

    session.add_symptom_log(&name, severity, &notes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!(parse_action("add"), LogAction::Add);
        assert_eq!(parse_action(" Back "), LogAction::Back);
        assert_eq!(parse_action("q"), LogAction::Quit);
        assert_eq!(parse_action("remove"), LogAction::Unknown);
        assert_eq!(parse_action(""), LogAction::Unknown);
    }
}
