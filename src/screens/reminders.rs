//! Medication reminders screen
//!
//! Add reminders (name/dosage/schedule, all required) and log a response
//! against an existing entry by its list number. Blank form input quietly
//! suppresses the add, matching the profile-capture rules.

use crate::errors::Result;
use crate::screens::{Display, InputHandler, Screen, Transition};
use crate::session::{ReminderStatus, Session};

/// Parsed reminder-screen input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderAction {
    Add,
    /// Log a response for the reminder at this 0-based index.
    Log {
        index: usize,
        status: ReminderStatus,
    },
    Back,
    Quit,
    Unknown,
}

/// Parse a reminder command: `add`, `log <n> taken|missed`, `back`.
pub fn parse_action(input: &str) -> ReminderAction {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    match tokens.first().map(|t| t.to_lowercase()).as_deref() {
        Some("add") => ReminderAction::Add,
        Some("back") | Some("b") => ReminderAction::Back,
        Some("quit") | Some("exit") | Some("q") => ReminderAction::Quit,
        Some("log") => {
            let index = tokens.get(1).and_then(|t| t.parse::<usize>().ok());
            let status = tokens.get(2).map(|t| t.to_lowercase());

            match (index, status.as_deref()) {
                (Some(n), Some("taken")) if n >= 1 => ReminderAction::Log {
                    index: n - 1,
                    status: ReminderStatus::Taken,
                },
                (Some(n), Some("missed")) if n >= 1 => ReminderAction::Log {
                    index: n - 1,
                    status: ReminderStatus::Missed,
                },
                _ => ReminderAction::Unknown,
            }
        }
        _ => ReminderAction::Unknown,
    }
}

pub fn run(
    display: &Display,
    input: &mut InputHandler,
    session: &mut Session,
) -> Result<Transition> {
    loop {
        display.show_section("Medication Reminders");

        if session.reminders().is_empty() {
            display.show_hint("No reminders yet.");
        } else {
            for (index, reminder) in session.reminders().iter().enumerate() {
                display.show_reminder(index + 1, reminder);
            }
        }

        display.show_hint("Commands: add, log <n> taken|missed, back");

        match input.read_line("> ")? {
            None => return Ok(Transition::Quit),
            Some(line) => match parse_action(&line) {
                ReminderAction::Add => add_reminder(input, session)?,
                ReminderAction::Log { index, status } => {
                    if !session.log_reminder_response(index, status) {
                        display.show_warning(&format!("No reminder #{}.", index + 1));
                    }
                }
                ReminderAction::Back => return Ok(Transition::To(Screen::Dashboard)),
                ReminderAction::Quit => return Ok(Transition::Quit),
                ReminderAction::Unknown => {
                    display.show_warning("Unknown command. Try: add, log <n> taken|missed, back");
                }
            },
        }
    }
}

/// Prompt the three reminder fields. A blank field suppresses the add
/// without comment.
fn add_reminder(input: &mut InputHandler, session: &mut Session) -> Result<()> {
    let name = match input.read_line("  Medicine name: ")? {
        None => return Ok(()),
        Some(name) => name,
    };
    let dosage = match input.read_line("  Dosage (e.g. 500mg): ")? {
        None => return Ok(()),
        Some(dosage) => dosage,
    };
    let schedule = match input.read_line("  Schedule (e.g. 2x a day): ")? {
        None => return Ok(()),
        Some(schedule) => schedule,
    };

    session.add_reminder(&name, &dosage, &schedule);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_and_back() {
        assert_eq!(parse_action("add"), ReminderAction::Add);
        assert_eq!(parse_action("  ADD  "), ReminderAction::Add);
        assert_eq!(parse_action("back"), ReminderAction::Back);
        assert_eq!(parse_action("b"), ReminderAction::Back);
    }

    #[test]
    fn test_parse_log_taken() {
        assert_eq!(
            parse_action("log 2 taken"),
            ReminderAction::Log {
                index: 1,
                status: ReminderStatus::Taken
            }
        );
    }

    #[test]
    fn test_parse_log_missed() {
        assert_eq!(
            parse_action("log 1 missed"),
            ReminderAction::Log {
                index: 0,
                status: ReminderStatus::Missed
            }
        );
    }

    #[test]
    fn test_parse_log_rejects_malformed() {
        assert_eq!(parse_action("log"), ReminderAction::Unknown);
        assert_eq!(parse_action("log taken"), ReminderAction::Unknown);
        assert_eq!(parse_action("log 0 taken"), ReminderAction::Unknown);
        assert_eq!(parse_action("log 2 skipped"), ReminderAction::Unknown);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse_action(""), ReminderAction::Unknown);
        assert_eq!(parse_action("delete 1"), ReminderAction::Unknown);
    }
}
