//! Dashboard screen: feature menu
//!
//! Greets the signed-in user and offers the feature menu. The menu carries
//! the full set of entries from the product design; entries without a wired
//! screen are inert placeholders.

use crate::errors::Result;
use crate::screens::{Display, InputHandler, Screen, Transition};
use crate::session::Session;

/// Menu entries in display order. `None` marks an inert placeholder.
pub const MENU: &[(&str, Option<Screen>)] = &[
    ("Symptom Checker", Some(Screen::SymptomChecker)),
    ("Find Healthcare", Some(Screen::FacilityMap)),
    ("Appointments", None),
    ("Emergency", None),
    ("Recommendations", None),
    ("Settings", None),
    ("Medication Reminders", Some(Screen::MedicationReminders)),
    ("Symptom Input", Some(Screen::SymptomInput)),
];

/// Parsed dashboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Open(Screen),
    Placeholder,
    Logout,
    Quit,
    Invalid,
}

/// Parse a dashboard choice: a 1-based menu number, `logout` or `quit`.
pub fn parse_choice(input: &str) -> MenuChoice {
    match input.trim().to_lowercase().as_str() {
        "logout" => MenuChoice::Logout,
        "quit" | "exit" | "q" => MenuChoice::Quit,
        other => match other.parse::<usize>() {
            Ok(n) if (1..=MENU.len()).contains(&n) => match MENU[n - 1].1 {
                Some(screen) => MenuChoice::Open(screen),
                None => MenuChoice::Placeholder,
            },
            _ => MenuChoice::Invalid,
        },
    }
}

pub fn run(display: &Display, input: &mut InputHandler, session: &Session) -> Result<Transition> {
    display.show_greeting(session.display_name());

    loop {
        display.show_section("Dashboard");
        for (index, (label, _)) in MENU.iter().enumerate() {
            display.show_numbered(index + 1, label);
        }
        display.show_hint("Pick a number, or type: logout, quit");

        match input.read_line("> ")? {
            None => return Ok(Transition::Quit),
            Some(line) => match parse_choice(&line) {
                MenuChoice::Open(screen) => return Ok(Transition::To(screen)),
                MenuChoice::Logout => return Ok(Transition::Logout),
                MenuChoice::Quit => return Ok(Transition::Quit),
                MenuChoice::Placeholder => {
                    display.show_hint("Not available in this build.");
                }
                MenuChoice::Invalid => {
                    display.show_warning("Pick a menu number between 1 and 8.");
                }
            },
        }
    }
}
