//! Login screen: profile capture
//!
//! Collects name, age, gender and health history into a transient
//! [`Profile`]. Only the name is validated (non-blank); everything else may
//! be left empty.

use crate::errors::Result;
use crate::screens::{Display, InputHandler, Screen, Transition};
use crate::session::{Gender, Profile, Session};

pub fn run(
    display: &Display,
    input: &mut InputHandler,
    session: &mut Session,
) -> Result<Transition> {
    display.show_section("MediScan Sign In");

    let name = loop {
        match input.read_line("  Name: ")? {
            None => return Ok(Transition::Quit),
            Some(name) if name.trim().is_empty() => {
                display.show_hint("A name is required.");
            }
            Some(name) => break name,
        }
    };

    let age = match input.read_line("  Age: ")? {
        None => return Ok(Transition::Quit),
        Some(age) => age,
    };

    display.show_hint("  Gender: 1. Male  2. Female  3. Other (leave blank to skip)");
    let gender = loop {
        match input.read_line("  Gender: ")? {
            None => return Ok(Transition::Quit),
            Some(choice) if choice.trim().is_empty() => break None,
            Some(choice) => match Gender::parse(&choice) {
                Some(gender) => break Some(gender),
                None => display.show_hint("Choose 1, 2 or 3, or leave blank."),
            },
        }
    };

    let health_history = match input.read_line("  Health history: ")? {
        None => return Ok(Transition::Quit),
        Some(history) => history,
    };

    session.sign_in(Profile {
        name,
        age,
        gender,
        health_history,
    });

    display.show_info("Your record has been saved. Proceeding...");
    Ok(Transition::To(Screen::Dashboard))
}
