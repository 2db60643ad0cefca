//! Possible diagnoses screen
//!
//! Shows the resolver output for the current symptom selection. Read-only;
//! the only action is going back to the checker, which keeps the selection
//! so it can be refined.

use crate::errors::Result;
use crate::resolver;
use crate::screens::{Display, InputHandler, Screen, Transition};
use crate::session::Session;

pub fn run(display: &Display, input: &mut InputHandler, session: &Session) -> Result<Transition> {
    display.show_section("Possible Diagnoses");

    if session.selected_symptoms().is_empty() {
        display.show_hint("No symptoms selected.");
    } else {
        display.show_hint("Based on your selected symptoms:");
        for symptom in session.selected_symptoms() {
            display.show_bullet(symptom);
        }
    }

    display.show_hint("\nHere are the possible conditions:");
    for diagnosis in resolver::resolve(session.selected_symptoms()) {
        display.show_diagnosis(&diagnosis);
    }

    display.show_hint("\nPress Enter to go back.");
    match input.read_line("> ")? {
        None => Ok(Transition::Quit),
        Some(_) => Ok(Transition::To(Screen::SymptomChecker)),
    }
}
