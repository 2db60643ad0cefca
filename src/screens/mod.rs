//! Screen loop for the interactive session
//!
//! A single top-level dispatcher swaps which screen runs based on the
//! current [`Screen`] value. Each screen renders, reads input until the user
//! navigates, and hands back a [`Transition`]; no state is shared between
//! screens beyond the [`Session`] the dispatcher threads through.

pub mod checker;
pub mod dashboard;
pub mod diagnoses;
pub mod display;
pub mod facility;
pub mod input;
pub mod login;
pub mod reminders;
pub mod symptom_log;

pub use display::Display;
pub use input::InputHandler;

use crate::cli::Verbosity;
use crate::config::Config;
use crate::errors::Result;
use crate::session::Session;

/// The screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    MedicationReminders,
    SymptomInput,
    SymptomChecker,
    PossibleDiagnoses,
    FacilityMap,
}

/// What a screen asks the dispatcher to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Switch to another screen.
    To(Screen),
    /// Clear the session and return to the login screen.
    Logout,
    /// Leave the application.
    Quit,
}

/// Interactive application: dispatcher plus the state it threads through.
pub struct App {
    config: Config,
    session: Session,
    display: Display,
    input: InputHandler,
    screen: Screen,
}

impl App {
    pub fn new(config: Config, verbosity: Verbosity) -> Result<Self> {
        let input = match config.history_file() {
            Some(path) => InputHandler::with_history(path.to_path_buf())?,
            None => InputHandler::new()?,
        };

        Ok(App {
            config,
            session: Session::new(),
            display: Display::new(verbosity),
            input,
            screen: Screen::Login,
        })
    }

    /// Run the screen loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        if !self.display.is_quiet() {
            let _ = self.display.clear_screen();
        }
        self.display.show_banner(env!("CARGO_PKG_VERSION"));

        loop {
            let transition = match self.screen {
                Screen::Login => {
                    login::run(&self.display, &mut self.input, &mut self.session)?
                }
                Screen::Dashboard => {
                    dashboard::run(&self.display, &mut self.input, &self.session)?
                }
                Screen::MedicationReminders => {
                    reminders::run(&self.display, &mut self.input, &mut self.session)?
                }
                Screen::SymptomInput => {
                    symptom_log::run(&self.display, &mut self.input, &mut self.session)?
                }
                Screen::SymptomChecker => {
                    checker::run(&self.display, &mut self.input, &mut self.session)?
                }
                Screen::PossibleDiagnoses => {
                    diagnoses::run(&self.display, &mut self.input, &self.session)?
                }
                Screen::FacilityMap => {
                    facility::run(&self.display, &mut self.input, &self.config)?
                }
            };

            match transition {
                Transition::To(next) => self.screen = next,
                Transition::Logout => {
                    self.session.logout();
                    self.screen = Screen::Login;
                }
                Transition::Quit => break,
            }
        }

        self.input.save_history()?;
        Ok(())
    }

    pub fn current_screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_starts_at_login() {
        let app = App::new(Config::default(), Verbosity::Quiet).unwrap();
        assert_eq!(app.current_screen(), Screen::Login);
        assert!(!app.session().is_signed_in());
    }
}
