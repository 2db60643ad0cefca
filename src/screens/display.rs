//! Terminal output for the screen loop
//!
//! All rendering goes through one place so screens stay focused on flow.
//! Color-coded output via `colored`; screen clearing via crossterm.

use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use std::io;

use crate::cli::Verbosity;
use crate::resolver::Diagnosis;
use crate::session::{ReminderRecord, ReminderStatus, SymptomLogRecord};

/// Display helper shared by every screen.
pub struct Display {
    verbosity: Verbosity,
}

impl Display {
    pub fn new(verbosity: Verbosity) -> Self {
        Display { verbosity }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        if self.is_quiet() {
            return;
        }

        let width = 64;
        let top = format!("{}", "=".repeat(width).cyan());
        let title = format!("  MediScan {} - Terminal Health Companion", version);
        let info = "  Data: session-only | Mode: Interactive";
        let bottom = format!("{}", "=".repeat(width).cyan());

        println!("\n{}", top);
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", bottom);
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }

    /// Greeting line at the top of the dashboard
    pub fn show_greeting(&self, name: &str) {
        println!("\n{}", format!("Hi, {}!", name).bold().magenta());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Dimmed hint line (command help, optional-field notes)
    pub fn show_hint(&self, hint: &str) {
        println!("{}", hint.dimmed());
    }

    /// Show bullet point
    pub fn show_bullet(&self, text: &str) {
        println!("  {} {}", "•".cyan(), text);
    }

    /// Show numbered item
    pub fn show_numbered(&self, index: usize, text: &str) {
        println!("  {}. {}", index.to_string().cyan(), text);
    }

    /// Diagnosis card: name, description, remedy note
    pub fn show_diagnosis(&self, diagnosis: &Diagnosis) {
        println!("\n  {}", diagnosis.name.bold().magenta());
        println!("  {}", diagnosis.description);
        println!("  {}", diagnosis.remedy.green());
    }

    /// One reminder line, 1-based index for display
    pub fn show_reminder(&self, index: usize, reminder: &ReminderRecord) {
        let status = match reminder.status {
            ReminderStatus::Pending => reminder.status.label().dimmed(),
            ReminderStatus::Taken => reminder.status.label().green(),
            ReminderStatus::Missed => reminder.status.label().red(),
        };

        println!(
            "  {}. {} ({}, {}) - {}",
            index.to_string().cyan(),
            reminder.name.bold(),
            reminder.dosage,
            reminder.schedule,
            status
        );

        if self.is_verbose() {
            println!(
                "     {}",
                format!("added {}", reminder.added_at.format("%Y-%m-%d %H:%M UTC")).dimmed()
            );
        }
    }

    /// One symptom log line, 1-based index for display
    pub fn show_symptom_log(&self, index: usize, log: &SymptomLogRecord) {
        let notes = if log.notes.is_empty() {
            String::new()
        } else {
            format!(" - {}", log.notes)
        };

        println!(
            "  {}. {} [{}]{}",
            index.to_string().cyan(),
            log.name.bold(),
            log.severity.label().yellow(),
            notes
        );

        if self.is_verbose() {
            println!(
                "     {}",
                format!("logged {}", log.logged_at.format("%Y-%m-%d %H:%M UTC")).dimmed()
            );
        }
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new(Verbosity::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver;
    use crate::session::Severity;

    #[test]
    fn test_verbosity_flags() {
        assert!(Display::new(Verbosity::Verbose).is_verbose());
        assert!(!Display::new(Verbosity::Normal).is_verbose());
        assert!(Display::new(Verbosity::Quiet).is_quiet());
    }

    #[test]
    fn test_banner_suppressed_when_quiet() {
        // Smoke test: quiet banner returns without printing or panicking.
        Display::new(Verbosity::Quiet).show_banner("0.1.0");
        Display::new(Verbosity::Normal).show_banner("0.1.0");
    }

    #[test]
    fn test_record_rendering_smoke() {
        let display = Display::new(Verbosity::Verbose);

        let reminder = ReminderRecord::new(
            "Paracetamol".to_string(),
            "500mg".to_string(),
            "2x a day".to_string(),
        );
        display.show_reminder(1, &reminder);

        let log = SymptomLogRecord::new("Headache".to_string(), Severity::Mild, String::new());
        display.show_symptom_log(1, &log);

        for diagnosis in resolver::resolve(&["Headache"]) {
            display.show_diagnosis(&diagnosis);
        }
    }
}
