//! Session record types
//!
//! Plain value records held in append-only containers for the lifetime of
//! one signed-in session. None of them persist anywhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile captured at sign-in. Transient; only the name is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub health_history: String,
}

/// Gender options offered at sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All options in display order.
    pub const OPTIONS: &'static [Gender] = &[Gender::Male, Gender::Female, Gender::Other];

    /// Parse a menu choice: option name (case-insensitive) or 1-based index.
    pub fn parse(input: &str) -> Option<Gender> {
        match input.trim().to_lowercase().as_str() {
            "male" | "m" | "1" => Some(Gender::Male),
            "female" | "f" | "2" => Some(Gender::Female),
            "other" | "o" | "3" => Some(Gender::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Response state of a medication reminder.
///
/// The only mutable field of a reminder: it starts `Pending` and is updated
/// in place by index-addressed logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReminderStatus {
    #[default]
    Pending,
    Taken,
    Missed,
}

impl ReminderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReminderStatus::Pending => "pending",
            ReminderStatus::Taken => "taken",
            ReminderStatus::Missed => "missed",
        }
    }
}

/// One medication reminder entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderRecord {
    pub name: String,
    pub dosage: String,
    pub schedule: String,
    pub status: ReminderStatus,
    pub added_at: DateTime<Utc>,
}

impl ReminderRecord {
    pub fn new(name: String, dosage: String, schedule: String) -> Self {
        ReminderRecord {
            name,
            dosage,
            schedule,
            status: ReminderStatus::default(),
            added_at: Utc::now(),
        }
    }
}

/// Severity options for a symptom log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// All options in display order.
    pub const OPTIONS: &'static [Severity] =
        &[Severity::Mild, Severity::Moderate, Severity::Severe];

    /// Parse a menu choice: option name (case-insensitive) or 1-based index.
    pub fn parse(input: &str) -> Option<Severity> {
        match input.trim().to_lowercase().as_str() {
            "mild" | "1" => Some(Severity::Mild),
            "moderate" | "2" => Some(Severity::Moderate),
            "severe" | "3" => Some(Severity::Severe),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

/// One symptom log entry. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomLogRecord {
    pub name: String,
    pub severity: Severity,
    pub notes: String,
    pub logged_at: DateTime<Utc>,
}

impl SymptomLogRecord {
    pub fn new(name: String, severity: Severity, notes: String) -> Self {
        SymptomLogRecord {
            name,
            severity,
            notes,
            logged_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("Male"), Some(Gender::Male));
        assert_eq!(Gender::parse("female"), Some(Gender::Female));
        assert_eq!(Gender::parse("3"), Some(Gender::Other));
        assert_eq!(Gender::parse("unknown"), None);
        assert_eq!(Gender::parse(""), None);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse("mild"), Some(Severity::Mild));
        assert_eq!(Severity::parse("2"), Some(Severity::Moderate));
        assert_eq!(Severity::parse(" Severe "), Some(Severity::Severe));
        assert_eq!(Severity::parse("critical"), None);
    }

    #[test]
    fn test_reminder_starts_pending() {
        let record = ReminderRecord::new(
            "Paracetamol".to_string(),
            "500mg".to_string(),
            "2x a day".to_string(),
        );
        assert_eq!(record.status, ReminderStatus::Pending);
        assert_eq!(record.status.label(), "pending");
    }

    #[test]
    fn test_option_lists_match_labels() {
        let genders: Vec<&str> = Gender::OPTIONS.iter().map(|g| g.label()).collect();
        assert_eq!(genders, vec!["Male", "Female", "Other"]);

        let severities: Vec<&str> = Severity::OPTIONS.iter().map(|s| s.label()).collect();
        assert_eq!(severities, vec!["Mild", "Moderate", "Severe"]);
    }
}
