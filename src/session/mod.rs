//! In-memory session state
//!
//! Holds everything the signed-in user has entered: the profile, the two
//! append-only logs and the current symptom selection. All of it lives for
//! exactly one sign-in; logout replaces the containers with empty ones.
//!
//! Mutations are synchronous and single-actor: each one completes before the
//! next user action is accepted, so no interior locking is needed.

pub mod records;

pub use records::{
    Gender, Profile, ReminderRecord, ReminderStatus, Severity, SymptomLogRecord,
};

/// Session state for one signed-in user.
#[derive(Debug, Default)]
pub struct Session {
    profile: Option<Profile>,

    /// Append-only; only each record's status field is ever mutated.
    reminders: Vec<ReminderRecord>,

    /// Append-only; records are immutable after creation.
    symptom_logs: Vec<SymptomLogRecord>,

    /// Ordered with set semantics: no duplicates, insertion order kept,
    /// re-insertion after removal appends at the end.
    selected_symptoms: Vec<&'static str>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Sign in with a captured profile.
    pub fn sign_in(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    /// Whether a user is currently signed in.
    pub fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }

    /// Display name for greetings, with the "User" fallback for blank names.
    pub fn display_name(&self) -> &str {
        match &self.profile {
            Some(profile) if !profile.name.trim().is_empty() => &profile.name,
            _ => "User",
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Append a medication reminder.
    ///
    /// All three fields must be non-blank; otherwise the add is silently
    /// suppressed and `false` is returned.
    pub fn add_reminder(&mut self, name: &str, dosage: &str, schedule: &str) -> bool {
        if name.trim().is_empty() || dosage.trim().is_empty() || schedule.trim().is_empty() {
            return false;
        }

        self.reminders.push(ReminderRecord::new(
            name.trim().to_string(),
            dosage.trim().to_string(),
            schedule.trim().to_string(),
        ));
        true
    }

    /// Update the status of the reminder at `index` (0-based).
    ///
    /// Out-of-range indices are a no-op returning `false`.
    pub fn log_reminder_response(&mut self, index: usize, status: ReminderStatus) -> bool {
        match self.reminders.get_mut(index) {
            Some(reminder) => {
                reminder.status = status;
                true
            }
            None => false,
        }
    }

    pub fn reminders(&self) -> &[ReminderRecord] {
        &self.reminders
    }

    /// Append a symptom log entry. The name must be non-blank; otherwise the
    /// add is silently suppressed.
    pub fn add_symptom_log(&mut self, name: &str, severity: Severity, notes: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }

        self.symptom_logs.push(SymptomLogRecord::new(
            name.trim().to_string(),
            severity,
            notes.trim().to_string(),
        ));
        true
    }

    pub fn symptom_logs(&self) -> &[SymptomLogRecord] {
        &self.symptom_logs
    }

    /// Toggle a symptom selection: add if absent, remove if present.
    pub fn toggle_symptom(&mut self, symptom: &'static str) {
        if let Some(position) = self.selected_symptoms.iter().position(|&s| s == symptom) {
            self.selected_symptoms.remove(position);
        } else {
            self.selected_symptoms.push(symptom);
        }
    }

    pub fn is_selected(&self, symptom: &str) -> bool {
        self.selected_symptoms.iter().any(|&s| s == symptom)
    }

    pub fn selected_symptoms(&self) -> &[&'static str] {
        &self.selected_symptoms
    }

    /// Discard the in-progress symptom selection (leaving the checker flow).
    pub fn clear_selection(&mut self) {
        self.selected_symptoms.clear();
    }

    /// Log out: drop the profile and replace every container with an empty
    /// one. No teardown beyond that.
    pub fn logout(&mut self) {
        *self = Session::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> Session {
        let mut session = Session::new();
        session.sign_in(Profile {
            name: "Maria".to_string(),
            age: "34".to_string(),
            gender: Some(Gender::Female),
            health_history: "asthma".to_string(),
        });
        session
    }

    #[test]
    fn test_display_name_fallback() {
        let session = Session::new();
        assert_eq!(session.display_name(), "User");

        let mut blank = Session::new();
        blank.sign_in(Profile {
            name: "   ".to_string(),
            age: String::new(),
            gender: None,
            health_history: String::new(),
        });
        assert_eq!(blank.display_name(), "User");

        assert_eq!(signed_in().display_name(), "Maria");
    }

    #[test]
    fn test_add_reminder_requires_all_fields() {
        let mut session = signed_in();

        assert!(!session.add_reminder("", "500mg", "2x a day"));
        assert!(!session.add_reminder("Paracetamol", "  ", "2x a day"));
        assert!(!session.add_reminder("Paracetamol", "500mg", ""));
        assert!(session.reminders().is_empty());

        assert!(session.add_reminder("Paracetamol", "500mg", "2x a day"));
        assert_eq!(session.reminders().len(), 1);
    }

    #[test]
    fn test_log_reminder_response_by_index() {
        let mut session = signed_in();
        session.add_reminder("Paracetamol", "500mg", "2x a day");
        session.add_reminder("Cetirizine", "10mg", "nightly");

        assert!(session.log_reminder_response(1, ReminderStatus::Taken));
        assert_eq!(session.reminders()[0].status, ReminderStatus::Pending);
        assert_eq!(session.reminders()[1].status, ReminderStatus::Taken);

        assert!(session.log_reminder_response(0, ReminderStatus::Missed));
        assert_eq!(session.reminders()[0].status, ReminderStatus::Missed);

        // Out of range: no-op.
        assert!(!session.log_reminder_response(5, ReminderStatus::Taken));
    }

    #[test]
    fn test_add_symptom_log_requires_name() {
        let mut session = signed_in();

        assert!(!session.add_symptom_log("  ", Severity::Mild, "notes"));
        assert!(session.symptom_logs().is_empty());

        assert!(session.add_symptom_log("Headache", Severity::Severe, ""));
        assert_eq!(session.symptom_logs().len(), 1);
        assert_eq!(session.symptom_logs()[0].severity, Severity::Severe);
    }

    #[test]
    fn test_toggle_symptom_set_semantics() {
        let mut session = signed_in();

        session.toggle_symptom("Headache");
        session.toggle_symptom("Fever");
        assert_eq!(session.selected_symptoms(), &["Headache", "Fever"]);

        // Toggling again removes.
        session.toggle_symptom("Headache");
        assert_eq!(session.selected_symptoms(), &["Fever"]);
        assert!(!session.is_selected("Headache"));

        // Re-insertion appends at the end.
        session.toggle_symptom("Headache");
        assert_eq!(session.selected_symptoms(), &["Fever", "Headache"]);
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let mut session = signed_in();
        for _ in 0..5 {
            session.toggle_symptom("Nausea");
        }
        // Odd number of toggles: selected exactly once.
        assert_eq!(session.selected_symptoms(), &["Nausea"]);
    }

    #[test]
    fn test_clear_selection() {
        let mut session = signed_in();
        session.toggle_symptom("Headache");
        session.clear_selection();
        assert!(session.selected_symptoms().is_empty());
    }

    #[test]
    fn test_logout_discards_everything() {
        let mut session = signed_in();
        session.add_reminder("Paracetamol", "500mg", "2x a day");
        session.add_symptom_log("Headache", Severity::Mild, "");
        session.toggle_symptom("Fever");

        session.logout();

        assert!(!session.is_signed_in());
        assert!(session.reminders().is_empty());
        assert!(session.symptom_logs().is_empty());
        assert!(session.selected_symptoms().is_empty());
        assert_eq!(session.display_name(), "User");
    }
}
