//! Diagnosis resolver
//!
//! Pure transformation from a user's selected symptoms to an ordered list of
//! candidate diagnoses with display text. Invoked once per "next" action in
//! the symptom checker and once per `check` CLI invocation.
//!
//! Every lookup is total: an unmapped symptom contributes nothing, a missing
//! detail entry falls back to the placeholder pair, and an empty candidate
//! list is replaced by a single sentinel entry. There is no error path.

use serde::Serialize;

use crate::catalog::{self, DEFAULT_DESCRIPTION, DEFAULT_REMEDY};

/// Fallback entry shown when no selected symptom maps to any diagnosis.
pub const NO_DIAGNOSIS_SENTINEL: &str =
    "No specific diagnosis found. Please consult a healthcare professional.";

/// One candidate condition with its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub name: &'static str,
    pub description: &'static str,
    pub remedy: &'static str,
}

impl Diagnosis {
    /// Whether this entry is the "no specific diagnosis" sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.name == NO_DIAGNOSIS_SENTINEL
    }
}

/// Resolve selected symptoms to de-duplicated candidate diagnoses.
///
/// Candidates are flattened in input order, each symptom's diagnoses in
/// table-declared order, keeping only the first occurrence of each name.
/// The output is never empty: with no candidates it holds exactly the
/// sentinel entry.
///
/// Complexity: O(n * m) over n selected symptoms and m accumulated
/// candidates; both are small, fixed-catalog quantities.
pub fn resolve<S: AsRef<str>>(selected: &[S]) -> Vec<Diagnosis> {
    let mut names: Vec<&'static str> = Vec::new();

    for symptom in selected {
        for &candidate in catalog::diagnoses_for(symptom.as_ref()) {
            if !names.contains(&candidate) {
                names.push(candidate);
            }
        }
    }

    if names.is_empty() {
        names.push(NO_DIAGNOSIS_SENTINEL);
    }

    names.into_iter().map(with_details).collect()
}

/// Attach description and remedy text, substituting the placeholder pair
/// for diagnoses the detail table does not cover.
fn with_details(name: &'static str) -> Diagnosis {
    let (description, remedy) =
        catalog::details_for(name).unwrap_or((DEFAULT_DESCRIPTION, DEFAULT_REMEDY));

    Diagnosis {
        name,
        description,
        remedy,
    }
}
