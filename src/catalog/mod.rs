//! Static clinical lookup tables
//!
//! Three read-only tables seed the whole application:
//! - body region -> selectable symptom names (this module)
//! - symptom name -> candidate diagnosis names ([`diagnoses`])
//! - diagnosis name -> description and remedy text ([`details`])
//!
//! All lookups are case-sensitive exact matches over `'static` data. A miss
//! is a normal outcome, never an error: not every catalog symptom has mapped
//! diagnoses, and not every diagnosis has detail text.

pub mod details;
pub mod diagnoses;

pub use details::{details_for, DEFAULT_DESCRIPTION, DEFAULT_REMEDY};
pub use diagnoses::diagnoses_for;

/// Body regions offered in the symptom checker, in display order.
pub const BODY_REGIONS: &[&str] = &[
    "Abdomen",
    "Arms general",
    "Back",
    "Buttocks & rectum",
    "Chest",
    "Face & Eyes",
    "Forehead & head in general",
    "Foot",
    "Finger",
    "Forearm & elbow",
    "Genitals & groin",
    "Hand & wrist",
    "Hips & hip joint",
    "Hair & scalp",
    "Lateral chest",
    "Legs general",
    "Lower leg & ankle",
    "Mouth & jaw",
    "Nose, ears, throat, & neck",
    "Pelvis",
    "Skin",
    "Thigh & knee",
    "Toes",
];

/// Symptoms selectable for a body region, in display order.
///
/// An unknown region yields an empty slice.
pub fn symptoms_for(region: &str) -> &'static [&'static str] {
    match region {
        "Abdomen" => &[
            "Abdominal pain",
            "Nausea",
            "Heartburn",
            "Bloated",
            "Diarrhea",
            "Vomiting",
            "Stomach burning",
            "Reduced Appetite",
        ],
        "Arms general" => &[
            "Pain in the limbs",
            "Joint pain",
            "Cramps",
            "Muscle stiffness",
            "Muscle pain",
            "Joint Swelling",
            "Joint effusion",
            "Joint redness",
            "Numbness in the arm",
            "Arm swelling/pain",
        ],
        "Back" => &[
            "Back pain",
            "Lower back pain",
            "Pain radiating to the leg",
            "Pain radiating to the arm",
        ],
        "Buttocks & rectum" => &[
            "Diarrhea",
            "Difficult defecation",
            "Hard defecation",
            "Incomplete defecation",
            "Less than 3 defecations per week",
            "Painful defecation",
            "Blood in stool",
            "Pain of the anus",
        ],
        "Chest" => &[
            "Cough",
            "Chest pain",
            "Palpitations",
            "Nausea",
            "Heartburn",
            "Sputum",
            "Night cough",
            "Bloody cough",
            "Breathing related pains",
            "Lump in the breast",
        ],
        "Face & Eyes" => &[
            "Eye redness",
            "Vision impairment",
            "Halo",
            "Itching eyes",
            "Burning eyes",
            "Blurred vision",
            "Oversensitivity to light",
            "Eyelid Swelling",
            "Tears",
            "Face pain",
            "Drooping eyelid",
            "Eye pain",
            "Burning nose",
            "Pain when chewing",
            "Facial paralysis",
            "Cheek swelling",
        ],
        "Forehead & head in general" => &[
            "Headache",
            "Fever",
            "Drowsiness",
            "Tiredness",
            "Nausea",
            "Difficulty to concentrate",
            "Mood swings",
            "Nervousness",
            "Dizziness",
            "Memory gap",
            "Anxiety",
            "Hallucination",
            "Feeling faint",
            "Unconsciousness",
            "Blackening of vision",
        ],
        "Foot" => &[
            "Cold feet",
            "Changes in the nails",
            "Tremor at rest",
            "Tremor on movement",
            "Leg cramps",
            "Tingling",
            "Discolorations of nails",
            "Foot pain",
            "Agitation",
            "Foot swelling",
            "Limited mobility of the ankle",
        ],
        "Finger" => &[
            "Changes in the nails",
            "Tingling",
            "Finger deformity",
            "Finger pain",
            "Finger swelling",
        ],
        "Forearm & elbow" => &["Hand pain", "Arm swelling", "Elbow pain"],
        "Genitals & groin" => &[
            "Increased urine quantity",
            "Frequent urination",
            "Burning sensation when urinating",
            "Dark urine",
            "Painful urination",
            "Testicular pain",
            "Swollen glands in the groin",
            "Swelling of the testicles",
            "Itching or burning in the genital area",
        ],
        "Hand & wrist" => &[
            "Hand swelling",
            "Hand pain",
            "Numbness of the hands",
            "Discoloration of nails",
            "Cold hands",
        ],
        "Hips & hip joint" => &[
            "Pain radiating to the leg",
            "Physical activity pain",
            "Pain in the bones",
            "Bone fracture",
            "Limited mobility of the leg",
            "Hip pain",
            "Hip deformity",
            "Leg pain",
        ],
        "Hair & scalp" => &[
            "Hair loss",
            "Bold area among hair on the head",
            "Flaking skin on the head",
            "Itching on head",
            "Scalp redness",
        ],
        "Lateral chest" => &["Side pain", "Swollen glands in the armpit"],
        "Legs general" => &[
            "Pain in the bones",
            "Bone fracture",
            "Muscle pain",
            "Stress-related leg pain",
            "Joint swelling",
            "Joint effusion",
            "Limited mobility of the leg",
            "Joint instability",
            "Joint redness",
            "Leg redness",
            "Muscle weakness",
            "Enlarged calf",
            "Numbness in the leg",
        ],
        "Lower leg & ankle" => &[
            "Leg ulcer",
            "Feeling of tension in the legs",
            "Leg cramps",
            "Ankle swelling",
            "Limited mobility of the ankle",
            "Ankle deformity",
        ],
        "Mouth & jaw" => &[
            "Lip swelling",
            "Increased thirst",
            "Cravings",
            "Reduced appetite",
            "Mouth ulcers",
            "Difficulty in swallowing",
            "Vomiting",
            "Hiccups",
            "Increased appetite",
            "Mouth pain",
            "Pain on swallowing",
            "Lockjaw",
            "Increased salivation",
            "Dry mouth",
            "Pain when chewing",
            "Facial swelling",
            "Itching in the mouth or throat",
            "Tongue swelling",
            "Tongue burning",
            "Toothache",
        ],
        "Nose, ears, throat, & neck" => &[
            "Hoarseness",
            "Hiccups",
            "Night cough",
            "Neck pain",
            "Swollen glands in the neck",
            "Pain on swallowing",
            "Neck stiffness",
            "Burning nose",
            "Fast, deepened breathing",
        ],
        "Pelvis" => &[
            "Dark urine",
            "Painful urination",
            "Genital warts",
            "Urge to urinate",
            "Decreased urine system",
            "Swelling in the genital area",
        ],
        "Skin" => &[
            "Skin lesion",
            "Skin wheal",
            "Skin redness",
            "Formation of blisters",
            "Non-healing skin wound",
            "Irregular mole",
            "Yellow colored skin",
            "Skin rash",
            "Crusting",
            "Sweating",
            "Cold sweats",
            "Hot flushes",
            "Pallor",
            "Dry skin",
            "Muscle pain",
            "Hardening of the skin",
            "Wound",
            "Flaking skin",
            "Moist skin",
            "Skin thickening",
            "Blue spot",
            "Scar",
        ],
        "Thigh & knee" => &[
            "Feeling of tension in the legs",
            "Leg cramps",
            "Knee pain",
            "Absence of a pulse",
            "Leg pain",
        ],
        "Toes" => &[
            "Joint pain",
            "Changes in the nails",
            "Tingling",
            "Discoloration of nails",
            "Joint redness",
            "Brittleness of nails",
            "Toe deformity",
            "Toe swelling",
        ],
        _ => &[],
    }
}

/// Look up a body region by its 0-based display index.
pub fn region_by_index(index: usize) -> Option<&'static str> {
    BODY_REGIONS.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_count() {
        assert_eq!(BODY_REGIONS.len(), 23);
    }

    #[test]
    fn test_every_region_has_symptoms() {
        for region in BODY_REGIONS {
            assert!(
                !symptoms_for(region).is_empty(),
                "region {} has no symptoms",
                region
            );
        }
    }

    #[test]
    fn test_unknown_region_is_empty() {
        assert!(symptoms_for("Gallbladder").is_empty());
        assert!(symptoms_for("").is_empty());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(!symptoms_for("Abdomen").is_empty());
        assert!(symptoms_for("abdomen").is_empty());
    }

    #[test]
    fn test_abdomen_symptom_order() {
        let symptoms = symptoms_for("Abdomen");
        assert_eq!(symptoms[0], "Abdominal pain");
        assert_eq!(symptoms[1], "Nausea");
        assert_eq!(symptoms.len(), 8);
    }

    #[test]
    fn test_symptoms_may_repeat_across_regions() {
        // "Diarrhea" is listed under both Abdomen and Buttocks & rectum.
        assert!(symptoms_for("Abdomen").contains(&"Diarrhea"));
        assert!(symptoms_for("Buttocks & rectum").contains(&"Diarrhea"));
    }

    #[test]
    fn test_region_by_index() {
        assert_eq!(region_by_index(0), Some("Abdomen"));
        assert_eq!(region_by_index(22), Some("Toes"));
        assert_eq!(region_by_index(23), None);
    }
}
