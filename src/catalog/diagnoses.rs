//! Symptom to candidate-diagnosis table
//!
//! Drives the diagnosis resolver. Coverage is deliberately partial: a symptom
//! with no entry simply contributes no candidates.

/// Candidate diagnoses for a symptom, in table-declared order.
///
/// An unmapped symptom yields an empty slice.
pub fn diagnoses_for(symptom: &str) -> &'static [&'static str] {
    match symptom {
        "Abdominal pain" => &["Gastritis", "Food Poisoning", "Ulcer", "Appendicitis"],
        "Nausea" => &[
            "Motion Sickness",
            "Gastroenteritis",
            "Pregnancy",
            "Food Poisoning",
        ],
        "Heartburn" => &["Acid Reflux (GERD)", "Gastritis", "Hiatal Hernia"],
        "Bloated" => &[
            "Indigestion",
            "Irritable Bowel Syndrome",
            "Lactose Intolerance",
        ],
        "Diarrhea" => &["Infection", "Food Poisoning", "Irritable Bowel Syndrome"],
        "Vomiting" => &["Gastroenteritis", "Migraine", "Food Poisoning", "Pregnancy"],
        "Stomach burning" => &["Acid Reflux", "Gastritis", "Ulcer"],
        "Reduced Appetite" => &["Depression", "Infection", "Stomach Disorder"],

        "Chest pain" => &[
            "Heart Attack (Myocardial Infarction)",
            "Angina",
            "Pneumonia",
            "Muscle Strain",
        ],
        "Cough" => &["Common Cold", "Flu", "Bronchitis", "Asthma"],
        "Palpitations" => &["Anxiety", "Arrhythmia", "Thyroid Disorder"],
        "Breathing related pains" => &["Pleurisy", "Pneumonia", "Pulmonary Embolism"],
        "Lump in the breast" => &["Fibroadenoma", "Breast Cyst", "Breast Cancer"],

        "Eye redness" => &["Conjunctivitis", "Allergy", "Eye Strain"],
        "Blurred vision" => &["Refractive Error", "Diabetes", "Migraine"],
        "Eye pain" => &["Glaucoma", "Eye Infection", "Corneal Injury"],
        "Burning eyes" => &["Allergic Reaction", "Dry Eye Syndrome"],
        "Eyelid Swelling" => &["Stye", "Blepharitis", "Allergy"],

        "Headache" => &["Migraine", "Tension Headache", "Sinusitis", "Dehydration"],
        "Dizziness" => &["Vertigo", "Low Blood Pressure", "Anemia"],
        "Fever" => &["Infection", "Flu", "Dengue", "Viral Illness"],
        "Tiredness" => &["Anemia", "Lack of Sleep", "Thyroid Disorder", "Stress"],

        "Back pain" => &["Muscle Strain", "Slipped Disc", "Scoliosis", "Kidney Stone"],
        "Pain radiating to the leg" => &["Sciatica", "Herniated Disc"],
        "Lower back pain" => &["Muscle Strain", "Arthritis", "Kidney Issue"],

        "Joint pain" => &["Arthritis", "Rheumatism", "Gout", "Lupus"],
        "Leg cramps" => &["Dehydration", "Poor Circulation", "Electrolyte Imbalance"],
        "Muscle pain" => &["Overuse", "Injury", "Inflammation"],
        "Numbness in the leg" => &["Sciatica", "Peripheral Neuropathy", "Pinched Nerve"],
        "Swelling" => &["Injury", "Infection", "Venous Insufficiency"],

        "Painful urination" => &["Urinary Tract Infection", "Kidney Infection", "STD"],
        "Frequent urination" => &["Diabetes", "UTI", "Overactive Bladder"],
        "Dark urine" => &["Dehydration", "Liver Disease", "Hematuria"],
        "Testicular pain" => &["Epididymitis", "Testicular Torsion", "Hernia"],
        "Itching in genital area" => &["Fungal Infection", "Allergy", "STD"],

        "Toothache" => &["Cavity", "Gingivitis", "Tooth Infection"],
        "Dry mouth" => &["Dehydration", "Medication Side Effect", "Diabetes"],
        "Mouth ulcers" => &["Canker Sores", "Vitamin Deficiency", "Viral Infection"],

        "Skin rash" => &[
            "Allergic Reaction",
            "Eczema",
            "Chickenpox",
            "Fungal Infection",
        ],
        "Itching" => &["Allergy", "Scabies", "Fungal Infection"],
        "Yellow colored skin" => &["Jaundice", "Liver Disorder"],
        "Dry skin" => &["Eczema", "Dehydration"],
        "Formation of blisters" => &["Burns", "Allergic Reaction", "Chickenpox"],

        "Joint swelling" => &["Arthritis", "Injury", "Infection"],
        "Muscle stiffness" => &["Parkinson’s Disease", "Muscle Strain"],
        "Cold hands" => &["Poor Circulation", "Anemia", "Raynaud’s Disease"],
        "Cold feet" => &["Peripheral Artery Disease", "Diabetes", "Anemia"],

        _ => &[],
    }
}
