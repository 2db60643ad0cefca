//! Diagnosis description and remedy table
//!
//! Partial by design: diagnoses without an entry fall back to the fixed
//! placeholder pair at display time.

/// Fallback description for a diagnosis without detail text.
pub const DEFAULT_DESCRIPTION: &str = "No detailed information available.";

/// Fallback remedy note for a diagnosis without detail text.
pub const DEFAULT_REMEDY: &str = "Please consult a doctor.";

/// Description and remedy note for a diagnosis, if the table covers it.
pub fn details_for(diagnosis: &str) -> Option<(&'static str, &'static str)> {
    let pair = match diagnosis {
        "Gastritis" => (
            "Inflammation of the stomach lining, often triggered by spicy food, stress, or alcohol.",
            "Medicines: Antacids (Kremil-S, Gaviscon), Omeprazole (Losec).",
        ),
        "Food Poisoning" => (
            "Caused by eating contaminated food or water.",
            "Medicines: Oral Rehydration Salts (Hydrite), Loperamide (Diatabs), Erceflora probiotics.",
        ),
        "Ulcer" => (
            "Painful sores in the stomach caused by stress, infection, or excessive acid.",
            "Medicines: Omeprazole, Antacids, avoid spicy foods.",
        ),
        "Appendicitis" => (
            "Inflammation of the appendix, causing severe abdominal pain — requires medical attention.",
            "Immediate hospital care is recommended, not self-medication.",
        ),
        "Migraine" => (
            "Severe throbbing headache triggered by stress, lack of sleep, or certain foods.",
            "Medicines: Paracetamol (Biogesic), Ibuprofen (Medicol, Advil), Mefenamic Acid (Ponstan).",
        ),
        "Tension Headache" => (
            "Mild to moderate head pain caused by muscle tension or stress.",
            "Medicines: Paracetamol, Ibuprofen, rest and hydration.",
        ),
        "Sinusitis" => (
            "Inflammation of the sinuses due to infection or allergy.",
            "Medicines: Phenylephrine + Chlorphenamine (Neozep), steam inhalation, Lagundi syrup.",
        ),
        "Dehydration" => (
            "Body lacks water due to heat, diarrhea, or excessive sweating.",
            "Medicines: Oral Rehydration Salts (Hydrite), drink plenty of fluids.",
        ),
        "Flu" => (
            "Viral infection causing fever, cough, and fatigue.",
            "Medicines: Paracetamol, Lagundi syrup, Vitamin C, rest and fluids.",
        ),
        "Dengue" => (
            "Viral infection spread by mosquitoes, causes high fever and body pain.",
            "No specific medicine — drink water, rest, and consult a doctor immediately.",
        ),
        "Bronchitis" => (
            "Inflammation of the airways causing cough with phlegm.",
            "Medicines: Ambroxol (Mucosolvan), Carbocisteine (Solmux), rest and fluids.",
        ),
        "Asthma" => (
            "Narrowing of airways causing difficulty breathing, often triggered by allergens or pollution.",
            "Medicines: Salbutamol inhaler (Ventolin) if prescribed, avoid triggers.",
        ),
        "Common Cold" => (
            "Viral infection causing runny nose and sneezing.",
            "Medicines: Neozep, Bioflu, rest, fluids, and Vitamin C.",
        ),
        "Arthritis" => (
            "Joint inflammation causing pain and stiffness, triggered by overuse or aging.",
            "Medicines: Alaxan, Flanax (Naproxen), topical pain liniments.",
        ),
        "Rheumatism" => (
            "Joint or muscle pain due to inflammation or cold weather.",
            "Medicines: Mefenamic Acid, Ibuprofen, warm compress.",
        ),
        "Gout" => (
            "Build-up of uric acid in joints, triggered by red meat and alcohol.",
            "Medicines: Colchicine (for attacks), avoid high-purine foods.",
        ),
        "Lupus" => (
            "Autoimmune disorder causing joint pain and rashes.",
            "Requires medical diagnosis and prescription medication.",
        ),
        "Indigestion" => (
            "Discomfort in the upper abdomen due to overeating or acidic foods.",
            "Medicines: Kremil-S, Gaviscon, avoid spicy/oily meals.",
        ),
        "Vertigo" => (
            "Feeling of spinning due to inner ear issues or dehydration.",
            "Medicines: Meclizine (Bonamine), Betahistine (Serc).",
        ),
        "Conjunctivitis" => (
            "Also called pink eye; inflammation of the eye’s outer layer due to infection or allergy.",
            "Medicines: Eye drops (Eye Mo, Rohto), avoid rubbing eyes.",
        ),
        "Allergy" => (
            "Reaction to food, dust, or pollen causing sneezing or itchiness.",
            "Medicines: Cetirizine (Virlix, Allerkid), Loratadine (Claritin), Calamine lotion.",
        ),
        "Fungal Infection" => (
            "Caused by fungus on skin or genital area, often itchy.",
            "Medicines: Clotrimazole cream, Ketoconazole (Nizoral), maintain dryness.",
        ),
        "Tooth Infection" => (
            "Bacterial infection in a tooth causing severe pain and swelling.",
            "Medicines: Mefenamic Acid (Ponstan) for pain; see a dentist for antibiotics.",
        ),
        "Anemia" => (
            "Low red blood cell count often due to iron deficiency.",
            "Medicines: Iron supplements (Sangobion, Iberet), eat leafy greens and red meat.",
        ),
        _ => return None,
    };
    Some(pair)
}
