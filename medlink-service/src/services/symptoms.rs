//! Keyword symptom checker.
//!
//! Matching is plain substring containment over lowercased input, walked in
//! table order. There is no ranking, stemming or negation handling: "no fever"
//! still matches "fever".

/// Conditions in match order. Order decides which three survive truncation.
pub const CONDITIONS: &[(&str, &[&str])] = &[
    ("Viral Fever", &["fever", "chills", "body ache", "fatigue"]),
    (
        "COVID-19",
        &[
            "loss of taste",
            "loss of smell",
            "dry cough",
            "shortness of breath",
        ],
    ),
    (
        "Typhoid",
        &["high fever", "abdominal pain", "constipation", "rose spots"],
    ),
    ("Common Cold", &["runny nose", "sneezing", "sore throat"]),
    ("Migraine", &["headache", "throbbing", "sensitivity to light"]),
];

pub const MAX_CAUSES: usize = 3;

/// Returned when nothing in the table matches.
pub const FALLBACK_CAUSES: [&str; 2] = ["General Viral Infection", "Dehydration"];

/// Up to [`MAX_CAUSES`] candidate conditions for free-text symptoms.
pub fn analyze(text: &str) -> Vec<&'static str> {
    let text = text.to_lowercase();

    let matches: Vec<&'static str> = CONDITIONS
        .iter()
        .filter(|(_, phrases)| phrases.iter().any(|phrase| text.contains(phrase)))
        .map(|(condition, _)| *condition)
        .take(MAX_CAUSES)
        .collect();

    if matches.is_empty() {
        FALLBACK_CAUSES.to_vec()
    } else {
        matches
    }
}
