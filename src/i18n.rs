//! Translation lookup for title fragments.
//!
//! A fixed vocabulary of category and kind keys; anything else passes
//! through unchanged so arbitrary context names render as-is.

use crate::config::Language;

/// (key, en, pl)
const VOCABULARY: &[(&str, &str, &str)] = &[
    ("glossary", "Glossary", "Słownik pojęć"),
    ("architecture", "Architecture", "Architektura"),
    ("service", "Services", "Serwisy"),
    ("event", "Events", "Zdarzenia"),
    ("entity", "Entities", "Encje"),
];

/// Localized display string for a vocabulary key, matched
/// case-insensitively. Unknown keys are returned unchanged.
pub fn translate(key: &str, language: Language) -> String {
    let lower = key.to_lowercase();
    for (entry, en, pl) in VOCABULARY {
        if *entry == lower {
            return match language {
                Language::En => (*en).to_string(),
                Language::Pl => (*pl).to_string(),
            };
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_vocabulary() {
        assert_eq!(translate("glossary", Language::En), "Glossary");
        assert_eq!(translate("event", Language::En), "Events");
    }

    #[test]
    fn polish_vocabulary() {
        assert_eq!(translate("glossary", Language::Pl), "Słownik pojęć");
        assert_eq!(translate("entity", Language::Pl), "Encje");
    }

    #[test]
    fn keys_match_case_insensitively() {
        assert_eq!(translate("Glossary", Language::En), "Glossary");
        assert_eq!(translate("SERVICE", Language::Pl), "Serwisy");
    }

    #[test]
    fn unknown_keys_pass_through() {
        assert_eq!(translate("Billing", Language::En), "Billing");
        assert_eq!(translate("Billing", Language::Pl), "Billing");
    }
}
