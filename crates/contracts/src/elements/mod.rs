//! Chemical elements offered when adding a parameter.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// An element option for the add-parameter select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalElement {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl ChemicalElement {
    pub fn new(label: &str, value: &str, formula: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            formula: Some(formula.to_string()),
        }
    }
}

/// Static list used whenever the element lookup service is unavailable.
pub static FALLBACK_ELEMENTS: Lazy<Vec<ChemicalElement>> = Lazy::new(|| {
    [
        ("Hydrogen (H)", "H"),
        ("Helium (He)", "He"),
        ("Lithium (Li)", "Li"),
        ("Beryllium (Be)", "Be"),
        ("Boron (B)", "B"),
        ("Carbon (C)", "C"),
        ("Nitrogen (N)", "N"),
        ("Oxygen (O)", "O"),
        ("Fluorine (F)", "F"),
        ("Neon (Ne)", "Ne"),
        ("Sodium (Na)", "Na"),
        ("Magnesium (Mg)", "Mg"),
        ("Aluminum (Al)", "Al"),
        ("Silicon (Si)", "Si"),
        ("Phosphorus (P)", "P"),
        ("Sulfur (S)", "S"),
        ("Chlorine (Cl)", "Cl"),
        ("Argon (Ar)", "Ar"),
        ("Potassium (K)", "K"),
        ("Calcium (Ca)", "Ca"),
        ("Iron (Fe)", "Fe"),
        ("Copper (Cu)", "Cu"),
        ("Zinc (Zn)", "Zn"),
        ("Bromine (Br)", "Br"),
        ("Silver (Ag)", "Ag"),
        ("Gold (Au)", "Au"),
        ("Mercury (Hg)", "Hg"),
        ("Lead (Pb)", "Pb"),
    ]
    .into_iter()
    .map(|(label, symbol)| ChemicalElement::new(label, symbol, symbol))
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_list_is_complete_and_unique() {
        assert_eq!(FALLBACK_ELEMENTS.len(), 28);
        let mut symbols: Vec<&str> = FALLBACK_ELEMENTS.iter().map(|e| e.value.as_str()).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), 28);
    }

    #[test]
    fn formula_is_omitted_from_json_when_absent() {
        let element = ChemicalElement {
            label: "Unknown".to_string(),
            value: "X".to_string(),
            formula: None,
        };
        let json = serde_json::to_string(&element).unwrap();
        assert!(!json.contains("formula"));
    }
}
