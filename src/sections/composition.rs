//! Composition section - checks per-category minimum counts.

use super::{SectionInput, SectionResult};
use crate::chars::{CharacterCounts, CharacterType};

fn label(kind: CharacterType) -> &'static str {
    match kind {
        CharacterType::LowerLetter => "lowercase",
        CharacterType::UpperLetter => "uppercase",
        CharacterType::Numeric => "numbers",
        CharacterType::Special => "special characters",
    }
}

/// Checks if the password contains enough characters of each category.
///
/// # Returns
/// - `Some(reason)` listing every category below its minimum
/// - `None` if all minimums are met
pub fn composition_section(input: &SectionInput) -> SectionResult {
    let options = input.engine.options();
    let counts = CharacterCounts::of(input.password);

    let missing: Vec<String> = [
        (CharacterType::LowerLetter, options.required_lower),
        (CharacterType::UpperLetter, options.required_upper),
        (CharacterType::Numeric, options.required_numeric),
        (CharacterType::Special, options.required_special),
    ]
    .into_iter()
    .filter(|&(kind, required)| counts.get(kind) < required)
    .map(|(kind, required)| format!("{} {}", required, label(kind)))
    .collect();

    if !missing.is_empty() {
        return Some(format!("Requires at least: {}", missing.join(", ")));
    }
    None
}
