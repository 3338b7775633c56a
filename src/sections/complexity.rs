//! Complexity section - checks the complexity verdict against the policy level.

use super::{SectionInput, SectionResult};

/// Checks if the password reaches the policy's minimum complexity level.
///
/// # Returns
/// - `Some(reason)` naming the computed and required levels
/// - `None` if the level is reached
pub fn complexity_section(input: &SectionInput) -> SectionResult {
    let required = input.engine.options().minimum_complexity;
    let complexity = input.complexity();
    if !input.password.trim().is_empty() && complexity >= required {
        return None;
    }
    Some(format!("Password complexity is {}, {} required", complexity, required))
}
