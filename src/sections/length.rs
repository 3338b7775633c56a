//! Length section - checks password length against the policy bounds.

use super::{SectionInput, SectionResult};

/// Checks if the password length is within the policy bounds.
///
/// # Returns
/// - `Some(reason)` if password is blank, too short or too long
/// - `None` if password has an acceptable length
pub fn length_section(input: &SectionInput) -> SectionResult {
    if input.engine.meets_length_standards(input.password) {
        return None;
    }
    let options = input.engine.options();
    Some(format!(
        "Password must be between {} and {} characters",
        options.minimum_length, options.maximum_length
    ))
}
