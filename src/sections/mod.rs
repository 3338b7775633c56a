//! Password evaluation sections
//!
//! Each section checks one part of the engine's policy.

use std::cell::OnceCell;

use crate::PasswordEngine;
use crate::options::ComplexityLevel;

mod complexity;
mod composition;
mod length;

pub use complexity::complexity_section;
pub use composition::composition_section;
pub use length::length_section;

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;

/// Password under evaluation, shared by every section.
pub struct SectionInput<'a> {
    pub engine: &'a PasswordEngine,
    pub password: &'a str,
    complexity: OnceCell<ComplexityLevel>,
}

impl<'a> SectionInput<'a> {
    pub fn new(engine: &'a PasswordEngine, password: &'a str) -> Self {
        Self {
            engine,
            password,
            complexity: OnceCell::new(),
        }
    }

    /// Complexity level, computed on first use.
    pub fn complexity(&self) -> ComplexityLevel {
        *self
            .complexity
            .get_or_init(|| self.engine.calculate_complexity(self.password))
    }
}
