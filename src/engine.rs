//! Password engine: owns the policy and the word dictionary.

use crate::dictionary::WordDictionary;
use crate::options::PolicyOptions;

/// Evaluates and generates passwords against a fixed policy.
///
/// Both the policy and the dictionary are read-only after construction, so a
/// single engine can be shared across threads behind an `Arc`.
pub struct PasswordEngine {
    dictionary: Box<dyn WordDictionary>,
    options: PolicyOptions,
}

impl PasswordEngine {
    /// Creates an engine with the default policy.
    pub fn new(dictionary: impl WordDictionary + 'static) -> Self {
        Self::with_options(dictionary, PolicyOptions::default())
    }

    pub fn with_options(dictionary: impl WordDictionary + 'static, options: PolicyOptions) -> Self {
        Self {
            dictionary: Box::new(dictionary),
            options,
        }
    }

    pub fn options(&self) -> &PolicyOptions {
        &self.options
    }

    pub(crate) fn dictionary(&self) -> &dyn WordDictionary {
        self.dictionary.as_ref()
    }
}

impl std::fmt::Debug for PasswordEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordEngine")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
