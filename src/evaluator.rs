//! Password evaluator - complexity scoring and policy compliance checks.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::chars::{CharacterCounts, spans};
use crate::matcher::{exists_verbatim, is_close_variation};
use crate::options::{ComplexityLevel, PolicyOptions};
use crate::sections::{
    SectionInput, SectionResult, complexity_section, composition_section, length_section,
};
use crate::PasswordEngine;

/// Share of the canonicalized password a dictionary word must cover to
/// count as a close variation.
pub const CLOSE_VARIATION_RATIO: f64 = 0.6;

/// Length floor for the medium and high levels.
const STRONG_LENGTH_FLOOR: usize = 7;

/// Length floor for the low level.
const WEAK_LENGTH_FLOOR: usize = 6;

/// Result of [`PasswordEngine::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    /// Computed level, `None` if the evaluation was cancelled.
    pub complexity: Option<ComplexityLevel>,
    /// One entry per failed policy section.
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    pub fn is_cancelled(&self) -> bool {
        self.complexity.is_none()
    }

    /// `true` when every section passed.
    pub fn is_acceptable(&self) -> bool {
        !self.is_cancelled() && self.reasons.is_empty()
    }
}

impl PasswordEngine {
    /// Scores the password with an ordered rule cascade; the first
    /// satisfied rule wins.
    ///
    /// Blank passwords score [`ComplexityLevel::None`].
    pub fn calculate_complexity(&self, password: &str) -> ComplexityLevel {
        if password.trim().is_empty() {
            return ComplexityLevel::None;
        }

        let length = password.chars().count();
        let strong_length = self.options().minimum_length.max(STRONG_LENGTH_FLOOR);
        let weak_length = self.options().minimum_length.max(WEAK_LENGTH_FLOOR);
        let dictionary = self.dictionary();

        let rules: [(ComplexityLevel, &dyn Fn() -> bool); 3] = [
            (ComplexityLevel::High, &|| {
                length >= strong_length
                    && spans(password, 3)
                    && !is_close_variation(dictionary, password, CLOSE_VARIATION_RATIO)
            }),
            (ComplexityLevel::Medium, &|| {
                length >= strong_length
                    && spans(password, 2)
                    && !exists_verbatim(dictionary, password)
            }),
            (ComplexityLevel::Low, &|| length >= weak_length),
        ];

        rules
            .iter()
            .find(|(_, rule)| rule())
            .map(|(level, _)| *level)
            .unwrap_or(ComplexityLevel::None)
    }

    /// Checks the password length against the policy bounds.
    pub fn meets_length_standards(&self, password: &str) -> bool {
        let options = self.options();
        self.meets_length_standards_with(
            password,
            options.minimum_length,
            options.maximum_length,
        )
    }

    /// Checks that the password is not blank and `minimum <= length <= maximum`.
    pub fn meets_length_standards_with(
        &self,
        password: &str,
        minimum: usize,
        maximum: usize,
    ) -> bool {
        let length = password.chars().count();
        !password.trim().is_empty() && length >= minimum && length <= maximum
    }

    /// Checks the password against the policy's minimum complexity level.
    pub fn meets_complexity_standards(&self, password: &str) -> bool {
        self.meets_complexity_standards_with(password, self.options().minimum_complexity)
    }

    pub fn meets_complexity_standards_with(
        &self,
        password: &str,
        required: ComplexityLevel,
    ) -> bool {
        !password.trim().is_empty() && self.calculate_complexity(password) >= required
    }

    /// Checks every policy requirement: length, per-category minimums and
    /// complexity.
    pub fn meets_format_standards(&self, password: &str) -> bool {
        self.meets_format_standards_with(password, self.options())
    }

    /// Same as [`meets_format_standards`](Self::meets_format_standards) with
    /// explicit requirements.
    ///
    /// The complexity cascade keeps using the engine's own length floor.
    pub fn meets_format_standards_with(
        &self,
        password: &str,
        requirements: &PolicyOptions,
    ) -> bool {
        let counts = CharacterCounts::of(password);

        self.meets_length_standards_with(
            password,
            requirements.minimum_length,
            requirements.maximum_length,
        ) && counts.lower >= requirements.required_lower
            && counts.upper >= requirements.required_upper
            && counts.numeric >= requirements.required_numeric
            && counts.special >= requirements.required_special
            && self.meets_complexity_standards_with(password, requirements.minimum_complexity)
    }

    /// Evaluates the password against the policy and explains each failure.
    ///
    /// # Arguments
    /// * `password` - The password to evaluate
    /// * `token` - Optional cancellation token (async feature only)
    pub fn evaluate(
        &self,
        password: &SecretString,
        #[cfg(feature = "async")] token: Option<CancellationToken>,
    ) -> PasswordEvaluation {
        let input = SectionInput::new(self, password.expose_secret());
        let mut reasons = Vec::new();

        // Orchestrator: execute sections in sequence
        let sections: [(&str, fn(&SectionInput) -> SectionResult); 3] = [
            ("length", length_section),
            ("composition", composition_section),
            ("complexity", complexity_section),
        ];

        for (_section_name, section_fn) in sections {
            // Check cancellation before each section (async only)
            #[cfg(feature = "async")]
            {
                if token.as_ref().is_some_and(|t| t.is_cancelled()) {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("evaluation cancelled before section: {}", _section_name);
                    reasons.push("Evaluation cancelled".to_string());
                    return PasswordEvaluation {
                        complexity: None,
                        reasons,
                    };
                }
            }

            if let Some(reason) = section_fn(&input) {
                reasons.push(reason);
            }
        }

        PasswordEvaluation {
            complexity: Some(input.complexity()),
            reasons,
        }
    }

    /// Async version that sends the evaluation result via channel.
    #[cfg(feature = "async")]
    pub async fn evaluate_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<PasswordEvaluation>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation is about to start...");

        let evaluation = self.evaluate(password, Some(token));

        if let Err(_e) = tx.send(evaluation).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password evaluation result: {}", _e);
        }
    }
}
