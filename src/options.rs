//! Policy configuration.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MIN_LENGTH_ENV: &str = "PWD_POLICY_MIN_LENGTH";
pub const MAX_LENGTH_ENV: &str = "PWD_POLICY_MAX_LENGTH";
pub const MIN_COMPLEXITY_ENV: &str = "PWD_POLICY_MIN_COMPLEXITY";
pub const REQUIRED_LOWER_ENV: &str = "PWD_POLICY_REQUIRED_LOWER";
pub const REQUIRED_UPPER_ENV: &str = "PWD_POLICY_REQUIRED_UPPER";
pub const REQUIRED_NUMERIC_ENV: &str = "PWD_POLICY_REQUIRED_NUMERIC";
pub const REQUIRED_SPECIAL_ENV: &str = "PWD_POLICY_REQUIRED_SPECIAL";
pub const RANDOM_SOURCE_ENV: &str = "PWD_POLICY_RANDOM_SOURCE";

/// Upper bound for any configured length or character count.
pub const MAX_PASSWORD_LENGTH: usize = 4096;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error("Required character counts total {total}, above the {limit} character limit")]
    RequirementsTooLong { total: usize, limit: usize },
}

/// Ordered password complexity verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ComplexityLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComplexityLevel::None => "none",
            ComplexityLevel::Low => "low",
            ComplexityLevel::Medium => "medium",
            ComplexityLevel::High => "high",
        };
        f.write_str(name)
    }
}

impl FromStr for ComplexityLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(ComplexityLevel::None),
            "low" => Ok(ComplexityLevel::Low),
            "medium" => Ok(ComplexityLevel::Medium),
            "high" => Ok(ComplexityLevel::High),
            _ => Err(()),
        }
    }
}

/// Randomness used by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomSource {
    /// Each attempt seeds a fast, non-cryptographic PRNG with 31 bits read
    /// from the OS entropy source.
    ///
    /// Generated passwords carry at most 31 bits of unpredictability.
    #[default]
    Hybrid,
    /// Every choice is drawn from the thread-local CSPRNG.
    Secure,
}

impl FromStr for RandomSource {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hybrid" => Ok(RandomSource::Hybrid),
            "secure" => Ok(RandomSource::Secure),
            _ => Err(()),
        }
    }
}

/// Password requirements shared by scoring and generation.
///
/// Also used to pass explicit overrides to the `_with` methods of
/// [`PasswordEngine`](crate::PasswordEngine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyOptions {
    pub minimum_length: usize,
    pub maximum_length: usize,
    pub minimum_complexity: ComplexityLevel,
    pub required_lower: usize,
    pub required_upper: usize,
    pub required_numeric: usize,
    pub required_special: usize,
    pub random_source: RandomSource,
}

impl Default for PolicyOptions {
    fn default() -> Self {
        Self {
            minimum_length: 6,
            maximum_length: 15,
            minimum_complexity: ComplexityLevel::Medium,
            required_lower: 1,
            required_upper: 1,
            required_numeric: 1,
            required_special: 0,
            random_source: RandomSource::Hybrid,
        }
    }
}

impl PolicyOptions {
    /// Builds options from `PWD_POLICY_*` environment variables.
    ///
    /// Unset variables keep their default value. Lengths and counts above
    /// [`MAX_PASSWORD_LENGTH`] are rejected.
    pub fn from_env() -> Result<Self, OptionsError> {
        let defaults = Self::default();
        let options = Self {
            minimum_length: env_length_or(MIN_LENGTH_ENV, defaults.minimum_length)?,
            maximum_length: env_length_or(MAX_LENGTH_ENV, defaults.maximum_length)?,
            minimum_complexity: env_or(MIN_COMPLEXITY_ENV, defaults.minimum_complexity)?,
            required_lower: env_length_or(REQUIRED_LOWER_ENV, defaults.required_lower)?,
            required_upper: env_length_or(REQUIRED_UPPER_ENV, defaults.required_upper)?,
            required_numeric: env_length_or(REQUIRED_NUMERIC_ENV, defaults.required_numeric)?,
            required_special: env_length_or(REQUIRED_SPECIAL_ENV, defaults.required_special)?,
            random_source: env_or(RANDOM_SOURCE_ENV, defaults.random_source)?,
        };

        let total = options.required_total();
        if total > MAX_PASSWORD_LENGTH {
            return Err(OptionsError::RequirementsTooLong {
                total,
                limit: MAX_PASSWORD_LENGTH,
            });
        }
        Ok(options)
    }

    /// Sum of the per-category minimum counts, saturating at `usize::MAX`.
    pub fn required_total(&self) -> usize {
        self.required_lower
            .saturating_add(self.required_upper)
            .saturating_add(self.required_numeric)
            .saturating_add(self.required_special)
    }

    /// Length bounds widened so that `max >= min >= required_total()`.
    pub fn effective_bounds(&self) -> (usize, usize) {
        let min = self.minimum_length.max(self.required_total());
        let max = self.maximum_length.max(min);
        (min, max)
    }
}

fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, OptionsError> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| OptionsError::InvalidValue { key, value }),
        Err(_) => Ok(default),
    }
}

fn env_length_or(key: &'static str, default: usize) -> Result<usize, OptionsError> {
    let length = env_or(key, default)?;
    if length > MAX_PASSWORD_LENGTH {
        return Err(OptionsError::InvalidValue {
            key,
            value: length.to_string(),
        });
    }
    Ok(length)
}
