//! Random password generation under a policy.

use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, SeedableRng, TryRngCore};
use secrecy::SecretString;
use thiserror::Error;

use crate::PasswordEngine;
use crate::chars::{ALPHANUMERIC, CharacterType};
use crate::options::{MAX_PASSWORD_LENGTH, PolicyOptions, RandomSource};

/// Number of candidates built before giving up.
pub const MAX_ATTEMPTS: usize = 4;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to read OS entropy: {0}")]
    Entropy(String),
    #[error("Requested length {length} exceeds the {limit} character limit")]
    TooLong { length: usize, limit: usize },
}

/// Result of a generation call.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// The password satisfies the requested policy.
    Generated(SecretString),
    /// Every attempt failed validation; holds the last candidate.
    ExhaustedRetries(SecretString),
}

impl GenerationOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, GenerationOutcome::Generated(_))
    }

    /// The candidate, compliant or not.
    pub fn password(&self) -> &SecretString {
        match self {
            GenerationOutcome::Generated(password)
            | GenerationOutcome::ExhaustedRetries(password) => password,
        }
    }

    /// Returns the password only if it satisfies the policy.
    pub fn into_compliant(self) -> Option<SecretString> {
        match self {
            GenerationOutcome::Generated(password) => Some(password),
            GenerationOutcome::ExhaustedRetries(_) => None,
        }
    }
}

impl PasswordEngine {
    /// Generates a password satisfying the engine's policy.
    pub fn generate(&self) -> Result<GenerationOutcome, GenerateError> {
        self.generate_with(self.options())
    }

    /// Generates a password satisfying explicit requirements.
    ///
    /// Length bounds are widened to fit the per-category minimums, but the
    /// candidate is validated against `requirements` as given. Up to
    /// [`MAX_ATTEMPTS`] candidates are built.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::TooLong`] if the widened maximum length is
    /// above [`MAX_PASSWORD_LENGTH`], and [`GenerateError::Entropy`] if the
    /// OS entropy source fails while seeding an attempt.
    pub fn generate_with(
        &self,
        requirements: &PolicyOptions,
    ) -> Result<GenerationOutcome, GenerateError> {
        let (min_length, max_length) = requirements.effective_bounds();
        if max_length > MAX_PASSWORD_LENGTH {
            return Err(GenerateError::TooLong {
                length: max_length,
                limit: MAX_PASSWORD_LENGTH,
            });
        }
        let mut candidate = String::new();

        for _attempt in 1..=MAX_ATTEMPTS {
            candidate = match requirements.random_source {
                RandomSource::Hybrid => {
                    let mut rng = SmallRng::seed_from_u64(os_seed()?);
                    build_candidate(&mut rng, requirements, min_length, max_length)
                }
                RandomSource::Secure => {
                    build_candidate(&mut rand::rng(), requirements, min_length, max_length)
                }
            };

            if self.meets_format_standards_with(&candidate, requirements) {
                return Ok(GenerationOutcome::Generated(SecretString::new(
                    candidate.into_boxed_str(),
                )));
            }

            #[cfg(feature = "tracing")]
            tracing::debug!("generated candidate rejected on attempt {}", _attempt);
        }

        #[cfg(feature = "tracing")]
        tracing::warn!("password generation exhausted {} attempts", MAX_ATTEMPTS);

        Ok(GenerationOutcome::ExhaustedRetries(SecretString::new(
            candidate.into_boxed_str(),
        )))
    }
}

/// Reads 4 bytes from the OS and folds them into a non-negative 31-bit seed.
fn os_seed() -> Result<u64, GenerateError> {
    let mut bytes = [0u8; 4];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| GenerateError::Entropy(e.to_string()))?;
    let seed = u32::from_be_bytes([bytes[0] & 0x7f, bytes[1], bytes[2], bytes[3]]);
    Ok(u64::from(seed))
}

fn build_candidate<R: Rng>(
    rng: &mut R,
    requirements: &PolicyOptions,
    min_length: usize,
    max_length: usize,
) -> String {
    let length = rng.random_range(min_length..=max_length);
    let mut slots: Vec<Option<char>> = vec![None; length];

    let required = [
        (CharacterType::LowerLetter, requirements.required_lower),
        (CharacterType::UpperLetter, requirements.required_upper),
        (CharacterType::Numeric, requirements.required_numeric),
        (CharacterType::Special, requirements.required_special),
    ];

    for (kind, count) in required {
        for _ in 0..count {
            if let Some(index) = available_position(&slots, rng) {
                slots[index] = Some(random_character(kind.alphabet(), rng));
            }
        }
    }

    // specials only where required
    for slot in slots.iter_mut().filter(|slot| slot.is_none()) {
        *slot = Some(random_character(ALPHANUMERIC, rng));
    }

    slots.into_iter().flatten().collect()
}

/// Picks a random slot; if taken, scans forward (wrapping) to the next empty one.
fn available_position<R: Rng>(slots: &[Option<char>], rng: &mut R) -> Option<usize> {
    if slots.is_empty() {
        return None;
    }
    let start = rng.random_range(0..slots.len());
    (0..slots.len())
        .map(|offset| (start + offset) % slots.len())
        .find(|&index| slots[index].is_none())
}

fn random_character<R: Rng>(alphabet: &str, rng: &mut R) -> char {
    let bytes = alphabet.as_bytes();
    char::from(bytes[rng.random_range(0..bytes.len())])
}
