//! Password policy engine
//!
//! This library scores password complexity, checks passwords against a
//! configurable policy and generates random passwords that satisfy it.
//! Weak passwords are detected against a word dictionary, including
//! leetspeak variations such as `p@ssw0rd`.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable evaluation and channel delivery
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_DICTIONARY_PATH`: Custom path to the word dictionary
//!   (default: `./assets/dictionary.txt`)
//! - `PWD_POLICY_*`: Policy overrides read by [`PolicyOptions::from_env`]
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_policy::{PasswordEngine, PolicyOptions, WordList};
//! use secrecy::ExposeSecret;
//!
//! let dictionary = WordList::load().expect("Failed to load dictionary");
//! let options = PolicyOptions::from_env().expect("Invalid policy configuration");
//! let engine = PasswordEngine::with_options(dictionary, options);
//!
//! println!("Complexity: {}", engine.calculate_complexity("Tr0ub4dor&3"));
//! println!("Acceptable: {}", engine.meets_format_standards("Tr0ub4dor&3"));
//!
//! let outcome = engine.generate().expect("OS entropy unavailable");
//! if let Some(password) = outcome.into_compliant() {
//!     println!("Generated: {}", password.expose_secret());
//! }
//! ```

// Internal modules
mod chars;
mod dictionary;
mod engine;
mod evaluator;
mod generator;
mod matcher;
mod options;
mod sections;
mod similarity;

// Public API
pub use chars::{CharacterCounts, CharacterType, classify};
pub use dictionary::{DictionaryError, WordDictionary, WordList, dictionary_path};
pub use engine::PasswordEngine;
pub use evaluator::{CLOSE_VARIATION_RATIO, PasswordEvaluation};
pub use generator::{GenerateError, GenerationOutcome, MAX_ATTEMPTS};
pub use matcher::{exists_verbatim, is_close_variation};
pub use options::{ComplexityLevel, MAX_PASSWORD_LENGTH, OptionsError, PolicyOptions, RandomSource};
pub use similarity::{CanonicalizationMode, SIMILAR_CHARACTERS, canonicalize, look_alike};
