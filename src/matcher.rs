//! Dictionary matching over canonicalized passwords.

use crate::dictionary::WordDictionary;
use crate::similarity::{CanonicalizationMode, canonicalize};

/// Returns `true` if the lowercased password is itself a dictionary word.
///
/// Look-alike characters are left untouched, so `p4ssw0rd` does not match
/// `password` here.
pub fn exists_verbatim(dictionary: &dyn WordDictionary, password: &str) -> bool {
    let canonical = canonicalize(password, CanonicalizationMode::LettersOnly);
    !canonical.is_empty() && dictionary.contains_word(&canonical)
}

/// Returns `true` if the fully canonicalized password contains a dictionary
/// word covering at least `minimum_ratio` of its length.
///
/// Windows are tried longest first, left to right, stopping at the first hit.
pub fn is_close_variation(
    dictionary: &dyn WordDictionary,
    password: &str,
    minimum_ratio: f64,
) -> bool {
    let canonical: Vec<char> = canonicalize(password, CanonicalizationMode::Everything)
        .chars()
        .collect();
    let len = canonical.len();
    if len == 0 {
        return false;
    }

    let min_len = ((minimum_ratio * len as f64).floor() as usize).max(1);

    for window in (min_len..=len).rev() {
        for start in 0..=(len - window) {
            if start + min_len >= len {
                break;
            }
            let candidate: String = canonical[start..start + window].iter().collect();
            if exists_verbatim(dictionary, &candidate) {
                return true;
            }
        }
    }

    false
}
