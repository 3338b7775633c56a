//! Look-alike character table and word canonicalization.

use crate::chars::{CharacterType, classify};

/// Look-alike character and the lower-case letter it stands in for.
pub static SIMILAR_CHARACTERS: [(char, char); 15] = [
    ('3', 'e'),
    ('4', 'a'),
    ('5', 's'),
    ('$', 's'),
    ('6', 'g'),
    ('7', 't'),
    ('8', 'b'),
    ('|', 'l'),
    ('9', 'g'),
    ('+', 't'),
    ('@', 'a'),
    ('0', 'o'),
    ('1', 'l'),
    ('2', 'z'),
    ('!', 'i'),
];

/// Returns the letter `c` visually resembles, if any.
pub fn look_alike(c: char) -> Option<char> {
    SIMILAR_CHARACTERS
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, letter)| *letter)
}

/// Which characters of a word are eligible for substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalizationMode {
    /// Substitute every character found in the table.
    Everything,
    /// Substitute only characters that are lower-case letters once lowered.
    ///
    /// No table key is a letter, so this mode only lowercases. Exact
    /// dictionary lookups rely on that.
    LettersOnly,
}

/// Lowercases `word` and replaces look-alike characters according to `mode`.
///
/// Blank input canonicalizes to an empty string.
pub fn canonicalize(word: &str, mode: CanonicalizationMode) -> String {
    if word.trim().is_empty() {
        return String::new();
    }

    word.to_lowercase()
        .chars()
        .map(|c| {
            let eligible = match mode {
                CanonicalizationMode::Everything => true,
                CanonicalizationMode::LettersOnly => {
                    classify(c) == Some(CharacterType::LowerLetter)
                }
            };
            if eligible { look_alike(c).unwrap_or(c) } else { c }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_no_letter_keys() {
        assert!(SIMILAR_CHARACTERS.iter().all(|(key, _)| !key.is_alphabetic()));
        assert!(
            SIMILAR_CHARACTERS
                .iter()
                .all(|(_, letter)| classify(*letter) == Some(CharacterType::LowerLetter))
        );
    }

    #[test]
    fn test_look_alike() {
        assert_eq!(look_alike('3'), Some('e'));
        assert_eq!(look_alike('@'), Some('a'));
        assert_eq!(look_alike('a'), None);
        assert_eq!(look_alike('#'), None);
    }

    #[test]
    fn test_canonicalize_everything() {
        assert_eq!(canonicalize("p@ssw0rd", CanonicalizationMode::Everything), "password");
        assert_eq!(canonicalize("P4$$W0RD", CanonicalizationMode::Everything), "password");
        assert_eq!(canonicalize("7r0ub|3", CanonicalizationMode::Everything), "trouble");
    }

    #[test]
    fn test_canonicalize_letters_only_leaves_digits() {
        assert_eq!(canonicalize("p4ssw0rd", CanonicalizationMode::LettersOnly), "p4ssw0rd");
        assert_eq!(canonicalize("PassWord", CanonicalizationMode::LettersOnly), "password");
        assert_eq!(canonicalize("p@ss!", CanonicalizationMode::LettersOnly), "p@ss!");
    }

    #[test]
    fn test_canonicalize_blank() {
        assert_eq!(canonicalize("", CanonicalizationMode::Everything), "");
        assert_eq!(canonicalize("   ", CanonicalizationMode::LettersOnly), "");
    }

    #[test]
    fn test_canonicalize_keeps_unmapped_symbols() {
        assert_eq!(canonicalize("a#b%c", CanonicalizationMode::Everything), "a#b%c");
    }
}
