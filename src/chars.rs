//! Character classification and the fixed generation alphabets.

/// Lower-case characters available to the generator.
pub const LOWERCASE: &str = "qwertyuiopasdfghjklzxcvbnm";

/// Upper-case characters available to the generator.
pub const UPPERCASE: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

/// Numeric characters available to the generator.
pub const NUMERIC: &str = "0123456789";

/// Special characters available to the generator.
pub const SPECIAL: &str = "!@#$%^&*?";

/// Filler alphabet: lower + upper + numeric, special characters excluded.
pub const ALPHANUMERIC: &str =
    "qwertyuiopasdfghjklzxcvbnmQWERTYUIOPASDFGHJKLZXCVBNM0123456789";

/// Category a password character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterType {
    UpperLetter,
    LowerLetter,
    Numeric,
    /// Punctuation, separators, symbols, whitespace: anything that is not
    /// alphanumeric.
    Special,
}

impl CharacterType {
    pub const ALL: [CharacterType; 4] = [
        CharacterType::UpperLetter,
        CharacterType::LowerLetter,
        CharacterType::Numeric,
        CharacterType::Special,
    ];

    /// Generation alphabet for this category.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterType::UpperLetter => UPPERCASE,
            CharacterType::LowerLetter => LOWERCASE,
            CharacterType::Numeric => NUMERIC,
            CharacterType::Special => SPECIAL,
        }
    }
}

/// Classifies a single character.
///
/// Uncased letters (CJK, Arabic, Hebrew, ...) are alphanumeric without being
/// upper, lower or numeric and belong to no category: `None`.
pub fn classify(c: char) -> Option<CharacterType> {
    if c.is_uppercase() {
        Some(CharacterType::UpperLetter)
    } else if c.is_lowercase() {
        Some(CharacterType::LowerLetter)
    } else if c.is_numeric() {
        Some(CharacterType::Numeric)
    } else if !c.is_alphanumeric() {
        Some(CharacterType::Special)
    } else {
        None
    }
}

/// Per-category character counts of a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterCounts {
    pub lower: usize,
    pub upper: usize,
    pub numeric: usize,
    pub special: usize,
}

impl CharacterCounts {
    pub fn of(password: &str) -> Self {
        password
            .chars()
            .fold(CharacterCounts::default(), |mut counts, c| {
                match classify(c) {
                    Some(CharacterType::LowerLetter) => counts.lower += 1,
                    Some(CharacterType::UpperLetter) => counts.upper += 1,
                    Some(CharacterType::Numeric) => counts.numeric += 1,
                    Some(CharacterType::Special) => counts.special += 1,
                    None => {}
                }
                counts
            })
    }

    pub fn get(&self, kind: CharacterType) -> usize {
        match kind {
            CharacterType::LowerLetter => self.lower,
            CharacterType::UpperLetter => self.upper,
            CharacterType::Numeric => self.numeric,
            CharacterType::Special => self.special,
        }
    }

    /// Number of distinct categories present at least once.
    pub fn span(&self) -> usize {
        CharacterType::ALL
            .iter()
            .filter(|&&kind| self.get(kind) > 0)
            .count()
    }
}

/// Returns `true` if the password's characters cover at least `minimum`
/// distinct categories.
pub fn spans(password: &str, minimum: usize) -> bool {
    CharacterCounts::of(password).span() >= minimum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ascii() {
        assert_eq!(classify('A'), Some(CharacterType::UpperLetter));
        assert_eq!(classify('z'), Some(CharacterType::LowerLetter));
        assert_eq!(classify('7'), Some(CharacterType::Numeric));
        assert_eq!(classify('@'), Some(CharacterType::Special));
        assert_eq!(classify(' '), Some(CharacterType::Special));
        assert_eq!(classify('+'), Some(CharacterType::Special));
    }

    #[test]
    fn test_classify_unicode() {
        assert_eq!(classify('É'), Some(CharacterType::UpperLetter));
        assert_eq!(classify('ß'), Some(CharacterType::LowerLetter));
        assert_eq!(classify('€'), Some(CharacterType::Special));
        assert_eq!(classify('\u{00A0}'), Some(CharacterType::Special));
    }

    #[test]
    fn test_classify_uncased_letters_have_no_category() {
        assert_eq!(classify('中'), None);
        assert_eq!(classify('ش'), None);
        assert_eq!(classify('א'), None);

        let counts = CharacterCounts::of("abcdefg中");
        assert_eq!(counts, CharacterCounts { lower: 7, upper: 0, numeric: 0, special: 0 });
        assert!(!spans("abcdefg中", 2));
    }

    #[test]
    fn test_classify_is_pure() {
        for c in "aZ9!€ é".chars() {
            assert_eq!(classify(c), classify(c));
        }
    }

    #[test]
    fn test_alphabets_classify_as_their_category() {
        for kind in CharacterType::ALL {
            assert!(kind.alphabet().chars().all(|c| classify(c) == Some(kind)));
        }
    }

    #[test]
    fn test_alphanumeric_is_union_without_special() {
        assert_eq!(ALPHANUMERIC, format!("{}{}{}", LOWERCASE, UPPERCASE, NUMERIC));
        assert!(!ALPHANUMERIC.chars().any(|c| SPECIAL.contains(c)));
    }

    #[test]
    fn test_counts_and_span() {
        let counts = CharacterCounts::of("aaBB12!");
        assert_eq!(
            counts,
            CharacterCounts { lower: 2, upper: 2, numeric: 2, special: 1 }
        );
        assert_eq!(counts.span(), 4);
        assert_eq!(CharacterCounts::of("").span(), 0);
        assert!(spans("abc123", 2));
        assert!(!spans("abc123", 3));
    }
}
