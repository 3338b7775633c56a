//! Word dictionary management
//!
//! Handles loading and querying the word corpus used for weak-password checks.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the dictionary file path.
pub const DICTIONARY_PATH_ENV: &str = "PWD_POLICY_DICTIONARY_PATH";

const DEFAULT_DICTIONARY_PATH: &str = "./assets/dictionary.txt";

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Dictionary file is empty")]
    EmptyFile,
}

/// Read-only word lookup consulted by the engine.
///
/// Implementations must tolerate concurrent reads.
pub trait WordDictionary: Send + Sync {
    /// Returns `true` if `candidate` appears verbatim in the corpus.
    fn contains_word(&self, candidate: &str) -> bool;
}

impl<T: WordDictionary + ?Sized> WordDictionary for std::sync::Arc<T> {
    fn contains_word(&self, candidate: &str) -> bool {
        (**self).contains_word(candidate)
    }
}

impl WordDictionary for HashSet<String> {
    fn contains_word(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}

/// Case-normalized word corpus, grouped by word length in characters.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    groups: HashMap<usize, HashSet<String>>,
    len: usize,
}

/// Returns the dictionary file path.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY_DICTIONARY_PATH`
/// 2. Default path `./assets/dictionary.txt`
pub fn dictionary_path() -> PathBuf {
    std::env::var(DICTIONARY_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DICTIONARY_PATH))
}

impl WordList {
    /// Loads the dictionary from the path given by [`dictionary_path`].
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn load() -> Result<Self, DictionaryError> {
        Self::load_from_path(dictionary_path())
    }

    /// Loads the dictionary from a specific file, one word per line.
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: FileNotFound {:?}", path);
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: Empty file {:?}", path);
            return Err(DictionaryError::EmptyFile);
        }

        let list: WordList = content.lines().collect();

        #[cfg(feature = "tracing")]
        tracing::info!("Dictionary loaded: {} words from {:?}", list.len(), path);

        Ok(list)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of length groups the corpus is split into.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    fn insert(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return;
        }
        if self
            .groups
            .entry(word.chars().count())
            .or_default()
            .insert(word)
        {
            self.len += 1;
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = WordList::default();
        for word in iter {
            list.insert(word.as_ref());
        }
        list
    }
}

impl WordDictionary for WordList {
    fn contains_word(&self, candidate: &str) -> bool {
        let candidate = candidate.to_lowercase();
        self.groups
            .get(&candidate.chars().count())
            .is_some_and(|group| group.contains(&candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(words: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for word in words {
            writeln!(temp_file, "{}", word).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_dictionary_path_default() {
        remove_env(DICTIONARY_PATH_ENV);
        assert_eq!(dictionary_path(), PathBuf::from("./assets/dictionary.txt"));
    }

    #[test]
    #[serial]
    fn test_dictionary_path_from_env() {
        set_env(DICTIONARY_PATH_ENV, "/custom/path/words.txt");
        assert_eq!(dictionary_path(), PathBuf::from("/custom/path/words.txt"));
        remove_env(DICTIONARY_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_file_not_found() {
        set_env(DICTIONARY_PATH_ENV, "/nonexistent/path/words.txt");
        let result = WordList::load();
        assert!(matches!(result, Err(DictionaryError::FileNotFound(_))));
        remove_env(DICTIONARY_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_from_env_path() {
        let temp_file = setup_with_tempfile(&["dragon", "monkey"]);
        set_env(DICTIONARY_PATH_ENV, temp_file.path().to_str().unwrap());

        let list = WordList::load().expect("dictionary should load");
        assert_eq!(list.len(), 2);
        assert!(list.contains_word("dragon"));

        remove_env(DICTIONARY_PATH_ENV);
    }

    #[test]
    fn test_load_empty_file() {
        let temp_file = setup_with_tempfile(&["", "   "]);
        let result = WordList::load_from_path(temp_file.path());
        assert!(matches!(result, Err(DictionaryError::EmptyFile)));
    }

    #[test]
    fn test_load_normalizes_words() {
        let temp_file = setup_with_tempfile(&["  Password ", "QWERTY", "", "password", "letmein"]);
        let list = WordList::load_from_path(temp_file.path()).expect("dictionary should load");

        assert_eq!(list.len(), 3);
        assert_eq!(list.group_count(), 3);
        assert!(list.contains_word("password"));
        assert!(list.contains_word("qwerty"));
        assert!(list.contains_word("LetMeIn"));
    }

    #[test]
    fn test_load_bundled_dictionary() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/dictionary.txt");
        let list = WordList::load_from_path(path).expect("bundled dictionary should load");
        assert!(!list.is_empty());
        assert!(list.contains_word("password"));
        assert!(list.contains_word("Sunshine"));
        assert!(!list.contains_word("zq8#lm2!vw"));
    }

    #[test]
    fn test_contains_word_is_exact() {
        let list: WordList = ["sunshine"].into_iter().collect();
        assert!(list.contains_word("sunshine"));
        assert!(!list.contains_word("sunshin"));
        assert!(!list.contains_word("sunshine1"));
        assert!(!list.contains_word(""));
    }

    #[test]
    fn test_shared_dictionary() {
        let list: std::sync::Arc<WordList> = std::sync::Arc::new(["admin"].into_iter().collect());
        assert!(list.contains_word("admin"));

        let set: HashSet<String> = ["admin".to_string()].into_iter().collect();
        assert!(set.contains_word("admin"));
        assert!(!set.contains_word("root"));
    }
}
