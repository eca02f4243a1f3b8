//! Common word dictionary
//!
//! Holds the case-insensitive set of weak words consulted by the validator
//! and the scorer. The built-in table can be extended from a text file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

use crate::tables::COMMON_WORDS;

/// Environment variable naming an extra common-word file.
pub const COMMON_WORDS_PATH_ENV: &str = "PWD_COMMON_WORDS_PATH";

static BUILTIN: LazyLock<CommonWords> = LazyLock::new(|| {
    let mut words = CommonWords {
        ordered: Vec::with_capacity(COMMON_WORDS.len()),
        lookup: HashSet::with_capacity(COMMON_WORDS.len()),
    };
    words.extend(COMMON_WORDS);
    words
});

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Common words file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common words file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common words file is empty")]
    EmptyFile,
}

/// Case-insensitive set of words considered too common for a password.
///
/// Entries keep insertion order: built-in words first, then extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonWords {
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

impl CommonWords {
    /// Returns the shared built-in table.
    pub fn builtin() -> &'static CommonWords {
        &BUILTIN
    }

    /// Loads the built-in table extended with the file named by
    /// `PWD_COMMON_WORDS_PATH`.
    ///
    /// Falls back to the built-in table when the variable is not set.
    ///
    /// # Errors
    ///
    /// Same as [`CommonWords::from_path`] when the variable is set.
    pub fn from_env() -> Result<Self, DictionaryError> {
        match std::env::var_os(COMMON_WORDS_PATH_ENV) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Ok(BUILTIN.clone()),
        }
    }

    /// Loads the built-in table extended with one word per line of `path`.
    ///
    /// Lines are trimmed and lowercased; blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no words
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let words = pwd_wordsmith::CommonWords::from_path("/etc/myapp/weak-words.txt")?;
    /// let result = pwd_wordsmith::validate_with("sunshine", &words);
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common words loading FAILED: FileNotFound {:?}", path);
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common words loading FAILED: Empty file {:?}", path);
            return Err(DictionaryError::EmptyFile);
        }

        let mut dictionary = BUILTIN.clone();
        dictionary.extend(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Common words loaded: {} words ({} built-in) from {:?}",
            dictionary.len(),
            COMMON_WORDS.len(),
            path
        );

        Ok(dictionary)
    }

    /// Adds words to the table, normalizing them the same way as file input.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && self.lookup.insert(word.clone()) {
                self.ordered.push(word);
            }
        }
    }

    /// Returns `true` if `word` is in the table (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(&word.to_lowercase())
    }

    /// Returns the first table entry, in insertion order, found inside
    /// `text` (case-insensitive).
    pub fn find_in(&self, text: &str) -> Option<&str> {
        let haystack = text.to_lowercase();
        self.ordered
            .iter()
            .find(|w| haystack.contains(w.as_str()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl Default for CommonWords {
    fn default() -> Self {
        BUILTIN.clone()
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
    fn test_builtin_contains_case_insensitive() {
        let words = CommonWords::builtin();
        assert_eq!(words.len(), COMMON_WORDS.len());
        assert!(words.contains("password"));
        assert!(words.contains("PassWord"));
        assert!(!words.contains("tiger"));
    }

    #[test]
    fn test_find_in_substring() {
        let words = CommonWords::builtin();
        assert_eq!(words.find_in("MyDragon!42"), Some("dragon"));
        assert_eq!(words.find_in("Tiger!Lily42?"), None);
    }

    #[test]
    fn test_find_in_follows_table_order() {
        // "password" precedes "password123" in the built-in table.
        let words = CommonWords::builtin();
        for _ in 0..10 {
            assert_eq!(words.find_in("Password123!"), Some("password"));
        }

        // Extensions come after the built-in words.
        let mut extended = words.clone();
        extended.extend(["zebra", "Dragon"]);
        assert_eq!(extended.len(), COMMON_WORDS.len() + 1);
        assert_eq!(extended.find_in("zebra-dragon"), Some("dragon"));
        assert_eq!(extended.find_in("zebra-tiger"), Some("zebra"));
    }

    #[test]
    fn test_from_path_file_not_found() {
        let result = CommonWords::from_path("/nonexistent/path/words.txt");
        match result {
            Err(DictionaryError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    fn test_from_path_empty_file() {
        let temp_file = setup_with_tempfile(&["", "   "]);
        let result = CommonWords::from_path(temp_file.path());
        assert!(matches!(result, Err(DictionaryError::EmptyFile)));
    }

    #[test]
    fn test_from_path_extends_builtin() {
        let temp_file = setup_with_tempfile(&["  Sunshine ", "", "tiger", "password"]);
        let words = CommonWords::from_path(temp_file.path()).expect("Should load");

        assert_eq!(words.len(), COMMON_WORDS.len() + 2);
        assert!(words.contains("sunshine"));
        assert!(words.contains("TIGER"));
        assert!(words.contains("qwerty"));
    }

    #[test]
    #[serial]
    fn test_from_env_unset_uses_builtin() {
        remove_env(COMMON_WORDS_PATH_ENV);

        let words = CommonWords::from_env().expect("Should fall back");
        assert_eq!(&words, CommonWords::builtin());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_path() {
        let temp_file = setup_with_tempfile(&["sunshine"]);
        let path = temp_file.path().to_str().unwrap();
        set_env(COMMON_WORDS_PATH_ENV, path);

        let words = CommonWords::from_env().expect("Should load");
        assert!(words.contains("sunshine"));

        remove_env(COMMON_WORDS_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_missing_file() {
        set_env(COMMON_WORDS_PATH_ENV, "/nonexistent/path/words.txt");

        let result = CommonWords::from_env();
        assert!(matches!(result, Err(DictionaryError::FileNotFound(_))));

        remove_env(COMMON_WORDS_PATH_ENV);
    }
}
