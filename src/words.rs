//! Word list model driven by a presentation layer.
//!
//! Keeps each row's validation in sync with its value and regenerates the
//! password only when asked to.

use std::fmt;

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

use crate::assembler::assemble;
use crate::dictionary::CommonWords;
use crate::scorer::{score_with, PasswordRules, PasswordStrength};
use crate::validator::{validate_with, WordError};

/// Stable identifier of a row in a [`WordList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(u64);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user-supplied word and its validation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    id: WordId,
    value: String,
    is_valid: bool,
    errors: Vec<WordError>,
}

impl WordEntry {
    // Untouched rows are invalid but show no messages.
    fn empty(id: WordId) -> Self {
        Self {
            id,
            value: String::new(),
            is_valid: false,
            errors: Vec::new(),
        }
    }

    pub fn id(&self) -> WordId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[WordError] {
        &self.errors
    }
}

/// A freshly generated password and its rule evaluation.
pub struct Generation {
    pub password: SecretString,
    pub rules: PasswordRules,
}

impl Generation {
    pub fn strength(&self) -> PasswordStrength {
        self.rules.strength()
    }

    /// `true` when there was nothing to build a password from. Actions that
    /// need a password (copy, save) should be disabled.
    pub fn is_empty(&self) -> bool {
        self.password.expose_secret().is_empty()
    }
}

impl fmt::Debug for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generation")
            .field("password", &"[REDACTED]")
            .field("rules", &self.rules)
            .finish()
    }
}

/// Ordered, never-empty list of word rows.
#[derive(Debug, Clone)]
pub struct WordList {
    entries: Vec<WordEntry>,
    next_id: u64,
    dictionary: CommonWords,
}

impl WordList {
    /// Creates a list holding one empty row, validated against the built-in
    /// common word table.
    pub fn new() -> Self {
        Self::with_dictionary(CommonWords::builtin().clone())
    }

    /// Creates a list holding one empty row, validated against `dictionary`.
    pub fn with_dictionary(dictionary: CommonWords) -> Self {
        Self {
            entries: vec![WordEntry::empty(WordId(1))],
            next_id: 2,
            dictionary,
        }
    }

    /// Appends an empty row and returns its id.
    pub fn add(&mut self) -> WordId {
        let id = WordId(self.next_id);
        self.next_id += 1;
        self.entries.push(WordEntry::empty(id));
        id
    }

    /// Removes the row with `id` unless it is the last one left.
    ///
    /// Returns `true` if a row was removed.
    pub fn remove(&mut self, id: WordId) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        before != self.entries.len()
    }

    /// Replaces the value of row `id` and re-validates it.
    ///
    /// Returns the updated row, or `None` if no row has that id.
    pub fn update(&mut self, id: WordId, value: impl Into<String>) -> Option<&WordEntry> {
        let entry = self.entries.iter_mut().find(|entry| entry.id == id)?;
        let value = value.into();
        let validation = validate_with(&value, &self.dictionary);

        entry.value = value;
        entry.is_valid = validation.is_valid;
        entry.errors = validation.errors;
        Some(&*entry)
    }

    pub fn get(&self, id: WordId) -> Option<&WordEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values of the non-blank rows, in order. Invalid words are included.
    pub fn words(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.value.as_str())
            .filter(|value| !value.trim().is_empty())
            .collect()
    }

    /// Assembles a password from the current words and scores it.
    ///
    /// Call after every mutation that should refresh the password.
    pub fn generate(&self, rng: &mut impl Rng) -> Generation {
        let words = self.words();
        let password = assemble(&words[..], rng);
        let rules = score_with(&password, &self.dictionary);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Generated password from {} of {} rows: {}",
            words.len(),
            self.entries.len(),
            rules.strength()
        );

        Generation { password, rules }
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::new()
    }
}
