//! Word validator - runs every check against a single word.

use std::fmt;

use crate::checks::{
    common_word_check, digits_only_check, length_check, personal_info_check, Check,
};
use crate::dictionary::CommonWords;

/// Reason a word was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordError {
    TooShort,
    TooCommon,
    ContainsPersonalInfo,
    DigitsOnly,
}

impl WordError {
    /// Human-readable message for the error.
    pub fn message(self) -> &'static str {
        match self {
            WordError::TooShort => "too short",
            WordError::TooCommon => "too common",
            WordError::ContainsPersonalInfo => "contains personal information",
            WordError::DigitsOnly => "digits only is not secure",
        }
    }
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of validating one word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordValidation {
    pub is_valid: bool,
    pub errors: Vec<WordError>,
}

// Checks run in this order; every failure is reported.
const CHECKS: [Check; 4] = [
    length_check,
    common_word_check,
    personal_info_check,
    digits_only_check,
];

/// Validates a word against the built-in common word table.
///
/// All checks run; the returned errors keep check order. Never fails,
/// any string (including an empty one) yields a result.
pub fn validate(word: &str) -> WordValidation {
    validate_with(word, CommonWords::builtin())
}

/// Validates a word against a caller-supplied common word table.
pub fn validate_with(word: &str, words: &CommonWords) -> WordValidation {
    let errors: Vec<WordError> = CHECKS.iter().filter_map(|check| check(word, words)).collect();

    WordValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}
