//! Common word check - rejects words from the weak word dictionary.

use super::CheckResult;
use crate::dictionary::CommonWords;
use crate::validator::WordError;

/// Checks if the whole word is in the common word dictionary.
///
/// Only exact (case-insensitive) matches count; substrings are the scorer's
/// concern.
pub fn common_word_check(word: &str, words: &CommonWords) -> CheckResult {
    words.contains(word).then_some(WordError::TooCommon)
}
