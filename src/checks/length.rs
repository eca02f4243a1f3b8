//! Length check - rejects words that are too short.

use super::CheckResult;
use crate::dictionary::CommonWords;
use crate::validator::WordError;

pub const MIN_WORD_LENGTH: usize = 3;

/// Checks that the word has at least [`MIN_WORD_LENGTH`] characters.
pub fn length_check(word: &str, _: &CommonWords) -> CheckResult {
    (word.chars().count() < MIN_WORD_LENGTH).then_some(WordError::TooShort)
}
