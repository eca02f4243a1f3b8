//! Digits check - rejects words made only of digits.

use super::CheckResult;
use crate::dictionary::CommonWords;
use crate::validator::WordError;

pub fn digits_only_check(word: &str, _: &CommonWords) -> CheckResult {
    let digits_only = !word.is_empty() && word.chars().all(|c| c.is_ascii_digit());
    digits_only.then_some(WordError::DigitsOnly)
}
