//! Personal information check - rejects words carrying dates.

use super::CheckResult;
use crate::dictionary::CommonWords;
use crate::tables::contains_personal_info;
use crate::validator::WordError;

/// Checks for standalone numbers that look like a year, day or month.
pub fn personal_info_check(word: &str, _: &CommonWords) -> CheckResult {
    contains_personal_info(word).then_some(WordError::ContainsPersonalInfo)
}
