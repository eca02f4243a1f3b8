//! Word validation checks
//!
//! Each check inspects one aspect of a candidate word.

mod common;
mod digits;
mod length;
mod personal;

pub use common::common_word_check;
pub use digits::digits_only_check;
pub use length::length_check;
pub use personal::personal_info_check;

use crate::dictionary::CommonWords;
use crate::validator::WordError;

/// Result type for check functions.
/// - `Some(error)` - Check failed
/// - `None` - Check passed
pub type CheckResult = Option<WordError>;

/// Signature shared by all checks so the validator can run them in order.
pub type Check = fn(&str, &CommonWords) -> CheckResult;
