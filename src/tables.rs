//! Constant lookup tables shared by the validator, assembler and scorer.

use regex::Regex;
use std::sync::LazyLock;

/// Built-in list of weak words, stored lowercase.
pub const COMMON_WORDS: &[&str] = &[
    "password",
    "123456",
    "qwerty",
    "abc123",
    "password123",
    "admin",
    "letmein",
    "welcome",
    "monkey",
    "dragon",
    "master",
    "hello",
    "freedom",
    "whatever",
    "computer",
    "internet",
    "security",
    "system",
    "user",
    "guest",
];

/// Symbols the assembler draws separators and the trailing symbol from.
pub const SEPARATOR_SYMBOLS: &[char] = &['!', '@', '#', '$', '%', '&', '*', '+', '=', '?'];

/// Digits the assembler draws separators from.
pub const SEPARATOR_DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Characters counted as symbols by the scorer.
pub const SCORE_SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

// Years 1900-2099, days 01-31 and months 01-12, each as a standalone number.
// Boundaries are ASCII: only `[0-9A-Za-z_]` count as word characters.
static PERSONAL_INFO_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?-u:\b)(19|20)[0-9]{2}(?-u:\b)").expect("year pattern is valid"),
        Regex::new(r"(?-u:\b)(0[1-9]|[12][0-9]|3[01])(?-u:\b)").expect("day pattern is valid"),
        Regex::new(r"(?-u:\b)(0[1-9]|1[0-2])(?-u:\b)").expect("month pattern is valid"),
    ]
});

/// Returns `true` if `text` contains a year, day or month looking number.
pub fn contains_personal_info(text: &str) -> bool {
    PERSONAL_INFO_PATTERNS.iter().any(|re| re.is_match(text))
}
