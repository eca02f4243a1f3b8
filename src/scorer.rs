//! Password strength scorer - main rule evaluation logic.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::dictionary::CommonWords;
use crate::tables::{contains_personal_info, SCORE_SYMBOLS};

const MIN_PASSWORD_LENGTH: usize = 12;

/// Qualitative strength derived from the share of satisfied rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Maps a percentage of satisfied rules to a strength level.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 85.0 {
            PasswordStrength::VeryStrong
        } else if percentage >= 70.0 {
            PasswordStrength::Strong
        } else if percentage >= 50.0 {
            PasswordStrength::Moderate
        } else {
            PasswordStrength::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the seven rules a password is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
    NoCommonWords,
    NoPersonalInfo,
}

impl PasswordRule {
    pub const ALL: [PasswordRule; 7] = [
        PasswordRule::MinLength,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Numbers,
        PasswordRule::Symbols,
        PasswordRule::NoCommonWords,
        PasswordRule::NoPersonalInfo,
    ];

    /// Short description shown next to a pass/fail indicator.
    pub fn description(self) -> &'static str {
        match self {
            PasswordRule::MinLength => "12+ characters",
            PasswordRule::Uppercase => "Uppercase letters",
            PasswordRule::Lowercase => "Lowercase letters",
            PasswordRule::Numbers => "Numbers",
            PasswordRule::Symbols => "Symbols",
            PasswordRule::NoCommonWords => "No common words",
            PasswordRule::NoPersonalInfo => "No personal information",
        }
    }
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Result of scoring a password: one flag per rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PasswordRules {
    pub has_min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_numbers: bool,
    pub has_symbols: bool,
    pub no_common_words: bool,
    pub no_personal_info: bool,
}

impl PasswordRules {
    /// Returns whether `rule` is satisfied.
    pub fn get(&self, rule: PasswordRule) -> bool {
        match rule {
            PasswordRule::MinLength => self.has_min_length,
            PasswordRule::Uppercase => self.has_uppercase,
            PasswordRule::Lowercase => self.has_lowercase,
            PasswordRule::Numbers => self.has_numbers,
            PasswordRule::Symbols => self.has_symbols,
            PasswordRule::NoCommonWords => self.no_common_words,
            PasswordRule::NoPersonalInfo => self.no_personal_info,
        }
    }

    /// Iterates over every rule with its outcome, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (PasswordRule, bool)> + '_ {
        PasswordRule::ALL.into_iter().map(|rule| (rule, self.get(rule)))
    }

    /// Number of satisfied rules.
    pub fn passed(&self) -> usize {
        self.iter().filter(|(_, ok)| *ok).count()
    }

    /// Share of satisfied rules, 0 to 100.
    pub fn percentage(&self) -> f64 {
        self.passed() as f64 / PasswordRule::ALL.len() as f64 * 100.0
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_percentage(self.percentage())
    }
}

/// Scores a password against the built-in common word table.
///
/// Deterministic: the same password always yields the same rules.
pub fn score(password: &SecretString) -> PasswordRules {
    score_with(password, CommonWords::builtin())
}

/// Scores a password against a caller-supplied common word table.
pub fn score_with(password: &SecretString, words: &CommonWords) -> PasswordRules {
    let pwd = password.expose_secret();

    let rules = PasswordRules {
        has_min_length: pwd.chars().count() >= MIN_PASSWORD_LENGTH,
        has_uppercase: pwd.chars().any(|c| c.is_ascii_uppercase()),
        has_lowercase: pwd.chars().any(|c| c.is_ascii_lowercase()),
        has_numbers: pwd.chars().any(|c| c.is_ascii_digit()),
        has_symbols: pwd.chars().any(|c| SCORE_SYMBOLS.contains(c)),
        no_common_words: words.find_in(pwd).is_none(),
        no_personal_info: !contains_personal_info(pwd),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password scored: {}/{} rules, {}",
        rules.passed(),
        PasswordRule::ALL.len(),
        rules.strength()
    );

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_score_short_lowercase_password() {
        let rules = score(&secret("abc123"));

        assert!(!rules.has_min_length);
        assert!(!rules.has_uppercase);
        assert!(rules.has_lowercase);
        assert!(rules.has_numbers);
        assert!(!rules.has_symbols);
        assert!(!rules.no_common_words);
        assert!(rules.no_personal_info);
        assert_eq!(rules.strength(), PasswordStrength::Weak);
    }

    #[test]
    fn test_score_all_rules_pass() {
        for pwd in ["Tiger!Lily7#Run", "Zebra8Moon$Kite", "Ocean+Violin93?"] {
            let rules = score(&secret(pwd));
            assert_eq!(rules.passed(), 7, "{} failed: {:?}", pwd, rules);
            assert_eq!(rules.strength(), PasswordStrength::VeryStrong);
            assert_eq!(rules.strength().to_string(), "Very Strong");
        }
    }

    #[test]
    fn test_score_is_deterministic() {
        let pwd = secret("Tiger!Lily42?");
        assert_eq!(score(&pwd), score(&pwd));
    }

    #[test]
    fn test_score_common_word_substring() {
        let rules = score(&secret("MyDRAGON!fly42"));
        assert!(!rules.no_common_words);
    }

    #[test]
    fn test_score_personal_info() {
        let rules = score(&secret("Tiger#1999!Lily"));
        assert!(!rules.no_personal_info);

        let rules = score(&secret("Tiger#07!Lily"));
        assert!(!rules.no_personal_info);

        let rules = score(&secret("Ñandú07!Tiger"));
        assert!(!rules.no_personal_info);
    }

    #[test]
    fn test_score_empty_password() {
        let rules = score(&secret(""));
        assert_eq!(rules.passed(), 2);
        assert!(rules.no_common_words && rules.no_personal_info);
        assert_eq!(rules.strength(), PasswordStrength::Weak);
    }

    #[test]
    fn test_score_min_length_counts_characters() {
        // Two bytes per character, so byte length would pass earlier.
        assert!(!score(&secret(&"ñ".repeat(11))).has_min_length);
        assert!(score(&secret(&"ñ".repeat(12))).has_min_length);
    }

    #[test]
    fn test_score_with_custom_dictionary() {
        let mut words = CommonWords::builtin().clone();
        words.extend(["lily"]);

        let pwd = secret("Tiger!Lily7#Run");
        assert!(score(&pwd).no_common_words);
        assert!(!score_with(&pwd, &words).no_common_words);
    }

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(PasswordStrength::from_percentage(100.0), PasswordStrength::VeryStrong);
        assert_eq!(PasswordStrength::from_percentage(85.0), PasswordStrength::VeryStrong);
        assert_eq!(PasswordStrength::from_percentage(84.9), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::from_percentage(70.0), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::from_percentage(50.0), PasswordStrength::Moderate);
        assert_eq!(PasswordStrength::from_percentage(49.9), PasswordStrength::Weak);
    }

    #[test]
    fn test_strength_by_passed_rules() {
        let expected = [
            (7, PasswordStrength::VeryStrong),
            (6, PasswordStrength::VeryStrong),
            (5, PasswordStrength::Strong),
            (4, PasswordStrength::Moderate),
            (3, PasswordStrength::Weak),
            (0, PasswordStrength::Weak),
        ];
        for (passed, strength) in expected {
            let flags: Vec<bool> = (0..7).map(|i| i < passed).collect();
            let rules = PasswordRules {
                has_min_length: flags[0],
                has_uppercase: flags[1],
                has_lowercase: flags[2],
                has_numbers: flags[3],
                has_symbols: flags[4],
                no_common_words: flags[5],
                no_personal_info: flags[6],
            };
            assert_eq!(rules.passed(), passed);
            assert_eq!(rules.strength(), strength, "{} rules passed", passed);
        }
    }

    #[test]
    fn test_rules_iter_order() {
        let rules = score(&secret("abc123"));
        let listed: Vec<PasswordRule> = rules.iter().map(|(rule, _)| rule).collect();
        assert_eq!(listed, PasswordRule::ALL.to_vec());
        assert_eq!(PasswordRule::MinLength.to_string(), "12+ characters");
    }
}
