//! Password assembler - builds a password out of user words.

use rand::Rng;
use secrecy::SecretString;

use crate::tables::{SEPARATOR_DIGITS, SEPARATOR_SYMBOLS};

/// Assembles a password from `words` using `rng` for every random choice.
///
/// Blank words are skipped; every other word is used whether or not it
/// passed validation. Each word is capitalized, consecutive words are joined
/// by a random symbol or digit, and the password ends with a two-digit
/// number and a symbol. Returns an empty password when no word is left.
///
/// # Example
///
/// ```rust
/// use pwd_wordsmith::assemble;
/// use rand::SeedableRng;
/// use secrecy::ExposeSecret;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let password = assemble(&["tiger", "lily"], &mut rng);
/// assert!(password.expose_secret().starts_with("Tiger"));
/// ```
pub fn assemble<S: AsRef<str>>(words: &[S], rng: &mut impl Rng) -> SecretString {
    let words: Vec<&str> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| !w.trim().is_empty())
        .collect();

    if words.is_empty() {
        return SecretString::new(String::new().into_boxed_str());
    }

    let mut password = String::new();
    for (index, word) in words.iter().enumerate() {
        push_capitalized(&mut password, word);

        if index < words.len() - 1 {
            password.push(random_separator(rng));
        }
    }

    let suffix: u8 = rng.random_range(0..100);
    password.push_str(&format!("{:02}", suffix));
    password.push(random_symbol(rng));

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Assembled password from {} words ({} chars)",
        words.len(),
        password.chars().count()
    );

    SecretString::new(password.into_boxed_str())
}

/// Same as [`assemble`] with the thread-local generator.
pub fn assemble_password<S: AsRef<str>>(words: &[S]) -> SecretString {
    assemble(words, &mut rand::rng())
}

/// Appends `word` with its first character uppercased and the rest lowercased.
fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}

/// Either a symbol or a digit, with even odds.
fn random_separator(rng: &mut impl Rng) -> char {
    if rng.random_bool(0.5) {
        random_symbol(rng)
    } else {
        SEPARATOR_DIGITS[rng.random_range(0..SEPARATOR_DIGITS.len())]
    }
}

fn random_symbol(rng: &mut impl Rng) -> char {
    SEPARATOR_SYMBOLS[rng.random_range(0..SEPARATOR_SYMBOLS.len())]
}
