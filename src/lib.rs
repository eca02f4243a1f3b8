//! Word-based password generation library
//!
//! Turns a handful of user-chosen words into a password and reports how well
//! the result follows a fixed set of strength rules.
//!
//! The pipeline is three pure functions:
//!
//! 1. [`validate`] checks a single word (length, common words, dates, digits).
//! 2. [`assemble`] capitalizes the words and joins them with random digits and
//!    symbols.
//! 3. [`score`] evaluates the generated password against seven rules and
//!    derives a [`PasswordStrength`].
//!
//! [`WordList`] wraps the pipeline for a presentation layer: it keeps the
//! validation state of every row in sync and regenerates on request.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_COMMON_WORDS_PATH`: Optional file with extra common words, one per
//!   line, read by [`CommonWords::from_env`]
//!
//! # Example
//!
//! ```rust
//! use pwd_wordsmith::{assemble, score, validate};
//! use rand::SeedableRng;
//! use secrecy::ExposeSecret;
//!
//! assert!(validate("Tiger").is_valid);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let password = assemble(&["tiger", "lily"], &mut rng);
//! assert!(password.expose_secret().starts_with("Tiger"));
//!
//! let rules = score(&password);
//! println!("Strength: {}", rules.strength());
//! ```

mod assembler;
mod checks;
mod dictionary;
mod scorer;
mod tables;
mod validator;
mod words;

// Public API
pub use assembler::{assemble, assemble_password};
pub use dictionary::{CommonWords, DictionaryError, COMMON_WORDS_PATH_ENV};
pub use scorer::{score, score_with, PasswordRule, PasswordRules, PasswordStrength};
pub use tables::{COMMON_WORDS, SCORE_SYMBOLS, SEPARATOR_SYMBOLS};
pub use validator::{validate, validate_with, WordError, WordValidation};
pub use words::{Generation, WordEntry, WordId, WordList};
