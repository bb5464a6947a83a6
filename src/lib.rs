//! Offline password analysis and targeted wordlist generation
//!
//! Two independent engines for authorized security testing:
//!
//! - [`analyze_password`] scores a password from 0 to 4, estimates its
//!   entropy, lists weak patterns and suggests improvements.
//! - [`generate_wordlist`] expands personal facts (names, birth year, pets,
//!   custom words) into a deduplicated, sorted list of candidate passwords.
//!
//! Both are pure: no I/O, no state kept between calls.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based variants with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-recon` binary
//!
//! # Example
//!
//! ```rust
//! use pwd_recon::{analyze_password, generate_wordlist, GenerationOptions, PersonalFacts};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = analyze_password(&password).expect("non-empty password");
//! println!("Score: {} ({})", report.score.value(), report.strength());
//! println!("Crack time: {}", report.crack_time);
//!
//! let facts = PersonalFacts {
//!     name: Some("Ana".to_string()),
//!     birth_year: Some("1990".to_string()),
//!     ..Default::default()
//! };
//! let words = generate_wordlist(&facts, &GenerationOptions::default());
//! assert!(words.contains(&"ana1990".to_string()));
//! ```

mod evaluator;
mod sections;
mod types;

pub mod export;
pub mod wordlist;

// Public API
pub use evaluator::{ENTROPY_BONUS_BITS, analyze_password};
pub use sections::{
    CRACK_TIME_THRESHOLDS, CharacterClasses, SYMBOL_CHARS, WEAK_PATTERNS, WeakPattern,
    crack_time_section as estimate_crack_time,
};
pub use types::{AnalysisReport, CrackTime, MAX_SCORE, PasswordScore, PasswordStrength};
pub use wordlist::{CandidateSet, GenerationOptions, OptionsWarning, PersonalFacts, generate_wordlist};

#[cfg(feature = "async")]
pub use evaluator::{ANALYSIS_DEBOUNCE, analyze_password_tx};

#[cfg(feature = "async")]
pub use wordlist::{generate_wordlist_cancellable, generate_wordlist_tx};
