//! Generation options.

use serde::Deserialize;
use thiserror::Error;

/// Non-fatal problems with a set of options.
///
/// Generation still runs; these only explain an empty or surprising result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsWarning {
    #[error("Minimum length {min} is greater than maximum length {max}, no candidate can pass")]
    InvertedLengthBounds { min: usize, max: usize },
}

/// Switches and bounds for wordlist generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    pub include_leetspeak: bool,
    pub include_years: bool,
    pub include_common_suffixes: bool,
    pub include_reverse: bool,
    /// Pairwise concatenation of short base tokens.
    pub include_combinations: bool,
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_leetspeak: true,
            include_years: true,
            include_common_suffixes: true,
            include_reverse: true,
            include_combinations: true,
            min_length: 4,
            max_length: 20,
        }
    }
}

impl GenerationOptions {
    /// Options with every transformation switched off, keeping only the base words.
    pub fn base_only(min_length: usize, max_length: usize) -> Self {
        Self {
            include_leetspeak: false,
            include_years: false,
            include_common_suffixes: false,
            include_reverse: false,
            include_combinations: false,
            min_length,
            max_length,
        }
    }

    /// Checks the options for misconfiguration.
    pub fn validate(&self) -> Result<(), OptionsWarning> {
        if self.min_length > self.max_length {
            return Err(OptionsWarning::InvertedLengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }

    /// Length gate shared by every stage, counted in characters.
    pub fn accepts(&self, word: &str) -> bool {
        let len = word.chars().count();
        len >= self.min_length && len <= self.max_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = GenerationOptions::default();
        assert!(options.include_leetspeak && options.include_reverse);
        assert_eq!((options.min_length, options.max_length), (4, 20));
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn test_validate_inverted_bounds() {
        let options = GenerationOptions::base_only(10, 5);
        assert_eq!(
            options.validate(),
            Err(OptionsWarning::InvertedLengthBounds { min: 10, max: 5 })
        );
    }

    #[test]
    fn test_accepts_counts_chars() {
        let options = GenerationOptions::base_only(3, 4);
        assert!(options.accepts("äbc"));
        assert!(options.accepts("abcd"));
        assert!(!options.accepts("ab"));
        assert!(!options.accepts("abcde"));
    }

    #[test]
    fn test_deserialize_partial_camel_case() {
        let options: GenerationOptions =
            serde_json::from_str(r#"{"includeReverse": false, "maxLength": 12}"#).unwrap();
        assert!(!options.include_reverse);
        assert!(options.include_years);
        assert_eq!(options.max_length, 12);
    }
}
