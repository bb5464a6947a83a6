//! Advice section - suggestions and warnings derived from the other sections.

use super::pattern::WeakPattern;
use super::variety::CharacterClasses;

pub const MIN_LENGTH: usize = 8;
pub const RECOMMENDED_LENGTH: usize = 12;
/// Below this length a password with no pattern still gets a warning.
pub const CRITICAL_LENGTH: usize = 6;

pub const SUGGEST_LENGTH: &str = "Use at least 12 characters for better security";
pub const SUGGEST_UPPERCASE: &str = "Add uppercase letters";
pub const SUGGEST_NUMBERS: &str = "Include numbers";
pub const SUGGEST_SYMBOLS: &str = "Add special characters (!@#$%^&*)";
pub const SUGGEST_TOO_SHORT: &str = "Password is too short - minimum 8 characters recommended";
pub const SUGGEST_PASSPHRASE: &str = "Consider using a passphrase with random words";

pub const WARN_EXTREMELY_WEAK: &str = "Password is extremely weak and can be cracked in seconds.";

/// Builds the ordered list of suggestions.
///
/// The passphrase hint is always last.
pub fn suggestions_section(length: usize, classes: &CharacterClasses) -> Vec<String> {
    [
        (length < RECOMMENDED_LENGTH, SUGGEST_LENGTH),
        (!classes.uppercase, SUGGEST_UPPERCASE),
        (!classes.digits, SUGGEST_NUMBERS),
        (!classes.symbols, SUGGEST_SYMBOLS),
        (length < MIN_LENGTH, SUGGEST_TOO_SHORT),
        (true, SUGGEST_PASSPHRASE),
    ]
    .into_iter()
    .filter(|(triggered, _)| *triggered)
    .map(|(_, text)| text.to_string())
    .collect()
}

/// Returns a warning if patterns were found or the password is critically short.
pub fn warning_section(length: usize, patterns: &[WeakPattern]) -> Option<String> {
    if !patterns.is_empty() {
        let names: Vec<&str> = patterns.iter().map(|p| p.name()).collect();
        return Some(format!(
            "Detected vulnerable patterns: {}. Consider avoiding predictable sequences.",
            names.join(", ")
        ));
    }
    if length < CRITICAL_LENGTH {
        return Some(WARN_EXTREMELY_WEAK.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_classes() -> CharacterClasses {
        CharacterClasses {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }

    #[test]
    fn test_suggestions_too_short() {
        let result = suggestions_section(5, &CharacterClasses::default());
        assert_eq!(
            result,
            vec![
                SUGGEST_LENGTH,
                SUGGEST_UPPERCASE,
                SUGGEST_NUMBERS,
                SUGGEST_SYMBOLS,
                SUGGEST_TOO_SHORT,
                SUGGEST_PASSPHRASE,
            ]
        );
    }

    #[test]
    fn test_suggestions_exactly_minimum() {
        let result = suggestions_section(8, &all_classes());
        assert_eq!(result, vec![SUGGEST_LENGTH, SUGGEST_PASSPHRASE]);
    }

    #[test]
    fn test_suggestions_passphrase_always_last() {
        let result = suggestions_section(30, &all_classes());
        assert_eq!(result, vec![SUGGEST_PASSPHRASE]);
    }

    #[test]
    fn test_warning_lists_patterns() {
        let warning = warning_section(
            20,
            &[WeakPattern::SequentialNumbers, WeakPattern::Keyboard],
        );
        assert_eq!(
            warning.as_deref(),
            Some(
                "Detected vulnerable patterns: Sequential numbers, Keyboard pattern. \
                 Consider avoiding predictable sequences."
            )
        );
    }

    #[test]
    fn test_warning_short_without_patterns() {
        assert_eq!(warning_section(5, &[]).as_deref(), Some(WARN_EXTREMELY_WEAK));
        assert_eq!(warning_section(6, &[]), None);
    }
}
