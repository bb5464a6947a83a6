//! Entropy section - brute-force keyspace estimate.

use super::variety::CharacterClasses;

/// Estimates entropy in bits as `length * log2(charset size)`.
///
/// Returns 0 when no known class is present, so the result is never negative.
pub fn entropy_section(pwd: &str, classes: &CharacterClasses) -> f64 {
    let charset = classes.charset_size();
    if charset == 0 {
        return 0.0;
    }
    pwd.chars().count() as f64 * f64::from(charset).log2()
}
