//! Year and suffix expansion over the current candidate set.

use super::CandidateSet;

/// Appended and prepended to every candidate when years are enabled.
pub const YEAR_TOKENS: [&str; 10] = [
    "2020", "2021", "2022", "2023", "2024", "20", "21", "22", "23", "24",
];

/// Appended to every candidate when suffixes are enabled.
pub const SUFFIX_TOKENS: [&str; 10] = ["!", "@", "#", "$", "123", "1", "01", "99", "!@#", "123!"];

/// Adds `word+year` and `year+word` for every candidate present when called.
///
/// Returns the number of new candidates.
pub fn expand_years(candidates: &mut CandidateSet) -> usize {
    let snapshot = candidates.snapshot();
    let mut added = 0;
    for word in &snapshot {
        for year in YEAR_TOKENS {
            added += usize::from(candidates.insert(format!("{}{}", word, year)));
            added += usize::from(candidates.insert(format!("{}{}", year, word)));
        }
    }
    added
}

/// Adds `word+suffix` for every candidate present when called.
///
/// Returns the number of new candidates.
pub fn expand_suffixes(candidates: &mut CandidateSet) -> usize {
    let snapshot = candidates.snapshot();
    let mut added = 0;
    for word in &snapshot {
        for suffix in SUFFIX_TOKENS {
            added += usize::from(candidates.insert(format!("{}{}", word, suffix)));
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::GenerationOptions;

    fn set_with(words: &[&str], min: usize, max: usize) -> CandidateSet {
        let mut set = CandidateSet::new(&GenerationOptions::base_only(min, max));
        for word in words {
            set.insert(word.to_string());
        }
        set
    }

    #[test]
    fn test_expand_years_both_sides() {
        let mut set = set_with(&["rex"], 1, 20);
        assert_eq!(expand_years(&mut set), 20);
        assert!(set.contains("rex2024"));
        assert!(set.contains("2020rex"));
        assert!(set.contains("rex21"));
        assert!(set.contains("22rex"));
    }

    #[test]
    fn test_expand_years_is_single_pass() {
        let mut set = set_with(&["rex"], 1, 20);
        expand_years(&mut set);
        // no year applied twice in the same pass
        assert!(!set.contains("rex20202020"));
        assert!(!set.contains("2020rex2020"));
        assert_eq!(set.len(), 21);
    }

    #[test]
    fn test_expand_years_respects_length_gate() {
        let mut set = set_with(&["rex"], 1, 5);
        expand_years(&mut set);
        assert!(set.contains("rex20"));
        assert!(set.contains("24rex"));
        assert!(!set.contains("rex2020"));
    }

    #[test]
    fn test_expand_suffixes() {
        let mut set = set_with(&["max"], 1, 20);
        assert_eq!(expand_suffixes(&mut set), 10);
        assert!(set.contains("max!@#"));
        assert!(set.contains("max123!"));
        assert!(!set.contains("max!!"));
    }

    #[test]
    fn test_suffixes_after_years_asymmetry() {
        let mut set = set_with(&["max"], 1, 20);
        expand_years(&mut set);
        expand_suffixes(&mut set);
        assert!(set.contains("max2024!"));
        assert!(!set.contains("max!2024"));
    }
}
