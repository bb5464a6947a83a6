//! Word transformations: combination, capitalization, leetspeak and reversal.

use std::collections::HashSet;

/// Tokens at least this long are never combined.
pub const MAX_COMBINABLE_LEN: usize = 10;

/// Letter substitutions, applied to the lowercased word.
pub const LEET_TABLE: [(char, char); 8] = [
    ('a', '@'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '$'),
    ('t', '7'),
    ('l', '1'),
    ('g', '9'),
];

/// Concatenates every unordered pair of short tokens in both orders.
pub fn combine_tokens(tokens: &[String]) -> Vec<String> {
    let short: Vec<&String> = tokens
        .iter()
        .filter(|t| !t.is_empty() && t.chars().count() < MAX_COMBINABLE_LEN)
        .collect();

    let mut combinations = Vec::new();
    for (i, first) in short.iter().enumerate() {
        for second in &short[i + 1..] {
            combinations.push(format!("{}{}", first, second));
            combinations.push(format!("{}{}", second, first));
        }
    }
    combinations
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

pub fn leetspeak(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .map(|c| {
            LEET_TABLE
                .iter()
                .find(|(letter, _)| *letter == c)
                .map(|(_, leet)| *leet)
                .unwrap_or(c)
        })
        .collect()
}

pub fn reverse(word: &str) -> String {
    word.chars().rev().collect()
}

/// Builds the deduplicated base word list: tokens, their pairwise
/// combinations, then a capitalized copy of everything.
pub fn base_words(mut tokens: Vec<String>, include_combinations: bool) -> Vec<String> {
    if include_combinations {
        let combinations = combine_tokens(&tokens);
        tokens.extend(combinations);
    }
    let capitalized: Vec<String> = tokens.iter().map(|t| capitalize(t)).collect();
    tokens.extend(capitalized);

    let mut seen = HashSet::new();
    tokens.retain(|t| !t.is_empty() && seen.insert(t.clone()));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_combine_both_orders() {
        let combos = combine_tokens(&strings(&["ana", "rex", "90"]));
        assert_eq!(
            combos,
            vec!["anarex", "rexana", "ana90", "90ana", "rex90", "90rex"]
        );
    }

    #[test]
    fn test_combine_skips_long_tokens() {
        let combos = combine_tokens(&strings(&["ana", "verylongword"]));
        assert!(combos.is_empty());
        let combos = combine_tokens(&strings(&["ana", "ninechars"]));
        assert_eq!(combos, vec!["ananinechars", "ninecharsana"]);
    }

    #[test]
    fn test_combine_duplicate_tokens() {
        let combos = combine_tokens(&strings(&["max", "max"]));
        assert_eq!(combos, vec!["maxmax", "maxmax"]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("ana"), "Ana");
        assert_eq!(capitalize("mAX"), "Max");
        assert_eq!(capitalize("1990"), "1990");
        assert_eq!(capitalize("ßa"), "SSa");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_leetspeak_table() {
        assert_eq!(leetspeak("Gisele Lotta"), "91$313 1077@");
        assert_eq!(leetspeak("xyz"), "xyz");
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("Ana90"), "09anA");
        assert_eq!(reverse("héllo"), "olléh");
    }

    #[test]
    fn test_base_words_dedup_keeps_case_variants() {
        let words = base_words(strings(&["rex", "max", "rex"]), false);
        assert_eq!(words, vec!["rex", "max", "Rex", "Max"]);
    }

    #[test]
    fn test_base_words_with_combinations() {
        let words = base_words(strings(&["ana", "90"]), true);
        assert_eq!(words, vec!["ana", "90", "ana90", "90ana", "Ana", "Ana90"]);
    }
}
