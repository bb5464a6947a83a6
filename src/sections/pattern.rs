//! Pattern analysis section - detects well-known weak substrings and structures.

/// A weak structure the analyzer looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeakPattern {
    SequentialNumbers,
    SequentialLetters,
    Keyboard,
    ContainsPassword,
    ContainsAdmin,
    RepeatedCharacters,
    FourDigitYear,
    Date,
}

/// Every pattern, in the order findings are reported.
pub const WEAK_PATTERNS: [WeakPattern; 8] = [
    WeakPattern::SequentialNumbers,
    WeakPattern::SequentialLetters,
    WeakPattern::Keyboard,
    WeakPattern::ContainsPassword,
    WeakPattern::ContainsAdmin,
    WeakPattern::RepeatedCharacters,
    WeakPattern::FourDigitYear,
    WeakPattern::Date,
];

impl WeakPattern {
    pub fn name(&self) -> &'static str {
        match self {
            WeakPattern::SequentialNumbers => "Sequential numbers",
            WeakPattern::SequentialLetters => "Sequential letters",
            WeakPattern::Keyboard => "Keyboard pattern",
            WeakPattern::ContainsPassword => "Contains \"password\"",
            WeakPattern::ContainsAdmin => "Contains \"admin\"",
            WeakPattern::RepeatedCharacters => "Repeated characters",
            WeakPattern::FourDigitYear => "4-digit year pattern",
            WeakPattern::Date => "Date pattern",
        }
    }

    /// `pwd` is the raw password, `folded` its ASCII-lowercased copy.
    fn matches(&self, pwd: &str, folded: &str, chars: &[char]) -> bool {
        match self {
            WeakPattern::SequentialNumbers => pwd.contains("123"),
            WeakPattern::SequentialLetters => folded.contains("abc"),
            WeakPattern::Keyboard => folded.contains("qwerty"),
            WeakPattern::ContainsPassword => folded.contains("password"),
            WeakPattern::ContainsAdmin => folded.contains("admin"),
            WeakPattern::RepeatedCharacters => has_repeated_run(chars, 3),
            WeakPattern::FourDigitYear => longest_digit_run(chars) >= 4,
            WeakPattern::Date => has_date(chars),
        }
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn has_repeated_run(chars: &[char], min_run: usize) -> bool {
    let mut repeated_count = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] && !is_line_terminator(chars[i]) {
            repeated_count += 1;
            if repeated_count >= min_run {
                return true;
            }
        } else {
            repeated_count = 1;
        }
    }
    false
}

fn longest_digit_run(chars: &[char]) -> usize {
    chars
        .split(|c| !c.is_ascii_digit())
        .map(|run| run.len())
        .max()
        .unwrap_or(0)
}

fn digits_from(chars: &[char], start: usize) -> usize {
    chars
        .get(start..)
        .map(|rest| rest.iter().take_while(|c| c.is_ascii_digit()).count())
        .unwrap_or(0)
}

fn is_date_separator(c: char) -> bool {
    c == '/' || c == '-'
}

/// Finds `D[/-]D[/-]YY` anywhere: a digit, a separator, a 1-2 digit group,
/// a separator, then at least two digits.
fn has_date(chars: &[char]) -> bool {
    (1..chars.len()).any(|sep| {
        if !is_date_separator(chars[sep]) || !chars[sep - 1].is_ascii_digit() {
            return false;
        }
        let middle = digits_from(chars, sep + 1);
        if !(1..=2).contains(&middle) {
            return false;
        }
        let second = sep + 1 + middle;
        matches!(chars.get(second), Some(&c) if is_date_separator(c))
            && digits_from(chars, second + 1) >= 2
    })
}

/// Returns every weak pattern present in the password, once each.
pub fn pattern_analysis_section(pwd: &str) -> Vec<WeakPattern> {
    let folded = pwd.to_ascii_lowercase();
    let chars: Vec<char> = pwd.chars().collect();

    let found: Vec<WeakPattern> = WEAK_PATTERNS
        .iter()
        .copied()
        .filter(|pattern| pattern.matches(pwd, &folded, &chars))
        .collect();

    #[cfg(feature = "tracing")]
    if !found.is_empty() {
        tracing::debug!("Weak patterns detected: {}", found.len());
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(pwd: &str) -> Vec<&'static str> {
        pattern_analysis_section(pwd).iter().map(|p| p.name()).collect()
    }

    #[test]
    fn test_pattern_section_password_literal() {
        assert_eq!(names("PassWord"), vec!["Contains \"password\""]);
    }

    #[test]
    fn test_pattern_section_repetitive_chars() {
        assert_eq!(names("xxaaay"), vec!["Repeated characters"]);
        assert!(names("aabb").is_empty());
    }

    #[test]
    fn test_pattern_section_repeated_newlines_ignored() {
        assert!(names("a\n\n\nb").is_empty());
    }

    #[test]
    fn test_pattern_section_sequences_case_insensitive() {
        assert_eq!(
            names("ABCqWeRtY"),
            vec!["Sequential letters", "Keyboard pattern"]
        );
    }

    #[test]
    fn test_pattern_section_reports_each_once() {
        assert_eq!(names("123x123"), vec!["Sequential numbers"]);
    }

    #[test]
    fn test_pattern_section_four_digits() {
        assert_eq!(names("ab1990"), vec!["4-digit year pattern"]);
        assert!(names("ab199x0").is_empty());
    }

    #[test]
    fn test_pattern_section_dates() {
        assert!(names("x1/2/99").contains(&"Date pattern"));
        assert!(names("12-31-2024").contains(&"Date pattern"));
        assert!(names("on 01/07/88!").contains(&"Date pattern"));
        // trailing group too short
        assert!(!names("1/2/3").contains(&"Date pattern"));
        // middle group too long
        assert!(!names("1/234/56").contains(&"Date pattern"));
        // mixed separators still count
        assert!(names("5-6/77").contains(&"Date pattern"));
    }

    #[test]
    fn test_pattern_section_order_follows_table() {
        assert_eq!(
            names("admin123password"),
            vec![
                "Sequential numbers",
                "Contains \"password\"",
                "Contains \"admin\"",
            ]
        );
    }

    #[test]
    fn test_pattern_section_strong_password() {
        assert!(names("Rnd!Pz7#Wq9$").is_empty());
    }
}
