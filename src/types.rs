//! Value types produced by the analysis engine.

use serde::Serialize;
use std::fmt;

/// Highest score a password can reach.
pub const MAX_SCORE: u8 = 4;

/// Heuristic strength score, always within `0..=MAX_SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Builds a score from a raw point sum, discarding anything above `MAX_SCORE`.
    pub fn new(points: u32) -> Self {
        Self(points.min(MAX_SCORE as u32) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Human readable label for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl From<PasswordScore> for PasswordStrength {
    fn from(score: PasswordScore) -> Self {
        match score.value() {
            0 => PasswordStrength::VeryWeak,
            1 => PasswordStrength::Weak,
            2 => PasswordStrength::Fair,
            3 => PasswordStrength::Good,
            _ => PasswordStrength::Strong,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordStrength::VeryWeak => write!(f, "Very Weak"),
            PasswordStrength::Weak => write!(f, "Weak"),
            PasswordStrength::Fair => write!(f, "Fair"),
            PasswordStrength::Good => write!(f, "Good"),
            PasswordStrength::Strong => write!(f, "Strong"),
        }
    }
}

/// Coarse brute-force time bucket derived from entropy.
///
/// Variants are declared from fastest to slowest, so the derived ordering
/// follows resistance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CrackTime {
    Seconds,
    Minutes,
    Hours,
    #[serde(rename = "Days to Months")]
    DaysToMonths,
    Years,
    Decades,
    #[serde(rename = "Centuries+")]
    Centuries,
}

impl CrackTime {
    pub fn label(&self) -> &'static str {
        match self {
            CrackTime::Seconds => "Seconds",
            CrackTime::Minutes => "Minutes",
            CrackTime::Hours => "Hours",
            CrackTime::DaysToMonths => "Days to Months",
            CrackTime::Years => "Years",
            CrackTime::Decades => "Decades",
            CrackTime::Centuries => "Centuries+",
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full result of analyzing one password.
///
/// Never contains the password itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub score: PasswordScore,
    /// Estimated entropy in bits.
    pub entropy: f64,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_numbers: bool,
    pub has_symbols: bool,
    /// Names of the weak patterns found, in detection order.
    pub patterns: Vec<String>,
    pub suggestions: Vec<String>,
    pub warning: Option<String>,
    pub crack_time: CrackTime,
}

impl AnalysisReport {
    pub fn strength(&self) -> PasswordStrength {
        self.score.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(PasswordScore::new(0).value(), 0);
        assert_eq!(PasswordScore::new(3).value(), 3);
        assert_eq!(PasswordScore::new(7).value(), 4);
    }

    #[test]
    fn test_strength_labels() {
        let labels: Vec<String> = (0..=4)
            .map(|p| PasswordStrength::from(PasswordScore::new(p)).to_string())
            .collect();
        assert_eq!(labels, vec!["Very Weak", "Weak", "Fair", "Good", "Strong"]);
    }

    #[test]
    fn test_crack_time_serializes_as_label() {
        let json = serde_json::to_string(&CrackTime::DaysToMonths).unwrap();
        assert_eq!(json, "\"Days to Months\"");
        let json = serde_json::to_string(&CrackTime::Centuries).unwrap();
        assert_eq!(json, "\"Centuries+\"");
    }
}
