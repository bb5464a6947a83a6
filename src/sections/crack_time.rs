//! Crack time section - maps entropy onto a coarse time bucket.

use crate::types::CrackTime;

/// Exclusive upper entropy bound for each bucket, ascending.
pub const CRACK_TIME_THRESHOLDS: [(f64, CrackTime); 6] = [
    (28.0, CrackTime::Seconds),
    (35.0, CrackTime::Minutes),
    (44.0, CrackTime::Hours),
    (60.0, CrackTime::DaysToMonths),
    (70.0, CrackTime::Years),
    (80.0, CrackTime::Decades),
];

pub fn crack_time_section(entropy: f64) -> CrackTime {
    CRACK_TIME_THRESHOLDS
        .iter()
        .find(|(limit, _)| entropy < *limit)
        .map(|(_, bucket)| *bucket)
        .unwrap_or(CrackTime::Centuries)
}
