//! Password analysis sections
//!
//! Each section analyzes a specific aspect of password strength.

mod advice;
mod crack_time;
mod entropy;
mod pattern;
mod variety;

pub use advice::{MIN_LENGTH, RECOMMENDED_LENGTH, suggestions_section, warning_section};
pub use crack_time::{CRACK_TIME_THRESHOLDS, crack_time_section};
pub use entropy::entropy_section;
pub use pattern::{WEAK_PATTERNS, WeakPattern, pattern_analysis_section};
pub use variety::{CharacterClasses, SYMBOL_CHARS, character_variety_section};
