//! Password analysis engine - runs the sections and combines them into a report.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    MIN_LENGTH, RECOMMENDED_LENGTH, character_variety_section, crack_time_section,
    entropy_section, pattern_analysis_section, suggestions_section, warning_section,
};
use crate::types::{AnalysisReport, PasswordScore};

/// Entropy above which a password earns the entropy point.
pub const ENTROPY_BONUS_BITS: f64 = 60.0;

/// Delay before analysis in [`analyze_password_tx`], so a caller feeding
/// keystrokes can cancel stale requests.
#[cfg(feature = "async")]
pub const ANALYSIS_DEBOUNCE: Duration = Duration::from_millis(300);

/// Analyzes a password and returns a report.
///
/// # Returns
/// `None` only for the empty password. Every other input produces a report.
pub fn analyze_password(password: &SecretString) -> Option<AnalysisReport> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return None;
    }
    let length = pwd.chars().count();

    let classes = character_variety_section(pwd);
    let entropy = entropy_section(pwd, &classes);
    let patterns = pattern_analysis_section(pwd);

    // One point per satisfied criterion; the sum may exceed the max score.
    let criteria = [
        length >= MIN_LENGTH,
        length >= RECOMMENDED_LENGTH,
        classes.uppercase && classes.lowercase,
        classes.digits,
        classes.symbols,
        entropy > ENTROPY_BONUS_BITS,
        patterns.is_empty(),
    ];
    let points = criteria.iter().filter(|&&met| met).count() as u32;

    let suggestions = suggestions_section(length, &classes);
    let warning = warning_section(length, &patterns);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Analyzed password of length {}: {} points, {:.1} bits",
        length,
        points,
        entropy
    );

    Some(AnalysisReport {
        score: PasswordScore::new(points),
        entropy,
        has_lowercase: classes.lowercase,
        has_uppercase: classes.uppercase,
        has_numbers: classes.digits,
        has_symbols: classes.symbols,
        patterns: patterns.iter().map(|p| p.name().to_string()).collect(),
        suggestions,
        warning,
        crack_time: crack_time_section(entropy),
    })
}

/// Async version that sends the report via channel after a short debounce.
///
/// Nothing is sent if the token is cancelled before analysis starts.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Option<AnalysisReport>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(ANALYSIS_DEBOUNCE).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("analysis cancelled");
        return;
    }
    let report = analyze_password(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", _e);
    }
}
