//! Export helpers
//!
//! Plain-text wordlists and redacted JSON analysis documents. Neither
//! serializer alters the engine output it is given.

use std::io::Write;

use chrono::{DateTime, Local, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use thiserror::Error;

use crate::types::AnalysisReport;

/// Placeholder written instead of the analyzed password.
pub const REDACTED: &str = "[REDACTED]";

pub const USAGE_DISCLAIMER: &str = "Use for authorized security testing only";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize analysis: {0}")]
    Json(#[from] serde_json::Error),
}

/// Formats a wordlist stamped with the given time.
pub fn format_wordlist_at(words: &[String], include_header: bool, generated: DateTime<Local>) -> String {
    let mut content = String::new();
    if include_header {
        content.push_str(&format!(
            "# Custom Wordlist Generated on {}\n",
            generated.format("%Y-%m-%d %H:%M:%S")
        ));
        content.push_str(&format!("# Total words: {}\n", words.len()));
        content.push_str(&format!("# {}\n", USAGE_DISCLAIMER));
        content.push_str("#\n\n");
    }
    content.push_str(&words.join("\n"));
    content
}

/// Formats a wordlist one word per line, optionally behind a `#` header.
pub fn format_wordlist(words: &[String], include_header: bool) -> String {
    format_wordlist_at(words, include_header, Local::now())
}

pub fn write_wordlist<W: Write>(
    writer: &mut W,
    words: &[String],
    include_header: bool,
) -> Result<(), ExportError> {
    writer.write_all(format_wordlist(words, include_header).as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RedactedAnalysis<'a> {
    #[serde(flatten)]
    report: &'a AnalysisReport,
    password: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisDocument<'a> {
    timestamp: DateTime<Utc>,
    password_length: usize,
    analysis: RedactedAnalysis<'a>,
}

/// Serializes a report stamped with the given time.
pub fn analysis_to_json_at(
    report: &AnalysisReport,
    password: &SecretString,
    timestamp: DateTime<Utc>,
) -> Result<String, ExportError> {
    let document = AnalysisDocument {
        timestamp,
        password_length: password.expose_secret().chars().count(),
        analysis: RedactedAnalysis {
            report,
            password: REDACTED,
        },
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Serializes a report as pretty JSON. The password only contributes its
/// length; its value is always replaced by [`REDACTED`].
pub fn analysis_to_json(report: &AnalysisReport, password: &SecretString) -> Result<String, ExportError> {
    analysis_to_json_at(report, password, Utc::now())
}

pub fn write_analysis<W: Write>(
    writer: &mut W,
    report: &AnalysisReport,
    password: &SecretString,
) -> Result<(), ExportError> {
    let json = analysis_to_json(report, password)?;
    writer.write_all(json.as_bytes())?;
    writer.flush()?;
    Ok(())
}
