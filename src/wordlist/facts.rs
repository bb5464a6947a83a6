//! Personal facts and base token extraction.

use serde::Deserialize;

/// What is known about the target. Empty or missing fields contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalFacts {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub nickname: Option<String>,
    pub birth_year: Option<String>,
    pub pet: Option<String>,
    pub company: Option<String>,
    /// Comma separated free-form words.
    pub custom_words: Option<String>,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Collects the raw tokens of every field, in field order.
///
/// The result may contain duplicates.
pub fn extract_tokens(facts: &PersonalFacts) -> Vec<String> {
    let mut tokens: Vec<String> = [
        &facts.name,
        &facts.surname,
        &facts.nickname,
        &facts.pet,
        &facts.company,
    ]
    .into_iter()
    .filter_map(non_empty)
    .map(normalize)
    .collect();

    if let Some(year) = non_empty(&facts.birth_year) {
        tokens.push(year.to_string());
        let chars: Vec<char> = year.chars().collect();
        if chars.len() == 4 {
            tokens.push(chars[2..].iter().collect());
        }
    }

    if let Some(custom) = non_empty(&facts.custom_words) {
        tokens.extend(
            custom
                .split(',')
                .map(|word| word.trim().to_lowercase())
                .filter(|word| !word.is_empty()),
        );
    }

    // whitespace-only fields normalize to nothing
    tokens.retain(|token| !token.is_empty());
    tokens
}
