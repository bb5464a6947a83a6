//! Targeted wordlist generation
//!
//! Expands personal facts into candidate passwords through a fixed sequence
//! of stages. Every stage only adds to a [`CandidateSet`], and every insertion
//! goes through the same length gate.

mod expand;
mod facts;
mod options;
mod transform;

use std::collections::BTreeSet;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

pub use expand::{SUFFIX_TOKENS, YEAR_TOKENS, expand_suffixes, expand_years};
pub use facts::{PersonalFacts, extract_tokens};
pub use options::{GenerationOptions, OptionsWarning};
pub use transform::{
    LEET_TABLE, MAX_COMBINABLE_LEN, base_words, capitalize, combine_tokens, leetspeak, reverse,
};

/// Deduplicated candidates that all satisfy the length bounds.
///
/// Candidates are never removed once inserted.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    words: BTreeSet<String>,
    min_length: usize,
    max_length: usize,
}

impl CandidateSet {
    pub fn new(options: &GenerationOptions) -> Self {
        Self {
            words: BTreeSet::new(),
            min_length: options.min_length,
            max_length: options.max_length,
        }
    }

    /// Inserts `word` if it passes the length gate and is new.
    pub fn insert(&mut self, word: String) -> bool {
        let len = word.chars().count();
        if len < self.min_length || len > self.max_length {
            return false;
        }
        self.words.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Copies the current members, so a stage can iterate while inserting.
    pub fn snapshot(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }

    /// Consumes the set, returning its members in ascending order.
    pub fn into_sorted_vec(self) -> Vec<String> {
        self.words.into_iter().collect()
    }
}

/// Runs every stage, asking `cancelled` before each one.
fn run_pipeline(
    facts: &PersonalFacts,
    options: &GenerationOptions,
    cancelled: &dyn Fn() -> bool,
) -> Option<Vec<String>> {
    if let Err(_warning) = options.validate() {
        #[cfg(feature = "tracing")]
        tracing::warn!("{}", _warning);
    }

    let words = base_words(extract_tokens(facts), options.include_combinations);
    let mut candidates = CandidateSet::new(options);
    for word in &words {
        candidates.insert(word.clone());
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "{} base words, {} within length bounds",
        words.len(),
        candidates.len()
    );

    if cancelled() {
        return None;
    }

    // leetspeak and reversal both start from the base word, never from each other
    let mut transforms: Vec<fn(&str) -> String> = Vec::new();
    if options.include_leetspeak {
        transforms.push(leetspeak);
    }
    if options.include_reverse {
        transforms.push(reverse);
    }
    for word in &words {
        for transform in &transforms {
            candidates.insert(transform(word.as_str()));
        }
    }

    if options.include_years {
        if cancelled() {
            return None;
        }
        let _added = expand_years(&mut candidates);
        #[cfg(feature = "tracing")]
        tracing::debug!("year expansion added {} candidates", _added);
    }

    if options.include_common_suffixes {
        if cancelled() {
            return None;
        }
        let _added = expand_suffixes(&mut candidates);
        #[cfg(feature = "tracing")]
        tracing::debug!("suffix expansion added {} candidates", _added);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist generated: {} candidates", candidates.len());

    Some(candidates.into_sorted_vec())
}

/// Generates a sorted, duplicate-free candidate list from personal facts.
///
/// Inverted length bounds are not an error: the result is simply empty.
/// Call [`GenerationOptions::validate`] first to report that case.
pub fn generate_wordlist(facts: &PersonalFacts, options: &GenerationOptions) -> Vec<String> {
    run_pipeline(facts, options, &|| false).unwrap_or_default()
}

/// Same as [`generate_wordlist`], checking the token before each stage.
///
/// Returns `None` if cancelled; partial lists are never returned.
#[cfg(feature = "async")]
pub fn generate_wordlist_cancellable(
    facts: &PersonalFacts,
    options: &GenerationOptions,
    token: &CancellationToken,
) -> Option<Vec<String>> {
    run_pipeline(facts, options, &|| token.is_cancelled())
}

/// Async version that sends the generated list via channel.
///
/// Nothing is sent when cancelled.
#[cfg(feature = "async")]
pub async fn generate_wordlist_tx(
    facts: &PersonalFacts,
    options: &GenerationOptions,
    token: CancellationToken,
    tx: mpsc::Sender<Vec<String>>,
) {
    let Some(words) = generate_wordlist_cancellable(facts, options, &token) else {
        #[cfg(feature = "tracing")]
        tracing::debug!("wordlist generation cancelled");
        return;
    };

    if let Err(_e) = tx.send(words).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generated wordlist: {}", _e);
    }
}
