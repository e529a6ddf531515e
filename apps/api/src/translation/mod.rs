//! Best-effort translation of upstream listing text to English.
//!
//! Translation is always optional: every failure path falls back to the
//! original text, so a provider outage degrades output quality but never
//! blocks an aggregation call.

use std::sync::Arc;

use tracing::{debug, warn};

pub mod handlers;
pub mod providers;

use providers::TranslationProvider;

/// Inputs shorter than this are returned unchanged; translation services are
/// unreliable and wasteful on trivial strings.
pub const MIN_TRANSLATE_LEN: usize = 5;
/// Inputs are truncated to this many characters before submission. Providers
/// have payload limits and full-length translation is not needed for preview
/// purposes.
pub const MAX_TRANSLATE_LEN: usize = 800;

const TRUNCATION_MARKER: &str = "... (translated)";

// Common function words in German, French and Spanish, surrounded by spaces
// so they match whole words only, plus the gender-inclusive tags common in
// German job postings.
const NON_ENGLISH_MARKERS: &[&str] = &[
    " und ", " der ", " die ", " das ", " für ", " mit ", " von ", // German
    " le ", " la ", " les ", " et ", " dans ", " pour ", // French
    " el ", " los ", " las ", " y ", " en ", " con ", // Spanish
    " m/w/d ", " (gn) ", " (m/w/d) ",
];

/// Two independent heuristics: marker words, and characters outside the
/// basic Latin alphabet. If neither fires the text is assumed English.
pub fn is_likely_non_english(text: &str) -> bool {
    let lower = text.to_lowercase();
    NON_ENGLISH_MARKERS.iter().any(|m| lower.contains(m))
        || lower.chars().any(|c| matches!(c, 'ä' | 'ö' | 'ü' | 'ß'))
}

fn truncate_for_submission(text: &str) -> (&str, bool) {
    match text.char_indices().nth(MAX_TRANSLATE_LEN) {
        Some((idx, _)) => (&text[..idx], true),
        None => (text, false),
    }
}

/// The translation pipeline. Holds an ordered, immutable provider list built
/// once at startup; the first provider that produces a usable result wins.
pub struct Translator {
    providers: Vec<Arc<dyn TranslationProvider>>,
}

impl Translator {
    pub fn new(providers: Vec<Arc<dyn TranslationProvider>>) -> Self {
        Self { providers }
    }

    /// Translates `text` to English, best effort.
    ///
    /// Short input and likely-English input are returned unchanged without
    /// touching the network. A provider that fails, or that returns its
    /// input verbatim (a silent-failure signal), is skipped in favor of the
    /// next one. When every provider fails the original text is returned.
    pub async fn translate_to_english(&self, text: &str) -> String {
        if text.chars().count() < MIN_TRANSLATE_LEN || !is_likely_non_english(text) {
            return text.to_string();
        }

        let (input, truncated) = truncate_for_submission(text);

        for provider in &self.providers {
            match provider.translate(input, "en").await {
                Ok(output) if !output.is_empty() && output != input => {
                    return if truncated {
                        format!("{output}{TRUNCATION_MARKER}")
                    } else {
                        output
                    };
                }
                Ok(_) => {
                    debug!(
                        provider = provider.name(),
                        "translation returned input unchanged, trying next provider"
                    );
                }
                Err(err) => {
                    warn!(
                        provider = provider.name(),
                        error = %err,
                        "translation failed, trying next provider"
                    );
                }
            }
        }

        text.to_string()
    }
}
