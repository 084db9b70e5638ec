use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Tunable knobs for citation matching and insertion.
///
/// Every field is an exact behavioral contract — the defaults reproduce the
/// engine's documented behavior and the test suite pins them down. Callers
/// that want different thresholds should start from [`CitationConfig::default`]
/// and override individual fields rather than building the struct from
/// scratch.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CitationConfig {
    /// Adjusted scores must strictly exceed this for a match to be emitted.
    pub min_confidence: f64,
    /// Relevance weight applied when a source's relevance is zero, negative,
    /// or non-finite.
    pub default_relevance: f64,
    /// Score bonus added per key term found verbatim in a sentence.
    pub key_term_bonus: f64,
    /// At most this many key terms are extracted from a source passage.
    pub max_key_terms: usize,
    /// Sentences whose trimmed text is this many characters or fewer are
    /// discarded during segmentation.
    pub min_sentence_chars: usize,
    /// Tokens this many characters or shorter are ignored by Jaccard scoring.
    pub min_token_chars: usize,
    /// Key terms must be strictly longer than this many characters.
    pub min_key_term_chars: usize,
    /// How far (in characters, each direction) the inserter looks for
    /// sentence-ending punctuation around a raw insertion point.
    pub punctuation_window: usize,
    /// When `true`, each source may only match sentences starting at or after
    /// the end of the previous source's match, enforcing strict left-to-right
    /// citation placement. The default reproduces the observed behavior:
    /// every source searches the whole text independently, and two sources
    /// may cite the same sentence.
    pub advance_floor: bool,
}

impl Default for CitationConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.3,
            default_relevance: 0.5,
            key_term_bonus: 0.1,
            max_key_terms: 5,
            min_sentence_chars: 10,
            min_token_chars: 2,
            min_key_term_chars: 3,
            punctuation_window: 10,
            advance_floor: false,
        }
    }
}

impl CitationConfig {
    /// Load from a TOML file, then apply env var overrides.
    ///
    /// A missing file is not an error — defaults are used, matching the
    /// behavior of the surrounding assistant's other config surfaces.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read citation config file")?;
            toml::from_str(&contents).context("failed to parse citation config TOML")?
        } else {
            info!("no citation config at {}, using defaults", path.display());
            CitationConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (NEUROCITE_MIN_CONFIDENCE,
    /// NEUROCITE_ADVANCE_FLOOR). Unparseable values are ignored.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("NEUROCITE_MIN_CONFIDENCE") {
            if let Ok(parsed) = val.parse::<f64>() {
                self.min_confidence = parsed;
            }
        }
        if let Ok(val) = std::env::var("NEUROCITE_ADVANCE_FLOOR") {
            if let Ok(parsed) = val.parse::<bool>() {
                self.advance_floor = parsed;
            }
        }
    }
}
