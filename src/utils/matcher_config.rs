// src/utils/matcher_config.rs
use std::env;

use log::{info, warn};

/// Tuned against the reference corpus; revalidate before changing.
pub const DEFAULT_KEYWORD_OVERLAP_THRESHOLD: f64 = 0.70;
/// Keyword matching only considers tokens longer than two characters.
pub const DEFAULT_MIN_KEYWORD_TOKEN_LENGTH: usize = 3;

/// Tunable knobs for the resolver's scan strategies.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    pub keyword_overlap_threshold: f64,
    pub min_keyword_token_length: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            keyword_overlap_threshold: DEFAULT_KEYWORD_OVERLAP_THRESHOLD,
            min_keyword_token_length: DEFAULT_MIN_KEYWORD_TOKEN_LENGTH,
        }
    }
}

impl MatcherConfig {
    /// Create configuration from environment variables, falling back to the
    /// tuned defaults on absent or out-of-range values.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = env::var("OJ_KEYWORD_OVERLAP_THRESHOLD") {
            match raw.parse::<f64>() {
                Ok(value) if (0.0..=1.0).contains(&value) => {
                    config.keyword_overlap_threshold = value;
                }
                _ => warn!(
                    "Ignoring OJ_KEYWORD_OVERLAP_THRESHOLD={:?}; expected a ratio in 0.0..=1.0",
                    raw
                ),
            }
        }
        if let Ok(raw) = env::var("OJ_MIN_KEYWORD_TOKEN_LENGTH") {
            match raw.parse::<usize>() {
                Ok(value) if value > 0 => config.min_keyword_token_length = value,
                _ => warn!(
                    "Ignoring OJ_MIN_KEYWORD_TOKEN_LENGTH={:?}; expected a positive integer",
                    raw
                ),
            }
        }
        config
    }

    /// Log the active configuration
    pub fn log_config(&self) {
        info!("🔍 OJ matcher configuration");
        info!(
            "   Keyword overlap threshold: {:.2}",
            self.keyword_overlap_threshold
        );
        info!(
            "   Minimum keyword token length: {}",
            self.min_keyword_token_length
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_tuned_constants() {
        let config = MatcherConfig::default();
        assert_eq!(
            config.keyword_overlap_threshold,
            DEFAULT_KEYWORD_OVERLAP_THRESHOLD
        );
        assert_eq!(
            config.min_keyword_token_length,
            DEFAULT_MIN_KEYWORD_TOKEN_LENGTH
        );
    }

    #[test]
    fn test_from_env_overrides_and_rejects_out_of_range() {
        env::set_var("OJ_KEYWORD_OVERLAP_THRESHOLD", "0.85");
        env::set_var("OJ_MIN_KEYWORD_TOKEN_LENGTH", "4");
        let config = MatcherConfig::from_env();
        assert_eq!(config.keyword_overlap_threshold, 0.85);
        assert_eq!(config.min_keyword_token_length, 4);

        env::set_var("OJ_KEYWORD_OVERLAP_THRESHOLD", "7.5");
        env::set_var("OJ_MIN_KEYWORD_TOKEN_LENGTH", "zero");
        let config = MatcherConfig::from_env();
        assert_eq!(
            config.keyword_overlap_threshold,
            DEFAULT_KEYWORD_OVERLAP_THRESHOLD
        );
        assert_eq!(
            config.min_keyword_token_length,
            DEFAULT_MIN_KEYWORD_TOKEN_LENGTH
        );

        env::remove_var("OJ_KEYWORD_OVERLAP_THRESHOLD");
        env::remove_var("OJ_MIN_KEYWORD_TOKEN_LENGTH");
    }
}
