//! dstamp Core
//!
//! Turn a natural-language time expression ("5:45am", "in 5 minutes",
//! "tomorrow noon") into Discord's timestamp markup (`<t:epoch:code>`),
//! with a rendered preview of each of the seven styles Discord supports.
//!
//! # Quick Start
//!
//! ```
//! use dstamp_core::Dstamp;
//!
//! let dstamp = Dstamp::new();
//!
//! // Seven suggestions, one per Discord timestamp style
//! let suggestions = dstamp.suggest("in 5 minutes");
//! assert_eq!(suggestions.len(), 7);
//!
//! // The first is the relative style; its markup is the copyable payload
//! assert_eq!(suggestions[0].label, "Relative");
//! assert_eq!(suggestions[0].preview, "in 5 minutes");
//! assert!(suggestions[0].markup.starts_with("<t:"));
//! assert!(suggestions[0].markup.ends_with(":R>"));
//! ```
//!
//! # Unparseable input
//!
//! ```
//! use dstamp_core::Dstamp;
//!
//! // Gibberish is not an error, it just yields no suggestions
//! assert!(Dstamp::new().suggest("certainly not a time").is_empty());
//! ```

pub mod humanize;
pub mod natural;
pub mod style;
pub mod suggest;
pub mod types;

pub use style::{ParseStyleError, TimestampStyle};
pub use types::{ResolvedMoment, Suggestion, SuggestConfig};

use chrono::{DateTime, Local};
use tracing::debug;

/// Main entry point - a configured suggestion generator.
pub struct Dstamp {
    config: SuggestConfig,
}

impl Dstamp {
    /// Create a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SuggestConfig::default(),
        }
    }

    /// Create a generator with custom configuration.
    #[must_use]
    pub fn with_config(config: SuggestConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    #[must_use]
    pub fn config(&self) -> SuggestConfig {
        self.config
    }

    /// Resolve `input` against the current local time and build suggestions.
    ///
    /// Returns an empty `Vec` when the input cannot be interpreted as a
    /// point in time.
    #[must_use]
    pub fn suggest(&self, input: &str) -> Vec<Suggestion> {
        self.suggest_at(input, Local::now())
    }

    /// Resolve `input` against an explicit anchor instant.
    ///
    /// This is a pure function of `(input, anchor)`: the same pair always
    /// yields the same suggestions, which is what tests and reproducible
    /// callers want.
    #[must_use]
    pub fn suggest_at(&self, input: &str, anchor: DateTime<Local>) -> Vec<Suggestion> {
        let Some(moment) = natural::resolve(input, anchor) else {
            return Vec::new();
        };

        // The markup payload is unsigned; a pre-1970 moment cannot be
        // represented, so it degrades to "no suggestions" like any other
        // unusable input.
        if moment.datetime.timestamp() < 0 {
            debug!(
                resolved = %moment.datetime.to_rfc3339(),
                "resolved moment predates the Unix epoch, dropping"
            );
            return Vec::new();
        }

        suggest::build_suggestions(&moment, anchor, self.config)
    }

    /// Resolve `input` without building suggestions.
    ///
    /// Useful for callers that only want to know what the query meant.
    #[must_use]
    pub fn resolve_at(&self, input: &str, anchor: DateTime<Local>) -> Option<ResolvedMoment> {
        natural::resolve(input, anchor)
    }
}

impl Default for Dstamp {
    fn default() -> Self {
        Self::new()
    }
}
