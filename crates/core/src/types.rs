//! Core types for dstamp.
//!
//! These types carry a query's resolved moment and the suggestions built
//! from it. Everything here is created fresh per query and never cached.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The concrete point in time a query resolved to, in the local zone.
///
/// A time-of-day query ("5:45am") resolves on the anchor's calendar date;
/// date-word queries ("tomorrow") resolve to local midnight.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMoment {
    /// The resolved instant.
    pub datetime: DateTime<Local>,
    /// Short description of what was recognized (e.g. "Time: 5:45am").
    pub description: String,
}

/// One copyable suggestion for a resolved moment.
///
/// Exactly seven of these are produced per successful query, one per
/// Discord timestamp style, all sharing the same epoch value inside
/// `markup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Display label (e.g. "Short time").
    pub label: String,
    /// Rendered preview of what Discord will show (e.g. "5:45 PM").
    pub preview: String,
    /// The copyable payload: `<t:{epoch}:{code}>`.
    pub markup: String,
}

/// Per-query formatting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Rounding threshold for relative-phrase humanization, in (0, 1].
    ///
    /// 0.85 rather than the humanizer-conventional 0.75 so that a moment
    /// parsed from "in 5 minutes" still reads "in 5 minutes" after the
    /// microseconds it took to parse it.
    pub humanize_precision: f64,
}

impl SuggestConfig {
    /// Default humanize rounding threshold.
    pub const DEFAULT_PRECISION: f64 = 0.85;
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            humanize_precision: Self::DEFAULT_PRECISION,
        }
    }
}
