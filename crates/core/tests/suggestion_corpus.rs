//! Corpus tests for the suggest pipeline invariants.
//!
//! This module runs a table of representative queries and validates that:
//! 1. Parseable queries produce exactly seven suggestions in the fixed order
//! 2. All seven markup payloads share one epoch value and match the wire shape
//! 3. Unparseable queries produce nothing at all
//!
//! The goal is to catch regressions where a parser change breaks the
//! all-or-nothing contract or the markup invariants without any single
//! unit test noticing.

use chrono::{DateTime, Local, TimeZone};
use dstamp_core::{Dstamp, TimestampStyle};
use regex::Regex;

/// A corpus case: input string and whether it should resolve.
struct CorpusCase {
    input: &'static str,
    should_resolve: bool,
    description: &'static str,
}

const fn resolves(input: &'static str, desc: &'static str) -> CorpusCase {
    CorpusCase {
        input,
        should_resolve: true,
        description: desc,
    }
}

const fn rejected(input: &'static str, desc: &'static str) -> CorpusCase {
    CorpusCase {
        input,
        should_resolve: false,
        description: desc,
    }
}

const CORPUS: &[CorpusCase] = &[
    // Times of day
    resolves("5:45am", "12-hour time"),
    resolves("15:00", "24-hour time"),
    resolves("15:00:30", "24-hour time with seconds"),
    resolves("9pm", "bare 12-hour time"),
    resolves("noon", "noon keyword"),
    resolves("midnight", "midnight keyword"),
    // Relative words
    resolves("now", "anchor itself"),
    resolves("today", "start of today"),
    resolves("tomorrow", "start of tomorrow"),
    resolves("yesterday", "start of yesterday"),
    // Offsets
    resolves("in 5 minutes", "future offset"),
    resolves("in 2 hours", "future offset, hours"),
    resolves("3 days ago", "past offset"),
    resolves("a week from now", "single-unit future offset"),
    resolves("an hour ago", "single-unit past offset"),
    // Weekdays and periods
    resolves("friday", "bare weekday"),
    resolves("next monday", "next-prefixed weekday"),
    resolves("last tue", "abbreviated weekday"),
    resolves("next week", "relative period"),
    // Dates
    resolves("dec 15", "month day"),
    resolves("15 dec", "day month"),
    resolves("march 15th", "ordinal day"),
    // Combined date + time
    resolves("tomorrow noon", "date word with time keyword"),
    resolves("tomorrow at 5pm", "date word with 'at'"),
    resolves("next friday 8pm", "weekday with time"),
    resolves("dec 24 18:00", "month day with 24-hour time"),
    // Unparseable input degrades to no suggestions
    rejected("", "empty string"),
    rejected("   ", "whitespace only"),
    rejected("?!.,;", "punctuation"),
    rejected("hello world", "plain words"),
    rejected("12345678901234567890", "absurd number"),
    rejected("100 years ago", "resolves before the Unix epoch"),
];

/// Thursday, August 6, 2026, noon local time.
fn anchor() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
}

#[test]
fn corpus_all_or_nothing() {
    let dstamp = Dstamp::new();
    for case in CORPUS {
        let suggestions = dstamp.suggest_at(case.input, anchor());
        if case.should_resolve {
            assert_eq!(
                suggestions.len(),
                7,
                "{} ({:?}) should yield seven suggestions, got {}",
                case.description,
                case.input,
                suggestions.len()
            );
        } else {
            assert!(
                suggestions.is_empty(),
                "{} ({:?}) should yield nothing, got {:?}",
                case.description,
                case.input,
                suggestions
            );
        }
    }
}

#[test]
fn corpus_markup_wire_shape() {
    let dstamp = Dstamp::new();
    let wire = Regex::new(r"^<t:\d+:[RtTdDfF]>$").unwrap();

    for case in CORPUS.iter().filter(|c| c.should_resolve) {
        for suggestion in dstamp.suggest_at(case.input, anchor()) {
            assert!(
                wire.is_match(&suggestion.markup),
                "{:?} produced malformed markup {:?}",
                case.input,
                suggestion.markup
            );
        }
    }
}

#[test]
fn corpus_labels_and_codes_in_fixed_order() {
    let dstamp = Dstamp::new();

    for case in CORPUS.iter().filter(|c| c.should_resolve) {
        let suggestions = dstamp.suggest_at(case.input, anchor());
        for (suggestion, style) in suggestions.iter().zip(TimestampStyle::ALL) {
            assert_eq!(suggestion.label, style.label(), "label order for {:?}", case.input);
            assert!(
                suggestion.markup.ends_with(&format!(":{}>", style.code())),
                "code order for {:?}: {:?} should end with :{}>",
                case.input,
                suggestion.markup,
                style.code()
            );
        }
    }
}

#[test]
fn corpus_shared_epoch_per_query() {
    let dstamp = Dstamp::new();
    let epoch_re = Regex::new(r"^<t:(\d+):").unwrap();

    for case in CORPUS.iter().filter(|c| c.should_resolve) {
        let suggestions = dstamp.suggest_at(case.input, anchor());
        let epochs: Vec<&str> = suggestions
            .iter()
            .map(|s| epoch_re.captures(&s.markup).unwrap().get(1).unwrap().as_str())
            .collect();
        assert!(
            epochs.windows(2).all(|w| w[0] == w[1]),
            "{:?} produced diverging epochs: {:?}",
            case.input,
            epochs
        );
    }
}

#[test]
fn corpus_is_idempotent() {
    let dstamp = Dstamp::new();
    for case in CORPUS {
        let first = dstamp.suggest_at(case.input, anchor());
        let second = dstamp.suggest_at(case.input, anchor());
        assert_eq!(first, second, "{:?} not idempotent", case.input);
    }
}

#[test]
fn time_only_query_resolves_on_anchor_date_in_local_zone() {
    let dstamp = Dstamp::new();
    let suggestions = dstamp.suggest_at("5:45am", anchor());
    let expected = Local.with_ymd_and_hms(2026, 8, 6, 5, 45, 0).unwrap();

    assert_eq!(
        suggestions[0].markup,
        format!("<t:{}:R>", expected.timestamp()),
        "epoch should be the local-time conversion of 5:45am on the anchor's date"
    );
}

#[test]
fn relative_preview_matches_discord_phrasing() {
    let dstamp = Dstamp::new();

    let future = dstamp.suggest_at("in 5 minutes", anchor());
    assert_eq!(future[0].preview, "in 5 minutes");
    assert!(!future[0].preview.contains("from now"));

    let past = dstamp.suggest_at("5 minutes ago", anchor());
    assert_eq!(past[0].preview, "5 minutes ago");
}
