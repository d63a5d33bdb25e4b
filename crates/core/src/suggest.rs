//! Building the seven copyable suggestions for a resolved moment.
//!
//! Preview text mirrors what Discord renders for each style code in its
//! en-US locale, so what the user sees in the result list is what the
//! pasted markup will look like in chat.

use chrono::{DateTime, Local};

use crate::humanize;
use crate::style::TimestampStyle;
use crate::types::{ResolvedMoment, SuggestConfig, Suggestion};

/// Build one suggestion per timestamp style, in presentation order.
///
/// All seven share the epoch value of `moment`; the caller has already
/// validated that the epoch is non-negative.
#[must_use]
pub fn build_suggestions(
    moment: &ResolvedMoment,
    anchor: DateTime<Local>,
    config: SuggestConfig,
) -> Vec<Suggestion> {
    let epoch = moment.datetime.timestamp();

    TimestampStyle::ALL
        .iter()
        .map(|style| Suggestion {
            label: style.label().to_string(),
            preview: preview_text(*style, moment.datetime, anchor, config),
            markup: style.markup(epoch),
        })
        .collect()
}

/// Render what Discord will show for `style`.
fn preview_text(
    style: TimestampStyle,
    datetime: DateTime<Local>,
    anchor: DateTime<Local>,
    config: SuggestConfig,
) -> String {
    match style {
        TimestampStyle::Relative => {
            humanize::discord_relative(datetime, anchor, config.humanize_precision)
        }
        TimestampStyle::ShortTime => datetime.format("%-I:%M %p").to_string(),
        TimestampStyle::LongTime => datetime.format("%-I:%M:%S %p").to_string(),
        TimestampStyle::ShortDate => datetime.format("%-m/%-d/%Y").to_string(),
        TimestampStyle::LongDate => datetime.format("%B %-d, %Y").to_string(),
        TimestampStyle::LongDateShortTime => datetime.format("%B %-d, %Y %-I:%M %p").to_string(),
        TimestampStyle::LongDateWeekday => {
            datetime.format("%A, %B %-d, %Y %-I:%M %p").to_string()
        }
    }
}
