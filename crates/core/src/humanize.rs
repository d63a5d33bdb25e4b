//! Relative-time humanization with a configurable rounding threshold.
//!
//! Renders the distance between a moment and the anchor instant the way the
//! .NET Humanizer library does ("5 minutes from now", "an hour ago",
//! "yesterday"), then reconciles the future phrasing to Discord's ("in 5
//! minutes"). Discord never says "from now".

use chrono::{DateTime, Local};

/// Humanize `moment` relative to `anchor`.
///
/// `precision` is the rounding threshold in (0, 1]: a partial sub-unit
/// carries into the next unit once it reaches `precision` of that unit, so
/// at 0.85 a distance of 4 minutes 59 seconds reads "5 minutes".
///
/// Future distances end in " from now", past distances in " ago". The
/// one-day cases render as "tomorrow" and "yesterday", sub-second distances
/// as "now".
#[must_use]
pub fn humanize(moment: DateTime<Local>, anchor: DateTime<Local>, precision: f64) -> String {
    let delta = moment.signed_duration_since(anchor);
    let future = delta > chrono::Duration::zero();
    let ms = delta.num_milliseconds().abs();

    let millis = ms % 1000;
    let mut seconds = (ms / 1000) % 60;
    let mut minutes = (ms / 60_000) % 60;
    let mut hours = (ms / 3_600_000) % 24;
    let mut days = ms / 86_400_000;
    let mut months = 0i64;
    let mut years = 0i64;

    // Carry partial sub-units upward once they pass the threshold.
    if millis as f64 >= 999.0 * precision {
        seconds += 1;
    }
    if seconds as f64 >= 59.0 * precision {
        seconds = 0;
        minutes += 1;
    }
    if minutes as f64 >= 59.0 * precision {
        minutes = 0;
        hours += 1;
    }
    if hours as f64 >= 23.0 * precision {
        hours = 0;
        days += 1;
    }

    // Calendar units are approximated from days, as the humanizer does.
    if days as f64 >= 30.0 * precision && days <= 31 {
        months = 1;
    } else if days > 31 && (days as f64) < 365.0 * precision {
        months = ((days as f64) / 30.0).round() as i64;
    } else if days as f64 >= 365.0 * precision && days <= 366 {
        years = 1;
    } else if days > 366 {
        years = ((days as f64) / 365.0).round() as i64;
    }

    let phrase = if years > 0 {
        count_phrase(years, "one year", "years")
    } else if months > 0 {
        count_phrase(months, "one month", "months")
    } else if days == 1 {
        // Exact-boundary phrasing the humanizer uses for a single day.
        return if future { "tomorrow" } else { "yesterday" }.to_string();
    } else if days > 1 {
        format!("{} days", days)
    } else if hours > 0 {
        count_phrase(hours, "an hour", "hours")
    } else if minutes > 0 {
        count_phrase(minutes, "a minute", "minutes")
    } else if seconds > 0 {
        count_phrase(seconds, "one second", "seconds")
    } else {
        return "now".to_string();
    };

    if future {
        format!("{} from now", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

fn count_phrase(count: i64, singular: &str, plural_unit: &str) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        format!("{} {}", count, plural_unit)
    }
}

/// Humanize and reshape the phrase to match Discord's relative style.
///
/// Discord phrases future times as "in 5 minutes" where the humanizer says
/// "5 minutes from now": when that suffix is present it is stripped and
/// "in " prepended. Everything else passes through unmodified, which leaves
/// boundary phrases like "yesterday" as the humanizer wrote them even
/// though Discord itself would say "a day ago". That mismatch is a known,
/// accepted approximation.
#[must_use]
pub fn discord_relative(moment: DateTime<Local>, anchor: DateTime<Local>, precision: f64) -> String {
    let raw = humanize(moment, anchor, precision);
    match raw.strip_suffix(" from now") {
        Some(rest) => format!("in {}", rest),
        None => raw,
    }
}
