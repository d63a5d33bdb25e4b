//! Natural-language time expression parsing.
//!
//! Resolves human-friendly expressions against an explicit anchor instant:
//! - Time of day: `15:00`, `5:45am`, `3:30 pm`, `noon`, `midnight`
//! - Relative words: `now`, `today`, `tomorrow`, `yesterday`
//! - Relative periods: `next week`, `last month`, `next year`
//! - Weekdays: `monday`, `next friday`, `last tuesday`
//! - Relative offsets: `in 5 minutes`, `3 weeks ago`, `an hour from now`
//! - Month + day: `15 dec`, `march 15th` (next occurrence)
//! - Date followed by time: `tomorrow noon`, `next friday 8pm`, `dec 24 18:00`
//!
//! Everything resolves in the local time zone: a bare time lands on the
//! anchor's calendar date, a bare date on local midnight. Unrecognized
//! input resolves to `None`, never an error.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime, TimeZone, Weekday};
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

use crate::types::ResolvedMoment;

/// Regex patterns for query parsing
fn patterns() -> &'static QueryPatterns {
    static PATTERNS: OnceLock<QueryPatterns> = OnceLock::new();
    PATTERNS.get_or_init(QueryPatterns::new)
}

struct QueryPatterns {
    // 15:00, 15:00:30, 5:45
    time_24h: Regex,
    // 5:45am, 3:30 pm, 9am, 12PM
    time_12h: Regex,

    // "<date expression> [at] <time expression>"
    date_with_time: Regex,

    // "in 2 days", "3 weeks ago", "an hour from now"
    in_n_units: Regex,
    n_units_ago: Regex,
    one_unit_offset: Regex,

    // "15 dec", "dec 15", "march 15th"
    day_month: Regex,
    month_day: Regex,
}

impl QueryPatterns {
    fn new() -> Self {
        Self {
            // 15:00 or 15:00:30
            time_24h: Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2}))?$").unwrap(),
            // 9am, 5:45am, 3:30 PM
            time_12h: Regex::new(r"(?i)^(\d{1,2})(?::(\d{2}))?\s*(am|pm)$").unwrap(),

            // "tomorrow noon", "next friday at 8pm", "dec 24 18:00"
            date_with_time: Regex::new(
                r"(?i)^(.+?)\s+(?:at\s+)?(noon|midnight|\d{1,2}:\d{2}(?::\d{2})?\s*(?:am|pm)?|\d{1,2}\s*(?:am|pm))$",
            )
            .unwrap(),

            // "in 2 days", "in 30 seconds"
            in_n_units: Regex::new(
                r"(?i)^in\s+(\d+)\s+(seconds?|minutes?|hours?|days?|weeks?|months?|years?)$",
            )
            .unwrap(),
            // "2 days ago", "3 weeks ago"
            n_units_ago: Regex::new(
                r"(?i)^(\d+)\s+(seconds?|minutes?|hours?|days?|weeks?|months?|years?)\s+ago$",
            )
            .unwrap(),
            // "a week ago", "an hour from now", "one month ago"
            one_unit_offset: Regex::new(
                r"(?i)^(?:a|an|one)\s+(second|minute|hour|day|week|month|year)\s+(ago|from\s+now)$",
            )
            .unwrap(),

            // "15 dec", "15 december", "15th dec"
            day_month: Regex::new(
                r"(?i)^(\d{1,2})(?:st|nd|rd|th)?\s+(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)$",
            )
            .unwrap(),
            // "dec 15", "december 15", "dec 15th"
            month_day: Regex::new(
                r"(?i)^(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\s+(\d{1,2})(?:st|nd|rd|th)?$",
            )
            .unwrap(),
        }
    }
}

/// Resolve a free-text query against `anchor`.
///
/// Returns `None` for anything the cascade does not recognize.
pub fn resolve(input: &str, anchor: DateTime<Local>) -> Option<ResolvedMoment> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        trace!("natural: rejected - empty input");
        return None;
    }

    // Try each parser in order of specificity
    let result = parse_now(trimmed, anchor)
        .or_else(|| parse_time_only(trimmed, anchor))
        .or_else(|| parse_date_with_time(trimmed, anchor))
        .or_else(|| parse_relative_offset(trimmed, anchor))
        .or_else(|| parse_date_only(trimmed, anchor));

    match &result {
        Some(moment) => debug!(
            input = trimmed,
            resolved = %moment.datetime.to_rfc3339(),
            description = %moment.description,
            "natural: matched"
        ),
        None => trace!(input = trimmed, "natural: no match"),
    }

    result
}

/// "now" resolves to the anchor itself, not to a rounded moment.
fn parse_now(input: &str, anchor: DateTime<Local>) -> Option<ResolvedMoment> {
    if input.eq_ignore_ascii_case("now") {
        Some(ResolvedMoment {
            datetime: anchor,
            description: "Current time".to_string(),
        })
    } else {
        None
    }
}

/// A bare time of day lands on the anchor's calendar date.
fn parse_time_only(input: &str, anchor: DateTime<Local>) -> Option<ResolvedMoment> {
    let (time, desc) = parse_time_part(input)?;
    let datetime = at_local(anchor.date_naive(), time)?;
    Some(ResolvedMoment {
        datetime,
        description: format!("Time: {}", desc),
    })
}

/// A bare date expression lands on local midnight.
fn parse_date_only(input: &str, anchor: DateTime<Local>) -> Option<ResolvedMoment> {
    let (date, desc) = parse_date_part(input, anchor)?;
    let datetime = at_local(date, NaiveTime::MIN)?;
    Some(ResolvedMoment {
        datetime,
        description: format!("{} (start of day)", desc),
    })
}

/// A date expression followed by a time expression, e.g. "tomorrow noon".
fn parse_date_with_time(input: &str, anchor: DateTime<Local>) -> Option<ResolvedMoment> {
    let caps = patterns().date_with_time.captures(input)?;
    let (date, date_desc) = parse_date_part(caps[1].trim(), anchor)?;
    let (time, time_desc) = parse_time_part(caps[2].trim())?;
    let datetime = at_local(date, time)?;
    Some(ResolvedMoment {
        datetime,
        description: format!("{} at {}", date_desc, time_desc),
    })
}

/// Parse a time expression: noon, midnight, 24-hour, or 12-hour clock.
fn parse_time_part(input: &str) -> Option<(NaiveTime, String)> {
    let patterns = patterns();
    let trimmed = input.trim();

    if trimmed.eq_ignore_ascii_case("noon") {
        return Some((NaiveTime::from_hms_opt(12, 0, 0)?, "noon".to_string()));
    }
    if trimmed.eq_ignore_ascii_case("midnight") {
        return Some((NaiveTime::MIN, "midnight".to_string()));
    }

    // 12-hour clock: 9am, 5:45pm
    if let Some(caps) = patterns.time_12h.captures(trimmed) {
        let mut hour: u32 = caps[1].parse().ok()?;
        let min: u32 = caps.get(2).map_or(Some(0), |m| m.as_str().parse().ok())?;
        let pm = caps[3].eq_ignore_ascii_case("pm");

        if !(1..=12).contains(&hour) || min >= 60 {
            return None;
        }
        if pm && hour != 12 {
            hour += 12;
        } else if !pm && hour == 12 {
            hour = 0;
        }
        return Some((NaiveTime::from_hms_opt(hour, min, 0)?, trimmed.to_string()));
    }

    // 24-hour clock: 15:00, 15:00:30
    if let Some(caps) = patterns.time_24h.captures(trimmed) {
        let hour: u32 = caps[1].parse().ok()?;
        let min: u32 = caps[2].parse().ok()?;
        let sec: u32 = caps.get(3).map_or(Some(0), |m| m.as_str().parse().ok())?;
        if hour >= 24 || min >= 60 || sec >= 60 {
            return None;
        }
        return Some((NaiveTime::from_hms_opt(hour, min, sec)?, trimmed.to_string()));
    }

    None
}

/// Parse a date expression into a calendar date relative to the anchor.
fn parse_date_part(input: &str, anchor: DateTime<Local>) -> Option<(NaiveDate, String)> {
    let today = anchor.date_naive();
    let lower = input.trim().to_lowercase();

    match lower.as_str() {
        "today" => return Some((today, "Today".to_string())),
        "tomorrow" => return Some((today + Duration::days(1), "Tomorrow".to_string())),
        "yesterday" => return Some((today - Duration::days(1), "Yesterday".to_string())),
        _ => {}
    }

    parse_relative_period(&lower, today)
        .or_else(|| parse_weekday(&lower, today))
        .or_else(|| parse_month_day(&lower, today))
}

/// Relative periods: next week, last month, next year
fn parse_relative_period(lower: &str, today: NaiveDate) -> Option<(NaiveDate, String)> {
    let (offset, desc) = match lower {
        "next week" => (Duration::weeks(1), "Next week"),
        "last week" => (Duration::weeks(-1), "Last week"),
        "next month" => (Duration::days(30), "Next month"), // Approximate
        "last month" => (Duration::days(-30), "Last month"),
        "next year" => (Duration::days(365), "Next year"),
        "last year" => (Duration::days(-365), "Last year"),
        _ => return None,
    };
    Some((today + offset, desc.to_string()))
}

/// Weekdays: monday, next friday, last tuesday
fn parse_weekday(lower: &str, today: NaiveDate) -> Option<(NaiveDate, String)> {
    let (prefix, weekday_str) = if let Some(rest) = lower.strip_prefix("next ") {
        ("next", rest)
    } else if let Some(rest) = lower.strip_prefix("last ") {
        ("last", rest)
    } else if let Some(rest) = lower.strip_prefix("this ") {
        ("this", rest)
    } else {
        ("", lower)
    };

    let target_weekday = match weekday_str.trim() {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };

    let current_num = today.weekday().num_days_from_monday() as i64;
    let target_num = target_weekday.num_days_from_monday() as i64;

    let days_offset = match prefix {
        "next" => {
            // Next week's occurrence
            let diff = target_num - current_num;
            (if diff <= 0 { diff + 7 } else { diff }) + 7
        }
        "last" => {
            // Previous occurrence
            let diff = target_num - current_num;
            if diff >= 0 {
                diff - 7
            } else {
                diff
            }
        }
        "this" => {
            // This week (past or future)
            target_num - current_num
        }
        _ => {
            // Next occurrence (a bare weekday never means today)
            let diff = target_num - current_num;
            if diff < 0 {
                diff + 7
            } else if diff == 0 {
                7
            } else {
                diff
            }
        }
    };

    let prefix_display = if prefix.is_empty() {
        "Next".to_string()
    } else {
        let mut chars = prefix.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => prefix.to_string(),
        }
    };

    Some((
        today + Duration::days(days_offset),
        format!("{} {}", prefix_display, weekday_str),
    ))
}

/// Month + day: "15 dec", "dec 15", "march 15th" - the next occurrence.
fn parse_month_day(lower: &str, today: NaiveDate) -> Option<(NaiveDate, String)> {
    let patterns = patterns();

    let (day, month_str) = if let Some(caps) = patterns.day_month.captures(lower) {
        (caps[1].parse::<u32>().ok()?, caps[2].to_string())
    } else if let Some(caps) = patterns.month_day.captures(lower) {
        (caps[2].parse::<u32>().ok()?, caps[1].to_string())
    } else {
        return None;
    };

    if !(1..=31).contains(&day) {
        return None;
    }

    let month = month_name_to_number(&month_str)?;

    // If the date has passed this year, use next year
    let mut year = today.year();
    if NaiveDate::from_ymd_opt(year, month, day)? < today {
        year += 1;
    }

    Some((
        NaiveDate::from_ymd_opt(year, month, day)?,
        format!("{} {}", month_number_to_name(month), day),
    ))
}

/// Relative offsets: "in 5 minutes", "3 weeks ago", "an hour from now"
fn parse_relative_offset(input: &str, anchor: DateTime<Local>) -> Option<ResolvedMoment> {
    let patterns = patterns();
    let lower = input.trim().to_lowercase();

    if let Some(caps) = patterns.in_n_units.captures(&lower) {
        let n: i64 = caps[1].parse().ok()?;
        let unit = &caps[2];
        let offset = unit_to_duration(unit, n)?;
        return Some(ResolvedMoment {
            datetime: anchor + offset,
            description: format!("In {} {}", n, unit),
        });
    }

    if let Some(caps) = patterns.n_units_ago.captures(&lower) {
        let n: i64 = caps[1].parse().ok()?;
        let unit = &caps[2];
        let offset = unit_to_duration(unit, n)?;
        return Some(ResolvedMoment {
            datetime: anchor - offset,
            description: format!("{} {} ago", n, unit),
        });
    }

    if let Some(caps) = patterns.one_unit_offset.captures(&lower) {
        let unit = &caps[1];
        let offset = unit_to_duration(unit, 1)?;
        let (datetime, desc) = if caps[2].starts_with("ago") {
            (anchor - offset, format!("A {} ago", unit))
        } else {
            (anchor + offset, format!("A {} from now", unit))
        };
        return Some(ResolvedMoment {
            datetime,
            description: desc,
        });
    }

    None
}

/// Convert unit string to Duration
fn unit_to_duration(unit: &str, n: i64) -> Option<Duration> {
    let unit_lower = unit.to_lowercase();
    let base = if unit_lower.starts_with("second") {
        Duration::seconds(1)
    } else if unit_lower.starts_with("minute") {
        Duration::minutes(1)
    } else if unit_lower.starts_with("hour") {
        Duration::hours(1)
    } else if unit_lower.starts_with("day") {
        Duration::days(1)
    } else if unit_lower.starts_with("week") {
        Duration::weeks(1)
    } else if unit_lower.starts_with("month") {
        Duration::days(30) // Approximate
    } else if unit_lower.starts_with("year") {
        Duration::days(365)
    } else {
        return None;
    };

    Some(base * n as i32)
}

/// Convert month name to number (1-12)
fn month_name_to_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    match lower.as_str() {
        s if s.starts_with("jan") => Some(1),
        s if s.starts_with("feb") => Some(2),
        s if s.starts_with("mar") => Some(3),
        s if s.starts_with("apr") => Some(4),
        "may" => Some(5),
        s if s.starts_with("jun") => Some(6),
        s if s.starts_with("jul") => Some(7),
        s if s.starts_with("aug") => Some(8),
        s if s.starts_with("sep") => Some(9),
        s if s.starts_with("oct") => Some(10),
        s if s.starts_with("nov") => Some(11),
        s if s.starts_with("dec") => Some(12),
        _ => None,
    }
}

/// Convert month number to full name
fn month_number_to_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Resolve a naive local date + time to an instant. Nonexistent or
/// ambiguous wall-clock times (DST transitions) resolve to `None`.
fn at_local(date: NaiveDate, time: NaiveTime) -> Option<DateTime<Local>> {
    Local.from_local_datetime(&date.and_time(time)).single()
}
