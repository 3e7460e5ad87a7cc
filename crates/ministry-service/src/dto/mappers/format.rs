//! Display text helpers used by the response mappers.
//!
//! Zero is treated the same as a missing value for every duration and
//! count helper. Rounding is half-up on the scaled value.

use chrono::{DateTime, SecondsFormat, Utc};
use ministry_core::{ApestDimension, ApestScores};

/// `2024-01-15T10:30:00.000Z`. Sub-millisecond precision is kept, so the
/// text always parses back to the same instant.
pub fn to_iso_string(timestamp: &DateTime<Utc>) -> String {
    let format = if timestamp.timestamp_subsec_nanos() % 1_000_000 == 0 {
        SecondsFormat::Millis
    } else {
        SecondsFormat::AutoSi
    };
    timestamp.to_rfc3339_opts(format, true)
}

/// Parse NUMERIC column text. Empty, malformed or non-finite text yields `None`.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn plural(count: i32, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// `"45 minutes"`, `"2 hours"`, `"1h 30m"`
pub fn format_duration(minutes: Option<i32>) -> Option<String> {
    let minutes = minutes.filter(|m| *m != 0)?;

    if minutes < 60 {
        return Some(plural(minutes, "minute"));
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining == 0 {
        Some(plural(hours, "hour"))
    } else {
        Some(format!("{hours}h {remaining}m"))
    }
}

/// `"850ms"`, `"12s"`, `"2m"`, `"2m 5s"`
pub fn format_processing_time(milliseconds: Option<i32>) -> Option<String> {
    let milliseconds = milliseconds.filter(|ms| *ms != 0)?;

    if milliseconds < 1000 {
        return Some(format!("{milliseconds}ms"));
    }

    let seconds = milliseconds / 1000;
    if seconds < 60 {
        return Some(format!("{seconds}s"));
    }

    let minutes = seconds / 60;
    let remaining = seconds % 60;
    if remaining == 0 {
        Some(format!("{minutes}m"))
    } else {
        Some(format!("{minutes}m {remaining}s"))
    }
}

/// `"500 tokens"`, `"2K tokens"`, `"1.5K tokens"`.
///
/// The decimal digit is the truncated hundreds of the remainder.
pub fn format_token_count(tokens: Option<i32>) -> String {
    let tokens = match tokens {
        Some(t) if t != 0 => t,
        _ => return "0 tokens".to_string(),
    };

    if tokens < 1000 {
        return format!("{tokens} tokens");
    }

    let thousands = tokens / 1000;
    let remaining = tokens % 1000;
    if remaining == 0 {
        format!("{thousands}K tokens")
    } else {
        format!("{thousands}.{}K tokens", remaining / 100)
    }
}

/// Decimal score text as a whole percentage: `"0.856"` becomes `"86%"`.
pub fn format_score(score: Option<&str>) -> Option<String> {
    let value = parse_decimal(score?)?;
    Some(format!("{}%", round_half_up(value * 100.0)))
}

/// `"30 seconds"`, `"2 minutes"`, `"1m 30s"`
pub fn format_response_time(seconds: Option<i32>) -> Option<String> {
    let seconds = seconds.filter(|s| *s != 0)?;

    if seconds < 60 {
        return Some(plural(seconds, "second"));
    }

    let minutes = seconds / 60;
    let remaining = seconds % 60;
    if remaining == 0 {
        Some(plural(minutes, "minute"))
    } else {
        Some(format!("{minutes}m {remaining}s"))
    }
}

/// `total / max` as a rounded percentage, `None` when either side is missing or zero.
pub fn calculate_score_percentage(total: Option<i32>, max: Option<i32>) -> Option<i64> {
    let total = total.filter(|t| *t != 0)?;
    let max = max.filter(|m| *m != 0)?;
    Some(round_half_up(f64::from(total) / f64::from(max) * 100.0))
}

/// `"7 min read"`
pub fn format_reading_time(minutes: Option<i32>) -> String {
    match minutes {
        Some(m) if m != 0 => format!("{m} min read"),
        _ => "0 min read".to_string(),
    }
}

/// `"950 views"`, `"13K views"`, `"2M views"`
pub fn format_view_count(count: Option<i32>) -> String {
    let count = match count {
        Some(c) if c != 0 => c,
        _ => return "0 views".to_string(),
    };

    if count < 1000 {
        format!("{count} views")
    } else if count < 1_000_000 {
        format!("{}K views", round_half_up(f64::from(count) / 1000.0))
    } else {
        format!("{}M views", round_half_up(f64::from(count) / 1_000_000.0))
    }
}

/// Upper-case the first character only.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Highest-scoring dimension; the first maximum in declared order wins.
pub fn primary_apest_dimension(scores: &ApestScores) -> ApestDimension {
    scores.primary_dimension()
}

/// `"Primary: Prophetic"`
pub fn format_apest_relevance(scores: &ApestScores) -> String {
    format!("Primary: {}", primary_apest_dimension(scores).display_name())
}
