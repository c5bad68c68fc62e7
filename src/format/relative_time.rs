// ============================================================================
// Relative Time
// "x minutes ago" rendering for feed timestamps
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::fmt::{self, Write};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86_400.0;

/// Below this many seconds a timestamp reads as "just now".
const JUST_NOW_SECS: f64 = 30.0;

/// Digits of a Unix timestamp expressed in seconds (as opposed to millis).
const SECONDS_TIMESTAMP_DIGITS: usize = 10;

/// How long ago something happened, bucketed for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelativeTime {
    JustNow,
    MinutesAgo(u64),
    HoursAgo(u64),
    OneDayAgo,
    /// Older than two days; shown as a calendar time
    At(DateTime<Utc>),
}

impl RelativeTime {
    /// Bucket `then` relative to `now`. Future instants read as "just now".
    pub fn between(then: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff = (now - then).num_milliseconds() as f64 / 1000.0;

        if diff < JUST_NOW_SECS {
            RelativeTime::JustNow
        } else if diff < HOUR {
            RelativeTime::MinutesAgo((diff / MINUTE).ceil() as u64)
        } else if diff < DAY {
            RelativeTime::HoursAgo((diff / HOUR).ceil() as u64)
        } else if diff < 2.0 * DAY {
            RelativeTime::OneDayAgo
        } else {
            RelativeTime::At(then)
        }
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeTime::JustNow => f.write_str("刚刚"),
            RelativeTime::MinutesAgo(n) => write!(f, "{}分钟前", n),
            RelativeTime::HoursAgo(n) => write!(f, "{}小时前", n),
            RelativeTime::OneDayAgo => f.write_str("1天前"),
            RelativeTime::At(t) => write!(
                f,
                "{}月{}日{}时{}分",
                t.month(),
                t.day(),
                t.hour(),
                t.minute()
            ),
        }
    }
}

/// Read a Unix timestamp: ten digits means seconds, anything else millis.
pub fn timestamp_to_datetime(timestamp: i64) -> NumericResult<DateTime<Utc>> {
    let parsed = if timestamp.to_string().len() == SECONDS_TIMESTAMP_DIGITS {
        DateTime::from_timestamp(timestamp, 0)
    } else {
        DateTime::from_timestamp_millis(timestamp)
    };
    parsed.ok_or(NumericError::InvalidTimestamp(timestamp))
}

/// Render `timestamp` relative to `now`.
///
/// Anything older than two days is shown with `pattern` (chrono strftime
/// syntax) when given, otherwise as `{month}月{day}日{hour}时{minute}分`.
///
/// # Errors
/// - `InvalidTimestamp` if the timestamp is out of range
/// - `InvalidPattern` if `pattern` has an unknown specifier
pub fn format_time(
    timestamp: i64,
    now: DateTime<Utc>,
    pattern: Option<&str>,
) -> NumericResult<String> {
    let then = timestamp_to_datetime(timestamp)?;
    let relative = RelativeTime::between(then, now);

    match (&relative, pattern) {
        (RelativeTime::At(t), Some(pattern)) => {
            let mut out = String::new();
            write!(out, "{}", t.format(pattern))
                .map_err(|_| NumericError::InvalidPattern(pattern.to_string()))?;
            Ok(out)
        },
        _ => Ok(relative.to_string()),
    }
}
