//! Resolution of `next <weekday> [at HH:MM]` phrases to absolute timestamps.
// Allow expect() on static regex patterns - these are guaranteed to compile
#![allow(clippy::expect_used)]

use chrono::{DateTime, Datelike, Days, NaiveTime, SecondsFormat, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Weekday names indexed Sunday = 0 through Saturday = 6.
pub const WEEKDAYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

static DAY_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)next\s+(\w+day)").expect("static regex: next weekday"));

static TIME_OF_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)at\s+(\d{1,2}):(\d{2})").expect("static regex: time of day"));

/// Resolve a relative date phrase against `now`.
///
/// The named weekday always lands strictly after `now`'s date, so "next
/// Tuesday" said on a Tuesday means a week later. Weekday arithmetic uses
/// `now`'s timezone; the result is an RFC 3339 UTC timestamp with
/// millisecond precision. Without a time-of-day the result is local
/// midnight.
///
/// Phrases that cannot be resolved (unknown weekday, out-of-range time, a
/// local time skipped by the timezone) are returned unchanged.
#[must_use]
pub fn resolve_relative_date<Tz: TimeZone>(phrase: &str, now: &DateTime<Tz>) -> String {
    resolve(phrase, now).unwrap_or_else(|| phrase.to_string())
}

fn resolve<Tz: TimeZone>(phrase: &str, now: &DateTime<Tz>) -> Option<String> {
    let day = DAY_NAME.captures(phrase)?.get(1)?.as_str().to_lowercase();
    let target = WEEKDAYS.iter().position(|name| day.contains(name))?;
    let target = u32::try_from(target).ok()?;
    let current = now.weekday().num_days_from_sunday();

    let mut days_ahead = (target + 7 - current) % 7;
    if days_ahead == 0 {
        days_ahead = 7;
    }

    let date = now
        .date_naive()
        .checked_add_days(Days::new(u64::from(days_ahead)))?;

    let time = match TIME_OF_DAY.captures(phrase) {
        Some(caps) => {
            let hour = caps.get(1)?.as_str().parse().ok()?;
            let minute = caps.get(2)?.as_str().parse().ok()?;
            NaiveTime::from_hms_opt(hour, minute, 0)?
        }
        None => NaiveTime::MIN,
    };

    let resolved = now
        .timezone()
        .from_local_datetime(&date.and_time(time))
        .earliest()?;

    Some(
        resolved
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}
