use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use regex::Captures;

use crate::patterns::{self, DateShape};

/// Resolves the message's date (and time-of-day, when one is present) to
/// epoch milliseconds. A date pattern that matches structurally but carries
/// out-of-range values is a non-match; the walk continues and `now` is the
/// fallback when every pattern misses.
///
/// A dated message with no time-of-day resolves to local midnight, so
/// re-parsing identical text yields an identical timestamp.
pub fn timestamp(text: &str, now: DateTime<Local>) -> i64 {
    let date = patterns::DATES
        .iter()
        .find_map(|(pattern, shape)| resolve_date(&pattern.captures(text)?, *shape));

    match date {
        Some(date) => {
            let time = time_of_day(text).unwrap_or(NaiveTime::MIN);
            resolve_millis(date.and_time(time), now)
        }
        None => now.timestamp_millis(),
    }
}

/// Epoch milliseconds for a naive local datetime. Falls back to `now` for
/// instants that do not exist in the local timezone.
pub(crate) fn resolve_millis(datetime: NaiveDateTime, now: DateTime<Local>) -> i64 {
    Local
        .from_local_datetime(&datetime)
        .earliest()
        .map(|resolved| resolved.timestamp_millis())
        .unwrap_or_else(|| now.timestamp_millis())
}

fn resolve_date(caps: &Captures<'_>, shape: DateShape) -> Option<NaiveDate> {
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = match shape {
        DateShape::Numeric => caps[2].parse().ok()?,
        DateShape::MonthName => month_number(&caps[2])?,
    };
    let mut year: i32 = caps[3].parse().ok()?;
    if year < 100 {
        year += 2000;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(token: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];

    let token = token.to_lowercase();
    MONTHS
        .iter()
        .position(|month| *month == token)
        .map(|index| index as u32 + 1)
}

fn time_of_day(text: &str) -> Option<NaiveTime> {
    patterns::TIME_OF_DAY.first(text, |caps| {
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        NaiveTime::from_hms_opt(hour, minute, 0)
    })
}
