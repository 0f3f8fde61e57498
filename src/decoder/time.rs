//! Julian-day/offset time model
//!
//! The SAME issue-time segment is `DDDHHMM`: a Julian day of year plus a
//! UTC hour and minute. Reconstructing a calendar timestamp from it means
//! walking forward from December 31 of the previous year, which correctly
//! lands on day `julianDay` of the target year while letting the calendar
//! itself handle month boundaries (spec §9).
//!
//! Presentation intentionally mixes UTC wall-clock assignment with
//! locale-style formatting of that same wall clock (no further timezone
//! shift is applied) -- this is flagged in spec §9 as a deliberate behavior
//! to preserve, not a bug to fix.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::error::{Result, SameError};

/// `true` iff `year` is a leap year in the proleptic Gregorian calendar:
/// divisible by 4, not by 100 unless also by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The last valid Julian day of year for `year` (365, or 366 in a leap year).
pub fn max_julian_day(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Reconstruct the UTC wall-clock timestamp for day `julian_day` of `year`
/// at `hour:minute`. Validates `julian_day` against the year's length;
/// `hour`/`minute` are trusted to already be in range (the decoder only
/// ever calls this with digits parsed from a 7-digit segment, so `hour` is
/// 0..=99 and `minute` is 0..=99 structurally -- spec §3 notes minute is "by
/// convention" 00-59 but not enforced by the codec).
pub fn reconstruct(year: i32, julian_day: u32, hour: u32, minute: u32) -> Result<NaiveDateTime> {
    if julian_day < 1 || julian_day > max_julian_day(year) {
        return Err(SameError::DateTimeInvalid {
            detail: format!("julian day {julian_day} out of range for {year}"),
        });
    }

    let dec31_prior = NaiveDate::from_ymd_opt(year - 1, 12, 31).ok_or_else(|| SameError::DateTimeInvalid {
        detail: format!("cannot represent year {}", year - 1),
    })?;
    let date = dec31_prior + Duration::days(julian_day as i64);

    date.and_hms_opt(hour, minute, 0)
        .ok_or_else(|| SameError::DateTimeInvalid {
            detail: format!("invalid time {hour:02}:{minute:02}"),
        })
}

/// Render a timestamp as `"h:MM AM|PM on Month D"`: 12-hour clock, no
/// seconds, unpadded day-of-month, full month name. This is purely a
/// presentation format over whatever wall-clock values `reconstruct`
/// produced -- see the module doc for why no timezone conversion happens
/// here.
pub fn format_timing(dt: &NaiveDateTime) -> String {
    format!(
        "{}:{:02} {} on {} {}",
        hour12(dt.hour()),
        dt.minute(),
        if dt.hour() < 12 { "AM" } else { "PM" },
        dt.format("%B"),
        dt.day()
    )
}

fn hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}
