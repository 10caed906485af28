//! Proleptic Gregorian calendar helpers.
//!
//! Everything here works on plain integers so that out-of-range input can be
//! checked instead of panicking. Epoch day arithmetic follows Howard Hinnant's
//! `days_from_civil` / `civil_from_days` algorithms.

pub const SECONDS_PER_DAY: i64 = 86_400;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Day names starting with Sunday (index 0), as PHP's `w` counts them.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` for a month outside 1..=12.
pub fn days_in_month(year: i64, month: i64) -> Option<i64> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(if is_leap_year(year) { 29 } else { 28 }),
        _ => None,
    }
}

/// True if the triple names a real calendar date (PHP `checkdate` semantics:
/// year must be within 1..=32767).
///
/// ```
/// use calendar_picker::calendar::checkdate;
/// assert!(checkdate(2024, 2, 29));
/// assert!(!checkdate(2023, 2, 29));
/// assert!(!checkdate(2024, 13, 1));
/// ```
pub fn checkdate(year: i64, month: i64, day: i64) -> bool {
    if !(1..=32_767).contains(&year) {
        return false;
    }
    match days_in_month(year, month) {
        Some(days) => (1..=days).contains(&day),
        None => false,
    }
}

/// Days since 1970-01-01 for a (valid) civil date.
pub fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
pub fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Day of week, 0 = Sunday.
pub fn weekday(year: i64, month: i64, day: i64) -> i64 {
    // 1970-01-01 was a Thursday
    (days_from_civil(year, month, day) + 4).rem_euclid(7)
}

/// Zero based day of the year.
pub fn day_of_year(year: i64, month: i64, day: i64) -> i64 {
    days_from_civil(year, month, day) - days_from_civil(year, 1, 1)
}

/// Month and day for a zero based day of the year, `None` if it overflows the year.
pub fn from_day_of_year(year: i64, ordinal: i64) -> Option<(i64, i64)> {
    let len = if is_leap_year(year) { 366 } else { 365 };
    if !(0..len).contains(&ordinal) {
        return None;
    }
    let (_, month, day) = civil_from_days(days_from_civil(year, 1, 1) + ordinal);
    Some((month, day))
}

/// English ordinal suffix for a day of the month (`st`, `nd`, `rd`, `th`).
pub fn ordinal_suffix(day: i64) -> &'static str {
    match (day % 10, day % 100) {
        (1, r) if r != 11 => "st",
        (2, r) if r != 12 => "nd",
        (3, r) if r != 13 => "rd",
        _ => "th",
    }
}
