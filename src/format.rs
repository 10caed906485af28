//! Formatting [`DateTimeValue`]s back into display strings.
//!
//! [`DateFormatter`] is the rendering counterpart of
//! [`DateParser`](crate::parse::DateParser). The default [`PhpMaskFormatter`]
//! implements the PHP `date()` tokens listed on [`Specifier`]; `\` escapes the
//! next character and anything else is copied as-is.
//!
//! ```
//! use calendar_picker::{DateTimeValue, format::format_with_mask};
//! let value = DateTimeValue::new(2024, 1, 15, 12, 30, 45);
//! assert_eq!(format_with_mask("j. n. Y H:i:s", &value), "15. 1. 2024 12:30:45");
//! assert_eq!(format_with_mask(r"D, jS \of F", &value), "Mon, 15th of January");
//! ```

use std::fmt::Write;

use crate::{
    DateTimeValue,
    calendar::{self, DAY_NAMES, MONTH_NAMES},
    mask::{MaskToken, Specifier, tokenize},
};

pub trait DateFormatter {
    fn format(&self, mask: &str, value: &DateTimeValue) -> String;
}

impl<F> DateFormatter for F
where
    F: Fn(&str, &DateTimeValue) -> String,
{
    fn format(&self, mask: &str, value: &DateTimeValue) -> String {
        self(mask, value)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PhpMaskFormatter;

impl DateFormatter for PhpMaskFormatter {
    fn format(&self, mask: &str, value: &DateTimeValue) -> String {
        format_with_mask(mask, value)
    }
}

/// Format `value` with a PHP `date()` mask. `value` is expected to be valid.
pub fn format_with_mask(mask: &str, value: &DateTimeValue) -> String {
    let mut result = String::with_capacity(mask.len() * 2);
    for token in tokenize(mask) {
        match token {
            MaskToken::Specifier(spec) => push_specifier(&mut result, spec, value),
            MaskToken::Literal(ch) | MaskToken::Escaped(ch) => result.push(ch),
        }
    }
    result
}

fn push_specifier(out: &mut String, spec: Specifier, value: &DateTimeValue) {
    let year = i64::from(value.year);
    let month = i64::from(value.month);
    let day = i64::from(value.day);
    let weekday = value.weekday() as usize;
    let month_name = MONTH_NAMES
        .get((value.month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("");
    let hour12 = match value.hour % 12 {
        0 => 12,
        h => h,
    };
    let meridiem = if value.hour < 12 { "am" } else { "pm" };

    // writing into a String cannot fail
    let _ = match spec {
        Specifier::DayPadded => write!(out, "{:02}", value.day),
        Specifier::Day => write!(out, "{}", value.day),
        Specifier::DayNameShort => write!(out, "{}", &DAY_NAMES[weekday][..3]),
        Specifier::DayName => write!(out, "{}", DAY_NAMES[weekday]),
        Specifier::IsoWeekday => write!(out, "{}", if weekday == 0 { 7 } else { weekday }),
        Specifier::OrdinalSuffix => write!(out, "{}", calendar::ordinal_suffix(day)),
        Specifier::Weekday => write!(out, "{weekday}"),
        Specifier::DayOfYear => write!(out, "{}", value.day_of_year()),
        Specifier::MonthName => write!(out, "{month_name}"),
        Specifier::MonthNameShort => write!(out, "{}", month_name.get(..3).unwrap_or("")),
        Specifier::MonthPadded => write!(out, "{:02}", value.month),
        Specifier::Month => write!(out, "{}", value.month),
        Specifier::DaysInMonth => {
            write!(out, "{}", calendar::days_in_month(year, month).unwrap_or(0))
        }
        Specifier::LeapYear => write!(out, "{}", u8::from(calendar::is_leap_year(year))),
        Specifier::Year if year < 0 => write!(out, "-{:04}", -year),
        Specifier::Year => write!(out, "{year:04}"),
        Specifier::YearShort => write!(out, "{:02}", year.rem_euclid(100)),
        Specifier::MeridiemLower => write!(out, "{meridiem}"),
        Specifier::MeridiemUpper => write!(out, "{}", meridiem.to_ascii_uppercase()),
        Specifier::Hour12 => write!(out, "{hour12}"),
        Specifier::Hour24 => write!(out, "{}", value.hour),
        Specifier::Hour12Padded => write!(out, "{hour12:02}"),
        Specifier::Hour24Padded => write!(out, "{:02}", value.hour),
        Specifier::Minute => write!(out, "{:02}", value.minute),
        Specifier::Second => write!(out, "{:02}", value.second),
        Specifier::Micros => write!(out, "000000"),
        Specifier::Millis => write!(out, "000"),
        Specifier::Timestamp => write!(out, "{}", value.timestamp()),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_tokens() {
        let value = DateTimeValue::date(2024, 2, 29);
        assert_eq!(format_with_mask("d j D l N w z S", &value), "29 29 Thu Thursday 4 4 59 th");
        let sunday = DateTimeValue::date(2024, 3, 3);
        assert_eq!(format_with_mask("N w", &sunday), "7 0");
    }

    #[test]
    fn test_month_and_year_tokens() {
        let value = DateTimeValue::date(2023, 9, 5);
        assert_eq!(format_with_mask("F M m n t L Y y", &value), "September Sep 09 9 30 0 2023 23");
        let early = DateTimeValue::date(7, 1, 1);
        assert_eq!(format_with_mask("Y y", &early), "0007 07");
    }

    #[test]
    fn test_time_tokens() {
        let midnight = DateTimeValue::new(2024, 1, 1, 0, 5, 9);
        assert_eq!(format_with_mask("a A g G h H i s", &midnight), "am AM 12 0 12 00 05 09");
        let afternoon = DateTimeValue::new(2024, 1, 1, 13, 0, 0);
        assert_eq!(format_with_mask("g:i a", &afternoon), "1:00 pm");
        assert_eq!(format_with_mask("H:i:s.v u", &afternoon), "13:00:00.000 000000");
    }

    #[test]
    fn test_timestamp_token() {
        let value = DateTimeValue::new(2024, 1, 15, 12, 30, 45);
        assert_eq!(format_with_mask("U", &value), "1705321845");
    }

    #[test]
    fn test_escapes() {
        let value = DateTimeValue::date(2024, 1, 15);
        assert_eq!(format_with_mask(r"\Y\e\a\r: Y", &value), "Year: 2024");
    }

    #[test]
    fn test_closure_formatter() {
        let formatter = |_: &str, value: &DateTimeValue| value.year.to_string();
        assert_eq!(formatter.format("ignored", &DateTimeValue::date(1999, 1, 1)), "1999");
    }
}
