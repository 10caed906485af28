//! Parsing raw strings into [`Components`].
//!
//! [`DateParser`] is the strategy a picker uses to turn submitted text into
//! components. Any `Fn(&str, &str) -> Option<Components>` is a parser, so a
//! different date library or locale can be plugged in with a closure.
//!
//! The default [`PhpMaskParser`] understands the `DateTime::createFromFormat`
//! tokens. It does not normalize: `31. 4. 2024` parses into day 31 of month 4,
//! and rejecting it is left to the date rule.
//!
//! | Mask | Input |
//! |------|-------|
//! | `d`, `j` | day, 1–2 digits |
//! | `m`, `n` | month, 1–2 digits |
//! | `M`, `F` | English month name, short or long |
//! | `Y` | year, optional sign and 4 digits, 5 when exactly 5 digits follow |
//! | `y` | 2 digit year, 70–99 → 19xx, 00–69 → 20xx |
//! | `D`, `l` | day name, ignored |
//! | `S` | ordinal suffix, exactly 2 letters, ignored |
//! | `z` | zero based day of year |
//! | `G`, `H` | 24h hour, 1–2 digits |
//! | `g`, `h` | 12h hour, 1–2 digits, at most 12 |
//! | `a`, `A` | `am` / `pm`, exactly 2 letters |
//! | `i`, `s` | minutes / seconds, exactly 2 digits |
//! | `u`, `v` | micro / milliseconds, ignored |
//! | `U` | Unix timestamp |
//! | ` ` | zero or more whitespace |
//! | `#` | one of `;:/.,-()` |
//! | `?` | any character |
//! | `*` | anything up to the next separator or digit |
//! | `!` | reset every field to 1970-01-01 00:00:00 |
//! | `\|` | reset fields not parsed yet |
//! | `+` | allow trailing data |
//! | `\` | escape the next character |
//!
//! Fields the mask does not mention default to the epoch, never to the current clock.
//!
//! ```
//! use calendar_picker::{Components, parse::parse_with_mask};
//! assert_eq!(
//!     parse_with_mask("j. n. Y", "29. 2. 2024"),
//!     Some(Components::date_time(2024, 2, 29, 0, 0, 0))
//! );
//! assert_eq!(parse_with_mask("j. n. Y", "29/2/2024"), None);
//! ```

use crate::{
    Components, DateTimeValue,
    calendar::{self, DAY_NAMES, MONTH_NAMES},
    mask::{MaskToken, Specifier, tokenize},
};

pub trait DateParser {
    /// Parse `raw` according to the server-side `mask`, `None` if it does not match.
    fn parse(&self, mask: &str, raw: &str) -> Option<Components>;
}

impl<F> DateParser for F
where
    F: Fn(&str, &str) -> Option<Components>,
{
    fn parse(&self, mask: &str, raw: &str) -> Option<Components> {
        self(mask, raw)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PhpMaskParser;

impl DateParser for PhpMaskParser {
    fn parse(&self, mask: &str, raw: &str) -> Option<Components> {
        parse_with_mask(mask, raw)
    }
}

const SEPARATORS: &str = ";:/.,-()";

/// Parse `raw` against a PHP `createFromFormat` mask.
pub fn parse_with_mask(mask: &str, raw: &str) -> Option<Components> {
    let mut cursor = Cursor { rest: raw };
    let mut fields = Fields::default();
    let mut allow_trailing = false;

    for token in tokenize(mask) {
        match token {
            MaskToken::Specifier(spec) => fields.parse_specifier(spec, &mut cursor)?,
            MaskToken::Literal(' ') => cursor.skip_whitespace(),
            MaskToken::Literal('#') => {
                let ch = cursor.take_char()?;
                if !SEPARATORS.contains(ch) {
                    return None;
                }
            }
            MaskToken::Literal('?') => {
                cursor.take_char()?;
            }
            MaskToken::Literal('*') => cursor.skip_until_separator_or_digit(),
            MaskToken::Literal('!') => fields.reset_all(),
            MaskToken::Literal('|') => fields.reset_unset(),
            MaskToken::Literal('+') => allow_trailing = true,
            MaskToken::Literal(ch) | MaskToken::Escaped(ch) => cursor.expect_char(ch)?,
        }
    }

    if !cursor.rest.is_empty() && !allow_trailing {
        return None;
    }
    fields.resolve()
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    /// Between `min` and `max` ASCII digits.
    fn number(&mut self, min: usize, max: usize) -> Option<i64> {
        let len = self
            .rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if len < min {
            return None;
        }
        let (digits, rest) = self.rest.split_at(len);
        self.rest = rest;
        digits.parse().ok()
    }

    fn signed_number(&mut self, max: usize) -> Option<i64> {
        let negative = match self.rest.as_bytes().first() {
            Some(b'-') => {
                self.rest = &self.rest[1..];
                true
            }
            Some(b'+') => {
                self.rest = &self.rest[1..];
                false
            }
            _ => false,
        };
        let value = self.number(1, max)?;
        Some(if negative { -value } else { value })
    }

    /// A year: up to 5 digits when the digit run is no longer than that, else 4,
    /// so `Ymd` still splits `20240229`.
    fn year(&mut self) -> Option<i64> {
        let sign = usize::from(matches!(self.rest.as_bytes().first(), Some(b'-' | b'+')));
        let run = self.rest.as_bytes()[sign..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        self.signed_number(if run == 5 { 5 } else { 4 })
    }

    /// Exactly `len` ASCII letters.
    fn letters(&mut self, len: usize) -> Option<&'a str> {
        let word = self.rest.get(..len)?;
        if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        self.rest = &self.rest[len..];
        Some(word)
    }

    fn word(&mut self) -> &'a str {
        let len = self
            .rest
            .bytes()
            .take_while(u8::is_ascii_alphabetic)
            .count();
        let (word, rest) = self.rest.split_at(len);
        self.rest = rest;
        word
    }

    fn take_char(&mut self) -> Option<char> {
        let mut chars = self.rest.chars();
        let ch = chars.next()?;
        self.rest = chars.as_str();
        Some(ch)
    }

    fn expect_char(&mut self, expected: char) -> Option<()> {
        self.rest = self.rest.strip_prefix(expected)?;
        Some(())
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start_matches(char::is_whitespace);
    }

    fn skip_until_separator_or_digit(&mut self) {
        self.rest = self.rest.trim_start_matches(|ch: char| {
            !(ch == ' ' || SEPARATORS.contains(ch) || ch.is_ascii_digit())
        });
    }
}

#[derive(Default)]
struct Fields {
    year: Option<i64>,
    month: Option<i64>,
    day: Option<i64>,
    hour: Option<i64>,
    minute: Option<i64>,
    second: Option<i64>,
    day_of_year: Option<i64>,
    /// `Some(true)` for pm.
    pm: Option<bool>,
}

impl Fields {
    fn parse_specifier(&mut self, spec: Specifier, cursor: &mut Cursor<'_>) -> Option<()> {
        match spec {
            Specifier::DayPadded | Specifier::Day => self.day = Some(cursor.number(1, 2)?),
            Specifier::DayNameShort | Specifier::DayName => {
                match_name(cursor.word(), &DAY_NAMES)?;
            }
            Specifier::OrdinalSuffix => {
                let suffix = cursor.letters(2)?;
                if !["st", "nd", "rd", "th"]
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(suffix))
                {
                    return None;
                }
            }
            Specifier::DayOfYear => self.day_of_year = Some(cursor.number(1, 3)?),
            Specifier::MonthName | Specifier::MonthNameShort => {
                let index = match_name(cursor.word(), &MONTH_NAMES)?;
                self.month = Some(index as i64 + 1);
            }
            Specifier::MonthPadded | Specifier::Month => self.month = Some(cursor.number(1, 2)?),
            Specifier::Year => self.year = Some(cursor.year()?),
            Specifier::YearShort => {
                let year = cursor.number(2, 2)?;
                self.year = Some(if year < 70 { 2000 + year } else { 1900 + year });
            }
            Specifier::MeridiemLower | Specifier::MeridiemUpper => {
                let word = cursor.letters(2)?;
                self.pm = if word.eq_ignore_ascii_case("am") {
                    Some(false)
                } else if word.eq_ignore_ascii_case("pm") {
                    Some(true)
                } else {
                    return None;
                };
            }
            Specifier::Hour12 | Specifier::Hour12Padded => {
                let hour = cursor.number(1, 2)?;
                if hour > 12 {
                    return None;
                }
                self.hour = Some(hour);
            }
            Specifier::Hour24 | Specifier::Hour24Padded => self.hour = Some(cursor.number(1, 2)?),
            Specifier::Minute => self.minute = Some(cursor.number(2, 2)?),
            Specifier::Second => self.second = Some(cursor.number(2, 2)?),
            Specifier::Micros => {
                cursor.number(1, 6)?;
            }
            Specifier::Millis => {
                cursor.number(1, 3)?;
            }
            Specifier::Timestamp => {
                let value = DateTimeValue::from_timestamp(cursor.signed_number(20)?)?;
                let parsed = Components::from_value(&value);
                self.year = parsed.year;
                self.month = parsed.month;
                self.day = parsed.day;
                self.hour = parsed.hour;
                self.minute = parsed.minute;
                self.second = parsed.second;
            }
            // format-only tokens, createFromFormat matches them literally
            Specifier::IsoWeekday
            | Specifier::Weekday
            | Specifier::DaysInMonth
            | Specifier::LeapYear => cursor.expect_char(spec.as_char())?,
        }
        Some(())
    }

    fn reset_all(&mut self) {
        *self = Fields {
            year: Some(1970),
            month: Some(1),
            day: Some(1),
            hour: Some(0),
            minute: Some(0),
            second: Some(0),
            day_of_year: None,
            pm: None,
        };
    }

    fn reset_unset(&mut self) {
        self.year = self.year.or(Some(1970));
        self.month = self.month.or(Some(1));
        self.day = self.day.or(Some(1));
        self.hour = self.hour.or(Some(0));
        self.minute = self.minute.or(Some(0));
        self.second = self.second.or(Some(0));
    }

    fn resolve(mut self) -> Option<Components> {
        if let Some(pm) = self.pm {
            let hour = self.hour?;
            if !(1..=12).contains(&hour) {
                return None;
            }
            self.hour = Some(if pm { hour % 12 + 12 } else { hour % 12 });
        }
        if let Some(ordinal) = self.day_of_year {
            let (month, day) = calendar::from_day_of_year(self.year.unwrap_or(1970), ordinal)?;
            self.month = Some(month);
            self.day = Some(day);
        }
        self.reset_unset();
        Some(Components {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        })
    }
}

/// Index of a full name or its three letter abbreviation, ASCII case-insensitive.
fn match_name(word: &str, names: &[&str]) -> Option<usize> {
    names.iter().position(|name| {
        word.eq_ignore_ascii_case(name)
            || (word.len() == 3 && word.eq_ignore_ascii_case(&name[..3]))
    })
}
