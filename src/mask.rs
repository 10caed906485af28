//! Format masks.
//!
//! A [`FormatMask`] keeps the server-side mask (PHP `date()` dialect) together
//! with the client-side mask derived from it. The client-side mask can only be
//! changed by setting a new server-side mask.
//!
//! [`tokenize`] splits a server-side mask into [`MaskToken`]s; the default
//! parser and formatter are both driven by it.

use crate::JsConverter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatMask {
    php: String,
    js: String,
}

impl FormatMask {
    pub fn new(php: impl Into<String>, converter: &JsConverter) -> Self {
        let php = php.into();
        let js = converter.translate(&php);
        FormatMask { php, js }
    }

    /// Replace the server-side mask and regenerate the client-side one.
    pub fn set(&mut self, php: impl Into<String>, converter: &JsConverter) {
        *self = FormatMask::new(php, converter);
    }

    /// Server-side mask used for parsing and formatting.
    pub fn php(&self) -> &str {
        &self.php
    }

    /// Client-side mask handed to the picker widget.
    pub fn js(&self) -> &str {
        &self.js
    }

    pub fn tokens(&self) -> Vec<MaskToken> {
        tokenize(&self.php)
    }
}

/// Date/time component tokens of the PHP `date()` dialect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Specifier {
    /// `d` day of month, 2 digits
    DayPadded,
    /// `j` day of month
    Day,
    /// `D` short day name
    DayNameShort,
    /// `l` full day name
    DayName,
    /// `N` ISO day of week (1 = Monday)
    IsoWeekday,
    /// `S` English ordinal suffix
    OrdinalSuffix,
    /// `w` day of week (0 = Sunday)
    Weekday,
    /// `z` zero based day of year
    DayOfYear,
    /// `F` full month name
    MonthName,
    /// `M` short month name
    MonthNameShort,
    /// `m` month, 2 digits
    MonthPadded,
    /// `n` month
    Month,
    /// `t` days in month
    DaysInMonth,
    /// `L` leap year flag
    LeapYear,
    /// `Y` full year
    Year,
    /// `y` two digit year
    YearShort,
    /// `a` am/pm
    MeridiemLower,
    /// `A` AM/PM
    MeridiemUpper,
    /// `g` 12h hour
    Hour12,
    /// `G` 24h hour
    Hour24,
    /// `h` 12h hour, 2 digits
    Hour12Padded,
    /// `H` 24h hour, 2 digits
    Hour24Padded,
    /// `i` minutes
    Minute,
    /// `s` seconds
    Second,
    /// `u` microseconds
    Micros,
    /// `v` milliseconds
    Millis,
    /// `U` Unix timestamp
    Timestamp,
}

impl Specifier {
    pub fn from_char(ch: char) -> Option<Self> {
        let spec = match ch {
            'd' => Specifier::DayPadded,
            'j' => Specifier::Day,
            'D' => Specifier::DayNameShort,
            'l' => Specifier::DayName,
            'N' => Specifier::IsoWeekday,
            'S' => Specifier::OrdinalSuffix,
            'w' => Specifier::Weekday,
            'z' => Specifier::DayOfYear,
            'F' => Specifier::MonthName,
            'M' => Specifier::MonthNameShort,
            'm' => Specifier::MonthPadded,
            'n' => Specifier::Month,
            't' => Specifier::DaysInMonth,
            'L' => Specifier::LeapYear,
            'Y' => Specifier::Year,
            'y' => Specifier::YearShort,
            'a' => Specifier::MeridiemLower,
            'A' => Specifier::MeridiemUpper,
            'g' => Specifier::Hour12,
            'G' => Specifier::Hour24,
            'h' => Specifier::Hour12Padded,
            'H' => Specifier::Hour24Padded,
            'i' => Specifier::Minute,
            's' => Specifier::Second,
            'u' => Specifier::Micros,
            'v' => Specifier::Millis,
            'U' => Specifier::Timestamp,
            _ => return None,
        };
        Some(spec)
    }

    pub fn as_char(self) -> char {
        match self {
            Specifier::DayPadded => 'd',
            Specifier::Day => 'j',
            Specifier::DayNameShort => 'D',
            Specifier::DayName => 'l',
            Specifier::IsoWeekday => 'N',
            Specifier::OrdinalSuffix => 'S',
            Specifier::Weekday => 'w',
            Specifier::DayOfYear => 'z',
            Specifier::MonthName => 'F',
            Specifier::MonthNameShort => 'M',
            Specifier::MonthPadded => 'm',
            Specifier::Month => 'n',
            Specifier::DaysInMonth => 't',
            Specifier::LeapYear => 'L',
            Specifier::Year => 'Y',
            Specifier::YearShort => 'y',
            Specifier::MeridiemLower => 'a',
            Specifier::MeridiemUpper => 'A',
            Specifier::Hour12 => 'g',
            Specifier::Hour24 => 'G',
            Specifier::Hour12Padded => 'h',
            Specifier::Hour24Padded => 'H',
            Specifier::Minute => 'i',
            Specifier::Second => 's',
            Specifier::Micros => 'u',
            Specifier::Millis => 'v',
            Specifier::Timestamp => 'U',
        }
    }

    /// True for the hour/minute/second tokens.
    pub fn is_time(self) -> bool {
        matches!(
            self,
            Specifier::Hour12
                | Specifier::Hour24
                | Specifier::Hour12Padded
                | Specifier::Hour24Padded
                | Specifier::Minute
                | Specifier::Second
                | Specifier::Timestamp
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskToken {
    Specifier(Specifier),
    /// Unescaped non-token character.
    Literal(char),
    /// Character preceded by a backslash.
    Escaped(char),
}

/// Split a PHP mask into tokens. A trailing lone backslash is kept as a literal.
///
/// ```
/// use calendar_picker::mask::{tokenize, MaskToken, Specifier};
/// assert_eq!(
///     tokenize(r"Y\y"),
///     vec![MaskToken::Specifier(Specifier::Year), MaskToken::Escaped('y')]
/// );
/// ```
pub fn tokenize(mask: &str) -> Vec<MaskToken> {
    let mut tokens = Vec::with_capacity(mask.len());
    let mut chars = mask.chars();
    while let Some(ch) = chars.next() {
        let token = if ch == '\\' {
            match chars.next() {
                Some(next) => MaskToken::Escaped(next),
                None => MaskToken::Literal('\\'),
            }
        } else if let Some(spec) = Specifier::from_char(ch) {
            MaskToken::Specifier(spec)
        } else {
            MaskToken::Literal(ch)
        };
        tokens.push(token);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_regenerates_js() {
        let converter = JsConverter::default();
        let mut mask = FormatMask::new("j. n. Y", &converter);
        assert_eq!(mask.js(), "d. m. yyyy");
        mask.set("Y-m-d H:i", &converter);
        assert_eq!(mask.php(), "Y-m-d H:i");
        assert_eq!(mask.js(), "yyyy-mm-dd hh:ii");
    }

    #[test]
    fn test_specifier_chars_round_trip() {
        for ch in "djDlNSwzFMmntLYyaAgGhHisuvU".chars() {
            let spec = Specifier::from_char(ch).unwrap();
            assert_eq!(spec.as_char(), ch);
        }
        assert!(Specifier::from_char('q').is_none());
    }

    #[test]
    fn test_tokenize_mixed() {
        let tokens = tokenize("j. n.");
        assert_eq!(
            tokens,
            vec![
                MaskToken::Specifier(Specifier::Day),
                MaskToken::Literal('.'),
                MaskToken::Literal(' '),
                MaskToken::Specifier(Specifier::Month),
                MaskToken::Literal('.'),
            ]
        );
    }

    #[test]
    fn test_tokenize_trailing_backslash() {
        assert_eq!(tokenize("\\"), vec![MaskToken::Literal('\\')]);
    }
}
