//! Stored and composed date/time values.
//!
//! - [`Components`] is what a picker stores: six independent, optional
//!   integers. Invalid combinations (April 31st, hour 25) are representable
//!   and get rejected by the rules, never normalized.
//! - [`DateTimeValue`] is the composed value handed out once the rules pass.
//!   Its fields are public and not validated on construction, use
//!   [`DateTimeValue::is_valid`].
//! - [`FormValue`] is the loosely typed input accepted by
//!   [`CalendarPicker::set_value`](crate::CalendarPicker::set_value).

use crate::calendar::{self, SECONDS_PER_DAY};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Components {
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub day: Option<i64>,
    pub hour: Option<i64>,
    pub minute: Option<i64>,
    pub second: Option<i64>,
}

impl Components {
    /// Date only, time components absent.
    pub fn date(year: i64, month: i64, day: i64) -> Self {
        Components {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            ..Default::default()
        }
    }

    pub fn date_time(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Self {
        Components {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
        }
    }

    /// All six components of `value`.
    pub fn from_value(value: &DateTimeValue) -> Self {
        Components::date_time(
            i64::from(value.year),
            i64::from(value.month),
            i64::from(value.day),
            i64::from(value.hour),
            i64::from(value.minute),
            i64::from(value.second),
        )
    }

    /// True if no component is set.
    pub fn is_empty(&self) -> bool {
        self.year.is_none()
            && self.month.is_none()
            && self.day.is_none()
            && self.hour.is_none()
            && self.minute.is_none()
            && self.second.is_none()
    }

    pub fn clear(&mut self) {
        *self = Components::default();
    }

    /// Drop the time components.
    pub fn without_time(self) -> Self {
        Components {
            hour: None,
            minute: None,
            second: None,
            ..self
        }
    }

    /// Compose a value if every date component is set and fits the value's types.
    /// Missing time components become zero. No calendar validation happens here.
    pub fn compose(&self) -> Option<DateTimeValue> {
        let narrow = |c: Option<i64>| c.and_then(|v| u32::try_from(v).ok());
        Some(DateTimeValue {
            year: i32::try_from(self.year?).ok()?,
            month: narrow(self.month)?,
            day: narrow(self.day)?,
            hour: narrow(self.hour.or(Some(0)))?,
            minute: narrow(self.minute.or(Some(0)))?,
            second: narrow(self.second.or(Some(0)))?,
        })
    }
}

/// A composed date with time of day (00:00:00 for date-only pickers).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeValue {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl std::fmt::Display for DateTimeValue {
    /// ISO-like `YYYY-MM-DD HH:MM:SS`.
    /// ```
    /// use calendar_picker::DateTimeValue;
    /// assert_eq!(DateTimeValue::new(2024, 2, 29, 8, 5, 0).to_string(), "2024-02-29 08:05:00");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl DateTimeValue {
    /// Construct without validation.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        DateTimeValue {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight of the given day.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        DateTimeValue::new(year, month, day, 0, 0, 0)
    }

    /// Same date with another time of day.
    pub fn with_time(self, hour: u32, minute: u32, second: u32) -> Self {
        DateTimeValue {
            hour,
            minute,
            second,
            ..self
        }
    }

    /// Calendar date and time of day are both in range.
    pub fn is_valid(&self) -> bool {
        calendar::checkdate(i64::from(self.year), i64::from(self.month), i64::from(self.day))
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
    }

    /// Seconds since 1970-01-01 00:00:00 UTC.
    pub fn timestamp(&self) -> i64 {
        calendar::days_from_civil(i64::from(self.year), i64::from(self.month), i64::from(self.day))
            * SECONDS_PER_DAY
            + i64::from(self.hour) * 3_600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }

    /// Inverse of [`timestamp`](Self::timestamp), `None` if the year does not fit an `i32`.
    ///
    /// ```
    /// use calendar_picker::DateTimeValue;
    /// let value = DateTimeValue::from_timestamp(1_705_321_845).unwrap();
    /// assert_eq!(value, DateTimeValue::new(2024, 1, 15, 12, 30, 45));
    /// ```
    pub fn from_timestamp(timestamp: i64) -> Option<Self> {
        let days = timestamp.div_euclid(SECONDS_PER_DAY);
        let secs = timestamp.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = calendar::civil_from_days(days);
        Some(DateTimeValue {
            year: i32::try_from(year).ok()?,
            month: month as u32,
            day: day as u32,
            hour: (secs / 3_600) as u32,
            minute: (secs % 3_600 / 60) as u32,
            second: (secs % 60) as u32,
        })
    }

    /// Day of week, 0 = Sunday.
    pub fn weekday(&self) -> u32 {
        calendar::weekday(i64::from(self.year), i64::from(self.month), i64::from(self.day)) as u32
    }

    /// Zero based day of year.
    pub fn day_of_year(&self) -> u32 {
        calendar::day_of_year(i64::from(self.year), i64::from(self.month), i64::from(self.day))
            as u32
    }

    /// Convert to `chrono::NaiveDateTime`, `None` on invalid ranges.
    #[cfg(feature = "chrono")]
    pub fn to_naive_date_time(&self) -> Option<chrono::NaiveDateTime> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, self.second)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for DateTimeValue {
    fn from(value: chrono::NaiveDateTime) -> Self {
        use chrono::{Datelike, Timelike};
        DateTimeValue::new(
            value.year(),
            value.month(),
            value.day(),
            value.hour(),
            value.minute(),
            value.second(),
        )
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for DateTimeValue {
    fn from(value: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        DateTimeValue::date(value.year(), value.month(), value.day())
    }
}

#[cfg(feature = "chrono")]
impl std::convert::TryFrom<DateTimeValue> for chrono::NaiveDateTime {
    type Error = ();
    fn try_from(value: DateTimeValue) -> Result<Self, Self::Error> {
        value.to_naive_date_time().ok_or(())
    }
}

/// Loosely typed form value, the input of `set_value`.
#[derive(Clone, Debug, PartialEq)]
pub enum FormValue {
    Null,
    Bool(bool),
    /// Unix timestamp.
    Int(i64),
    /// Unix timestamp, fractional part dropped.
    Float(f64),
    /// Parsed with the picker's mask.
    Text(String),
    DateTime(DateTimeValue),
    List(Vec<FormValue>),
}

impl FormValue {
    /// Values a form treats as "not filled in".
    pub fn is_falsy(&self) -> bool {
        match self {
            FormValue::Null => true,
            FormValue::Bool(b) => !b,
            FormValue::Int(i) => *i == 0,
            FormValue::Float(f) => *f == 0.0,
            FormValue::Text(s) => s.is_empty() || s == "0",
            FormValue::DateTime(_) => false,
            FormValue::List(items) => items.is_empty(),
        }
    }
}

impl std::fmt::Display for FormValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormValue::Null => write!(f, "null"),
            FormValue::Bool(b) => write!(f, "{b}"),
            FormValue::Int(i) => write!(f, "{i}"),
            FormValue::Float(x) => write!(f, "{x}"),
            FormValue::Text(s) => write!(f, "{s}"),
            FormValue::DateTime(v) => write!(f, "{v}"),
            FormValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Text(value)
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        FormValue::Bool(value)
    }
}

impl From<i64> for FormValue {
    fn from(value: i64) -> Self {
        FormValue::Int(value)
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        FormValue::Float(value)
    }
}

impl From<DateTimeValue> for FormValue {
    fn from(value: DateTimeValue) -> Self {
        FormValue::DateTime(value)
    }
}

impl<T: Into<FormValue>> From<Option<T>> for FormValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FormValue::Null, Into::into)
    }
}

impl<T: Into<FormValue>> From<Vec<T>> for FormValue {
    fn from(value: Vec<T>) -> Self {
        FormValue::List(value.into_iter().map(Into::into).collect())
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for FormValue {
    fn from(value: chrono::NaiveDateTime) -> Self {
        FormValue::DateTime(value.into())
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for FormValue {
    fn from(value: chrono::NaiveDate) -> Self {
        FormValue::DateTime(value.into())
    }
}
