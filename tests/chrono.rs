#![cfg(feature = "chrono")]

use calendar_picker::{CalendarPicker, DateTimeValue};
use chrono::{NaiveDate, NaiveDateTime};

#[test]
fn set_value_from_naive_date_time() {
    let dt = NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_opt(13, 14, 15)
        .unwrap();
    let mut picker = CalendarPicker::default();
    picker.use_time("Invalid time");
    picker.set_value(dt).unwrap();
    assert_eq!(picker.value(), Some(DateTimeValue::new(2024, 2, 29, 13, 14, 15)));
    assert_eq!(picker.value().and_then(|v| v.to_naive_date_time()), Some(dt));
}

#[test]
fn set_value_from_naive_date() {
    let mut picker = CalendarPicker::default();
    picker.set_value(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()).unwrap();
    assert_eq!(picker.display_value(), "31. 12. 1999");
}

#[test]
fn invalid_value_does_not_convert() {
    let bad = DateTimeValue::new(2023, 2, 29, 0, 0, 0);
    assert!(NaiveDateTime::try_from(bad).is_err());
    assert!(bad.to_naive_date_time().is_none());
}
