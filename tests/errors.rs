use calendar_picker::{CalendarPicker, DateTimeValue, FormValue, PickerError};

#[test]
fn test_invalid_input_names_value() {
    let mut picker = CalendarPicker::default();
    let err = picker.set_value(true).unwrap_err();
    assert!(matches!(err, PickerError::InvalidInput(_)));
    assert_eq!(err.to_string(), "Invalid input for calendar picker: 'true'");
}

#[test]
fn test_list_is_invalid_input() {
    let mut picker = CalendarPicker::default();
    let err = picker.set_value(vec!["1. 1. 2024"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid input for calendar picker: '[1. 1. 2024]'"
    );
}

#[test]
fn test_non_finite_float_is_invalid_input() {
    let mut picker = CalendarPicker::default();
    assert!(picker.set_value(f64::NAN).is_err());
    assert!(picker.set_value(f64::INFINITY).is_err());
}

#[test]
fn test_timestamp_out_of_range_is_invalid_input() {
    let mut picker = CalendarPicker::default();
    assert!(picker.set_value(i64::MAX).is_err());
}

#[test]
fn test_invalid_input_keeps_previous_value() {
    let mut picker = CalendarPicker::default();
    picker.set_value(DateTimeValue::date(2024, 5, 1)).unwrap();
    assert!(picker.set_value(FormValue::Bool(true)).is_err());
    assert_eq!(picker.value(), Some(DateTimeValue::date(2024, 5, 1)));
}
