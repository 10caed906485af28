use calendar_picker::{
    CalendarPicker, Components, DateTimeValue, JsConverter,
    calendar::{checkdate, days_in_month},
    format::format_with_mask,
    rules::{date_is_valid, time_is_valid},
};
use proptest::prelude::*;

fn valid_date_time() -> impl Strategy<Value = DateTimeValue> {
    (1i32..=32_767, 1u32..=12, 0u32..24, 0u32..60, 0u32..60).prop_flat_map(
        |(year, month, hour, minute, second)| {
            let days = days_in_month(i64::from(year), i64::from(month)).unwrap_or(28) as u32;
            (1u32..=days)
                .prop_map(move |day| DateTimeValue::new(year, month, day, hour, minute, second))
        },
    )
}

#[test]
fn translates_default_masks() {
    let converter = JsConverter::default();
    assert_eq!(converter.translate("j. n. Y"), "d. m. yyyy");
    assert_eq!(converter.translate("j. n. Y H:i:s"), "d. m. yyyy hh:ii:ss");
    assert_eq!(converter.translate("l, F jS g:i A"), "DD, MM dS H:ii P");
}

#[test]
fn leap_days() {
    assert!(date_is_valid(&Components::date(2024, 2, 29)));
    assert!(date_is_valid(&Components::date(2000, 2, 29)));
    assert!(!date_is_valid(&Components::date(2023, 2, 29)));
    assert!(!date_is_valid(&Components::date(1900, 2, 29)));
}

proptest! {
    #[test]
    fn translation_is_pure(mask in "[ -~]{0,24}") {
        let converter = JsConverter::default();
        prop_assert_eq!(converter.translate(&mask), converter.translate(&mask));
    }

    #[test]
    fn unmapped_characters_pass_through(mask in "[0-9 .:/,()EIJKOPQRTVWXZbcefkoqprtuvwx-]{0,24}") {
        let converter = JsConverter::default();
        prop_assert_eq!(converter.translate(&mask), mask);
    }

    #[test]
    fn date_rule_matches_calendar(year in 1i64..=9999, month in -1i64..=14, day in -1i64..=33) {
        let valid = (1..=12).contains(&month)
            && day >= 1
            && day <= days_in_month(year, month).unwrap_or(0);
        prop_assert_eq!(date_is_valid(&Components::date(year, month, day)), valid);
        prop_assert_eq!(checkdate(year, month, day), valid);
    }

    #[test]
    fn time_rule_accepts_range(hour in 0i64..24, minute in 0i64..60, second in 0i64..60) {
        prop_assert!(time_is_valid(&Components::date_time(2024, 1, 1, hour, minute, second)));
    }

    #[test]
    fn time_rule_rejects_out_of_range(
        hour in prop_oneof![-100i64..0, 24i64..100],
        minute in 0i64..60,
        second in 0i64..60
    ) {
        let hour_ok = minute % 24;
        prop_assert!(!time_is_valid(&Components::date_time(2024, 1, 1, hour, minute, second)));
        prop_assert!(!time_is_valid(&Components::date_time(
            2024,
            1,
            1,
            hour_ok,
            hour.abs() + 60,
            second
        )));
        prop_assert!(!time_is_valid(&Components::date_time(
            2024,
            1,
            1,
            hour_ok,
            second,
            -hour.abs() - 1
        )));
    }

    #[test]
    fn round_trip_date_time(
        value in valid_date_time(),
        mask in prop::sample::select(vec![
            "j. n. Y H:i:s",
            "d.m.Y G:i:s",
            "Y-m-d\\TH:i:s",
            "D, d M Y H:i:s",
            "l jS F Y, g:i:s a",
            "jSF Y, g:i:sA",
            "U",
        ])
    ) {
        let mut picker = CalendarPicker::default();
        picker.use_time("Invalid time").set_mask(mask);
        let text = format_with_mask(mask, &value);
        picker.set_value(text.as_str())?;
        prop_assert_eq!(picker.value(), Some(value));
        prop_assert_eq!(picker.display_value(), text);
    }

    #[test]
    fn round_trip_date(value in valid_date_time()) {
        let value = DateTimeValue::date(value.year, value.month, value.day);
        let mut picker = CalendarPicker::default();
        let text = format_with_mask(picker.mask(), &value);
        picker.set_value(text)?;
        prop_assert_eq!(picker.value(), Some(value));
    }
}
