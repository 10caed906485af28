#![no_main]
use libfuzzer_sys::fuzz_target;
use calendar_picker::{DateTimeValue, JsConverter, format::format_with_mask};

fuzz_target!(|input: (&str, i64)| {
    let (mask, timestamp) = input;
    let _ = JsConverter::default().translate(mask);
    if let Some(value) = DateTimeValue::from_timestamp(timestamp % 253_402_300_800) {
        let _ = format_with_mask(mask, &value);
    }
});
