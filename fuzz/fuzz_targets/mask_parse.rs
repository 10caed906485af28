#![no_main]
use libfuzzer_sys::fuzz_target;
use calendar_picker::parse::parse_with_mask;

fuzz_target!(|input: (&str, &str)| {
    let (mask, raw) = input;
    let _ = parse_with_mask(mask, raw);
});
