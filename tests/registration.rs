use std::sync::Arc;

use calendar_picker::{
    CalendarPickerExtension, DateTimeValue, ExtensionConfig, FormContainer, JsConverter,
    PickerError, PickerForm, Registration, Rule,
};

fn config(method: &str, pairs: &[(&str, &str)]) -> ExtensionConfig {
    ExtensionConfig {
        method: method.to_string(),
        js_converter: pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

#[test]
fn test_default_registration() {
    let registration = CalendarPickerExtension::new(ExtensionConfig::default())
        .compile()
        .unwrap();
    assert_eq!(registration.method_name(), "addCalendarPicker");
    assert_eq!(**registration.converter(), JsConverter::default());
}

#[test]
fn test_renamed_method() {
    let registration = CalendarPickerExtension::new(config("addDate", &[]))
        .compile()
        .unwrap();
    let mut form = PickerForm::default();
    assert!(matches!(
        registration.invoke(&mut form, "addCalendarPicker", "d", None, None),
        Err(PickerError::UnknownMethod(_))
    ));
    let picker = registration
        .invoke(&mut form, "addDate", "d", Some("Date"), Some("Bad date"))
        .unwrap();
    assert_eq!(picker.label(), Some("Date"));
    picker.set_value("30. 2. 2024").unwrap();
    assert_eq!(picker.validate()[0].message, "Bad date");
}

#[test]
fn test_converter_overrides_merge() {
    let registration = CalendarPickerExtension::new(config(
        "addCalendarPicker",
        &[("Y", "YYYY"), ("M", "M")],
    ))
    .compile()
    .unwrap();
    let converter = registration.converter();
    assert_eq!(converter.get("Y"), Some("YYYY"));
    assert_eq!(converter.get("M"), Some("M"));
    assert_eq!(converter.get("j"), Some("d"));

    let mut picker = registration.create_picker(None, None);
    picker.set_mask("j M Y");
    assert_eq!(picker.js_mask(), "d M YYYY");

    // the process-wide default table is untouched
    assert_eq!(JsConverter::shared_default().get("Y"), Some("yyyy"));
}

#[test]
fn test_pickers_share_table() {
    let registration = Registration::default();
    let a = registration.create_picker(None, None);
    let b = registration.create_picker(None, None);
    assert!(Arc::ptr_eq(a.converter(), b.converter()));
}

#[test]
fn test_form_submission() {
    let registration = Registration::default();
    let mut form = PickerForm::default();
    registration
        .invoke(&mut form, "addCalendarPicker", "from", Some("From"), None)
        .unwrap();
    registration
        .invoke(&mut form, "addCalendarPicker", "to", Some("To"), None)
        .unwrap()
        .use_time("Invalid time");
    registration
        .invoke(&mut form, "addCalendarPicker", "optional", None, None)
        .unwrap();
    assert_eq!(form.names().collect::<Vec<_>>(), vec!["from", "to", "optional"]);

    form.submit([
        ("from", &b"1. 3. 2024"[..]),
        ("to", &b"31. 3. 2024 25:00:00"[..]),
    ]);

    assert!(!form.is_valid());
    let errors = form.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, "to");
    assert_eq!(errors[0].1[0].rule, Rule::Time);

    assert_eq!(
        form.values(),
        vec![
            ("from", Some(DateTimeValue::date(2024, 3, 1))),
            ("to", None),
            ("optional", None),
        ]
    );

    form.submit([("from", &b"1. 3. 2024"[..]), ("to", &b"31. 3. 2024 23:00:00"[..])]);
    assert!(form.is_valid());
    assert_eq!(
        form.picker("to").unwrap().value(),
        Some(DateTimeValue::new(2024, 3, 31, 23, 0, 0))
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_config_from_json() {
    let config: ExtensionConfig = serde_json::from_str(
        r#"{ "method": "addDateTimePicker", "jsConverter": { "M": "M" } }"#,
    )
    .unwrap();
    assert_eq!(config.method, "addDateTimePicker");
    assert_eq!(config.js_converter.get("M").map(String::as_str), Some("M"));

    let config: ExtensionConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ExtensionConfig::default());
}
