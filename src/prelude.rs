//! Crate prelude: the types needed to create, configure and register
//! calendar pickers.
//!
//! ```
//! use calendar_picker::prelude::*;
//!
//! let registration = CalendarPickerExtension::new(ExtensionConfig::default()).compile()?;
//! let mut form = PickerForm::default();
//! registration.invoke(&mut form, "addCalendarPicker", "due", Some("Due"), None)?;
//!
//! form.submit([("due", &b"31. 12. 2024"[..])]);
//! assert_eq!(form.values(), vec![("due", Some(DateTimeValue::date(2024, 12, 31)))]);
//! # Ok::<(), PickerError>(())
//! ```
//!
//! Lower level pieces (mask tokens, the calendar helpers, the default parser
//! and formatter functions) stay in their modules.

pub use crate::{
    // Field
    CalendarPicker,
    ControlView,
    // Values
    Components,
    DateTimeValue,
    FormValue,
    // Masks
    FormatMask,
    JsConverter,
    // Strategies
    format::DateFormatter,
    parse::DateParser,
    // Validation
    Rule,
    RuleViolation,
    // Registration
    CalendarPickerExtension,
    ExtensionConfig,
    FormContainer,
    PickerForm,
    Registration,
    // Errors
    PickerError,
    Result,
};
