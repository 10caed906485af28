//! Calendar / date-time picker form field.
//!
//! The crate provides the field-level logic of a calendar picker control for
//! server-side forms:
//!
//! - translating a PHP `date()` style mask into the mask dialect of a
//!   client-side picker widget ([`JsConverter`], [`FormatMask`]),
//! - parsing submitted strings into independent date/time [`Components`] and
//!   formatting values back ([`parse`], [`format`], both pluggable),
//! - validating the components as a calendar date and a time of day ([`rules`]),
//! - registering the field as a named factory on a form ([`registration`]).
//!
//! Rendering HTML and request handling belong to the host framework.
//!
//! ```
//! use calendar_picker::{CalendarPicker, DateTimeValue};
//!
//! let mut picker = CalendarPicker::default();
//! picker.use_time("Invalid time");
//! assert_eq!(picker.js_mask(), "d. m. yyyy hh:ii:ss");
//!
//! picker.set_value("15. 1. 2024 12:30:45")?;
//! assert_eq!(picker.value(), Some(DateTimeValue::new(2024, 1, 15, 12, 30, 45)));
//! assert_eq!(picker.display_value(), "15. 1. 2024 12:30:45");
//! # Ok::<(), calendar_picker::PickerError>(())
//! ```

pub type Result<T> = std::result::Result<T, PickerError>;

pub mod calendar;
pub mod defaults;
pub mod format;
pub mod mask;
pub mod parse;
pub mod prelude;
pub mod rules;

mod converter;
pub use converter::*;

mod errors;
pub use errors::*;

mod field;
pub use field::*;

pub mod registration;
pub use registration::{
    CalendarPickerExtension, ExtensionConfig, FormContainer, PickerForm, Registration,
};

mod value;
pub use value::*;

pub use mask::FormatMask;
pub use rules::{Rule, RuleViolation};
