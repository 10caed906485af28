//! Default masks, messages and names.
//!
//! These are the values a freshly constructed [`CalendarPicker`](crate::CalendarPicker)
//! and a default [`ExtensionConfig`](crate::ExtensionConfig) start with.
//!
//! Masks use the PHP `date()` token dialect:
//! - `j` day without leading zero, `n` month without leading zero, `Y` 4 digit year
//! - `H` 24h hour with leading zero, `i` minutes, `s` seconds

/// Mask used while time-of-day is disabled.
pub const DEFAULT_MASK_DATE: &str = "j. n. Y";

/// Mask switched to by `use_time()` when the date mask is still the default.
pub const DEFAULT_MASK_DATETIME: &str = "j. n. Y H:i:s";

/// Message reported when the date rule fails.
pub const DEFAULT_INVALID_DATE_MESSAGE: &str = "Invalid date";

/// Message reported when the time rule fails.
pub const DEFAULT_INVALID_TIME_MESSAGE: &str = "Invalid time";

/// Name of the factory method that attaches a picker to a form.
pub const DEFAULT_METHOD_NAME: &str = "addCalendarPicker";

/// Data attribute a host renderer can use to hand the client-side mask to the picker script.
pub const DATA_ATTRIBUTE: &str = "data-nette-datetime";
