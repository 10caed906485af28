//! The calendar picker form field.
//!
//! [`CalendarPicker`] stores the submitted date (and optionally time of day) as
//! independent [`Components`], validates them on demand and renders them back
//! through its mask. It never touches request objects or HTML: the host form
//! hands it one raw value per submission ([`CalendarPicker::load_http_data`])
//! and reads back a [`ControlView`] for rendering.
//!
//! # Example
//!
//! ```
//! use calendar_picker::{CalendarPicker, DateTimeValue};
//!
//! let mut picker = CalendarPicker::with_label("Birthday");
//! assert_eq!(picker.js_mask(), "d. m. yyyy");
//!
//! picker.load_http_data(b"29. 2. 2024");
//! assert_eq!(picker.value(), Some(DateTimeValue::date(2024, 2, 29)));
//!
//! picker.load_http_data(b"29. 2. 2023");
//! assert_eq!(picker.value(), None);
//! assert_eq!(picker.validate()[0].message, "Invalid date");
//! ```

use std::sync::Arc;

use bstr::ByteSlice;

use crate::{
    Components, DateTimeValue, FormValue, FormatMask, JsConverter, PickerError,
    defaults::{DEFAULT_INVALID_DATE_MESSAGE, DEFAULT_MASK_DATE, DEFAULT_MASK_DATETIME},
    format::{DateFormatter, PhpMaskFormatter},
    mask::MaskToken,
    parse::{DateParser, PhpMaskParser},
    rules::{self, Rule, RuleViolation},
};

pub struct CalendarPicker {
    label: Option<String>,
    use_time: bool,
    components: Components,
    mask: FormatMask,
    converter: Arc<JsConverter>,
    parser: Box<dyn DateParser>,
    formatter: Box<dyn DateFormatter>,
    /// Rules checked while the picker is filled, with their messages.
    rules: Vec<(Rule, String)>,
}

/// What a host renderer needs to draw the control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlView {
    pub label: Option<String>,
    /// Current value formatted with the server-side mask, empty if there is none.
    pub value: String,
    /// Client-side mask for the picker widget.
    pub js_mask: String,
}

impl Default for CalendarPicker {
    fn default() -> Self {
        CalendarPicker::new(None, DEFAULT_INVALID_DATE_MESSAGE, JsConverter::shared_default())
    }
}

impl std::fmt::Debug for CalendarPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarPicker")
            .field("label", &self.label)
            .field("use_time", &self.use_time)
            .field("components", &self.components)
            .field("mask", &self.mask)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl CalendarPicker {
    /// Create a date-only picker. The date rule is attached right away with
    /// `invalid_date_message`; `converter` is the translation table for the
    /// client-side mask.
    pub fn new(
        label: Option<String>,
        invalid_date_message: impl Into<String>,
        converter: Arc<JsConverter>,
    ) -> Self {
        let mask = FormatMask::new(DEFAULT_MASK_DATE, &converter);
        CalendarPicker {
            label,
            use_time: false,
            components: Components::default(),
            mask,
            converter,
            parser: Box::new(PhpMaskParser),
            formatter: Box::new(PhpMaskFormatter),
            rules: vec![(Rule::Date, invalid_date_message.into())],
        }
    }

    /// Date-only picker with default messages and the built-in translation table.
    pub fn with_label(label: impl Into<String>) -> Self {
        CalendarPicker::new(
            Some(label.into()),
            DEFAULT_INVALID_DATE_MESSAGE,
            JsConverter::shared_default(),
        )
    }

    /// Replace the parser used for string input.
    pub fn set_parser(&mut self, parser: impl DateParser + 'static) -> &mut Self {
        self.parser = Box::new(parser);
        self
    }

    /// Replace the formatter used for rendering.
    pub fn set_formatter(&mut self, formatter: impl DateFormatter + 'static) -> &mut Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Enable time of day.
    ///
    /// Switches to [`DEFAULT_MASK_DATETIME`] only when the mask is still the
    /// date default, so set a suitable mask yourself if you use a custom one.
    /// Existing date values get no time, which makes them invalid until a
    /// time is supplied.
    pub fn use_time(&mut self, invalid_time_message: impl Into<String>) -> &mut Self {
        self.use_time = true;
        if self.mask.php() == DEFAULT_MASK_DATE {
            self.set_mask(DEFAULT_MASK_DATETIME);
        } else if !self
            .mask
            .tokens()
            .iter()
            .any(|token| matches!(token, MaskToken::Specifier(spec) if spec.is_time()))
        {
            log::warn!(
                "Calendar picker mask '{}' has no time tokens, time of day cannot be entered",
                self.mask.php()
            );
        }
        self.attach_rule(Rule::Time, invalid_time_message.into());
        self
    }

    /// Set the server-side mask, the client-side mask is regenerated.
    pub fn set_mask(&mut self, mask: impl Into<String>) -> &mut Self {
        self.mask.set(mask, &self.converter);
        self
    }

    /// Set the value from a pre-built date, a timestamp or a string parsed with the mask.
    ///
    /// Falsy input clears the picker, a string that does not match the mask
    /// leaves every component absent. Numbers are always absolute Unix
    /// timestamps in UTC, small values are not read as offsets from now.
    /// Anything else is [`PickerError::InvalidInput`].
    pub fn set_value(&mut self, value: impl Into<FormValue>) -> crate::Result<()> {
        let value = value.into();
        if value.is_falsy() {
            self.components.clear();
            return Ok(());
        }
        match &value {
            FormValue::Text(text) => self.set_text(text),
            FormValue::DateTime(date) => self.store(Some(Components::from_value(date))),
            FormValue::Int(timestamp) => {
                let date = DateTimeValue::from_timestamp(*timestamp)
                    .ok_or_else(|| PickerError::invalid_input(&value))?;
                self.store(Some(Components::from_value(&date)));
            }
            FormValue::Float(timestamp) if timestamp.is_finite() => {
                let date = DateTimeValue::from_timestamp(timestamp.trunc() as i64)
                    .ok_or_else(|| PickerError::invalid_input(&value))?;
                self.store(Some(Components::from_value(&date)));
            }
            _ => return Err(PickerError::invalid_input(&value)),
        }
        Ok(())
    }

    /// Re-read the raw submitted value.
    ///
    /// The value is normalized like a single line input (line breaks become
    /// spaces, surrounding whitespace is trimmed) and then handled like a
    /// string passed to [`set_value`](Self::set_value).
    pub fn load_http_data(&mut self, raw: impl AsRef<[u8]>) {
        let raw = raw.as_ref();
        let Ok(text) = raw.to_str() else {
            log::warn!(
                "Discarding non UTF-8 calendar picker submission {:?}",
                raw.as_bstr()
            );
            self.components.clear();
            return;
        };
        let line = text.replace(['\r', '\n'], " ");
        self.set_text(line.trim());
    }

    /// The composed value if every active rule passes.
    pub fn value(&self) -> Option<DateTimeValue> {
        if !rules::date_is_valid(&self.components) {
            return None;
        }
        if self.use_time {
            if !rules::time_is_valid(&self.components) {
                return None;
            }
            self.components.compose()
        } else {
            self.components.without_time().compose()
        }
    }

    /// True once any component is set.
    pub fn is_filled(&self) -> bool {
        !self.components.is_empty()
    }

    /// Failed rules, empty while the picker is not filled.
    pub fn validate(&self) -> Vec<RuleViolation> {
        if !self.is_filled() {
            return Vec::new();
        }
        self.rules
            .iter()
            .filter(|(rule, _)| !rule.holds(&self.components))
            .map(|(rule, message)| RuleViolation {
                rule: *rule,
                message: message.clone(),
            })
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Current value rendered with the mask, empty if there is no valid value.
    pub fn display_value(&self) -> String {
        self.value()
            .map(|value| self.formatter.format(self.mask.php(), &value))
            .unwrap_or_default()
    }

    pub fn control(&self) -> ControlView {
        ControlView {
            label: self.label.clone(),
            value: self.display_value(),
            js_mask: self.mask.js().to_string(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn uses_time(&self) -> bool {
        self.use_time
    }

    /// Server-side mask.
    pub fn mask(&self) -> &str {
        self.mask.php()
    }

    /// Client-side mask.
    pub fn js_mask(&self) -> &str {
        self.mask.js()
    }

    pub fn format_mask(&self) -> &FormatMask {
        &self.mask
    }

    pub fn converter(&self) -> &Arc<JsConverter> {
        &self.converter
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    pub fn year(&self) -> Option<i64> {
        self.components.year
    }

    pub fn month(&self) -> Option<i64> {
        self.components.month
    }

    pub fn day(&self) -> Option<i64> {
        self.components.day
    }

    pub fn hour(&self) -> Option<i64> {
        self.components.hour
    }

    pub fn minute(&self) -> Option<i64> {
        self.components.minute
    }

    pub fn second(&self) -> Option<i64> {
        self.components.second
    }

    fn set_text(&mut self, text: &str) {
        if FormValue::from(text).is_falsy() {
            self.components.clear();
            return;
        }
        let parsed = self.parser.parse(self.mask.php(), text);
        if parsed.is_none() {
            log::debug!(
                "'{text}' does not match calendar picker mask '{}'",
                self.mask.php()
            );
        }
        self.store(parsed);
    }

    fn store(&mut self, parsed: Option<Components>) {
        self.components = match parsed {
            Some(components) if self.use_time => components,
            Some(components) => components.without_time(),
            None => Components::default(),
        };
    }

    fn attach_rule(&mut self, rule: Rule, message: String) {
        match self.rules.iter_mut().find(|(r, _)| *r == rule) {
            Some(existing) => existing.1 = message,
            None => self.rules.push((rule, message)),
        }
    }
}
