//! Registering the picker with a form.
//!
//! The DI-time step is split in two:
//!
//! 1. [`CalendarPickerExtension`] reads an [`ExtensionConfig`] (factory method
//!    name plus translation table overrides) and compiles it once at start-up.
//! 2. The resulting [`Registration`] is the named factory: it creates pickers
//!    sharing the compiled table and attaches them to any [`FormContainer`].
//!
//! ```
//! use calendar_picker::{CalendarPickerExtension, ExtensionConfig, FormContainer, PickerForm};
//!
//! let mut config = ExtensionConfig::default();
//! config.method = "addDate".to_string();
//! config.js_converter.insert("M".to_string(), "M".to_string());
//! let registration = CalendarPickerExtension::new(config).compile()?;
//!
//! let mut form = PickerForm::default();
//! registration.invoke(&mut form, "addDate", "since", Some("Since"), None)?;
//! form.picker_mut("since").unwrap().set_mask("j M Y");
//! assert_eq!(form.picker("since").unwrap().js_mask(), "d M yyyy");
//! # Ok::<(), calendar_picker::PickerError>(())
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{
    CalendarPicker, DateTimeValue, JsConverter, PickerError, RuleViolation,
    defaults::{DEFAULT_INVALID_DATE_MESSAGE, DEFAULT_METHOD_NAME},
};

/// Extension configuration, as it would appear in the application config.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ExtensionConfig {
    /// Name of the factory method.
    pub method: String,
    /// Entries merged over the built-in translation table.
    pub js_converter: BTreeMap<String, String>,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            method: DEFAULT_METHOD_NAME.to_string(),
            js_converter: BTreeMap::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CalendarPickerExtension {
    config: ExtensionConfig,
}

impl CalendarPickerExtension {
    pub fn new(config: ExtensionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtensionConfig {
        &self.config
    }

    /// Validate the config and build the shared translation table.
    pub fn compile(&self) -> crate::Result<Registration> {
        let method = self.config.method.trim();
        if method.is_empty() || method.chars().any(char::is_whitespace) {
            return Err(PickerError::InvalidMethodName(self.config.method.clone()));
        }
        let converter = JsConverter::default().merged(
            self.config
                .js_converter
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
        log::trace!(
            "Registered calendar picker as '{method}' with {} mask tokens",
            converter.len()
        );
        Ok(Registration {
            method: method.to_string(),
            converter: Arc::new(converter),
        })
    }
}

/// A compiled registration: the factory method name and the shared table.
#[derive(Clone, Debug)]
pub struct Registration {
    method: String,
    converter: Arc<JsConverter>,
}

impl Default for Registration {
    fn default() -> Self {
        Registration {
            method: DEFAULT_METHOD_NAME.to_string(),
            converter: JsConverter::shared_default(),
        }
    }
}

impl Registration {
    pub fn method_name(&self) -> &str {
        &self.method
    }

    pub fn converter(&self) -> &Arc<JsConverter> {
        &self.converter
    }

    /// Create a picker using the compiled table.
    pub fn create_picker(
        &self,
        label: Option<&str>,
        invalid_date_message: Option<&str>,
    ) -> CalendarPicker {
        CalendarPicker::new(
            label.map(str::to_string),
            invalid_date_message.unwrap_or(DEFAULT_INVALID_DATE_MESSAGE),
            Arc::clone(&self.converter),
        )
    }

    /// Call the factory method `method` on `container`, attaching a new picker as `name`.
    pub fn invoke<'c, C: FormContainer>(
        &self,
        container: &'c mut C,
        method: &str,
        name: &str,
        label: Option<&str>,
        invalid_date_message: Option<&str>,
    ) -> crate::Result<&'c mut CalendarPicker> {
        if method != self.method {
            return Err(PickerError::UnknownMethod(method.to_string()));
        }
        container.add_picker(name, self.create_picker(label, invalid_date_message))
    }
}

/// The part of a form the registration needs.
pub trait FormContainer {
    /// Attach `picker` under `name`, failing if the name is taken.
    fn add_picker(
        &mut self,
        name: &str,
        picker: CalendarPicker,
    ) -> crate::Result<&mut CalendarPicker>;

    fn picker(&self, name: &str) -> Option<&CalendarPicker>;

    fn picker_mut(&mut self, name: &str) -> Option<&mut CalendarPicker>;
}

/// Minimal form holding pickers in insertion order.
#[derive(Debug, Default)]
pub struct PickerForm {
    controls: Vec<(String, CalendarPicker)>,
}

impl FormContainer for PickerForm {
    fn add_picker(
        &mut self,
        name: &str,
        picker: CalendarPicker,
    ) -> crate::Result<&mut CalendarPicker> {
        if self.controls.iter().any(|(n, _)| n == name) {
            return Err(PickerError::DuplicateComponent(name.to_string()));
        }
        let index = self.controls.len();
        self.controls.push((name.to_string(), picker));
        Ok(&mut self.controls[index].1)
    }

    fn picker(&self, name: &str) -> Option<&CalendarPicker> {
        self.controls
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, picker)| picker)
    }

    fn picker_mut(&mut self, name: &str) -> Option<&mut CalendarPicker> {
        self.controls
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, picker)| picker)
    }
}

impl PickerForm {
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.controls.iter().map(|(name, _)| name.as_str())
    }

    /// Hand every picker its raw submitted value; pickers missing from `data` get an empty one.
    pub fn submit<'a>(&mut self, data: impl IntoIterator<Item = (&'a str, &'a [u8])>) {
        let data: Vec<_> = data.into_iter().collect();
        for (name, picker) in &mut self.controls {
            let raw = data
                .iter()
                .find(|(n, _)| *n == name.as_str())
                .map_or(&b""[..], |(_, raw)| *raw);
            picker.load_http_data(raw);
        }
    }

    /// Violations per control, controls without violations are left out.
    pub fn errors(&self) -> Vec<(&str, Vec<RuleViolation>)> {
        self.controls
            .iter()
            .map(|(name, picker)| (name.as_str(), picker.validate()))
            .filter(|(_, violations)| !violations.is_empty())
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.controls.iter().all(|(_, picker)| picker.is_valid())
    }

    /// Composed value of every control.
    pub fn values(&self) -> Vec<(&str, Option<DateTimeValue>)> {
        self.controls
            .iter()
            .map(|(name, picker)| (name.as_str(), picker.value()))
            .collect()
    }
}
