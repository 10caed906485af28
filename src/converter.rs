//! Server mask to client mask translation table.
//!
//! [`JsConverter`] maps PHP `date()` tokens onto the token dialect of the
//! bootstrap-datetimepicker widget. The built-in table can be extended at
//! start-up (see [`CalendarPickerExtension`](crate::CalendarPickerExtension)); after
//! that it is shared read-only between all pickers behind an `Arc`.
//!
//! Translation follows PHP `strtr` array semantics: at every position the
//! longest matching key is replaced and the replacement is never scanned again.
//! There is no escaping, so a literal `d` in a mask is translated like the token.
//!
//! ```
//! use calendar_picker::JsConverter;
//! let converter = JsConverter::default();
//! assert_eq!(converter.translate("j. n. Y"), "d. m. yyyy");
//! assert_eq!(converter.translate("H:i:s"), "hh:ii:ss");
//! ```

use std::sync::{Arc, OnceLock};

/// Built-in token pairs, PHP token first.
const BUILTIN_PAIRS: [(&str, &str); 19] = [
    ("j", "d"),
    ("d", "dd"),
    ("D", "D"),
    ("l", "DD"),
    ("z", "o"),
    ("n", "m"),
    ("m", "mm"),
    ("F", "MM"),
    ("y", "yy"),
    ("Y", "yyyy"),
    ("U", "@"),
    // time
    ("a", "p"),
    ("A", "P"),
    ("s", "ss"),
    ("i", "ii"),
    ("G", "h"),
    ("H", "hh"),
    ("g", "H"),
    ("h", "HH"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsConverter {
    /// Sorted by key length (longest first), then by key.
    pairs: Vec<(String, String)>,
}

impl Default for JsConverter {
    fn default() -> Self {
        let mut converter = JsConverter::empty();
        converter.merge(BUILTIN_PAIRS.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        converter
    }
}

impl JsConverter {
    /// A table without any pairs, translation is the identity.
    pub fn empty() -> Self {
        JsConverter { pairs: Vec::new() }
    }

    /// Process-wide built-in table, shared by pickers created without an explicit table.
    pub fn shared_default() -> Arc<JsConverter> {
        static DEFAULT: OnceLock<Arc<JsConverter>> = OnceLock::new();
        DEFAULT.get_or_init(|| Arc::new(JsConverter::default())).clone()
    }

    /// Merge `overrides` into the table: existing keys are overwritten, others retained.
    ///
    /// Empty keys are ignored.
    pub fn merge<K, V>(&mut self, overrides: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in overrides {
            let key = key.into();
            let value = value.into();
            if key.is_empty() {
                log::warn!("Ignoring empty key in mask converter (value '{value}')");
                continue;
            }
            match self.pairs.iter_mut().find(|(k, _)| *k == key) {
                Some(pair) => {
                    log::debug!("Mask converter: '{key}' => '{value}' (was '{}')", pair.1);
                    pair.1 = value;
                }
                None => self.pairs.push((key, value)),
            }
        }
        self.pairs
            .sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    }

    /// Consuming variant of [`merge`](Self::merge).
    pub fn merged<K, V>(mut self, overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.merge(overrides);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate the pairs, longest key first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Translate a server-side mask into the client-side dialect.
    pub fn translate(&self, mask: &str) -> String {
        let mut result = String::with_capacity(mask.len() * 2);
        let mut rest = mask;
        while !rest.is_empty() {
            if let Some((key, value)) = self
                .pairs
                .iter()
                .find(|(k, _)| rest.starts_with(k.as_str()))
            {
                result.push_str(value);
                rest = &rest[key.len()..];
                continue;
            }
            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                result.push(ch);
            }
            rest = chars.as_str();
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let converter = JsConverter::default();
        assert_eq!(converter.len(), 19);
        assert_eq!(converter.get("Y"), Some("yyyy"));
        assert_eq!(converter.get("M"), None);
    }

    #[test]
    fn test_replacement_not_rescanned() {
        // "j" -> "d" must not be translated again into "dd"
        let converter = JsConverter::default();
        assert_eq!(converter.translate("j"), "d");
        assert_eq!(converter.translate("d"), "dd");
    }

    #[test]
    fn test_longest_key_wins() {
        let converter = JsConverter::default().merged([("dS", "dd'th'")]);
        assert_eq!(converter.translate("dS.m"), "dd'th'.mm");
        assert_eq!(converter.translate("d.m"), "dd.mm");
    }

    #[test]
    fn test_merge_overwrites_and_retains() {
        let converter = JsConverter::default().merged([("Y", "YYYY"), ("M", "M")]);
        assert_eq!(converter.get("Y"), Some("YYYY"));
        assert_eq!(converter.get("M"), Some("M"));
        assert_eq!(converter.get("j"), Some("d"));
        assert_eq!(converter.len(), 20);
    }

    #[test]
    fn test_empty_key_ignored() {
        let converter = JsConverter::empty().merged([("", "x")]);
        assert!(converter.is_empty());
        assert_eq!(converter.translate("abc"), "abc");
    }

    #[test]
    fn test_multibyte_passthrough() {
        let converter = JsConverter::default();
        assert_eq!(converter.translate("Y年n月j日"), "yyyy年m月d日");
    }

    #[test]
    fn test_shared_default_is_shared() {
        let a = JsConverter::shared_default();
        let b = JsConverter::shared_default();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
