// src/models/form.rs

use std::collections::HashMap;

use validator::ValidationErrors;

/// Raw `application/x-www-form-urlencoded` body, kept as ordered pairs so a
/// multi-select (`genres=Jazz&genres=Blues`) survives decoding.
#[derive(Debug, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value of `name`, trimmed; empty string if absent.
    pub fn text(&self, name: &str) -> String {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.trim().to_string())
            .unwrap_or_default()
    }

    /// Like `text`, but a blank value is `None`.
    pub fn optional(&self, name: &str) -> Option<String> {
        Some(self.text(name)).filter(|v| !v.is_empty())
    }

    /// Every non-blank value of `name`, in submission order.
    pub fn all(&self, name: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, v)| k == name && !v.trim().is_empty())
            .map(|(_, v)| v.trim().to_string())
            .collect()
    }

    /// HTML checkboxes are only sent when ticked ("y", "on", "true").
    pub fn checkbox(&self, name: &str) -> bool {
        matches!(
            self.text(name).to_ascii_lowercase().as_str(),
            "y" | "on" | "true" | "1"
        )
    }
}

/// Flattens validation errors into `field -> messages` for re-rendering a form.
pub fn error_messages(errors: &ValidationErrors) -> HashMap<String, Vec<String>> {
    let mut out: HashMap<String, Vec<String>> = HashMap::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| match &e.message {
                Some(msg) => msg.to_string(),
                None => e.code.to_string(),
            })
            .collect();
        out.insert(field.to_string(), messages);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn repeated_keys_are_collected() {
        let f = fields(&[("genres", "Jazz"), ("name", " Blue Note "), ("genres", "Blues")]);
        assert_eq!(f.all("genres"), vec!["Jazz", "Blues"]);
        assert_eq!(f.text("name"), "Blue Note");
        assert_eq!(f.optional("phone"), None);
    }

    #[test]
    fn checkbox_values() {
        assert!(fields(&[("seeking", "y")]).checkbox("seeking"));
        assert!(!fields(&[]).checkbox("seeking"));
    }
}
