// src/application/validation.rs
use crate::domain::errors::DomainResult;
use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::BTreeMap, fmt};
use utoipa::ToSchema;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const NULL_MESSAGE: &str = "This field may not be null.";
pub const NOT_A_STRING_MESSAGE: &str = "Not a valid string.";

/// Field name to the list of messages explaining why it was rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(" "))?;
        }
        Ok(())
    }
}

/// A single field of an incoming payload before validation.
///
/// Keeps "absent", "explicit null" and "wrong JSON type" apart so each can be
/// reported with its own message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValue {
    #[default]
    Missing,
    Null,
    Present(String),
    Invalid,
}

impl FieldValue {
    pub fn present(value: impl Into<String>) -> Self {
        Self::Present(value.into())
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Missing, Self::Present)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::String(s) => Self::Present(s),
            serde_json::Value::Number(n) => Self::Present(n.to_string()),
            _ => Self::Invalid,
        })
    }
}

/// Validates a field that must be supplied.
pub fn required<T>(
    errors: &mut FieldErrors,
    field: &str,
    value: FieldValue,
    parse: impl FnOnce(String) -> DomainResult<T>,
) -> Option<T> {
    match value {
        FieldValue::Missing => {
            errors.add(field, REQUIRED_MESSAGE);
            None
        }
        other => optional(errors, field, other, parse),
    }
}

/// Validates a field that may be omitted; `None` both when absent and when invalid.
pub fn optional<T>(
    errors: &mut FieldErrors,
    field: &str,
    value: FieldValue,
    parse: impl FnOnce(String) -> DomainResult<T>,
) -> Option<T> {
    match value {
        FieldValue::Missing => None,
        FieldValue::Null => {
            errors.add(field, NULL_MESSAGE);
            None
        }
        FieldValue::Invalid => {
            errors.add(field, NOT_A_STRING_MESSAGE);
            None
        }
        FieldValue::Present(raw) => match parse(raw) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                for message in err.messages() {
                    errors.add(field, message);
                }
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleTitle, EmailAddress};

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default)]
        value: FieldValue,
    }

    fn probe(json: &str) -> FieldValue {
        serde_json::from_str::<Probe>(json).unwrap().value
    }

    #[test]
    fn field_value_distinguishes_missing_null_and_types() {
        assert_eq!(probe("{}"), FieldValue::Missing);
        assert_eq!(probe(r#"{"value": null}"#), FieldValue::Null);
        assert_eq!(probe(r#"{"value": "x"}"#), FieldValue::present("x"));
        assert_eq!(probe(r#"{"value": 42}"#), FieldValue::present("42"));
        assert_eq!(probe(r#"{"value": true}"#), FieldValue::Invalid);
        assert_eq!(probe(r#"{"value": ["x"]}"#), FieldValue::Invalid);
    }

    #[test]
    fn required_reports_missing_fields() {
        let mut errors = FieldErrors::new();
        let title = required(&mut errors, "title", FieldValue::Missing, ArticleTitle::new);
        assert!(title.is_none());
        assert_eq!(errors.get("title").unwrap(), [REQUIRED_MESSAGE.to_string()]);
    }

    #[test]
    fn optional_skips_missing_but_rejects_null() {
        let mut errors = FieldErrors::new();
        assert!(optional(&mut errors, "title", FieldValue::Missing, ArticleTitle::new).is_none());
        assert!(errors.is_empty());

        optional(&mut errors, "title", FieldValue::Null, ArticleTitle::new);
        assert_eq!(errors.get("title").unwrap(), [NULL_MESSAGE.to_string()]);
    }

    #[test]
    fn domain_messages_are_keyed_by_field() {
        let mut errors = FieldErrors::new();
        optional(&mut errors, "email", FieldValue::present("nope"), EmailAddress::new);
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["email"]);
        assert_eq!(
            errors.get("email").unwrap(),
            ["Enter a valid email address.".to_string()]
        );
    }

    #[test]
    fn every_broken_constraint_is_reported() {
        let mut errors = FieldErrors::new();
        let long_and_malformed = format!("{}@@", "a".repeat(60));
        optional(&mut errors, "email", FieldValue::present(long_and_malformed), EmailAddress::new);
        assert_eq!(
            errors.get("email").unwrap(),
            [
                "Ensure this field has no more than 50 characters.".to_string(),
                "Enter a valid email address.".to_string(),
            ]
        );
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.add("title", REQUIRED_MESSAGE);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "title": [REQUIRED_MESSAGE] }));
        assert_eq!(errors.to_string(), "title: This field is required.");
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
