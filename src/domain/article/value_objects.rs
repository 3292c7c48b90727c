use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use std::fmt;
use validator::ValidateEmail;

pub const TITLE_MAX_CHARS: usize = 100;
pub const AUTHOR_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 50;

const BLANK_MESSAGE: &str = "This field may not be blank.";
const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address.";
const INVALID_DATE_MESSAGE: &str = "Datetime has wrong format. Use one of these formats instead: YYYY-MM-DDThh:mm[:ss[.uuuuuu]][+HH:MM|-HH:MM|Z].";

/// `%#z` takes `+02:00`, `+0200`, `+02` and `Z`.
const OFFSET_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
];

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trims surrounding whitespace and rejects blank input. Every other broken
/// constraint is reported, length first.
fn bounded_text(
    value: String,
    max_chars: usize,
    check: impl FnOnce(&str) -> Option<&'static str>,
) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(BLANK_MESSAGE.into()));
    }

    let mut problems = Vec::new();
    if trimmed.chars().count() > max_chars {
        problems.push(format!(
            "Ensure this field has no more than {max_chars} characters."
        ));
    }
    if let Some(problem) = check(trimmed) {
        problems.push(problem.into());
    }

    if problems.is_empty() {
        Ok(trimmed.to_string())
    } else {
        Err(DomainError::invalid(problems))
    }
}

fn any_text(_: &str) -> Option<&'static str> {
    None
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), TITLE_MAX_CHARS, any_text).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), AUTHOR_MAX_CHARS, any_text).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), EMAIL_MAX_CHARS, |text| {
            (!text.to_string().validate_email()).then_some(INVALID_EMAIL_MESSAGE)
        })
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// RFC 3339 with a `Z` suffix. Sub-second values always carry six digits.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    let precision = if value.timestamp_subsec_micros() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    value.to_rfc3339_opts(precision, true)
}

/// Publication timestamp of an article, normalised to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArticleDate(DateTime<Utc>);

impl ArticleDate {
    pub fn from_datetime(value: DateTime<Utc>) -> Self {
        Self(value)
    }

    /// Parses ISO-8601 input. Offsets are honoured; naive values and bare
    /// dates are taken as UTC.
    pub fn parse(value: impl AsRef<str>) -> DomainResult<Self> {
        let value = value.as_ref().trim();

        if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(parsed.with_timezone(&Utc)));
        }

        for format in OFFSET_DATETIME_FORMATS {
            if let Ok(parsed) = DateTime::parse_from_str(value, format) {
                return Ok(Self(parsed.with_timezone(&Utc)));
            }
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
                return Ok(Self(naive.and_utc()));
            }
        }

        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| DomainError::Validation(INVALID_DATE_MESSAGE.into()))
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for ArticleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_timestamp(&self.0))
    }
}

impl From<ArticleDate> for DateTime<Utc> {
    fn from(value: ArticleDate) -> Self {
        value.0
    }
}
