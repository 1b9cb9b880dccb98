//! Field kinds, error taxonomy and the single-field entry points.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::types::Date;

use super::{age, identity};

/// The kinds of value the engine knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Aadhaar,
    Pan,
    Mobile,
    Email,
    DateOfBirth,
    Pincode,
}

impl FieldKind {
    /// Parse a URL segment such as `aadhaar` or `date-of-birth`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.to_ascii_lowercase().replace('-', "_").as_str() {
            "aadhaar" => Some(FieldKind::Aadhaar),
            "pan" => Some(FieldKind::Pan),
            "mobile" => Some(FieldKind::Mobile),
            "email" => Some(FieldKind::Email),
            "date_of_birth" | "dob" => Some(FieldKind::DateOfBirth),
            "pincode" => Some(FieldKind::Pincode),
            _ => None,
        }
    }
}

/// Why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A required value is missing or blank.
    Required,
    /// The value does not have the shape expected for its kind.
    Format,
    /// Well-formed Aadhaar digits that fail the Verhoeff check.
    Checksum,
    /// The value names a record that does not exist.
    Reference,
    /// The value is well-formed but outside the accepted range.
    Range,
}

/// A single user-correctable validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn required(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::Required, message)
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::Format, message)
    }

    pub fn checksum(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::Checksum, message)
    }

    pub fn reference(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::Reference, message)
    }

    pub fn range(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::Range, message)
    }
}

/// Verdict returned to UI callers: `{ "valid": bool, "reason": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<Result<(), FieldError>> for FieldCheck {
    fn from(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => FieldCheck {
                valid: true,
                kind: None,
                reason: None,
            },
            Err(err) => FieldCheck {
                valid: false,
                kind: Some(err.kind),
                reason: Some(err.message),
            },
        }
    }
}

/// Check `raw` as a value of `kind`, with `today` used by the age gate.
pub fn check(kind: FieldKind, raw: &str, today: Date) -> Result<(), FieldError> {
    match kind {
        FieldKind::Aadhaar => identity::check_aadhaar(raw),
        FieldKind::Pan => identity::check_pan(raw),
        FieldKind::Mobile => identity::check_mobile(raw),
        FieldKind::Email => identity::check_email(raw),
        FieldKind::Pincode => identity::check_pincode(raw),
        FieldKind::DateOfBirth => age::check_date_of_birth(raw, today).map(|_| ()),
    }
}

/// Like [`validate`] but with an explicit reference date.
pub fn validate_on(kind: FieldKind, raw: &str, today: Date) -> FieldCheck {
    check(kind, raw, today).into()
}

/// Classify `raw` as a value of `kind`, using the current UTC date.
pub fn validate(kind: FieldKind, raw: &str) -> FieldCheck {
    validate_on(kind, raw, Utc::now().date_naive())
}
