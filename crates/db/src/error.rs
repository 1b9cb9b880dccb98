use tourdesk_core::validation::{FieldError, FieldErrorKind, FormErrors};
use validator::ValidationErrors;

/// Errors raised by the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file could not be encoded or decoded.
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input rejected field by field (format, range, reference).
    #[error("Invalid input for {}", .0.field_names().join(", "))]
    Invalid(FormErrors),

    /// The write would break an invariant of the current records.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl StoreError {
    /// A single-field rejection.
    pub fn field(field: &str, error: FieldError) -> Self {
        let mut errors = FormErrors::new();
        errors.insert(field, error);
        StoreError::Invalid(errors)
    }
}

impl From<ValidationErrors> for StoreError {
    fn from(errors: ValidationErrors) -> Self {
        StoreError::Invalid(form_errors_from(&errors))
    }
}

/// Convert `validator` derive output into per-field errors.
pub fn form_errors_from(errors: &ValidationErrors) -> FormErrors {
    let mut out = FormErrors::new();
    for (field, list) in errors.field_errors() {
        let field = field.to_string();
        for err in list.iter() {
            let kind = match &*err.code {
                "length" => FieldErrorKind::Required,
                "range" => FieldErrorKind::Range,
                _ => FieldErrorKind::Format,
            };
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));
            out.insert(field.clone(), FieldError::new(kind, message));
        }
    }
    out
}
