//! Identity and contact validation engine.
//!
//! Every rule lives here exactly once. The pre-submit endpoint and the
//! authoritative check performed before a customer is persisted both call
//! into this module, so their verdicts cannot drift apart.

pub mod age;
pub mod field;
pub mod identity;
pub mod registration;
pub mod required;
pub mod verhoeff;

pub use field::{check, validate, validate_on, FieldCheck, FieldError, FieldErrorKind, FieldKind};
pub use registration::{
    validate_registration, validate_submission, CustomerForm, FormErrors, ValidRegistration,
    REQUIRED_CUSTOMER_FIELDS,
};
pub use required::validate_required_fields;
