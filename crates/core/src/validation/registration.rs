//! Customer registration form check.
//!
//! [`validate_registration`] evaluates every field of the form and reports
//! the complete error set; it never stops at the first failure. Both the
//! pre-submit endpoint and customer creation run it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::records::{Gender, PaymentStatus};
use crate::types::{Date, Money, RecordId};

use super::field::FieldError;
use super::required::{field_label, is_blank};
use super::{age, identity};

/// Fields that must be non-blank on the registration form.
pub const REQUIRED_CUSTOMER_FIELDS: &[&str] = &[
    "tour_id",
    "first_name",
    "last_name",
    "date_of_birth",
    "gender",
    "email",
    "mobile",
    "address",
    "city",
    "state",
    "pincode",
    "aadhaar_number",
    "emergency_contact_name",
    "emergency_contact_number",
];

/// Raw registration form as submitted. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerForm {
    pub tour_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub aadhaar_number: Option<String>,
    pub pan_number: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_number: Option<String>,
    pub special_requirements: Option<String>,
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    pub amount_paid: Option<Money>,
}

/// Field name -> first error found for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, FieldError>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `error` for `field` unless that field already has one.
    pub fn insert(&mut self, field: impl Into<String>, error: FieldError) {
        self.0.entry(field.into()).or_insert(error);
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

/// A registration that passed every check, with parsed and normalized
/// values ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRegistration {
    pub tour_id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
    pub gender: Gender,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub aadhaar_number: String,
    /// Uppercase.
    pub pan_number: Option<String>,
    pub emergency_contact_name: String,
    pub emergency_contact_number: String,
    pub special_requirements: Option<String>,
    pub payment_method: Option<String>,
    pub payment_status: PaymentStatus,
    pub amount_paid: Money,
}

impl CustomerForm {
    /// Build a form from a loosely typed JSON object.
    ///
    /// Text fields also accept numbers, and `amount_paid` also accepts a
    /// numeric string. A value of any other type is left out of the form
    /// and reported as a format error on its field.
    pub fn from_json(values: &Map<String, Value>) -> (Self, FormErrors) {
        let mut errors = FormErrors::new();

        let mut text = |name: &str| match values.get(name) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(_) => {
                errors.insert(
                    name,
                    FieldError::format(format!("{} must be text", field_label(name))),
                );
                None
            }
        };

        let mut form = CustomerForm {
            tour_id: text("tour_id"),
            first_name: text("first_name"),
            last_name: text("last_name"),
            date_of_birth: text("date_of_birth"),
            gender: text("gender"),
            email: text("email"),
            mobile: text("mobile"),
            address: text("address"),
            city: text("city"),
            state: text("state"),
            pincode: text("pincode"),
            aadhaar_number: text("aadhaar_number"),
            pan_number: text("pan_number"),
            emergency_contact_name: text("emergency_contact_name"),
            emergency_contact_number: text("emergency_contact_number"),
            special_requirements: text("special_requirements"),
            payment_method: text("payment_method"),
            payment_status: text("payment_status"),
            amount_paid: None,
        };

        form.amount_paid = match values.get("amount_paid") {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(value) => {
                let parsed = value
                    .as_str()
                    .and_then(|s| s.trim().parse::<Money>().ok())
                    .filter(|amount| amount.is_finite());
                if parsed.is_none() {
                    errors.insert(
                        "amount_paid",
                        FieldError::format("Amount paid must be a number"),
                    );
                }
                parsed
            }
        };

        (form, errors)
    }

    /// Raw values keyed by field name, as the required check sees them.
    pub fn values(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Run every check; on success return the parsed registration.
    pub fn validate(&self, today: Date) -> Result<ValidRegistration, FormErrors> {
        evaluate(self, today, FormErrors::new())
    }
}

/// Evaluate every rule of the registration form against `form`.
///
/// Returns an empty [`FormErrors`] when the form is acceptable.
pub fn validate_registration(form: &CustomerForm, today: Date) -> FormErrors {
    evaluate(form, today, FormErrors::new()).err().unwrap_or_default()
}

/// Check a registration submitted as a raw JSON object.
///
/// Type mismatches are reported alongside every other field error rather
/// than rejecting the submission outright.
pub fn validate_submission(
    values: &Map<String, Value>,
    today: Date,
) -> Result<ValidRegistration, FormErrors> {
    let (form, malformed) = CustomerForm::from_json(values);
    evaluate(&form, today, malformed)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().trim().to_string()
}

fn evaluate(
    form: &CustomerForm,
    today: Date,
    mut errors: FormErrors,
) -> Result<ValidRegistration, FormErrors> {
    // Presence first; a field missing here is not re-checked below.
    let values = form.values();
    for name in REQUIRED_CUSTOMER_FIELDS {
        if is_blank(values.get(*name)) {
            errors.insert(
                *name,
                FieldError::required(format!("{} is required", field_label(name))),
            );
        }
    }

    let mut record = |field: &str, result: Result<(), FieldError>| {
        if let Err(err) = result {
            errors.insert(field, err);
        }
    };

    if let Some(email) = present(&form.email) {
        record("email", identity::check_email(email));
    }
    if let Some(mobile) = present(&form.mobile) {
        record("mobile", identity::check_mobile(mobile));
    }
    if let Some(number) = present(&form.emergency_contact_number) {
        record("emergency_contact_number", identity::check_mobile(number));
    }
    if let Some(aadhaar) = present(&form.aadhaar_number) {
        record("aadhaar_number", identity::check_aadhaar(aadhaar));
    }
    if let Some(pan) = present(&form.pan_number) {
        record("pan_number", identity::check_pan(pan));
    }
    if let Some(pincode) = present(&form.pincode) {
        record("pincode", identity::check_pincode(pincode));
    }
    if let Some(amount) = form.amount_paid {
        if amount < 0.0 {
            record(
                "amount_paid",
                Err(FieldError::range("Amount paid cannot be negative")),
            );
        }
    }

    let gender = match present(&form.gender) {
        Some(raw) => {
            let parsed = Gender::parse(raw);
            if parsed.is_none() {
                record(
                    "gender",
                    Err(FieldError::format("Gender must be male, female or other")),
                );
            }
            parsed
        }
        None => None,
    };

    let payment_status = match present(&form.payment_status) {
        Some(raw) => PaymentStatus::parse(raw).unwrap_or_else(|| {
            record(
                "payment_status",
                Err(FieldError::format(
                    "Payment status must be pending, partial, paid or cancelled",
                )),
            );
            PaymentStatus::default()
        }),
        None => PaymentStatus::default(),
    };

    let date_of_birth = match present(&form.date_of_birth) {
        Some(raw) => match age::check_date_of_birth(raw, today) {
            Ok(dob) => Some(dob),
            Err(err) => {
                record("date_of_birth", Err(err));
                None
            }
        },
        None => None,
    };

    let (Some(date_of_birth), Some(gender), true) = (date_of_birth, gender, errors.is_empty())
    else {
        return Err(errors);
    };

    Ok(ValidRegistration {
        tour_id: trimmed(&form.tour_id),
        first_name: trimmed(&form.first_name),
        last_name: trimmed(&form.last_name),
        date_of_birth,
        gender,
        email: form.email.clone().unwrap_or_default(),
        mobile: form.mobile.clone().unwrap_or_default(),
        address: trimmed(&form.address),
        city: trimmed(&form.city),
        state: trimmed(&form.state),
        pincode: form.pincode.clone().unwrap_or_default(),
        aadhaar_number: form.aadhaar_number.clone().unwrap_or_default(),
        pan_number: present(&form.pan_number).map(identity::normalize_pan),
        emergency_contact_name: trimmed(&form.emergency_contact_name),
        emergency_contact_number: form.emergency_contact_number.clone().unwrap_or_default(),
        special_requirements: present(&form.special_requirements).map(str::to_string),
        payment_method: present(&form.payment_method).map(str::to_string),
        payment_status,
        amount_paid: form.amount_paid.unwrap_or(0.0),
    })
}
