//! Customer DTOs.
//!
//! Customers are created from a validated registration form
//! (`tourdesk_core::validation::ValidRegistration`). Only contact and
//! payment details can change afterwards; identity fields and the tour
//! reference are fixed at creation.

use serde::Deserialize;
use tourdesk_core::records::PaymentStatus;
use tourdesk_core::types::Money;
use tourdesk_core::validation::identity;
use tourdesk_core::validation::{FieldError, FormErrors};

/// DTO for updating a customer. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_number: Option<String>,
    pub special_requirements: Option<String>,
    pub payment_method: Option<String>,
    pub payment_status: Option<PaymentStatus>,
    pub amount_paid: Option<Money>,
}

impl UpdateCustomer {
    /// Check every supplied field with the same rules used at registration.
    pub fn field_errors(&self) -> FormErrors {
        let mut errors = FormErrors::new();

        let text_fields = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("emergency_contact_name", &self.emergency_contact_name),
        ];
        for (field, value) in text_fields {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                errors.insert(field, FieldError::required("Value cannot be blank"));
            }
        }

        let checks: [(&str, &Option<String>, fn(&str) -> Result<(), FieldError>); 4] = [
            ("email", &self.email, identity::check_email),
            ("mobile", &self.mobile, identity::check_mobile),
            ("pincode", &self.pincode, identity::check_pincode),
            (
                "emergency_contact_number",
                &self.emergency_contact_number,
                identity::check_mobile,
            ),
        ];
        for (field, value, rule) in checks {
            if let Some(raw) = value.as_deref() {
                if let Err(err) = rule(raw) {
                    errors.insert(field, err);
                }
            }
        }

        if self.amount_paid.is_some_and(|a| a < 0.0) {
            errors.insert(
                "amount_paid",
                FieldError::range("Amount paid cannot be negative"),
            );
        }

        errors
    }
}
