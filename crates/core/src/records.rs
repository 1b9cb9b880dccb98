//! Tour, customer and expense records.
//!
//! These are the flat records held by the store and consumed by the
//! dashboard and export modules. Create/update DTOs live in the `db` crate.

use serde::{Deserialize, Serialize};

use crate::types::{Date, Money, RecordId, Timestamp};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How travellers get to and around the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Flight,
    Train,
    Bus,
    Car,
    Cruise,
    FlightAndLocal,
    FlightAndBus,
    Other,
}

/// Where a customer's booking stands financially.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Partial,
    Paid,
    Cancelled,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Pending,
        PaymentStatus::Partial,
        PaymentStatus::Paid,
        PaymentStatus::Cancelled,
    ];

    /// Parse a form value, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Cancelled => "cancelled",
        }
    }

    /// Whether a booking in this state is billed at the full tour price.
    ///
    /// Partial payments count as fully billed.
    pub fn is_billed(self) -> bool {
        matches!(self, PaymentStatus::Paid | PaymentStatus::Partial)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parse a form value, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Transport,
    Accommodation,
    Food,
    Guides,
    Permits,
    Marketing,
    Other,
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A scheduled travel package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub tour_id: RecordId,
    pub name: String,
    pub destination: String,
    pub start_date: Date,
    pub end_date: Date,
    pub price: Money,
    pub transport_mode: TransportMode,
    pub description: String,
    pub max_capacity: u32,
    /// Maintained by the store; equals the number of customers on this tour.
    pub booked_count: u32,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Tour {
    pub fn is_full(&self) -> bool {
        self.booked_count >= self.max_capacity
    }
}

/// A traveller registered on exactly one tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: RecordId,
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
    pub pan_number: Option<String>,

    pub emergency_contact_name: String,
    pub emergency_contact_number: String,
    pub special_requirements: Option<String>,

    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub amount_paid: Money,
    pub payment_method: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Money spent running the business, optionally attributed to one tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub expense_id: RecordId,
    pub tour_id: Option<RecordId>,
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: Money,
    pub date: Date,
    pub created_at: Timestamp,
}
