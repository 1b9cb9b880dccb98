//! Customer register export.
//!
//! Produces the CSV download offered next to the customer table. Column
//! order is fixed and every field is quoted.

use std::collections::HashMap;

use csv::{QuoteStyle, WriterBuilder};

use crate::records::{Customer, Tour};

pub const CUSTOMER_CSV_HEADER: [&str; 6] = [
    "Name",
    "Email",
    "Mobile",
    "Tour",
    "Payment Status",
    "Date of Birth",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output was not valid UTF-8")]
    Encoding,
}

/// Render `customers` as CSV, resolving tour names from `tours`.
///
/// A customer whose tour is missing is exported with the raw tour id.
pub fn customers_csv(customers: &[Customer], tours: &[Tour]) -> Result<String, ExportError> {
    let tour_names: HashMap<&str, &str> = tours
        .iter()
        .map(|t| (t.tour_id.as_str(), t.name.as_str()))
        .collect();

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(CUSTOMER_CSV_HEADER)?;
    for customer in customers {
        let tour = tour_names
            .get(customer.tour_id.as_str())
            .copied()
            .unwrap_or(customer.tour_id.as_str());
        let dob = customer.date_of_birth.format("%Y-%m-%d").to_string();
        writer.write_record([
            customer.full_name().as_str(),
            customer.email.as_str(),
            customer.mobile.as_str(),
            tour,
            customer.payment_status.as_str(),
            dob.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Csv(err.into_error().into()))?;
    String::from_utf8(bytes).map_err(|_| ExportError::Encoding)
}
