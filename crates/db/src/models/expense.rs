//! Expense DTOs.

use serde::Deserialize;
use tourdesk_core::records::ExpenseCategory;
use tourdesk_core::types::{Date, Money, RecordId};
use validator::Validate;

/// DTO for recording an expense.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExpense {
    /// Must name an existing tour when present.
    pub tour_id: Option<RecordId>,
    pub category: ExpenseCategory,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "Amount must be greater than zero"))]
    pub amount: Money,
    pub date: Date,
}
