//! Repository for expenses.

use chrono::Utc;
use tourdesk_core::records::Expense;
use tourdesk_core::validation::FieldError;
use validator::Validate;

use crate::error::StoreError;
use crate::models::expense::CreateExpense;
use crate::store::Store;

use super::new_id;

/// Provides create/read/delete operations for expenses.
pub struct ExpenseRepo;

impl ExpenseRepo {
    /// Record an expense. A supplied `tour_id` must name an existing tour.
    pub async fn create(pool: &Store, input: &CreateExpense) -> Result<Expense, StoreError> {
        input.validate()?;

        let tour_id = input
            .tour_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        let expense = Expense {
            expense_id: new_id(),
            tour_id,
            category: input.category,
            description: input.description.trim().to_string(),
            amount: input.amount,
            date: input.date,
            created_at: Utc::now(),
        };

        pool.mutate(|records| {
            if let Some(tour_id) = expense.tour_id.as_deref() {
                if records.tour(tour_id).is_none() {
                    return Err(StoreError::field(
                        "tour_id",
                        FieldError::reference(format!("Tour {tour_id} does not exist")),
                    ));
                }
            }
            records.expenses.push(expense.clone());
            Ok(())
        })
        .await?;

        tracing::debug!(
            expense_id = %expense.expense_id,
            tour_id = ?expense.tour_id,
            amount = expense.amount,
            "Expense recorded"
        );
        Ok(expense)
    }

    pub async fn find_by_id(pool: &Store, expense_id: &str) -> Option<Expense> {
        pool.read(|records| {
            records
                .expenses
                .iter()
                .find(|e| e.expense_id == expense_id)
                .cloned()
        })
        .await
    }

    /// Expenses in insertion order, optionally limited to one tour.
    pub async fn list(pool: &Store, tour_id: Option<&str>) -> Vec<Expense> {
        pool.read(|records| {
            records
                .expenses
                .iter()
                .filter(|e| tour_id.is_none() || e.tour_id.as_deref() == tour_id)
                .cloned()
                .collect()
        })
        .await
    }

    /// Delete an expense. Returns `true` if it existed.
    pub async fn delete(pool: &Store, expense_id: &str) -> Result<bool, StoreError> {
        let removed = pool
            .mutate(|records| {
                let before = records.expenses.len();
                records.expenses.retain(|e| e.expense_id != expense_id);
                Ok(records.expenses.len() != before)
            })
            .await?;

        if removed {
            tracing::debug!(expense_id, "Expense deleted");
        }
        Ok(removed)
    }
}
