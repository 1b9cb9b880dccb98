//! Dashboard aggregation.
//!
//! A pure reduction over the current tours, customers and expenses. The
//! summary is recomputed from the store snapshot on every request; nothing
//! here is cached.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::records::{Customer, Expense, PaymentStatus, Tour};
use crate::types::{Money, RecordId};

/// Per-tour figures, one entry per tour in tour insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourStats {
    pub tour_id: RecordId,
    pub name: String,
    /// Tour price times the number of paid or partially paid customers.
    pub revenue: Money,
    pub booked_count: u32,
    pub max_capacity: u32,
    /// Customers referencing this tour.
    pub customer_count: u32,
    /// Customers whose booking is billed (paid or partial).
    pub paid_count: u32,
    /// Expenses attributed to this tour.
    pub expenses: Money,
    pub profit: Money,
    pub occupancy_pct: f64,
}

/// Whole-business summary rendered by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_tours: usize,
    pub total_customers: usize,
    pub total_revenue: Money,
    pub total_expenses: Money,
    pub profit: Money,
    /// Sum of recorded `amount_paid` across customers.
    pub amount_collected: Money,
    pub payment_breakdown: PaymentBreakdown,
    pub tour_stats: Vec<TourStats>,
}

/// Number of customers in each payment state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub pending: usize,
    pub partial: usize,
    pub paid: usize,
    pub cancelled: usize,
}

impl PaymentBreakdown {
    fn count(&mut self, status: PaymentStatus) {
        match status {
            PaymentStatus::Pending => self.pending += 1,
            PaymentStatus::Partial => self.partial += 1,
            PaymentStatus::Paid => self.paid += 1,
            PaymentStatus::Cancelled => self.cancelled += 1,
        }
    }
}

#[derive(Default)]
struct TourTally {
    customers: u32,
    billed: u32,
    expenses: Money,
}

/// Percentage of seats booked, rounded to one decimal place.
pub fn occupancy_pct(booked: u32, capacity: u32) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    let pct = f64::from(booked) / f64::from(capacity) * 100.0;
    (pct * 10.0).round() / 10.0
}

/// Compute the dashboard summary over a full snapshot.
///
/// Customers and expenses that reference an unknown tour still count toward
/// the totals but contribute no per-tour revenue.
pub fn compute_dashboard_stats(
    tours: &[Tour],
    customers: &[Customer],
    expenses: &[Expense],
) -> DashboardSummary {
    let mut tallies: HashMap<&str, TourTally> = HashMap::with_capacity(tours.len());
    let mut payment_breakdown = PaymentBreakdown::default();
    let mut amount_collected = 0.0;

    for customer in customers {
        payment_breakdown.count(customer.payment_status);
        amount_collected += customer.amount_paid;

        let tally = tallies.entry(customer.tour_id.as_str()).or_default();
        tally.customers += 1;
        if customer.payment_status.is_billed() {
            tally.billed += 1;
        }
    }

    let mut total_expenses = 0.0;
    for expense in expenses {
        total_expenses += expense.amount;
        if let Some(tour_id) = expense.tour_id.as_deref() {
            tallies.entry(tour_id).or_default().expenses += expense.amount;
        }
    }

    let tour_stats: Vec<TourStats> = tours
        .iter()
        .map(|tour| {
            let tally = tallies.get(tour.tour_id.as_str());
            let (customer_count, paid_count, tour_expenses) = tally
                .map(|t| (t.customers, t.billed, t.expenses))
                .unwrap_or((0, 0, 0.0));
            let revenue = tour.price * f64::from(paid_count);
            TourStats {
                tour_id: tour.tour_id.clone(),
                name: tour.name.clone(),
                revenue,
                booked_count: tour.booked_count,
                max_capacity: tour.max_capacity,
                customer_count,
                paid_count,
                expenses: tour_expenses,
                profit: revenue - tour_expenses,
                occupancy_pct: occupancy_pct(tour.booked_count, tour.max_capacity),
            }
        })
        .collect();

    let total_revenue: Money = tour_stats.iter().map(|s| s.revenue).sum();

    DashboardSummary {
        total_tours: tours.len(),
        total_customers: customers.len(),
        total_revenue,
        total_expenses,
        profit: total_revenue - total_expenses,
        amount_collected,
        payment_breakdown,
        tour_stats,
    }
}
