use std::collections::BTreeSet;

use super::model::{Customer, Gender};

// ---------------------------------------------------------------------------
// Cleaning: drop outlier / incomplete records
// ---------------------------------------------------------------------------

/// Records with a spending score at or below this are dropped by [`clean`].
pub const MIN_SPENDING_SCORE: u32 = 5;
/// Records with an income (thousands) at or below this are dropped by [`clean`].
pub const MIN_ANNUAL_INCOME: u32 = 10;

/// Result of a cleaning pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOutcome {
    pub retained: Vec<Customer>,
    pub removed: usize,
}

/// Whether a record survives cleaning.
pub fn passes_clean(c: &Customer) -> bool {
    c.spending_score > MIN_SPENDING_SCORE && c.annual_income > MIN_ANNUAL_INCOME
}

/// Keep only records passing [`passes_clean`], preserving their order.
pub fn clean(customers: &[Customer]) -> CleanOutcome {
    let retained: Vec<Customer> = customers
        .iter()
        .filter(|c| passes_clean(c))
        .cloned()
        .collect();
    let removed = customers.len() - retained.len();
    CleanOutcome { retained, removed }
}

// ---------------------------------------------------------------------------
// Table filter: display-only narrowing in the data view
// ---------------------------------------------------------------------------

/// Which rows the data table shows. Never changes the dataset itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFilter {
    /// Genders to show. Empty means nothing is shown.
    pub genders: BTreeSet<Gender>,
    pub churned_only: bool,
}

impl Default for TableFilter {
    fn default() -> Self {
        Self {
            genders: Gender::ALL.into_iter().collect(),
            churned_only: false,
        }
    }
}

impl TableFilter {
    pub fn toggle_gender(&mut self, gender: Gender) {
        if !self.genders.remove(&gender) {
            self.genders.insert(gender);
        }
    }

    pub fn is_active(&self) -> bool {
        self.churned_only || self.genders.len() != Gender::ALL.len()
    }
}

/// Return indices of customers that pass the table filter, in order.
pub fn filtered_indices(customers: &[Customer], filter: &TableFilter) -> Vec<usize> {
    if filter.genders.is_empty() {
        return Vec::new();
    }
    customers
        .iter()
        .enumerate()
        .filter(|(_, c)| filter.genders.contains(&c.gender))
        .filter(|(_, c)| !filter.churned_only || c.churn)
        .map(|(i, _)| i)
        .collect()
}
