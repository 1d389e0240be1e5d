//! Payment Confirmation
//!
//! Marking tasks as paid always goes through a confirmation that first shows
//! a summary. Confirming commits to the store; dropping it cancels.

use rust_decimal::Decimal;
use tracing::info;

use crate::domain::Task;
use crate::repository::SiteStore;
use crate::totals::total_value;

/// What the confirmation dialog shows
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSummary {
    pub count: usize,
    pub total: Decimal,
    /// Distinct contractors, first-seen order
    pub contractors: Vec<String>,
    /// Distinct locations, first-seen order
    pub locations: Vec<String>,
}

impl PaymentSummary {
    pub fn of(tasks: &[Task]) -> Self {
        let mut contractors: Vec<String> = Vec::new();
        let mut locations: Vec<String> = Vec::new();
        for task in tasks {
            if !contractors.iter().any(|c| c == task.contractor()) {
                contractors.push(task.contractor().to_string());
            }
            if !locations.iter().any(|l| l == task.location()) {
                locations.push(task.location().to_string());
            }
        }
        Self {
            count: tasks.len(),
            total: total_value(tasks),
            contractors,
            locations,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentScope {
    Single,
    Batch,
}

/// A pending mark-paid awaiting the user's confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentConfirmation {
    scope: PaymentScope,
    tasks: Vec<Task>,
}

impl PaymentConfirmation {
    /// Confirmation for one task. `None` when it is already paid.
    pub fn single(task: &Task) -> Option<Self> {
        if task.is_paid() {
            return None;
        }
        Some(Self {
            scope: PaymentScope::Single,
            tasks: vec![task.clone()],
        })
    }

    /// Confirmation for every currently filtered task of a site
    pub fn batch(filtered: &[Task]) -> Self {
        Self {
            scope: PaymentScope::Batch,
            tasks: filtered.to_vec(),
        }
    }

    pub fn scope(&self) -> PaymentScope {
        self.scope
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn summary(&self) -> PaymentSummary {
        PaymentSummary::of(&self.tasks)
    }

    /// Commit. Returns how many tasks were found and marked paid.
    pub fn confirm(self, store: &mut SiteStore) -> usize {
        let ids: Vec<&str> = self.tasks.iter().map(|t| t.id.as_str()).collect();
        let paid = store.mark_paid_many(&ids);
        info!(scope = ?self.scope, requested = ids.len(), paid, "payment confirmed");
        paid
    }
}
