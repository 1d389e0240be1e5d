//! Derived totals for the site summary bar

use rust_decimal::Decimal;

use crate::domain::{PaymentStatus, Task};

/// Sum of task values. Saturates instead of overflowing.
pub fn total_value(tasks: &[Task]) -> Decimal {
    tasks
        .iter()
        .fold(Decimal::ZERO, |acc, task| acc.saturating_add(task.value()))
}

/// Task count per payment status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub paid: usize,
    pub late: usize,
}

impl StatusCounts {
    pub fn of(tasks: &[Task]) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            match task.status() {
                PaymentStatus::Pending => counts.pending += 1,
                PaymentStatus::InProgress => counts.in_progress += 1,
                PaymentStatus::Paid => counts.paid += 1,
                PaymentStatus::Late => counts.late += 1,
            }
        }
        counts
    }

    pub fn get(&self, status: PaymentStatus) -> usize {
        match status {
            PaymentStatus::Pending => self.pending,
            PaymentStatus::InProgress => self.in_progress,
            PaymentStatus::Paid => self.paid,
            PaymentStatus::Late => self.late,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskDraft, Unit};

    fn task(value: i64, status: PaymentStatus) -> Task {
        Task::new(
            format!("t{}", value),
            TaskDraft {
                location: "Térreo".to_string(),
                activity: "Pintura".to_string(),
                unit: Unit::SquareMeter,
                quantity: Decimal::ONE,
                value: Decimal::from(value),
                contractor: "ABC".to_string(),
                payment_status: status,
            },
        )
    }

    #[test]
    fn test_totals() {
        let tasks = vec![
            task(100, PaymentStatus::Paid),
            task(250, PaymentStatus::Pending),
            task(50, PaymentStatus::Pending),
        ];
        assert_eq!(total_value(&tasks), Decimal::from(400));
        let counts = StatusCounts::of(&tasks);
        assert_eq!(counts.get(PaymentStatus::Pending), 2);
        assert_eq!(counts.paid, 1);
        assert_eq!(counts.late, 0);
        assert_eq!(total_value(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_total_saturates_instead_of_panicking() {
        let mut a = task(1, PaymentStatus::Pending);
        a.fields.value = Decimal::MAX;
        let mut b = task(2, PaymentStatus::Pending);
        b.fields.value = Decimal::MAX;
        assert_eq!(total_value(&[a, b]), Decimal::MAX);
    }
}
