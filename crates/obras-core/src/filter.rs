//! Filter Engine
//!
//! Derives the visible subset of a site's tasks from the user's selection:
//! a status set plus three independent lists of free-text terms.
//!
//! Matching is incremental: a term matches a field when every
//! whitespace-separated word of the term occurs, lowercased, somewhere in the
//! lowercased field. Case-insensitive but accent-sensitive.

use crate::domain::{PaymentStatus, Task, TaskField};

/// Every word of `term` appears as a substring of `text`.
/// Blank terms match everything.
pub fn matches_incremental(text: &str, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let target = text.to_lowercase();
    term.to_lowercase()
        .split_whitespace()
        .all(|word| target.contains(word))
}

/// `text` matches at least one term; an empty term list matches everything
pub fn matches_any(text: &str, terms: &[String]) -> bool {
    terms.is_empty() || terms.iter().any(|term| matches_incremental(text, term))
}

/// Stable filter over `tasks`. Empty groups impose no constraint; the
/// non-empty groups combine with AND.
pub fn apply_filters(
    tasks: &[Task],
    statuses: &[PaymentStatus],
    location_terms: &[String],
    contractor_terms: &[String],
    activity_terms: &[String],
) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| statuses.is_empty() || statuses.contains(&t.status()))
        .filter(|t| matches_any(t.location(), location_terms))
        .filter(|t| matches_any(t.contractor(), contractor_terms))
        .filter(|t| matches_any(t.activity(), activity_terms))
        .cloned()
        .collect()
}

/// Per-view filter state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub statuses: Vec<PaymentStatus>,
    pub locations: Vec<String>,
    pub contractors: Vec<String>,
    pub activities: Vec<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        apply_filters(tasks, &self.statuses, &self.locations, &self.contractors, &self.activities)
    }

    pub fn toggle_status(&mut self, status: PaymentStatus) {
        if let Some(pos) = self.statuses.iter().position(|s| *s == status) {
            self.statuses.remove(pos);
        } else {
            self.statuses.push(status);
        }
    }

    pub fn has_status(&self, status: PaymentStatus) -> bool {
        self.statuses.contains(&status)
    }

    pub fn terms(&self, field: TaskField) -> &[String] {
        match field {
            TaskField::Location => &self.locations,
            TaskField::Contractor => &self.contractors,
            TaskField::Activity => &self.activities,
        }
    }

    fn terms_mut(&mut self, field: TaskField) -> &mut Vec<String> {
        match field {
            TaskField::Location => &mut self.locations,
            TaskField::Contractor => &mut self.contractors,
            TaskField::Activity => &mut self.activities,
        }
    }

    /// Adds the trimmed term. Returns false for blank or duplicate terms.
    pub fn add_term(&mut self, field: TaskField, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        let terms = self.terms_mut(field);
        if terms.iter().any(|t| t == term) {
            return false;
        }
        terms.push(term.to_string());
        true
    }

    pub fn remove_term(&mut self, field: TaskField, term: &str) {
        self.terms_mut(field).retain(|t| t != term);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn active_count(&self) -> usize {
        self.statuses.len() + self.locations.len() + self.contractors.len() + self.activities.len()
    }

    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }
}

/// Distinct values of `field`, sorted
pub fn distinct_values(tasks: &[Task], field: TaskField) -> Vec<String> {
    let mut values: Vec<String> = tasks.iter().map(|t| field.of(t).to_string()).collect();
    values.sort();
    values.dedup();
    values
}

/// Distinct statuses present, in first-seen order
pub fn distinct_statuses(tasks: &[Task]) -> Vec<PaymentStatus> {
    let mut seen = Vec::new();
    for task in tasks {
        if !seen.contains(&task.status()) {
            seen.push(task.status());
        }
    }
    seen
}

/// Autocomplete candidates for a term input.
///
/// Blank input yields the first `limit` distinct values. Otherwise values
/// matching the input that are not already selected.
pub fn suggestions(
    tasks: &[Task],
    field: TaskField,
    input: &str,
    selected: &[String],
    limit: usize,
) -> Vec<String> {
    let values = distinct_values(tasks, field);
    if input.trim().is_empty() {
        return values.into_iter().take(limit).collect();
    }
    values
        .into_iter()
        .filter(|v| matches_incremental(v, input) && !selected.contains(v))
        .take(limit)
        .collect()
}
