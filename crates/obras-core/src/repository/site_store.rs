//! Site Store
//!
//! Owns every work-site and its tasks. All mutations go through here; filter
//! and pagination views are recomputed from it after each change.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::{DomainError, DomainResult, PaymentStatus, Task, TaskDraft, TaskPatch, WorkSite};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteStore {
    sites: Vec<WorkSite>,
    next_seq: u64,
}

impl SiteStore {
    pub fn new(sites: Vec<WorkSite>) -> Self {
        Self { sites, next_seq: 1 }
    }

    pub fn sites(&self) -> &[WorkSite] {
        &self.sites
    }

    pub fn site(&self, site_id: &str) -> Option<&WorkSite> {
        self.sites.iter().find(|s| s.id == site_id)
    }

    fn site_mut(&mut self, site_id: &str) -> DomainResult<&mut WorkSite> {
        self.sites
            .iter_mut()
            .find(|s| s.id == site_id)
            .ok_or_else(|| DomainError::site_not_found(site_id))
    }

    /// Sites whose name or description contains `term` (case-insensitive)
    pub fn search_sites(&self, term: &str) -> Vec<&WorkSite> {
        self.sites.iter().filter(|s| s.matches_search(term)).collect()
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.sites.iter().find_map(|s| s.task(task_id))
    }

    fn task_mut(&mut self, task_id: &str) -> DomainResult<&mut Task> {
        self.sites
            .iter_mut()
            .find_map(|s| s.task_mut(task_id))
            .ok_or_else(|| DomainError::task_not_found(task_id))
    }

    fn fresh_id(&mut self, site_id: &str) -> String {
        loop {
            let candidate = format!("{}-{}", site_id, self.next_seq);
            self.next_seq += 1;
            if self.find_task(&candidate).is_none() {
                return candidate;
            }
        }
    }

    /// Append a new task to the site under a fresh id
    pub fn add_task(&mut self, site_id: &str, draft: TaskDraft) -> DomainResult<Task> {
        if self.site(site_id).is_none() {
            warn!(site_id, "add_task on unknown site");
            return Err(DomainError::site_not_found(site_id));
        }
        draft.check()?;
        let id = self.fresh_id(site_id);
        let task = Task::new(id, draft);
        self.site_mut(site_id)?.tasks.push(task.clone());
        debug!(site_id, task_id = %task.id, "task added");
        Ok(task)
    }

    /// Merge `patch` into the task with `task_id` of site `site_id`.
    /// The task is left untouched when the merged result is invalid.
    pub fn update_task(&mut self, site_id: &str, task_id: &str, patch: TaskPatch) -> DomainResult<Task> {
        let site = self.site_mut(site_id)?;
        let task = site
            .task_mut(task_id)
            .ok_or_else(|| DomainError::task_not_found(task_id))?;
        let mut merged = task.clone();
        merged.apply(patch);
        merged.fields.check()?;
        *task = merged;
        debug!(site_id, task_id, "task updated");
        Ok(task.clone())
    }

    /// Remove the task from whichever site holds it
    pub fn delete_task(&mut self, task_id: &str) -> DomainResult<Task> {
        for site in &mut self.sites {
            if let Some(pos) = site.tasks.iter().position(|t| t.id == task_id) {
                let removed = site.tasks.remove(pos);
                debug!(site_id = %site.id, task_id, "task deleted");
                return Ok(removed);
            }
        }
        warn!(task_id, "delete_task on unknown task");
        Err(DomainError::task_not_found(task_id))
    }

    /// Set the status to paid. Idempotent.
    pub fn mark_paid(&mut self, task_id: &str) -> DomainResult<()> {
        let task = self.task_mut(task_id)?;
        task.fields.payment_status = PaymentStatus::Paid;
        debug!(task_id, "task marked paid");
        Ok(())
    }

    /// Batch form of [`mark_paid`](Self::mark_paid). Unknown and repeated
    /// ids are skipped; returns how many distinct tasks were found.
    pub fn mark_paid_many(&mut self, task_ids: &[&str]) -> usize {
        let mut seen = HashSet::new();
        task_ids
            .iter()
            .filter(|id| seen.insert(**id))
            .filter(|id| match self.mark_paid(id) {
                Ok(()) => true,
                Err(err) => {
                    warn!(%err, "batch payment skipped a task");
                    false
                }
            })
            .count()
    }

    /// Install the result of a task load for a site
    pub fn replace_tasks(&mut self, site_id: &str, tasks: Vec<Task>) -> DomainResult<()> {
        let site = self.site_mut(site_id)?;
        debug!(site_id, count = tasks.len(), "tasks replaced");
        site.tasks = tasks;
        Ok(())
    }
}
