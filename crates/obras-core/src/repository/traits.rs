//! Repository Layer - Core Traits
//!
//! The asynchronous boundary for fetching a site's tasks on demand.
//! The UI runs on a single thread, so futures need not be `Send`.

use async_trait::async_trait;

use crate::domain::{DomainResult, Task, WorkSite};

/// Source of work-sites and their tasks
#[async_trait(?Send)]
pub trait TaskSource {
    /// Initial snapshot of sites. Tasks may be left empty for lazy loading.
    fn sites(&self) -> DomainResult<Vec<WorkSite>>;

    /// Load the tasks of one site
    async fn load_tasks(&self, site_id: &str) -> DomainResult<Vec<Task>>;
}
