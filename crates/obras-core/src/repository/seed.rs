//! Seed Snapshot
//!
//! Static work-site data embedded at build time. Stands in for a backend:
//! the snapshot is served as-is, validated only by deserialization.

use async_trait::async_trait;
use tracing::debug;

use super::traits::TaskSource;
use crate::domain::{DomainError, DomainResult, Task, WorkSite};

const SEED_JSON: &str = include_str!("seed.json");

#[derive(Debug, Clone, Default)]
pub struct SeedSource {
    sites: Vec<WorkSite>,
    /// Serve sites without tasks and hand them out through `load_tasks`
    lazy: bool,
}

impl SeedSource {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let sites: Vec<WorkSite> =
            serde_json::from_str(json).map_err(|e| DomainError::Seed(e.to_string()))?;
        Ok(Self { sites, lazy: false })
    }

    /// The snapshot shipped with the crate
    pub fn embedded() -> DomainResult<Self> {
        Self::from_json(SEED_JSON)
    }

    pub fn lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }
}

#[async_trait(?Send)]
impl TaskSource for SeedSource {
    fn sites(&self) -> DomainResult<Vec<WorkSite>> {
        let mut sites = self.sites.clone();
        if self.lazy {
            for site in &mut sites {
                site.tasks.clear();
            }
        }
        Ok(sites)
    }

    async fn load_tasks(&self, site_id: &str) -> DomainResult<Vec<Task>> {
        let site = self
            .sites
            .iter()
            .find(|s| s.id == site_id)
            .ok_or_else(|| DomainError::site_not_found(site_id))?;
        debug!(site_id, count = site.tasks.len(), "seed tasks served");
        Ok(site.tasks.clone())
    }
}
