//! Task Loader
//!
//! Asynchronous fetch of a site's tasks. The embedded source answers
//! immediately, so a short delay stands in for network latency.

use gloo_timers::future::TimeoutFuture;

use obras_core::{Task, TaskSource};

const LOAD_DELAY_MS: u32 = 400;

pub async fn load_site_tasks(source: &impl TaskSource, site_id: &str) -> Result<Vec<Task>, String> {
    TimeoutFuture::new(LOAD_DELAY_MS).await;
    source.load_tasks(site_id).await.map_err(|e| e.to_string())
}
