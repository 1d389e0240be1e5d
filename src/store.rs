//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every task
//! mutation goes through the helpers below so failures are logged in one
//! place and leave the state untouched.

use leptos::prelude::*;
use reactive_stores::Store;

use obras_core::{DomainError, PaymentConfirmation, SiteStore, Task, TaskDraft, TaskPatch, WorkSite};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All work-sites and their tasks
    pub registry: SiteStore,
    /// Search term over site name and description
    pub site_search: String,
}

impl AppState {
    pub fn new(sites: Vec<WorkSite>) -> Self {
        Self {
            registry: SiteStore::new(sites),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

fn log_failure(action: &str, err: &DomainError) {
    web_sys::console::error_1(&format!("[STORE] {} failed: {}", action, err).into());
}

// ========================
// Store Helper Functions
// ========================

/// Add a task to a site
pub fn store_add_task(store: &AppStore, site_id: &str, draft: TaskDraft) -> Option<Task> {
    match store.registry().write().add_task(site_id, draft) {
        Ok(task) => Some(task),
        Err(err) => {
            log_failure("add_task", &err);
            None
        }
    }
}

/// Merge edited fields into an existing task
pub fn store_update_task(store: &AppStore, site_id: &str, task_id: &str, patch: TaskPatch) -> Option<Task> {
    match store.registry().write().update_task(site_id, task_id, patch) {
        Ok(task) => Some(task),
        Err(err) => {
            log_failure("update_task", &err);
            None
        }
    }
}

/// Remove a task by ID
pub fn store_delete_task(store: &AppStore, task_id: &str) {
    if let Err(err) = store.registry().write().delete_task(task_id) {
        log_failure("delete_task", &err);
    }
}

/// Install freshly loaded tasks for a site
pub fn store_replace_tasks(store: &AppStore, site_id: &str, tasks: Vec<Task>) {
    if let Err(err) = store.registry().write().replace_tasks(site_id, tasks) {
        log_failure("replace_tasks", &err);
    }
}

/// Apply a confirmed payment; returns how many tasks were marked paid
pub fn store_confirm_payment(store: &AppStore, confirmation: PaymentConfirmation) -> usize {
    let binding = store.registry();
    let mut registry = binding.write();
    confirmation.confirm(&mut registry)
}
