//! Obras Core
//!
//! Domain library behind the Obras task manager:
//! - domain: work-sites, tasks, formatting
//! - repository: the owned in-memory store and the source it loads from
//! - filter / pagination: derived views over a site's tasks
//! - validation / payment: the mutation boundary

pub mod config;
pub mod domain;
pub mod filter;
pub mod pagination;
pub mod payment;
pub mod repository;
pub mod totals;
pub mod validation;

pub use config::ViewConfig;
pub use domain::{
    amount_in_range, format_brl, format_date, DomainError, DomainResult, Entity, PaymentStatus, Task, TaskDraft, TaskField,
    TaskPatch, Unit, WorkSite, MAX_AMOUNT,
};
pub use filter::{apply_filters, distinct_statuses, suggestions, FilterSelection};
pub use pagination::{paginate, visible_pages, Page, PaginationCursor, TaskView, ViewportClass};
pub use payment::{PaymentConfirmation, PaymentScope, PaymentSummary};
pub use repository::{SeedSource, SiteStore, TaskSource};
pub use totals::{total_value, StatusCounts};
pub use validation::{FormErrors, FormField, FormMode, TaskForm};
