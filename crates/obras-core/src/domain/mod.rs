//! Domain Layer
//!
//! Core entities and business rules, independent of the UI.

mod entity;
mod format;
mod task;
mod work_site;

pub use entity::{DomainError, DomainResult, Entity};
pub use format::{format_brl, format_date};
pub use task::{amount_in_range, PaymentStatus, Task, TaskDraft, TaskField, TaskPatch, Unit, MAX_AMOUNT};
pub use work_site::WorkSite;
