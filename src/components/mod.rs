//! UI Components
//!
//! Reusable Leptos components.

mod search_bar;
mod site_card;
mod site_filters;
mod term_autocomplete;
mod status_selector;
mod task_table;
mod pagination_controls;
mod task_form_modal;
mod payment_modal;
mod task_detail_modal;

pub use search_bar::SearchBar;
pub use site_card::SiteCard;
pub use site_filters::SiteFilters;
pub use term_autocomplete::TermAutocomplete;
pub use status_selector::{StatusBadge, StatusSelector};
pub use task_table::TaskTable;
pub use pagination_controls::PaginationControls;
pub use task_form_modal::TaskFormModal;
pub use payment_modal::PaymentModal;
pub use task_detail_modal::TaskDetailModal;
