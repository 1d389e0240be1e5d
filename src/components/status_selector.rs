//! Status Selector Component
//!
//! Payment status buttons and the colored badge shown on rows and cards.

use leptos::prelude::*;

use obras_core::PaymentStatus;

/// CSS class for a status badge
pub fn status_class(status: PaymentStatus) -> String {
    format!("status-badge status-{}", status.as_str())
}

#[component]
pub fn StatusBadge(status: PaymentStatus) -> impl IntoView {
    view! {
        <span class=status_class(status)>{status.label()}</span>
    }
}

/// One button per payment status; the current one is highlighted
#[component]
pub fn StatusSelector(
    #[prop(into)] current: Signal<PaymentStatus>,
    #[prop(into)] on_change: Callback<PaymentStatus>,
) -> impl IntoView {
    view! {
        <div class="status-selector">
            {PaymentStatus::ALL.iter().map(|&status| {
                let is_selected = move || current.get() == status;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() {
                            format!("status-btn status-{} active", status.as_str())
                        } else {
                            format!("status-btn status-{}", status.as_str())
                        }
                        on:click=move |_| on_change.run(status)
                    >
                        {status.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
