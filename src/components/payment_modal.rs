//! Payment Modal Component
//!
//! Summary of what is about to be marked paid. Nothing is written until the
//! user confirms.

use leptos::prelude::*;

use obras_core::{format_brl, PaymentConfirmation, PaymentScope};

use crate::components::StatusBadge;

#[component]
pub fn PaymentModal(
    pending: RwSignal<Option<PaymentConfirmation>>,
    #[prop(into)] on_confirm: Callback<PaymentConfirmation>,
) -> impl IntoView {
    let cancel = move || pending.set(None);

    let confirm = move |_: leptos::ev::MouseEvent| {
        if let Some(confirmation) = pending.get_untracked() {
            pending.set(None);
            on_confirm.run(confirmation);
        }
    };

    let body = move || {
        pending.get().map(|confirmation| {
            let summary = confirmation.summary();
            let title = match confirmation.scope() {
                PaymentScope::Single => "Confirmar Pagamento",
                PaymentScope::Batch => "Pagamento em Lote",
            };
            let empty = summary.count == 0;

            view! {
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button type="button" class="modal-close-btn" on:click=move |_| cancel()>"×"</button>
                </div>

                <div class="payment-summary">
                    <div class="summary-row">
                        <span class="summary-label">"Tarefas"</span>
                        <strong>{summary.count}</strong>
                    </div>
                    <div class="summary-row">
                        <span class="summary-label">"Valor total"</span>
                        <strong>{format_brl(summary.total)}</strong>
                    </div>
                    <div class="summary-row">
                        <span class="summary-label">"Empreiteiras"</span>
                        <span>{summary.contractors.join(", ")}</span>
                    </div>
                    <div class="summary-row">
                        <span class="summary-label">"Locais"</span>
                        <span>{summary.locations.join(", ")}</span>
                    </div>
                </div>

                <ul class="payment-task-list">
                    {confirmation.tasks().iter().map(|task| view! {
                        <li class="payment-task">
                            <div class="payment-task-main">
                                <span class="payment-task-activity">{task.activity().to_string()}</span>
                                <span class="payment-task-location">{task.location().to_string()}</span>
                            </div>
                            <span class="task-value">{format_brl(task.value())}</span>
                            <StatusBadge status=task.status() />
                        </li>
                    }).collect_view()}
                </ul>

                {empty.then(|| view! { <p class="empty-hint">"Nenhuma tarefa para pagar"</p> })}

                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| cancel()>"Cancelar"</button>
                    <button type="button" class="primary-btn" disabled=empty on:click=confirm>
                        "Confirmar Pagamento"
                    </button>
                </div>
            }
        })
    };

    view! {
        <Show when=move || pending.with(|p| p.is_some())>
            <div class="modal-overlay" on:click=move |_| cancel()>
                <div class="modal payment-modal" on:click=|ev| ev.stop_propagation()>
                    {body}
                </div>
            </div>
        </Show>
    }
}
