//! Task Detail Modal Component

use leptos::prelude::*;

use obras_core::{format_brl, Task};

use crate::components::StatusBadge;

#[component]
pub fn TaskDetailModal(task: RwSignal<Option<Task>>) -> impl IntoView {
    let close = move || task.set(None);

    let body = move || {
        task.get().map(|t| {
            let unit_price = t
                .unit_price()
                .map(|price| format!("{} / {}", format_brl(price), t.fields.unit.as_str()))
                .unwrap_or_else(|| "-".to_string());
            view! {
                <div class="modal-header">
                    <h2>{t.activity().to_string()}</h2>
                    <button type="button" class="modal-close-btn" on:click=move |_| close()>"×"</button>
                </div>
                <dl class="task-detail">
                    <dt>"Local"</dt>
                    <dd>{t.location().to_string()}</dd>
                    <dt>"Empreiteira"</dt>
                    <dd>{t.contractor().to_string()}</dd>
                    <dt>"Quantidade"</dt>
                    <dd>{format!("{} {}", t.fields.quantity.normalize(), t.fields.unit.as_str())}</dd>
                    <dt>"Valor"</dt>
                    <dd class="task-value">{format_brl(t.value())}</dd>
                    <dt>"Valor unitário"</dt>
                    <dd>{unit_price}</dd>
                    <dt>"Status"</dt>
                    <dd><StatusBadge status=t.status() /></dd>
                </dl>
            }
        })
    };

    view! {
        <Show when=move || task.with(|t| t.is_some())>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="modal task-detail-modal" on:click=|ev| ev.stop_propagation()>
                    {body}
                </div>
            </div>
        </Show>
    }
}
