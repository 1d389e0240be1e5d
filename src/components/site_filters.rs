//! Site Filters Component
//!
//! Collapsible filter panel for a site's tasks: status toggles plus term
//! inputs for location, contractor and activity.

use leptos::prelude::*;

use obras_core::{distinct_statuses, FilterSelection, PaymentStatus, Task, TaskField};

use crate::components::TermAutocomplete;
use crate::context::use_app_context;

const ACTIVITY_CHIP_CHARS: usize = 20;

#[component]
pub fn SiteFilters(tasks: Memo<Vec<Task>>, selection: RwSignal<FilterSelection>) -> impl IntoView {
    let limit = use_app_context().config.suggestion_limit;
    let (open, set_open) = signal(false);

    // Present statuses, plus selected ones that no task has any more
    let statuses = Memo::new(move |_| {
        let mut shown = tasks.with(|t| distinct_statuses(t));
        selection.with(|sel| {
            for status in PaymentStatus::ALL {
                if sel.has_status(status) && !shown.contains(&status) {
                    shown.push(status);
                }
            }
        });
        shown
    });
    let active_count = move || selection.with(|sel| sel.active_count());

    view! {
        <div class="site-filters">
            <div class="filters-header">
                <button
                    type="button"
                    class="filters-toggle-btn"
                    on:click=move |_| set_open.update(|v| *v = !*v)
                >
                    "Filtros"
                    {move || (active_count() > 0).then(|| view! {
                        <span class="filter-count-badge">{active_count()}</span>
                    })}
                </button>
                {move || selection.with(|sel| sel.is_active()).then(|| view! {
                    <button
                        type="button"
                        class="filters-clear-btn"
                        on:click=move |_| selection.update(|sel| sel.clear())
                    >
                        "Limpar filtros"
                    </button>
                })}
            </div>

            <Show when=move || open.get()>
                <div class="filters-body">
                    <div class="status-filter">
                        <label class="term-filter-label">"Status"</label>
                        <div class="status-selector">
                            <For
                                each=move || statuses.get()
                                key=|status| *status
                                children=move |status| {
                                    let is_selected = move || selection.with(|sel| sel.has_status(status));
                                    view! {
                                        <button
                                            type="button"
                                            class=move || if is_selected() {
                                                format!("status-btn status-{} active", status.as_str())
                                            } else {
                                                format!("status-btn status-{}", status.as_str())
                                            }
                                            on:click=move |_| selection.update(|sel| sel.toggle_status(status))
                                        >
                                            {status.label()}
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </div>

                    <TermAutocomplete
                        label="Local"
                        placeholder="Filtrar por local..."
                        field=TaskField::Location
                        tasks=tasks
                        selection=selection
                        limit=limit
                    />
                    <TermAutocomplete
                        label="Empreiteira"
                        placeholder="Filtrar por empreiteira..."
                        field=TaskField::Contractor
                        tasks=tasks
                        selection=selection
                        limit=limit
                    />
                    <TermAutocomplete
                        label="Atividade"
                        placeholder="Filtrar por atividade..."
                        field=TaskField::Activity
                        tasks=tasks
                        selection=selection
                        limit=limit
                        chip_max_chars=ACTIVITY_CHIP_CHARS
                    />
                </div>
            </Show>
        </div>
    }
}
