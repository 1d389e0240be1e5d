//! Site Card Component
//!
//! One work-site: header with name and task count, and when expanded the
//! totals, filters, task list and the modals that act on it. Tasks are
//! loaded the first time the card opens.

use leptos::prelude::*;
use leptos::task::spawn_local;

use obras_core::{
    format_brl, format_date, total_value, FilterSelection, FormMode, PaymentConfirmation, PaymentStatus,
    StatusCounts, Task, TaskDraft,
};

use crate::components::{PaymentModal, SiteFilters, TaskDetailModal, TaskFormModal, TaskTable};
use crate::context::use_app_context;
use crate::loader;
use crate::store::{
    store_add_task, store_confirm_payment, store_delete_task, store_replace_tasks, store_update_task,
    use_app_store, AppStateStoreFields,
};

#[component]
pub fn SiteCard(site_id: String) -> impl IntoView {
    let store = use_app_store();
    let source = use_app_context().source;
    let site_id = StoredValue::new(site_id);

    let site = Memo::new(move |_| {
        site_id.with_value(|id| store.registry().read().site(id).cloned())
    });
    let tasks = Memo::new(move |_| site.with(|s| s.as_ref().map(|s| s.tasks.clone()).unwrap_or_default()));

    let (expanded, set_expanded) = signal(false);
    let (loading, set_loading) = signal(false);
    let (loaded, set_loaded) = signal(false);

    let selection = RwSignal::new(FilterSelection::new());
    let filtered = Memo::new(move |_| tasks.with(|all| selection.with(|sel| sel.apply(all))));
    let total = Memo::new(move |_| filtered.with(|t| total_value(t)));
    let counts = Memo::new(move |_| filtered.with(|t| StatusCounts::of(t)));
    let has_tasks = Memo::new(move |_| tasks.with(|t| !t.is_empty()));
    let has_matches = Memo::new(move |_| filtered.with(|t| !t.is_empty()));

    let form_mode = RwSignal::new(None::<FormMode>);
    let payment = RwSignal::new(None::<PaymentConfirmation>);
    let detail = RwSignal::new(None::<Task>);

    // Load tasks on first expand
    let toggle = move |_: leptos::ev::MouseEvent| {
        let opening = !expanded.get_untracked();
        if opening && !loaded.get_untracked() && !loading.get_untracked() {
            set_loading.set(true);
            let source = source.clone();
            let id = site_id.get_value();
            spawn_local(async move {
                web_sys::console::log_1(&format!("[SITE] Loading tasks for site {}", id).into());
                match loader::load_site_tasks(&*source, &id).await {
                    Ok(loaded_tasks) => {
                        web_sys::console::log_1(&format!("[SITE] Loaded {} tasks", loaded_tasks.len()).into());
                        store_replace_tasks(&store, &id, loaded_tasks);
                        set_loaded.set(true);
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("[SITE] Failed to load tasks: {}", err).into());
                    }
                }
                set_loading.set(false);
            });
        }
        set_expanded.set(opening);
    };

    let on_save = Callback::new(move |(mode, draft): (FormMode, TaskDraft)| {
        site_id.with_value(|id| match mode {
            FormMode::Add => {
                store_add_task(&store, id, draft);
            }
            FormMode::Edit(task) => {
                store_update_task(&store, id, &task.id, draft.into());
            }
        });
    });

    let on_confirm_payment = Callback::new(move |confirmation: PaymentConfirmation| {
        let paid = store_confirm_payment(&store, confirmation);
        web_sys::console::log_1(&format!("[SITE] {} tasks marked paid", paid).into());
    });

    let on_edit = Callback::new(move |task: Task| form_mode.set(Some(FormMode::Edit(task))));
    let on_delete = Callback::new(move |task_id: String| store_delete_task(&store, &task_id));
    let on_pay = Callback::new(move |task: Task| {
        if let Some(confirmation) = PaymentConfirmation::single(&task) {
            payment.set(Some(confirmation));
        }
    });
    let on_detail = Callback::new(move |task: Task| detail.set(Some(task)));

    let header = move || {
        site.get().map(|s| {
            view! {
                <div class="site-card-title">
                    <h2>{s.name.clone()}</h2>
                    <p class="site-description">{s.description.clone()}</p>
                    <span class="site-start-date">{format!("Início: {}", format_date(s.start_date))}</span>
                </div>
            }
        })
    };

    view! {
        <section class=move || if expanded.get() { "site-card expanded" } else { "site-card" }>
            <div class="site-card-header" on:click=toggle>
                {header}
                <div class="site-card-meta">
                    <span class="site-task-count">
                        {move || {
                            if loaded.get() {
                                format!("{} tarefas", tasks.with(|t| t.len()))
                            } else {
                                "Clique para ver tarefas".to_string()
                            }
                        }}
                    </span>
                    {move || loading.get().then(|| view! { <span class="spinner"></span> })}
                    <span class="expand-icon">{move || if expanded.get() { "▲" } else { "▼" }}</span>
                </div>
            </div>

            <Show when=move || expanded.get()>
                {move || {
                    if loading.get() {
                        view! { <div class="loading-state">"Carregando tarefas..."</div> }.into_any()
                    } else {
                        view! {
                            <div class="site-card-body">
                                <div class="site-summary">
                                    <div class="summary-total">
                                        <span class="summary-label">"Valor total"</span>
                                        <strong>{move || format_brl(total.get())}</strong>
                                    </div>
                                    {PaymentStatus::ALL.iter().map(|&status| view! {
                                        <div class=format!("summary-count status-{}", status.as_str())>
                                            <span class="summary-label">{status.label()}</span>
                                            <strong>{move || counts.with(|c| c.get(status))}</strong>
                                        </div>
                                    }).collect_view()}
                                </div>

                                <SiteFilters tasks=tasks selection=selection />

                                <div class="tasks-header">
                                    <h3>"Tarefas"</h3>
                                    <div class="tasks-actions">
                                        <button
                                            type="button"
                                            class="pay-all-btn"
                                            disabled=move || filtered.with(|t| t.iter().all(|task| task.is_paid()))
                                            on:click=move |_| {
                                                payment.set(Some(filtered.with(|t| PaymentConfirmation::batch(t))));
                                            }
                                        >
                                            "Pagar filtradas"
                                        </button>
                                        <button
                                            type="button"
                                            class="add-task-btn"
                                            on:click=move |_| form_mode.set(Some(FormMode::Add))
                                        >
                                            "+ Nova Tarefa"
                                        </button>
                                    </div>
                                </div>

                                {move || {
                                    if !has_tasks.get() {
                                        view! {
                                            <div class="empty-state">
                                                <p class="empty-title">"Nenhuma tarefa encontrada"</p>
                                                <p class="empty-hint">"Adicione a primeira tarefa desta obra"</p>
                                            </div>
                                        }.into_any()
                                    } else if !has_matches.get() {
                                        view! {
                                            <div class="empty-state">
                                                <p class="empty-title">"Nenhuma tarefa encontrada"</p>
                                                <p class="empty-hint">"Tente ajustar os filtros"</p>
                                            </div>
                                        }.into_any()
                                    } else {
                                        view! {
                                            <TaskTable
                                                tasks=filtered
                                                on_edit=on_edit
                                                on_delete=on_delete
                                                on_pay=on_pay
                                                on_detail=on_detail
                                            />
                                        }.into_any()
                                    }
                                }}
                            </div>
                        }.into_any()
                    }
                }}
            </Show>

            <TaskFormModal mode=form_mode on_save=on_save />
            <PaymentModal pending=payment on_confirm=on_confirm_payment />
            <TaskDetailModal task=detail />
        </section>
    }
}
