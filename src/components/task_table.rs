//! Task Table Component
//!
//! Paginated task list. Wide layouts always get the table; narrow layouts
//! choose between cards, a compact list and the table.

use leptos::prelude::*;

use obras_core::{format_brl, paginate, PaginationCursor, Task, TaskView, ViewportClass};

use crate::components::{PaginationControls, StatusBadge};
use crate::context::use_app_context;

/// The slice of tasks currently on screen
#[derive(Debug, Clone, Default, PartialEq)]
struct PageView {
    items: Vec<Task>,
    current: usize,
    total_pages: usize,
    start_index: usize,
    end_index: usize,
    total_items: usize,
}

/// "10 m²" style quantity
fn quantity_label(task: &Task) -> String {
    format!("{} {}", task.fields.quantity.normalize(), task.fields.unit.as_str())
}

/// Edit, delete and pay buttons for one task
#[component]
fn TaskActions(
    task: Task,
    on_edit: Callback<Task>,
    on_delete: Callback<String>,
    on_pay: Callback<Task>,
) -> impl IntoView {
    let paid = task.is_paid();
    let for_edit = task.clone();
    let for_pay = task.clone();
    let task_id = task.id;

    view! {
        <div class="task-actions">
            <button
                type="button"
                class="edit-btn"
                title="Editar"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_edit.run(for_edit.clone());
                }
            >
                "✎"
            </button>
            <button
                type="button"
                class="pay-btn"
                title=if paid { "Já pago" } else { "Marcar como pago" }
                disabled=paid
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_pay.run(for_pay.clone());
                }
            >
                "$"
            </button>
            <button
                type="button"
                class="delete-btn"
                title="Excluir"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_delete.run(task_id.clone());
                }
            >
                "×"
            </button>
        </div>
    }
}

#[component]
pub fn TaskTable(
    tasks: Memo<Vec<Task>>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_pay: Callback<Task>,
    #[prop(into)] on_detail: Callback<Task>,
) -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config;
    let viewport = ctx.viewport;

    let (view_mode, set_view_mode) = signal(TaskView::default());
    let cursor = RwSignal::new(PaginationCursor::new());

    // Persist the reset so a later return to the old count starts at page 1 too
    Effect::new(move |_| {
        let count = tasks.with(|t| t.len());
        let mut next = cursor.get_untracked();
        if next.sync(count, view_mode.get(), viewport.get()) {
            cursor.set(next);
        }
    });

    let page = Memo::new(move |_| {
        let (mode, class) = (view_mode.get(), viewport.get());
        let size = config.page_size(class);
        tasks.with(|all| {
            let current = cursor.with(|c| c.page_for(all.len(), mode, class));
            let slice = paginate(all, current, size);
            PageView {
                items: slice.items.to_vec(),
                current,
                total_pages: slice.total_pages,
                start_index: slice.start_index,
                end_index: slice.end_index,
                total_items: all.len(),
            }
        })
    });

    let shown_view = move || match viewport.get() {
        ViewportClass::Wide => TaskView::Table,
        ViewportClass::Narrow => view_mode.get(),
    };

    let go_to = Callback::new(move |target: usize| {
        let total = page.with_untracked(|p| p.total_pages);
        let count = tasks.with_untracked(|t| t.len());
        let (mode, class) = (view_mode.get_untracked(), viewport.get_untracked());
        cursor.update(|c| {
            c.sync(count, mode, class);
            c.go_to(target, total);
        });
    });

    let rows = move || {
        let items = page.with(|p| p.items.clone());
        match shown_view() {
            TaskView::Table => view! {
                <table class="task-table">
                    <thead>
                        <tr>
                            <th>"Local"</th>
                            <th>"Atividade"</th>
                            <th>"Quantidade"</th>
                            <th>"Valor"</th>
                            <th>"Empreiteira"</th>
                            <th>"Status"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {items.into_iter().map(|task| {
                            let for_detail = task.clone();
                            let location = task.location().to_string();
                            let activity = task.activity().to_string();
                            let contractor = task.contractor().to_string();
                            let quantity = quantity_label(&task);
                            let value = format_brl(task.value());
                            let status = task.status();
                            view! {
                                <tr class="task-row" on:click=move |_| on_detail.run(for_detail.clone())>
                                    <td>{location}</td>
                                    <td>{activity}</td>
                                    <td>{quantity}</td>
                                    <td class="task-value">{value}</td>
                                    <td>{contractor}</td>
                                    <td><StatusBadge status=status /></td>
                                    <td>
                                        <TaskActions task=task on_edit=on_edit on_delete=on_delete on_pay=on_pay />
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            }.into_any(),
            TaskView::Cards => view! {
                <div class="task-cards">
                    {items.into_iter().map(|task| {
                        let for_detail = task.clone();
                        let location = task.location().to_string();
                        let activity = task.activity().to_string();
                        let contractor = task.contractor().to_string();
                        let quantity = quantity_label(&task);
                        let value = format_brl(task.value());
                        let status = task.status();
                        view! {
                            <div class="task-card" on:click=move |_| on_detail.run(for_detail.clone())>
                                <div class="task-card-header">
                                    <strong>{activity}</strong>
                                    <StatusBadge status=status />
                                </div>
                                <p class="task-card-location">{location}</p>
                                <p class="task-card-contractor">{contractor}</p>
                                <div class="task-card-footer">
                                    <span>{quantity}</span>
                                    <span class="task-value">{value}</span>
                                </div>
                                <TaskActions task=task on_edit=on_edit on_delete=on_delete on_pay=on_pay />
                            </div>
                        }
                    }).collect_view()}
                </div>
            }.into_any(),
            TaskView::List => view! {
                <ul class="task-list">
                    {items.into_iter().map(|task| {
                        let for_detail = task.clone();
                        let location = task.location().to_string();
                        let activity = task.activity().to_string();
                        let value = format_brl(task.value());
                        let status = task.status();
                        view! {
                            <li class="task-list-item" on:click=move |_| on_detail.run(for_detail.clone())>
                                <div class="task-list-main">
                                    <span class="task-list-activity">{activity}</span>
                                    <span class="task-list-location">{location}</span>
                                </div>
                                <span class="task-value">{value}</span>
                                <StatusBadge status=status />
                                <TaskActions task=task on_edit=on_edit on_delete=on_delete on_pay=on_pay />
                            </li>
                        }
                    }).collect_view()}
                </ul>
            }.into_any(),
        }
    };

    view! {
        <div class="task-table-wrapper">
            <Show when=move || viewport.get() == ViewportClass::Narrow>
                <div class="view-mode-selector">
                    {TaskView::ALL.iter().map(|&mode| view! {
                        <button
                            type="button"
                            class=move || if view_mode.get() == mode { "view-mode-btn active" } else { "view-mode-btn" }
                            on:click=move |_| set_view_mode.set(mode)
                        >
                            {mode.label()}
                        </button>
                    }).collect_view()}
                </div>
            </Show>

            {rows}

            <PaginationControls
                current=Signal::derive(move || page.with(|p| p.current))
                total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                start_index=Signal::derive(move || page.with(|p| p.start_index))
                end_index=Signal::derive(move || page.with(|p| p.end_index))
                total_items=Signal::derive(move || page.with(|p| p.total_items))
                max_visible=Signal::derive(move || config.max_visible_pages(viewport.get()))
                on_change=go_to
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use obras_core::{PaymentStatus, TaskDraft, Unit};
    use rust_decimal::Decimal;

    #[test]
    fn test_quantity_label_drops_trailing_zeros() {
        let task = Task::new(
            "1-1",
            TaskDraft {
                location: "Térreo".to_string(),
                activity: "Pintura".to_string(),
                unit: Unit::SquareMeter,
                quantity: Decimal::new(1050, 2),
                value: Decimal::from(300),
                contractor: "ABC".to_string(),
                payment_status: PaymentStatus::Pending,
            },
        );
        assert_eq!(quantity_label(&task), "10.5 m²");
    }
}
