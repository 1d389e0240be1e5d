//! Task Form Modal Component
//!
//! Add and edit share one form. Errors are shown per field and cleared as
//! soon as that field is touched; edit cannot be submitted until something
//! actually changed.

use leptos::prelude::*;

use obras_core::{FormErrors, FormField, FormMode, PaymentStatus, TaskDraft, TaskForm, Unit};

use crate::components::StatusSelector;

/// Labelled text input bound to one form field
#[component]
fn FormInput(
    label: &'static str,
    field: FormField,
    form: RwSignal<TaskForm>,
    errors: RwSignal<FormErrors>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] numeric: bool,
) -> impl IntoView {
    let error = move || errors.with(|e| e.get(field).map(str::to_string));

    view! {
        <div class=move || if error().is_some() { "form-group has-error" } else { "form-group" }>
            <label>{label}</label>
            <input
                type="text"
                inputmode=if numeric { "decimal" } else { "text" }
                placeholder=placeholder
                prop:value=move || form.with(|f| f.text(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_text(field, value));
                    errors.update(|e| e.clear(field));
                }
            />
            {move || error().map(|message| view! { <span class="field-error">{message}</span> })}
        </div>
    }
}

/// Modal form for adding or editing a task
///
/// Open while `mode` is `Some`. A valid submit calls `on_save` with the mode
/// it was opened in and the validated draft, then closes.
#[component]
pub fn TaskFormModal(
    mode: RwSignal<Option<FormMode>>,
    #[prop(into)] on_save: Callback<(FormMode, TaskDraft)>,
) -> impl IntoView {
    let form = RwSignal::new(TaskForm::default());
    let errors = RwSignal::new(FormErrors::default());

    // Fresh form each time the modal opens
    Effect::new(move |_| {
        if let Some(current) = mode.get() {
            form.set(current.initial_form());
            errors.set(FormErrors::default());
        }
    });

    let can_submit = move || {
        mode.with(|m| {
            m.as_ref()
                .map(|m| form.with(|f| m.can_submit(f)))
                .unwrap_or(false)
        })
    };

    let close = move || {
        mode.set(None);
        errors.set(FormErrors::default());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = mode.get_untracked() else { return };
        match form.with_untracked(|f| f.validate()) {
            Ok(draft) => {
                if form.with_untracked(|f| current.can_submit(f)) {
                    on_save.run((current, draft));
                    close();
                }
            }
            Err(found) => errors.set(found),
        }
    };

    let is_edit = move || mode.with(|m| matches!(m, Some(FormMode::Edit(_))));

    view! {
        <Show when=move || mode.with(|m| m.is_some())>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{move || if is_edit() { "Editar Tarefa" } else { "Nova Tarefa" }}</h2>
                        <button type="button" class="modal-close-btn" on:click=move |_| close()>"×"</button>
                    </div>

                    <form class="task-form" on:submit=on_submit>
                        <FormInput label="Local" field=FormField::Location form=form errors=errors placeholder="Ex: Térreo - Hall" />
                        <FormInput label="Atividade" field=FormField::Activity form=form errors=errors placeholder="Ex: Pintura de paredes" />

                        <div class="form-row">
                            <div class="form-group">
                                <label>"Unidade"</label>
                                <select
                                    prop:value=move || form.with(|f| f.unit.as_str().to_string())
                                    on:change=move |ev| {
                                        if let Some(unit) = Unit::from_str(&event_target_value(&ev)) {
                                            form.update(|f| f.unit = unit);
                                        }
                                    }
                                >
                                    {Unit::ALL.iter().map(|&unit| view! {
                                        <option
                                            value=unit.as_str()
                                            selected=move || form.with(|f| f.unit == unit)
                                        >
                                            {unit.as_str()}
                                        </option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <FormInput label="Quantidade" field=FormField::Quantity form=form errors=errors placeholder="0" numeric=true />
                            <FormInput label="Valor (R$)" field=FormField::Value form=form errors=errors placeholder="0,00" numeric=true />
                        </div>

                        <FormInput label="Empreiteira" field=FormField::Contractor form=form errors=errors placeholder="Nome da empreiteira" />

                        <div class="form-group">
                            <label>"Status do Pagamento"</label>
                            <StatusSelector
                                current=Signal::derive(move || form.with(|f| f.payment_status))
                                on_change=move |status: PaymentStatus| form.update(|f| f.payment_status = status)
                            />
                        </div>

                        <div class="modal-actions">
                            <button type="button" class="cancel-btn" on:click=move |_| close()>"Cancelar"</button>
                            <button type="submit" class="primary-btn" disabled=move || !can_submit()>
                                {move || if is_edit() { "Salvar Alterações" } else { "Adicionar Tarefa" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
