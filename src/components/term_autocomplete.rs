//! Term Autocomplete Component
//!
//! Filter input for one task field. Entered terms become removable chips;
//! suggestions come from the distinct values of that field.

use leptos::prelude::*;

use obras_core::{suggestions, FilterSelection, Task, TaskField};

/// Shorten a chip label to `max_chars` characters plus an ellipsis
pub fn chip_label(term: &str, max_chars: usize) -> String {
    if term.chars().count() > max_chars {
        let head: String = term.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        term.to_string()
    }
}

/// Term input with chips and suggestions
///
/// Props:
/// - field: which task field the terms match against
/// - tasks: every task of the site, source of suggestions
/// - selection: the site's filter selection, updated in place
/// - chip_max_chars: truncate long chips (activities are verbose)
#[component]
pub fn TermAutocomplete(
    label: &'static str,
    placeholder: &'static str,
    field: TaskField,
    tasks: Memo<Vec<Task>>,
    selection: RwSignal<FilterSelection>,
    limit: usize,
    #[prop(optional)] chip_max_chars: Option<usize>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let (focused, set_focused) = signal(false);
    let (selected_idx, set_selected_idx) = signal(0usize);

    let candidates = move || {
        let input = input_value.get();
        selection.with(|sel| tasks.with(|all| suggestions(all, field, &input, sel.terms(field), limit)))
    };

    let add_term = move |term: String| {
        let mut added = false;
        selection.update(|sel| added = sel.add_term(field, &term));
        if added {
            set_input_value.set(String::new());
            set_selected_idx.set(0);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = candidates();
        match ev.key().as_str() {
            "Enter" => {
                ev.prevent_default();
                let typed = input_value.get();
                let sel = selected_idx.get();
                // An arrow-selected suggestion wins over the raw text
                match sugg.get(sel) {
                    Some(choice) if sel > 0 || typed.trim().is_empty() => add_term(choice.clone()),
                    _ => add_term(typed),
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            "Escape" => set_focused.set(false),
            _ => {}
        }
    };

    view! {
        <div class="term-filter">
            <label class="term-filter-label">{label}</label>

            <div class="term-chips">
                <For
                    each=move || selection.with(|sel| sel.terms(field).to_vec())
                    key=|term| term.clone()
                    children=move |term| {
                        let text = chip_label(&term, chip_max_chars.unwrap_or(usize::MAX));
                        let full = term.clone();
                        view! {
                            <span class="term-chip" title=full>
                                {text}
                                <button
                                    type="button"
                                    class="chip-remove-btn"
                                    on:click=move |_| selection.update(|sel| sel.remove_term(field, &term))
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>

            <div class="term-input-wrapper">
                <input
                    type="text"
                    placeholder=placeholder
                    autocomplete="off"
                    prop:value=move || input_value.get()
                    on:input=move |ev| {
                        set_input_value.set(event_target_value(&ev));
                        set_selected_idx.set(0);
                    }
                    on:focus=move |_| set_focused.set(true)
                    on:blur=move |_| set_focused.set(false)
                    on:keydown=on_keydown
                />

                {move || {
                    let sugg = candidates();
                    if !focused.get() || sugg.is_empty() {
                        view! { <div></div> }.into_any()
                    } else {
                        let selected = selected_idx.get();
                        view! {
                            <div class="autocomplete-list">
                                {sugg.into_iter().enumerate().map(|(i, value)| {
                                    let value_for_click = value.clone();
                                    view! {
                                        <button
                                            type="button"
                                            class=if i == selected { "autocomplete-item selected" } else { "autocomplete-item" }
                                            // mousedown fires before the input's blur
                                            on:mousedown=move |ev| {
                                                ev.prevent_default();
                                                add_term(value_for_click.clone());
                                            }
                                        >
                                            {value}
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_label_truncates_long_terms() {
        assert_eq!(chip_label("Instalação elétrica completa", 20), "Instalação elétrica ...");
        assert_eq!(chip_label("Pintura", 20), "Pintura");
    }

    #[test]
    fn test_chip_label_counts_characters_not_bytes() {
        assert_eq!(chip_label("ééééé", 5), "ééééé");
        assert_eq!(chip_label("éééééé", 5), "ééééé...");
    }
}
