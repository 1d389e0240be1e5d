//! Pagination Controls Component
//!
//! "Mostrando x-y de z" summary with previous/next and a window of page
//! buttons. Hidden when everything fits on one page.

use leptos::prelude::*;

use obras_core::visible_pages;

/// Human range of the current page, 1-based and inclusive
pub fn range_label(start_index: usize, end_index: usize, total_items: usize) -> String {
    if total_items == 0 {
        return "Nenhuma tarefa".to_string();
    }
    format!("Mostrando {}-{} de {} tarefas", start_index + 1, end_index, total_items)
}

#[component]
pub fn PaginationControls(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] start_index: Signal<usize>,
    #[prop(into)] end_index: Signal<usize>,
    #[prop(into)] total_items: Signal<usize>,
    #[prop(into)] max_visible: Signal<usize>,
    #[prop(into)] on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination">
                <span class="pagination-info">
                    {move || range_label(start_index.get(), end_index.get(), total_items.get())}
                </span>
                <div class="pagination-buttons">
                    <button
                        type="button"
                        class="page-btn"
                        disabled=move || current.get() <= 1
                        on:click=move |_| on_change.run(current.get_untracked().saturating_sub(1))
                    >
                        "‹"
                    </button>
                    {move || {
                        let active = current.get();
                        visible_pages(active, total_pages.get(), max_visible.get())
                            .map(|page| view! {
                                <button
                                    type="button"
                                    class=if page == active { "page-btn active" } else { "page-btn" }
                                    on:click=move |_| on_change.run(page)
                                >
                                    {page}
                                </button>
                            })
                            .collect_view()
                    }}
                    <button
                        type="button"
                        class="page-btn"
                        disabled=move || current.get() >= total_pages.get()
                        on:click=move |_| on_change.run(current.get_untracked() + 1)
                    >
                        "›"
                    </button>
                </div>
            </nav>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(20, 23, 23), "Mostrando 21-23 de 23 tarefas");
        assert_eq!(range_label(0, 5, 7), "Mostrando 1-5 de 7 tarefas");
        assert_eq!(range_label(0, 0, 0), "Nenhuma tarefa");
    }
}
