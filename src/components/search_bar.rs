//! Search Bar Component
//!
//! Filters the site list by name or description.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Buscar obra por nome ou descrição..."
                autocomplete="off"
                prop:value=move || store.site_search().get()
                on:input=move |ev| {
                    *store.site_search().write() = event_target_value(&ev);
                }
            />
            {move || store.site_search().with(|term| !term.is_empty()).then(|| view! {
                <button
                    type="button"
                    class="search-clear-btn"
                    title="Limpar busca"
                    on:click=move |_| store.site_search().write().clear()
                >
                    "×"
                </button>
            })}
        </div>
    }
}
