//! Obras Frontend App
//!
//! Site search on top, one expandable card per matching site below.

use leptos::prelude::*;
use reactive_stores::Store;

use obras_core::{SeedSource, TaskSource, ViewConfig};

use crate::components::{SearchBar, SiteCard};
use crate::context::{current_viewport, AppContext};
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let config = ViewConfig::default();

    // Sites come without tasks; each card loads its own on first expand
    let source = SeedSource::embedded()
        .unwrap_or_else(|err| {
            web_sys::console::error_1(&format!("[APP] Seed data unreadable: {}", err).into());
            SeedSource::default()
        })
        .lazy(true);
    let sites = source.sites().unwrap_or_else(|err| {
        web_sys::console::error_1(&format!("[APP] Failed to list sites: {}", err).into());
        Vec::new()
    });
    web_sys::console::log_1(&format!("[APP] Loaded {} sites", sites.len()).into());

    let store: AppStore = Store::new(AppState::new(sites));
    provide_context(store);

    // Viewport class follows window resizes
    let (viewport, set_viewport) = signal(current_viewport(&config));
    let resize = window_event_listener(leptos::ev::resize, move |_| {
        let class = current_viewport(&config);
        if viewport.get_untracked() != class {
            set_viewport.set(class);
        }
    });
    on_cleanup(move || resize.remove());

    provide_context(AppContext::new(config, viewport, source));

    let visible_sites = Memo::new(move |_| {
        let term = store.site_search().get();
        store
            .registry()
            .read()
            .search_sites(&term)
            .into_iter()
            .map(|site| site.id.clone())
            .collect::<Vec<_>>()
    });

    view! {
        <main class="app-layout">
            <header class="app-header">
                <h1>"Gerenciar Obras"</h1>
                <p class="app-subtitle">"Acompanhe tarefas e pagamentos de cada obra"</p>
            </header>

            <SearchBar />

            <div class="site-list">
                <For
                    each=move || visible_sites.get()
                    key=|id| id.clone()
                    children=move |id| view! { <SiteCard site_id=id /> }
                />
            </div>

            {move || visible_sites.with(|ids| ids.is_empty()).then(|| {
                let searching = store.site_search().with(|term| !term.trim().is_empty());
                view! {
                    <div class="empty-state">
                        <p class="empty-title">"Nenhuma obra encontrada"</p>
                        <p class="empty-hint">
                            {if searching { "Tente ajustar sua pesquisa" } else { "Não há obras cadastradas" }}
                        </p>
                    </div>
                }
            })}
        </main>
    }
}
