//! SwipeSmart Popup App
//!
//! Main popup component: loads the persisted card selection and the active
//! tab URL on mount, then wires the selection list, the request form and
//! the result area together.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::chrome;
use crate::components::{CardList, RecommendForm, ResultView};
use crate::prefs;
use crate::store::{store_set_selection, AppState};
use crate::view::Presentation;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (current_url, set_current_url) = signal(String::new());
    let (presentation, set_presentation) = signal::<Option<Presentation>>(None);
    let (error, set_error) = signal(String::new());
    let (prefs_loaded, set_prefs_loaded) = signal(false);

    // Load persisted selection on mount; the list waits for this
    Effect::new(move |_| {
        spawn_local(async move {
            let selected = prefs::load().await;
            store_set_selection(&store, selected);
            set_prefs_loaded.set(true);
        });
    });

    // Resolve the active tab URL
    Effect::new(move |_| {
        spawn_local(async move {
            set_current_url.set(chrome::active_tab_url().await);
        });
    });

    view! {
        <div class="popup">
            <h1>"SwipeSmart"</h1>

            <div class="url-display">
                {move || {
                    let url = current_url.get();
                    if url.is_empty() {
                        "Could not detect URL".to_string()
                    } else {
                        format!("Current site: {}", url)
                    }
                }}
            </div>

            {move || if prefs_loaded.get() {
                view! { <CardList /> }.into_any()
            } else {
                view! { <div class="loading">"Loading cards..."</div> }.into_any()
            }}

            <RecommendForm
                current_url=current_url
                set_presentation=set_presentation
                set_error=set_error
            />

            <ResultView presentation=presentation error=error />
        </div>
    }
}
