//! Card List Component
//!
//! Collapsible card-selection section: checkboxes grouped by reward type,
//! per-card info affordance, select-all / select-none. Every mutation is
//! persisted immediately so a closed popup never loses an edit.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{self, CardMeta};
use crate::prefs;
use crate::store::{store_set_selection, store_toggle_card, use_app_store, AppStateStoreFields};

/// One checkbox row: issuer tag, name, info button showing the card's note
#[component]
fn CardRow(card: &'static CardMeta) -> impl IntoView {
    let store = use_app_store();
    let name = card.name;

    let checked = move || store.selected().read().contains(name);

    let on_toggle = move |_| {
        let snapshot = store_toggle_card(&store, name);
        spawn_local(async move {
            prefs::save(&snapshot).await;
        });
    };

    let show_note = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!("{}\n\n{}", card.name, card.note));
        }
    };

    view! {
        <div class="card-line">
            <input type="checkbox" prop:checked=checked on:change=on_toggle />
            <span class="card-logo">{card.issuer}</span>
            <label class="card-name">{card.name}</label>
            <button type="button" class="card-info-btn" title="Show card rules" on:click=show_note>
                "i"
            </button>
        </div>
    }
}

/// Card selection section with collapse toggle
#[component]
pub fn CardList() -> impl IntoView {
    let store = use_app_store();

    let collapsed = move || store.cards_collapsed().get();
    let toggle_collapsed = move |_| store.cards_collapsed().update(|v| *v = !*v);

    let set_all = move |enabled: bool| {
        let selection = prefs::set_all(enabled);
        store_set_selection(&store, selection.clone());
        spawn_local(async move {
            prefs::save(&selection).await;
        });
    };

    view! {
        <div class="card-section">
            <div class="card-toggle" on:click=toggle_collapsed>
                <span class="card-toggle-icon">{move || if collapsed() { "▶" } else { "▼" }}</span>
                " Your cards"
            </div>

            {move || if collapsed() {
                view! { <div></div> }.into_any()
            } else {
                view! {
                    <div class="card-list">
                        <div class="select-buttons">
                            <button type="button" on:click=move |_| set_all(true)>"Select all"</button>
                            <button type="button" on:click=move |_| set_all(false)>"Select none"</button>
                        </div>

                        {catalog::group_by_reward_type(catalog::CATALOG)
                            .into_iter()
                            .map(|(title, cards)| view! {
                                <div class="card-group">
                                    <div class="card-group-title">{title}</div>
                                    {cards.into_iter().map(|card| view! { <CardRow card=card /> }).collect_view()}
                                </div>
                            })
                            .collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
