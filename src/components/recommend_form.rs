//! Recommend Form Component
//!
//! Amount / mode / currency inputs and the submit flow. Submission is
//! refused locally when the tab URL is missing or the amount is not
//! positive; while a request is outstanding the button is disabled and the
//! busy flag is cleared after the await completes whatever the outcome.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::backend;
use crate::prefs;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::{self, Presentation};

/// Currency options; anything other than SGD is foreign-currency spend
const CURRENCIES: &[&str] = &["SGD", "USD", "EUR", "GBP", "JPY"];

#[component]
pub fn RecommendForm(
    current_url: ReadSignal<String>,
    set_presentation: WriteSignal<Option<Presentation>>,
    set_error: WriteSignal<String>,
) -> impl IntoView {
    let store = use_app_store();

    let (amount, set_amount) = signal(String::new());
    let (mode, set_mode) = signal(String::from("miles"));
    let (currency, set_currency) = signal(String::from("SGD"));

    let busy = move || store.busy().get();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.busy().get() {
            return;
        }
        set_error.set(String::new());
        set_presentation.set(None);

        // snapshot the selection and persist it, like every other edit
        let selected = store.selected().get();
        let persist = selected.clone();
        spawn_local(async move {
            prefs::save(&persist).await;
        });

        let amount = backend::parse_amount(&amount.get());
        let request = match backend::build_request(
            &current_url.get(),
            amount,
            &currency.get(),
            &mode.get(),
            &selected,
        ) {
            Ok(request) => request,
            Err(err) => {
                set_error.set(err.user_message().to_string());
                return;
            }
        };

        store.busy().set(true);
        spawn_local(async move {
            let outcome = backend::recommend(&request).await;
            // re-enable submission no matter how the request ended
            store.busy().set(false);
            match outcome {
                Ok(result) => set_presentation.set(Some(view::present(Some(&result)))),
                Err(detail) => {
                    web_sys::console::error_1(&detail.into());
                    set_error.set(backend::TRANSPORT_MESSAGE.to_string());
                }
            }
        });
    };

    view! {
        <form class="recommend-form" on:submit=on_submit>
            <div class="form-row">
                <label>"Amount"</label>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="e.g. 100"
                    prop:value=move || amount.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_amount.set(input.value());
                    }
                />
            </div>

            <div class="form-row">
                <label>"Mode"</label>
                <select
                    prop:value=move || mode.get()
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                        set_mode.set(select.value());
                    }
                >
                    <option value="miles">"Miles"</option>
                    <option value="cashback">"Cashback"</option>
                </select>
            </div>

            <div class="form-row">
                <label>"Currency"</label>
                <select
                    prop:value=move || currency.get()
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                        set_currency.set(select.value());
                    }
                >
                    {CURRENCIES.iter().map(|code| view! {
                        <option value=*code>{*code}</option>
                    }).collect_view()}
                </select>
            </div>

            <button type="submit" disabled=busy>"Which card should I use?"</button>

            {move || if busy() {
                view! { <div class="loading">"Checking..."</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </form>
    }
}
