//! Result View Component
//!
//! Paints a computed `Presentation`. All ranking and formatting happened in
//! `view::present`; this component only lays the model out.

use leptos::prelude::*;

use crate::view::Presentation;

#[component]
pub fn ResultView(
    presentation: ReadSignal<Option<Presentation>>,
    error: ReadSignal<String>,
) -> impl IntoView {
    view! {
        <div class="result-area">
            {move || {
                let error = error.get();
                if error.is_empty() {
                    None
                } else {
                    Some(view! { <div class="error">{error}</div> })
                }
            }}

            {move || presentation.get().map(|presentation| match presentation {
                Presentation::Empty { message } => view! {
                    <div class="card">
                        <div class="why">{message}</div>
                    </div>
                }.into_any(),

                Presentation::Recommendation(model) => view! {
                    <div class="card">
                        <div class="card-title">"🥇 " <strong>{model.best_card}</strong></div>

                        <div class="value-line">
                            <span class="value-label">"Estimated Miles: "</span>
                            <span class="value-strong">{model.miles_display}</span>
                        </div>

                        <div class="value-line">
                            <span class="value-label">"Estimated Cashback: "</span>
                            <span class="value-strong">{model.cashback_display}</span>
                        </div>

                        <div class="badges">
                            {model.badges.into_iter().map(|badge| view! {
                                <span class="badge">{badge}</span>
                            }).collect_view()}
                        </div>

                        <div class="why"><strong>"Why: "</strong>{model.reason}</div>

                        {model.annual_fee_warning.map(|warning| view! {
                            <div class="warning">{warning}</div>
                        })}

                        {(!model.leaderboard.is_empty()).then(|| view! {
                            <div class="leaderboard">
                                <div class="small-text">"Top cards:"</div>
                                {model.leaderboard.into_iter().map(|row| view! {
                                    <div class="leader-row">
                                        <div class="leader-left">
                                            <span>{row.icon}</span>
                                            <span>{row.card_name}</span>
                                        </div>
                                        <div>{row.value_display}</div>
                                    </div>
                                }).collect_view()}
                            </div>
                        })}
                    </div>
                }.into_any(),
            })}
        </div>
    }
}
