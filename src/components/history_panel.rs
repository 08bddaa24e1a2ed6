//! History Panel Component
//!
//! Recent completed trips plus the "copy from last trip" button. Hidden
//! entirely while there is no history.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::present::{history_view, TripView};
use crate::store::store_history;

#[component]
fn TripCard(trip: TripView) -> impl IntoView {
    view! {
        <div class="history-trip">
            <div class="trip-header">
                <div class="trip-date">
                    <strong>{trip.date}</strong>
                    <span class="trip-days-ago">{trip.relative}</span>
                </div>
                <div class="trip-stats">{trip.stats}</div>
            </div>
            <div class="trip-items">{trip.summary}</div>
        </div>
    }
}

#[component]
pub fn HistoryPanel() -> impl IntoView {
    let ctx = use_app_context();
    let trips = Memo::new(move |_| history_view(&store_history(&ctx.store)));
    let hidden = move || trips.with(Option::is_none);

    view! {
        <section
            id="history-section"
            class="history-section"
            style:display=move || if hidden() { "none" } else { "block" }
        >
            <div class="history-header">
                <h2>"Recent Trips"</h2>
                <button
                    id="copy-last-trip-btn"
                    class="copy-btn"
                    on:click=move |_| actions::copy_from_last_trip(ctx)
                >
                    "Copy from last trip"
                </button>
            </div>
            <div id="history-content">
                {move || {
                    trips
                        .get()
                        .unwrap_or_default()
                        .into_iter()
                        .map(|trip| view! { <TripCard trip=trip /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
