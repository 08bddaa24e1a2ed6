//! Grocery List App
//!
//! Main application component: header, add form, categorized list, trip
//! controls and history.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{AddItemForm, GroceryList, HistoryPanel, ToastBanner};
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::store::{store_counts, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(store, UiConfig::from_document());

    // Provide context to all children
    provide_context(ctx);

    // Load list and history on mount
    Effect::new(move |_| {
        spawn_local(ctx.load_list());
        spawn_local(ctx.load_history());
    });

    let total_items = move || store_counts(&ctx.store).0;

    view! {
        <div class="container">
            <header class="header">
                <h1>"🛒 Grocery List"</h1>
                <div class="header-actions">
                    <span class="item-count-label">
                        <span id="item-count">{total_items}</span>
                        " items"
                    </span>
                    <button id="clear-all" class="clear-btn" on:click=move |_| actions::clear_all(ctx)>
                        "Clear All"
                    </button>
                </div>
            </header>

            <AddItemForm />

            <GroceryList />

            <div
                id="complete-trip-section"
                class="complete-trip-section"
                style:display=move || if total_items() == 0 { "none" } else { "block" }
            >
                <button
                    id="complete-trip-btn"
                    class="complete-trip-btn"
                    on:click=move |_| actions::complete_trip(ctx)
                >
                    "✓ Complete Trip"
                </button>
            </div>

            <HistoryPanel />
        </div>

        <ToastBanner />
    }
}
