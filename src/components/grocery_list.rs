//! Grocery List Component
//!
//! Renders the current list snapshot, or the empty-state placeholder.

use leptos::prelude::*;

use crate::components::CategorySection;
use crate::context::use_app_context;
use crate::present::{list_view, ListView};
use crate::store::store_list;

#[component]
pub fn GroceryList() -> impl IntoView {
    let ctx = use_app_context();
    let list = Memo::new(move |_| list_view(&store_list(&ctx.store)));
    let is_empty = move || list.with(ListView::is_empty);

    // Rebuilt from scratch on every snapshot
    let sections = move || match list.get() {
        ListView::Sections(sections) => sections
            .into_iter()
            .map(|section| view! { <CategorySection section=section /> })
            .collect_view()
            .into_any(),
        ListView::Empty => ().into_any(),
    };

    view! {
        <div id="empty-state" class=move || if is_empty() { "empty-state show" } else { "empty-state" }>
            <div class="empty-icon">"🛒"</div>
            <p>"Your list is empty"</p>
            <p class="empty-hint">"Add a few items above to get started"</p>
        </div>
        <div
            id="grocery-list-container"
            class=move || if is_empty() { "grocery-list-container hidden" } else { "grocery-list-container" }
        >
            {sections}
        </div>
    }
}
