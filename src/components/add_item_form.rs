//! Add Item Form Component
//!
//! Free-text input; the server splits it into items.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;

#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let (text, set_text) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let entered = text.get_untracked().trim().to_string();
        if entered.is_empty() {
            return;
        }

        set_busy.set(true);
        actions::add_items(ctx, entered, move || {
            set_text.set(String::new());
            set_busy.set(false);
            // Re-enable now so focus isn't refused by a still-disabled input
            if let Some(input) = input_ref.get_untracked() {
                input.set_disabled(false);
                let _ = input.focus();
            }
        });
    };

    view! {
        <form id="add-form" class="add-form" on:submit=submit>
            <input
                id="item-input"
                type="text"
                placeholder="Add items, e.g. \"milk, eggs and 2 avocados\""
                autocomplete="off"
                node_ref=input_ref
                prop:value=move || text.get()
                prop:disabled=move || busy.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn" disabled=move || busy.get()>"Add"</button>
        </form>
        <div id="loading" class=move || if busy.get() { "loading show" } else { "loading" }>
            <div class="spinner"></div>
            <span>"Adding items..."</span>
        </div>
    }
}
