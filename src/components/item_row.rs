//! Item Row Component
//!
//! One grocery item: checkbox, name, metadata line and delete button.

use leptos::prelude::*;

use crate::actions;
use crate::context::{use_app_context, RowState};
use crate::present::ItemRowView;

/// A single item row. Checked and deleting state live on the row so a
/// successful toggle shows before the list reload lands.
#[component]
pub fn ItemRow(row: ItemRowView) -> impl IntoView {
    let ctx = use_app_context();
    let state = RowState::new(row.checked);
    let ItemRowView { id, name, metadata, .. } = row;

    let dom_id = id.to_string();
    let toggle_id = id.clone();
    let delete_id = id;

    let row_class = move || {
        let mut class = String::from("grocery-item");
        if state.checked.get() {
            class.push_str(" checked");
        }
        if state.deleting.get() {
            class.push_str(" deleting");
        }
        class
    };

    view! {
        <li class=row_class data-item-id=dom_id>
            <div
                class="item-content"
                on:click=move |_| actions::toggle_item(ctx, toggle_id.clone(), state)
            >
                <div class=move || if state.checked.get() { "item-checkbox checked" } else { "item-checkbox" }>
                    <Show when=move || state.checked.get()>
                        <svg width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="3">
                            <polyline points="20 6 9 17 4 12"></polyline>
                        </svg>
                    </Show>
                </div>
                <div class="item-details">
                    <span class=move || if state.checked.get() { "item-name checked" } else { "item-name" }>
                        {name}
                    </span>
                    {metadata.map(|text| view! { <span class="item-metadata">{text}</span> })}
                </div>
            </div>
            <button
                class="delete-btn"
                title="Delete item"
                on:click=move |ev| {
                    ev.stop_propagation();
                    actions::delete_item(ctx, delete_id.clone(), state);
                }
            >
                "×"
            </button>
        </li>
    }
}
