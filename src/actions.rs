//! User Actions
//!
//! One handler per gesture. Each issues its request, then hands the outcome
//! to `feedback` and applies the resulting effects.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, RowState};
use crate::dialog::confirm;
use crate::feedback;
use crate::models::ItemId;
use crate::present::{clear_all_prompt, complete_trip_prompt};
use crate::store::store_list_untracked;

/// Submit free text; `on_done` runs after the response, whatever it was
pub fn add_items(ctx: AppContext, text: String, on_done: impl FnOnce() + 'static) {
    spawn_local(async move {
        let result = ctx.api().add_item(&text).await;
        if let Ok(added) = &result {
            log::info!(
                "[ADD] {} added, {} skipped",
                added.added.len(),
                added.skipped.len()
            );
        }
        ctx.apply(feedback::add(result, &ctx.config()), None);
        on_done();
    });
}

pub fn toggle_item(ctx: AppContext, item_id: ItemId, row: RowState) {
    let Some(ticket) = ctx.issue_toggle(&item_id) else {
        return;
    };
    spawn_local(async move {
        let result = ctx.api().toggle_item(&item_id).await;
        if !ctx.accept_toggle(&item_id, ticket) {
            log::debug!("[TOGGLE] Dropped stale response for {}", item_id);
            return;
        }
        ctx.apply(feedback::toggle(result), Some(row));
    });
}

pub fn delete_item(ctx: AppContext, item_id: ItemId, row: RowState) {
    row.deleting.set(true);
    spawn_local(async move {
        let result = ctx.api().delete_item(&item_id).await;
        ctx.apply(feedback::delete(result, &ctx.config()), Some(row));
    });
}

pub fn clear_all(ctx: AppContext) {
    let Some(prompt) = clear_all_prompt(&store_list_untracked(&ctx.store)) else {
        return;
    };
    if !confirm(&prompt) {
        return;
    }
    spawn_local(async move {
        let result = ctx.api().clear_all().await;
        ctx.apply(feedback::clear_all(result), None);
    });
}

pub fn complete_trip(ctx: AppContext) {
    let Some(prompt) = complete_trip_prompt(&store_list_untracked(&ctx.store)) else {
        return;
    };
    if !confirm(&prompt) {
        return;
    }
    spawn_local(async move {
        let result = ctx.api().complete_trip().await;
        ctx.apply(feedback::complete_trip(result), None);
    });
}

pub fn copy_from_last_trip(ctx: AppContext) {
    spawn_local(async move {
        let result = ctx.api().copy_from_last_trip().await;
        ctx.apply(feedback::copy_from_last_trip(result), None);
    });
}
