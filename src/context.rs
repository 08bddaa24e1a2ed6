//! Application Context
//!
//! Shared handles provided via Leptos Context API: the snapshot store, the
//! toast banner, config, and the request sequencers that keep stale
//! responses from overwriting newer ones.

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::config::UiConfig;
use crate::feedback::{self, Toast, UiEffect};
use crate::models::ItemId;
use crate::sequence::{KeyedSequencer, Sequencer, Ticket};
use crate::store::{store_set_history, store_set_list, AppStore};
use crate::toast::ToastState;

/// Visual state owned by one rendered item row
#[derive(Clone, Copy)]
pub struct RowState {
    pub checked: RwSignal<bool>,
    pub deleting: RwSignal<bool>,
}

impl RowState {
    pub fn new(checked: bool) -> Self {
        Self {
            checked: RwSignal::new(checked),
            deleting: RwSignal::new(false),
        }
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub toast: RwSignal<ToastState>,
    config: StoredValue<UiConfig>,
    list_seq: StoredValue<Sequencer>,
    history_seq: StoredValue<Sequencer>,
    toggle_seq: StoredValue<KeyedSequencer<ItemId>>,
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

impl AppContext {
    pub fn new(store: AppStore, config: UiConfig) -> Self {
        Self {
            store,
            toast: RwSignal::new(ToastState::default()),
            config: StoredValue::new(config),
            list_seq: StoredValue::new(Sequencer::new()),
            history_seq: StoredValue::new(Sequencer::new()),
            toggle_seq: StoredValue::new(KeyedSequencer::default()),
        }
    }

    pub fn config(&self) -> UiConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> ApiClient {
        self.config.with_value(|c| ApiClient::new(c.api_base.clone()))
    }

    /// Fetch the list and replace the snapshot; failures become a toast
    pub async fn load_list(self) {
        let Some(ticket) = self.list_seq.try_update_value(|seq| seq.issue()) else {
            return;
        };

        match self.api().get_current_list().await {
            Ok(snapshot) => {
                if self.accept(self.list_seq, ticket) {
                    log::debug!("[LIST] Loaded {} items", snapshot.total_items);
                    store_set_list(&self.store, snapshot);
                } else {
                    log::debug!("[LIST] Dropped stale list response");
                }
            }
            Err(err) => self.apply(feedback::list_load_failed(&err), None),
        }
    }

    /// Fetch the history; failures are only logged
    pub async fn load_history(self) {
        let Some(ticket) = self.history_seq.try_update_value(|seq| seq.issue()) else {
            return;
        };

        match self.api().get_history().await {
            Ok(snapshot) => {
                if self.accept(self.history_seq, ticket) {
                    log::debug!("[HISTORY] Loaded {} trips", snapshot.total_trips);
                    store_set_history(&self.store, snapshot);
                }
            }
            Err(err) => log::error!("[HISTORY] Error loading history: {}", err),
        }
    }

    fn accept(&self, seq: StoredValue<Sequencer>, ticket: Ticket) -> bool {
        seq.try_update_value(|seq| seq.accept(ticket)).unwrap_or(false)
    }

    pub fn issue_toggle(&self, item_id: &ItemId) -> Option<Ticket> {
        self.toggle_seq
            .try_update_value(|seq| seq.issue(item_id.clone()))
    }

    /// False if a later toggle of the same item already landed
    pub fn accept_toggle(&self, item_id: &ItemId, ticket: Ticket) -> bool {
        self.toggle_seq
            .try_update_value(|seq| seq.accept(item_id, ticket))
            .unwrap_or(false)
    }

    pub fn show_toast(self, toast: Toast) {
        let Some(generation) = self.toast.try_update(|state| state.show(toast)) else {
            return;
        };
        let lifetime = self.config.with_value(|c| c.toast_lifetime);
        spawn_local(async move {
            sleep(lifetime).await;
            let _ = self.toast.try_update(|state| state.dismiss(generation));
        });
    }

    /// Run effects in order. Everything up to the first reload happens
    /// immediately; the rest waits for that reload to finish.
    pub fn apply(self, effects: Vec<UiEffect>, row: Option<RowState>) {
        let mut effects = effects.into_iter();
        while let Some(effect) = effects.next() {
            match effect {
                UiEffect::Toast(toast) => self.show_toast(toast),
                UiEffect::After(delay, later) => {
                    spawn_local(async move {
                        sleep(delay).await;
                        self.apply(later, row);
                    });
                }
                UiEffect::SetChecked(checked) => {
                    if let Some(row) = row {
                        let _ = row.checked.try_set(checked);
                    }
                }
                UiEffect::ClearDeleting => {
                    if let Some(row) = row {
                        let _ = row.deleting.try_set(false);
                    }
                }
                UiEffect::ReloadList => {
                    let rest: Vec<UiEffect> = effects.collect();
                    spawn_local(async move {
                        self.load_list().await;
                        self.apply(rest, row);
                    });
                    return;
                }
                UiEffect::ReloadHistory => {
                    let rest: Vec<UiEffect> = effects.collect();
                    spawn_local(async move {
                        self.load_history().await;
                        self.apply(rest, row);
                    });
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use any_spawner::Executor;
    use reactive_stores::Store;

    use super::*;
    use crate::api::ApiError;
    use crate::feedback::{DELETE_FAILED, TOGGLE_FAILED};
    use crate::store::AppState;

    // Spawned tasks are queued on the local pool and never polled, so only
    // the synchronous part of `apply` runs.
    fn setup() -> (Owner, AppContext) {
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.set();
        let ctx = AppContext::new(Store::new(AppState::default()), UiConfig::default());
        (owner, ctx)
    }

    #[test]
    fn test_delete_failure_restores_row() {
        let (_owner, ctx) = setup();
        let row = RowState::new(false);
        row.deleting.set(true);

        let effects = feedback::delete(Err(ApiError::Transport("offline".into())), &ctx.config());
        ctx.apply(effects, Some(row));

        assert!(!row.deleting.get_untracked());
        let toast = ctx.toast.get_untracked();
        assert_eq!(toast.message(), DELETE_FAILED);
        assert_eq!(toast.class(), "toast show error");
    }

    #[test]
    fn test_toggle_success_sets_checked_before_reload() {
        let (_owner, ctx) = setup();
        let row = RowState::new(false);

        ctx.apply(feedback::toggle(Ok(true)), Some(row));

        assert!(row.checked.get_untracked());
        assert_eq!(ctx.toast.get_untracked().message(), "");
    }

    #[test]
    fn test_toggle_failure_keeps_checked() {
        let (_owner, ctx) = setup();
        let row = RowState::new(true);

        ctx.apply(
            feedback::toggle(Err(ApiError::Decode("not json".into()))),
            Some(row),
        );

        assert!(row.checked.get_untracked());
        assert_eq!(ctx.toast.get_untracked().message(), TOGGLE_FAILED);
    }

    #[test]
    fn test_effects_after_reload_wait_for_it() {
        let (_owner, ctx) = setup();
        let row = RowState::new(false);

        ctx.apply(
            vec![
                UiEffect::SetChecked(true),
                UiEffect::ReloadList,
                UiEffect::Toast(Toast::success("Deleted: milk")),
                UiEffect::SetChecked(false),
            ],
            Some(row),
        );

        assert!(row.checked.get_untracked());
        assert_eq!(ctx.toast.get_untracked().message(), "");
    }

    #[test]
    fn test_row_effects_without_row_are_ignored() {
        let (_owner, ctx) = setup();
        ctx.apply(vec![UiEffect::SetChecked(true), UiEffect::ClearDeleting], None);
        assert_eq!(ctx.toast.get_untracked().message(), "");
    }
}
