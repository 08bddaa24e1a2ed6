//! Action Feedback
//!
//! Turns the outcome of each user action into the UI effects that should
//! follow it. Nothing here touches the DOM; `AppContext::apply` runs the
//! effects.

use std::time::Duration;

use crate::api::{Added, ApiError};
use crate::config::UiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Warning }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Error }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEffect {
    Toast(Toast),
    /// Run the inner effects after a pause, without holding up the rest
    After(Duration, Vec<UiEffect>),
    ReloadList,
    ReloadHistory,
    /// Set the acting row's checkbox and strikethrough
    SetChecked(bool),
    /// Take the acting row out of its fade-out state
    ClearDeleting,
}

// Generic per-action failure messages
pub const LOAD_FAILED: &str = "Failed to load items";
pub const ADD_FAILED: &str = "Failed to add items";
pub const TOGGLE_FAILED: &str = "Failed to toggle item";
pub const DELETE_FAILED: &str = "Failed to delete item";
pub const CLEAR_FAILED: &str = "Failed to clear items";
pub const COMPLETE_FAILED: &str = "Failed to complete trip";
pub const COPY_FAILED: &str = "Failed to copy items";

/// Server-provided message for application failures, generic text otherwise
fn failure(err: &ApiError, fallback: &str) -> UiEffect {
    match err {
        ApiError::Rejected(_) => log::warn!("[ACTION] {}: {}", fallback, err),
        _ => log::error!("[ACTION] {}: {}", fallback, err),
    }
    UiEffect::Toast(Toast::error(err.server_message().unwrap_or(fallback)))
}

pub fn list_load_failed(err: &ApiError) -> Vec<UiEffect> {
    vec![failure(err, LOAD_FAILED)]
}

pub fn added_message(added: &[String]) -> Option<String> {
    match added {
        [] => None,
        [one] => Some(format!("Added: {}", one)),
        many => Some(format!("Added {} items", many.len())),
    }
}

pub fn skipped_message(skipped: &[String]) -> Option<String> {
    match skipped {
        [] => None,
        [one] => Some(format!("{} already in list", one)),
        many => Some(format!("{} items already in list", many.len())),
    }
}

pub fn add(result: Result<Added, ApiError>, config: &UiConfig) -> Vec<UiEffect> {
    let Added { added, skipped } = match result {
        Ok(outcome) => outcome,
        Err(err) => return vec![failure(&err, ADD_FAILED)],
    };

    let mut effects = Vec::new();
    if let Some(message) = added_message(&added) {
        effects.push(UiEffect::Toast(Toast::success(message)));
    }
    if let Some(message) = skipped_message(&skipped) {
        effects.push(UiEffect::After(
            config.warning_stagger,
            vec![UiEffect::Toast(Toast::warning(message))],
        ));
    }
    if added.is_empty() && skipped.is_empty() {
        effects.push(UiEffect::Toast(Toast::warning("No items found in text")));
    }
    effects.push(UiEffect::ReloadList);
    effects
}

pub fn toggle(result: Result<bool, ApiError>) -> Vec<UiEffect> {
    match result {
        Ok(checked) => vec![UiEffect::SetChecked(checked), UiEffect::ReloadList],
        Err(err) => vec![failure(&err, TOGGLE_FAILED)],
    }
}

pub fn delete(result: Result<String, ApiError>, config: &UiConfig) -> Vec<UiEffect> {
    match result {
        Ok(name) => vec![UiEffect::After(
            config.delete_animation,
            vec![
                UiEffect::ReloadList,
                UiEffect::Toast(Toast::success(format!("Deleted: {}", name))),
            ],
        )],
        Err(err) => vec![UiEffect::ClearDeleting, failure(&err, DELETE_FAILED)],
    }
}

pub fn clear_all(result: Result<(), ApiError>) -> Vec<UiEffect> {
    match result {
        Ok(()) => vec![
            UiEffect::ReloadList,
            UiEffect::Toast(Toast::success("All items cleared")),
        ],
        Err(err) => vec![failure(&err, CLEAR_FAILED)],
    }
}

pub fn complete_trip(result: Result<Option<String>, ApiError>) -> Vec<UiEffect> {
    match result {
        Ok(message) => vec![
            UiEffect::ReloadList,
            UiEffect::ReloadHistory,
            UiEffect::Toast(Toast::success(
                message.unwrap_or_else(|| "Shopping trip completed!".to_string()),
            )),
        ],
        Err(err) => vec![failure(&err, COMPLETE_FAILED)],
    }
}

pub fn copy_from_last_trip(result: Result<u32, ApiError>) -> Vec<UiEffect> {
    match result {
        Ok(copied) => {
            let message = if copied > 0 {
                format!("Copied {} items from last trip", copied)
            } else {
                "No new items to copy".to_string()
            };
            vec![UiEffect::ReloadList, UiEffect::Toast(Toast::success(message))]
        }
        Err(err) => vec![failure(&err, COPY_FAILED)],
    }
}
