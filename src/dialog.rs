//! Browser Dialogs

/// Blocking `window.confirm`; anything but an explicit OK counts as cancel
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
