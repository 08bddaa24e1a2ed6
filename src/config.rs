//! UI Configuration
//!
//! Presentation timings and the API location.

use std::time::Duration;

/// How long a toast stays visible
pub const TOAST_LIFETIME: Duration = Duration::from_millis(3000);
/// Delay before a follow-up warning toast, so it doesn't collide with the first
pub const WARNING_STAGGER: Duration = Duration::from_millis(2000);
/// Length of the row fade-out before the list reloads
pub const DELETE_ANIMATION: Duration = Duration::from_millis(300);

/// `<meta name="grocery-api-base" content="...">` overrides the API prefix
pub const API_BASE_META: &str = "grocery-api-base";

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Prefix prepended to every endpoint path; empty means same origin
    pub api_base: String,
    pub toast_lifetime: Duration,
    pub warning_stagger: Duration,
    pub delete_animation: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            toast_lifetime: TOAST_LIFETIME,
            warning_stagger: WARNING_STAGGER,
            delete_animation: DELETE_ANIMATION,
        }
    }
}

impl UiConfig {
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim().trim_end_matches('/').to_string();
        self
    }

    /// Read overrides from the host page, falling back to defaults
    pub fn from_document() -> Self {
        let config = Self::default();
        let base = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| {
                d.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"));

        match base {
            Some(base) => {
                log::info!("[CONFIG] API base from page: {}", base);
                config.with_api_base(&base)
            }
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_presentation_timings() {
        let config = UiConfig::default();
        assert_eq!(config.toast_lifetime, Duration::from_millis(3000));
        assert_eq!(config.warning_stagger, Duration::from_millis(2000));
        assert_eq!(config.delete_animation, Duration::from_millis(300));
        assert!(config.api_base.is_empty());
    }

    #[test]
    fn test_api_base_is_trimmed() {
        let config = UiConfig::default().with_api_base(" https://example.test/grocery/ ");
        assert_eq!(config.api_base, "https://example.test/grocery");
    }
}
