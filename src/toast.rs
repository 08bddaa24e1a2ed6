//! Toast Banner State
//!
//! One banner shows the latest message. Every `show` starts a new
//! generation; a dismiss timer only hides the banner for its own generation.

use crate::feedback::Toast;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    current: Option<Toast>,
    visible: bool,
    generation: u64,
}

impl ToastState {
    /// Show a toast, returning the generation to pass to `dismiss`
    pub fn show(&mut self, toast: Toast) -> u64 {
        self.generation += 1;
        self.current = Some(toast);
        self.visible = true;
        self.generation
    }

    /// Hide the banner unless a newer toast replaced this one
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn message(&self) -> &str {
        self.current.as_ref().map(|t| t.message.as_str()).unwrap_or("")
    }

    /// The message stays in place while the banner fades out
    pub fn class(&self) -> String {
        match (&self.current, self.visible) {
            (Some(toast), true) => format!("toast show {}", toast.kind.class()),
            (Some(toast), false) => format!("toast {}", toast.kind.class()),
            (None, _) => "toast".to_string(),
        }
    }
}
