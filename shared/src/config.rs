use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_OPERATION_LATENCY_MS: u64 = 1000;
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 2200;
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = 3;

/// Timing and branding shared by the flows and the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub operation_latency_ms: u64,
    pub redirect_delay_ms: u64,
    pub toast_duration_ms: u64,
    pub max_visible_toasts: usize,
    pub app_name: String,
    /// `%s` is replaced by the page title.
    pub title_template: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            operation_latency_ms: DEFAULT_OPERATION_LATENCY_MS,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            max_visible_toasts: DEFAULT_MAX_VISIBLE_TOASTS,
            app_name: "comando.hub".to_string(),
            title_template: "%s | comando.hub".to_string(),
        }
    }
}

impl FlowConfig {
    pub fn operation_latency(&self) -> Duration {
        Duration::from_millis(self.operation_latency_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn title_for(&self, page: &str) -> String {
        if self.title_template.contains("%s") {
            self.title_template.replacen("%s", page, 1)
        } else {
            page.to_string()
        }
    }
}
