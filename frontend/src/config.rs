use log::Level;
use shared::FlowConfig;

/// Build-time settings. Overrides are read when the bundle is compiled, e.g.
/// `PANEL_REDIRECT_DELAY_MS=500 trunk build`.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub flow: FlowConfig,
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = FlowConfig::default();

        Self {
            flow: FlowConfig {
                operation_latency_ms: parse_ms(
                    option_env!("PANEL_OPERATION_LATENCY_MS"),
                    defaults.operation_latency_ms,
                ),
                redirect_delay_ms: parse_ms(
                    option_env!("PANEL_REDIRECT_DELAY_MS"),
                    defaults.redirect_delay_ms,
                ),
                toast_duration_ms: parse_ms(
                    option_env!("PANEL_TOAST_DURATION_MS"),
                    defaults.toast_duration_ms,
                ),
                ..defaults
            },
            log_level: if cfg!(debug_assertions) {
                Level::Debug
            } else {
                Level::Info
            },
        }
    }
}

fn parse_ms(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
