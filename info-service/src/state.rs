use crate::config::Config;
use tracing::debug;

/// Service name reported by /health and /api/info.
pub const SERVICE_NAME: &str = "info-service";

/// Port used when neither the config file nor PORT specifies one.
pub const DEFAULT_PORT: u16 = 8080;

pub struct AppState {
    // Fallback reported by /api/info when PORT is unset at request time.
    pub default_port: u16,
}

impl AppState {
    pub fn from_config(cfg: &Config) -> Self {
        let default_port = cfg.port.unwrap_or(DEFAULT_PORT);
        debug!("Default port resolved to {}", default_port);
        AppState { default_port }
    }
}

// The process environment is global, so tests that set or remove PORT and
// ENVIRONMENT serialize on this lock.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
