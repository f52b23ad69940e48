//! Backend client construction and the blocking alert.

use lib_rewards::{ApiClient, ClientConfig, Result};

/// Build a client from the base URL baked in at compile time. Same-origin mode
/// resolves against the page's `window.location.origin`.
pub fn api_client() -> Result<ApiClient> {
    let config = ClientConfig::from_build_env();
    let origin = web_sys::window().and_then(|window| window.location().origin().ok());
    ApiClient::from_config(&config, origin.as_deref())
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window available for alert: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("Alert failed: {:?}", e);
    }
}
