//! Blocking browser acknowledgement, no-op on the server.

/// Show a blocking alert dialog in the browser.
#[cfg(feature = "hydrate")]
pub fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn notify(_message: &str) {}
