//! User Notification
//!
//! Every failure surfaces exactly once per action: a blocking alert for the
//! user plus a console entry for diagnostics. The page itself never crashes.

use wasm_bindgen::JsValue;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Report a failed action.
pub fn error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
    alert(message);
}

/// Report a non-error outcome the user should still see, e.g. an empty
/// recipe listing.
pub fn info(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
    alert(message);
}
