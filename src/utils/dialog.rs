use web_sys::window;

/// `window.alert`. Sin ventana (tests nativos) solo se registra en el log.
pub fn alert(message: &str) {
    match window() {
        Some(win) => {
            let _ = win.alert_with_message(message);
        }
        None => log::warn!("⚠️ {}", message),
    }
}

/// `window.confirm`; `false` si no hay ventana
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
