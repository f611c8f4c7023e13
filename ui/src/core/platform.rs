//! Thin wrappers over browser APIs. Native builds get inert fallbacks.

#[cfg(not(target_arch = "wasm32"))]
use std::cell::Cell;

#[cfg(not(target_arch = "wasm32"))]
use dioxus::logger::tracing::info;

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static DOCUMENT_DARK: Cell<Option<bool>> = const { Cell::new(None) };
}

/// Suspend the current task for `ms` milliseconds.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        info!("alert: {message}");
    }
}

/// Toggle the `dark` marker class on `<html>` for CSS rules not driven by the inline palette.
pub fn set_document_dark_class(dark: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let _ = if dark {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DOCUMENT_DARK.with(|flag| flag.set(Some(dark)));
    }
}

/// Last value passed to [`set_document_dark_class`] on this thread. Native builds have no
/// document, so this stands in for the `<html>` class.
#[cfg(not(target_arch = "wasm32"))]
pub fn document_dark_class() -> Option<bool> {
    DOCUMENT_DARK.with(Cell::get)
}

/// Smooth scroll back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
