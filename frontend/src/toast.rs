//! Transient acknowledgment messages.
//!
//! Success feedback is a toast injected straight into the document body and
//! removed a few seconds later; errors stay in the screens' inline banners
//! so they persist until dismissed.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const TOAST_DURATION_MS: u32 = 3000;

/// Shows `message` at the bottom of the viewport and removes it again
/// after a few seconds. Quietly does nothing outside a browser context.
pub fn show_toast(message: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
            toast.set_text_content(Some(message));
            let toast: HtmlElement = toast.unchecked_into();
            let style = toast.style();
            style.set_property("position", "fixed").ok();
            style.set_property("bottom", "24px").ok();
            style.set_property("left", "50%").ok();
            style.set_property("transform", "translateX(-50%)").ok();
            style.set_property("background", "rgba(33, 33, 33, 0.92)").ok();
            style.set_property("color", "#fff").ok();
            style.set_property("padding", "10px 20px").ok();
            style.set_property("border-radius", "4px").ok();
            style.set_property("z-index", "10000").ok();
            style.set_property("font-family", "Arial, sans-serif").ok();

            if body.append_child(&toast).is_ok() {
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
                    if let Some(parent) = toast.parent_node() {
                        parent.remove_child(&toast).ok();
                    }
                });
            }
        }
    }
}
