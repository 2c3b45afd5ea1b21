use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Response, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Current URL fragment including the leading `#`, or empty.
#[must_use]
pub fn location_hash() -> Option<String> {
    window().and_then(|win| win.location().hash().ok())
}

#[must_use]
pub fn location_pathname() -> Option<String> {
    window().and_then(|win| win.location().pathname().ok())
}

#[must_use]
pub fn location_search() -> Option<String> {
    window().and_then(|win| win.location().search().ok())
}

/// Navigate by replacing the URL fragment. Fires `hashchange`.
pub fn set_hash(fragment: &str) {
    if let Some(win) = window() {
        if let Err(err) = win.location().set_hash(fragment) {
            log::warn!("could not set hash {fragment}: {}", js_error_message(&err));
        }
    }
}

/// Fetch a URL and return the raw response.
///
/// # Errors
/// Returns an error if no window is available or the request cannot be issued.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(win.fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// `hashchange` subscription, removed from the window on drop.
pub struct HashChangeListener {
    closure: Closure<dyn FnMut()>,
}

impl HashChangeListener {
    /// Call `on_change` with the new fragment whenever the hash changes.
    #[must_use]
    pub fn new(mut on_change: impl FnMut(String) + 'static) -> Option<Self> {
        let win = window()?;
        let closure = Closure::<dyn FnMut()>::new(move || {
            on_change(location_hash().unwrap_or_default());
        });
        win.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
            .map_err(|err| log::error!("hashchange listener: {}", js_error_message(&err)))
            .ok()?;
        Some(Self { closure })
    }
}

impl Drop for HashChangeListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win.remove_event_listener_with_callback(
                "hashchange",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
